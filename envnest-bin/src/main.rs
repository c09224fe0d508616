use clap::Parser;
use envnest_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        println!("{}", envnest_cli::report(&e));
        std::process::exit(1);
    }
}
