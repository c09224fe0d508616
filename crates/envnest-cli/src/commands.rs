use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use envnest_config::{ConfigLoader, EnvParser, EnvnestConfig, Separators};
use envnest_core::{EnvnestError, Result};

use crate::input::parse_input;
use crate::output::{OutputFormat, render};

pub const USAGE: &str = "Usage: envnest '<JSON_ENV_VARS>'\nExample: envnest '{\"APP_DB__PORT\": \"5432\"}'";

/// Convert flat KEY_NAME__PART variables into a typed, nested tree
#[derive(Parser, Debug)]
#[command(name = "envnest", version, about, long_about = None)]
pub struct Cli {
    /// JSON object of string values, e.g. '{"APP_DB__PORT": "5432"}'
    input: Option<String>,

    /// Path to envnest.toml config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (e.g. debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all log output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Separator between nesting levels (default "__")
    #[arg(long)]
    nested_separator: Option<String>,

    /// Separator between words inside a level (default "_")
    #[arg(long)]
    segment_separator: Option<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.input.is_none() {
            return Err(EnvnestError::MissingInput);
        }

        let config_loader = ConfigLoader::load(self.config.as_deref())?;
        let config = config_loader.get();
        self.init_logging(&config);
        config_loader.log_diagnostics();

        let output = self.execute(&config)?;
        println!("{output}");
        Ok(())
    }

    /// Convert the input argument and render it, without touching logging or stdout.
    pub fn execute(&self, config: &EnvnestConfig) -> Result<String> {
        let raw = self.input.as_deref().ok_or(EnvnestError::MissingInput)?;
        let separators = self.separators(config)?;
        let pairs = parse_input(raw)?;
        debug!(
            pairs = pairs.len(),
            nested = separators.nested(),
            segment = separators.segment(),
            "parsing input"
        );
        let tree = EnvParser::with_separators(separators).parse(&pairs);
        render(&tree, self.format)
    }

    /// CLI flags take precedence over the config file.
    fn separators(&self, config: &EnvnestConfig) -> Result<Separators> {
        let nested = self
            .nested_separator
            .as_deref()
            .unwrap_or(&config.parser.nested_separator);
        let segment = self
            .segment_separator
            .as_deref()
            .unwrap_or(&config.parser.segment_separator);
        Separators::new(nested, segment)
    }

    fn init_logging(&self, config: &EnvnestConfig) {
        // Resolve log level: --verbose > --quiet > --log-level > config
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            self.log_level.as_deref().unwrap_or(&config.logging.level)
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

        // Logs go to stderr; stdout carries only the rendered tree.
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        let _ = match config.logging.format.as_str() {
            "json" => builder.json().with_target(true).try_init(),
            "compact" => builder.compact().with_target(false).try_init(),
            _ => builder.with_target(false).try_init(),
        };
    }
}

/// The message printed for a failed run.
pub fn report(err: &EnvnestError) -> String {
    match err {
        EnvnestError::MissingInput => USAGE.to_string(),
        other => format!("Error: {other}"),
    }
}
