use clap::ValueEnum;
use envnest_core::{Result, Tree};

/// How the converted tree is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON
    #[default]
    Json,
    /// TOML document
    Toml,
}

pub fn render(tree: &Tree, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tree)?),
        OutputFormat::Toml => Ok(toml::to_string_pretty(tree)?),
    }
}
