use serde::{Deserialize, Serialize};

use crate::path::{DEFAULT_NESTED_SEPARATOR, DEFAULT_SEGMENT_SEPARATOR, Separators};

/// Root configuration — maps to `envnest.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvnestConfig {
    pub parser: ParserConfig,
    pub logging: LoggingConfig,
}

// ── Parser ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Token separating nesting levels, e.g. `APP_DB__PORT`.
    pub nested_separator: String,
    /// Token separating words inside a level. Also nests.
    pub segment_separator: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            nested_separator: DEFAULT_NESTED_SEPARATOR.into(),
            segment_separator: DEFAULT_SEGMENT_SEPARATOR.into(),
        }
    }
}

impl ParserConfig {
    pub fn separators(&self) -> envnest_core::Result<Separators> {
        Separators::new(&self.nested_separator, &self.segment_separator)
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

// ── Validation ─────────────────────────────────────────────────

/// A single config validation issue.
#[derive(Debug)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub severity: WarningSeverity,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            WarningSeverity::Error => "error",
            WarningSeverity::Warning => "warning",
            WarningSeverity::Info => "info",
        };
        write!(f, "{}: {}: {}", label, self.field, self.message)?;
        if let Some(ref h) = self.hint {
            write!(f, "\n   ↳ {}", h)?;
        }
        Ok(())
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

impl EnvnestConfig {
    /// Validate the config and return a list of warnings/errors.
    /// Returns `Err` with all messages joined if any severity is Error.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, String> {
        let mut warnings = Vec::new();

        // ── Separators ───
        if self.parser.nested_separator.is_empty() {
            warnings.push(ConfigWarning {
                field: "parser.nested_separator".into(),
                message: "separator is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some(format!("The default is '{DEFAULT_NESTED_SEPARATOR}'")),
            });
        }
        if self.parser.segment_separator.is_empty() {
            warnings.push(ConfigWarning {
                field: "parser.segment_separator".into(),
                message: "separator is empty".into(),
                severity: WarningSeverity::Error,
                hint: Some(format!("The default is '{DEFAULT_SEGMENT_SEPARATOR}'")),
            });
        }
        if !self.parser.nested_separator.is_empty()
            && self.parser.nested_separator == self.parser.segment_separator
        {
            warnings.push(ConfigWarning {
                field: "parser.segment_separator".into(),
                message: "identical to nested_separator, every separator nests one level".into(),
                severity: WarningSeverity::Info,
                hint: None,
            });
        }

        // ── Logging ───
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.level".into(),
                message: format!("unknown log level '{}'", self.logging.level),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", LOG_LEVELS.join(", "))),
            });
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            warnings.push(ConfigWarning {
                field: "logging.format".into(),
                message: format!("unknown log format '{}', using pretty", self.logging.format),
                severity: WarningSeverity::Warning,
                hint: Some(format!("Valid values: {}", LOG_FORMATS.join(", "))),
            });
        }

        let errors: Vec<String> = warnings
            .iter()
            .filter(|w| w.severity == WarningSeverity::Error)
            .map(|w| w.to_string())
            .collect();
        if !errors.is_empty() {
            return Err(errors.join("\n"));
        }
        Ok(warnings)
    }
}
