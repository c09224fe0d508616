use thiserror::Error;

/// Unified error type for envnest.
///
/// Converting pairs into a [`crate::Tree`] never fails; these variants cover
/// reading input and configuration and rendering output.
#[derive(Error, Debug)]
pub enum EnvnestError {
    // ── Input errors ───────────────────────────────────────────
    #[error("Invalid JSON input - {0}")]
    InvalidJson(serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("missing input argument")]
    MissingInput,

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("config validation failed: {field}: {reason}")]
    ConfigValidation { field: String, reason: String },

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("toml serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, EnvnestError>;
