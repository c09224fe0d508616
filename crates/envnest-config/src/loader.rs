use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::schema::{ConfigWarning, EnvnestConfig, WarningSeverity};

/// Loads the envnest configuration.
///
/// Loading happens before logging is configured, so diagnostics are kept on
/// the loader and emitted by [`ConfigLoader::log_diagnostics`].
pub struct ConfigLoader {
    config: EnvnestConfig,
    config_path: PathBuf,
    file_found: bool,
    warnings: Vec<ConfigWarning>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > ENVNEST_CONFIG env > ~/.envnest/envnest.toml
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        if let Ok(p) = std::env::var("ENVNEST_CONFIG") {
            return PathBuf::from(p);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".envnest")
            .join("envnest.toml")
    }

    /// Load the config from disk, falling back to defaults.
    pub fn load(path: Option<&Path>) -> envnest_core::Result<Self> {
        let config_path = Self::resolve_path(path);
        let file_found = config_path.exists();
        let config = if file_found {
            let raw = std::fs::read_to_string(&config_path)?;
            Self::parse(&raw, &config_path)?
        } else {
            EnvnestConfig::default()
        };

        let config = Self::apply_env_overrides(config);

        // Validate config — keep warnings, fail on errors
        let warnings = config
            .validate()
            .map_err(envnest_core::EnvnestError::Config)?;

        Ok(Self {
            config,
            config_path,
            file_found,
            warnings,
        })
    }

    fn parse(raw: &str, config_path: &Path) -> envnest_core::Result<EnvnestConfig> {
        toml::from_str::<EnvnestConfig>(raw).map_err(|e| {
            envnest_core::EnvnestError::Config(format!(
                "failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Get a snapshot of the loaded config.
    pub fn get(&self) -> EnvnestConfig {
        self.config.clone()
    }

    /// Path the config was resolved from (it may not exist).
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Whether a config file existed at [`ConfigLoader::path`].
    pub fn file_found(&self) -> bool {
        self.file_found
    }

    /// Non-fatal validation findings.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Emit what loading found. Call once logging is set up.
    pub fn log_diagnostics(&self) {
        let config_path = &self.config_path;
        if self.file_found {
            info!(?config_path, "loaded configuration");
        } else {
            warn!(?config_path, "config file not found, using defaults");
        }
        for w in &self.warnings {
            match w.severity {
                WarningSeverity::Info => debug!("{}", w),
                _ => warn!("{}", w),
            }
        }
    }

    /// Apply env var overrides (ENVNEST_LOG_LEVEL, ENVNEST_NESTED_SEPARATOR, etc.)
    fn apply_env_overrides(config: EnvnestConfig) -> EnvnestConfig {
        Self::apply_overrides(config, |name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_overrides<F>(mut config: EnvnestConfig, var: F) -> EnvnestConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("ENVNEST_LOG_LEVEL") {
            config.logging.level = v;
        }
        if let Some(v) = var("ENVNEST_LOG_FORMAT") {
            config.logging.format = v;
        }
        if let Some(v) = var("ENVNEST_NESTED_SEPARATOR") {
            config.parser.nested_separator = v;
        }
        if let Some(v) = var("ENVNEST_SEGMENT_SEPARATOR") {
            config.parser.segment_separator = v;
        }
        config
    }
}
