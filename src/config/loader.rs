//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{AppConfig, LogFormat, Provider};
use crate::config::validation::{validate_config, ValidationError};

/// Optional TOML file with the base configuration.
pub const CONFIG_PATH_ENV: &str = "TRUEEYE_CONFIG";
/// `local` selects local mode; anything else means remote.
pub const PROVIDER_ENV: &str = "TE_PROVIDER";
/// Flow run endpoint for remote mode.
pub const FLOW_API_URL_ENV: &str = "FLOW_API_URL";
pub const BIND_ENV: &str = "TRUEEYE_BIND";
pub const STATIC_DIR_ENV: &str = "TRUEEYE_STATIC_DIR";
pub const LOG_FORMAT_ENV: &str = "TRUEEYE_LOG_FORMAT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the process configuration: optional file, then environment overrides.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: PathBuf::from(&path),
                source,
            })?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay environment values onto `config`.
///
/// `lookup` abstracts the environment so callers can supply their own source.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = lookup(PROVIDER_ENV) {
        config.provider.mode = Provider::parse(&mode);
    }

    if let Some(url) = lookup(FLOW_API_URL_ENV) {
        let url = url.trim();
        config.provider.flow_api_url = if url.is_empty() {
            None
        } else {
            Some(url.to_string())
        };
    }

    if let Some(bind) = lookup(BIND_ENV).filter(|v| !v.trim().is_empty()) {
        config.listener.bind_address = bind.trim().to_string();
    }

    if let Some(dir) = lookup(STATIC_DIR_ENV).filter(|v| !v.trim().is_empty()) {
        config.service.static_dir = dir;
    }

    if let Some(format) = lookup(LOG_FORMAT_ENV) {
        config.observability.log_format = if format.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };
    }
}
