//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from an explicit
//! path, the working directory, or the platform config directory, then
//! applies command-line overrides on top of it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use qcircuit::{QcircuitError, config::AppConfig, vocabulary::Vocabulary};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for QcircuitError {
    fn from(err: ConfigError) -> Self {
        QcircuitError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (qcircuit/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, QcircuitError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("qcircuit/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "qcircuit", "qcircuit") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Apply command-line overrides to a loaded configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] for an unknown vocabulary name.
pub fn apply_overrides(
    config: AppConfig,
    vocabulary: Option<&str>,
    standalone: bool,
) -> Result<AppConfig, ConfigError> {
    let config = match vocabulary {
        Some(name) => {
            let kind: Vocabulary = name
                .parse()
                .map_err(|err: &str| ConfigError::Validation(format!("{err}: `{name}`")))?;
            debug!(vocabulary = name; "Vocabulary overridden from command line");
            config.with_vocabulary(kind)
        }
        None => config,
    };

    // The flag only ever turns wrapping on; a config file may already have.
    if standalone {
        Ok(config.with_standalone(true))
    } else {
        Ok(config)
    }
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, QcircuitError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(QcircuitError::from)
}

fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;
    Ok(config)
}
