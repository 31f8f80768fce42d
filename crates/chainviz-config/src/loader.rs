//! Configuration loading and persistence with atomic file operations.

use crate::defaults::DEFAULT_CONFIG_FILE;
use crate::schema::Config;
use chainviz_common::{ChainvizError, Column};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "CHAINVIZ_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading or writing the configuration file
    #[error("Failed to access configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or encoding error
    #[error("Failed to parse YAML configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    Validation(#[source] ChainvizError),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for ChainvizError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(inner) => inner,
            other => ChainvizError::config_with_source(other.to_string(), other),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from a YAML file with environment variable overrides.
    pub async fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        Self::load_config_with(path, env_lookup).await
    }

    /// Loads configuration from a YAML file, reading overrides through `lookup`.
    pub async fn load_config_with<F>(path: impl AsRef<Path>, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading configuration");

        let content = tokio::fs::read_to_string(path).await?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_overrides_from(&mut config, lookup)?;
        config.validate().map_err(ConfigError::Validation)?;

        Ok(config)
    }

    /// Loads configuration from `CHAINVIZ_CONFIG_PATH`, then `chainviz.yaml`,
    /// falling back to defaults with environment overrides.
    pub async fn load() -> chainviz_common::Result<Config> {
        Ok(Self::load_from(Path::new("."), env_lookup).await?)
    }

    /// Runs the `load` search with `base_dir` as the working directory and
    /// `lookup` standing in for the process environment.
    pub async fn load_from<F>(base_dir: &Path, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CONFIG_PATH_ENV) {
            return Self::load_config_with(base_dir.join(path), lookup).await;
        }

        let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
        if tokio::fs::try_exists(&candidate).await? {
            return Self::load_config_with(candidate, lookup).await;
        }

        info!("no configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_overrides_from(&mut config, lookup)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    pub async fn load_from_file(path: impl AsRef<Path>) -> chainviz_common::Result<Config> {
        Ok(Self::load_config(path).await?)
    }

    /// Saves configuration as YAML, replacing the target atomically.
    pub async fn save(config: &Config, path: impl AsRef<Path>) -> chainviz_common::Result<()> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(config).map_err(ConfigError::from)?;

        let tmp = temp_path_for(path);
        tokio::fs::write(&tmp, yaml).await?;
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Applies `CHAINVIZ_*` environment variable overrides.
    pub fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, env_lookup)
    }

    /// Applies overrides read through `lookup` instead of the process environment.
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CHAINVIZ_DATA_DIR") {
            config.data.dir = PathBuf::from(dir);
        }

        if let Some(ext) = lookup("CHAINVIZ_DATA_EXT") {
            config.data.extension = ext;
        }

        if let Some(level) = lookup("CHAINVIZ_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("CHAINVIZ_LOG_JSON") {
            config.logging.json = json.parse().map_err(|e| ConfigError::EnvParse {
                var: "CHAINVIZ_LOG_JSON".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Some(column) = lookup("CHAINVIZ_DEFAULT_COLUMN") {
            config.chart.default_column = column.parse::<Column>().ok();
        }

        Ok(())
    }
}

fn env_lookup(var: &str) -> Option<String> {
    env::var(var).ok()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
