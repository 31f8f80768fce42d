//! Runtime validation of a loaded configuration.

use crate::schema::Config;
use chainviz_common::{ChainvizError, Column};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ChainvizError> {
        if self.data.dir.as_os_str().is_empty() {
            return Err(ChainvizError::validation(
                "Data directory cannot be empty",
                Some("data.dir"),
            ));
        }

        if self.data.extension.is_empty() {
            return Err(ChainvizError::validation(
                "Chunk extension cannot be empty",
                Some("data.extension"),
            ));
        }

        // Chunk names are split on dots, so the extension must be a single segment.
        if self.data.extension.contains('.') {
            return Err(ChainvizError::validation(
                format!(
                    "Chunk extension '{}' must not contain dots",
                    self.data.extension
                ),
                Some("data.extension"),
            ));
        }

        if let Some(Column::Name(name)) = &self.chart.default_column {
            if name.is_empty() {
                return Err(ChainvizError::validation(
                    "Default column name cannot be empty",
                    Some("chart.default_column"),
                ));
            }
        }

        validate_log_level(&self.logging.level)?;

        Ok(())
    }
}

/// Checks a log filter. A single bare word must be a level name, since
/// `EnvFilter` would otherwise read a misspelt level as a target.
pub fn validate_log_level(level: &str) -> Result<(), ChainvizError> {
    let invalid = |reason: String| {
        ChainvizError::validation(
            format!("Invalid log level '{level}': {reason}"),
            Some("logging.level"),
        )
    };

    let bare_word = !level.contains(['=', ',', '[']);
    if bare_word {
        level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|e| invalid(e.to_string()))?;
    }

    EnvFilter::try_new(level).map_err(|e| invalid(e.to_string()))?;
    Ok(())
}
