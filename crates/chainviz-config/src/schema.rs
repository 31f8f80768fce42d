//! Configuration schema definitions using serde.

use chainviz_common::{Column, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for chainviz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset storage configuration.
    pub data: DataConfig,
    /// Chart option configuration.
    pub chart: ChartConfig,
    /// Logging configuration.
    pub logging: LogConfig,
}

/// Where dataset chunks live and how they are named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `<name>.<index>.<extension>` chunk files.
    pub dir: PathBuf,
    /// Chunk file extension, without the leading dot.
    pub extension: String,
}

/// Chart option configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Column plotted when none is given on the command line.
    pub default_column: Option<Column>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive string.
    pub level: String,
    /// Emit JSON log lines.
    pub json: bool,
}

impl LogConfig {
    /// Converts to the subscriber settings used by `init_logging`.
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json,
            ..LoggingConfig::default()
        }
    }
}
