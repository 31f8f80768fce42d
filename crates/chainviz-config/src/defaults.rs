//! Default values for every configuration section.

use crate::schema::{ChartConfig, Config, DataConfig, LogConfig};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default chunk file extension.
pub const DEFAULT_DATA_EXTENSION: &str = "parquet";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "chainviz.yaml";

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            chart: ChartConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: DEFAULT_DATA_DIR.into(),
            extension: DEFAULT_DATA_EXTENSION.to_string(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            default_column: None,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
