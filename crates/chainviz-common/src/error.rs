//! Error types and utilities for chainviz

use thiserror::Error;

/// Result type alias for chainviz operations
pub type Result<T> = std::result::Result<T, ChainvizError>;

/// Main error type for chainviz operations
#[derive(Error, Debug)]
pub enum ChainvizError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for user input or data
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong.
        message: String,
        /// Offending field, if known.
        field: Option<String>,
    },

    /// A dataset has no chunk files in the data directory
    #[error("Dataset '{name}' has no chunks")]
    EmptyDataset {
        /// Dataset name.
        name: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        /// What went wrong.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ChainvizError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error for a field
    pub fn validation(msg: impl Into<String>, field: Option<&str>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: field.map(str::to_string),
        }
    }

    /// Create an error for a dataset without chunks
    pub fn empty_dataset(name: impl Into<String>) -> Self {
        Self::EmptyDataset { name: name.into() }
    }
}
