//! Shared error types for staffview.
//!
//! The list core (`view`) never fails: filtering, sorting and paging are total
//! over their inputs. Errors only arise at the edges, when datasets or
//! configuration are read from disk and when user input is parsed.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for staffview operations
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset files that cannot be read or decoded
    #[error("Dataset error in {path}: {message}")]
    Dataset { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed user input (filters, dates, page sizes)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failures reported by a recommender backend
    #[error("Recommender error: {0}")]
    Recommender(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a dataset error with path context
    pub fn dataset(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Dataset {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
