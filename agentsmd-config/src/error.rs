//! Error types for configuration resolution

use agentsmd_common::AgentsMdError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested configuration file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound {
        /// Requested path
        path: PathBuf,
    },

    /// Configuration file extension is not one of toml, yaml, yml, json
    #[error("Unsupported configuration file format: {path}")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// A source could not be parsed or a value has the wrong type
    #[error("Failed to parse configuration: {source}")]
    ParseError {
        /// Figment extraction error, naming the key and source
        #[from]
        source: figment::Error,
    },
}

impl From<ConfigError> for AgentsMdError {
    fn from(error: ConfigError) -> Self {
        AgentsMdError::config(error.to_string())
    }
}
