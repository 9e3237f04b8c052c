//! Error types for agentsmd
//!
//! A single error enum shared by every crate in the workspace. Library code
//! propagates it with `?`; the binary maps it to a process exit status via
//! [`AgentsMdError::exit_code`].

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

/// Exit status for I/O failures and a missing rules source directory
pub const EXIT_FAILURE: i32 = 1;

/// Exit status for invalid arguments or invalid configuration
pub const EXIT_INVALID_ARGS: i32 = 2;

/// Result type alias for agentsmd operations
pub type Result<T> = std::result::Result<T, AgentsMdError>;

/// Errors raised while generating or writing an agents file
///
/// Malformed front matter has no variant: it degrades to empty
/// metadata instead of failing.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum AgentsMdError {
    /// IO operation on a specific path failed
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path being read, written, or copied
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// A rule document could not be read
    #[error("Failed to read rule file {path}: {source}")]
    ReadRule {
        /// Rule document path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The rules source directory (usually `.cursor`) does not exist
    #[error("Missing .cursor directory at {path}. Cannot continue.")]
    MissingCursorDir {
        /// Directory that was expected
        path: PathBuf,
    },

    /// A command-line argument was invalid
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong
        message: String,
    },

    /// Configuration could not be resolved
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// The interactive prompt failed or its input was closed
    #[error("Prompt failed: {message}")]
    Prompt {
        /// What was wrong
        message: String,
    },
}

impl AgentsMdError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AgentsMdError::InvalidArgument { .. } | AgentsMdError::Config { .. } => {
                EXIT_INVALID_ARGS
            }
            AgentsMdError::Io { .. }
            | AgentsMdError::ReadRule { .. }
            | AgentsMdError::MissingCursorDir { .. }
            | AgentsMdError::Prompt { .. } => EXIT_FAILURE,
        }
    }
}
