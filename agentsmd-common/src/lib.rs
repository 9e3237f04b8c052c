//! # agentsmd Common
//!
//! Foundational types shared across the agentsmd workspace.
//!
//! ## Modules
//!
//! - [`error`] - The workspace error type and exit-status mapping
//! - [`context`] - Explicit working-directory context
//! - [`types`] - Output and write mode enums
//! - [`utils`] - Path helpers
//! - [`logging`] - Log formatting helpers

pub mod context;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use context::RunContext;
pub use error::{AgentsMdError, Result, EXIT_FAILURE, EXIT_INVALID_ARGS};
pub use logging::Pretty;
pub use types::{OutputMode, WriteMode};
pub use utils::to_slash_path;
