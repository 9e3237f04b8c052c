//! agentsmd - generate AGENTS.md from Cursor rules
//!
//! The binary in `main.rs` is a thin shell over [`run()`]: it parses the
//! [`Cli`], installs tracing, captures the working directory into a
//! [`RunContext`](agentsmd_common::RunContext) and maps errors to exit
//! codes.

pub mod cli;
pub mod output;
pub mod prompt;
pub mod run;

pub use cli::{Cli, ModeArg, WriteArg};
pub use output::Console;
pub use run::{run, run_with_prompt};
