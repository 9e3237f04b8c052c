//! Console messages shown to the user
//!
//! These are separate from tracing logs: `--quiet` silences them, it never
//! silences logs.

use agentsmd_common::AgentsMdError;
use agentsmd_merge::{GENERATED_INSERT, GENERATED_START};
use colored::Colorize;

/// Warning for a target file that exists but has no generated block
pub fn existing_file_message(file_name: &str) -> String {
    format!("⚠️ {file_name} already exists.")
}

/// Success line after writing
pub fn generated_message(file_name: &str) -> String {
    format!("Generated {file_name} with markers {GENERATED_START} ... {GENERATED_INSERT}")
}

/// Writes user-facing messages, honoring `--quiet`
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    /// Console that prints unless `quiet`
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Warn on stderr that the target exists without markers
    pub fn warn_existing(&self, file_name: &str) {
        if !self.quiet {
            eprintln!("{}", existing_file_message(file_name).yellow());
        }
    }

    /// Report success on stdout
    pub fn generated(&self, file_name: &str) {
        if !self.quiet {
            println!("{}", generated_message(file_name).cyan());
        }
    }

    /// Print dry-run content exactly as it would be written
    pub fn content(&self, text: &str) {
        print!("{text}");
    }

    /// Report a fatal error on stderr; never suppressed
    pub fn error(&self, error: &AgentsMdError) {
        eprintln!("{}", format!("❌ {error}").red());
    }
}
