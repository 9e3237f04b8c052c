//! Configuration data types

use agentsmd_common::{OutputMode, RunContext, WriteMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default target file
pub const DEFAULT_OUT: &str = "AGENTS.md";

/// Default rules source directory
pub const DEFAULT_CURSOR_DIR: &str = ".cursor";

/// Settings as merged from every source, before path resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentsMdConfig {
    /// Target agents file
    pub out: PathBuf,
    /// Directory whose absence aborts the run
    pub cursor_dir: PathBuf,
    /// Rule documents root; `<cursor_dir>/rules` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<PathBuf>,
    /// Output mode; the user is prompted when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OutputMode>,
    /// Write mode; append when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_mode: Option<WriteMode>,
    /// Print the result instead of writing it
    pub dry_run: bool,
    /// Suppress console messages
    pub quiet: bool,
    /// Back up an existing target before overwriting it
    pub backup: bool,
}

impl Default for AgentsMdConfig {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT),
            cursor_dir: PathBuf::from(DEFAULT_CURSOR_DIR),
            rules_dir: None,
            mode: None,
            write_mode: None,
            dry_run: false,
            quiet: false,
            backup: true,
        }
    }
}

impl AgentsMdConfig {
    /// Resolve relative paths against `ctx` and derive the rules directory
    pub fn resolve(self, ctx: &RunContext) -> ResolvedConfig {
        let cursor_dir = ctx.resolve(&self.cursor_dir);
        let rules_dir = match &self.rules_dir {
            Some(dir) => ctx.resolve(dir),
            None => cursor_dir.join("rules"),
        };
        ResolvedConfig {
            out: ctx.resolve(&self.out),
            cursor_dir,
            rules_dir,
            mode: self.mode,
            write_mode: self.write_mode,
            dry_run: self.dry_run,
            quiet: self.quiet,
            backup: self.backup,
        }
    }
}

/// Values given on the command line
///
/// Only `Some` fields override lower-precedence sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CliOverrides {
    /// `--out`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out: Option<PathBuf>,
    /// `--cursor-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_dir: Option<PathBuf>,
    /// `--rules-dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<PathBuf>,
    /// `--mode`, `--inline`, `--reference`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OutputMode>,
    /// `--write`, `--append`, `--overwrite`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_mode: Option<WriteMode>,
    /// `--dry-run`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// `--quiet`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    /// `--no-backup`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
}

/// Final settings for one run, with absolute paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    /// Target agents file
    pub out: PathBuf,
    /// Rules source directory
    pub cursor_dir: PathBuf,
    /// Rule documents root
    pub rules_dir: PathBuf,
    /// Output mode, if any source chose one
    pub mode: Option<OutputMode>,
    /// Write mode, if any source chose one
    pub write_mode: Option<WriteMode>,
    /// Print instead of writing
    pub dry_run: bool,
    /// Suppress console messages
    pub quiet: bool,
    /// Back up before overwriting
    pub backup: bool,
}

impl ResolvedConfig {
    /// The write mode to use, defaulting to append
    pub fn effective_write_mode(&self) -> WriteMode {
        self.write_mode.unwrap_or_default()
    }

    /// Whether some source chose the write mode explicitly
    pub fn write_mode_explicit(&self) -> bool {
        self.write_mode.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let config = AgentsMdConfig::default();
        assert_eq!(config.out, Path::new("AGENTS.md"));
        assert_eq!(config.cursor_dir, Path::new(".cursor"));
        assert!(config.backup);
        assert!(!config.dry_run);
        assert_eq!(config.mode, None);
    }

    #[test]
    fn test_resolve_derives_rules_dir_from_cursor_dir() {
        let ctx = RunContext::new("/work");
        let config = AgentsMdConfig {
            cursor_dir: PathBuf::from("custom"),
            ..AgentsMdConfig::default()
        };

        let resolved = config.resolve(&ctx);

        assert_eq!(resolved.cursor_dir, Path::new("/work/custom"));
        assert_eq!(resolved.rules_dir, Path::new("/work/custom/rules"));
        assert_eq!(resolved.out, Path::new("/work/AGENTS.md"));
        assert_eq!(resolved.effective_write_mode(), WriteMode::Append);
        assert!(!resolved.write_mode_explicit());
    }

    #[test]
    fn test_resolve_keeps_explicit_rules_dir() {
        let ctx = RunContext::new("/work");
        let config = AgentsMdConfig {
            rules_dir: Some(PathBuf::from("/elsewhere/rules")),
            write_mode: Some(WriteMode::Overwrite),
            ..AgentsMdConfig::default()
        };

        let resolved = config.resolve(&ctx);

        assert_eq!(resolved.rules_dir, Path::new("/elsewhere/rules"));
        assert_eq!(resolved.effective_write_mode(), WriteMode::Overwrite);
        assert!(resolved.write_mode_explicit());
    }
}
