//! CLI definition for the agentsmd command-line interface

use std::path::PathBuf;

use agentsmd_common::{OutputMode, WriteMode};
use agentsmd_config::CliOverrides;
use clap::{Parser, ValueEnum};

/// Output mode as spelled on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Embed each rule body under a heading per glob
    Inline,
    /// List each rule with its globs and an `@path` reference
    Reference,
}

impl From<ModeArg> for OutputMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Inline => OutputMode::Inline,
            ModeArg::Reference => OutputMode::Reference,
        }
    }
}

/// Write mode as spelled on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WriteArg {
    /// Replace only the generated block, keeping the rest of the file
    Append,
    /// Replace the whole file with the generated block
    Overwrite,
}

impl From<WriteArg> for WriteMode {
    fn from(arg: WriteArg) -> Self {
        match arg {
            WriteArg::Append => WriteMode::Append,
            WriteArg::Overwrite => WriteMode::Overwrite,
        }
    }
}

/// agentsmd - generate AGENTS.md from Cursor rules
///
/// Reads every `.md`/`.mdc` rule under `.cursor/rules` and writes them into
/// a generated block of AGENTS.md. Text outside the block is kept.
///
/// Exit codes: 0 success, 1 runtime failure, 2 invalid arguments or
/// configuration.
#[derive(Parser, Debug)]
#[command(name = "agentsmd")]
#[command(version)]
#[command(about = "Generate AGENTS.md from .cursor/rules")]
pub struct Cli {
    /// Output mode; prompts when not given by any source
    #[arg(long, value_enum, value_name = "MODE", conflicts_with_all = ["inline", "reference"])]
    pub mode: Option<ModeArg>,

    /// Shorthand for `--mode inline`
    #[arg(long, conflicts_with = "reference")]
    pub inline: bool,

    /// Shorthand for `--mode reference`
    #[arg(long)]
    pub reference: bool,

    /// Target file [default: AGENTS.md]
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Directory that must exist for the run to proceed [default: .cursor]
    #[arg(long, value_name = "PATH")]
    pub cursor_dir: Option<PathBuf>,

    /// Directory scanned for rules [default: <cursor-dir>/rules]
    #[arg(long, value_name = "PATH")]
    pub rules_dir: Option<PathBuf>,

    /// How to write the target file [default: append]
    #[arg(
        long = "write",
        value_enum,
        value_name = "MODE",
        conflicts_with_all = ["append", "overwrite"]
    )]
    pub write_mode: Option<WriteArg>,

    /// Shorthand for `--write append`
    #[arg(long, conflicts_with = "overwrite")]
    pub append: bool,

    /// Shorthand for `--write overwrite`
    #[arg(long)]
    pub overwrite: bool,

    /// Print the resulting file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress success and warning messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not back up the target before overwriting it
    #[arg(long)]
    pub no_backup: bool,

    /// Read configuration from this file instead of discovering one
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug output to stderr
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Output mode chosen by flags, if any
    pub fn output_mode(&self) -> Option<OutputMode> {
        if self.inline {
            Some(OutputMode::Inline)
        } else if self.reference {
            Some(OutputMode::Reference)
        } else {
            self.mode.map(OutputMode::from)
        }
    }

    /// Write mode chosen by flags, if any
    pub fn write_mode(&self) -> Option<WriteMode> {
        if self.append {
            Some(WriteMode::Append)
        } else if self.overwrite {
            Some(WriteMode::Overwrite)
        } else {
            self.write_mode.map(WriteMode::from)
        }
    }

    /// Configuration overrides for the flags that were given
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            out: self.out.clone(),
            cursor_dir: self.cursor_dir.clone(),
            rules_dir: self.rules_dir.clone(),
            mode: self.output_mode(),
            write_mode: self.write_mode(),
            dry_run: self.dry_run.then_some(true),
            quiet: self.quiet.then_some(true),
            backup: self.no_backup.then_some(false),
        }
    }
}
