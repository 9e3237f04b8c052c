//! Writing the target agents file

use crate::backup::{backup_file_with_clock, Clock, SystemClock};
use crate::block::{find_generated_block, upsert_generated_block};
use agentsmd_common::{AgentsMdError, Result, WriteMode};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything needed to write one agents file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    /// Target file, usually `AGENTS.md`
    pub out_path: PathBuf,
    /// Already-wrapped generated block
    pub content: String,
    /// Merge with or replace existing content
    pub write_mode: WriteMode,
    /// Compute the result without touching the filesystem
    pub dry_run: bool,
    /// Copy an existing target aside before overwriting it
    pub backup: bool,
}

impl WriteRequest {
    /// Append-mode request with backups enabled
    pub fn new(out_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            out_path: out_path.into(),
            content: content.into(),
            write_mode: WriteMode::default(),
            dry_run: false,
            backup: true,
        }
    }

    /// Set the write mode
    #[must_use]
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// Enable or disable dry run
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable the overwrite backup
    #[must_use]
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }
}

/// Result of [`write_agents_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Exact text written, or that would be written on a dry run
    pub final_content: String,
    /// Whether the target file was written
    pub written: bool,
    /// Whether an existing generated block was replaced in place
    pub replaced: bool,
    /// Backup taken before overwriting, if any
    pub backup_path: Option<PathBuf>,
}

/// Merge the request into the target file using the system clock
pub fn write_agents_file(request: &WriteRequest) -> Result<WriteOutcome> {
    write_agents_file_with_clock(request, &SystemClock)
}

/// Merge the request into the target file
///
/// Append mode upserts into existing content, or starts from nothing when
/// the target does not exist. Overwrite mode keeps only the generated
/// block. The final content always ends with a newline.
///
/// # Errors
///
/// Any failure reading, backing up, or writing the target aborts the call.
/// Nothing is written on a dry run.
pub fn write_agents_file_with_clock(
    request: &WriteRequest,
    clock: &dyn Clock,
) -> Result<WriteOutcome> {
    let out_path = request.out_path.as_path();

    // Overwrite never looks at the old bytes, so any encoding is fine there.
    let (exists, mut final_content, replaced) = match request.write_mode {
        WriteMode::Append => match read_existing(out_path)? {
            Some(text) => (
                true,
                upsert_generated_block(&text, &request.content),
                find_generated_block(&text).is_some(),
            ),
            None => (false, request.content.clone(), false),
        },
        WriteMode::Overwrite => {
            let exists = out_path
                .try_exists()
                .map_err(|e| AgentsMdError::io(out_path, e))?;
            (exists, request.content.clone(), false)
        }
    };
    if !final_content.ends_with('\n') {
        final_content.push('\n');
    }

    debug!(
        path = %out_path.display(),
        mode = %request.write_mode,
        exists,
        replaced,
        dry_run = request.dry_run,
        "merged agents file"
    );

    if request.dry_run {
        return Ok(WriteOutcome {
            final_content,
            written: false,
            replaced,
            backup_path: None,
        });
    }

    let needs_backup = request.write_mode == WriteMode::Overwrite && request.backup && exists;
    let backup_path = if needs_backup {
        Some(backup_file_with_clock(out_path, clock)?)
    } else {
        None
    };

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AgentsMdError::io(parent, e))?;
    }
    std::fs::write(out_path, &final_content).map_err(|e| AgentsMdError::io(out_path, e))?;

    Ok(WriteOutcome {
        final_content,
        written: true,
        replaced,
        backup_path,
    })
}

fn read_existing(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AgentsMdError::io(path, e)),
    }
}
