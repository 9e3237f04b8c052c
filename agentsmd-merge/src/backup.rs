//! Timestamped backups taken before destructive writes

use agentsmd_common::{AgentsMdError, Result};
use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// `chrono` format of the timestamp embedded in backup names
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Source of the current instant
///
/// Any `Fn() -> DateTime<Utc>` closure is a clock, which keeps backup names
/// deterministic under test.
pub trait Clock {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Sibling backup path for `path` at instant `at`
///
/// `AGENTS.md` becomes `AGENTS.<YYYYMMDD-HHMMSS>.bak` in the same directory.
pub fn backup_path_for(path: &Path, at: DateTime<Utc>) -> Result<PathBuf> {
    let stem = path.file_stem().ok_or_else(|| {
        AgentsMdError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "path has no file name to back up"),
        )
    })?;
    let name = format!(
        "{}.{}.bak",
        stem.to_string_lossy(),
        at.format(BACKUP_TIMESTAMP_FORMAT)
    );
    Ok(path.with_file_name(name))
}

/// Copy `path` to a timestamped sibling using the system clock
pub fn backup_file(path: impl AsRef<Path>) -> Result<PathBuf> {
    backup_file_with_clock(path, &SystemClock)
}

/// Copy `path` to a timestamped sibling using `clock`
///
/// # Errors
///
/// Returns [`AgentsMdError::Io`] if the original cannot be copied, or if a
/// backup with the same name already exists. An existing backup is never
/// replaced.
pub fn backup_file_with_clock(path: impl AsRef<Path>, clock: &dyn Clock) -> Result<PathBuf> {
    let path = path.as_ref();
    let backup_path = backup_path_for(path, clock.now())?;

    let mut source = File::open(path).map_err(|e| AgentsMdError::io(path, e))?;
    let mut target = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&backup_path)
        .map_err(|e| AgentsMdError::io(&backup_path, e))?;
    io::copy(&mut source, &mut target).map_err(|e| AgentsMdError::io(&backup_path, e))?;

    info!(
        original = %path.display(),
        backup = %backup_path.display(),
        "created backup"
    );
    Ok(backup_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_backup_name_embeds_fixed_width_timestamp() {
        let path = backup_path_for(Path::new("/repo/AGENTS.md"), fixed()).unwrap();
        assert_eq!(path, Path::new("/repo/AGENTS.20240102-030405.bak"));
    }

    #[test]
    fn test_backup_copies_content_beside_original() {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("AGENTS.md");
        std::fs::write(&original, "backup me").unwrap();

        let backup = backup_file_with_clock(&original, &fixed).unwrap();

        assert_eq!(backup.parent(), Some(temp.path()));
        assert_eq!(
            backup.file_name().unwrap().to_str(),
            Some("AGENTS.20240102-030405.bak")
        );
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "backup me");
        assert_eq!(std::fs::read_to_string(&original).unwrap(), "backup me");
    }

    #[test]
    fn test_existing_backup_is_never_replaced() {
        let temp = TempDir::new().unwrap();
        let original = temp.path().join("AGENTS.md");
        std::fs::write(&original, "hand written").unwrap();
        let first = backup_file_with_clock(&original, &fixed).unwrap();

        std::fs::write(&original, "generated").unwrap();
        let err = backup_file_with_clock(&original, &fixed).unwrap_err();

        match err {
            AgentsMdError::Io { path, source } => {
                assert_eq!(path, first);
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(std::fs::read_to_string(&first).unwrap(), "hand written");
    }

    #[test]
    fn test_backup_of_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = backup_file(temp.path().join("AGENTS.md")).unwrap_err();
        assert!(matches!(err, AgentsMdError::Io { .. }));
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
