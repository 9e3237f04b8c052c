//! Explicit working-directory context
//!
//! Library code never consults the process working directory. The binary
//! captures it once into a [`RunContext`] and threads it through config
//! resolution and rule loading.

use crate::utils::to_slash_path;
use crate::{AgentsMdError, Result};
use std::path::{Path, PathBuf};

/// The directory relative paths are resolved against and reported from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    working_dir: PathBuf,
}

impl RunContext {
    /// Create a context rooted at `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Capture the current process working directory
    pub fn from_current_dir() -> Result<Self> {
        std::env::current_dir()
            .map(Self::new)
            .map_err(|e| AgentsMdError::io(".", e))
    }

    /// The directory this context is rooted at
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Resolve `path` against the working directory unless already absolute
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Path of `path` relative to the working directory, slash-normalized
    ///
    /// Falls back to the path itself when no relative form exists (for
    /// example a different drive on Windows).
    pub fn relative_path(&self, path: impl AsRef<Path>) -> String {
        let path = path.as_ref();
        let relative =
            pathdiff::diff_paths(path, &self.working_dir).unwrap_or_else(|| path.to_path_buf());
        to_slash_path(relative)
    }
}
