//! Configuration file discovery
//!
//! Only the working directory is searched. At most one file per format is
//! used; TOML is merged before YAML so YAML wins on conflicting keys.

use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Candidate file names in discovery order
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "agentsmd.toml",
    ".agentsmd.toml",
    "agentsmd.yaml",
    ".agentsmd.yaml",
];

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// A configuration file and its format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Absolute path to the file
    pub path: PathBuf,
    /// Detected format
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Describe an explicitly requested file
    ///
    /// # Errors
    ///
    /// Fails if the file does not exist or has an unknown extension.
    pub fn explicit(path: PathBuf) -> ConfigResult<Self> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound { path });
        }
        match ConfigFormat::from_path(&path) {
            Some(format) => Ok(Self { path, format }),
            None => Err(ConfigError::UnsupportedFormat { path }),
        }
    }
}

/// Finds project configuration files in a single directory
#[derive(Debug, Clone)]
pub struct FileDiscovery {
    dir: PathBuf,
}

impl FileDiscovery {
    /// Search `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Discovered files in merge order
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let mut files: Vec<ConfigFile> = Vec::new();

        for name in CONFIG_FILE_NAMES {
            let path = self.dir.join(name);
            if !path.is_file() {
                continue;
            }
            let Some(format) = ConfigFormat::from_path(&path) else {
                continue;
            };
            if files.iter().any(|f| f.format == format) {
                trace!("Skipping {}: a {:?} config was already found", path.display(), format);
                continue;
            }
            trace!("Found config: {} ({:?})", path.display(), format);
            files.push(ConfigFile { path, format });
        }

        debug!("Discovered {} configuration files in {}", files.len(), self.dir.display());
        files
    }
}
