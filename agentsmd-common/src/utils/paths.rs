//! Path utilities for agentsmd

use std::path::{Path, MAIN_SEPARATOR};

/// Render a path with forward slashes regardless of the host separator
///
/// Only the native separator is rewritten, so a backslash inside a Unix
/// file name survives untouched.
pub fn to_slash_path(path: impl AsRef<Path>) -> String {
    let rendered = path.as_ref().to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(MAIN_SEPARATOR, "/")
    }
}
