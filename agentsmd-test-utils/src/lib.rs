//! Test utilities for agentsmd crates
//!
//! This crate provides throwaway project trees so tests never touch the
//! real working directory. Paths are handed to the code under test through
//! an explicit [`RunContext`] instead of changing the process directory.
//!
//! ## Usage
//!
//! ```no_run
//! use agentsmd_test_utils::RuleTreeFixture;
//!
//! let fixture = RuleTreeFixture::new().unwrap();
//! fixture.write_rule("alpha.md", "---\nglobs: src/**\n---\n# Alpha").unwrap();
//! let ctx = fixture.context();
//! // load from fixture.rules_dir() with ctx
//! ```

use agentsmd_common::RunContext;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Front matter and body of the `alpha.md` rule in [`RuleTreeFixture::with_sample_rules`]
pub const ALPHA_RULE: &str = "---
description: TypeScript Rules
globs: [src/**/*.ts, tests/**/*.ts]
alwaysApply: false
---
# Alpha Title

Prefer explicit return types.

```ts
# not demoted
```
";

/// Content of the `nested/beta.mdc` rule in [`RuleTreeFixture::with_sample_rules`]
pub const BETA_RULE: &str = "---
globs:
  - docs/**/*.md
---
## Beta Section

Keep docs short.
";

/// RAII guard around a temporary project containing `.cursor/rules`
///
/// Environment variables set through the fixture are restored on drop;
/// tests that use them should still be marked `#[serial]`.
pub struct RuleTreeFixture {
    temp_dir: TempDir,
    original_env_vars: HashMap<String, Option<String>>,
}

impl RuleTreeFixture {
    /// Create an empty project with a `.cursor/rules` directory
    pub fn new() -> std::io::Result<Self> {
        let temp_dir = create_temp_dir_with_retry()?;
        std::fs::create_dir_all(temp_dir.path().join(".cursor").join("rules"))?;
        Ok(Self {
            temp_dir,
            original_env_vars: HashMap::new(),
        })
    }

    /// Create a project holding `alpha.md` and `nested/beta.mdc`
    pub fn with_sample_rules() -> std::io::Result<Self> {
        let fixture = Self::new()?;
        fixture.write_rule("alpha.md", ALPHA_RULE)?;
        fixture.write_rule("nested/beta.mdc", BETA_RULE)?;
        Ok(fixture)
    }

    /// Project root; use it as the working directory of the run
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `.cursor` directory
    pub fn cursor_dir(&self) -> PathBuf {
        self.root().join(".cursor")
    }

    /// The `.cursor/rules` directory
    pub fn rules_dir(&self) -> PathBuf {
        self.cursor_dir().join("rules")
    }

    /// A run context rooted at the project
    pub fn context(&self) -> RunContext {
        RunContext::new(self.root())
    }

    /// Write a rule document relative to the rules directory
    pub fn write_rule(&self, rel: &str, content: &str) -> std::io::Result<PathBuf> {
        write_creating_parents(&self.rules_dir().join(rel), content)
    }

    /// Write any file relative to the project root
    pub fn write_file(&self, rel: &str, content: &str) -> std::io::Result<PathBuf> {
        write_creating_parents(&self.root().join(rel), content)
    }

    /// Read a file relative to the project root
    pub fn read_file(&self, rel: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.root().join(rel))
    }

    /// Set an environment variable and restore its original value on drop
    pub fn set_env_var(&mut self, key: &str, value: &str) {
        self.original_env_vars
            .entry(key.to_string())
            .or_insert_with(|| std::env::var(key).ok());
        std::env::set_var(key, value);
    }
}

impl Drop for RuleTreeFixture {
    fn drop(&mut self) {
        for (key, original_value) in &self.original_env_vars {
            match original_value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn write_creating_parents(path: &Path, content: &str) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(path.to_path_buf())
}

/// Create a temporary directory, retrying to ride out contention between
/// parallel tests
pub fn create_temp_dir_with_retry() -> std::io::Result<TempDir> {
    let mut attempt = 1;
    loop {
        match TempDir::new() {
            Ok(dir) => return Ok(dir),
            Err(_e) if attempt < 3 => {
                std::thread::sleep(std::time::Duration::from_millis(10 * attempt));
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_rules_dir() {
        let fixture = RuleTreeFixture::new().unwrap();
        assert!(fixture.rules_dir().is_dir());
        assert_eq!(fixture.context().working_dir(), fixture.root());
    }

    #[test]
    fn test_sample_rules_written() {
        let fixture = RuleTreeFixture::with_sample_rules().unwrap();
        assert!(fixture.rules_dir().join("alpha.md").is_file());
        assert!(fixture.rules_dir().join("nested").join("beta.mdc").is_file());
    }

    #[test]
    fn test_env_var_restored_on_drop() {
        let key = "AGENTSMD_TEST_UTILS_ONLY";
        std::env::remove_var(key);
        {
            let mut fixture = RuleTreeFixture::new().unwrap();
            fixture.set_env_var(key, "set");
            assert_eq!(std::env::var(key).unwrap(), "set");
        }
        assert!(std::env::var(key).is_err());
    }
}
