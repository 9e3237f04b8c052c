//! Rule loading functionality
//!
//! This module discovers rule documents under a rules directory, parses
//! their front matter, and assembles [`RuleFile`] values with paths
//! relative to an explicit [`RunContext`].

use crate::frontmatter::parse_rule_file;
use crate::rules::RuleFile;
use agentsmd_common::{AgentsMdError, Pretty, Result, RunContext};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Loads rule documents from a directory tree
///
/// # Examples
///
/// ```no_run
/// use agentsmd_common::RunContext;
/// use agentsmd_rules::RuleLoader;
///
/// let ctx = RunContext::from_current_dir()?;
/// let rules = RuleLoader::new().load_directory(".cursor/rules", &ctx)?;
/// println!("Loaded {} rules", rules.len());
/// # Ok::<(), agentsmd_common::AgentsMdError>(())
/// ```
pub struct RuleLoader {
    /// File extensions to consider as rule files, without the dot
    extensions: Vec<String>,
}

impl RuleLoader {
    /// Create a loader for `.md` and `.mdc` documents
    #[must_use]
    pub fn new() -> Self {
        Self {
            extensions: vec!["md".to_string(), "mdc".to_string()],
        }
    }

    /// Find every rule document below `rules_dir`, at any depth
    ///
    /// Relative `rules_dir` values are resolved against `ctx`. The result is
    /// absolute and sorted by plain string comparison of the full path, so
    /// the order never depends on traversal order. Symlinks are not
    /// followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or any subdirectory cannot be read.
    pub fn find_rule_files(
        &self,
        rules_dir: impl AsRef<Path>,
        ctx: &RunContext,
    ) -> Result<Vec<PathBuf>> {
        let root = ctx.resolve(rules_dir);
        let mut found = Vec::new();

        for entry in WalkDir::new(&root).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                AgentsMdError::io(path, e.into())
            })?;
            if entry.file_type().is_file() && self.is_rule_file(entry.path()) {
                trace!(path = %entry.path().display(), "found rule file");
                found.push(entry.into_path());
            }
        }

        found.sort_by_cached_key(|path| path.to_string_lossy().into_owned());
        debug!(count = found.len(), dir = %root.display(), "discovered rule files");
        Ok(found)
    }

    /// Load and parse every rule document below `rules_dir`
    ///
    /// # Errors
    ///
    /// Fails as a whole if discovery fails or any single file cannot be
    /// read; no partial result is returned.
    pub fn load_directory(
        &self,
        rules_dir: impl AsRef<Path>,
        ctx: &RunContext,
    ) -> Result<Vec<RuleFile>> {
        self.find_rule_files(rules_dir, ctx)?
            .into_iter()
            .map(|path| self.load_file(path, ctx))
            .collect()
    }

    /// Load a single rule document
    ///
    /// # Errors
    ///
    /// Returns [`AgentsMdError::ReadRule`] if the file cannot be read as text.
    pub fn load_file(&self, path: impl AsRef<Path>, ctx: &RunContext) -> Result<RuleFile> {
        let abs_path = ctx.resolve(path);
        let raw = std::fs::read_to_string(&abs_path).map_err(|source| AgentsMdError::ReadRule {
            path: abs_path.clone(),
            source,
        })?;

        let parsed = parse_rule_file(&raw);
        let rel_path = ctx.relative_path(&abs_path);
        debug!(
            rule = %rel_path,
            "parsed rule file: {}",
            Pretty(&parsed.meta)
        );

        Ok(RuleFile::new(abs_path, rel_path, parsed))
    }

    /// Check if a path has one of the rule extensions
    fn is_rule_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|known| known == ext))
    }
}

impl Default for RuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Find rule documents with the default loader
pub fn find_cursor_rules(rules_dir: impl AsRef<Path>, ctx: &RunContext) -> Result<Vec<PathBuf>> {
    RuleLoader::new().find_rule_files(rules_dir, ctx)
}

/// Load rule documents with the default loader
pub fn load_rule_files(rules_dir: impl AsRef<Path>, ctx: &RunContext) -> Result<Vec<RuleFile>> {
    RuleLoader::new().load_directory(rules_dir, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_is_rule_file() {
        let loader = RuleLoader::new();

        assert!(loader.is_rule_file(Path::new("alpha.md")));
        assert!(loader.is_rule_file(Path::new("nested/beta.mdc")));
        assert!(!loader.is_rule_file(Path::new("notes.markdown")));
        assert!(!loader.is_rule_file(Path::new("upper.MD")));
        assert!(!loader.is_rule_file(Path::new("README")));
        assert!(!loader.is_rule_file(Path::new("script.md.bak")));
    }

    #[test]
    fn test_find_sorts_by_full_path_string() {
        let temp = TempDir::new().unwrap();
        let ctx = RunContext::new(temp.path());
        write(temp.path(), "rules/a/z.md", "z");
        write(temp.path(), "rules/a-b.md", "ab");
        write(temp.path(), "rules/deep/er/still.mdc", "deep");
        write(temp.path(), "rules/skip.txt", "nope");

        let found = find_cursor_rules("rules", &ctx).unwrap();
        let names: Vec<String> = found.iter().map(|p| ctx.relative_path(p)).collect();

        assert_eq!(
            names,
            vec!["rules/a-b.md", "rules/a/z.md", "rules/deep/er/still.mdc"]
        );
        assert!(found.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_load_file_relative_to_context() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            ".cursor/rules/nested/beta.mdc",
            "---\ndescription: Beta\n---\nBeta body",
        );
        let ctx = RunContext::new(temp.path());

        let rule = RuleLoader::new()
            .load_file(".cursor/rules/nested/beta.mdc", &ctx)
            .unwrap();

        assert_eq!(rule.rel_path(), ".cursor/rules/nested/beta.mdc");
        assert_eq!(rule.abs_path(), temp.path().join(".cursor/rules/nested/beta.mdc"));
        assert_eq!(rule.meta().description.as_deref(), Some("Beta"));
        assert_eq!(rule.globs(), ["**/*".to_string()]);
        assert_eq!(rule.body(), "Beta body");
    }

    #[test]
    fn test_load_directory_missing_dir_is_error() {
        let temp = TempDir::new().unwrap();
        let ctx = RunContext::new(temp.path());

        let err = load_rule_files("does-not-exist", &ctx).unwrap_err();
        assert!(matches!(err, AgentsMdError::Io { .. }));
    }

    #[test]
    fn test_load_file_missing_is_read_error() {
        let temp = TempDir::new().unwrap();
        let ctx = RunContext::new(temp.path());

        let err = RuleLoader::new().load_file("gone.md", &ctx).unwrap_err();
        assert!(matches!(err, AgentsMdError::ReadRule { .. }));
    }

    #[test]
    fn test_unreadable_file_fails_whole_load() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "rules/a.md", "ok");
        // Invalid UTF-8 cannot be read as text.
        fs::write(temp.path().join("rules/b.md"), [0xff, 0xfe, 0x00]).unwrap();
        let ctx = RunContext::new(temp.path());

        let err = load_rule_files("rules", &ctx).unwrap_err();
        match err {
            AgentsMdError::ReadRule { path, .. } => assert!(path.ends_with("rules/b.md")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
