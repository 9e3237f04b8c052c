//! Rule document types

use serde::Serialize;
use std::path::{Path, PathBuf};

/// Glob used when a rule declares none
pub const DEFAULT_GLOB: &str = "**/*";

/// Metadata recognised in a rule's front matter
///
/// Every field is optional; absence triggers defaulting downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleMeta {
    /// Applicability globs in declaration order
    pub globs: Option<Vec<String>>,
    /// Human readable description, used as the section title
    pub description: Option<String>,
    /// Whether the rule always applies
    pub always_apply: Option<bool>,
}

/// A rule document split into metadata and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    /// Parsed front matter
    pub meta: RuleMeta,
    /// Everything after the front matter, or the whole document
    pub body: String,
}

impl ParsedRule {
    pub(crate) fn without_metadata(text: &str) -> Self {
        Self {
            meta: RuleMeta::default(),
            body: text.to_string(),
        }
    }
}

/// Resolve the glob list for a rule, defaulting to [`DEFAULT_GLOB`]
pub fn normalize_globs(meta: &RuleMeta) -> Vec<String> {
    match &meta.globs {
        Some(globs) if !globs.is_empty() => globs.clone(),
        _ => vec![DEFAULT_GLOB.to_string()],
    }
}

/// A loaded rule document
///
/// Built fresh from disk on every run and never mutated afterwards. The
/// glob list is never empty and the relative path always uses `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    abs_path: PathBuf,
    rel_path: String,
    meta: RuleMeta,
    body: String,
    globs: Vec<String>,
}

impl RuleFile {
    /// Assemble a rule from its parsed content
    ///
    /// `rel_path` must already be slash-normalized.
    pub fn new(
        abs_path: impl Into<PathBuf>,
        rel_path: impl Into<String>,
        parsed: ParsedRule,
    ) -> Self {
        let globs = normalize_globs(&parsed.meta);
        Self {
            abs_path: abs_path.into(),
            rel_path: rel_path.into(),
            meta: parsed.meta,
            body: parsed.body,
            globs,
        }
    }

    /// Absolute path of the rule document
    pub fn abs_path(&self) -> &Path {
        &self.abs_path
    }

    /// Path relative to the run's working directory, with `/` separators
    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    /// Front matter metadata
    pub fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    /// Document body without front matter
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Resolved, non-empty glob list
    pub fn globs(&self) -> &[String] {
        &self.globs
    }
}
