//! Markdown helpers for rule bodies

use crate::rules::RuleMeta;
use std::path::Path;

/// Title used when a file name yields no words
pub const FALLBACK_TITLE: &str = "Rules";

/// Split text into lines on `\n` or `\r\n`
///
/// Unlike [`str::lines`], a trailing newline produces a final empty line so
/// that re-joining with `\n` round-trips.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn is_fence(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Demote level-1 headings (`# `) to level 2, leaving fenced code alone
///
/// Any backtick or tilde fence line toggles the in-fence flag, whichever
/// family opened the block. Output is joined with bare `\n`.
pub fn demote_h1_to_h2(markdown: &str) -> String {
    let mut in_fence = false;

    split_lines(markdown)
        .into_iter()
        .map(|line| {
            if is_fence(line) {
                in_fence = !in_fence;
                return line.to_string();
            }
            match line.strip_prefix("# ") {
                Some(rest) if !in_fence => format!("## {rest}"),
                _ => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display title for a rule section
///
/// Uses the description when present, otherwise words from the file name:
/// `api-client.md` becomes `Api Client`.
pub fn title_from_rule(meta: &RuleMeta, file_path: &str) -> String {
    if let Some(description) = meta.description.as_deref().filter(|d| !d.is_empty()) {
        return description.to_string();
    }

    let base = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = strip_rule_extension(&base);

    let words: Vec<String> = stem
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect();

    if words.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        words.join(" ")
    }
}

/// Remove a trailing `.md` or `.mdc`, ignoring case
fn strip_rule_extension(name: &str) -> &str {
    let lower = name.to_ascii_lowercase();
    for ext in [".mdc", ".md"] {
        if lower.ends_with(ext) {
            return &name[..name.len() - ext.len()];
        }
    }
    name
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
