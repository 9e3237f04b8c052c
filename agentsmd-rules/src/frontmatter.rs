//! Front matter parsing for rule documents
//!
//! Rule documents carry a small metadata block: flat
//! `key: value` pairs plus `key:` lines followed by `- item` lists. Only
//! `globs`, `description`, and `alwaysApply` are recognised. Anything the
//! grammar does not understand is skipped, and a missing or unterminated
//! block degrades to empty metadata with the whole document as body.
//!
//! # Format
//! ```markdown
//! ---
//! description: TypeScript Rules
//! globs: [src/**/*.ts, tests/**/*.ts]
//! alwaysApply: false
//! ---
//! # Body starts here
//! ```

use crate::markdown::split_lines;
use crate::rules::{ParsedRule, RuleMeta};
use regex::Regex;
use std::sync::OnceLock;
use tracing::trace;

/// Line that opens and closes the front matter block
pub const FRONTMATTER_DELIMITER: &str = "---";

const GLOBS_KEY: &str = "globs";
const DESCRIPTION_KEY: &str = "description";
const ALWAYS_APPLY_KEY: &str = "alwaysApply";

static ENTRY_REGEX: OnceLock<Regex> = OnceLock::new();

fn entry_regex() -> &'static Regex {
    ENTRY_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_-]+):\s*(.*)$").expect("Invalid front matter entry regex")
    })
}

/// Split a rule document into metadata and body
///
/// The first line must be exactly `---` and a later line must be exactly
/// `---` for a block to be recognised. Lines are split on `\n` and `\r\n`;
/// when a block is found the body is re-joined with bare `\n`.
pub fn parse_rule_file(text: &str) -> ParsedRule {
    let lines = split_lines(text);
    if lines.first() != Some(&FRONTMATTER_DELIMITER) {
        return ParsedRule::without_metadata(text);
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|line| *line == FRONTMATTER_DELIMITER)
        .map(|offset| offset + 1)
    else {
        trace!("front matter opened but never closed, treating as body");
        return ParsedRule::without_metadata(text);
    };

    ParsedRule {
        meta: parse_frontmatter(&lines[1..end]),
        body: lines[end + 1..].join("\n"),
    }
}

/// Classification of a single front matter line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    /// `key: value`; `value` is empty for a list opener
    Entry { key: &'a str, value: &'a str },
    /// `- value`
    ListItem(&'a str),
    Unrecognized,
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(item) = trimmed.strip_prefix("- ") {
        return Line::ListItem(item);
    }
    match entry_regex().captures(trimmed) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(key), Some(value)) => Line::Entry {
                key: key.as_str(),
                value: value.as_str(),
            },
            _ => Line::Unrecognized,
        },
        None => Line::Unrecognized,
    }
}

/// Parser state between lines
enum State<'a> {
    Scanning,
    /// Collecting `- item` lines directly after a `key:` line
    InList { key: &'a str, items: Vec<String> },
}

/// Parse the lines between the delimiters into [`RuleMeta`]
///
/// Later scalar entries overwrite earlier ones. A list only collects the
/// `- item` lines immediately following its `key:` line; stray list items
/// elsewhere are ignored.
fn parse_frontmatter(lines: &[&str]) -> RuleMeta {
    let mut meta = RuleMeta::default();
    let mut state = State::Scanning;

    for line in lines {
        let line = classify(line);

        if let State::InList { key, items } = &mut state {
            if let Line::ListItem(item) = line {
                items.push(unquote(item).to_string());
                continue;
            }
            let key = *key;
            let items = std::mem::take(items);
            apply_list(&mut meta, key, items);
            state = State::Scanning;
        }

        match line {
            Line::Entry { key, value: "" } => {
                state = State::InList {
                    key,
                    items: Vec::new(),
                };
            }
            Line::Entry { key, value } => apply_scalar(&mut meta, key, value),
            Line::Blank | Line::ListItem(_) | Line::Unrecognized => {}
        }
    }

    if let State::InList { key, items } = state {
        apply_list(&mut meta, key, items);
    }

    meta
}

fn apply_list(meta: &mut RuleMeta, key: &str, items: Vec<String>) {
    if key == GLOBS_KEY {
        meta.globs = Some(items);
    }
}

fn apply_scalar(meta: &mut RuleMeta, key: &str, value: &str) {
    match key {
        GLOBS_KEY => meta.globs = Some(parse_glob_value(value)),
        DESCRIPTION_KEY => meta.description = Some(unquote(value).to_string()),
        ALWAYS_APPLY_KEY => meta.always_apply = Some(value == "true"),
        _ => trace!(key, "ignoring unknown front matter key"),
    }
}

/// `[a, "b", 'c']` becomes three globs; anything else is a single glob
fn parse_glob_value(value: &str) -> Vec<String> {
    match value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        Some(inner) => inner
            .split(',')
            .map(|item| unquote(item.trim()))
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        None => vec![unquote(value).to_string()],
    }
}

/// Strip one surrounding pair of matching single or double quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len() - 1).unwrap_or("");
        }
    }
    value
}
