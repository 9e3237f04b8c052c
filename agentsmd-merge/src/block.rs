//! Sentinel markers and the pure upsert state machine

use std::ops::Range;
use tracing::debug;

/// Opens the generated block
pub const GENERATED_START: &str = "<!-- AGENTSMD:GENERATED START -->";

/// Closes the generated block; hand-written rules go below it
pub const GENERATED_INSERT: &str = "<!-- AGENTSMD:GENERATED END (add custom rules below) -->";

/// Bracket generated content with the sentinels, each on its own line
pub fn wrap_generated_content(content: &str) -> String {
    format!("{GENERATED_START}\n{content}\n{GENERATED_INSERT}")
}

/// True iff both sentinels appear anywhere in `text`
pub fn has_markers(text: &str) -> bool {
    text.contains(GENERATED_START) && text.contains(GENERATED_INSERT)
}

/// Byte range of the existing generated block, sentinels included
///
/// The block runs from the first start marker through the first end marker
/// after it. An end marker that only appears before the start marker does
/// not close anything.
pub fn find_generated_block(text: &str) -> Option<Range<usize>> {
    let start = text.find(GENERATED_START)?;
    let after_start = start + GENERATED_START.len();
    let end = after_start + text[after_start..].find(GENERATED_INSERT)? + GENERATED_INSERT.len();
    Some(start..end)
}

/// Replace the generated block in `existing` or append `wrapped` to it
///
/// With no block present, `wrapped` is appended after exactly one blank
/// line; existing text is never trimmed. Either way the text outside the
/// block is preserved as-is.
pub fn upsert_generated_block(existing: &str, wrapped: &str) -> String {
    if let Some(range) = find_generated_block(existing) {
        debug!(start = range.start, end = range.end, "replacing generated block");
        let mut merged = String::with_capacity(existing.len() - range.len() + wrapped.len());
        merged.push_str(&existing[..range.start]);
        merged.push_str(wrapped);
        merged.push_str(&existing[range.end..]);
        return merged;
    }

    debug!("no generated block found, appending");
    let separator = if existing.is_empty() || existing.ends_with("\n\n") {
        ""
    } else if existing.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    format!("{existing}{separator}{wrapped}")
}
