//! # agentsmd Rules Domain Crate
//!
//! Turns a directory of cursor rule documents into the text of a generated
//! agents file block.
//!
//! ## Features
//!
//! - **Front matter**: a minimal `globs` / `description` / `alwaysApply` grammar
//! - **Loading**: recursive `.md`/`.mdc` discovery in deterministic order
//! - **Markdown**: H1 demotion that respects fenced code
//! - **Generation**: inline (bodies per glob) and reference (`@path` per rule) modes

#![warn(missing_docs)]

mod frontmatter;
mod generate;
mod markdown;
mod rule_loader;
mod rules;

pub use frontmatter::{parse_rule_file, FRONTMATTER_DELIMITER};
pub use generate::{
    generate_content, generate_inline_content, generate_reference_content, inline_begin_marker,
    inline_end_marker,
};
pub use markdown::{demote_h1_to_h2, title_from_rule, FALLBACK_TITLE};
pub use rule_loader::{find_cursor_rules, load_rule_files, RuleLoader};
pub use rules::{normalize_globs, ParsedRule, RuleFile, RuleMeta, DEFAULT_GLOB};
