//! Content generation for the agents file
//!
//! Both generators preserve input order and trim trailing whitespace from
//! their output.

use crate::markdown::{demote_h1_to_h2, title_from_rule};
use crate::rules::RuleFile;
use agentsmd_common::OutputMode;

/// Provenance comment opening an inlined rule body
pub fn inline_begin_marker(rel_path: &str, glob: &str) -> String {
    format!("<!-- BEGIN CURSOR_RULES: file={rel_path} glob={glob} -->")
}

/// Provenance comment closing an inlined rule body
pub fn inline_end_marker(rel_path: &str, glob: &str) -> String {
    format!("<!-- END CURSOR_RULES: file={rel_path} glob={glob} -->")
}

/// Generate content for the requested mode
pub fn generate_content(mode: OutputMode, rules: &[RuleFile]) -> String {
    match mode {
        OutputMode::Inline => generate_inline_content(rules),
        OutputMode::Reference => generate_reference_content(rules),
    }
}

/// Embed each rule body once per glob under a `# <glob>` heading
///
/// A rule with N globs yields N sections, each carrying the full body with
/// its level-1 headings demoted.
pub fn generate_inline_content(rules: &[RuleFile]) -> String {
    let mut sections: Vec<String> = Vec::new();

    for rule in rules {
        let demoted = demote_h1_to_h2(rule.body());
        let demoted = demoted.trim_end();

        for glob in rule.globs() {
            sections.push(format!("# {glob}"));
            sections.push(String::new());
            sections.push(inline_begin_marker(rule.rel_path(), glob));
            sections.push(String::new());
            if !demoted.is_empty() {
                sections.push(demoted.to_string());
                sections.push(String::new());
            }
            sections.push(inline_end_marker(rule.rel_path(), glob));
            sections.push(String::new());
        }
    }

    sections.join("\n").trim_end().to_string()
}

/// Emit one short section per rule pointing at the rule file with `@path`
pub fn generate_reference_content(rules: &[RuleFile]) -> String {
    let mut sections: Vec<String> = Vec::new();

    for rule in rules {
        sections.push(format!(
            "## Ruleset: {}",
            title_from_rule(rule.meta(), rule.rel_path())
        ));
        sections.push("**Applies to (globs):**".to_string());
        for glob in rule.globs() {
            sections.push(format!("* `{glob}`"));
        }
        sections.push(String::new());
        sections.push("**Includes:**".to_string());
        sections.push(format!("* `@{}`", rule.rel_path()));
        sections.push(String::new());
        sections.push("---".to_string());
        sections.push(String::new());
    }

    sections.join("\n").trim_end().to_string()
}
