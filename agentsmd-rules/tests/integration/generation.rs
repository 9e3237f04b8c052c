//! End-to-end generation tests over a fixture rule tree

use agentsmd_common::OutputMode;
use agentsmd_rules::{
    generate_content, generate_inline_content, generate_reference_content, load_rule_files,
};
use agentsmd_test_utils::RuleTreeFixture;

#[test_log::test]
fn test_inline_mode_expands_globs_and_demotes_h1_outside_code_fences() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    let rules = load_rule_files(".cursor/rules", &fixture.context()).unwrap();

    let output = generate_inline_content(&rules);

    assert!(output.contains("# src/**/*.ts"));
    assert!(output.contains("# tests/**/*.ts"));
    assert!(output.contains(
        "<!-- BEGIN CURSOR_RULES: file=.cursor/rules/alpha.md glob=src/**/*.ts -->"
    ));
    assert!(output.contains(
        "<!-- END CURSOR_RULES: file=.cursor/rules/alpha.md glob=tests/**/*.ts -->"
    ));
    assert!(output.contains("## Alpha Title"));
    assert!(output.contains("```ts\n# not demoted\n```"));
    assert!(!output.contains("\n# Alpha Title"));
    assert_eq!(output.matches("## Alpha Title").count(), 2);
    assert!(!output.ends_with('\n'));
}

#[test_log::test]
fn test_reference_mode_emits_section_titles_and_at_references() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    let rules = load_rule_files(".cursor/rules", &fixture.context()).unwrap();

    let output = generate_reference_content(&rules);

    assert!(output.starts_with(
        "## Ruleset: TypeScript Rules\n**Applies to (globs):**\n* `src/**/*.ts`\n* `tests/**/*.ts`\n\n**Includes:**\n* `@.cursor/rules/alpha.md`\n\n---"
    ));
    assert!(output.contains("## Ruleset: Beta\n"));
    assert!(output.contains("* `@.cursor/rules/nested/beta.mdc`"));
    assert!(output.ends_with("---"));
}

#[test]
fn test_generate_content_dispatches_on_mode() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    let rules = load_rule_files(".cursor/rules", &fixture.context()).unwrap();

    assert_eq!(
        generate_content(OutputMode::Inline, &rules),
        generate_inline_content(&rules)
    );
    assert_eq!(
        generate_content(OutputMode::Reference, &rules),
        generate_reference_content(&rules)
    );
}
