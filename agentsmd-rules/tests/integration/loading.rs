//! Tests for discovering and loading a rule tree from disk

use agentsmd_common::RunContext;
use agentsmd_rules::{find_cursor_rules, load_rule_files};
use agentsmd_test_utils::RuleTreeFixture;

#[test]
fn test_finds_nested_md_and_mdc_files_with_stable_ordering() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    fixture.write_rule("notes.txt", "ignored").unwrap();

    let results = find_cursor_rules(fixture.rules_dir(), &fixture.context()).unwrap();

    assert_eq!(
        results,
        vec![
            fixture.rules_dir().join("alpha.md"),
            fixture.rules_dir().join("nested").join("beta.mdc"),
        ]
    );
}

#[test]
fn test_ordering_is_by_path_string_not_depth() {
    let fixture = RuleTreeFixture::new().unwrap();
    for rel in ["b.md", "a/z/deep.md", "a.md", "a_b.mdc", "a/c.md"] {
        fixture.write_rule(rel, "body").unwrap();
    }
    let ctx = fixture.context();

    let names: Vec<String> = find_cursor_rules(".cursor/rules", &ctx)
        .unwrap()
        .iter()
        .map(|p| ctx.relative_path(p))
        .collect();

    assert_eq!(
        names,
        vec![
            ".cursor/rules/a.md",
            ".cursor/rules/a/c.md",
            ".cursor/rules/a/z/deep.md",
            ".cursor/rules/a_b.mdc",
            ".cursor/rules/b.md",
        ]
    );
}

#[test]
fn test_load_resolves_metadata_and_globs() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();

    let rules = load_rule_files(".cursor/rules", &fixture.context()).unwrap();

    assert_eq!(rules.len(), 2);
    let alpha = &rules[0];
    assert_eq!(alpha.rel_path(), ".cursor/rules/alpha.md");
    assert_eq!(alpha.globs(), ["src/**/*.ts", "tests/**/*.ts"]);
    assert_eq!(alpha.meta().description.as_deref(), Some("TypeScript Rules"));
    assert_eq!(alpha.meta().always_apply, Some(false));
    assert!(alpha.body().starts_with("# Alpha Title"));

    let beta = &rules[1];
    assert_eq!(beta.rel_path(), ".cursor/rules/nested/beta.mdc");
    assert_eq!(beta.globs(), ["docs/**/*.md"]);
    assert_eq!(beta.meta().description, None);
}

#[test]
fn test_rule_without_globs_gets_catch_all() {
    let fixture = RuleTreeFixture::new().unwrap();
    fixture
        .write_rule("plain.md", "---\ndescription: Plain\n---\nBody")
        .unwrap();
    fixture.write_rule("bare.md", "No front matter at all").unwrap();

    let rules = load_rule_files(fixture.rules_dir(), &fixture.context()).unwrap();

    for rule in &rules {
        assert_eq!(rule.globs(), ["**/*"]);
    }
    assert_eq!(rules[0].body(), "No front matter at all");
}

#[test]
fn test_relative_paths_follow_the_context_not_the_process() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    let ctx = RunContext::new(fixture.cursor_dir());

    let rules = load_rule_files(fixture.rules_dir(), &ctx).unwrap();

    assert_eq!(rules[0].rel_path(), "rules/alpha.md");
    assert_eq!(rules[1].rel_path(), "rules/nested/beta.mdc");
}

#[test]
fn test_empty_rules_dir_loads_nothing() {
    let fixture = RuleTreeFixture::new().unwrap();
    let rules = load_rule_files(fixture.rules_dir(), &fixture.context()).unwrap();
    assert!(rules.is_empty());
}
