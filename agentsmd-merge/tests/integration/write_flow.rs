//! Generate from a rule tree and write it through the merge engine

use agentsmd_common::{OutputMode, WriteMode};
use agentsmd_merge::{
    has_markers, wrap_generated_content, write_agents_file, write_agents_file_with_clock,
    WriteRequest, GENERATED_INSERT, GENERATED_START,
};
use agentsmd_rules::{generate_content, load_rule_files};
use agentsmd_test_utils::RuleTreeFixture;
use chrono::{TimeZone, Utc};

fn wrapped_for(fixture: &RuleTreeFixture, mode: OutputMode) -> String {
    let rules = load_rule_files(".cursor/rules", &fixture.context()).unwrap();
    wrap_generated_content(&generate_content(mode, &rules))
}

#[test_log::test]
fn test_writes_generated_file_to_disk() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    let out = fixture.root().join("AGENTS.generated.md");

    let request = WriteRequest::new(&out, wrapped_for(&fixture, OutputMode::Reference))
        .with_write_mode(WriteMode::Overwrite);
    write_agents_file(&request).unwrap();

    let written = fixture.read_file("AGENTS.generated.md").unwrap();
    assert!(written.starts_with(GENERATED_START));
    assert!(written.contains("## Ruleset: TypeScript Rules"));
    assert!(written.ends_with(&format!("{GENERATED_INSERT}\n")));
}

#[test_log::test]
fn test_repeated_runs_keep_custom_rules_and_converge() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    fixture
        .write_file("AGENTS.md", "# Team notes\n\nUse tabs.\n")
        .unwrap();
    let out = fixture.root().join("AGENTS.md");

    let inline = WriteRequest::new(&out, wrapped_for(&fixture, OutputMode::Inline));
    let first = write_agents_file(&inline).unwrap();
    assert!(!first.replaced);

    let mut after_first = fixture.read_file("AGENTS.md").unwrap();
    after_first.push_str("\n## Custom\n\nHand-written rule.\n");
    fixture.write_file("AGENTS.md", &after_first).unwrap();

    let reference = WriteRequest::new(&out, wrapped_for(&fixture, OutputMode::Reference));
    let second = write_agents_file(&reference).unwrap();
    let third = write_agents_file(&reference).unwrap();

    assert!(second.replaced);
    assert_eq!(second.final_content, third.final_content);
    let final_text = fixture.read_file("AGENTS.md").unwrap();
    assert!(final_text.starts_with("# Team notes\n\nUse tabs.\n\n"));
    assert!(final_text.ends_with("## Custom\n\nHand-written rule.\n"));
    assert_eq!(final_text.matches(GENERATED_START).count(), 1);
    assert!(!final_text.contains("BEGIN CURSOR_RULES"));
    assert!(has_markers(&final_text));
}

#[test]
fn test_overwrite_backs_up_previous_file() {
    let fixture = RuleTreeFixture::with_sample_rules().unwrap();
    fixture.write_file("AGENTS.md", "old content").unwrap();
    let out = fixture.root().join("AGENTS.md");
    let clock = || Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let request = WriteRequest::new(&out, wrapped_for(&fixture, OutputMode::Reference))
        .with_write_mode(WriteMode::Overwrite);
    let outcome = write_agents_file_with_clock(&request, &clock).unwrap();

    assert_eq!(
        outcome.backup_path.as_deref(),
        Some(fixture.root().join("AGENTS.20240102-030405.bak").as_path())
    );
    assert_eq!(
        fixture.read_file("AGENTS.20240102-030405.bak").unwrap(),
        "old content"
    );
}
