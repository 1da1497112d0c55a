#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn artifact(content: &str) -> GeneratedArtifact {
    GeneratedArtifact {
        language: "python".into(),
        command: "ExampleCommand".into(),
        command_name: "example_command".into(),
        file_name: "example_command.py".into(),
        members: vec![],
        content: content.into(),
    }
}

fn write_fixture(root: &Path, content: &str) {
    let dir = root.join("python");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("example_command.py"), content).unwrap();
}

#[test_case("a\r\nb\r\n", "a\nb\n"; "crlf")]
#[test_case("a   \nb\t\n", "a\nb\n"; "trailing whitespace")]
#[test_case("\n\n  \na\nb\n\n\n", "a\nb\n"; "surrounding blank lines")]
#[test_case("a\n\nb", "a\n\nb\n"; "inner blank line kept")]
#[test_case("  indented\n", "  indented\n"; "leading indentation kept")]
#[test_case("", ""; "empty")]
#[test_case(" \n\t\n", ""; "whitespace only")]
fn normalize_whitespace___canonical_form(input: &str, expected: &str) {
    assert_eq!(normalize_whitespace(input), expected);
}

#[test]
fn verify_artifact___whitespace_only_difference___matches() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "line one  \r\nline two\r\n\r\n");

    assert!(verify_artifact(&artifact("line one\nline two\n"), dir.path()).is_ok());
}

#[test]
fn verify_artifact___content_difference___reports_unified_diff() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "line one\nline two\n");

    let mismatch = verify_artifact(&artifact("line one\nline 2\n"), dir.path()).unwrap_err();

    assert_eq!(mismatch.command, "ExampleCommand");
    assert_eq!(mismatch.language, "python");
    assert_eq!(mismatch.path, dir.path().join("python/example_command.py"));
    assert!(mismatch.diff.contains("--- expected"));
    assert!(mismatch.diff.contains("+++ actual"));
    assert!(mismatch.diff.contains("-line two"));
    assert!(mismatch.diff.contains("+line 2"));
}

#[test]
fn verify_artifact___missing_fixture___is_mismatch() {
    let dir = tempfile::tempdir().unwrap();

    let mismatch = verify_artifact(&artifact("anything"), dir.path()).unwrap_err();

    assert!(mismatch.diff.starts_with("missing fixture"));
}

#[test]
fn verify_report___collects_every_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let mut other = artifact("x");
    other.language = "rust".into();
    other.file_name = "example_command.rs".into();
    let report = GenerationReport {
        artifacts: vec![artifact("x"), other],
        ..Default::default()
    };

    let err = verify_report(&report, dir.path()).unwrap_err();

    match err {
        CodegenError::Golden { mismatches } => assert_eq!(mismatches.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bless_report___then_verify___succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let report = GenerationReport {
        artifacts: vec![artifact("class ExampleCommand:\n    pass\n")],
        ..Default::default()
    };

    let written = bless_report(&report, dir.path()).unwrap();

    assert_eq!(written, 1);
    assert!(dir.path().join("python/example_command.py").exists());
    assert!(verify_report(&report, dir.path()).is_ok());
}

#[test]
fn GoldenMismatch___display___names_pair_and_path() {
    let mismatch = GoldenMismatch {
        command: "ExampleCommand".into(),
        language: "java".into(),
        path: PathBuf::from("expected/java/ExampleCommand.java"),
        diff: "-a\n+b\n".into(),
    };

    assert_eq!(
        mismatch.to_string(),
        "ExampleCommand [java] differs from expected/java/ExampleCommand.java\n-a\n+b\n"
    );
}
