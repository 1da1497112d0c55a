#![allow(non_snake_case)]

use cmdgen_codegen::{
    BUILTIN_LANGUAGES, CommandDef, EmitError, FieldDef, FieldType, GenerationReport, Generator,
    GeneratorConfig,
};
use std::collections::BTreeMap;

fn run(commands: &[CommandDef]) -> GenerationReport {
    Generator::from_config(&GeneratorConfig::default())
        .unwrap()
        .run(commands)
}

fn schema() -> Vec<CommandDef> {
    vec![
        CommandDef::new("HTTPServerConfig")
            .with_field(FieldDef::new("UserID", FieldType::String))
            .with_field(FieldDef::new("maxRetries", FieldType::Integer))
            .with_field(FieldDef::new("XMLHttpRequest", FieldType::optional(FieldType::Boolean))),
        CommandDef::new("ExampleCommand")
            .with_field(FieldDef::new("someMessage", FieldType::String)),
        CommandDef::new("AnotherExampleCommand"),
    ]
}

#[test]
fn members___identical_in_every_language() {
    let report = run(&schema());
    assert!(report.is_success(), "{:?}", report.failures);

    let mut by_command: BTreeMap<&str, Vec<&Vec<String>>> = BTreeMap::new();
    for artifact in &report.artifacts {
        by_command
            .entry(artifact.command.as_str())
            .or_default()
            .push(&artifact.members);
    }

    for (command, members) in by_command {
        assert_eq!(members.len(), BUILTIN_LANGUAGES.len(), "{command}");
        assert!(members.windows(2).all(|w| w[0] == w[1]), "{command}: {members:?}");
    }
}

#[test]
fn command_name___baked_into_every_artifact() {
    let report = run(&schema());

    for artifact in &report.artifacts {
        let expected = match artifact.command.as_str() {
            "HTTPServerConfig" => "http_server_config",
            "ExampleCommand" => "example_command",
            "AnotherExampleCommand" => "another_example_command",
            other => panic!("unexpected command {other}"),
        };
        assert_eq!(artifact.command_name, expected);
        assert!(
            artifact.content.contains(&format!("\"{expected}\""))
                || artifact.content.contains(&format!("'{expected}'")),
            "{} [{}] does not contain {expected}",
            artifact.command,
            artifact.language
        );
    }
}

#[test]
fn wire_names___present_in_every_artifact() {
    let report = run(&schema());

    for artifact in report.artifacts.iter().filter(|a| a.command == "HTTPServerConfig") {
        assert_eq!(artifact.members, ["user_id", "max_retries", "xml_http_request"]);
        for member in &artifact.members {
            assert!(
                artifact.content.contains(member.as_str()),
                "{} missing {member}",
                artifact.language
            );
        }
    }
}

#[test]
fn support_files___shipped_for_runtime_languages() {
    let report = run(&[]);

    let mut files: Vec<_> = report
        .support_files
        .iter()
        .map(|f| format!("{}/{}", f.language, f.file_name))
        .collect();
    files.sort();

    assert_eq!(
        files,
        [
            "cplusplus/base_command.hpp",
            "csharp/BaseCommand.cs",
            "java/Command.java",
            "javascript/BaseCommand.js",
            "python/__init__.py",
            "python/base_command.py",
        ]
    );
}

#[test]
fn unsupported_type___fails_every_language_without_output() {
    let bad = CommandDef::new("Timed")
        .with_field(FieldDef::new("at", FieldType::Custom("datetime".into())));
    let report = run(&[bad, CommandDef::new("Fine")]);

    assert_eq!(report.failures.len(), BUILTIN_LANGUAGES.len());
    assert!(report.artifacts.iter().all(|a| a.command == "Fine"));
    for failure in &report.failures {
        assert_eq!(
            failure.error,
            EmitError::UnsupportedType {
                field: "at".into(),
                ty: "datetime".into(),
                language: failure.language.clone(),
            }
        );
    }
}

#[test]
fn invalid_command_name___fails_every_language() {
    let report = run(&[CommandDef::new("")]);

    assert!(report.artifacts.is_empty());
    assert_eq!(report.failures.len(), BUILTIN_LANGUAGES.len());
    assert!(
        report
            .failures
            .iter()
            .all(|f| matches!(f.error, EmitError::InvalidIdentifier(_)))
    );
}

#[test]
fn reserved_word___fails_only_affected_languages() {
    // "class" is a keyword in python, cplusplus and java only
    let command = CommandDef::new("Styled").with_field(FieldDef::new("Class", FieldType::String));
    let report = run(&[command]);

    let mut failed: Vec<_> = report.failures.iter().map(|f| f.language.as_str()).collect();
    failed.sort();
    let mut succeeded: Vec<_> = report.artifacts.iter().map(|a| a.language.as_str()).collect();
    succeeded.sort();

    assert_eq!(failed, ["cplusplus", "java", "python"]);
    assert_eq!(succeeded, ["csharp", "javascript", "rust"]);
}

#[test]
fn run___acronym_and_word_spellings_of_one_name___fail_instead_of_overwriting() {
    let report = run(&[CommandDef::new("HTTPServer"), CommandDef::new("HttpServer")]);

    assert!(report.artifacts.is_empty());
    assert_eq!(report.failures.len(), 2 * BUILTIN_LANGUAGES.len());
    assert!(report
        .failures
        .iter()
        .all(|f| matches!(f.error, EmitError::DuplicateCommandName { .. })));
}
