#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

const EXAMPLE_SCHEMA: &str = r#"{
    "ExampleCommand": {
        "ABOUT": ["This is a test command.", "Example message", "Example count", "Example bool"],
        "someMessage": "str",
        "count": "int",
        "someBooleanExample": "bool"
    },
    "AnotherExampleCommand": {
        "ABOUT": ["Another test command.", "Optional string"],
        "couldBeNothing": "Optional[str]"
    }
}"#;

#[test]
fn parse_commands___example_schema___keeps_declaration_order() {
    let commands = parse_commands(EXAMPLE_SCHEMA).unwrap();

    let names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["ExampleCommand", "AnotherExampleCommand"]);

    let fields: Vec<_> = commands[0].fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["someMessage", "count", "someBooleanExample"]);
}

#[test]
fn parse_commands___about___documents_command_then_fields() {
    let commands = parse_commands(EXAMPLE_SCHEMA).unwrap();
    let example = &commands[0];

    assert_eq!(example.docs.as_deref(), Some("This is a test command."));
    assert_eq!(example.fields[0].docs.as_deref(), Some("Example message"));
    assert_eq!(example.fields[2].docs.as_deref(), Some("Example bool"));
}

#[test]
fn parse_commands___type_strings___map_to_field_types() {
    let commands = parse_commands(EXAMPLE_SCHEMA).unwrap();

    assert_eq!(commands[0].fields[0].ty, FieldType::String);
    assert_eq!(commands[0].fields[1].ty, FieldType::Integer);
    assert_eq!(commands[0].fields[2].ty, FieldType::Boolean);
    assert_eq!(
        commands[1].fields[0].ty,
        FieldType::optional(FieldType::String)
    );
}

#[test]
fn parse_commands___unknown_type___is_kept_as_custom() {
    let commands = parse_commands(r#"{"Timed": {"when": "datetime"}}"#).unwrap();

    assert_eq!(
        commands[0].fields[0].ty,
        FieldType::Custom("datetime".into())
    );
}

#[test]
fn parse_commands___missing_about___uses_default_command_doc() {
    let commands = parse_commands(r#"{"PingCommand": {"count": "int"}}"#).unwrap();

    assert_eq!(commands[0].docs.as_deref(), Some("PingCommand command."));
    assert_eq!(commands[0].fields[0].docs, None);
}

#[test]
fn parse_commands___empty_about_entry___means_no_field_doc() {
    let commands =
        parse_commands(r#"{"Pair": {"ABOUT": ["Two values.", "", "Second"], "a": "int", "b": "int"}}"#)
            .unwrap();

    assert_eq!(commands[0].fields[0].docs, None);
    assert_eq!(commands[0].fields[1].docs.as_deref(), Some("Second"));
}

#[test]
fn parse_commands___zero_fields___is_accepted() {
    let commands = parse_commands(r#"{"NoopCommand": {"ABOUT": ["Does nothing."]}}"#).unwrap();

    assert!(commands[0].fields.is_empty());
}

#[test_case("[1, 2]", "JSON object"; "top level array")]
#[test_case(r#"{"Bad": 3}"#, "Bad must map"; "body not object")]
#[test_case(r#"{"Bad": {"x": 1}}"#, "type string"; "field type not string")]
#[test_case(r#"{"Bad": {"ABOUT": "text"}}"#, "list of strings"; "about not list")]
#[test_case(r#"{"Bad": {"ABOUT": [1]}}"#, "list of strings"; "about entry not string")]
#[test_case("{not json", "valid JSON"; "malformed")]
fn parse_commands___invalid_schema___fails(content: &str, message: &str) {
    let err = parse_commands(content).unwrap_err();

    assert!(
        format!("{err:#}").contains(message),
        "expected {message:?} in {err:#}"
    );
}

#[test]
fn load___single_file___parses_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commands.json");
    std::fs::write(&path, EXAMPLE_SCHEMA).unwrap();

    let commands = load(&path).unwrap();

    assert_eq!(commands.len(), 2);
}

#[test]
fn load___directory___reads_json_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.json"), r#"{"Second": {}}"#).unwrap();
    std::fs::write(dir.path().join("a.json"), r#"{"First": {}}"#).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let commands = load(dir.path()).unwrap();

    let names: Vec<_> = commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["First", "Second"]);
}

#[test]
fn load___duplicate_across_files___fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.json"), r#"{"Same": {}}"#).unwrap();
    std::fs::write(dir.path().join("b.json"), r#"{"Same": {}}"#).unwrap();

    let err = load(dir.path()).unwrap_err();

    assert!(err.to_string().contains("more than once"));
}

#[test]
fn load___empty_directory___fails() {
    let dir = tempfile::tempdir().unwrap();

    assert!(load(dir.path()).is_err());
}

#[test]
fn load___missing_file___reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load(&path).unwrap_err();

    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn check___valid_schema___succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commands.json");
    std::fs::write(&path, EXAMPLE_SCHEMA).unwrap();

    check(&path, &GeneratorConfig::default()).unwrap();
}

#[test]
fn check___unsupported_type___fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commands.json");
    std::fs::write(&path, r#"{"Timed": {"when": "datetime"}}"#).unwrap();

    let err = check(&path, &GeneratorConfig::default()).unwrap_err();

    assert!(err.to_string().contains("pair(s)"));
}
