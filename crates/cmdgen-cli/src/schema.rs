//! Command schema loading
//!
//! A schema file is a JSON object mapping command names to their bodies.
//! Each body maps field names to type strings, in declaration order, plus an
//! optional `ABOUT` list: the first entry documents the command and the
//! following entries document the fields by position.
//!
//! ```json
//! {
//!   "ExampleCommand": {
//!     "ABOUT": ["This is a test command.", "Example message"],
//!     "someMessage": "str"
//!   }
//! }
//! ```

use anyhow::{Context, Result, bail};
use cmdgen_codegen::{CommandDef, FieldDef, FieldType, Generator, GeneratorConfig};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Documentation key inside a command body
pub const ABOUT_KEY: &str = "ABOUT";

/// Load commands from a schema file or a directory of `*.json` schema files.
///
/// Directory entries are read in file name order.
pub fn load(source: &Path) -> Result<Vec<CommandDef>> {
    let files = schema_files(source)?;
    let mut commands = Vec::new();
    let mut seen = HashSet::new();

    for file in &files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read schema: {}", file.display()))?;
        let parsed = parse_commands(&content)
            .with_context(|| format!("Failed to parse schema: {}", file.display()))?;

        for command in parsed {
            if !seen.insert(command.name.clone()) {
                bail!(
                    "Command {} is defined more than once (again in {})",
                    command.name,
                    file.display()
                );
            }
            commands.push(command);
        }
    }

    tracing::debug!(
        "Loaded {} command(s) from {} schema file(s)",
        commands.len(),
        files.len()
    );

    Ok(commands)
}

fn schema_files(source: &Path) -> Result<Vec<PathBuf>> {
    if !source.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    let mut files = Vec::new();
    let entries = std::fs::read_dir(source)
        .with_context(|| format!("Failed to read schema directory: {}", source.display()))?;
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        bail!("No *.json schema files in {}", source.display());
    }

    Ok(files)
}

/// Parse schema JSON text into command definitions, keeping declaration order.
pub fn parse_commands(content: &str) -> Result<Vec<CommandDef>> {
    let value: Value = serde_json::from_str(content).context("Schema is not valid JSON")?;

    let Value::Object(commands) = value else {
        bail!("Schema must be a JSON object mapping command names to bodies");
    };

    commands
        .iter()
        .map(|(name, body)| parse_command(name, body))
        .collect()
}

fn parse_command(name: &str, body: &Value) -> Result<CommandDef> {
    let Value::Object(body) = body else {
        bail!("Command {name} must map to a JSON object");
    };

    let about = about_lines(name, body)?;
    let mut about = about.into_iter();

    let docs = about
        .next()
        .flatten()
        .unwrap_or_else(|| format!("{name} command."));
    let mut command = CommandDef::new(name).with_docs(docs);

    for (field_name, ty) in body.iter().filter(|(key, _)| *key != ABOUT_KEY) {
        let Value::String(ty) = ty else {
            bail!("Field {field_name} of {name} must have a type string");
        };

        let mut field = FieldDef::new(field_name, FieldType::parse(ty));
        if let Some(docs) = about.next().flatten() {
            field = field.with_docs(docs);
        }
        command = command.with_field(field);
    }

    Ok(command)
}

/// Doc entries in order; an empty string means "no documentation".
fn about_lines(name: &str, body: &Map<String, Value>) -> Result<Vec<Option<String>>> {
    let Some(about) = body.get(ABOUT_KEY) else {
        return Ok(Vec::new());
    };

    let Value::Array(entries) = about else {
        bail!("{ABOUT_KEY} of {name} must be a list of strings");
    };

    entries
        .iter()
        .map(|entry| match entry {
            Value::String(text) if text.trim().is_empty() => Ok(None),
            Value::String(text) => Ok(Some(text.clone())),
            _ => bail!("{ABOUT_KEY} of {name} must be a list of strings"),
        })
        .collect()
}

/// Validate a schema against every configured language without writing files.
pub fn check(source: &Path, config: &GeneratorConfig) -> Result<()> {
    let commands = load(source)?;
    let generator = Generator::from_config(config)?;
    let report = generator.run(&commands);

    println!("✓ Schema: {}", source.display());
    println!("  Commands: {}", commands.len());
    for command in &commands {
        println!("    {} ({} field(s))", command.name, command.fields.len());
    }
    println!(
        "  Languages: {}",
        generator.languages().collect::<Vec<_>>().join(", ")
    );

    if report.is_success() {
        println!("✓ {} file(s) would be generated", report.artifacts.len());
        return Ok(());
    }

    for failure in &report.failures {
        eprintln!("✗ {failure}");
    }
    bail!(
        "Schema check failed for {} command/language pair(s)",
        report.failures.len()
    )
}

#[cfg(test)]
#[path = "schema/schema_tests.rs"]
mod schema_tests;
