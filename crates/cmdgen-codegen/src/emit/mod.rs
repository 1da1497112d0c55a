//! Per-language emitters.
//!
//! Each emitter renders one [`CommandModel`] into the complete source text of
//! one file for its language, and ships the runtime base file that generated
//! types derive from.
//!
//! # Built-in Languages
//!
//! | Identifier | Output | Runtime base |
//! |------------|--------|--------------|
//! | `python` | `example_command.py` dataclass | `base_command.py` |
//! | `javascript` | `example_command.js` ES module class | `BaseCommand.js` |
//! | `csharp` | `ExampleCommand.cs` class | `BaseCommand.cs` |
//! | `cplusplus` | `example_command.hpp` class | `base_command.hpp` |
//! | `java` | `ExampleCommand.java` Gson class | `Command.java` |
//! | `rust` | `example_command.rs` serde struct | the `cmdgen` crate |
//!
//! Emitters are pure: they read the model and return text. They never
//! normalize names themselves; every identifier derives from the model's
//! `command_name` and `wire_name` values.

mod cplusplus;
mod csharp;
mod java;
mod javascript;
mod python;
mod rust;

pub use cplusplus::CppEmitter;
pub use csharp::CSharpEmitter;
pub use java::JavaEmitter;
pub use javascript::JavaScriptEmitter;
pub use python::PythonEmitter;
pub use rust::RustEmitter;

use crate::config::GeneratorConfig;
use crate::error::EmitError;
use crate::model::{CommandModel, FieldModel};
use std::sync::Arc;

/// Identifiers of the languages shipped with the generator.
pub const BUILTIN_LANGUAGES: &[&str] = &[
    "python",
    "javascript",
    "csharp",
    "cplusplus",
    "java",
    "rust",
];

/// First line of every generated file, after the language's comment marker.
pub const GENERATED_NOTICE: &str = "This file is auto-generated. Do not edit manually.";

/// A renderer for one target language.
pub trait Emitter: Send + Sync {
    /// Language identifier, used as the output subdirectory.
    fn language(&self) -> &str;

    /// File name of the artifact for `command`.
    fn file_name(&self, command: &CommandModel) -> String;

    /// Render the complete source text for `command`.
    ///
    /// Fails without partial output when a field type has no mapping or a
    /// member name is unusable in the language.
    fn emit(&self, command: &CommandModel) -> Result<String, EmitError>;

    /// Runtime files generated code depends on.
    fn support_files(&self) -> Vec<SupportFile> {
        Vec::new()
    }
}

/// A static runtime file shipped alongside generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportFile {
    pub file_name: String,
    pub content: String,
}

impl SupportFile {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Construct the built-in emitter for `language`.
pub fn builtin_emitter(language: &str, config: &GeneratorConfig) -> Option<Arc<dyn Emitter>> {
    let emitter: Arc<dyn Emitter> = match language {
        "python" => Arc::new(PythonEmitter),
        "javascript" => Arc::new(JavaScriptEmitter),
        "csharp" => Arc::new(CSharpEmitter::new(&config.namespace)),
        "cplusplus" => Arc::new(CppEmitter::new(&config.namespace)),
        "java" => Arc::new(JavaEmitter::new(&config.java_package)),
        "rust" => Arc::new(RustEmitter::new(&config.rust_crate)),
        _ => return None,
    };
    Some(emitter)
}

/// Documentation split into trimmed lines, without surrounding blank lines.
pub(crate) fn doc_lines(docs: Option<&str>) -> Vec<&str> {
    let Some(docs) = docs else {
        return Vec::new();
    };

    let mut lines: Vec<&str> = docs.lines().map(str::trim).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);
    lines
}

/// Fail with `ReservedIdentifier` when `member` is in `reserved`.
pub(crate) fn check_reserved(
    field: &FieldModel,
    member: &str,
    reserved: &[&str],
    language: &str,
) -> Result<(), EmitError> {
    if reserved.contains(&member) {
        return Err(EmitError::ReservedIdentifier {
            field: field.source_name.clone(),
            member: member.to_string(),
            language: language.to_string(),
        });
    }
    Ok(())
}

/// Fail with `ReservedTypeName` when the command's type name is in `reserved`.
pub(crate) fn check_type_name(
    command: &CommandModel,
    reserved: &[&str],
    language: &str,
) -> Result<(), EmitError> {
    if reserved.contains(&command.type_name.as_str()) {
        return Err(EmitError::ReservedTypeName {
            type_name: command.type_name.clone(),
            language: language.to_string(),
        });
    }
    Ok(())
}

/// Make a documentation line safe inside a `/* ... */` block.
pub(crate) fn block_comment_text(line: &str) -> String {
    line.replace("*/", "* /")
}

/// Escape `text` for a double-quoted string literal in C-family languages.
pub(crate) fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
