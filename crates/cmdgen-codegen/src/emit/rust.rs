//! Rust emitter producing serde structs that implement `cmdgen::Command`.
//!
//! The runtime contract lives in the `cmdgen` crate itself, so this emitter
//! ships no support files. Field names that are Rust keywords become raw
//! identifiers; serde strips the `r#` prefix, so the wire name is unchanged.

use super::{Emitter, GENERATED_NOTICE, check_type_name, doc_lines};
use crate::error::EmitError;
use crate::model::{CommandModel, FieldShape, ScalarType};

const LANGUAGE: &str = "rust";

/// Strict and reserved keywords usable as raw identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const UNESCAPABLE: &[&str] = &["crate", "self", "super"];

/// Type names that clash with `Self`, the generated imports, or the prelude
/// types generated fields use.
const TYPE_RESERVED: &[&str] = &[
    "Self", "Command", "Serialize", "Deserialize", "Option", "String", "Default",
];

/// Emits one serde struct per command.
#[derive(Debug, Clone)]
pub struct RustEmitter {
    runtime_crate: String,
}

impl RustEmitter {
    /// `runtime_crate` is the path generated code imports `Command` from.
    pub fn new(runtime_crate: impl Into<String>) -> Self {
        Self {
            runtime_crate: runtime_crate.into(),
        }
    }
}

impl Default for RustEmitter {
    fn default() -> Self {
        Self::new("cmdgen")
    }
}

impl Emitter for RustEmitter {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn file_name(&self, command: &CommandModel) -> String {
        format!("{}.rs", command.command_name)
    }

    fn emit(&self, command: &CommandModel) -> Result<String, EmitError> {
        check_type_name(command, KEYWORDS, LANGUAGE)?;
        check_type_name(command, UNESCAPABLE, LANGUAGE)?;
        check_type_name(command, TYPE_RESERVED, LANGUAGE)?;

        let mut members = Vec::with_capacity(command.fields.len());
        for field in &command.fields {
            let shape = field.shape(LANGUAGE)?;
            if UNESCAPABLE.contains(&field.wire_name.as_str()) {
                return Err(EmitError::ReservedIdentifier {
                    field: field.source_name.clone(),
                    member: field.wire_name.clone(),
                    language: LANGUAGE.to_string(),
                });
            }
            members.push((field, shape, rust_ident(&field.wire_name)));
        }

        let mut code = String::new();
        code.push_str(&format!("// {GENERATED_NOTICE}\n"));
        code.push_str(&format!("use {}::Command;\n", self.runtime_crate));
        code.push_str("use serde::{Deserialize, Serialize};\n\n");

        for line in doc_lines(command.docs.as_deref()) {
            push_doc_line(&mut code, "", line);
        }
        code.push_str("#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]\n");
        code.push_str("#[serde(default)]\n");

        if members.is_empty() {
            code.push_str(&format!("pub struct {} {{}}\n", command.type_name));
        } else {
            code.push_str(&format!("pub struct {} {{\n", command.type_name));
            for (field, shape, ident) in &members {
                for line in doc_lines(field.docs.as_deref()) {
                    push_doc_line(&mut code, "    ", line);
                }
                if shape.optional {
                    code.push_str("    #[serde(skip_serializing_if = \"Option::is_none\")]\n");
                }
                code.push_str(&format!("    pub {}: {},\n", ident, rust_type(*shape)));
            }
            code.push_str("}\n");
        }

        code.push_str(&format!("\nimpl Command for {} {{\n", command.type_name));
        code.push_str(&format!(
            "    const COMMAND_NAME: &'static str = \"{}\";\n",
            command.command_name
        ));
        code.push_str("}\n");

        Ok(code)
    }
}

fn push_doc_line(code: &mut String, indent: &str, line: &str) {
    if line.is_empty() {
        code.push_str(&format!("{indent}///\n"));
    } else {
        code.push_str(&format!("{indent}/// {line}\n"));
    }
}

fn rust_ident(wire_name: &str) -> String {
    if KEYWORDS.contains(&wire_name) {
        format!("r#{wire_name}")
    } else {
        wire_name.to_string()
    }
}

fn rust_type(shape: FieldShape) -> String {
    let scalar = match shape.scalar {
        ScalarType::String => "String",
        ScalarType::Integer => "i64",
        ScalarType::Boolean => "bool",
    };

    if shape.optional {
        format!("Option<{scalar}>")
    } else {
        scalar.to_string()
    }
}
