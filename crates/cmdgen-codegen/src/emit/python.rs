//! Python dataclass emitter.

use super::{
    Emitter, GENERATED_NOTICE, SupportFile, check_reserved, check_type_name, doc_lines,
};
use crate::error::EmitError;
use crate::model::{CommandModel, FieldShape, ScalarType};

const LANGUAGE: &str = "python";

const BASE_COMMAND: &str = include_str!("../../runtime/python/base_command.py");

/// Keywords plus the members `Command` defines.
const RESERVED: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is", "lambda",
    "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
    "command_name", "to_dict", "to_json", "from_json",
];

/// Names a generated class would shadow in its own module.
const TYPE_RESERVED: &[&str] = &[
    "None", "True", "False", "Command", "DecodeError", "dataclass", "ClassVar", "Optional",
];

/// Emits one `@dataclass` per command, deriving from `base_command.Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonEmitter;

impl Emitter for PythonEmitter {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn file_name(&self, command: &CommandModel) -> String {
        format!("{}.py", command.command_name)
    }

    fn emit(&self, command: &CommandModel) -> Result<String, EmitError> {
        check_type_name(command, RESERVED, LANGUAGE)?;
        check_type_name(command, TYPE_RESERVED, LANGUAGE)?;

        let mut members = Vec::with_capacity(command.fields.len());
        for field in &command.fields {
            let shape = field.shape(LANGUAGE)?;
            check_reserved(field, &field.wire_name, RESERVED, LANGUAGE)?;
            members.push((field, shape));
        }

        let mut code = String::new();
        code.push_str(&format!("# {GENERATED_NOTICE}\n"));
        code.push_str("from dataclasses import dataclass\n");
        if command.has_optional_fields() {
            code.push_str("from typing import ClassVar, Optional\n");
        } else {
            code.push_str("from typing import ClassVar\n");
        }
        code.push_str("\nfrom .base_command import Command\n\n\n");

        code.push_str("@dataclass\n");
        code.push_str(&format!("class {}(Command):\n", command.type_name));

        let docs = doc_lines(command.docs.as_deref());
        if !docs.is_empty() {
            code.push_str("    \"\"\"\n");
            for line in docs {
                code.push_str(&format!("    {}\n", docstring_text(line)));
            }
            code.push_str("    \"\"\"\n\n");
        }

        code.push_str(&format!(
            "    COMMAND_NAME: ClassVar[str] = \"{}\"\n",
            command.command_name
        ));

        if !members.is_empty() {
            code.push('\n');
        }
        for (field, shape) in members {
            for line in doc_lines(field.docs.as_deref()) {
                code.push_str(&format!("    # {line}\n"));
            }
            code.push_str(&format!(
                "    {}: {} = {}\n",
                field.wire_name,
                python_type(shape),
                default_value(shape)
            ));
        }

        Ok(code)
    }

    fn support_files(&self) -> Vec<SupportFile> {
        vec![
            SupportFile::new("__init__.py", format!("# {GENERATED_NOTICE}\n")),
            SupportFile::new("base_command.py", BASE_COMMAND),
        ]
    }
}

/// Escape backslashes and triple quotes inside a docstring.
fn docstring_text(line: &str) -> String {
    line.replace('\\', "\\\\")
        .replace("\"\"\"", "\\\"\\\"\\\"")
}

fn python_type(shape: FieldShape) -> String {
    let scalar = match shape.scalar {
        ScalarType::String => "str",
        ScalarType::Integer => "int",
        ScalarType::Boolean => "bool",
    };

    if shape.optional {
        format!("Optional[{scalar}]")
    } else {
        scalar.to_string()
    }
}

fn default_value(shape: FieldShape) -> &'static str {
    if shape.optional {
        return "None";
    }
    match shape.scalar {
        ScalarType::String => "\"\"",
        ScalarType::Integer => "0",
        ScalarType::Boolean => "False",
    }
}
