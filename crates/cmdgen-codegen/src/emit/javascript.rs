//! JavaScript (ES module) emitter.

use super::{
    Emitter, GENERATED_NOTICE, SupportFile, block_comment_text, check_reserved, check_type_name,
    doc_lines,
};
use crate::error::EmitError;
use crate::model::{CommandModel, FieldShape, ScalarType};

const LANGUAGE: &str = "javascript";

const BASE_COMMAND: &str = include_str!("../../runtime/javascript/BaseCommand.js");

// Property names may be keywords; only names that break the class are reserved.
const RESERVED: &[&str] = &["constructor", "prototype"];

/// Reserved words plus the names the generated module binds.
const TYPE_RESERVED: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    "Command", "DecodeError",
];

/// Emits one ES module class per command, extending `BaseCommand.js`'s `Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptEmitter;

impl Emitter for JavaScriptEmitter {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn file_name(&self, command: &CommandModel) -> String {
        format!("{}.js", command.command_name)
    }

    fn emit(&self, command: &CommandModel) -> Result<String, EmitError> {
        check_type_name(command, TYPE_RESERVED, LANGUAGE)?;

        let mut members = Vec::with_capacity(command.fields.len());
        for field in &command.fields {
            let shape = field.shape(LANGUAGE)?;
            check_reserved(field, &field.wire_name, RESERVED, LANGUAGE)?;
            members.push((field, shape));
        }

        let mut code = String::new();
        code.push_str(&format!("// {GENERATED_NOTICE}\n"));
        code.push_str("import { Command } from './BaseCommand.js';\n\n");

        let docs = doc_lines(command.docs.as_deref());
        if !docs.is_empty() {
            code.push_str("/**\n");
            for line in docs {
                code.push_str(&format!(" * {}\n", block_comment_text(line)));
            }
            code.push_str(" */\n");
        }

        code.push_str(&format!(
            "export class {} extends Command {{\n",
            command.type_name
        ));
        code.push_str(&format!(
            "    static COMMAND_NAME = '{}';\n\n",
            command.command_name
        ));

        if members.is_empty() {
            code.push_str("    static FIELDS = [];\n\n");
        } else {
            code.push_str("    static FIELDS = [\n");
            for (field, shape) in &members {
                code.push_str(&format!(
                    "        {{ name: '{}', type: '{}', optional: {} }},\n",
                    field.wire_name,
                    type_tag(shape.scalar),
                    shape.optional
                ));
            }
            code.push_str("    ];\n\n");
        }

        code.push_str("    constructor() {\n");
        code.push_str("        super();\n");
        if members.is_empty() {
            code.push_str("        // No fields defined\n");
        }
        for (field, shape) in &members {
            for line in doc_lines(field.docs.as_deref()) {
                code.push_str(&format!("        // {line}\n"));
            }
            code.push_str(&format!(
                "        this.{} = {};\n",
                field.wire_name,
                initial_value(*shape)
            ));
        }
        code.push_str("    }\n");
        code.push_str("}\n");

        Ok(code)
    }

    fn support_files(&self) -> Vec<SupportFile> {
        vec![SupportFile::new("BaseCommand.js", BASE_COMMAND)]
    }
}

fn type_tag(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "string",
        ScalarType::Integer => "integer",
        ScalarType::Boolean => "boolean",
    }
}

fn initial_value(shape: FieldShape) -> &'static str {
    if shape.optional {
        return "null";
    }
    match shape.scalar {
        ScalarType::String => "''",
        ScalarType::Integer => "0",
        ScalarType::Boolean => "false",
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::ir::{CommandDef, FieldDef, FieldType};

    fn resolve(def: CommandDef) -> CommandModel {
        CommandModel::resolve(&def).unwrap()
    }

    #[test]
    fn emit___field_table_lists_types_in_order() {
        let model = resolve(
            CommandDef::new("Typed")
                .with_field(FieldDef::new("Total", FieldType::Integer))
                .with_field(FieldDef::new("Label", FieldType::optional(FieldType::String))),
        );

        let code = JavaScriptEmitter.emit(&model).unwrap();

        let total = code.find("{ name: 'total', type: 'integer', optional: false }").unwrap();
        let label = code.find("{ name: 'label', type: 'string', optional: true }").unwrap();
        assert!(total < label);
        assert!(code.contains("        this.total = 0;\n"));
        assert!(code.contains("        this.label = null;\n"));
    }

    #[test]
    fn emit___keyword_property___is_allowed() {
        let model = resolve(CommandDef::new("Styled").with_field(FieldDef::new("Class", FieldType::String)));

        let code = JavaScriptEmitter.emit(&model).unwrap();

        assert!(code.contains("this.class = '';"));
    }

    #[test]
    fn emit___constructor_field___returns_reserved_identifier() {
        let model = resolve(
            CommandDef::new("Odd").with_field(FieldDef::new("Constructor", FieldType::String)),
        );

        let err = JavaScriptEmitter.emit(&model).unwrap_err();

        assert!(matches!(err, EmitError::ReservedIdentifier { .. }));
    }

    #[test]
    fn emit___zero_fields___has_empty_table() {
        let model = resolve(CommandDef::new("Empty"));

        let code = JavaScriptEmitter.emit(&model).unwrap();

        assert!(code.contains("static FIELDS = [];"));
        assert!(code.contains("// No fields defined"));
    }

    #[test]
    fn emit___nested_optional___returns_unsupported_type() {
        let model = resolve(CommandDef::new("Nested").with_field(FieldDef::new(
            "Maybe",
            FieldType::optional(FieldType::optional(FieldType::String)),
        )));

        assert!(matches!(
            JavaScriptEmitter.emit(&model),
            Err(EmitError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn emit___comment_terminator_in_docs___stays_inside_comment() {
        let model = resolve(CommandDef::new("DocCommand").with_docs("Matches *.json */ files"));

        let code = JavaScriptEmitter.emit(&model).unwrap();

        assert!(code.contains("/**\n * Matches *.json * / files\n */\n"));
        assert_eq!(code.matches("*/").count(), 1);
    }

    #[test]
    fn emit___type_name_shadowing_base___returns_reserved_type_name() {
        let model = resolve(CommandDef::new("Command"));

        assert!(matches!(
            JavaScriptEmitter.emit(&model),
            Err(EmitError::ReservedTypeName { .. })
        ));
    }
}
