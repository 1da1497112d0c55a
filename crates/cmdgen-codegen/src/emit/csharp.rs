//! C# emitter targeting `System.Text.Json`.

use super::{
    Emitter, GENERATED_NOTICE, SupportFile, check_reserved, check_type_name, doc_lines,
};
use crate::error::EmitError;
use crate::model::{CommandModel, FieldShape, ScalarType};
use cmdgen_core::naming::to_pascal_case;

const LANGUAGE: &str = "csharp";

const BASE_COMMAND: &str = include_str!("../../runtime/csharp/BaseCommand.cs");

const BASE_NAMESPACE: &str = "namespace GeneratedCommands";

/// Members of `Command` and `object` that a property would hide.
const RESERVED: &[&str] = &[
    "CommandName",
    "CommandNameKey",
    "ToJson",
    "FromJson",
    "Equals",
    "GetHashCode",
    "GetType",
    "ToString",
    "MemberwiseClone",
];

/// Keywords plus the runtime types and namespace generated classes refer to.
const TYPE_RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
    "Command", "DecodeException", "System",
];

/// Emits one class per command, deriving from `BaseCommand.cs`'s `Command`.
#[derive(Debug, Clone)]
pub struct CSharpEmitter {
    namespace: String,
}

impl CSharpEmitter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for CSharpEmitter {
    fn default() -> Self {
        Self::new("GeneratedCommands")
    }
}

impl Emitter for CSharpEmitter {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn file_name(&self, command: &CommandModel) -> String {
        format!("{}.cs", command.type_name)
    }

    fn emit(&self, command: &CommandModel) -> Result<String, EmitError> {
        check_type_name(command, TYPE_RESERVED, LANGUAGE)?;

        let mut members = Vec::with_capacity(command.fields.len());
        for field in &command.fields {
            let shape = field.shape(LANGUAGE)?;
            let property = to_pascal_case(&field.wire_name);
            check_reserved(field, &property, RESERVED, LANGUAGE)?;
            // CS0542: a member cannot share its enclosing type's name
            check_reserved(field, &property, &[command.type_name.as_str()], LANGUAGE)?;
            members.push((field, shape, property));
        }

        let mut code = String::new();
        code.push_str(&format!("// {GENERATED_NOTICE}\n"));
        code.push_str("#nullable enable\n\n");
        if !members.is_empty() {
            code.push_str("using System.Text.Json.Serialization;\n\n");
        }

        code.push_str(&format!("namespace {}\n{{\n", self.namespace));

        push_summary(&mut code, "    ", command.docs.as_deref());
        code.push_str(&format!("    public class {} : Command\n", command.type_name));
        code.push_str("    {\n");
        code.push_str(&format!(
            "        public {}() : base(\"{}\")\n",
            command.type_name, command.command_name
        ));
        code.push_str("        {\n");
        code.push_str("        }\n");

        for (field, shape, property) in &members {
            code.push('\n');
            push_summary(&mut code, "        ", field.docs.as_deref());
            code.push_str(&format!(
                "        [JsonPropertyName(\"{}\")]\n",
                field.wire_name
            ));
            code.push_str(&format!(
                "        public {} {} {{ get; set; }}{}\n",
                csharp_type(*shape),
                property,
                initializer(*shape)
            ));
        }

        code.push_str("    }\n");
        code.push_str("}\n");

        Ok(code)
    }

    fn support_files(&self) -> Vec<SupportFile> {
        let content = BASE_COMMAND.replacen(
            BASE_NAMESPACE,
            &format!("namespace {}", self.namespace),
            1,
        );
        vec![SupportFile::new("BaseCommand.cs", content)]
    }
}

fn push_summary(code: &mut String, indent: &str, docs: Option<&str>) {
    let lines = doc_lines(docs);
    if lines.is_empty() {
        return;
    }

    code.push_str(&format!("{indent}/// <summary>\n"));
    for line in lines {
        code.push_str(&format!("{indent}/// {}\n", xml_escape(line)));
    }
    code.push_str(&format!("{indent}/// </summary>\n"));
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn csharp_type(shape: FieldShape) -> &'static str {
    match (shape.scalar, shape.optional) {
        (ScalarType::String, false) => "string",
        (ScalarType::String, true) => "string?",
        (ScalarType::Integer, false) => "long",
        (ScalarType::Integer, true) => "long?",
        (ScalarType::Boolean, false) => "bool",
        (ScalarType::Boolean, true) => "bool?",
    }
}

// Value types and nullables default correctly; only required strings need one.
fn initializer(shape: FieldShape) -> &'static str {
    match (shape.scalar, shape.optional) {
        (ScalarType::String, false) => " = string.Empty;",
        _ => "",
    }
}
