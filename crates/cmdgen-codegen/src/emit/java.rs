//! Java class generation with Gson annotations.

use super::{
    Emitter, GENERATED_NOTICE, SupportFile, check_reserved, check_type_name, doc_lines, quoted,
};
use crate::error::EmitError;
use crate::model::{CommandModel, FieldShape, ScalarType};
use cmdgen_core::naming::{to_camel_case, to_pascal_case};

const LANGUAGE: &str = "java";

const BASE_COMMAND: &str = include_str!("../../runtime/java/Command.java");

const BASE_PACKAGE: &str = "package generated.commands;";

const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "var", "record",
    "yield",
];

/// Base class members and the `java.lang` types generated fields use.
const TYPE_RESERVED: &[&str] = &[
    "Command", "DecodeException", "SerializedName", "String", "Long", "Boolean", "Object",
];

/// Emits one class per command with private fields, accessors and a typed
/// `fromJson`, extending `Command.java`.
#[derive(Debug, Clone)]
pub struct JavaEmitter {
    package: String,
}

impl JavaEmitter {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }
}

impl Default for JavaEmitter {
    fn default() -> Self {
        Self::new("generated.commands")
    }
}

impl Emitter for JavaEmitter {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn file_name(&self, command: &CommandModel) -> String {
        format!("{}.java", command.type_name)
    }

    fn emit(&self, command: &CommandModel) -> Result<String, EmitError> {
        check_type_name(command, RESERVED, LANGUAGE)?;
        check_type_name(command, TYPE_RESERVED, LANGUAGE)?;

        let mut members = Vec::with_capacity(command.fields.len());
        for field in &command.fields {
            let shape = field.shape(LANGUAGE)?;
            let java_field_name = to_camel_case(&field.wire_name);
            check_reserved(field, &java_field_name, RESERVED, LANGUAGE)?;
            members.push((field, shape, java_field_name));
        }

        let name = &command.type_name;
        let mut code = String::new();

        code.push_str(&format!("// {GENERATED_NOTICE}\n"));
        code.push_str(&format!("package {};\n\n", self.package));

        if !members.is_empty() {
            code.push_str("import com.google.gson.annotations.SerializedName;\n\n");
        }

        push_javadoc(&mut code, "", command.docs.as_deref());
        code.push_str(&format!("public class {name} extends Command {{\n"));
        code.push_str(&format!(
            "    public static final String COMMAND_NAME = {};\n",
            quoted(&command.command_name)
        ));

        // Fields
        for (field, shape, java_field_name) in &members {
            code.push('\n');
            push_javadoc(&mut code, "    ", field.docs.as_deref());
            code.push_str(&format!(
                "    @SerializedName(\"{}\")\n",
                field.wire_name
            ));
            code.push_str(&format!(
                "    private {} {} = {};\n",
                java_type(*shape),
                java_field_name,
                default_value(*shape)
            ));
        }

        // Constructor and typed decoder
        code.push_str(&format!("\n    public {name}() {{\n"));
        code.push_str("        super(COMMAND_NAME);\n");
        code.push_str("    }\n");

        code.push_str(&format!(
            "\n    public static {name} fromJson(String json) {{\n"
        ));
        code.push_str(&format!("        return decode(json, {name}.class);\n"));
        code.push_str("    }\n");

        // Getters and setters
        for (_, shape, java_field_name) in &members {
            let java_type = java_type(*shape);
            let method_name_part = to_pascal_case(java_field_name);

            code.push_str(&format!(
                "\n    public {java_type} get{method_name_part}() {{\n"
            ));
            code.push_str(&format!("        return {java_field_name};\n"));
            code.push_str("    }\n");

            code.push_str(&format!(
                "\n    public void set{method_name_part}({java_type} {java_field_name}) {{\n"
            ));
            code.push_str(&format!(
                "        this.{java_field_name} = {java_field_name};\n"
            ));
            code.push_str("    }\n");
        }

        code.push_str("}\n");

        Ok(code)
    }

    fn support_files(&self) -> Vec<SupportFile> {
        let content =
            BASE_COMMAND.replacen(BASE_PACKAGE, &format!("package {};", self.package), 1);
        vec![SupportFile::new("Command.java", content)]
    }
}

fn push_javadoc(code: &mut String, indent: &str, docs: Option<&str>) {
    let lines = doc_lines(docs);
    if lines.is_empty() {
        return;
    }

    code.push_str(&format!("{indent}/**\n"));
    for line in lines {
        if line.is_empty() {
            code.push_str(&format!("{indent} *\n"));
        } else {
            code.push_str(&format!("{indent} * {}\n", javadoc_text(line)));
        }
    }
    code.push_str(&format!("{indent} */\n"));
}

/// Escape text the Java lexer would act on inside a comment: a backslash can
/// start a `\u` escape and `*/` ends the comment.
fn javadoc_text(line: &str) -> String {
    line.replace('\\', "&#92;").replace("*/", "*&#47;")
}

/// Optional scalars use boxed types so that `null` means absent.
fn java_type(shape: FieldShape) -> &'static str {
    match (shape.scalar, shape.optional) {
        (ScalarType::String, _) => "String",
        (ScalarType::Integer, false) => "long",
        (ScalarType::Integer, true) => "Long",
        (ScalarType::Boolean, false) => "boolean",
        (ScalarType::Boolean, true) => "Boolean",
    }
}

fn default_value(shape: FieldShape) -> &'static str {
    if shape.optional {
        return "null";
    }
    match shape.scalar {
        ScalarType::String => "\"\"",
        ScalarType::Integer => "0L",
        ScalarType::Boolean => "false",
    }
}
