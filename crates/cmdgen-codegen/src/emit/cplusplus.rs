//! C++17 header emitter targeting `nlohmann::json`.

use super::{
    Emitter, GENERATED_NOTICE, SupportFile, block_comment_text, check_reserved, check_type_name,
    doc_lines,
};
use crate::error::EmitError;
use crate::model::{CommandModel, FieldShape, ScalarType};

const LANGUAGE: &str = "cplusplus";

const BASE_COMMAND: &str = include_str!("../../runtime/cplusplus/base_command.hpp");

const BASE_NAMESPACE: &str = "namespace GeneratedCommands";

/// Keywords, the members `Command` defines, and names the generated bodies
/// rely on (`json` is the local built in `to_json`).
const RESERVED: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
    "command_name", "to_json", "to_json_string", "from_json", "parse_object", "write_field",
    "read_field", "json", "std", "nlohmann",
];

const TYPE_RESERVED: &[&str] = &["Command", "DecodeError"];

/// Emits one header per command with a class deriving from `base_command.hpp`'s `Command`.
#[derive(Debug, Clone)]
pub struct CppEmitter {
    namespace: String,
}

impl CppEmitter {
    /// `namespace` is dot separated; segments become nested C++ namespaces.
    pub fn new(namespace: impl AsRef<str>) -> Self {
        Self {
            namespace: namespace.as_ref().replace('.', "::"),
        }
    }
}

impl Default for CppEmitter {
    fn default() -> Self {
        Self::new("GeneratedCommands")
    }
}

impl Emitter for CppEmitter {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn file_name(&self, command: &CommandModel) -> String {
        format!("{}.hpp", command.command_name)
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

        let name = &command.type_name;
        let mut code = String::new();
        code.push_str(&format!("// {GENERATED_NOTICE}\n"));
        code.push_str("#pragma once\n\n");
        code.push_str("#include <cstdint>\n");
        code.push_str("#include <optional>\n");
        code.push_str("#include <string>\n\n");
        code.push_str("#include \"base_command.hpp\"\n\n");

        code.push_str(&format!("namespace {}\n{{\n", self.namespace));
        push_brief(&mut code, "    ", command.docs.as_deref());
        code.push_str(&format!("    class {name} : public Command\n"));
        code.push_str("    {\n");
        code.push_str("    public:\n");
        code.push_str(&format!(
            "        static constexpr const char *kCommandName = \"{}\";\n\n",
            command.command_name
        ));
        code.push_str(&format!(
            "        {name}() : Command(kCommandName) {{}}\n"
        ));

        if !members.is_empty() {
            code.push('\n');
        }
        for (field, shape) in &members {
            push_brief(&mut code, "        ", field.docs.as_deref());
            code.push_str(&format!(
                "        {} {}{};\n",
                cpp_type(*shape),
                field.wire_name,
                initializer(*shape)
            ));
        }

        // to_json
        code.push('\n');
        code.push_str("        nlohmann::json to_json() const override\n");
        code.push_str("        {\n");
        if members.is_empty() {
            code.push_str("            return Command::to_json();\n");
        } else {
            code.push_str("            nlohmann::json json = Command::to_json();\n");
            for (field, _) in &members {
                code.push_str(&format!(
                    "            write_field(json, \"{0}\", {0});\n",
                    field.wire_name
                ));
            }
            code.push_str("            return json;\n");
        }
        code.push_str("        }\n\n");

        // from_json
        code.push_str(&format!(
            "        static {name} from_json(const std::string &text)\n"
        ));
        code.push_str("        {\n");
        if members.is_empty() {
            code.push_str("            parse_object(text);\n");
            code.push_str(&format!("            return {name}();\n"));
        } else {
            code.push_str("            const nlohmann::json json = parse_object(text);\n");
            code.push_str(&format!("            {name} command;\n"));
            for (field, _) in &members {
                code.push_str(&format!(
                    "            read_field(json, \"{0}\", command.{0});\n",
                    field.wire_name
                ));
            }
            code.push_str("            return command;\n");
        }
        code.push_str("        }\n");

        code.push_str("    };\n");
        code.push_str("}\n");

        Ok(code)
    }

    fn support_files(&self) -> Vec<SupportFile> {
        let content = BASE_COMMAND.replacen(
            BASE_NAMESPACE,
            &format!("namespace {}", self.namespace),
            1,
        );
        vec![SupportFile::new("base_command.hpp", content)]
    }
}

fn push_brief(code: &mut String, indent: &str, docs: Option<&str>) {
    let lines = doc_lines(docs);
    let Some((first, rest)) = lines.split_first() else {
        return;
    };

    code.push_str(&format!("{indent}/**\n"));
    code.push_str(&format!("{indent} * @brief {}\n", block_comment_text(first)));
    for line in rest {
        if line.is_empty() {
            code.push_str(&format!("{indent} *\n"));
        } else {
            code.push_str(&format!("{indent} * {}\n", block_comment_text(line)));
        }
    }
    code.push_str(&format!("{indent} */\n"));
}

fn cpp_type(shape: FieldShape) -> String {
    let scalar = match shape.scalar {
        ScalarType::String => "std::string",
        ScalarType::Integer => "std::int64_t",
        ScalarType::Boolean => "bool",
    };

    if shape.optional {
        format!("std::optional<{scalar}>")
    } else {
        scalar.to_string()
    }
}

fn initializer(shape: FieldShape) -> &'static str {
    if shape.optional {
        return "{}";
    }
    match shape.scalar {
        ScalarType::String => "{}",
        ScalarType::Integer => "{0}",
        ScalarType::Boolean => "{false}",
    }
}
