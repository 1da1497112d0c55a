//! Intermediate representation for command definitions.
//!
//! This module defines the language-agnostic view of a command schema that
//! every emitter consumes. Definitions are built by a loader (or in code) and
//! are never mutated by generation.
//!
//! # Structure
//!
//! - [`CommandDef`]: a named command with documentation and ordered fields
//! - [`FieldDef`]: a field with its declared type and documentation
//! - [`FieldType`]: the closed semantic type set plus an escape hatch for
//!   unrecognised type names
//!
//! # Examples
//!
//! ```
//! use cmdgen_codegen::ir::{CommandDef, FieldDef, FieldType};
//!
//! let command = CommandDef::new("ExampleCommand")
//!     .with_docs("This is a test command.")
//!     .with_field(FieldDef::new("someMessage", FieldType::String).with_docs("Example message"))
//!     .with_field(FieldDef::new("couldBeNothing", FieldType::optional(FieldType::String)));
//!
//! assert_eq!(command.fields.len(), 2);
//! assert!(command.fields[1].ty.is_optional());
//! ```

use std::fmt;

/// A command definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDef {
    /// The command type name (e.g. `ExampleCommand`).
    pub name: String,

    /// Documentation for the command.
    pub docs: Option<String>,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

/// A field in a command definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name as written in the schema.
    pub name: String,

    /// Declared type.
    pub ty: FieldType,

    /// Documentation for the field.
    pub docs: Option<String>,
}

/// Declared field type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Text.
    String,

    /// Signed 64-bit integer.
    Integer,

    /// Boolean.
    Boolean,

    /// A value that may be absent.
    Optional(Box<FieldType>),

    /// A type name outside the supported set, kept so emitters can report it.
    Custom(String),
}

impl CommandDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: None,
            fields: Vec::new(),
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }

    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            docs: None,
        }
    }

    pub fn with_docs(mut self, docs: impl Into<String>) -> Self {
        self.docs = Some(docs.into());
        self
    }
}

impl FieldType {
    /// Wrap a type as optional.
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, FieldType::Optional(_))
    }

    /// Parse a schema type string.
    ///
    /// Accepts `str`/`string`, `int`/`integer`, `bool`/`boolean`, and the
    /// optional spellings `Optional[T]`, `optional-of(T)` and `optional-T`.
    /// Anything else becomes [`FieldType::Custom`].
    ///
    /// ```
    /// use cmdgen_codegen::ir::FieldType;
    ///
    /// assert_eq!(FieldType::parse("int"), FieldType::Integer);
    /// assert_eq!(FieldType::parse("Optional[str]"), FieldType::optional(FieldType::String));
    /// assert_eq!(FieldType::parse("float"), FieldType::Custom("float".into()));
    /// ```
    pub fn parse(text: &str) -> FieldType {
        let text = text.trim();

        if let Some(inner) = strip_optional(text) {
            return FieldType::optional(FieldType::parse(inner));
        }

        match text.to_ascii_lowercase().as_str() {
            "str" | "string" => FieldType::String,
            "int" | "integer" => FieldType::Integer,
            "bool" | "boolean" => FieldType::Boolean,
            _ => FieldType::Custom(text.to_string()),
        }
    }
}

/// Return the inner type string of an optional spelling.
fn strip_optional(text: &str) -> Option<&str> {
    let lower = text.to_ascii_lowercase();

    if lower.starts_with("optional[") && text.ends_with(']') {
        return Some(&text["optional[".len()..text.len() - 1]);
    }
    if lower.starts_with("optional-of(") && text.ends_with(')') {
        return Some(&text["optional-of(".len()..text.len() - 1]);
    }
    if lower.starts_with("optional-") && !lower.starts_with("optional-of(") {
        return Some(&text["optional-".len()..]);
    }

    None
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => write!(f, "string"),
            FieldType::Integer => write!(f, "integer"),
            FieldType::Boolean => write!(f, "boolean"),
            FieldType::Optional(inner) => write!(f, "optional-of({inner})"),
            FieldType::Custom(name) => write!(f, "{name}"),
        }
    }
}
