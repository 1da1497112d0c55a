//! Naming normalization shared by every backend.
//!
//! [`normalize`] is the single definition of how a type or field name becomes
//! its wire identifier. Backends never re-implement it: emitters bake its
//! output into generated code as literals, and `#[derive(Command)]` calls it at
//! expansion time.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `ExampleCommand` | [`normalize`] | `example_command` |
//! | `HTTPServer` | [`normalize`] | `http_server` |
//! | `snake_case` | [`to_camel_case`] | `snakeCase` |
//! | `snake_case` | [`to_pascal_case`] | `SnakeCase` |

use crate::error::{CommandError, CommandResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Pass 1: any character followed by a capitalized segment with lowercase tail.
#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static CAPITALIZED_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid segment pattern"));

/// Pass 2: a lowercase letter or digit followed by a capital.
#[allow(clippy::expect_used)] // Safe: pattern is a compile-time constant
static LOWER_TO_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary pattern"));

/// Convert a capitalized multi-word identifier to its normalized form.
///
/// Two rewrite passes insert underscores at word boundaries, then the result
/// is lowercased. Runs of capitals stay together until the last capital that
/// starts a lowercase word (`HTTPServer` → `http_server`).
///
/// Identifiers must start with an ASCII letter and contain only ASCII letters
/// and digits.
///
/// # Examples
///
/// ```
/// use cmdgen_core::naming::normalize;
///
/// assert_eq!(normalize("ExampleCommand").unwrap(), "example_command");
/// assert_eq!(normalize("SomeBooleanExample").unwrap(), "some_boolean_example");
/// assert_eq!(normalize("HTTPServer").unwrap(), "http_server");
/// assert_eq!(normalize("ID").unwrap(), "id");
/// assert!(normalize("").is_err());
/// ```
pub fn normalize(identifier: &str) -> CommandResult<String> {
    validate_identifier(identifier)?;

    let first = CAPITALIZED_SEGMENT.replace_all(identifier, "${1}_${2}");
    let second = LOWER_TO_UPPER.replace_all(&first, "${1}_${2}");

    Ok(second.to_lowercase())
}

/// Check that an identifier has the shape [`normalize`] is defined over.
pub fn validate_identifier(identifier: &str) -> CommandResult<()> {
    let mut chars = identifier.chars();

    let Some(first) = chars.next() else {
        return Err(CommandError::invalid_identifier(identifier, "identifier is empty"));
    };

    if !first.is_ascii_alphabetic() {
        return Err(CommandError::invalid_identifier(
            identifier,
            "identifier must start with an ASCII letter",
        ));
    }

    if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
        return Err(CommandError::invalid_identifier(
            identifier,
            format!("unexpected character {bad:?}"),
        ));
    }

    Ok(())
}

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use cmdgen_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("some_message"), "someMessage");
/// assert_eq!(to_camel_case("count"), "count");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert snake_case to PascalCase.
///
/// # Examples
///
/// ```
/// use cmdgen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("could_be_nothing"), "CouldBeNothing");
/// assert_eq!(to_pascal_case("count"), "Count");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
