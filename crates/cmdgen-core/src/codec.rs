//! JSON codec implementing the Command wire rules

use crate::command::{COMMAND_NAME_KEY, Command};
use crate::error::{CommandError, CommandResult};
use serde_json::{Map, Value};

/// Encodes and decodes [`Command`] values.
///
/// Encoding writes the command name first, then every field except absent
/// optionals. Decoding matches keys case-insensitively and ignores unknown
/// keys.
#[derive(Debug, Clone, Default)]
pub struct CommandCodec {
    /// Whether to pretty-print output (default: false)
    pretty: bool,
}

impl CommandCodec {
    /// Create a codec producing compact JSON
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a codec producing indented JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Encode a command to a JSON object value
    pub fn encode_value<C: Command>(&self, command: &C) -> CommandResult<Value> {
        let Value::Object(fields) = serde_json::to_value(command)? else {
            return Err(CommandError::Encode(format!(
                "{} does not serialize to a JSON object",
                C::COMMAND_NAME
            )));
        };

        let mut object = Map::with_capacity(fields.len() + 1);
        object.insert(
            COMMAND_NAME_KEY.to_string(),
            Value::String(C::COMMAND_NAME.to_string()),
        );

        // Null only arises from an absent optional in the supported type set
        for (key, value) in fields {
            if value.is_null() || key == COMMAND_NAME_KEY {
                continue;
            }
            object.insert(key, value);
        }

        Ok(Value::Object(object))
    }

    /// Encode a command to JSON text
    pub fn encode<C: Command>(&self, command: &C) -> CommandResult<String> {
        let value = self.encode_value(command)?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        text.map_err(|e| CommandError::Encode(e.to_string()))
    }

    /// Decode JSON text into a command
    pub fn decode<C: Command>(&self, text: &str) -> CommandResult<C> {
        let value: Value = serde_json::from_str(text)?;
        self.decode_value(value)
    }

    /// Decode a JSON value into a command
    pub fn decode_value<C: Command>(&self, value: Value) -> CommandResult<C> {
        let object = match value {
            Value::Object(object) => object,
            other => {
                return Err(CommandError::Decode(format!(
                    "expected a JSON object for {}, found {}",
                    C::COMMAND_NAME,
                    kind_of(&other)
                )));
            }
        };

        let folded = fold_keys(object);
        serde_json::from_value(Value::Object(folded)).map_err(|e| CommandError::Decode(e.to_string()))
    }
}

/// Lowercase every key so field matching is case-insensitive.
///
/// An exactly-lowercase key wins over differently cased spellings of the same
/// name regardless of order. The command name key is dropped: decoding
/// re-derives it from the target type. A null value counts as an absent key.
fn fold_keys(object: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::with_capacity(object.len());

    for (key, value) in object {
        let lower = key.to_lowercase();
        if lower == COMMAND_NAME_KEY || value.is_null() {
            continue;
        }
        if lower == key {
            folded.insert(lower, value);
        } else {
            folded.entry(lower).or_insert(value);
        }
    }

    folded
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
