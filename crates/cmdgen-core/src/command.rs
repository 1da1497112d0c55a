//! The Command contract for Rust types

use crate::codec::CommandCodec;
use crate::error::CommandResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// JSON key carrying the normalized command name on the wire.
pub const COMMAND_NAME_KEY: &str = "command_name";

/// A data-transfer object with a stable, normalized name and symmetric JSON
/// encoding.
///
/// `COMMAND_NAME` is a literal baked in at generation time (by the Rust
/// emitter) or at compile time (by `#[derive(Command)]`); it always equals
/// `naming::normalize` of the type name.
///
/// Implementors are expected to carry `#[serde(default)]` on the struct so
/// that required fields missing from the input decode to their defaults, and
/// to model optional fields as `Option<T>` so absence is a distinct state.
///
/// Serialized field names must be lowercase. Decoding lowercases every input
/// key before matching, so a field renamed to `someMessage` never decodes.
/// `#[derive(Command)]` rejects such renames at compile time.
///
/// # Example
///
/// ```
/// use cmdgen_core::Command;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
/// #[serde(default)]
/// struct PingCommand {
///     count: i64,
///     note: Option<String>,
/// }
///
/// impl Command for PingCommand {
///     const COMMAND_NAME: &'static str = "ping_command";
/// }
///
/// let ping = PingCommand { count: 3, note: None };
/// let json = ping.to_json().unwrap();
/// assert_eq!(json, r#"{"command_name":"ping_command","count":3}"#);
/// assert_eq!(PingCommand::from_json(&json).unwrap(), ping);
/// ```
pub trait Command: Serialize + DeserializeOwned {
    /// Normalized name of this command type
    const COMMAND_NAME: &'static str;

    /// Normalized name reported by an instance
    fn command_name(&self) -> &'static str {
        Self::COMMAND_NAME
    }

    /// Encode this command as compact JSON
    fn to_json(&self) -> CommandResult<String> {
        CommandCodec::new().encode(self)
    }

    /// Encode this command as indented JSON
    fn to_json_pretty(&self) -> CommandResult<String> {
        CommandCodec::pretty().encode(self)
    }

    /// Decode a command of this type from JSON text
    fn from_json(text: &str) -> CommandResult<Self> {
        CommandCodec::new().decode(text)
    }
}
