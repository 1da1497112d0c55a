//! # cmdgen
//!
//! Command data-transfer objects that behave identically across languages.
//!
//! A command is a plain struct with a stable name derived from its type name
//! (`ExampleCommand` → `example_command`) and a fixed JSON wire format:
//! - `command_name` first, then every field under its normalized name
//! - absent optional fields omitted
//! - keys matched case-insensitively on decode, unknown keys ignored
//!
//! The `cmdgen` CLI generates the same types for Python, JavaScript, C#, C++
//! and Java; this crate is the Rust side of the contract.
//!
//! ## Defining a Command
//!
//! ```
//! use cmdgen::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize, Command)]
//! #[serde(default)]
//! pub struct ExampleCommand {
//!     pub some_message: String,
//!     pub count: i64,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub could_be_nothing: Option<String>,
//! }
//!
//! let command = ExampleCommand { some_message: "hi".into(), count: 2, could_be_nothing: None };
//! let json = command.to_json().unwrap();
//!
//! assert_eq!(json, r#"{"command_name":"example_command","some_message":"hi","count":2}"#);
//! assert_eq!(ExampleCommand::from_json(&json).unwrap(), command);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`cmdgen_core`] - Naming normalizer, `Command` trait and codec
//! - [`cmdgen_macros`] - `#[derive(Command)]`

// Re-export core types
pub use cmdgen_core::{
    COMMAND_NAME_KEY, Command, CommandCodec, CommandError, CommandResult, naming,
};

// Re-export macros
pub use cmdgen_macros::Command;

// Re-export common dependencies that command authors need
pub use serde;
pub use serde_json;

/// Prelude module for convenient imports.
///
/// Brings in the `Command` trait and derive, the codec, error types and the
/// serde derives every command needs.
pub mod prelude {
    pub use crate::{COMMAND_NAME_KEY, Command, CommandCodec, CommandError, CommandResult};

    // Serde derives (needed on every command type)
    pub use serde::{Deserialize, Serialize};
}
