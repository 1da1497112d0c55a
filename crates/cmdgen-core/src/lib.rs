//! cmdgen-core - Naming normalization and the Command contract
//!
//! This crate provides the pieces every cmdgen backend agrees on:
//! - [`naming::normalize`], the single definition of command and field wire names
//! - [`Command`], the contract generated Rust command types implement
//! - [`CommandCodec`], the JSON encode/decode rules behind [`Command`]
//! - [`CommandError`] for error handling

mod codec;
mod command;
mod error;
pub mod naming;

pub use codec::CommandCodec;
pub use command::{COMMAND_NAME_KEY, Command};
pub use error::{CommandError, CommandResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{COMMAND_NAME_KEY, Command, CommandCodec, CommandError, CommandResult};
}
