//! Error types for code generation

use crate::golden::GoldenMismatch;
use cmdgen_core::{COMMAND_NAME_KEY, CommandError};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to emit one command for one language
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// A command or field name could not be normalized
    #[error(transparent)]
    InvalidIdentifier(#[from] CommandError),

    #[error("field {field:?} has type {ty}, which has no {language} mapping")]
    UnsupportedType {
        field: String,
        ty: String,
        language: String,
    },

    #[error("field {field:?} maps to {member:?}, a reserved identifier in {language}")]
    ReservedIdentifier {
        field: String,
        member: String,
        language: String,
    },

    #[error("fields {first:?} and {second:?} both normalize to {wire_name:?}")]
    DuplicateMember {
        first: String,
        second: String,
        wire_name: String,
    },

    #[error("field {field:?} collides with the {COMMAND_NAME_KEY:?} wire key")]
    CommandNameCollision { field: String },

    #[error("type name {type_name:?} is reserved in {language}")]
    ReservedTypeName { type_name: String, language: String },

    /// Another command in the same run normalizes to the same name
    #[error("command name {command_name:?} is also produced by {other:?}")]
    DuplicateCommandName { command_name: String, other: String },

    /// Another artifact or support file targets the same output path
    #[error("output {} is also written by {other}", .path.display())]
    OutputCollision { path: PathBuf, other: String },
}

/// An emit failure scoped to one (command, language) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairFailure {
    /// Command type name as written in the schema
    pub command: String,

    /// Language identifier the emitter was registered under
    pub language: String,

    pub error: EmitError,
}

impl fmt::Display for PairFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.command, self.language, self.error)
    }
}

impl std::error::Error for PairFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Errors surfaced by the generator, configuration and golden verifier
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("generation failed for {} pair(s)", .failures.len())]
    Generation { failures: Vec<PairFailure> },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{} golden fixture mismatch(es)", .mismatches.len())]
    Golden { mismatches: Vec<GoldenMismatch> },

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodegenError::Io {
            path: path.into(),
            source,
        }
    }
}
