//! Error types for names and the Command contract

use thiserror::Error;

/// Result type alias for contract operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Error type for normalization and command encoding/decoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Input to the normalizer is empty or not a plain alphanumeric identifier
    #[error("invalid identifier {identifier:?}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// Text could not be decoded into the requested command type
    #[error("decode error: {0}")]
    Decode(String),

    /// A command value could not be encoded
    #[error("encode error: {0}")]
    Encode(String),
}

impl CommandError {
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        CommandError::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for failures raised while decoding input text
    pub fn is_decode(&self) -> bool {
        matches!(self, CommandError::Decode(_))
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CommandError::Decode(err.to_string())
        } else {
            CommandError::Encode(err.to_string())
        }
    }
}
