//! Key and range error types
//!
//! Error codes:
//! - KEYSPACE_INVALID_RANGE
//! - KEYSPACE_INVALID_KEY_ENCODING
//!
//! Contract violations inside the pure range operations panic instead of
//! returning these. The codes below exist for callers that build keys and
//! ranges from untrusted input (configuration, the CLI).

use std::fmt;

/// Key-space error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyspaceErrorCode {
    /// Range with begin > end
    InvalidRange,
    /// Malformed printable key encoding
    InvalidKeyEncoding,
}

impl KeyspaceErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            KeyspaceErrorCode::InvalidRange => "KEYSPACE_INVALID_RANGE",
            KeyspaceErrorCode::InvalidKeyEncoding => "KEYSPACE_INVALID_KEY_ENCODING",
        }
    }
}

impl fmt::Display for KeyspaceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error raised while constructing keys or ranges from external input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyspaceError {
    code: KeyspaceErrorCode,
    message: String,
}

impl KeyspaceError {
    /// Range whose begin sorts after its end
    pub fn invalid_range(begin: impl fmt::Display, end: impl fmt::Display) -> Self {
        Self {
            code: KeyspaceErrorCode::InvalidRange,
            message: format!("range begin '{}' sorts after end '{}'", begin, end),
        }
    }

    /// Printable key that cannot be decoded
    pub fn invalid_key_encoding(input: &str, reason: impl Into<String>) -> Self {
        Self {
            code: KeyspaceErrorCode::InvalidKeyEncoding,
            message: format!("cannot decode key '{}': {}", input, reason.into()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> KeyspaceErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for KeyspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for KeyspaceError {}

/// Result type for key-space construction
pub type KeyspaceResult<T> = Result<T, KeyspaceError>;
