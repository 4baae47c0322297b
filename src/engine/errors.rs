//! Storage engine registry errors

use thiserror::Error;

/// Result type for engine lookups
pub type EngineResult<T> = Result<T, EngineError>;

/// Storage engine registry errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Name is neither a canonical engine name nor an alias
    #[error("KEYSPACE_UNKNOWN_STORAGE_ENGINE: unrecognized storage engine identifier '{0}'")]
    UnrecognizedIdentifier(String),
}

impl EngineError {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnrecognizedIdentifier(_) => "KEYSPACE_UNKNOWN_STORAGE_ENGINE",
        }
    }

    /// The identifier that failed to resolve
    pub fn identifier(&self) -> &str {
        match self {
            EngineError::UnrecognizedIdentifier(name) => name,
        }
    }
}
