//! Configuration error types
//!
//! Error codes:
//! - KEYSPACE_CONFIG_READ
//! - KEYSPACE_CONFIG_PARSE
//! - KEYSPACE_CONFIG_INVALID

use std::fmt;
use std::io;

/// Configuration error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorCode {
    /// Config file could not be read
    Read,
    /// Config file is not valid JSON for the schema
    Parse,
    /// Values parsed but violate a constraint
    Invalid,
}

impl ConfigErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigErrorCode::Read => "KEYSPACE_CONFIG_READ",
            ConfigErrorCode::Parse => "KEYSPACE_CONFIG_PARSE",
            ConfigErrorCode::Invalid => "KEYSPACE_CONFIG_INVALID",
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    code: ConfigErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl ConfigError {
    /// File read failure
    pub fn read(path: impl fmt::Display, source: io::Error) -> Self {
        Self {
            code: ConfigErrorCode::Read,
            message: format!("failed to read config '{}'", path),
            source: Some(source),
        }
    }

    /// JSON or schema failure
    pub fn parse(reason: impl fmt::Display) -> Self {
        Self {
            code: ConfigErrorCode::Parse,
            message: format!("invalid config JSON: {}", reason),
            source: None,
        }
    }

    /// Constraint violation
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            code: ConfigErrorCode::Invalid,
            message: reason.into(),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ConfigErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
