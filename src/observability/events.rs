//! Typed log events
//!
//! Every log line carries exactly one of these as its `event` field.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Configuration file rejected
    ConfigRejected,

    // Storage engine registry
    /// Process-wide registry built
    EngineRegistryInit,
    /// Lookup of an unlisted engine name
    EngineLookupFailed,

    // Key-space diagnostics
    /// Separator key computed for a range
    SeparatorChosen,
    /// Random boundary drawn inside a range
    RandomKeyChosen,
    /// Selector key shortened to the size limit
    SelectorKeyTruncated,
    /// Diagnostic command failed
    CommandFailed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConfigRejected => "CONFIG_REJECTED",
            Event::EngineRegistryInit => "ENGINE_REGISTRY_INIT",
            Event::EngineLookupFailed => "ENGINE_LOOKUP_FAILED",
            Event::SeparatorChosen => "SEPARATOR_CHOSEN",
            Event::RandomKeyChosen => "RANDOM_KEY_CHOSEN",
            Event::SelectorKeyTruncated => "SELECTOR_KEY_TRUNCATED",
            Event::CommandFailed => "COMMAND_FAILED",
        }
    }

    /// Default severity for this event
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigRejected | Event::CommandFailed => Severity::Error,
            Event::EngineLookupFailed => Severity::Warn,
            Event::SeparatorChosen | Event::RandomKeyChosen | Event::SelectorKeyTruncated => {
                Severity::Trace
            }
            Event::ConfigLoaded | Event::EngineRegistryInit => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
