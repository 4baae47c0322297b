//! Observability for the key-space layer
//!
//! Structured JSON logging with typed events. The pure key and range
//! operations never log; configuration, the engine registry and the CLI do.
//!
//! ```ignore
//! use keyspace::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ConfigLoaded, &[("path", "keyspace.json")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity, LOG_LEVEL_ENV};

/// Log an event at its default severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        log_event(Event::EngineRegistryInit);
        log_event_with_fields(Event::ConfigLoaded, &[("path", "/tmp/keyspace.json")]);
    }
}
