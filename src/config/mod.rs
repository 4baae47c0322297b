//! Configuration
//!
//! Supplies the key size limits consumed by splitting and selectors, the
//! default storage engine, and an optional seed for reproducible random
//! boundaries. Immutable after load.

mod errors;
mod limits;
mod settings;

pub use errors::{ConfigError, ConfigErrorCode, ConfigResult};
pub use limits::{KeyLimits, SYSTEM_KEY_PREFIX};
pub use settings::KeyspaceConfig;
