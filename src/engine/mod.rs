//! Storage engine registry
//!
//! Key-range arithmetic is agnostic to which engine stores the bytes. This
//! module is the seam: it maps the closed set of engine kinds to and from
//! their canonical names, as used by configuration parsing and status
//! reporting.

mod errors;
mod kind;
mod registry;

pub use errors::{EngineError, EngineResult};
pub use kind::{name_of_code, StorageEngineKind, UNKNOWN_ENGINE_NAME};
pub use registry::{EngineEntry, StorageEngineRegistry, ENGINE_TABLE};
