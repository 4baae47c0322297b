//! Keys and key ranges
//!
//! Keys are immutable byte strings ordered lexicographically. Ranges are
//! half-open `[begin, end)` intervals over keys.
//!
//! # Invariants
//!
//! - `begin <= end` for every range; construction panics otherwise
//! - The empty key is the global minimum, [`Key::max`] the global maximum
//! - Operations never mutate their inputs; they build new values
//!
//! Everything here is pure and synchronous: no I/O, no locking, no logging.

mod algebra;
mod errors;
#[allow(clippy::module_inception)]
mod key;
mod prefix;
mod range;

pub use algebra::{intersect, subtract, subtract_all};
pub use errors::{KeyspaceError, KeyspaceErrorCode, KeyspaceResult};
pub use key::Key;
pub use prefix::{from_prefix_relative, to_prefix_relative};
pub use range::KeyRange;
