//! keyspace - key-range arithmetic and ordered key-space partitioning
//!
//! Keys and half-open key ranges as values, plus the operations shard
//! management and the read path build on:
//!
//! - [`key`]: keys, ranges, range subtraction and prefix projection
//! - [`split`]: separator keys and randomized split points
//! - [`selector`]: key selectors for range reads
//! - [`engine`]: storage engine kinds and their names
//!
//! The range and selector operations are pure. They take immutable inputs,
//! return new values, and are safe to call from any number of threads.

pub mod cli;
pub mod config;
pub mod engine;
pub mod key;
pub mod observability;
pub mod selector;
pub mod split;

pub use config::{KeyLimits, KeyspaceConfig};
pub use engine::{StorageEngineKind, StorageEngineRegistry};
pub use key::{Key, KeyRange};
pub use selector::KeySelector;
pub use split::{DeterministicRandom, KeySplitter, RandomSource};
