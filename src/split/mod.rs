//! Split point selection
//!
//! - [`KeySplitter::separator_between`]: shortest boundary inside a range
//! - [`KeySplitter::random_key_between`]: jittered boundary for rebalancing
//!   and fuzzing, driven by an explicitly passed [`RandomSource`]

mod random;
mod splitter;

pub use random::{DeterministicRandom, RandomSource};
pub use splitter::KeySplitter;
