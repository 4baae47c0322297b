//! Split point selection
//!
//! Shard boundaries should be as short as possible to keep routing metadata
//! small, and must stay inside the range being split.

use crate::config::KeyLimits;
use crate::key::{Key, KeyRange};

use super::random::RandomSource;

/// Chooses split points inside key ranges under the configured size limits.
#[derive(Debug, Clone)]
pub struct KeySplitter<L> {
    limits: L,
}

impl<L: KeyLimits> KeySplitter<L> {
    pub fn new(limits: L) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &L {
        &self.limits
    }

    /// Shortest key `k` with `begin < k <= end`.
    ///
    /// The result is a prefix of `end` running through the first byte where
    /// `begin` and `end` differ. The scan stops after `split_key_size_limit`
    /// bytes; if it finds no difference by then, `end` itself is returned.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    pub fn separator_between(&self, range: &KeyRange) -> Key {
        assert!(!range.is_empty(), "separator requested for empty range {}", range);
        let Some(begin) = range.begin().as_bytes() else {
            unreachable!("non-empty range {} begins at the maximum key", range);
        };
        let end = range.end();
        let limit = self.limits.split_key_size_limit();

        let min_len = begin.len().min(end.extent());
        let mut pos = 0;
        while pos < min_len && pos < limit {
            if begin[pos] != end.byte_at(pos) {
                return end.prefix(pos + 1);
            }
            pos += 1;
        }

        // begin is a prefix of end: one more byte of end is enough.
        if pos < limit && begin.len() < end.extent() {
            return end.prefix(pos + 1);
        }

        end.clone()
    }

    /// Random key strictly between `begin` and `end`.
    ///
    /// Returns `end` when the range is empty or single-key, or when no key
    /// fits between the two within the size limit of `begin`'s key space.
    /// Never returns a key outside `[begin, end]`.
    pub fn random_key_between<R>(&self, range: &KeyRange, rng: &mut R) -> Key
    where
        R: RandomSource + ?Sized,
    {
        if range.is_empty() || range.is_single_key() {
            return range.end().clone();
        }

        let Some(begin) = range.begin().as_bytes() else {
            unreachable!("non-empty range {} begins at the maximum key", range);
        };
        let end = range.end();

        // Shorter begin: any byte below end's next byte keeps us under end.
        if begin.len() < end.extent() {
            let next = end.byte_at(begin.len());
            let bound = if next > 0 { next } else { 1 };
            let byte = rng.random_int(0, u32::from(bound)) as u8;
            return range.begin().with_suffix(&[byte]);
        }

        let key_limit = self.limits.max_key_size(range.begin());
        let end_len = end.extent();
        let mut pos = 0;
        while pos < end_len && pos < key_limit && begin[pos] == end.byte_at(pos) {
            pos += 1;
        }
        assert!(pos < end_len, "range {} has begin >= end", range);

        // Scan hit the size limit before the first difference.
        if begin[pos] == end.byte_at(pos) {
            return end.clone();
        }

        // Bump the last byte of begin's tail that is not 0xFF.
        for lowest in (pos + 1..begin.len()).rev() {
            if begin[lowest] < 0xFF {
                let byte = rng.random_int(u32::from(begin[lowest]) + 1, 256) as u8;
                return range.begin().with_byte(lowest, byte);
            }
        }

        let (low, high) = (u32::from(begin[pos]), u32::from(end.byte_at(pos)));
        if low + 1 < high {
            let byte = rng.random_int(low + 1, high) as u8;
            return range.begin().with_byte(pos, byte);
        }

        if begin.len() + 1 < key_limit {
            let byte = rng.random_int(1, 255) as u8;
            return range.begin().with_suffix(&[byte]);
        }

        end.clone()
    }
}
