//! Half-open key ranges

use std::fmt;

use super::errors::{KeyspaceError, KeyspaceResult};
use super::key::Key;

/// Half-open interval `[begin, end)` over keys.
///
/// Invariant: `begin <= end`. `begin == end` is the empty range.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyRange {
    begin: Key,
    end: Key,
}

impl KeyRange {
    /// Creates a range.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`. Use [`KeyRange::try_new`] for unchecked input.
    pub fn new(begin: impl Into<Key>, end: impl Into<Key>) -> Self {
        let (begin, end) = (begin.into(), end.into());
        assert!(
            begin <= end,
            "invalid key range: begin {} sorts after end {}",
            begin,
            end
        );
        Self { begin, end }
    }

    /// Creates a range, rejecting `begin > end` with a typed error.
    pub fn try_new(begin: impl Into<Key>, end: impl Into<Key>) -> KeyspaceResult<Self> {
        let (begin, end) = (begin.into(), end.into());
        if begin > end {
            return Err(KeyspaceError::invalid_range(&begin, &end));
        }
        Ok(Self { begin, end })
    }

    /// The whole key space: empty key to the maximum.
    pub fn all_keys() -> Self {
        Self {
            begin: Key::empty(),
            end: Key::max(),
        }
    }

    /// Range holding exactly `key`.
    pub fn single_key(key: impl Into<Key>) -> Self {
        let begin = key.into();
        let end = begin.key_after();
        Self { begin, end }
    }

    /// Inclusive lower bound
    pub fn begin(&self) -> &Key {
        &self.begin
    }

    /// Exclusive upper bound
    pub fn end(&self) -> &Key {
        &self.end
    }

    /// Consumes the range into `(begin, end)`.
    pub fn into_parts(self) -> (Key, Key) {
        (self.begin, self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// True when `end` is `begin` followed by one `0x00` byte.
    pub fn is_single_key(&self) -> bool {
        match (self.begin.as_bytes(), self.end.as_bytes()) {
            (Some(begin), Some(end)) => {
                end.len() == begin.len() + 1 && end.starts_with(begin) && end[begin.len()] == 0
            }
            _ => false,
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.begin <= *key && *key < self.end
    }

    /// True when `other` lies entirely within this range.
    pub fn contains_range(&self, other: &KeyRange) -> bool {
        self.begin <= other.begin && other.end <= self.end
    }

    /// True when the two ranges share at least one key.
    pub fn intersects(&self, other: &KeyRange) -> bool {
        self.begin < other.end && other.begin < self.end
    }

    /// Prepends `prefix` to both boundaries.
    pub fn with_prefix(&self, prefix: &[u8]) -> KeyRange {
        Self {
            begin: self.begin.with_prefix(prefix),
            end: self.end.with_prefix(prefix),
        }
    }
}

impl Default for KeyRange {
    fn default() -> Self {
        Self {
            begin: Key::empty(),
            end: Key::empty(),
        }
    }
}

impl fmt::Display for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

impl fmt::Debug for KeyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyRange{}", self)
    }
}
