//! Key selectors
//!
//! A selector names "the key at `offset` from the first key at or after a
//! boundary" without knowing the keys in the database. Range reads carry
//! two of them. Resolution against stored keys happens in the read path;
//! this module owns the selector value and its key normalisation.
//!
//! Base key, by flag and direction:
//!
//! | or_equal | offset | resolves from                 |
//! |----------|--------|-------------------------------|
//! | false    | 1      | first key >= `key`            |
//! | true     | 1      | first key >  `key`            |
//! | true     | 0      | last key  <= `key`            |
//! | false    | 0      | last key  <  `key`            |
//!
//! Other offsets step forward or backward from those.

use std::fmt;
use std::ops::{Add, Sub};

use crate::config::KeyLimits;
use crate::key::Key;

/// Directional cursor: a boundary key, a flag and an offset
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KeySelector {
    key: Key,
    or_equal: bool,
    offset: i32,
}

impl KeySelector {
    /// Creates a selector, truncating `key` to the size limit.
    pub fn new(key: impl Into<Key>, or_equal: bool, offset: i32, limits: &impl KeyLimits) -> Self {
        Self {
            key: limit_key(key.into(), limits),
            or_equal,
            offset,
        }
    }

    /// Creates a selector with `key` stored verbatim. The caller guarantees
    /// the key is already within the size limit.
    pub fn unlimited(key: impl Into<Key>, or_equal: bool, offset: i32) -> Self {
        Self {
            key: key.into(),
            or_equal,
            offset,
        }
    }

    pub fn first_greater_or_equal(key: impl Into<Key>, limits: &impl KeyLimits) -> Self {
        Self::new(key, false, 1, limits)
    }

    pub fn first_greater_than(key: impl Into<Key>, limits: &impl KeyLimits) -> Self {
        Self::new(key, true, 1, limits)
    }

    pub fn last_less_or_equal(key: impl Into<Key>, limits: &impl KeyLimits) -> Self {
        Self::new(key, true, 0, limits)
    }

    pub fn last_less_than(key: impl Into<Key>, limits: &impl KeyLimits) -> Self {
        Self::new(key, false, 0, limits)
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn or_equal(&self) -> bool {
        self.or_equal
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Replaces the key.
    ///
    /// No stored key is longer than `max_key_size(key)`, so a longer key is
    /// cut to `max_key_size(key) + 1` bytes. The shortened selector resolves
    /// to the same key.
    pub fn set_key(&mut self, key: impl Into<Key>, limits: &impl KeyLimits) {
        self.key = limit_key(key.into(), limits);
    }

    /// Replaces the key verbatim.
    pub fn set_key_unlimited(&mut self, key: impl Into<Key>) {
        self.key = key.into();
    }

    /// Resolution depends only on keys before `key`.
    pub fn is_backward(&self) -> bool {
        !self.or_equal && self.offset <= 0
    }

    pub fn is_first_greater_or_equal(&self) -> bool {
        !self.or_equal && self.offset == 1
    }

    pub fn is_first_greater_than(&self) -> bool {
        self.or_equal && self.offset == 1
    }

    pub fn is_last_less_or_equal(&self) -> bool {
        self.or_equal && self.offset == 0
    }

    /// Resolves above `key` whatever the database holds.
    pub fn is_definitely_greater(&self, key: &Key) -> bool {
        self.offset >= 1
            && if self.is_first_greater_or_equal() {
                self.key > *key
            } else {
                self.key >= *key
            }
    }

    /// Resolves below `key` whatever the database holds.
    pub fn is_definitely_less(&self, key: &Key) -> bool {
        self.offset <= 0
            && if self.is_last_less_or_equal() {
                self.key < *key
            } else {
                self.key <= *key
            }
    }

    /// Diagnostic rendering. Not meant to be parsed back.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

fn limit_key(key: Key, limits: &impl KeyLimits) -> Key {
    let max_size = limits.max_key_size(&key);
    match key.len() {
        Some(len) if len > max_size => key.prefix(max_size + 1),
        _ => key,
    }
}

/// Panics if the offset overflows `i32`.
impl Add<i32> for KeySelector {
    type Output = KeySelector;

    fn add(self, delta: i32) -> KeySelector {
        let offset = self
            .offset
            .checked_add(delta)
            .unwrap_or_else(|| panic!("selector offset overflow: {} + {}", self.offset, delta));
        KeySelector { offset, ..self }
    }
}

/// Panics if the offset overflows `i32`.
impl Sub<i32> for KeySelector {
    type Output = KeySelector;

    fn sub(self, delta: i32) -> KeySelector {
        let offset = self
            .offset
            .checked_sub(delta)
            .unwrap_or_else(|| panic!("selector offset overflow: {} - {}", self.offset, delta));
        KeySelector { offset, ..self }
    }
}

impl fmt::Display for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.printable();
        match (self.offset > 0, self.or_equal) {
            (true, true) => write!(f, "{}+firstGreaterThan({})", self.offset - 1, key),
            (true, false) => write!(f, "{}+firstGreaterOrEqual({})", self.offset - 1, key),
            (false, true) => write!(f, "{}+lastLessOrEqual({})", self.offset, key),
            (false, false) => write!(f, "{}+lastLessThan({})", self.offset, key),
        }
    }
}

impl fmt::Debug for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySelector({})", self)
    }
}
