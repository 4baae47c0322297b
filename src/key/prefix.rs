//! Projection of ranges into and out of a prefix namespace
//!
//! Tenant and backup namespaces live under a shared key prefix. Projecting a
//! range strips that prefix; boundaries outside the namespace clamp to the
//! edges of the projected key space.

use super::key::Key;
use super::range::KeyRange;

/// Rewrites `range` into the coordinate space under `prefix`.
///
/// An absent or empty prefix returns the range unchanged. A `begin` outside
/// the prefix becomes the empty key and an `end` outside it becomes
/// [`Key::max`].
pub fn to_prefix_relative(range: &KeyRange, prefix: Option<&Key>) -> KeyRange {
    let Some(prefix) = prefix.and_then(Key::as_bytes).filter(|p| !p.is_empty()) else {
        return range.clone();
    };

    let begin = if range.begin().starts_with(prefix) {
        range.begin().remove_prefix(prefix)
    } else {
        Key::empty()
    };
    let end = if range.end().starts_with(prefix) {
        range.end().remove_prefix(prefix)
    } else {
        Key::max()
    };

    KeyRange::new(begin, end)
}

/// Rewrites a prefix-relative `range` back into the global key space.
///
/// A [`Key::max`] boundary maps to the end of the prefix namespace.
pub fn from_prefix_relative(range: &KeyRange, prefix: Option<&Key>) -> KeyRange {
    let Some(prefix) = prefix.and_then(Key::as_bytes).filter(|p| !p.is_empty()) else {
        return range.clone();
    };

    let globalize = |key: &Key| {
        if key.is_max() {
            Key::copy_from_slice(prefix).strinc().unwrap_or_else(Key::max)
        } else {
            key.with_prefix(prefix)
        }
    };
    let begin = globalize(range.begin());
    let end = globalize(range.end());

    KeyRange::new(begin, end)
}
