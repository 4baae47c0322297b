//! Set algebra over key ranges
//!
//! Shard movement excises sub-ranges from a range and needs the remaining
//! pieces back in key order. All results are sorted, pairwise disjoint and
//! free of empty ranges.

use std::ops::{BitAnd, Sub};

use super::range::KeyRange;

/// Portion of `a` not covered by `b`: zero, one or two ranges, ascending.
pub fn subtract(a: &KeyRange, b: &KeyRange) -> Vec<KeyRange> {
    let mut remaining = Vec::with_capacity(2);
    if a.is_empty() {
        return remaining;
    }

    // Left piece survives when b starts after a does.
    if a.begin() < b.begin() {
        let end = b.begin().min(a.end());
        remaining.push(KeyRange::new(a.begin().clone(), end.clone()));
    }

    // Right piece survives when b ends before a does.
    if b.end() < a.end() {
        let begin = b.end().max(a.begin());
        remaining.push(KeyRange::new(begin.clone(), a.end().clone()));
    }

    remaining.retain(|range| !range.is_empty());
    remaining
}

/// Keys present in both ranges. Disjoint inputs give an empty range.
pub fn intersect(a: &KeyRange, b: &KeyRange) -> KeyRange {
    let begin = a.begin().max(b.begin());
    let end = a.end().min(b.end());
    if begin >= end {
        return KeyRange::new(begin.clone(), begin.clone());
    }
    KeyRange::new(begin.clone(), end.clone())
}

/// Portion of `a` left after removing every range in `excised`.
pub fn subtract_all<'a, I>(a: &KeyRange, excised: I) -> Vec<KeyRange>
where
    I: IntoIterator<Item = &'a KeyRange>,
{
    let mut remaining = if a.is_empty() {
        Vec::new()
    } else {
        vec![a.clone()]
    };

    for cut in excised {
        if remaining.is_empty() {
            break;
        }
        remaining = remaining
            .iter()
            .flat_map(|piece| subtract(piece, cut))
            .collect();
    }

    remaining.sort();
    remaining
}

impl Sub<&KeyRange> for &KeyRange {
    type Output = Vec<KeyRange>;

    fn sub(self, rhs: &KeyRange) -> Self::Output {
        subtract(self, rhs)
    }
}

impl BitAnd<&KeyRange> for &KeyRange {
    type Output = KeyRange;

    fn bitand(self, rhs: &KeyRange) -> Self::Output {
        intersect(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;

    fn range(begin: &str, end: &str) -> KeyRange {
        KeyRange::new(begin, end)
    }

    #[test]
    fn test_subtract_middle() {
        let result = &range("b", "y") - &range("c", "f");
        assert_eq!(result, vec![range("b", "c"), range("f", "y")]);
    }

    #[test]
    fn test_subtract_disjoint_left() {
        assert_eq!(&range("b", "y") - &range("1", "9"), vec![range("b", "y")]);
    }

    #[test]
    fn test_subtract_overlaps_left() {
        assert_eq!(&range("b", "y") - &range("a", "f"), vec![range("f", "y")]);
    }

    #[test]
    fn test_subtract_overlaps_right() {
        assert_eq!(&range("b", "y") - &range("f", "z"), vec![range("b", "f")]);
    }

    #[test]
    fn test_subtract_superset() {
        assert!((&range("b", "y") - &range("a", "z")).is_empty());
        assert!((&range("b", "y") - &range("b", "y")).is_empty());
    }

    #[test]
    fn test_subtract_touching_boundaries() {
        // b ends exactly where a begins: disjoint
        assert_eq!(&range("b", "y") - &range("a", "b"), vec![range("b", "y")]);
        // b starts exactly where a ends: disjoint
        assert_eq!(&range("b", "y") - &range("y", "z"), vec![range("b", "y")]);
        // shared begin, shorter b
        assert_eq!(&range("b", "y") - &range("b", "c"), vec![range("c", "y")]);
        // shared end, later b
        assert_eq!(&range("b", "y") - &range("x", "y"), vec![range("b", "x")]);
    }

    #[test]
    fn test_subtract_empty_operands() {
        assert!((&range("c", "c") - &range("a", "b")).is_empty());
        assert_eq!(&range("b", "y") - &range("d", "d"), vec![range("b", "d"), range("d", "y")]);
    }

    #[test]
    fn test_subtract_against_max() {
        let all = KeyRange::all_keys();
        let result = &all - &range("m", "n");
        assert_eq!(
            result,
            vec![
                KeyRange::new(Key::empty(), "m"),
                KeyRange::new("n", Key::max())
            ]
        );
    }

    #[test]
    fn test_intersect() {
        assert_eq!(&range("b", "y") & &range("a", "f"), range("b", "f"));
        assert_eq!(&range("b", "y") & &range("c", "f"), range("c", "f"));
        assert!((&range("b", "c") & &range("d", "f")).is_empty());
    }

    #[test]
    fn test_subtract_all() {
        let remaining = subtract_all(
            &range("a", "z"),
            &[range("m", "n"), range("c", "e"), range("x", "zz")],
        );
        assert_eq!(
            remaining,
            vec![range("a", "c"), range("e", "m"), range("n", "x")]
        );
    }

    #[test]
    fn test_subtract_all_nothing_left() {
        let remaining = subtract_all(&range("b", "d"), &[range("a", "c"), range("c", "e")]);
        assert!(remaining.is_empty());
    }
}
