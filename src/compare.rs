//! Three-way comparisons that read decoded strings in place.

use std::cmp::Ordering;

/// Compares `a` and `b` byte by byte; if one is a prefix of the other, the
/// shorter one is smaller.
#[inline]
pub(crate) fn compare_bytes(a: &[u8], b: &[u8]) -> Ordering {
    let common = a.len().min(b.len());
    for (x, y) in a[..common].iter().zip(&b[..common]) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    a.len().cmp(&b.len())
}

/// Compares the concatenation `head ++ tail` against `query` without
/// building it.
#[inline]
pub(crate) fn compare_split(head: &[u8], tail: &[u8], query: &[u8]) -> Ordering {
    if query.len() < head.len() {
        // The query ends inside the shared prefix.
        return match compare_bytes(&head[..query.len()], query) {
            Ordering::Equal => Ordering::Greater,
            ord => ord,
        };
    }
    let (query_head, query_tail) = query.split_at(head.len());
    match compare_bytes(head, query_head) {
        Ordering::Equal => compare_bytes(tail, query_tail),
        ord => ord,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compare_bytes() {
        assert_eq!(compare_bytes(b"abc", b"abd"), Ordering::Less);
        assert_eq!(compare_bytes(b"abd", b"abc"), Ordering::Greater);
        assert_eq!(compare_bytes(b"ab", b"abc"), Ordering::Less);
        assert_eq!(compare_bytes(b"abc", b"ab"), Ordering::Greater);
        assert_eq!(compare_bytes(b"", b""), Ordering::Equal);
        assert_eq!(compare_bytes(b"\xff", b"z"), Ordering::Greater);
    }

    #[test]
    fn test_compare_split() {
        // "band" stored as "ban" + "d"
        assert_eq!(compare_split(b"ban", b"d", b"band"), Ordering::Equal);
        assert_eq!(compare_split(b"ban", b"d", b"bandage"), Ordering::Less);
        assert_eq!(compare_split(b"ban", b"d", b"ban"), Ordering::Greater);
        assert_eq!(compare_split(b"ban", b"d", b"ba"), Ordering::Greater);
        assert_eq!(compare_split(b"ban", b"d", b"bz"), Ordering::Less);
        assert_eq!(compare_split(b"ban", b"d", b"bam"), Ordering::Greater);
        assert_eq!(compare_split(b"ban", b"d", b"banc"), Ordering::Greater);
        assert_eq!(compare_split(b"", b"", b""), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn prop_compare_split_matches_concatenation(
            head in prop::collection::vec(b'a'..=b'c', 0..6),
            tail in prop::collection::vec(b'a'..=b'c', 0..6),
            query in prop::collection::vec(b'a'..=b'c', 0..12),
        ) {
            let mut joined = head.clone();
            joined.extend_from_slice(&tail);
            prop_assert_eq!(compare_split(&head, &tail, &query), joined.as_slice().cmp(query.as_slice()));
        }
    }
}
