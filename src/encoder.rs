use crate::entry::{FieldLimits, StringEntry};
use crate::error::{DictError, Field};
use crate::segment::Segment;

/// Writes every string's unshared bytes into one arena, in id order.
///
/// Each field is narrowed against `limits`; a value that does not fit fails
/// the build instead of being truncated.
pub(crate) fn encode(
    sorted: &[Vec<u8>],
    segments: &[Segment],
    limits: &FieldLimits,
) -> Result<(Vec<StringEntry>, Vec<u8>), DictError> {
    debug_assert_eq!(sorted.len(), segments.len());

    let arena_len: usize = sorted
        .iter()
        .zip(segments)
        .map(|(s, seg)| s.len() - seg.prefix_len)
        .sum();
    let mut arena = Vec::with_capacity(arena_len);
    let mut entries = Vec::with_capacity(sorted.len());

    for (id, (s, seg)) in sorted.iter().zip(segments).enumerate() {
        let suffix = &s[seg.prefix_len..];

        let arena_offset = limits.check(Field::ArenaOffset, arena.len(), id)?;
        let block_offset = limits.check(Field::BlockOffset, seg.block_offset, id)?;
        let prefix_len = limits.check(Field::PrefixLen, seg.prefix_len, id)?;
        let suffix_len = limits.check(Field::SuffixLen, suffix.len(), id)?;

        entries.push(StringEntry {
            arena_offset: arena_offset as u32,
            block_offset: block_offset as u16,
            prefix_len: prefix_len as u8,
            suffix_len: suffix_len as u8,
        });
        arena.extend_from_slice(suffix);
    }

    Ok((entries, arena))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(strings: &[&str]) -> Vec<Vec<u8>> {
        strings.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_arena_layout() {
        let strings = sorted(&["ban", "band", "bandage"]);
        let segments = vec![
            Segment::default(),
            Segment {
                block_offset: 1,
                prefix_len: 3,
            },
            Segment {
                block_offset: 2,
                prefix_len: 3,
            },
        ];
        let (entries, arena) = encode(&strings, &segments, &FieldLimits::unbounded()).unwrap();

        assert_eq!(arena, b"banddage");
        assert_eq!(entries[0].arena_offset, 0);
        assert_eq!(entries[0].suffix_len, 3);
        assert_eq!(entries[1].arena_offset, 3);
        assert_eq!(entries[1].prefix_len, 3);
        assert_eq!(entries[1].suffix_len, 1);
        assert_eq!(entries[2].arena_offset, 4);
        assert_eq!(entries[2].block_offset, 2);
        assert_eq!(entries[2].suffix_len, 4);
    }

    #[test]
    fn test_rejects_prefix_over_cap() {
        let strings = sorted(&["abcdefg", "abcdefgh"]);
        let segments = vec![
            Segment::default(),
            Segment {
                block_offset: 1,
                prefix_len: 7,
            },
        ];
        let limits = FieldLimits {
            max_prefix: 4,
            ..FieldLimits::unbounded()
        };
        let err = encode(&strings, &segments, &limits).unwrap_err();
        assert!(matches!(
            err,
            DictError::FieldOverflow {
                field: Field::PrefixLen,
                value: 7,
                limit: 4,
                id: 1
            }
        ));
    }

    #[test]
    fn test_rejects_long_base() {
        let long = "q".repeat(256);
        let strings = sorted(&[long.as_str()]);
        let err = encode(&strings, &[Segment::default()], &FieldLimits::unbounded()).unwrap_err();
        assert!(matches!(
            err,
            DictError::FieldOverflow {
                field: Field::SuffixLen,
                value: 256,
                ..
            }
        ));
    }

    #[test]
    fn test_empty() {
        let (entries, arena) = encode(&[], &[], &FieldLimits::unbounded()).unwrap();
        assert!(entries.is_empty());
        assert!(arena.is_empty());
    }
}
