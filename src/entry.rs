use crate::error::{DictError, Field};

/// Per-string metadata, one per id.
///
/// A base (`block_offset == 0`) stores its whole text in the arena. Any other
/// entry decodes as the first `prefix_len` bytes of its base followed by its
/// own `suffix_len` bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringEntry {
    /// Start of this entry's stored bytes in the arena.
    pub arena_offset: u32,
    /// Distance back to the block's base id.
    pub block_offset: u16,
    /// Bytes shared with the base.
    pub prefix_len: u8,
    /// Bytes stored in the arena.
    pub suffix_len: u8,
}

impl StringEntry {
    /// Encoded size of one entry.
    pub const SIZE: usize = std::mem::size_of::<StringEntry>();

    /// Returns true if this entry is a block root.
    #[inline]
    pub fn is_base(&self) -> bool {
        self.block_offset == 0
    }

    /// Length of the decoded string.
    #[inline]
    pub fn decoded_len(&self) -> usize {
        self.prefix_len as usize + self.suffix_len as usize
    }

    /// Range of this entry's own bytes in the arena.
    #[inline]
    pub(crate) fn suffix_range(&self) -> std::ops::Range<usize> {
        let start = self.arena_offset as usize;
        start..start + self.suffix_len as usize
    }
}

/// Upper bounds on the entry fields, in bytes or ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldLimits {
    pub max_prefix: usize,
    pub max_suffix: usize,
    pub max_span: usize,
}

impl FieldLimits {
    pub(crate) fn unbounded() -> Self {
        Self {
            max_prefix: usize::MAX,
            max_suffix: usize::MAX,
            max_span: usize::MAX,
        }
    }

    /// Narrows `value` into a field, failing if it exceeds either the
    /// configured cap or the field's physical width.
    pub(crate) fn check(&self, field: Field, value: usize, id: usize) -> Result<usize, DictError> {
        let limit = match field {
            Field::PrefixLen => self.max_prefix.min(u8::MAX as usize),
            Field::SuffixLen => self.max_suffix.min(u8::MAX as usize),
            Field::BlockOffset => self.max_span.min(u16::MAX as usize),
            Field::ArenaOffset => u32::MAX as usize,
        };
        if value > limit {
            return Err(DictError::FieldOverflow {
                field,
                value,
                limit,
                id,
            });
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_is_eight_bytes() {
        assert_eq!(StringEntry::SIZE, 8);
    }

    #[test]
    fn test_suffix_range() {
        let entry = StringEntry {
            arena_offset: 10,
            block_offset: 2,
            prefix_len: 3,
            suffix_len: 4,
        };
        assert_eq!(entry.suffix_range(), 10..14);
        assert_eq!(entry.decoded_len(), 7);
        assert!(!entry.is_base());
    }

    #[test]
    fn test_check_uses_physical_width() {
        let limits = FieldLimits::unbounded();
        assert!(limits.check(Field::SuffixLen, 255, 0).is_ok());
        let err = limits.check(Field::SuffixLen, 256, 7).unwrap_err();
        assert!(matches!(
            err,
            DictError::FieldOverflow {
                field: Field::SuffixLen,
                value: 256,
                limit: 255,
                id: 7
            }
        ));
        assert!(limits.check(Field::BlockOffset, 65_536, 0).is_err());
    }

    #[test]
    fn test_check_uses_configured_cap() {
        let limits = FieldLimits {
            max_prefix: 4,
            max_suffix: 255,
            max_span: 2,
        };
        assert!(limits.check(Field::PrefixLen, 4, 0).is_ok());
        assert!(limits.check(Field::PrefixLen, 5, 0).is_err());
        assert!(limits.check(Field::BlockOffset, 3, 0).is_err());
    }
}
