//! Error type shared by construction, access and persistence.

use std::fmt;
use thiserror::Error;

/// A field of [`StringEntry`](crate::StringEntry) with a fixed encoded width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PrefixLen,
    SuffixLen,
    BlockOffset,
    ArenaOffset,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::PrefixLen => "prefix_len",
            Field::SuffixLen => "suffix_len",
            Field::BlockOffset => "block_offset",
            Field::ArenaOffset => "arena_offset",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum DictError {
    /// A string cannot be encoded without exceeding a field's limit.
    #[error("{field} of {value} exceeds the encodable maximum of {limit} (string id {id})")]
    FieldOverflow {
        field: Field,
        value: usize,
        limit: usize,
        id: usize,
    },

    /// An id passed to `access` is not below the dictionary length.
    #[error("string id {id} is out of range for a dictionary of {len} strings")]
    IdOutOfRange { id: usize, len: usize },

    /// A persisted dictionary image is malformed.
    #[error("dictionary format error: {0}")]
    Format(String),

    /// The underlying reader or writer failed while saving or loading.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_overflow_message() {
        let err = DictError::FieldOverflow {
            field: Field::SuffixLen,
            value: 300,
            limit: 255,
            id: 4,
        };
        assert_eq!(
            err.to_string(),
            "suffix_len of 300 exceeds the encodable maximum of 255 (string id 4)"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: DictError = io.into();
        assert!(matches!(err, DictError::Io(_)));
    }
}
