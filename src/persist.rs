//! Binary image of a [`FrontCodedDict`].
//!
//! All integers are little-endian:
//!
//! | Field | Size |
//! |---|---|
//! | magic `FCD1` | 4 |
//! | format version (`u16`) | 2 |
//! | entry count `n` (`u64`) | 8 |
//! | arena length (`u64`) | 8 |
//! | `n` entries: `arena_offset: u32`, `block_offset: u16`, `prefix_len: u8`, `suffix_len: u8` | 8 each |
//! | arena bytes | arena length |
//!
//! Loading checks every structural invariant before any string is decoded,
//! so a corrupted image is rejected rather than read out of bounds.

use crate::compare::compare_bytes;
use crate::dictionary::FrontCodedDict;
use crate::entry::StringEntry;
use crate::error::DictError;
use log::debug;
use std::cmp::Ordering;
use std::io::{Read, Write};

/// Identifies a dictionary image.
pub const MAGIC: &[u8; 4] = b"FCD1";
/// Current image version.
pub const FORMAT_VERSION: u16 = 1;

const HEADER_LEN: usize = 4 + 2 + 8 + 8;

impl FrontCodedDict {
    /// Writes the dictionary image to `writer` and returns the number of bytes
    /// written.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<usize, DictError> {
        let bytes = self.to_bytes();
        writer.write_all(&bytes)?;
        writer.flush()?;

        debug!(
            "wrote dictionary image: {} entries, {} arena bytes, {} bytes total",
            self.entries.len(),
            self.arena.len(),
            bytes.len()
        );
        Ok(bytes.len())
    }

    /// Returns the dictionary image as a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.memory_footprint());
        self.encode_image(&mut bytes);
        bytes
    }

    /// Appends the image to `buf`.
    fn encode_image(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(MAGIC);
        buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
        buf.extend_from_slice(&(self.entries.len() as u64).to_le_bytes());
        buf.extend_from_slice(&(self.arena.len() as u64).to_le_bytes());

        for entry in &self.entries {
            buf.extend_from_slice(&entry.arena_offset.to_le_bytes());
            buf.extend_from_slice(&entry.block_offset.to_le_bytes());
            buf.push(entry.prefix_len);
            buf.push(entry.suffix_len);
        }
        buf.extend_from_slice(&self.arena);
    }

    /// Reads and validates a dictionary image.
    ///
    /// # Errors
    ///
    /// [`DictError::Io`] if the reader fails or ends early, and
    /// [`DictError::Format`] if the image is malformed.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, DictError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(DictError::Format(format!("bad magic {:?}", magic)));
        }

        let mut u16_buf = [0u8; 2];
        reader.read_exact(&mut u16_buf)?;
        let version = u16::from_le_bytes(u16_buf);
        if version != FORMAT_VERSION {
            return Err(DictError::Format(format!(
                "unsupported version {} (expected {})",
                version, FORMAT_VERSION
            )));
        }

        let mut u64_buf = [0u8; 8];
        reader.read_exact(&mut u64_buf)?;
        let entry_count = u64::from_le_bytes(u64_buf);
        reader.read_exact(&mut u64_buf)?;
        let arena_len = u64::from_le_bytes(u64_buf);

        let table_len = entry_count
            .checked_mul(StringEntry::SIZE as u64)
            .ok_or_else(|| DictError::Format(format!("entry count {} is too large", entry_count)))?;
        let table = read_section(&mut reader, table_len, "entry table")?;
        let entries: Vec<StringEntry> = table
            .chunks_exact(StringEntry::SIZE)
            .map(|record| StringEntry {
                arena_offset: u32::from_le_bytes([record[0], record[1], record[2], record[3]]),
                block_offset: u16::from_le_bytes([record[4], record[5]]),
                prefix_len: record[6],
                suffix_len: record[7],
            })
            .collect();
        let arena = read_section(&mut reader, arena_len, "arena")?;

        validate_layout(&entries, &arena)?;
        let dict = FrontCodedDict { entries, arena };
        validate_order(&dict)?;

        debug!(
            "read dictionary image: {} entries, {} arena bytes",
            dict.len(),
            dict.arena.len()
        );
        Ok(dict)
    }

    /// Reads and validates a dictionary image from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DictError> {
        Self::read_from(bytes)
    }
}

/// Reads exactly `len` bytes, growing the buffer only as data arrives.
fn read_section<R: Read>(reader: &mut R, len: u64, what: &str) -> Result<Vec<u8>, DictError> {
    let mut buf = Vec::new();
    reader.by_ref().take(len).read_to_end(&mut buf)?;
    if (buf.len() as u64) < len {
        return Err(DictError::Format(format!(
            "{} truncated: expected {} bytes, found {}",
            what,
            len,
            buf.len()
        )));
    }
    Ok(buf)
}

/// Checks that every entry decodes from in-range arena bytes through a real
/// base.
fn validate_layout(entries: &[StringEntry], arena: &[u8]) -> Result<(), DictError> {
    let mut expected_offset = 0usize;

    for (id, entry) in entries.iter().enumerate() {
        if entry.arena_offset as usize != expected_offset {
            return Err(DictError::Format(format!(
                "entry {} starts at arena offset {} (expected {})",
                id, entry.arena_offset, expected_offset
            )));
        }
        expected_offset += entry.suffix_len as usize;
        if expected_offset > arena.len() {
            return Err(DictError::Format(format!(
                "entry {} runs past the end of the {}-byte arena",
                id,
                arena.len()
            )));
        }

        if entry.is_base() {
            if entry.prefix_len != 0 {
                return Err(DictError::Format(format!(
                    "base entry {} records a shared prefix",
                    id
                )));
            }
            continue;
        }

        let base_id = id
            .checked_sub(entry.block_offset as usize)
            .ok_or_else(|| DictError::Format(format!("entry {} points before entry 0", id)))?;
        let base = &entries[base_id];
        if !base.is_base() {
            return Err(DictError::Format(format!(
                "entry {} points at entry {}, which is not a block base",
                id, base_id
            )));
        }
        if entry.prefix_len > base.suffix_len {
            return Err(DictError::Format(format!(
                "entry {} shares {} bytes but its base holds {}",
                id, entry.prefix_len, base.suffix_len
            )));
        }
    }

    if expected_offset != arena.len() {
        return Err(DictError::Format(format!(
            "arena holds {} bytes but entries account for {}",
            arena.len(),
            expected_offset
        )));
    }
    Ok(())
}

/// Checks that ids follow byte-wise order, which `lookup` relies on.
fn validate_order(dict: &FrontCodedDict) -> Result<(), DictError> {
    let mut prev = Vec::new();
    let mut current = Vec::new();

    for id in 0..dict.len() {
        current.clear();
        dict.decode_into(id, &mut current);
        if id > 0 && compare_bytes(&prev, &current) == Ordering::Greater {
            return Err(DictError::Format(format!(
                "entry {} sorts before entry {}",
                id,
                id - 1
            )));
        }
        std::mem::swap(&mut prev, &mut current);
    }
    Ok(())
}
