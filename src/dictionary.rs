use crate::compare::{compare_bytes, compare_split};
use crate::config::BuildConfig;
use crate::cost_table::{adjacent_lcps, CostTable};
use crate::encoder::encode;
use crate::entry::StringEntry;
use crate::error::DictError;
use crate::iter::DictIter;
use crate::segment::segment;
use crate::sort::sort_batch;
use log::info;
use std::cmp::Ordering;

/// Immutable front-coded dictionary over a sorted batch of byte strings.
///
/// Ids are the ranks of the strings in byte-wise order. Strings are grouped
/// into blocks; the first string of a block (its base) is stored whole, and
/// every other member stores only what follows the prefix it shares with the
/// base. The block layout minimizes total arena bytes.
///
/// Both queries work on the compressed layout: [`lookup`](Self::lookup)
/// binary-searches without decoding candidates, and [`access`](Self::access)
/// reads at most two arena slices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontCodedDict {
    pub(crate) entries: Vec<StringEntry>,
    pub(crate) arena: Vec<u8>,
}

impl FrontCodedDict {
    /// Builds a dictionary with [`BuildConfig::default`].
    pub fn build<I, S>(strings: I) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        Self::build_with_config(strings, &BuildConfig::default())
    }

    /// Builds a dictionary from an unsorted batch, duplicates allowed.
    ///
    /// # Errors
    ///
    /// [`DictError::FieldOverflow`] if some string cannot be encoded within
    /// the configured field caps.
    pub fn build_with_config<I, S>(strings: I, config: &BuildConfig) -> Result<Self, DictError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let sorted = sort_batch(strings);
        let search = config.search_limits();

        let adjacent = adjacent_lcps(&sorted);
        let table = CostTable::build(&sorted, &adjacent, &search)?;
        let segments = segment(&adjacent, &table, &search);
        let (entries, arena) = encode(&sorted, &segments, &config.field_limits())?;

        let dict = Self { entries, arena };
        let stats = dict.stats();
        info!(
            "built dictionary: {} strings in {} blocks, arena {} of {} raw bytes, footprint {} bytes",
            stats.num_strings,
            stats.num_blocks,
            stats.arena_bytes,
            stats.raw_bytes,
            stats.memory_footprint()
        );
        Ok(dict)
    }

    /// Number of strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the id of `query`.
    ///
    /// Returns `None` if the string was not in the batch. If it was present
    /// more than once, any one of its ids is returned.
    pub fn lookup(&self, query: impl AsRef<[u8]>) -> Option<usize> {
        let query = query.as_ref();
        let mut lo = 0;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.compare_to(mid, query) {
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Some(mid),
            }
        }
        None
    }

    /// Decodes the string with the given id.
    ///
    /// # Errors
    ///
    /// [`DictError::IdOutOfRange`] if `id >= self.len()`.
    pub fn access(&self, id: usize) -> Result<Vec<u8>, DictError> {
        let mut buf = Vec::new();
        self.access_into(id, &mut buf)?;
        Ok(buf)
    }

    /// Decodes the string with the given id into `buf`, replacing its contents.
    pub fn access_into(&self, id: usize, buf: &mut Vec<u8>) -> Result<(), DictError> {
        if id >= self.entries.len() {
            return Err(DictError::IdOutOfRange {
                id,
                len: self.entries.len(),
            });
        }
        buf.clear();
        self.decode_into(id, buf);
        Ok(())
    }

    /// Bytes held by the arena plus the entry table.
    pub fn memory_footprint(&self) -> usize {
        self.arena.len() + self.entries.len() * StringEntry::SIZE
    }

    /// Returns compression statistics.
    pub fn stats(&self) -> DictStats {
        DictStats {
            num_strings: self.entries.len(),
            num_blocks: self.entries.iter().filter(|e| e.is_base()).count(),
            arena_bytes: self.arena.len(),
            raw_bytes: self.entries.iter().map(StringEntry::decoded_len).sum(),
            entry_table_bytes: self.entries.len() * StringEntry::SIZE,
        }
    }

    /// Iterates over all strings in id order.
    pub fn iter(&self) -> DictIter<'_> {
        DictIter::new(self)
    }

    /// The per-string metadata, indexed by id.
    pub fn entries(&self) -> &[StringEntry] {
        &self.entries
    }

    /// The concatenated stored bytes of every entry.
    pub fn arena(&self) -> &[u8] {
        &self.arena
    }

    /// Appends the decoded string `id` to `buf`. `id` must be in range.
    pub(crate) fn decode_into(&self, id: usize, buf: &mut Vec<u8>) {
        let entry = &self.entries[id];
        buf.reserve(entry.decoded_len());
        if !entry.is_base() {
            buf.extend_from_slice(self.shared_prefix(id, entry));
        }
        buf.extend_from_slice(&self.arena[entry.suffix_range()]);
    }

    /// Compares the decoded string `id` with `query`.
    fn compare_to(&self, id: usize, query: &[u8]) -> Ordering {
        let entry = &self.entries[id];
        let suffix = &self.arena[entry.suffix_range()];
        if entry.is_base() {
            compare_bytes(suffix, query)
        } else {
            compare_split(self.shared_prefix(id, entry), suffix, query)
        }
    }

    /// The bytes a block member borrows from its base.
    #[inline]
    fn shared_prefix(&self, id: usize, entry: &StringEntry) -> &[u8] {
        let base = &self.entries[id - entry.block_offset as usize];
        let start = base.arena_offset as usize;
        &self.arena[start..start + entry.prefix_len as usize]
    }
}

impl<'a> IntoIterator for &'a FrontCodedDict {
    type Item = Vec<u8>;
    type IntoIter = DictIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Size breakdown of a dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictStats {
    pub num_strings: usize,
    /// Number of block bases
    pub num_blocks: usize,
    /// Bytes stored in the arena
    pub arena_bytes: usize,
    /// Total length of all strings, i.e. the arena size without front coding
    pub raw_bytes: usize,
    pub entry_table_bytes: usize,
}

impl DictStats {
    /// Arena plus entry table.
    pub fn memory_footprint(&self) -> usize {
        self.arena_bytes + self.entry_table_bytes
    }

    /// Returns the arena size as a percentage of the raw string bytes.
    pub fn compression_ratio(&self) -> f64 {
        if self.raw_bytes == 0 {
            0.0
        } else {
            (self.arena_bytes as f64 / self.raw_bytes as f64) * 100.0
        }
    }
}
