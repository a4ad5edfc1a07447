//! Construction settings.
//!
//! The defaults use the full width of every [`StringEntry`](crate::StringEntry)
//! field. Narrower caps are mostly useful to bound block length, which bounds
//! how far `access` reaches back for a base.

use crate::entry::FieldLimits;

/// What construction does when the optimal layout would not fit the field caps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Only consider encodings that fit: shared prefixes are clamped and blocks
    /// are cut at `max_block_span`. Fails only for strings that fit no block.
    #[default]
    Resegment,

    /// Compute the unconstrained optimum and fail if any field overflows.
    Reject,
}

/// Settings for [`FrontCodedDict::build_with_config`](crate::FrontCodedDict::build_with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Longest shared prefix a block member may record.
    pub max_prefix_len: u8,
    /// Longest run of bytes a single entry may store in the arena.
    pub max_suffix_len: u8,
    /// Largest distance between a block member and its base.
    pub max_block_span: u16,
    pub overflow: OverflowPolicy,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_prefix_len: u8::MAX,
            max_suffix_len: u8::MAX,
            max_block_span: u16::MAX,
            overflow: OverflowPolicy::Resegment,
        }
    }
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_prefix_len(mut self, max_prefix_len: u8) -> Self {
        self.max_prefix_len = max_prefix_len;
        self
    }

    pub fn with_max_suffix_len(mut self, max_suffix_len: u8) -> Self {
        self.max_suffix_len = max_suffix_len;
        self
    }

    pub fn with_max_block_span(mut self, max_block_span: u16) -> Self {
        self.max_block_span = max_block_span;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Caps every encoded entry must satisfy.
    pub(crate) fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            max_prefix: self.max_prefix_len as usize,
            max_suffix: self.max_suffix_len as usize,
            max_span: self.max_block_span as usize,
        }
    }

    /// Caps the cost table optimizes under.
    ///
    /// Under [`OverflowPolicy::Reject`] the search is unconstrained and the
    /// encoder reports any overflow afterwards.
    pub(crate) fn search_limits(&self) -> FieldLimits {
        match self.overflow {
            OverflowPolicy::Resegment => self.field_limits(),
            OverflowPolicy::Reject => FieldLimits::unbounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_full_widths() {
        let config = BuildConfig::default();
        let limits = config.field_limits();
        assert_eq!(limits.max_prefix, 255);
        assert_eq!(limits.max_suffix, 255);
        assert_eq!(limits.max_span, 65_535);
        assert_eq!(config.overflow, OverflowPolicy::Resegment);
    }

    #[test]
    fn test_reject_searches_unconstrained() {
        let config = BuildConfig::new()
            .with_max_prefix_len(4)
            .with_overflow(OverflowPolicy::Reject);
        assert_eq!(config.field_limits().max_prefix, 4);
        assert_eq!(config.search_limits(), FieldLimits::unbounded());
    }

    #[test]
    fn test_resegment_searches_within_caps() {
        let config = BuildConfig::new().with_max_block_span(3);
        assert_eq!(config.search_limits(), config.field_limits());
    }
}
