use crate::cost_table::CostTable;
use crate::entry::FieldLimits;

/// Block placement of one string, before field narrowing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Segment {
    /// Distance back to the base; 0 for a base.
    pub block_offset: usize,
    /// Bytes taken from the base; 0 for a base.
    pub prefix_len: usize,
}

/// Recovers the optimal blocks by walking the cost table backward.
///
/// Starting from the last string, each step reads the base of the block that
/// ends at `pos`, assigns `base..=pos` to it, and continues from `base - 1`.
pub(crate) fn segment(adjacent: &[usize], table: &CostTable, limits: &FieldLimits) -> Vec<Segment> {
    let mut segments = vec![Segment::default(); table.len()];

    let mut end = table.len();
    while end > 0 {
        let pos = end - 1;
        let base = pos - table.best_offset(pos);

        let mut shared = usize::MAX;
        for id in base + 1..=pos {
            shared = shared.min(adjacent[id]);
            segments[id] = Segment {
                block_offset: id - base,
                prefix_len: shared.min(limits.max_prefix),
            };
        }
        end = base;
    }

    segments
}
