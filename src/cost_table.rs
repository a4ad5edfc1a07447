use crate::entry::FieldLimits;
use crate::error::{DictError, Field};
use log::debug;

/// Number of leading bytes `a` and `b` share.
#[inline]
pub(crate) fn lcp(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// LCP of each string with its predecessor; the first slot is 0.
///
/// In a sorted sequence `LCP(s[i], s[j]) = min(LCP(s[i - 1], s[j]), adjacent[i])`
/// for any `j < i`, so neither the cost table nor the segmenter rescans
/// string bytes.
pub(crate) fn adjacent_lcps(sorted: &[Vec<u8>]) -> Vec<usize> {
    let mut lcps = Vec::with_capacity(sorted.len());
    if !sorted.is_empty() {
        lcps.push(0);
    }
    lcps.extend(sorted.windows(2).map(|pair| lcp(&pair[0], &pair[1])));
    lcps
}

/// Optimal front-coding costs for every prefix of a sorted batch.
///
/// Conceptually `cost[i][j]` is the fewest arena bytes that encode `s[..=i]`
/// with the last block rooted at `j`:
///
/// - `cost[i][i] = best[i - 1] + len(s[i])` (close the previous block, start a
///   new one at `i`)
/// - `cost[i][j] = cost[i - 1][j] + len(s[i]) - LCP(s[i], s[j])` for `j < i`
///
/// Rows are filled one at a time and only the previous row is live. A row
/// holds just the bases that can still win: once `cost[i][j] >= cost[i][i]`,
/// base `j` is dropped for good, because every later string shares at least
/// as much with `s[i]` as with `s[j]`. A dropped base never has the smallest
/// offset among the minima, so the result matches the full table.
///
/// For each row the table keeps the minimum and the offset achieving it,
/// which is all the backward walk in [`segment`](crate::segment::segment)
/// reads.
#[derive(Debug)]
pub(crate) struct CostTable {
    /// Fewest bytes that encode `s[..=i]`.
    best_cost: Vec<u64>,
    /// Offset from `i` back to the base of the last block in that encoding.
    /// Ties go to the smallest offset.
    best_offset: Vec<usize>,
}

/// A block base still worth extending.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    base: usize,
    /// `cost[i][base]` for the current row `i`.
    cost: u64,
    /// LCP of `s[i]` and `s[base]`.
    shared: usize,
}

impl CostTable {
    /// Fills the table for `sorted` under `limits`.
    ///
    /// Candidates whose prefix, suffix or span would exceed `limits` are never
    /// considered. If a string has no candidate at all, it cannot be stored
    /// even as a base, and construction fails.
    pub(crate) fn build(
        sorted: &[Vec<u8>],
        adjacent: &[usize],
        limits: &FieldLimits,
    ) -> Result<Self, DictError> {
        let n = sorted.len();
        let mut best_cost: Vec<u64> = Vec::with_capacity(n);
        let mut best_offset = Vec::with_capacity(n);

        // Live bases, closest first.
        let mut row: Vec<Candidate> = Vec::new();
        let mut next: Vec<Candidate> = Vec::new();
        let mut widest = 0;

        for (i, s) in sorted.iter().enumerate() {
            let len = s.len();
            let closed = best_cost.last().copied().unwrap_or(0);
            let fresh = (len <= limits.max_suffix).then(|| closed + len as u64);

            next.clear();
            if let Some(cost) = fresh {
                next.push(Candidate {
                    base: i,
                    cost,
                    shared: len,
                });
            }

            for candidate in &row {
                if i - candidate.base > limits.max_span {
                    break;
                }
                let shared = candidate.shared.min(adjacent[i]);
                let prefix = shared.min(limits.max_prefix);
                let suffix = len - prefix;
                // Older bases share no more than this one, so they fail too.
                if prefix == 0 || suffix > limits.max_suffix {
                    break;
                }
                let cost = candidate.cost + suffix as u64;
                if fresh.map_or(false, |fresh| cost >= fresh) {
                    continue;
                }
                next.push(Candidate {
                    base: candidate.base,
                    cost,
                    shared,
                });
            }

            let mut chosen: Option<&Candidate> = None;
            for candidate in &next {
                if chosen.map_or(true, |best| candidate.cost < best.cost) {
                    chosen = Some(candidate);
                }
            }

            // The fresh block only fails when the string alone is too long
            // for the suffix field.
            let Some(chosen) = chosen else {
                return Err(DictError::FieldOverflow {
                    field: Field::SuffixLen,
                    value: len,
                    limit: limits.max_suffix,
                    id: i,
                });
            };

            best_cost.push(chosen.cost);
            best_offset.push(i - chosen.base);
            widest = widest.max(next.len());
            std::mem::swap(&mut row, &mut next);
        }

        let table = Self {
            best_cost,
            best_offset,
        };
        debug!(
            "cost table: {} strings, at most {} live bases per row, optimal cost {} bytes",
            n,
            widest,
            table.optimal_cost()
        );
        Ok(table)
    }

    /// Number of rows.
    pub(crate) fn len(&self) -> usize {
        self.best_offset.len()
    }

    /// Offset back to the base of the block that ends at `pos` in an optimal
    /// encoding of `s[..=pos]`.
    #[inline]
    pub(crate) fn best_offset(&self, pos: usize) -> usize {
        self.best_offset[pos]
    }

    /// Total arena bytes of the optimal encoding.
    pub(crate) fn optimal_cost(&self) -> u64 {
        self.best_cost.last().copied().unwrap_or(0)
    }
}
