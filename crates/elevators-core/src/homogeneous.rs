//! Lexicographic extremes and successors inside one grading block.
//!
//! A block selection is stored as a multiplicity per index rather than as
//! the expanded index sequence. For sequences of equal length, the
//! lexicographically smaller sequence is the one that keeps more copies of
//! the first index where the two selections differ.
//!
//! Every function returns `None` when the window constraints cannot be met.

use crate::count::checked_sum;

/// Lexicographically first selection of `total` entries.
///
/// Starts from the forced minimum and tops up indices from the lowest one
/// upward, each to its upper bound.
pub fn first_homog(lower: &[u64], upper: &[u64], total: u64) -> Option<Vec<u64>> {
    fill(lower, upper, total, 0..lower.len())
}

/// Lexicographically last selection of `total` entries.
///
/// Same as [`first_homog`] but tops up from the highest index downward.
pub fn last_homog(lower: &[u64], upper: &[u64], total: u64) -> Option<Vec<u64>> {
    fill(lower, upper, total, (0..lower.len()).rev())
}

fn fill(
    lower: &[u64],
    upper: &[u64],
    total: u64,
    order: impl Iterator<Item = usize>,
) -> Option<Vec<u64>> {
    debug_assert_eq!(lower.len(), upper.len());

    if lower.iter().zip(upper).any(|(lo, hi)| lo > hi) {
        return None;
    }
    let forced = checked_sum(lower)?;
    let mut remaining = total.checked_sub(forced)?;

    let mut counts = lower.to_vec();
    for i in order {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(upper[i] - lower[i]);
        counts[i] += take;
        remaining -= take;
    }

    (remaining == 0).then_some(counts)
}

/// Advances `counts` to its lexicographic successor in place.
///
/// Returns `true` on carry: `counts` was the last selection and has been
/// wrapped around to the first one. `counts` must be a valid selection for
/// the given windows.
pub fn next_homog(lower: &[u64], upper: &[u64], counts: &mut [u64]) -> bool {
    debug_assert_eq!(lower.len(), counts.len());

    let mut suffix_total = 0u64;
    let mut suffix_upper = 0u64;
    for i in (0..counts.len()).rev() {
        // give one entry of index i to the indices above it
        if counts[i] > lower[i] && suffix_total < suffix_upper {
            counts[i] -= 1;
            let refill = fill(
                &lower[i + 1..],
                &upper[i + 1..],
                suffix_total + 1,
                0..counts.len() - i - 1,
            );
            if let Some(refill) = refill {
                counts[i + 1..].copy_from_slice(&refill);
                return false;
            }
            counts[i] += 1;
        }
        // suffix_total is bounded by the block multiplicity, suffix_upper is not
        suffix_total += counts[i];
        suffix_upper = suffix_upper.saturating_add(upper[i]);
    }

    let total = counts.iter().sum();
    if let Some(first) = first_homog(lower, upper, total) {
        counts.copy_from_slice(&first);
    }
    true
}
