//! Counting elevations and classifying them by sum type.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use super::Elevator;
use crate::count::bounded_compositions;
use crate::sum_type::SumType;

/// Cached result of counting: total, realizable sum types in traversal
/// order, and the number of elevations of each.
#[derive(Debug, Clone)]
pub(crate) struct Census {
    pub(crate) count: BigUint,
    pub(crate) sum_types: Vec<SumType>,
    pub(crate) block_counts: Vec<BigUint>,
}

impl Census {
    pub(crate) fn compute<T>(elevator: &Elevator<T>) -> Self {
        let grades = elevator.distinct_grades();
        let mut realized: Vec<(SumType, BigUint)> = Vec::new();

        for point in elevator.lattice.iter().rev() {
            // Every block takes part, including those with multiplicity
            // zero: a positive lower bound there rules the point out.
            let ways = elevator
                .blocks
                .iter()
                .zip(point)
                .try_fold(BigUint::one(), |acc, (block, &multiplicity)| {
                    let (lower, upper) = elevator.block_bounds(block);
                    let n = bounded_compositions(lower, upper, multiplicity);
                    (!n.is_zero()).then(|| acc * n)
                });

            match ways {
                Some(ways) => realized.push((SumType::new(grades.clone(), point.to_vec()), ways)),
                None => trace!(point = ?point, "Lattice point has no realization"),
            }
        }

        realized.sort_by(|a, b| a.0.cmp(&b.0));
        let count: BigUint = realized.iter().map(|(_, ways)| ways).sum();
        let (sum_types, block_counts): (Vec<SumType>, Vec<BigUint>) =
            realized.into_iter().unzip();

        debug!(
            count = %count,
            sum_types = sum_types.len(),
            lattice_points = elevator.lattice.len(),
            "Elevator census computed"
        );

        Self {
            count,
            sum_types,
            block_counts,
        }
    }

    pub(crate) fn position(&self, sum_type: &SumType) -> Option<usize> {
        self.sum_types.binary_search(sum_type).ok()
    }
}
