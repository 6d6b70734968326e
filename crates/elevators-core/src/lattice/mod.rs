//! Lattice-point enumeration over bounded linear systems.
//!
//! An elevator reduces its problem to one linear equality with box
//! constraints over the distinct grades, and asks a
//! [`LatticePointEnumerator`] for every non-negative integer solution.
//! Any backend honouring the contract is acceptable; [`BoxSearch`] is the
//! built-in one.

mod box_search;

pub use box_search::BoxSearch;

/// `weights · x == target` with `lower[j] <= x[j] <= upper[j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedLinearSystem {
    pub weights: Vec<u64>,
    pub target: u64,
    pub lower: Vec<u64>,
    pub upper: Vec<u64>,
}

impl BoundedLinearSystem {
    /// Creates a system. All three vectors must have the same length.
    pub fn new(weights: Vec<u64>, target: u64, lower: Vec<u64>, upper: Vec<u64>) -> Self {
        debug_assert_eq!(weights.len(), lower.len());
        debug_assert_eq!(weights.len(), upper.len());
        Self {
            weights,
            target,
            lower,
            upper,
        }
    }

    /// Number of unknowns.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if `point` satisfies the equality and the box.
    pub fn is_solution(&self, point: &[u64]) -> bool {
        point.len() == self.dimension()
            && point
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(x, (lo, hi))| lo <= x && x <= hi)
            && point
                .iter()
                .zip(&self.weights)
                .try_fold(0u64, |acc, (x, w)| acc.checked_add(x.checked_mul(*w)?))
                == Some(self.target)
    }
}

/// The finite solution set returned by an enumerator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatticePoints {
    points: Vec<Vec<u64>>,
}

impl LatticePoints {
    pub fn new(points: Vec<Vec<u64>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u64]> {
        self.points.get(index).map(Vec::as_slice)
    }

    /// Iterates the points; reversible.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[u64]> + ExactSizeIterator {
        self.points.iter().map(Vec::as_slice)
    }
}

impl FromIterator<Vec<u64>> for LatticePoints {
    fn from_iter<I: IntoIterator<Item = Vec<u64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Solves a [`BoundedLinearSystem`] over the non-negative integers.
///
/// Implementations must return every solution exactly once; the order is
/// irrelevant because the elevator sorts sum types itself.
///
/// # Example
///
/// ```
/// use elevators_core::lattice::{BoundedLinearSystem, BoxSearch, LatticePointEnumerator};
///
/// // x + 2y == 4 with 0 <= x <= 4, 0 <= y <= 2
/// let system = BoundedLinearSystem::new(vec![1, 2], 4, vec![0, 0], vec![4, 2]);
/// let points = BoxSearch.enumerate(&system);
/// assert_eq!(points.len(), 3);
/// assert!(points.iter().all(|p| system.is_solution(p)));
/// ```
pub trait LatticePointEnumerator: Send + Sync {
    fn enumerate(&self, system: &BoundedLinearSystem) -> LatticePoints;
}

impl<F> LatticePointEnumerator for F
where
    F: Fn(&BoundedLinearSystem) -> LatticePoints + Send + Sync,
{
    fn enumerate(&self, system: &BoundedLinearSystem) -> LatticePoints {
        self(system)
    }
}
