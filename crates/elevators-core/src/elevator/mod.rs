//! The elevator: an immutable enumeration context.
//!
//! An [`Elevator`] enumerates every multiset of indices into a graded list
//! whose grades sum to a fixed degree, subject to per-index multiplicity
//! bounds. Nothing is materialized up front: the count, the realizable sum
//! types and the extreme elevations are computed on first use and cached.
//!
//! Traversal visits sum types in their canonical order and, inside one
//! sum type, elevations in lexicographic order. The successor works like a
//! mixed-radix counter whose digits are the grade blocks, the block of the
//! largest grade being the least significant digit.

mod builder;
mod census;
mod iter;


use std::fmt;
use std::ops::Range;
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

pub use builder::ElevatorBuilder;
pub use iter::Elevations;

use crate::elevation::Elevation;
use crate::error::Result;
use crate::lattice::{BoundedLinearSystem, LatticePoints};
use crate::sum_type::SumType;
use census::Census;

/// Indices sharing one grade. Blocks are contiguous since grades are sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GradeBlock {
    pub(crate) grade: u64,
    pub(crate) range: Range<usize>,
}

impl GradeBlock {
    pub(crate) fn partition(grades: &[u64]) -> Vec<GradeBlock> {
        let mut blocks: Vec<GradeBlock> = Vec::new();
        for (index, &grade) in grades.iter().enumerate() {
            match blocks.last_mut() {
                Some(block) if block.grade == grade => block.range.end = index + 1,
                _ => blocks.push(GradeBlock {
                    grade,
                    range: index..index + 1,
                }),
            }
        }
        blocks
    }
}

/// Enumeration context for one `(list, grading, degree, bounds)` problem.
///
/// # Example
///
/// ```
/// use elevators_core::{BigUint, Elevator};
///
/// // repetition allowed: 1+1+1 (four ways), 2+1 (two ways), 3
/// let elevator = Elevator::from_grades(vec![1, 1, 2, 3], 3).unwrap();
/// assert_eq!(elevator.count(), BigUint::from(7u32));
///
/// // every item at most once
/// let once = Elevator::builder(vec![1, 1, 2, 3], |g: &i32| *g, 3)
///     .upper_bounds(vec![Some(1); 4])
///     .build()
///     .unwrap();
/// let all: Vec<Vec<usize>> = once.iter().map(|e| e.into_indices()).collect();
/// assert_eq!(all, vec![vec![0, 2], vec![1, 2], vec![3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Elevator<T> {
    items: Vec<T>,
    grades: Vec<u64>,
    degree: u64,
    lower: Vec<u64>,
    upper: Vec<u64>,
    blocks: Vec<GradeBlock>,
    system: BoundedLinearSystem,
    lattice: LatticePoints,
    full_assert: bool,
    census: OnceLock<Census>,
    first: OnceLock<Option<Elevation>>,
    last: OnceLock<Option<Elevation>>,
}

impl<T> Elevator<T> {
    /// Starts building an elevator over `items` graded by `grading`.
    pub fn builder<F, G>(items: Vec<T>, grading: F, degree: i64) -> ElevatorBuilder<T, F>
    where
        F: Fn(&T) -> G,
        G: ToPrimitive,
    {
        ElevatorBuilder::new(items, grading, degree)
    }

    /// Builds an elevator with default bounds.
    pub fn new<F, G>(items: Vec<T>, grading: F, degree: i64) -> Result<Self>
    where
        F: Fn(&T) -> G,
        G: ToPrimitive,
    {
        Self::builder(items, grading, degree).build()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Grade of every item, in list order.
    pub fn grades(&self) -> &[u64] {
        &self.grades
    }

    pub fn degree(&self) -> u64 {
        self.degree
    }

    pub fn lower_bounds(&self) -> &[u64] {
        &self.lower
    }

    /// Upper bounds after capping each at `degree / grade`.
    pub fn upper_bounds(&self) -> &[u64] {
        &self.upper
    }

    /// The distinct grades, increasing.
    pub fn distinct_grades(&self) -> Vec<u64> {
        self.blocks.iter().map(|b| b.grade).collect()
    }

    /// The compressed system handed to the lattice-point enumerator.
    pub fn system(&self) -> &BoundedLinearSystem {
        &self.system
    }

    /// Raw solutions of [`system`](Self::system), realizable or not.
    pub fn lattice_points(&self) -> &LatticePoints {
        &self.lattice
    }

    /// Total number of elevations.
    pub fn count(&self) -> BigUint {
        self.census().count.clone()
    }

    /// Realizable sum types in traversal order.
    pub fn sum_types(&self) -> &[SumType] {
        &self.census().sum_types
    }

    /// Number of elevations of `sum_type`, zero if it is not realizable.
    pub fn count_of(&self, sum_type: &SumType) -> BigUint {
        let census = self.census();
        census
            .position(sum_type)
            .map_or_else(BigUint::zero, |k| census.block_counts[k].clone())
    }

    /// Maps an elevation to the items it selects.
    pub fn resolve(&self, elevation: &Elevation) -> Vec<&T> {
        elevation.iter().map(|&i| &self.items[i]).collect()
    }

    /// Returns `true` if `elevation` is sorted, within bounds and of the
    /// right degree.
    pub fn contains(&self, elevation: &Elevation) -> bool {
        self.counts_of(elevation).is_some()
    }

    /// The sum type realized by `elevation`, or `None` if it is not one of
    /// this elevator's elevations.
    pub fn sum_type_of(&self, elevation: &Elevation) -> Option<SumType> {
        self.counts_of(elevation)
            .map(|counts| self.sum_type_from_counts(&counts))
    }

    fn census(&self) -> &Census {
        self.census.get_or_init(|| Census::compute(self))
    }

    fn block_bounds(&self, block: &GradeBlock) -> (&[u64], &[u64]) {
        (
            &self.lower[block.range.clone()],
            &self.upper[block.range.clone()],
        )
    }

    /// Multiplicity of each index, if `elevation` is valid.
    fn counts_of(&self, elevation: &Elevation) -> Option<Vec<u64>> {
        if elevation.windows(2).any(|w| w[0] > w[1]) {
            return None;
        }
        let mut counts = vec![0u64; self.items.len()];
        for &index in elevation.iter() {
            *counts.get_mut(index)? += 1;
        }

        let within_bounds = counts
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .all(|(c, (lo, hi))| lo <= c && c <= hi);
        let degree = counts
            .iter()
            .zip(&self.grades)
            .try_fold(0u64, |acc, (c, g)| acc.checked_add(c.checked_mul(*g)?));

        (within_bounds && degree == Some(self.degree)).then_some(counts)
    }

    fn sum_type_from_counts(&self, counts: &[u64]) -> SumType {
        let multiplicities = self
            .blocks
            .iter()
            .map(|b| counts[b.range.clone()].iter().sum())
            .collect();
        SumType::new(self.distinct_grades(), multiplicities)
    }
}

impl<T> Elevator<T>
where
    T: Clone + ToPrimitive,
{
    /// Builds an elevator over a list that is its own grading.
    pub fn from_grades(grades: Vec<T>, degree: i64) -> Result<Self> {
        Self::new(grades, T::clone, degree)
    }
}

impl<T> fmt::Display for Elevator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elevator of degree {} over {} items ({} elevations)",
            self.degree,
            self.items.len(),
            self.count()
        )
    }
}
