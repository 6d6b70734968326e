//! Elevator problem descriptions.
//!
//! # Example
//!
//! ```
//! use elevators_test::Problem;
//!
//! let problem = Problem::random(7);
//! assert!(problem.grades.windows(2).all(|w| w[0] <= w[1]));
//! assert_eq!(problem.lower.len(), problem.grades.len());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A graded list with a degree and per-index bounds, in the signed form the
/// elevator builder accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub grades: Vec<i64>,
    pub degree: i64,
    pub lower: Vec<i64>,
    pub upper: Vec<Option<i64>>,
}

impl Problem {
    /// A problem with no bounds.
    pub fn unbounded(grades: Vec<i64>, degree: i64) -> Self {
        let n = grades.len();
        Self {
            grades,
            degree,
            lower: vec![0; n],
            upper: vec![None; n],
        }
    }

    /// Sets the lower bounds.
    pub fn with_lower(mut self, lower: Vec<i64>) -> Self {
        self.lower = lower;
        self
    }

    /// Sets the upper bounds.
    pub fn with_upper(mut self, upper: Vec<Option<i64>>) -> Self {
        self.upper = upper;
        self
    }

    /// The list `[1, 1, 2, 3]` at degree 3 with every item picked at most
    /// once: elevations `[0, 2]`, `[1, 2]` and `[3]`.
    pub fn scenario() -> Self {
        Self::unbounded(vec![1, 1, 2, 3], 3).with_upper(vec![Some(1); 4])
    }

    /// A small random problem, reproducible from `seed`.
    ///
    /// Up to six items with grades in `1..=4`, degree up to 10, and bounds
    /// drawn so that `lower <= upper` always holds.
    pub fn random(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let n = rng.random_range(0..=6);
        let mut grades: Vec<i64> = (0..n).map(|_| rng.random_range(1..=4)).collect();
        grades.sort_unstable();
        let degree = rng.random_range(0..=10);

        let mut lower = Vec::with_capacity(n);
        let mut upper = Vec::with_capacity(n);
        for _ in 0..n {
            let lo = if rng.random_bool(0.2) { rng.random_range(1..=2) } else { 0 };
            let hi = if rng.random_bool(0.5) {
                Some(lo + rng.random_range(0..=3))
            } else {
                None
            };
            lower.push(lo);
            upper.push(hi);
        }

        Self {
            grades,
            degree,
            lower,
            upper,
        }
    }

    /// Reference elevations of this problem.
    pub fn brute_force(&self) -> Vec<Vec<usize>> {
        let grades: Vec<u64> = self.grades.iter().map(|&g| g as u64).collect();
        let lower: Vec<u64> = self.lower.iter().map(|&l| l as u64).collect();
        let upper: Vec<Option<u64>> = self.upper.iter().map(|u| u.map(|u| u as u64)).collect();
        crate::brute::brute_force_elevations(&grades, self.degree as u64, &lower, &upper)
    }
}
