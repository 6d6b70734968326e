//! Error types for elevator construction.

use thiserror::Error;

/// Which of the two per-index bound arrays an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundKind {
    Lower,
    Upper,
}

impl std::fmt::Display for BoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundKind::Lower => write!(f, "lower"),
            BoundKind::Upper => write!(f, "upper"),
        }
    }
}

/// Rejected input to [`Elevator`](crate::Elevator) construction.
///
/// None of these are retryable: the caller has to fix the list, the
/// grading, the degree or the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A grade could not be represented as a 64-bit integer.
    #[error("grade of item {index} is not representable as an integer")]
    GradeOutOfRange { index: usize },

    /// Grades must be strictly positive.
    #[error("grade of item {index} is {grade}, grades must be positive")]
    NonPositiveGrade { index: usize, grade: i64 },

    /// Grades must be sorted non-decreasingly along the list.
    #[error("grades are not sorted: item {index} has grade {grade} after grade {previous}")]
    UnsortedGrades {
        index: usize,
        grade: i64,
        previous: i64,
    },

    /// The target degree must be non-negative.
    #[error("degree must be non-negative, got {0}")]
    NegativeDegree(i64),

    /// A bound array does not match the length of the list.
    #[error("{kind} bounds have length {actual}, expected {expected}")]
    BoundsLength {
        kind: BoundKind,
        expected: usize,
        actual: usize,
    },

    /// Bounds must be non-negative.
    #[error("{kind} bound of item {index} is negative ({value})")]
    NegativeBound {
        kind: BoundKind,
        index: usize,
        value: i64,
    },

    /// Lower bound exceeds upper bound.
    #[error("lower bound {lower} of item {index} exceeds upper bound {upper}")]
    InvertedBounds { index: usize, lower: i64, upper: i64 },
}

/// Result type alias for elevator construction.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
