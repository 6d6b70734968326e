//! Validated construction of an [`Elevator`].

use std::fmt::{self, Debug};
use std::sync::OnceLock;

use num_traits::ToPrimitive;
use tracing::debug;

use super::{Elevator, GradeBlock};
use crate::error::{BoundKind, ConfigurationError, Result};
use crate::lattice::{BoundedLinearSystem, BoxSearch, LatticePointEnumerator};

/// Builder for [`Elevator`].
///
/// # Example
///
/// ```
/// use elevators_core::Elevator;
///
/// let elevator = Elevator::builder(vec!["a", "b", "c"], |s: &&str| s.len(), 4)
///     .upper_bounds(vec![Some(2), Some(1), None])
///     .build()
///     .unwrap();
///
/// assert_eq!(elevator.degree(), 4);
/// ```
pub struct ElevatorBuilder<T, F> {
    items: Vec<T>,
    grading: F,
    degree: i64,
    lower: Option<Vec<i64>>,
    upper: Option<Vec<Option<i64>>>,
    full_assert: bool,
    enumerator: Box<dyn LatticePointEnumerator>,
}

impl<T, F> Debug for ElevatorBuilder<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElevatorBuilder")
            .field("items", &self.items.len())
            .field("degree", &self.degree)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("full_assert", &self.full_assert)
            .finish()
    }
}

impl<T, F, G> ElevatorBuilder<T, F>
where
    F: Fn(&T) -> G,
    G: ToPrimitive,
{
    pub(crate) fn new(items: Vec<T>, grading: F, degree: i64) -> Self {
        Self {
            items,
            grading,
            degree,
            lower: None,
            upper: None,
            full_assert: false,
            enumerator: Box::new(BoxSearch),
        }
    }

    /// Minimum multiplicity of each index. Defaults to zero everywhere.
    pub fn lower_bounds(mut self, bounds: impl Into<Vec<i64>>) -> Self {
        self.lower = Some(bounds.into());
        self
    }

    /// Maximum multiplicity of each index, `None` for unbounded.
    pub fn upper_bounds(mut self, bounds: impl Into<Vec<Option<i64>>>) -> Self {
        self.upper = Some(bounds.into());
        self
    }

    /// Re-validates every elevation the iterators produce.
    pub fn full_assert(mut self, enabled: bool) -> Self {
        self.full_assert = enabled;
        self
    }

    /// Replaces the built-in [`BoxSearch`] backend.
    pub fn lattice_enumerator(mut self, enumerator: impl LatticePointEnumerator + 'static) -> Self {
        self.enumerator = Box::new(enumerator);
        self
    }

    /// Validates the input and solves the compressed lattice problem.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if grades are not positive and
    /// sorted, the degree is negative, or the bounds are malformed.
    pub fn build(self) -> Result<Elevator<T>> {
        let n = self.items.len();
        let grades = grade_items(&self.items, &self.grading)?;

        if self.degree < 0 {
            return Err(ConfigurationError::NegativeDegree(self.degree));
        }
        let degree = self.degree as u64;

        let lower = match self.lower {
            Some(bounds) => {
                check_length(BoundKind::Lower, n, bounds.len())?;
                bounds
                    .iter()
                    .enumerate()
                    .map(|(index, &value)| non_negative(BoundKind::Lower, index, value))
                    .collect::<Result<Vec<u64>>>()?
            }
            None => vec![0; n],
        };

        let user_upper = match self.upper {
            Some(bounds) => {
                check_length(BoundKind::Upper, n, bounds.len())?;
                bounds
            }
            None => vec![None; n],
        };

        let mut upper = Vec::with_capacity(n);
        for (index, bound) in user_upper.into_iter().enumerate() {
            // more copies than this can never fit into the degree
            let reachable = degree / grades[index];
            let effective = match bound {
                Some(value) => {
                    let value = non_negative(BoundKind::Upper, index, value)?;
                    if lower[index] > value {
                        return Err(ConfigurationError::InvertedBounds {
                            index,
                            lower: lower[index] as i64,
                            upper: value as i64,
                        });
                    }
                    value.min(reachable)
                }
                None => reachable,
            };
            upper.push(effective);
        }

        let blocks = GradeBlock::partition(&grades);
        let system = aggregate(&blocks, degree, &lower, &upper);
        let lattice = self.enumerator.enumerate(&system);
        debug_assert!(lattice.iter().all(|point| system.is_solution(point)));

        debug!(
            items = n,
            degree,
            distinct_grades = blocks.len(),
            lattice_points = lattice.len(),
            "Elevator built"
        );

        Ok(Elevator {
            items: self.items,
            grades,
            degree,
            lower,
            upper,
            blocks,
            system,
            lattice,
            full_assert: self.full_assert,
            census: OnceLock::new(),
            first: OnceLock::new(),
            last: OnceLock::new(),
        })
    }
}

fn grade_items<T, G: ToPrimitive>(items: &[T], grading: impl Fn(&T) -> G) -> Result<Vec<u64>> {
    let mut grades = Vec::with_capacity(items.len());
    let mut previous: Option<i64> = None;

    for (index, item) in items.iter().enumerate() {
        let grade = grading(item)
            .to_i64()
            .ok_or(ConfigurationError::GradeOutOfRange { index })?;
        if grade <= 0 {
            return Err(ConfigurationError::NonPositiveGrade { index, grade });
        }
        if let Some(previous) = previous.filter(|&p| p > grade) {
            return Err(ConfigurationError::UnsortedGrades {
                index,
                grade,
                previous,
            });
        }
        previous = Some(grade);
        grades.push(grade as u64);
    }

    Ok(grades)
}

fn check_length(kind: BoundKind, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ConfigurationError::BoundsLength {
            kind,
            expected,
            actual,
        })
    }
}

fn non_negative(kind: BoundKind, index: usize, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| ConfigurationError::NegativeBound { kind, index, value })
}

/// Compresses per-index bounds to one box per distinct grade.
fn aggregate(
    blocks: &[GradeBlock],
    degree: u64,
    lower: &[u64],
    upper: &[u64],
) -> BoundedLinearSystem {
    let weights = blocks.iter().map(|b| b.grade).collect();
    // a saturated sum already exceeds degree / grade
    let block_sum = |bounds: &[u64], b: &GradeBlock| {
        bounds[b.range.clone()]
            .iter()
            .fold(0u64, |acc, &v| acc.saturating_add(v))
    };
    let agg_lower = blocks.iter().map(|b| block_sum(lower, b)).collect();
    let agg_upper = blocks
        .iter()
        .map(|b| block_sum(upper, b).min(degree / b.grade))
        .collect();
    BoundedLinearSystem::new(weights, degree, agg_lower, agg_upper)
}
