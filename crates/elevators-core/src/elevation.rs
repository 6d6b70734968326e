//! A single solution of an elevator.

use std::fmt;
use std::ops::Deref;

/// A non-decreasing sequence of indices into the list of an elevator whose
/// grades sum to the degree.
///
/// Indices are zero-based. An index may repeat within its bounds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevation {
    indices: Vec<usize>,
}

impl Elevation {
    /// Wraps an index sequence. No validation happens here; see
    /// [`Elevator::contains`](crate::Elevator::contains).
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Expands one multiplicity per index into a sorted index sequence.
    pub(crate) fn from_counts(counts: &[u64]) -> Self {
        let indices = counts
            .iter()
            .enumerate()
            .flat_map(|(i, &c)| std::iter::repeat(i).take(c as usize))
            .collect();
        Self { indices }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl Deref for Elevation {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.indices
    }
}

impl From<Vec<usize>> for Elevation {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{index}")?;
        }
        write!(f, "]")
    }
}
