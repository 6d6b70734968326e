//! Sum types: partitions of the degree into grades.

use std::cmp::Ordering;
use std::fmt;

/// One way of writing the degree as a sum of the distinct grades of a list.
///
/// Stored as a multiplicity per distinct grade, aligned with
/// [`Elevator::distinct_grades`](crate::Elevator::distinct_grades).
///
/// Sum types are ordered by their partitions sorted in decreasing order and
/// compared lexicographically, so `1+1+1 < 2+1 < 3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SumType {
    grades: Vec<u64>,
    multiplicities: Vec<u64>,
}

impl SumType {
    /// Creates a sum type from distinct grades (increasing) and their
    /// multiplicities.
    pub fn new(grades: Vec<u64>, multiplicities: Vec<u64>) -> Self {
        assert_eq!(
            grades.len(),
            multiplicities.len(),
            "every grade needs a multiplicity"
        );
        debug_assert!(grades.windows(2).all(|w| w[0] < w[1]));
        Self {
            grades,
            multiplicities,
        }
    }

    /// The distinct grades this sum type is expressed over.
    pub fn grades(&self) -> &[u64] {
        &self.grades
    }

    /// Multiplicity of each distinct grade.
    pub fn multiplicities(&self) -> &[u64] {
        &self.multiplicities
    }

    /// Multiplicity of `grade`, zero if it is not one of the grades.
    pub fn multiplicity(&self, grade: u64) -> u64 {
        self.grades
            .iter()
            .position(|&g| g == grade)
            .map_or(0, |j| self.multiplicities[j])
    }

    /// The degree this sum type realizes.
    pub fn total(&self) -> u64 {
        self.grades
            .iter()
            .zip(&self.multiplicities)
            .map(|(g, m)| g * m)
            .sum()
    }

    /// Number of parts, counted with multiplicity.
    pub fn len(&self) -> u64 {
        self.multiplicities.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The partition as a decreasing sequence of grades.
    pub fn partition(&self) -> Vec<u64> {
        self.grades
            .iter()
            .zip(&self.multiplicities)
            .rev()
            .flat_map(|(&g, &m)| std::iter::repeat(g).take(m as usize))
            .collect()
    }
}

impl Ord for SumType {
    fn cmp(&self, other: &Self) -> Ordering {
        // Fewer copies of the largest grade where the two differ means the
        // decreasing partition drops to a smaller part first.
        self.multiplicities
            .iter()
            .rev()
            .cmp(other.multiplicities.iter().rev())
            .then_with(|| self.grades.cmp(&other.grades))
    }
}

impl PartialOrd for SumType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let partition = self.partition();
        if partition.is_empty() {
            return write!(f, "0");
        }
        for (i, part) in partition.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_type(multiplicities: &[u64]) -> SumType {
        SumType::new(vec![1, 2, 3], multiplicities.to_vec())
    }

    #[test]
    fn test_partition_and_total() {
        let s = sum_type(&[1, 1, 0]);
        assert_eq!(s.partition(), vec![2, 1]);
        assert_eq!(s.total(), 3);
        assert_eq!(s.len(), 2);
        assert_eq!(s.multiplicity(2), 1);
        assert_eq!(s.multiplicity(7), 0);
    }

    #[test]
    fn test_canonical_order() {
        let ones = sum_type(&[3, 0, 0]);
        let two_one = sum_type(&[1, 1, 0]);
        let three = sum_type(&[0, 0, 1]);

        let mut sorted = vec![three.clone(), ones.clone(), two_one.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![ones, two_one, three]);
    }

    #[test]
    fn test_order_matches_decreasing_partitions() {
        // 2+2 vs 2+1+1 over grades [1, 2]
        let a = SumType::new(vec![1, 2], vec![0, 2]);
        let b = SumType::new(vec![1, 2], vec![2, 1]);
        assert!(b < a);
        assert_eq!(a.partition().cmp(&b.partition()), a.cmp(&b));
    }

    #[test]
    fn test_display() {
        assert_eq!(sum_type(&[1, 1, 0]).to_string(), "2 + 1");
        assert_eq!(sum_type(&[0, 0, 0]).to_string(), "0");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = sum_type(&[1, 1, 0]);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#"{"grades":[1,2,3],"multiplicities":[1,1,0]}"#);
        let restored: SumType = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored.to_string(), "2 + 1");
    }
}
