//! Depth-first search over the box.

use super::{BoundedLinearSystem, LatticePointEnumerator, LatticePoints};

/// Enumerates solutions by bounded depth-first search, one coordinate at a
/// time, solving the last coordinate directly.
///
/// Weights must be positive. Points come out in ascending lexicographic
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxSearch;

impl LatticePointEnumerator for BoxSearch {
    fn enumerate(&self, system: &BoundedLinearSystem) -> LatticePoints {
        let mut points = Vec::new();
        let mut current = Vec::with_capacity(system.dimension());
        search(system, 0, system.target, &mut current, &mut points);
        LatticePoints::new(points)
    }
}

fn search(
    system: &BoundedLinearSystem,
    coordinate: usize,
    remaining: u64,
    current: &mut Vec<u64>,
    out: &mut Vec<Vec<u64>>,
) {
    let n = system.dimension();
    if coordinate == n {
        if remaining == 0 {
            out.push(current.clone());
        }
        return;
    }

    let weight = system.weights[coordinate];
    let lower = system.lower[coordinate];
    let upper = system.upper[coordinate].min(remaining / weight);

    if coordinate + 1 == n {
        if remaining % weight == 0 && (lower..=upper).contains(&(remaining / weight)) {
            current.push(remaining / weight);
            out.push(current.clone());
            current.pop();
        }
        return;
    }

    for x in lower..=upper {
        current.push(x);
        search(system, coordinate + 1, remaining - x * weight, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_system() {
        let zero = BoundedLinearSystem::new(vec![], 0, vec![], vec![]);
        assert_eq!(BoxSearch.enumerate(&zero).len(), 1);

        let nonzero = BoundedLinearSystem::new(vec![], 3, vec![], vec![]);
        assert!(BoxSearch.enumerate(&nonzero).is_empty());
    }

    #[test]
    fn test_partitions_of_three() {
        let system = BoundedLinearSystem::new(vec![1, 2, 3], 3, vec![0, 0, 0], vec![3, 1, 1]);
        let points = BoxSearch.enumerate(&system);
        let collected: Vec<Vec<u64>> = points.iter().map(<[u64]>::to_vec).collect();
        assert_eq!(
            collected,
            vec![vec![0, 0, 1], vec![1, 1, 0], vec![3, 0, 0]]
        );
    }

    #[test]
    fn test_box_is_respected() {
        let system = BoundedLinearSystem::new(vec![1, 2, 3], 3, vec![0, 0, 0], vec![2, 1, 1]);
        let points = BoxSearch.enumerate(&system);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| system.is_solution(p)));
    }

    #[test]
    fn test_lower_bounds_are_respected() {
        let system = BoundedLinearSystem::new(vec![1, 2], 6, vec![2, 1], vec![6, 3]);
        let points = BoxSearch.enumerate(&system);
        let collected: Vec<Vec<u64>> = points.iter().map(<[u64]>::to_vec).collect();
        assert_eq!(collected, vec![vec![2, 2], vec![4, 1]]);
    }

    #[test]
    fn test_inverted_box_has_no_points() {
        let system = BoundedLinearSystem::new(vec![1], 2, vec![3], vec![2]);
        assert!(BoxSearch.enumerate(&system).is_empty());
    }
}
