//! Exhaustive reference enumeration.
//!
//! Tries every multiplicity vector in the bounded box. Only suitable for
//! small problems.
//!
//! # Example
//!
//! ```
//! use elevators_test::brute_force_elevations;
//!
//! let once = brute_force_elevations(&[1, 1, 2, 3], 3, &[0; 4], &[Some(1); 4]);
//! assert_eq!(once, vec![vec![0, 2], vec![1, 2], vec![3]]);
//!
//! let repeated = brute_force_elevations(&[1, 1, 2, 3], 3, &[0; 4], &[None; 4]);
//! assert_eq!(repeated.len(), 7);
//! ```

/// Every elevation of the problem, as sorted index sequences in plain
/// lexicographic order.
pub fn brute_force_elevations(
    grades: &[u64],
    degree: u64,
    lower: &[u64],
    upper: &[Option<u64>],
) -> Vec<Vec<usize>> {
    assert_eq!(grades.len(), lower.len());
    assert_eq!(grades.len(), upper.len());

    let mut out = Vec::new();
    let mut counts = Vec::with_capacity(grades.len());
    search(grades, degree, lower, upper, &mut counts, &mut out);
    out.sort();
    out
}

fn search(
    grades: &[u64],
    remaining: u64,
    lower: &[u64],
    upper: &[Option<u64>],
    counts: &mut Vec<u64>,
    out: &mut Vec<Vec<usize>>,
) {
    let i = counts.len();
    if i == grades.len() {
        if remaining == 0 {
            out.push(expand(counts));
        }
        return;
    }

    let fits = remaining / grades[i];
    let max = upper[i].map_or(fits, |u| u.min(fits));
    for c in lower[i]..=max {
        counts.push(c);
        search(grades, remaining - c * grades[i], lower, upper, counts, out);
        counts.pop();
    }
}

fn expand(counts: &[u64]) -> Vec<usize> {
    counts
        .iter()
        .enumerate()
        .flat_map(|(i, &c)| std::iter::repeat(i).take(c as usize))
        .collect()
}

/// Grades picked by an elevation, sorted decreasingly.
pub fn partition_of(grades: &[u64], elevation: &[usize]) -> Vec<u64> {
    let mut parts: Vec<u64> = elevation.iter().map(|&i| grades[i]).collect();
    parts.sort_unstable_by(|a, b| b.cmp(a));
    parts
}
