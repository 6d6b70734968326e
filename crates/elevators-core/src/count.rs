//! Counting integer points in a box with a fixed coordinate sum.
//!
//! For one grading block the number of ways to spread a multiplicity over
//! its indices, each within `[lower_i, upper_i]`, is the number of integer
//! points of a box cut by a hyperplane. The recursion below short-circuits
//! to stars and bars as soon as the remaining upper bounds stop mattering.
//!
//! Counts grow like binomial coefficients, so they are arbitrary precision.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Binomial coefficient C(n, k).
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }

    let k = k.min(n - k);
    let mut result = BigUint::one();
    for i in 0..k {
        // exact: the running product is C(n, i + 1) after the division
        result = result * (n - i) / (i + 1);
    }
    result
}

/// C(total + bars, bars), computed without forming `total + bars` in `u64`.
fn stars_and_bars(total: u64, bars: u64) -> BigUint {
    let total = BigUint::from(total);
    let mut result = BigUint::one();
    for i in 1..=bars {
        result = result * (&total + i) / i;
    }
    result
}

/// Sum of `values`, `None` if it does not fit in a `u64`.
pub(crate) fn checked_sum(values: &[u64]) -> Option<u64> {
    values.iter().try_fold(0u64, |acc, &v| acc.checked_add(v))
}

/// Number of vectors `c` with `lower[i] <= c[i] <= upper[i]` and
/// `sum(c) == total`.
///
/// `lower` and `upper` must have the same length. Empty windows
/// (`lower[i] > upper[i]`) yield zero.
pub fn bounded_compositions(lower: &[u64], upper: &[u64], total: u64) -> BigUint {
    debug_assert_eq!(lower.len(), upper.len());

    if lower.iter().zip(upper).any(|(lo, hi)| lo > hi) {
        return BigUint::zero();
    }
    let forced = match checked_sum(lower) {
        Some(forced) if forced <= total => forced,
        _ => return BigUint::zero(),
    };

    let slack: Vec<u64> = lower.iter().zip(upper).map(|(lo, hi)| hi - lo).collect();
    count_with_slack(&slack, total - forced)
}

fn count_with_slack(slack: &[u64], total: u64) -> BigUint {
    match slack {
        [] => BigUint::from(u8::from(total == 0)),
        [only] => BigUint::from(u8::from(total <= *only)),
        [head, rest @ ..] => {
            if total == 0 {
                return BigUint::one();
            }
            if slack.iter().any(|&s| s < total) {
                let capacity = slack.iter().fold(0u64, |acc, &s| acc.saturating_add(s));
                if capacity < total {
                    return BigUint::zero();
                }
                (0..=total.min(*head))
                    .map(|c| count_with_slack(rest, total - c))
                    .sum()
            } else {
                // every coordinate can absorb the whole sum on its own
                stars_and_bars(total, slack.len() as u64 - 1)
            }
        }
    }
}
