//! Lexicographic traversal: first, last, successor and iterators.

use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::Elevator;
use crate::elevation::Elevation;
use crate::homogeneous::{first_homog, last_homog, next_homog};
use crate::sum_type::SumType;

type Extreme = fn(&[u64], &[u64], u64) -> Option<Vec<u64>>;

/// Position of a traversal: the sum type being walked and the current
/// multiplicity of every index.
#[derive(Debug, Clone)]
pub(super) struct Cursor {
    sum_type: usize,
    counts: Vec<u64>,
}

impl<T> Elevator<T> {
    /// The first elevation in traversal order, `None` if there are none.
    pub fn first(&self) -> Option<&Elevation> {
        self.first
            .get_or_init(|| {
                let first = self.sum_types().first()?;
                self.extreme(first, first_homog).map(|c| Elevation::from_counts(&c))
            })
            .as_ref()
    }

    /// The last elevation in traversal order, `None` if there are none.
    pub fn last(&self) -> Option<&Elevation> {
        self.last
            .get_or_init(|| {
                let last = self.sum_types().last()?;
                self.extreme(last, last_homog).map(|c| Elevation::from_counts(&c))
            })
            .as_ref()
    }

    /// The lexicographically first elevation of `sum_type`.
    ///
    /// # Panics
    ///
    /// Panics if `sum_type` does not sum to the degree or is not one of
    /// [`sum_types`](Self::sum_types).
    pub fn first_of(&self, sum_type: &SumType) -> Elevation {
        self.extreme_of(sum_type, first_homog)
    }

    /// The lexicographically last elevation of `sum_type`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`first_of`](Self::first_of).
    pub fn last_of(&self, sum_type: &SumType) -> Elevation {
        self.extreme_of(sum_type, last_homog)
    }

    /// The elevation following `elevation` in traversal order, `None` once
    /// `elevation` is the last one.
    ///
    /// # Panics
    ///
    /// Panics if `elevation` is not an elevation of this elevator.
    pub fn next_elevation(&self, elevation: &Elevation) -> Option<Elevation> {
        let Some(counts) = self.counts_of(elevation) else {
            panic!("{elevation} is not an elevation of degree {}", self.degree);
        };
        let sum_type = self.sum_type_from_counts(&counts);
        let position = self.census().position(&sum_type)?;

        let mut cursor = Cursor {
            sum_type: position,
            counts,
        };
        self.advance(&mut cursor, self.sum_types().len())
            .then(|| Elevation::from_counts(&cursor.counts))
    }

    /// Iterates all elevations in traversal order.
    pub fn iter(&self) -> Elevations<'_, T> {
        let cursor = self.sum_types().first().and_then(|first| {
            self.extreme(first, first_homog).map(|counts| Cursor {
                sum_type: 0,
                counts,
            })
        });
        Elevations {
            elevator: self,
            cursor,
            end: self.sum_types().len(),
            remaining: self.count(),
        }
    }

    /// Iterates the elevations of one sum type, from
    /// [`first_of`](Self::first_of) to [`last_of`](Self::last_of).
    ///
    /// Yields nothing if `sum_type` is not realizable.
    pub fn elevations_of(&self, sum_type: &SumType) -> Elevations<'_, T> {
        let census = self.census();
        let start = census.position(sum_type).and_then(|k| {
            self.extreme(sum_type, first_homog)
                .map(|counts| (k, Cursor { sum_type: k, counts }))
        });
        match start {
            Some((k, cursor)) => Elevations {
                elevator: self,
                cursor: Some(cursor),
                end: k + 1,
                remaining: census.block_counts[k].clone(),
            },
            None => Elevations {
                elevator: self,
                cursor: None,
                end: 0,
                remaining: BigUint::zero(),
            },
        }
    }

    fn extreme_of(&self, sum_type: &SumType, pick: Extreme) -> Elevation {
        assert_eq!(
            sum_type.total(),
            self.degree,
            "sum type {sum_type} does not sum to the degree"
        );
        assert!(
            self.census().position(sum_type).is_some(),
            "sum type {sum_type} is not realizable"
        );
        let Some(counts) = self.extreme(sum_type, pick) else {
            panic!("sum type {sum_type} has no elevation");
        };
        Elevation::from_counts(&counts)
    }

    /// Concatenates the per-block extremes of `sum_type`.
    fn extreme(&self, sum_type: &SumType, pick: Extreme) -> Option<Vec<u64>> {
        let mut counts = vec![0u64; self.items.len()];
        for (block, &multiplicity) in self.blocks.iter().zip(sum_type.multiplicities()) {
            let (lower, upper) = self.block_bounds(block);
            let selection = pick(lower, upper, multiplicity)?;
            counts[block.range.clone()].copy_from_slice(&selection);
        }
        Some(counts)
    }

    /// Steps `cursor` forward, crossing into later sum types while their
    /// index is below `end`. Returns `false` when there is no successor.
    fn advance(&self, cursor: &mut Cursor, end: usize) -> bool {
        let census = self.census();
        let sum_type = &census.sum_types[cursor.sum_type];

        for (block, &multiplicity) in self
            .blocks
            .iter()
            .zip(sum_type.multiplicities())
            .rev()
        {
            if multiplicity == 0 {
                continue;
            }
            let (lower, upper) = self.block_bounds(block);
            let carry = next_homog(lower, upper, &mut cursor.counts[block.range.clone()]);
            if !carry {
                return true;
            }
        }

        // every block wrapped: this sum type is exhausted
        let next = cursor.sum_type + 1;
        if next >= end {
            return false;
        }
        match self.extreme(&census.sum_types[next], first_homog) {
            Some(counts) => {
                cursor.sum_type = next;
                cursor.counts = counts;
                true
            }
            None => false,
        }
    }
}

/// Iterator over elevations, produced lazily one at a time.
#[derive(Debug, Clone)]
pub struct Elevations<'a, T> {
    elevator: &'a Elevator<T>,
    cursor: Option<Cursor>,
    end: usize,
    remaining: BigUint,
}

impl<T> Iterator for Elevations<'_, T> {
    type Item = Elevation;

    fn next(&mut self) -> Option<Elevation> {
        let cursor = self.cursor.as_mut()?;
        let current = Elevation::from_counts(&cursor.counts);

        if !self.elevator.advance(cursor, self.end) {
            self.cursor = None;
        }
        if !self.remaining.is_zero() {
            self.remaining -= 1u32;
        }

        if self.elevator.full_assert {
            assert!(
                self.elevator.contains(&current),
                "produced invalid elevation {current}"
            );
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.to_usize() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<T> FusedIterator for Elevations<'_, T> {}

impl<'a, T> IntoIterator for &'a Elevator<T> {
    type Item = Elevation;
    type IntoIter = Elevations<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
