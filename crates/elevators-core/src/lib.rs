//! Elevators Core - bounded weighted multiset enumeration
//!
//! Given a list whose items carry sorted positive integer grades, a target
//! degree and per-index multiplicity bounds, an [`Elevator`] enumerates
//! every multiset of indices whose grades sum to the degree:
//! - counting without enumerating, via bounded compositions per grade block
//! - classification of elevations by sum type (partition of the degree)
//! - first, last and successor in traversal order, and lazy iteration
//!
//! The compressed problem over distinct grades is solved by a pluggable
//! [`LatticePointEnumerator`](lattice::LatticePointEnumerator).

pub mod count;
pub mod elevation;
pub mod elevator;
pub mod error;
pub mod homogeneous;
pub mod lattice;
pub mod sum_type;

pub use elevation::Elevation;
pub use elevator::{Elevations, Elevator, ElevatorBuilder};
pub use error::{BoundKind, ConfigurationError, Result};
pub use lattice::{BoundedLinearSystem, BoxSearch, LatticePointEnumerator, LatticePoints};
pub use sum_type::SumType;

pub use num_bigint::BigUint;
