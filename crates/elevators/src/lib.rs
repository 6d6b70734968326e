//! Elevators - bounded weighted multiset enumeration in Rust
//!
//! Enumerate, count and classify the multisets of a graded list that reach
//! a given degree.
//!
//! # Example
//!
//! ```rust
//! use elevators::prelude::*;
//!
//! let elevator = Elevator::builder(vec![1, 1, 2, 3], |g: &i32| *g, 3)
//!     .upper_bounds(vec![Some(1); 4])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(elevator.count(), BigUint::from(3u32));
//! assert_eq!(elevator.sum_types().len(), 2);
//! ```

pub use elevators_core::{
    lattice, BigUint, BoundKind, BoundedLinearSystem, BoxSearch, ConfigurationError, Elevation,
    Elevations, Elevator, ElevatorBuilder, LatticePointEnumerator, LatticePoints, SumType,
};

pub use elevators_config::{ConfigError, ElevatorConfig, EnvironmentMode};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{BigUint, ConfigurationError, Elevation, Elevator, ElevatorConfig, SumType};
    pub use super::{BoxSearch, LatticePointEnumerator};
}
