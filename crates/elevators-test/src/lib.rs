//! Shared test fixtures for Elevators crates.
//!
//! This crate provides data types and pure functions for testing.
//! It does NOT depend on `elevators-core`, so the engine can use it as a
//! dev-dependency and compare itself against an independent reference.
//!
//! - [`brute`] - exhaustive reference enumeration of elevations
//! - [`problem`] - problem descriptions, named fixtures and seeded random ones
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! elevators-test = { workspace = true }
//! ```
//!
//! ```ignore
//! use elevators_test::{brute_force_elevations, Problem};
//! ```

pub mod brute;
pub mod problem;

pub use brute::{brute_force_elevations, partition_of};
pub use problem::Problem;
