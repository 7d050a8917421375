//! Domain model types for driver-to-route assignment.
//!
//! An [`Assignment`] pairs one driver with one route at the matrix cost of
//! that pairing; a [`Solution`] is a complete bijection built from them.

mod assignment;
mod solution;

pub use assignment::Assignment;
pub use solution::Solution;
