//! Dense driver × route cost matrices.
//!
//! Provides a validated, row-major cost matrix for assignment problems.

mod matrix;

pub use matrix::CostMatrix;
