//! # u-assign
//!
//! Optimal driver-to-route assignment: given N drivers, N routes, and an
//! N×N cost matrix, find the minimum-cost bijection.
//!
//! ## Modules
//!
//! - [`solver`] — Exhaustive lexicographic search and a Hungarian solver sharing one tie-break
//! - [`permutation`] — Restartable lexicographic permutation generator
//! - [`cost`] — Validated dense cost matrix
//! - [`models`] — Domain model types (Assignment, Solution)
//! - [`error`] — Typed solve failures
//! - [`sampler`] — Auxiliary samplers reported alongside results
//! - [`service`] — Request/response envelopes and the [`Optimizer`](service::Optimizer)
//!
//! Optional features: `server` (HTTP binary), `ffi` (C ABI), `wasm`.
//!
//! ## Example
//!
//! ```
//! let costs = vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]];
//! let sol = u_assign::solve(&["D1", "D2", "D3"], &["R1", "R2", "R3"], &costs).unwrap();
//! assert_eq!(sol.total_cost(), 5.0);
//! ```

pub mod cost;
pub mod error;
pub mod models;
pub mod permutation;
pub mod sampler;
pub mod service;
pub mod solver;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "server")]
pub mod server;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{AssignError, ShapeError};
pub use models::{Assignment, Solution};
pub use solver::{solve, Solver, SolverConfig, Strategy};
