//! Error types for assignment solving.

use std::time::Duration;

use thiserror::Error;

/// Describes how a cost matrix fails to match the driver/route counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The matrix has the wrong number of rows.
    #[error("expected {expected} rows (one per driver), got {actual}")]
    RowCount {
        /// Number of drivers.
        expected: usize,
        /// Number of rows supplied.
        actual: usize,
    },
    /// A row has the wrong number of columns.
    #[error("row {row} has {actual} entries, expected {expected} (one per route)")]
    RowLength {
        /// Index of the first offending row.
        row: usize,
        /// Number of routes.
        expected: usize,
        /// Number of entries in that row.
        actual: usize,
    },
}

/// Failure of an assignment solve.
///
/// Every variant is reported before any search happens, except
/// [`AssignError::Timeout`], which is raised by a configured time budget.
/// A failed solve never yields a partial result.
///
/// # Examples
///
/// ```
/// use u_assign::{solve, AssignError};
///
/// let err = solve(&["A", "B"], &["X"], &[vec![1.0], vec![2.0]]).unwrap_err();
/// assert!(matches!(err, AssignError::DimensionMismatch { drivers: 2, routes: 1 }));
/// assert_eq!(err.kind(), "dimension_mismatch");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssignError {
    /// Driver count differs from route count.
    #[error("number of drivers ({drivers}) must equal number of routes ({routes})")]
    DimensionMismatch {
        /// Number of drivers.
        drivers: usize,
        /// Number of routes.
        routes: usize,
    },

    /// The cost matrix shape does not match the driver/route counts.
    #[error("malformed cost matrix: {0}")]
    MalformedCostMatrix(#[from] ShapeError),

    /// A cost entry is NaN or infinite.
    #[error("invalid cost {value} at row {row}, column {col}: costs must be finite")]
    InvalidCost {
        /// Driver index of the offending cell.
        row: usize,
        /// Route index of the offending cell.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// The search exceeded its wall-clock budget.
    #[error("search exceeded its time budget of {limit:?} (elapsed {elapsed:?})")]
    Timeout {
        /// Time spent before the search was abandoned.
        elapsed: Duration,
        /// Configured budget.
        limit: Duration,
    },
}

impl AssignError {
    /// Stable, machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AssignError::DimensionMismatch { .. } => "dimension_mismatch",
            AssignError::MalformedCostMatrix(_) => "malformed_cost_matrix",
            AssignError::InvalidCost { .. } => "invalid_cost",
            AssignError::Timeout { .. } => "timeout",
        }
    }
}
