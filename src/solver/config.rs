//! Solver configuration and wall-clock budgets.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::AssignError;

/// Largest problem size the exhaustive search is intended for.
///
/// Beyond this, n! permutations make brute force impractical and
/// [`Strategy::Auto`] switches to the Hungarian solver.
pub const EXHAUSTIVE_LIMIT: usize = 8;

/// Which algorithm a [`Solver`](super::Solver) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Enumerate every permutation in lexicographic order, O(n!·n).
    #[default]
    Exhaustive,
    /// Kuhn–Munkres with lexicographic canonicalisation, polynomial.
    Hungarian,
    /// Exhaustive up to [`EXHAUSTIVE_LIMIT`] drivers, Hungarian above.
    Auto,
}

/// Configuration for a [`Solver`](super::Solver).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_assign::solver::{SolverConfig, Strategy};
///
/// let config = SolverConfig::default()
///     .with_strategy(Strategy::Auto)
///     .with_time_limit(Duration::from_secs(2));
/// assert_eq!(config.strategy, Strategy::Auto);
/// assert_eq!(config.time_limit, Some(Duration::from_secs(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Algorithm selection.
    pub strategy: Strategy,
    /// Optional wall-clock budget for a single solve.
    pub time_limit: Option<Duration>,
}

impl SolverConfig {
    /// Sets the algorithm.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets a wall-clock budget; exceeding it yields [`AssignError::Timeout`].
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// A started wall-clock budget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Deadline {
    start: Instant,
    limit: Duration,
}

impl Deadline {
    pub(crate) fn start(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    /// Fails once the budget is used up.
    pub(crate) fn check(&self) -> Result<(), AssignError> {
        let elapsed = self.start.elapsed();
        if elapsed >= self.limit {
            return Err(AssignError::Timeout {
                elapsed,
                limit: self.limit,
            });
        }
        Ok(())
    }
}

/// Checks an optional deadline.
pub(crate) fn check_deadline(deadline: Option<&Deadline>) -> Result<(), AssignError> {
    deadline.map_or(Ok(()), Deadline::check)
}
