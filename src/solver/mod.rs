//! Optimal driver-to-route assignment.
//!
//! - [`solve`] — Exhaustive lexicographic search, the reference behavior
//! - [`Solver`] — Configurable front end (strategy, time budget)
//! - [`hungarian`] — Kuhn–Munkres solve of a validated [`CostMatrix`], O(n³)
//!
//! Every strategy validates input identically and reports the
//! lexicographically first optimal permutation, so results are
//! reproducible across strategies.

mod config;
mod exhaustive;
mod hungarian;

pub use config::{SolverConfig, Strategy, EXHAUSTIVE_LIMIT};
pub use hungarian::hungarian;

use crate::cost::CostMatrix;
use crate::error::{AssignError, ShapeError};
use crate::models::Solution;

use config::Deadline;

/// Stateless assignment solver.
///
/// Holds only its configuration, so a single instance can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use u_assign::solver::{Solver, SolverConfig, Strategy};
///
/// let solver = Solver::new(SolverConfig::default().with_strategy(Strategy::Hungarian));
/// let costs = vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]];
/// let sol = solver.solve(&["D1", "D2", "D3"], &["R1", "R2", "R3"], &costs).unwrap();
/// assert_eq!(sol.total_cost(), 5.0);
/// assert_eq!(sol.route_indices(), &[1, 0, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds a minimum-cost bijection between `drivers` and `routes`.
    ///
    /// `cost_matrix[i][j]` is the cost of giving route `j` to driver `i`.
    ///
    /// # Errors
    ///
    /// Checked in this order, before any search:
    ///
    /// - [`AssignError::DimensionMismatch`] if driver and route counts differ
    /// - [`AssignError::MalformedCostMatrix`] if the matrix is not drivers × routes
    /// - [`AssignError::InvalidCost`] if an entry is NaN or infinite
    ///
    /// [`AssignError::Timeout`] is returned if a configured time limit runs out.
    pub fn solve<D, R, C>(
        &self,
        drivers: &[D],
        routes: &[R],
        cost_matrix: &[C],
    ) -> Result<Solution, AssignError>
    where
        D: AsRef<str>,
        R: AsRef<str>,
        C: AsRef<[f64]>,
    {
        let costs = validate(drivers.len(), routes.len(), cost_matrix)?;
        let deadline = self.config.time_limit.map(Deadline::start);

        let route_indices = match self.resolved_strategy(costs.rows()) {
            Strategy::Hungarian => hungarian::canonical(&costs, deadline.as_ref())?,
            Strategy::Exhaustive | Strategy::Auto => {
                exhaustive::search(&costs, deadline.as_ref())?
            }
        };

        Ok(Solution::from_permutation(
            drivers,
            routes,
            &costs,
            route_indices,
        ))
    }

    fn resolved_strategy(&self, n: usize) -> Strategy {
        match self.config.strategy {
            Strategy::Auto if n > EXHAUSTIVE_LIMIT => Strategy::Hungarian,
            Strategy::Auto => Strategy::Exhaustive,
            other => other,
        }
    }
}

/// Finds a minimum-cost bijection by exhaustive lexicographic search.
///
/// Ties are broken in favor of the first optimal permutation in
/// lexicographic order. Runs in O(n!·n); see [`EXHAUSTIVE_LIMIT`].
///
/// # Examples
///
/// ```
/// use u_assign::solve;
///
/// let costs = vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]];
/// let sol = solve(&["D1", "D2", "D3"], &["R1", "R2", "R3"], &costs).unwrap();
///
/// let pairs: Vec<_> = sol
///     .assignments()
///     .iter()
///     .map(|a| (a.driver.as_str(), a.route.as_str(), a.cost))
///     .collect();
/// assert_eq!(pairs, [("D1", "R2", 1.0), ("D2", "R1", 2.0), ("D3", "R3", 2.0)]);
/// assert_eq!(sol.total_cost(), 5.0);
/// ```
pub fn solve<D, R, C>(
    drivers: &[D],
    routes: &[R],
    cost_matrix: &[C],
) -> Result<Solution, AssignError>
where
    D: AsRef<str>,
    R: AsRef<str>,
    C: AsRef<[f64]>,
{
    Solver::default().solve(drivers, routes, cost_matrix)
}

fn validate<C: AsRef<[f64]>>(
    drivers: usize,
    routes: usize,
    cost_matrix: &[C],
) -> Result<CostMatrix, AssignError> {
    if drivers != routes {
        return Err(AssignError::DimensionMismatch { drivers, routes });
    }
    if cost_matrix.len() != drivers {
        return Err(ShapeError::RowCount {
            expected: drivers,
            actual: cost_matrix.len(),
        }
        .into());
    }
    CostMatrix::from_rows(cost_matrix, routes)
}
