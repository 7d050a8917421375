//! Complete assignment solutions.

use serde::Serialize;

use super::Assignment;
use crate::cost::CostMatrix;

/// A complete solution to an assignment problem.
///
/// Holds exactly one [`Assignment`] per driver, in driver input order, and
/// the total cost of the pairing. Each route index appears exactly once.
/// Solutions are built by the solvers and cannot be modified afterwards.
///
/// # Examples
///
/// ```
/// use u_assign::solve;
///
/// let sol = solve(&["D1"], &["R1"], &[vec![7.0]]).unwrap();
/// assert_eq!(sol.len(), 1);
/// assert_eq!(sol.assignments()[0].route, "R1");
/// assert_eq!(sol.total_cost(), 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    assignments: Vec<Assignment>,
    total_cost: f64,
    #[serde(skip)]
    route_indices: Vec<usize>,
}

impl Solution {
    /// Builds a solution from a permutation of route indices.
    ///
    /// `route_indices[i]` is the route assigned to driver `i`. The caller
    /// guarantees the permutation matches the matrix dimensions.
    pub(crate) fn from_permutation<D, R>(
        drivers: &[D],
        routes: &[R],
        costs: &CostMatrix,
        route_indices: Vec<usize>,
    ) -> Self
    where
        D: AsRef<str>,
        R: AsRef<str>,
    {
        debug_assert_eq!(drivers.len(), route_indices.len());
        let assignments = route_indices
            .iter()
            .enumerate()
            .map(|(i, &j)| {
                Assignment::new(drivers[i].as_ref(), routes[j].as_ref(), costs.get(i, j))
            })
            .collect();
        let total_cost = costs.permutation_cost(&route_indices);

        Self {
            assignments,
            total_cost,
            route_indices,
        }
    }

    /// Returns the assignments, one per driver, in driver input order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Consumes the solution, returning its assignments.
    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }

    /// Total cost: the sum of the selected cells, summed in driver order.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Route index chosen for each driver index.
    pub fn route_indices(&self) -> &[usize] {
        &self.route_indices
    }

    /// Number of assignments (equal to the number of drivers).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` for the solution of an empty problem.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
