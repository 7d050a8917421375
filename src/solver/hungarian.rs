//! Hungarian (Kuhn–Munkres) assignment with lexicographic canonicalisation.
//!
//! # Algorithm
//!
//! Rows are inserted one at a time; each insertion grows a shortest
//! augmenting path over reduced costs `c[i][j] - u[i] - v[j]`, keeping the
//! dual potentials feasible. After n insertions the matching is optimal.
//!
//! The Hungarian method returns *an* optimum, not necessarily the one the
//! exhaustive search would report. [`canonical`] restores that tie-break:
//! driver by driver, it fixes the smallest route index whose forced choice
//! still admits an optimal completion, which yields the lexicographically
//! first optimal permutation. Every forced choice is completed into a full
//! permutation and priced with [`CostMatrix::permutation_cost`], the same
//! driver-order sum the exhaustive search compares, so candidates are ranked
//! by exact totals with the strict `<` rule. The result is never costlier
//! than the raw Hungarian permutation or any completion seen on the way.
//!
//! # Complexity
//!
//! O(n³) for one solve; canonicalisation performs O(n²) solves of shrinking
//! subproblems, O(n⁵) in the worst case.
//!
//! # Reference
//!
//! Kuhn, H.W. (1955). "The Hungarian method for the assignment problem",
//! *Naval Research Logistics Quarterly* 2(1-2), 83-97.
//!
//! Jonker, R. & Volgenant, A. (1987). "A shortest augmenting path algorithm
//! for dense and sparse linear assignment problems", *Computing* 38, 325-340.

use crate::cost::CostMatrix;
use crate::error::AssignError;

use super::config::{check_deadline, Deadline};

/// Solves the square assignment problem `cost(i, j)` for `i, j < n`.
///
/// Returns the column assigned to each row.
fn min_cost_assignment<F>(n: usize, cost: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> f64,
{
    // 1-based: index 0 is a virtual row/column used as the path root.
    let mut u = vec![0.0; n + 1];
    let mut v = vec![0.0; n + 1];
    let mut matched_row = vec![0usize; n + 1];
    let mut way = vec![0usize; n + 1];

    for i in 1..=n {
        matched_row[0] = i;
        let mut j0 = 0;
        let mut min_slack = vec![f64::INFINITY; n + 1];
        let mut used = vec![false; n + 1];

        loop {
            used[j0] = true;
            let i0 = matched_row[j0];
            let mut delta = f64::INFINITY;
            let mut j1 = 0;

            for j in 1..=n {
                if used[j] {
                    continue;
                }
                let reduced = cost(i0 - 1, j - 1) - u[i0] - v[j];
                if reduced < min_slack[j] {
                    min_slack[j] = reduced;
                    way[j] = j0;
                }
                if min_slack[j] < delta {
                    delta = min_slack[j];
                    j1 = j;
                }
            }

            for j in 0..=n {
                if used[j] {
                    u[matched_row[j]] += delta;
                    v[j] -= delta;
                } else {
                    min_slack[j] -= delta;
                }
            }

            j0 = j1;
            if matched_row[j0] == 0 {
                break;
            }
        }

        // Flip the augmenting path.
        loop {
            let j1 = way[j0];
            matched_row[j0] = matched_row[j1];
            j0 = j1;
            if j0 == 0 {
                break;
            }
        }
    }

    let mut assignment = vec![0; n];
    for j in 1..=n {
        if matched_row[j] != 0 {
            assignment[matched_row[j] - 1] = j - 1;
        }
    }
    assignment
}

/// Extends `prefix` (routes of the first rows) with an optimal assignment of
/// the remaining rows to `free`.
fn complete(costs: &CostMatrix, prefix: &[usize], free: &[usize]) -> Vec<usize> {
    let first = prefix.len();
    let tail = min_cost_assignment(free.len(), |a, b| costs.get(first + a, free[b]));
    prefix
        .iter()
        .copied()
        .chain(tail.into_iter().map(|b| free[b]))
        .collect()
}

/// Returns some optimal permutation of a square matrix.
///
/// # Examples
///
/// ```
/// use u_assign::cost::CostMatrix;
/// use u_assign::solver::hungarian;
///
/// let rows = vec![vec![4.0, 1.0, 3.0], vec![2.0, 0.0, 5.0], vec![3.0, 2.0, 2.0]];
/// let cm = CostMatrix::from_rows(&rows, 3).unwrap();
/// let perm = hungarian(&cm);
/// assert_eq!(cm.permutation_cost(&perm), 5.0);
/// ```
pub fn hungarian(costs: &CostMatrix) -> Vec<usize> {
    debug_assert!(costs.is_square());
    min_cost_assignment(costs.rows(), |i, j| costs.get(i, j))
}

/// Returns the lexicographically first optimal permutation of a square matrix.
pub(crate) fn canonical(
    costs: &CostMatrix,
    deadline: Option<&Deadline>,
) -> Result<Vec<usize>, AssignError> {
    let n = costs.rows();
    check_deadline(deadline)?;
    let mut best = hungarian(costs);
    let mut best_total = costs.permutation_cost(&best);

    let mut chosen = Vec::with_capacity(n);
    let mut free: Vec<usize> = (0..n).collect();

    while !free.is_empty() {
        check_deadline(deadline)?;
        let mut pick: Option<(usize, f64)> = None;

        for (pos, &col) in free.iter().enumerate() {
            let rest: Vec<usize> = free.iter().copied().filter(|&c| c != col).collect();
            chosen.push(col);
            let candidate = complete(costs, &chosen, &rest);
            chosen.pop();

            let total = costs.permutation_cost(&candidate);
            if pick.map_or(true, |(_, cheapest)| total < cheapest) {
                pick = Some((pos, total));
            }
            if total < best_total {
                best_total = total;
                best = candidate;
            }
        }

        let Some((pos, _)) = pick else { break };
        chosen.push(free.remove(pos));
    }

    // Rounding in the reduced problems can hide a cheaper completion.
    if costs.permutation_cost(&chosen) <= best_total {
        Ok(chosen)
    } else {
        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::exhaustive;
    use std::time::Duration;

    fn matrix(rows: &[Vec<f64>]) -> CostMatrix {
        CostMatrix::from_rows(rows, rows.len()).expect("valid")
    }

    #[test]
    fn test_hungarian_optimal_cost() {
        let costs = matrix(&[
            vec![9.0, 2.0, 7.0, 8.0],
            vec![6.0, 4.0, 3.0, 7.0],
            vec![5.0, 8.0, 1.0, 8.0],
            vec![7.0, 6.0, 9.0, 4.0],
        ]);
        let perm = hungarian(&costs);
        assert_eq!(costs.permutation_cost(&perm), 13.0);
    }

    #[test]
    fn test_hungarian_empty_and_single() {
        assert!(hungarian(&matrix(&[])).is_empty());
        assert_eq!(hungarian(&matrix(&[vec![3.0]])), vec![0]);
    }

    #[test]
    fn test_canonical_matches_exhaustive_on_ties() {
        let costs = matrix(&[
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
            vec![1.0, 1.0, 1.0],
        ]);
        assert_eq!(canonical(&costs, None).expect("no deadline"), vec![0, 1, 2]);

        let costs = matrix(&[
            vec![2.0, 1.0, 1.0],
            vec![1.0, 2.0, 1.0],
            vec![1.0, 1.0, 2.0],
        ]);
        let expected = exhaustive::search(&costs, None).expect("no deadline");
        assert_eq!(canonical(&costs, None).expect("no deadline"), expected);
        assert_eq!(expected, vec![1, 2, 0]);
    }

    #[test]
    fn test_canonical_larger_than_exhaustive_limit() {
        let n = 12;
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 10.0 }).collect())
            .collect();
        let costs = matrix(&rows);
        let perm = canonical(&costs, None).expect("no deadline");
        assert_eq!(perm, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_canonical_zero_budget_times_out() {
        let costs = matrix(&[vec![1.0, 2.0], vec![2.0, 1.0]]);
        let deadline = Deadline::start(Duration::ZERO);
        assert!(matches!(
            canonical(&costs, Some(&deadline)),
            Err(AssignError::Timeout { .. })
        ));
    }

    #[test]
    fn test_canonical_tiny_cost_is_not_a_tie() {
        let costs = matrix(&[vec![1e-10, 0.0], vec![0.0, 0.0]]);
        let perm = canonical(&costs, None).expect("no deadline");
        assert_eq!(perm, vec![1, 0]);
        assert_eq!(costs.permutation_cost(&perm), 0.0);
        assert_eq!(perm, exhaustive::search(&costs, None).expect("no deadline"));
    }

    #[test]
    fn test_canonical_fractional_matches_exhaustive() {
        let costs = matrix(&[
            vec![0.1, 0.2, 0.3],
            vec![0.2, 0.1, 0.3],
            vec![0.3, 0.3, 0.1 + 1e-12],
        ]);
        let expected = exhaustive::search(&costs, None).expect("no deadline");
        let perm = canonical(&costs, None).expect("no deadline");
        assert_eq!(costs.permutation_cost(&perm), costs.permutation_cost(&expected));
        assert_eq!(perm, expected);
    }
}
