//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Enumerate every permutation of route indices in lexicographic order,
//! sum `cost[i][perm[i]]` over drivers in index order, and keep the best
//! under strict less-than. The first optimal permutation encountered (the
//! lexicographically smallest one) therefore wins all ties.
//!
//! # Complexity
//!
//! O(n!·n) time, O(n) space. Intended for n ≤ [`EXHAUSTIVE_LIMIT`](super::EXHAUSTIVE_LIMIT).

use crate::cost::CostMatrix;
use crate::error::AssignError;
use crate::permutation::LexicographicPermutations;

use super::config::{check_deadline, Deadline};

/// Permutations evaluated between deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Finds the lexicographically first minimum-cost permutation of a square matrix.
///
/// Returns the route index chosen for each driver.
pub(crate) fn search(
    costs: &CostMatrix,
    deadline: Option<&Deadline>,
) -> Result<Vec<usize>, AssignError> {
    debug_assert!(costs.is_square());
    let mut perms = LexicographicPermutations::new(costs.rows());
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut evaluated: u64 = 0;

    while let Some(perm) = perms.advance() {
        if evaluated % DEADLINE_CHECK_INTERVAL == 0 {
            check_deadline(deadline)?;
        }
        evaluated += 1;

        let total = costs.permutation_cost(perm);
        match &mut best {
            Some((best_perm, best_cost)) => {
                if total < *best_cost {
                    best_perm.copy_from_slice(perm);
                    *best_cost = total;
                }
            }
            None => best = Some((perm.to_vec(), total)),
        }
    }

    // The generator always yields at least one permutation.
    Ok(best.map(|(perm, _)| perm).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn matrix(rows: &[Vec<f64>]) -> CostMatrix {
        CostMatrix::from_rows(rows, rows.len()).expect("valid")
    }

    #[test]
    fn test_three_by_three() {
        let costs = matrix(&[
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ]);
        assert_eq!(search(&costs, None).expect("no deadline"), vec![1, 0, 2]);
    }

    #[test]
    fn test_ties_pick_first_permutation() {
        let costs = matrix(&[vec![1.0, 1.0], vec![1.0, 1.0]]);
        assert_eq!(search(&costs, None).expect("no deadline"), vec![0, 1]);
    }

    #[test]
    fn test_later_tie_does_not_replace() {
        // [0,1] costs 3, [1,0] also costs 3.
        let costs = matrix(&[vec![1.0, 2.0], vec![1.0, 2.0]]);
        assert_eq!(search(&costs, None).expect("no deadline"), vec![0, 1]);
    }

    #[test]
    fn test_negative_costs() {
        let costs = matrix(&[vec![-5.0, 0.0], vec![0.0, -5.0]]);
        assert_eq!(search(&costs, None).expect("no deadline"), vec![0, 1]);
    }

    #[test]
    fn test_empty() {
        let costs = matrix(&[]);
        assert!(search(&costs, None).expect("no deadline").is_empty());
    }

    #[test]
    fn test_zero_budget_times_out() {
        let rows: Vec<Vec<f64>> = (0..6)
            .map(|i| (0..6).map(|j| ((i * 7 + j * 3) % 5) as f64).collect())
            .collect();
        let costs = matrix(&rows);
        let deadline = Deadline::start(Duration::ZERO);
        assert!(matches!(
            search(&costs, Some(&deadline)),
            Err(AssignError::Timeout { .. })
        ));
    }
}
