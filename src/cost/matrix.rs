//! Dense cost matrix.

use crate::error::{AssignError, ShapeError};

/// A dense rows×cols cost matrix stored in row-major order.
///
/// Rows are indexed by driver position, columns by route position. Every
/// entry is finite; construction rejects jagged rows and NaN/infinite cells.
///
/// # Examples
///
/// ```
/// use u_assign::cost::CostMatrix;
///
/// let rows = vec![vec![4.0, 1.0], vec![2.0, 0.0]];
/// let cm = CostMatrix::from_rows(&rows, 2).unwrap();
/// assert_eq!(cm.get(0, 1), 1.0);
/// assert_eq!(cm.rows(), 2);
/// assert!(cm.is_square());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    /// Builds a matrix from nested rows, each of which must have `cols` entries.
    ///
    /// Shape is checked before values: the first row whose length differs
    /// from `cols` yields [`ShapeError::RowLength`], otherwise the first
    /// non-finite cell in row-major order yields [`AssignError::InvalidCost`].
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R], cols: usize) -> Result<Self, AssignError> {
        if let Some((row, r)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.as_ref().len() != cols)
        {
            return Err(ShapeError::RowLength {
                row,
                expected: cols,
                actual: r.as_ref().len(),
            }
            .into());
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            for (col, &value) in r.as_ref().iter().enumerate() {
                if !value.is_finite() {
                    return Err(AssignError::InvalidCost { row, col, value });
                }
                data.push(value);
            }
        }

        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns the cost of assigning driver `row` to route `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        self.data[row * self.cols + col]
    }

    /// Number of rows (drivers).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (routes).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Sums the cells selected by `route_indices`, one per row, in row order.
    ///
    /// `route_indices[i]` is the column chosen for row `i`.
    pub fn permutation_cost(&self, route_indices: &[usize]) -> f64 {
        route_indices
            .iter()
            .enumerate()
            .fold(0.0, |acc, (row, &col)| acc + self.get(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        let rows = vec![
            vec![4.0, 1.0, 3.0],
            vec![2.0, 0.0, 5.0],
            vec![3.0, 2.0, 2.0],
        ];
        CostMatrix::from_rows(&rows, 3).expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let cm = sample();
        assert_eq!(cm.rows(), 3);
        assert_eq!(cm.cols(), 3);
        assert_eq!(cm.get(1, 2), 5.0);
        assert_eq!(cm.get(2, 0), 3.0);
        assert_eq!(cm.get(2, 2), 2.0);
    }

    #[test]
    fn test_from_rows_jagged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = CostMatrix::from_rows(&rows, 2).unwrap_err();
        assert_eq!(
            err,
            AssignError::MalformedCostMatrix(ShapeError::RowLength {
                row: 1,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_shape_checked_before_values() {
        let rows = vec![vec![f64::NAN, 2.0], vec![3.0]];
        let err = CostMatrix::from_rows(&rows, 2).unwrap_err();
        assert_eq!(err.kind(), "malformed_cost_matrix");
    }

    #[test]
    fn test_non_finite_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let rows = vec![vec![1.0, 2.0], vec![3.0, bad]];
            match CostMatrix::from_rows(&rows, 2) {
                Err(AssignError::InvalidCost { row, col, .. }) => {
                    assert_eq!((row, col), (1, 1));
                }
                other => panic!("expected InvalidCost, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let cm = CostMatrix::from_rows(&rows, 0).expect("valid");
        assert_eq!(cm.rows(), 0);
        assert!(cm.is_square());
        assert_eq!(cm.permutation_cost(&[]), 0.0);
    }

    #[test]
    fn test_rectangular() {
        let rows = vec![[1.0, 2.0, 3.0]];
        let cm = CostMatrix::from_rows(&rows, 3).expect("valid");
        assert!(!cm.is_square());
    }

    #[test]
    fn test_permutation_cost() {
        let cm = sample();
        // D1→R2 (1) + D2→R1 (2) + D3→R3 (2)
        assert_eq!(cm.permutation_cost(&[1, 0, 2]), 5.0);
        assert_eq!(cm.permutation_cost(&[0, 1, 2]), 6.0);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        sample().get(0, 3);
    }
}
