//! Lexicographic permutation generator.
//!
//! # Algorithm
//!
//! Narayana Pandita's next-permutation step: find the longest non-increasing
//! suffix, swap its pivot with the rightmost larger element, then reverse the
//! suffix. Starting from ascending order, repeated steps visit every
//! permutation exactly once in lexicographic order.
//!
//! # Complexity
//!
//! Amortized O(1) per step, O(n) worst case.
//!
//! # Reference
//!
//! Knuth, D.E. (2011). *The Art of Computer Programming*, Vol. 4A,
//! Section 7.2.1.2, Algorithm L.

/// Rearranges `perm` into the next permutation in lexicographic order.
///
/// Returns `false` if `perm` was already the last permutation; in that case
/// it is reset to ascending order, ready for a new cycle.
///
/// # Examples
///
/// ```
/// use u_assign::permutation::next_permutation;
///
/// let mut p = [0, 2, 1];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [1, 0, 2]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [0, 1, 2]);
/// ```
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        perm.reverse();
        return false;
    }

    let mut j = n - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    Fresh,
    Running,
    Exhausted,
}

/// Iterator over all permutations of `0..n` in lexicographic order.
///
/// Starts at the identity permutation. For `n = 0` it yields exactly one
/// empty permutation. [`advance`](Self::advance) borrows the current
/// permutation without allocating; the [`Iterator`] impl clones it.
///
/// # Examples
///
/// ```
/// use u_assign::permutation::LexicographicPermutations;
///
/// let all: Vec<Vec<usize>> = LexicographicPermutations::new(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![0, 1, 2]);
/// assert_eq!(all[1], vec![0, 2, 1]);
/// assert_eq!(all[5], vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct LexicographicPermutations {
    current: Vec<usize>,
    cursor: Cursor,
}

impl LexicographicPermutations {
    /// Creates a generator over permutations of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            cursor: Cursor::Fresh,
        }
    }

    /// Steps to the next permutation and returns it, or `None` when exhausted.
    pub fn advance(&mut self) -> Option<&[usize]> {
        match self.cursor {
            Cursor::Fresh => {
                self.cursor = Cursor::Running;
                Some(&self.current)
            }
            Cursor::Running => {
                if next_permutation(&mut self.current) {
                    Some(&self.current)
                } else {
                    self.cursor = Cursor::Exhausted;
                    None
                }
            }
            Cursor::Exhausted => None,
        }
    }

    /// Restarts enumeration from the identity permutation.
    pub fn reset(&mut self) {
        self.current.sort_unstable();
        self.cursor = Cursor::Fresh;
    }
}

impl Iterator for LexicographicPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_yields_one() {
        let all: Vec<_> = LexicographicPermutations::new(0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_single() {
        let all: Vec<_> = LexicographicPermutations::new(1).collect();
        assert_eq!(all, vec![vec![0]]);
    }

    #[test]
    fn test_order_n3() {
        let all: Vec<_> = LexicographicPermutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_count_and_sorted_n5() {
        let all: Vec<_> = LexicographicPermutations::new(5).collect();
        assert_eq!(all.len(), 120);
        let distinct: HashSet<_> = all.iter().cloned().collect();
        assert_eq!(distinct.len(), 120);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let mut perms = LexicographicPermutations::new(2);
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_none());
        assert!(perms.advance().is_none());
    }

    #[test]
    fn test_reset_mid_iteration() {
        let mut perms = LexicographicPermutations::new(4);
        for _ in 0..7 {
            perms.advance();
        }
        perms.reset();
        assert_eq!(perms.advance(), Some(&[0, 1, 2, 3][..]));
        assert_eq!(perms.count(), 23);
    }

    #[test]
    fn test_next_permutation_with_duplicates() {
        let mut p = [1, 1, 2];
        assert!(next_permutation(&mut p));
        assert_eq!(p, [1, 2, 1]);
        assert!(next_permutation(&mut p));
        assert_eq!(p, [2, 1, 1]);
        assert!(!next_permutation(&mut p));
        assert_eq!(p, [1, 1, 2]);
    }
}
