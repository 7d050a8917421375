//! Permutation enumeration in lexicographic order.
//!
//! - [`next_permutation`] — In-place step to the next permutation
//! - [`LexicographicPermutations`] — Restartable iterator over all n! index permutations

mod lexicographic;

pub use lexicographic::{next_permutation, LexicographicPermutations};
