//! Plain top-down recursion.
//!
//! Exponential in the sequence length; only suitable for short inputs where it
//! acts as an independent baseline for the tabulated strategies.

use crate::traits::RobStrategy;
use crate::utils::max_opt;

/// Naive recursive strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Recursive;

fn best_from(values: &[i64], i: usize) -> Option<i64> {
    if i >= values.len() {
        return None;
    }
    // Choose `i`, then continue from `i + 2` if anything is left there.
    let take = values[i].saturating_add(best_from(values, i + 2).unwrap_or(0));
    // Or skip `i` entirely.
    max_opt(Some(take), best_from(values, i + 1))
}

impl RobStrategy for Recursive {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn best_total(&self, values: &[i64]) -> Option<i64> {
        best_from(values, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_known_answers() {
        assert_eq!(Recursive.best_total(&[1, 2, 3, 1]), Some(4));
        assert_eq!(Recursive.best_total(&[2, 7, 9, 3, 1]), Some(12));
        assert_eq!(Recursive.best_total(&[5, 1, 1, 5]), Some(10));
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(Recursive.best_total(&[8]), Some(8));
        assert_eq!(Recursive.best_total(&[]), None);
    }
}
