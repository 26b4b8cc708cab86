//! Space-optimized tabulation: the production strategy.
//!
//! Walks the sequence from the back keeping only two running values, so it
//! uses O(1) extra space and O(n) time.

use crate::traits::RobStrategy;

/// Constant-space bottom-up strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rolling;

impl RobStrategy for Rolling {
    fn name(&self) -> &'static str {
        "rolling"
    }

    fn best_total(&self, values: &[i64]) -> Option<i64> {
        match values {
            [] => None,
            [only] => Some(*only),
            [first, second] => Some((*first).max(*second)),
            [head @ .., before_last, last] => {
                // Best suffix total starting two positions ahead of the current index.
                let mut best_skipping_prev = *last;
                // Best suffix total starting exactly one position ahead.
                let mut best_including_prev = *before_last;

                for &value in head.iter().rev() {
                    let candidate = value.saturating_add(best_skipping_prev);
                    best_skipping_prev = best_skipping_prev.max(best_including_prev);
                    best_including_prev = candidate;
                }

                Some(best_skipping_prev.max(best_including_prev))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_cases() {
        assert_eq!(Rolling.best_total(&[1, 2, 3, 1]), Some(4));
        assert_eq!(Rolling.best_total(&[2, 7, 9, 3, 1]), Some(12));
        assert_eq!(Rolling.best_total(&[5, 1, 1, 5]), Some(10));
        assert_eq!(Rolling.best_total(&[0, 0, 0]), Some(0));
    }

    #[test]
    fn short_inputs() {
        assert_eq!(Rolling.best_total(&[]), None);
        assert_eq!(Rolling.best_total(&[-7]), Some(-7));
        assert_eq!(Rolling.best_total(&[3, 9]), Some(9));
    }

    #[test]
    fn negative_values_are_forced_only_at_the_tail() {
        assert_eq!(Rolling.best_total(&[-10, -10, 5]), Some(5));
        assert_eq!(Rolling.best_total(&[5, -1, -10]), Some(-1));
    }
}
