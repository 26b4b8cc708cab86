use house_robber::{
    strategies::{Memoized, Recursive, Rolling, Tabulated},
    RobStrategy, Solver,
};
use proptest::prelude::*;

/// Best total over every non-empty non-adjacent subset, without further restriction.
fn brute_force_unrestricted(values: &[i64]) -> i64 {
    let n = values.len();
    let mut best = i64::MIN;
    for mask in 1u32..(1 << n) {
        if mask & (mask >> 1) != 0 {
            continue;
        }
        let sum: i64 = (0..n).filter(|i| mask >> i & 1 == 1).map(|i| values[i]).sum();
        best = best.max(sum);
    }
    best
}

/// Best total over non-adjacent subsets whose last position is `n - 2` or `n - 1`.
fn brute_force_tail_anchored(values: &[i64]) -> i64 {
    let n = values.len();
    let mut best = i64::MIN;
    for mask in 1u32..(1 << n) {
        if mask & (mask >> 1) != 0 {
            continue;
        }
        let last = 31 - mask.leading_zeros() as usize;
        if last + 2 < n {
            continue;
        }
        let sum: i64 = (0..n).filter(|i| mask >> i & 1 == 1).map(|i| values[i]).sum();
        best = best.max(sum);
    }
    best
}

proptest! {
    #[test]
    fn non_negative_matches_exhaustive_enumeration(
        values in prop::collection::vec(0i64..1_000, 1..14)
    ) {
        let got = Solver::new(Rolling).solve(&values).unwrap();
        prop_assert_eq!(got, brute_force_unrestricted(&values));
    }

    #[test]
    fn signed_matches_tail_anchored_enumeration(
        values in prop::collection::vec(-1_000i64..1_000, 1..14)
    ) {
        let got = Solver::new(Rolling).solve(&values).unwrap();
        prop_assert_eq!(got, brute_force_tail_anchored(&values));
    }

    #[test]
    fn all_strategies_agree(values in prop::collection::vec(-500i64..500, 0..16)) {
        let rolling = Rolling.best_total(&values);
        prop_assert_eq!(Tabulated.best_total(&values), rolling);
        prop_assert_eq!(Memoized.best_total(&values), rolling);
        prop_assert_eq!(Recursive.best_total(&values), rolling);
    }

    #[test]
    fn linear_strategies_agree_on_long_inputs(
        values in prop::collection::vec(-10_000i64..10_000, 1..2_000)
    ) {
        let rolling = Rolling.best_total(&values);
        prop_assert_eq!(Tabulated.best_total(&values), rolling);
        prop_assert_eq!(Memoized.best_total(&values), rolling);
    }
}
