#![cfg(feature = "parallel")]

use house_robber::{strategies::Tabulated, RobberError, Solver};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parallel_batch_matches_serial(
        inputs in prop::collection::vec(prop::collection::vec(-1_000i64..1_000, 0..200), 0..32)
    ) {
        let solver = Solver::default();
        let batch = solver.solve_batch(&inputs);
        let serial: Vec<Result<i64, RobberError>> =
            inputs.iter().map(|v| solver.solve(v)).collect();
        prop_assert_eq!(batch, serial);
    }

    #[test]
    fn parallel_batch_agrees_across_strategies(
        inputs in prop::collection::vec(prop::collection::vec(0i64..1_000, 1..100), 1..16)
    ) {
        let rolling = Solver::default().solve_batch(&inputs);
        let tabulated = Solver::new(Tabulated).solve_batch(&inputs);
        prop_assert_eq!(rolling, tabulated);
    }
}
