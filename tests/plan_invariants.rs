use house_robber::{max_non_adjacent_sum, Planner, Solver};
use proptest::prelude::*;

proptest! {
    #[test]
    fn plan_total_matches_solver(values in prop::collection::vec(-1_000i64..1_000, 1..300)) {
        let plan = Planner::new(&values).run().unwrap();
        prop_assert_eq!(plan.total, max_non_adjacent_sum(&values).unwrap());
    }

    #[test]
    fn plan_positions_are_feasible_and_sum_to_total(
        values in prop::collection::vec(-1_000i64..1_000, 1..300)
    ) {
        let plan = Planner::new(&values).run().unwrap();
        prop_assert!(!plan.houses.is_empty());
        prop_assert!(plan.is_feasible(values.len()), "{:?}", plan.houses);
        prop_assert!(*plan.houses.last().unwrap() + 2 >= values.len());
        prop_assert_eq!(plan.sum_of(&values), Some(plan.total));
    }

    #[test]
    fn plan_is_independent_of_block_size(
        values in prop::collection::vec(0i64..100, 1..200),
        block_size in 1usize..64
    ) {
        let reference = Planner::with_block_size(&values, values.len()).run().unwrap();
        let blocked = Planner::with_block_size(&values, block_size).run().unwrap();
        prop_assert_eq!(blocked, reference);
    }

    #[test]
    fn solver_plan_uses_configured_block_size(
        values in prop::collection::vec(0i64..100, 1..200),
        block_size in 1usize..16
    ) {
        let solver = Solver::with_block_size(house_robber::strategies::Rolling, block_size);
        let plan = solver.plan(&values).unwrap();
        prop_assert_eq!(plan, Planner::new(&values).run().unwrap());
    }
}

#[test]
fn block_size_larger_than_input() {
    let values = [2, 7, 9, 3, 1];
    let plan = Planner::with_block_size(&values, 100).run().unwrap();
    assert_eq!(plan.houses, vec![0, 2, 4]);
}

#[test]
fn every_block_size_on_a_fixed_street() {
    let values: Vec<i64> = (0..97).map(|i| ((i * 31 + 7) % 17) as i64).collect();
    let expected = max_non_adjacent_sum(&values).unwrap();
    for b in 1..=values.len() {
        let plan = Planner::with_block_size(&values, b).run().unwrap();
        assert_eq!(plan.total, expected, "block size {b}");
        assert_eq!(plan.sum_of(&values), Some(expected), "block size {b}");
    }
}
