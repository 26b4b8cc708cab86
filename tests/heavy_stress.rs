#![cfg(feature = "heavy")]
use house_robber::{
    strategies::{Rolling, Tabulated},
    Planner, RobStrategy,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_street(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect()
}

#[test]
fn heavy_stress_rolling_vs_tabulated() {
    let mut rng = StdRng::seed_from_u64(123);
    let street = random_street(&mut rng, 2_000_000);
    assert_eq!(Rolling.best_total(&street), Tabulated.best_total(&street));
}

#[test]
fn heavy_stress_plan() {
    let mut rng = StdRng::seed_from_u64(321);
    let street = random_street(&mut rng, 1_000_000);
    let plan = Planner::new(&street).run().unwrap();
    assert!(plan.is_feasible(street.len()));
    assert_eq!(plan.sum_of(&street), Some(plan.total));
    assert_eq!(Some(plan.total), Rolling.best_total(&street));
}
