//! Demo: recover which houses to rob, not just the total.
//!
//! Run with:
//! `cargo run --example plan`

use house_robber::Planner;

fn main() {
    let street: Vec<i64> = (0..40).map(|i| ((i * 37 + 11) % 23) as i64).collect();

    let planner = Planner::new(&street);
    let plan = match planner.run() {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("plan failed: {err}");
            return;
        }
    };

    println!("Street: {street:?}");
    println!("Block size: {}", planner.block_size());
    println!("Total: {}", plan.total);
    println!("Houses: {:?}", plan.houses);

    let picked: Vec<i64> = plan.houses.iter().map(|&h| street[h]).collect();
    println!("Values: {picked:?} (sum {})", plan.sum_of(&street).unwrap_or_default());
}
