//! Demo: maximum non-adjacent sum with every strategy.
//!
//! Run with:
//! `cargo run --example rob`

use house_robber::{max_non_adjacent_sum, strategies::solve_with, StrategyKind};

fn main() {
    let street = [2, 7, 9, 3, 1];

    match max_non_adjacent_sum(&street) {
        Ok(total) => println!("Best haul for {street:?}: {total}"),
        Err(err) => println!("Could not solve {street:?}: {err}"),
    }

    // Every strategy computes the same recurrence.
    for kind in StrategyKind::ALL {
        match solve_with(kind, &street) {
            Ok(total) => println!("  {kind:<10} -> {total}"),
            Err(err) => println!("  {kind:<10} -> error: {err}"),
        }
    }

    // Empty input is rejected rather than answered with zero.
    if let Err(err) = max_non_adjacent_sum(&[]) {
        println!("Empty street: {err}");
    }
}
