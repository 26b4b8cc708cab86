//! Maximum non-adjacent sum ("house robber")
//!
//! Given an ordered sequence of integers, pick positions so that no two picked
//! positions are neighbours and the sum of the picked values is as large as
//! possible.
//!
//! ## Core idea
//! Scan the sequence from the back. For every position, the best total either
//! skips it (best total of the next suffix) or takes it and continues two
//! positions ahead. Only the last two suffix totals are ever needed, so the
//! production path ([`strategies::Rolling`]) runs in O(n) time and O(1) space.
//!
//! ## Quick start
//! ```
//! use house_robber::{max_non_adjacent_sum, RobberError};
//!
//! assert_eq!(max_non_adjacent_sum(&[2, 7, 9, 3, 1]), Ok(12));
//! assert!(matches!(max_non_adjacent_sum(&[]), Err(RobberError::InvalidArgument(_))));
//! ```
//!
//! ## Strategies
//! The `strategies` module contains interchangeable implementations of the same
//! recurrence:
//! - Constant-space tabulation (default)
//! - Full-array tabulation
//! - Memoized recursion
//! - Plain recursion
//!
//! [`Planner`] additionally reports *which* positions are picked, keeping only
//! O(√n) frontiers alive through block checkpoints.

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod frontier;
pub mod planner;
pub mod strategies;
pub mod traits;
pub mod utils;

pub use crate::builder::SolverBuilder;
pub use crate::engine::Solver;
pub use crate::error::RobberError;
pub use crate::planner::{Plan, Planner};
pub use crate::strategies::StrategyKind;
pub use crate::traits::RobStrategy;

/// Maximum sum of pairwise non-adjacent elements of `values`.
///
/// # Errors
/// [`RobberError::InvalidArgument`] if `values` is empty.
pub fn max_non_adjacent_sum(values: &[i64]) -> Result<i64, RobberError> {
    Solver::default().solve(values)
}

/// Same as [`max_non_adjacent_sum`], accepting a possibly absent sequence.
///
/// # Errors
/// [`RobberError::InvalidArgument`] if `values` is `None` or empty.
pub fn max_non_adjacent_sum_opt(values: Option<&[i64]>) -> Result<i64, RobberError> {
    Solver::default().solve_opt(values)
}
