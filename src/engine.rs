//! Solver front-end.
//!
//! [`Solver`] owns a strategy and takes care of everything around it:
//! 1. Rejecting empty or absent sequences with [`RobberError::InvalidArgument`].
//! 2. Answering one- and two-element sequences directly.
//! 3. Delegating longer sequences to the strategy.
//!
//! It also exposes selection reconstruction through [`Planner`] and batch
//! solving, which runs on rayon when the `parallel` feature is enabled.

use crate::error::RobberError;
use crate::planner::{Plan, Planner};
use crate::strategies::Rolling;
use crate::traits::RobStrategy;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maximum non-adjacent sum solver backed by strategy `S`.
///
/// ```
/// use house_robber::{strategies::Tabulated, Solver};
///
/// let solver = Solver::new(Tabulated);
/// assert_eq!(solver.solve(&[2, 7, 9, 3, 1]), Ok(12));
/// assert!(solver.solve(&[]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Solver<S: RobStrategy = Rolling> {
    strategy: S,
    block_size: Option<usize>,
}

impl Default for Solver<Rolling> {
    fn default() -> Self {
        Self::new(Rolling)
    }
}

impl<S: RobStrategy> Solver<S> {
    /// Create a solver; plans use the default block size (≈ √n).
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            block_size: None,
        }
    }

    /// Create a solver whose plans use an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(strategy: S, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            strategy,
            block_size: Some(block_size),
        }
    }

    /// The underlying strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Explicit block size for plans, if one was configured.
    pub fn block_size(&self) -> Option<usize> {
        self.block_size
    }

    /// Maximum sum of pairwise non-adjacent elements of `values`.
    ///
    /// # Errors
    /// [`RobberError::InvalidArgument`] if `values` is empty.
    pub fn solve(&self, values: &[i64]) -> Result<i64, RobberError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "solve",
            strategy = self.strategy.name(),
            len = values.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let total = match values {
            [] => return Err(RobberError::EMPTY),
            [only] => *only,
            [first, second] => (*first).max(*second),
            _ => self
                .strategy
                .best_total(values)
                .ok_or(RobberError::EMPTY)?,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(total, "solved");

        Ok(total)
    }

    /// Like [`solve`](Self::solve), but also rejects an absent sequence.
    ///
    /// # Errors
    /// [`RobberError::InvalidArgument`] if `values` is `None` or empty.
    pub fn solve_opt(&self, values: Option<&[i64]>) -> Result<i64, RobberError> {
        self.solve(values.ok_or(RobberError::ABSENT)?)
    }

    /// Reconstruct the chosen positions along with the total.
    ///
    /// # Errors
    /// [`RobberError::InvalidArgument`] if `values` is empty.
    pub fn plan(&self, values: &[i64]) -> Result<Plan, RobberError> {
        let planner = match self.block_size {
            Some(b) => Planner::with_block_size(values, b),
            None => Planner::new(values),
        };
        planner.run()
    }
}

#[cfg(feature = "parallel")]
impl<S: RobStrategy + Sync> Solver<S> {
    /// Solve many sequences; each result lines up with its input.
    pub fn solve_batch<V>(&self, inputs: &[V]) -> Vec<Result<i64, RobberError>>
    where
        V: AsRef<[i64]> + Sync,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve_batch", inputs = inputs.len(), parallel = true);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        inputs.par_iter().map(|v| self.solve(v.as_ref())).collect()
    }
}

#[cfg(not(feature = "parallel"))]
impl<S: RobStrategy> Solver<S> {
    /// Solve many sequences; each result lines up with its input.
    pub fn solve_batch<V>(&self, inputs: &[V]) -> Vec<Result<i64, RobberError>>
    where
        V: AsRef<[i64]>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve_batch", inputs = inputs.len(), parallel = false);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        inputs.iter().map(|v| self.solve(v.as_ref())).collect()
    }
}
