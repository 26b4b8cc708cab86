//! Strategy trait shared by every solver implementation.
//!
//! A strategy evaluates the suffix recurrence for one sequence. Input
//! validation, small-case shortcuts and tracing live in
//! [`Solver`](crate::engine::Solver), so implementations only need to agree on
//! the recurrence itself:
//!
//! ```text
//! take(i)      = values[i] + (best_from(i + 2) if i + 2 < n else 0)
//! best_from(i) = max(take(i), best_from(i + 1))    best_from(n) = none
//! ```
//!
//! and report `best_from(0)`.

/// An algorithm computing the maximum non-adjacent sum.
pub trait RobStrategy {
    /// Short lowercase identifier, also accepted by [`StrategyKind`](crate::strategies::StrategyKind).
    fn name(&self) -> &'static str;

    /// Best achievable total, or `None` when `values` is empty.
    ///
    /// Sums saturate at the bounds of `i64`.
    fn best_total(&self, values: &[i64]) -> Option<i64>;
}

impl<S: RobStrategy + ?Sized> RobStrategy for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn best_total(&self, values: &[i64]) -> Option<i64> {
        (**self).best_total(values)
    }
}
