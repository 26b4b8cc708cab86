//! Two-value frontier carried by the suffix recurrence.
//!
//! Positions are visited from the last element to the first. At position `i`
//! the frontier holds:
//! - `take`: best sum of a selection whose first chosen position is exactly `i`,
//! - `best_after`: best sum of a selection whose first chosen position is `i + 1`
//!   or later.
//!
//! A chosen position `i <= n - 3` is always followed by another chosen position
//! at `i + 2` or later, so every selection is non-empty and ends at `n - 2` or
//! `n - 1`. For non-negative inputs this is the unrestricted optimum.

use crate::utils::max_opt;

/// Rolling state of the recurrence at one position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    /// Best sum starting exactly at this position (`None` past the end).
    pub take: Option<i64>,
    /// Best sum starting strictly after this position (`None` near the end).
    pub best_after: Option<i64>,
}

impl Frontier {
    /// Frontier one past the last position.
    pub const EMPTY: Frontier = Frontier {
        take: None,
        best_after: None,
    };

    /// Step from position `i + 1` to position `i`, where `value == values[i]`.
    #[inline]
    pub fn step(&self, value: i64) -> Frontier {
        Frontier {
            take: Some(value.saturating_add(self.best_after.unwrap_or(0))),
            best_after: self.best_from(),
        }
    }

    /// Best sum of a selection starting at this position or later.
    #[inline]
    pub fn best_from(&self) -> Option<i64> {
        max_opt(self.take, self.best_after)
    }
}

/// Fold `values` right-to-left starting from `frontier`.
pub fn sweep(values: &[i64], frontier: Frontier) -> Frontier {
    values.iter().rev().fold(frontier, |f, &v| f.step(v))
}
