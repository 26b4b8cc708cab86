//! Interchangeable strategies for the maximum non-adjacent sum.
//!
//! - [`rolling`]   : constant-space tabulation, the default production path.
//! - [`tabulated`] : full-array tabulation.
//! - [`memoized`]  : top-down recursion with a cache.
//! - [`recursive`] : exponential recursion, for tiny inputs and cross-checks.

pub mod memoized;
pub mod recursive;
pub mod rolling;
pub mod tabulated;

use std::fmt;
use std::str::FromStr;

use crate::engine::Solver;
use crate::error::RobberError;

pub use memoized::Memoized;
pub use recursive::Recursive;
pub use rolling::Rolling;
pub use tabulated::Tabulated;

/// Runtime selector for a strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Recursive,
    Memoized,
    Tabulated,
    #[default]
    Rolling,
}

impl StrategyKind {
    /// Every strategy, slowest first.
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Recursive,
        StrategyKind::Memoized,
        StrategyKind::Tabulated,
        StrategyKind::Rolling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Recursive => "recursive",
            StrategyKind::Memoized => "memoized",
            StrategyKind::Tabulated => "tabulated",
            StrategyKind::Rolling => "rolling",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "recursive" => Ok(StrategyKind::Recursive),
            "memoized" => Ok(StrategyKind::Memoized),
            "tabulated" => Ok(StrategyKind::Tabulated),
            "rolling" => Ok(StrategyKind::Rolling),
            other => Err(format!("unknown strategy '{other}'")),
        }
    }
}

/// Solve `values` with the strategy selected at runtime.
pub fn solve_with(kind: StrategyKind, values: &[i64]) -> Result<i64, RobberError> {
    match kind {
        StrategyKind::Recursive => Solver::new(Recursive).solve(values),
        StrategyKind::Memoized => Solver::new(Memoized).solve(values),
        StrategyKind::Tabulated => Solver::new(Tabulated).solve(values),
        StrategyKind::Rolling => Solver::new(Rolling).solve(values),
    }
}
