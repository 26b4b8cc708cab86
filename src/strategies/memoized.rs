//! Top-down recursion with a per-call cache.
//!
//! Linear time. Pending positions live on an explicit work stack rather than
//! the call stack, so input length is bounded by memory only.

use crate::traits::RobStrategy;
use crate::utils::max_opt;

/// Memoized recursive strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Memoized;

struct Memo<'a> {
    values: &'a [i64],
    cache: Vec<Option<i64>>,
}

impl<'a> Memo<'a> {
    fn new(values: &'a [i64]) -> Self {
        Self {
            values,
            cache: vec![None; values.len()],
        }
    }

    fn cached(&self, i: usize) -> Option<i64> {
        self.cache.get(i).copied().flatten()
    }

    /// Whether `best_from(i)` is known; positions past the end always are.
    fn is_resolved(&self, i: usize) -> bool {
        i >= self.values.len() || self.cache[i].is_some()
    }

    fn best_from(&mut self, i: usize) -> Option<i64> {
        let mut pending = vec![i];
        while let Some(&top) = pending.last() {
            if self.is_resolved(top) {
                pending.pop();
                continue;
            }
            let mut ready = true;
            for dep in [top + 2, top + 1] {
                if !self.is_resolved(dep) {
                    pending.push(dep);
                    ready = false;
                }
            }
            if !ready {
                continue;
            }

            let take = self.values[top].saturating_add(self.cached(top + 2).unwrap_or(0));
            self.cache[top] = max_opt(Some(take), self.cached(top + 1));
            pending.pop();
        }
        self.cached(i)
    }
}

impl RobStrategy for Memoized {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn best_total(&self, values: &[i64]) -> Option<i64> {
        Memo::new(values).best_from(0)
    }
}
