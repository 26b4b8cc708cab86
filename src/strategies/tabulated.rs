//! Full-array tabulation.
//!
//! Same recurrence as [`Rolling`](super::rolling::Rolling) but materialises
//! both tables, which makes it handy as a baseline and for inspecting
//! intermediate values.

use crate::traits::RobStrategy;

/// Bottom-up strategy keeping O(n) tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tabulated;

/// Per-position tables of the recurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tables {
    /// `take[i]`: best total whose first chosen position is exactly `i`.
    pub take: Vec<i64>,
    /// `best_from[i]`: best total whose first chosen position is `i` or later.
    pub best_from: Vec<i64>,
}

impl Tabulated {
    /// Fill both tables for `values`.
    pub fn tables(&self, values: &[i64]) -> Tables {
        let n = values.len();
        let mut take = vec![0i64; n];
        let mut best_from = vec![0i64; n];

        for i in (0..n).rev() {
            let after_next = if i + 2 < n { best_from[i + 2] } else { 0 };
            take[i] = values[i].saturating_add(after_next);
            best_from[i] = if i + 1 < n {
                take[i].max(best_from[i + 1])
            } else {
                take[i]
            };
        }

        Tables { take, best_from }
    }
}

impl RobStrategy for Tabulated {
    fn name(&self) -> &'static str {
        "tabulated"
    }

    fn best_total(&self, values: &[i64]) -> Option<i64> {
        self.tables(values).best_from.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_for_known_input() {
        let t = Tabulated.tables(&[2, 7, 9, 3, 1]);
        assert_eq!(t.take, vec![12, 10, 10, 3, 1]);
        assert_eq!(t.best_from, vec![12, 10, 10, 3, 1]);
    }

    #[test]
    fn best_from_is_non_increasing() {
        let t = Tabulated.tables(&[4, 1, 2, 7, 5, 3, 1]);
        assert!(t.best_from.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(t.best_from[0], 14);
    }

    #[test]
    fn empty_input_has_no_total() {
        assert_eq!(Tabulated.best_total(&[]), None);
    }
}
