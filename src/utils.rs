//! Assorted helpers.

/// Block size used by the planner for a sequence of `len` positions.
///
/// Roughly √len, which balances the number of stored checkpoints against the
/// size of a replayed block.
#[inline]
pub fn default_block_size(len: usize) -> usize {
    if len <= 1 {
        1
    } else {
        (len as f64).sqrt().ceil() as usize
    }
}

/// Maximum of two optional values, ignoring `None`.
#[inline]
pub(crate) fn max_opt(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.max(y)),
        (x, None) | (None, x) => x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_one_for_tiny_inputs() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
    }

    #[test]
    fn sqrt_ceiling_behavior() {
        assert_eq!(default_block_size(2), 2);
        assert_eq!(default_block_size(4), 2);
        assert_eq!(default_block_size(5), 3);
        assert_eq!(default_block_size(100), 10);
        assert_eq!(default_block_size(101), 11);
    }

    #[test]
    fn block_size_never_shrinks() {
        let mut prev = 0;
        for len in 0..500 {
            let b = default_block_size(len);
            assert!(b >= prev, "block size decreased at len={len}: {b} < {prev}");
            prev = b;
        }
    }

    #[test]
    fn max_opt_ignores_missing() {
        assert_eq!(max_opt(None, None), None);
        assert_eq!(max_opt(Some(-2), None), Some(-2));
        assert_eq!(max_opt(None, Some(3)), Some(3));
        assert_eq!(max_opt(Some(1), Some(3)), Some(3));
    }
}
