//! Block checkpoints kept by the planner.
//!
//! A checkpoint covers positions [start, end) and stores the frontier just past
//! the block (at position `end`), which is enough to replay the block later.

/// Checkpoint for a contiguous block of positions [start, end).
#[derive(Debug, Clone)]
pub struct BlockCheckpoint<F> {
    /// Inclusive first position.
    pub start: usize,
    /// Exclusive last position.
    pub end: usize,
    /// Frontier at position `end`.
    pub frontier: F,
}

impl<F> BlockCheckpoint<F> {
    /// Number of positions in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the block covers no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `pos` falls inside this block.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::BlockCheckpoint;

    #[test]
    fn zero_length_block_is_empty() {
        let b = BlockCheckpoint {
            start: 5,
            end: 5,
            frontier: (),
        };
        assert_eq!(b.len(), 0);
        assert!(b.is_empty());
        assert!(!b.contains(5));
    }

    #[test]
    fn typical_block() {
        let b = BlockCheckpoint {
            start: 2,
            end: 7,
            frontier: 0i64,
        };
        assert_eq!(b.len(), 5);
        assert!(b.contains(2));
        assert!(b.contains(6));
        assert!(!b.contains(7));
    }
}
