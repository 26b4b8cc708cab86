//! Reconstruction of the chosen positions in sublinear extra space.
//!
//! The planner works in two phases over blocks of `block_size` positions:
//! 1. A backward sweep from the last position to the first, storing a
//!    [`BlockCheckpoint`] with the frontier just past each block.
//! 2. A forward walk that picks positions left to right. Whenever it enters a
//!    new block, the block's frontiers are replayed from its checkpoint.
//!
//! With the default block size (≈ √n) only O(√n) frontiers are live at once,
//! while the reported plan is exact.

use crate::blocks::BlockCheckpoint;
use crate::error::RobberError;
use crate::frontier::{sweep, Frontier};
use crate::utils::default_block_size;

/// Chosen positions together with their total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Maximum non-adjacent sum.
    pub total: i64,
    /// Chosen positions, ascending.
    pub houses: Vec<usize>,
}

impl Plan {
    /// Whether the positions are ascending, in range and pairwise non-adjacent
    /// for a sequence of `len` elements.
    pub fn is_feasible(&self, len: usize) -> bool {
        self.houses.iter().all(|&h| h < len)
            && self.houses.windows(2).all(|w| w[1] >= w[0] + 2)
    }

    /// Sum of `values` at the chosen positions, or `None` if a position is
    /// out of range for `values`.
    pub fn sum_of(&self, values: &[i64]) -> Option<i64> {
        self.houses.iter().try_fold(0i64, |acc, &h| {
            values.get(h).map(|&v| acc.saturating_add(v))
        })
    }
}

/// Block-checkpointed plan reconstruction for one sequence.
///
/// ```
/// use house_robber::Planner;
///
/// let plan = Planner::new(&[2, 7, 9, 3, 1]).run().unwrap();
/// assert_eq!(plan.total, 12);
/// assert_eq!(plan.houses, vec![0, 2, 4]);
/// ```
pub struct Planner<'a> {
    values: &'a [i64],
    block_size: usize,
}

impl<'a> Planner<'a> {
    /// Planner with a heuristic block size (≈ √n).
    pub fn new(values: &'a [i64]) -> Self {
        let b = default_block_size(values.len()).max(1);
        Self::with_block_size(values, b)
    }

    /// Planner with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(values: &'a [i64], block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self { values, block_size }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Phase I: sweep backwards, checkpointing the frontier past each block.
    ///
    /// Returns the checkpoints in ascending block order and the frontier at
    /// position 0.
    fn build_checkpoints(&self) -> (Vec<BlockCheckpoint<Frontier>>, Frontier) {
        let n = self.values.len();
        let b = self.block_size;
        let num_blocks = if n == 0 { 0 } else { n.div_ceil(b) };

        let mut blocks = Vec::with_capacity(num_blocks);
        let mut frontier = Frontier::EMPTY;
        for k in (0..num_blocks).rev() {
            let start = k * b;
            let end = ((k + 1) * b).min(n);
            blocks.push(BlockCheckpoint {
                start,
                end,
                frontier,
            });
            frontier = sweep(&self.values[start..end], frontier);
        }
        blocks.reverse();

        (blocks, frontier)
    }

    /// Recompute the frontier at every position of `block`, indexed from `block.start`.
    fn replay(&self, block: &BlockCheckpoint<Frontier>) -> Vec<Frontier> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("replay_block", start = block.start, end = block.end);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut out = Vec::with_capacity(block.len());
        let mut f = block.frontier;
        for &v in self.values[block.start..block.end].iter().rev() {
            f = f.step(v);
            out.push(f);
        }
        out.reverse();
        out
    }

    /// Compute the total and one optimal set of positions.
    ///
    /// Ties are broken towards the leftmost position, so the result is
    /// deterministic and independent of the block size.
    ///
    /// # Errors
    /// [`RobberError::InvalidArgument`] if the sequence is empty.
    pub fn run(&self) -> Result<Plan, RobberError> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("plan", len = self.values.len(), block_size = self.block_size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let n = self.values.len();
        let (blocks, frontier_0) = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("build_checkpoints");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.build_checkpoints()
        };
        let total = frontier_0.best_from().ok_or(RobberError::EMPTY)?;

        let mut cursor = BlockCursor::new(self, &blocks);
        let mut houses = Vec::new();
        let mut target = total;
        let mut cur = 0usize;

        loop {
            // First position at or after `cur` whose take value reaches the target.
            let Some(j) = (cur..n).find(|&j| cursor.at(j).take == Some(target)) else {
                break;
            };
            houses.push(j);

            if j + 2 >= n {
                break;
            }
            cur = j + 2;
            target = match cursor.at(cur).best_from() {
                Some(t) => t,
                None => break,
            };
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(total, chosen = houses.len(), blocks = blocks.len(), "plan ready");

        Ok(Plan { total, houses })
    }
}

/// Forward-only access to per-position frontiers, one replayed block at a time.
struct BlockCursor<'p, 'a> {
    planner: &'p Planner<'a>,
    blocks: &'p [BlockCheckpoint<Frontier>],
    loaded: Option<usize>,
    frontiers: Vec<Frontier>,
}

impl<'p, 'a> BlockCursor<'p, 'a> {
    fn new(planner: &'p Planner<'a>, blocks: &'p [BlockCheckpoint<Frontier>]) -> Self {
        Self {
            planner,
            blocks,
            loaded: None,
            frontiers: Vec::new(),
        }
    }

    fn at(&mut self, pos: usize) -> Frontier {
        let idx = pos / self.planner.block_size;
        if self.loaded != Some(idx) {
            self.frontiers = self.planner.replay(&self.blocks[idx]);
            self.loaded = Some(idx);
        }
        let block = &self.blocks[idx];
        debug_assert!(block.contains(pos));
        self.frontiers[pos - block.start]
    }
}
