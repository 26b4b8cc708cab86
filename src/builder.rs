use crate::strategies::Rolling;
use crate::traits::RobStrategy;
use crate::Solver;

pub struct SolverBuilder<S: RobStrategy = Rolling> {
    strategy: S,
    block_size: Option<usize>,
}

impl Default for SolverBuilder<Rolling> {
    fn default() -> Self {
        Self::new(Rolling)
    }
}

impl<S: RobStrategy> SolverBuilder<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            block_size: None,
        }
    }
    pub fn strategy<T: RobStrategy>(self, strategy: T) -> SolverBuilder<T> {
        SolverBuilder {
            strategy,
            block_size: self.block_size,
        }
    }
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }
    pub fn build(self) -> Solver<S> {
        match self.block_size {
            Some(b) => Solver::with_block_size(self.strategy, b),
            None => Solver::new(self.strategy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::Memoized;

    #[test]
    fn defaults_to_rolling_without_block_size() {
        let solver = SolverBuilder::default().build();
        assert_eq!(solver.strategy().name(), "rolling");
        assert_eq!(solver.block_size(), None);
    }

    #[test]
    fn strategy_swap_keeps_block_size() {
        let solver = SolverBuilder::default()
            .with_block_size(3)
            .strategy(Memoized)
            .build();
        assert_eq!(solver.strategy().name(), "memoized");
        assert_eq!(solver.block_size(), Some(3));
        assert_eq!(solver.solve(&[2, 1, 1, 2]), Ok(4));
    }
}
