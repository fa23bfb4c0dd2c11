//! Level generation: partition, solve, retry, and the guaranteed fallback.

use crate::board::{Board, Difficulty, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::partition::{verify_partition, PartitionStrategy, RegionPartitioner};
use crate::solver::PuzzleSolver;
use thiserror::Error;

/// Generation failure reported to the host. Retrying or aborting the level
/// start is the host's call; a board without a solution is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("unsupported grid size {0}; supported sizes are {MIN_GRID_SIZE} through {MAX_GRID_SIZE}")]
    UnsupportedGridSize(usize),
    #[error("could not generate a solvable {0}x{0} level, even via the row-band fallback")]
    Exhausted(usize),
}

/// Configuration for level generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Randomized partition attempts before falling back to row bands.
    pub max_attempts: usize,
    /// Solver retries against the row-band fallback partition.
    pub max_fallback_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 7,
            max_fallback_attempts: 64,
        }
    }
}

/// Produces boards that are guaranteed to carry a solution.
pub struct Generator {
    config: GeneratorConfig,
    partitioner: RegionPartitioner,
    solver: PuzzleSolver,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            partitioner: RegionPartitioner::new(),
            solver: PuzzleSolver::new(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            partitioner: RegionPartitioner::new(),
            solver: PuzzleSolver::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            partitioner: RegionPartitioner::with_seed(seed),
            solver: PuzzleSolver::with_seed(seed.wrapping_add(1)),
        }
    }

    /// Generate a fresh level: randomized partitions first, the row-band
    /// fallback after `max_attempts` failures. The returned board always
    /// has an attached solution; exhausting even the fallback is fatal.
    pub fn generate(&mut self, grid_size: usize) -> Result<Board, GenerateError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(GenerateError::UnsupportedGridSize(grid_size));
        }

        for attempt in 0..self.config.max_attempts {
            let regions = self
                .partitioner
                .partition(grid_size, PartitionStrategy::Randomized);
            if !verify_partition(grid_size, &regions) {
                log::debug!(
                    "discarding malformed {grid_size}x{grid_size} partition (attempt {attempt})"
                );
                continue;
            }
            match self.solver.solve(grid_size, &regions) {
                Some(solution) => return Ok(Board::with_level(grid_size, regions, solution)),
                None => {
                    log::debug!(
                        "{grid_size}x{grid_size} partition unsatisfiable (attempt {attempt})"
                    );
                }
            }
        }

        log::warn!(
            "randomized partitions exhausted for {grid_size}x{grid_size}; falling back to row bands"
        );
        for _ in 0..self.config.max_fallback_attempts {
            let regions = self
                .partitioner
                .partition(grid_size, PartitionStrategy::RowBands);
            if let Some(solution) = self.solver.solve(grid_size, &regions) {
                return Ok(Board::with_level(grid_size, regions, solution));
            }
        }

        Err(GenerateError::Exhausted(grid_size))
    }

    /// Generate a level at a named difficulty.
    pub fn generate_difficulty(&mut self, difficulty: Difficulty) -> Result<Board, GenerateError> {
        self.generate(difficulty.grid_size())
    }
}
