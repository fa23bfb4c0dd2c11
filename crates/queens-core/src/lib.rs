//! Core engine for the Queens puzzle.
//!
//! An N×N grid is partitioned into N connected colored regions of N cells;
//! a valid solution places exactly one queen per row, per column, and per
//! region, with no two queens touching, diagonals included. This crate
//! owns everything a UI shell drives: region partitioning, backtracking
//! search, placement validation, level generation with a
//! guaranteed-solvable fallback, the tap-driven move state machine, and
//! solution-derived hints. Rendering, gestures, theming, and animation
//! belong to the embedding layer.

mod board;
mod game;
mod generator;
mod hint;
mod partition;
mod rng;
mod solver;
mod validation;

pub use board::{
    Board, Cell, CellState, Difficulty, Position, Region, Solution, MAX_GRID_SIZE, MIN_GRID_SIZE,
    REGION_COLORS,
};
pub use game::{TapKind, TapResult, TapTracker, DOUBLE_TAP_DELAY_MS};
pub use generator::{GenerateError, Generator, GeneratorConfig};
pub use hint::{HintProvider, HINT_DISPLAY_MS, MAX_HINTS};
pub use partition::{row_band_regions, verify_partition, PartitionStrategy, RegionPartitioner};
pub use solver::PuzzleSolver;
pub use validation::{can_place_queen, is_puzzle_completed, recompute_conflicts};
