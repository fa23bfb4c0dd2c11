//! Backtracking search for a valid queen placement over a region partition.

use crate::board::{Position, Region, Solution};
use crate::rng::SimpleRng;

/// Depth-first backtracking solver: one queen per region, rows and columns
/// pairwise distinct, no two queens at Chebyshev distance <= 1.
pub struct PuzzleSolver {
    rng: SimpleRng,
    shuffle_candidates: bool,
}

impl Default for PuzzleSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSolver {
    /// Solver with randomized candidate order, so repeated runs on the same
    /// partition explore different solutions.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
            shuffle_candidates: true,
        }
    }

    /// Randomized-order solver with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
            shuffle_candidates: true,
        }
    }

    /// Solver that visits candidates in each region's stored order;
    /// repeated runs on the same partition find the same solution.
    pub fn deterministic() -> Self {
        Self {
            rng: SimpleRng::with_seed(0),
            shuffle_candidates: false,
        }
    }

    /// Find one queen per region, or `None` if the partition admits no
    /// valid placement.
    pub fn solve(&mut self, grid_size: usize, regions: &[Region]) -> Option<Solution> {
        if regions.len() != grid_size {
            return None;
        }

        let mut candidates: Vec<Vec<Position>> = regions
            .iter()
            .map(|region| {
                region
                    .cells
                    .iter()
                    .copied()
                    .filter(|pos| pos.row < grid_size && pos.col < grid_size)
                    .collect()
            })
            .collect();
        if self.shuffle_candidates {
            for list in &mut candidates {
                self.rng.shuffle(list);
            }
        }

        let mut used_rows = vec![false; grid_size];
        let mut used_cols = vec![false; grid_size];
        let mut placed: Vec<Position> = Vec::with_capacity(grid_size);

        if place_region(0, &candidates, &mut used_rows, &mut used_cols, &mut placed) {
            Some(Solution::new(placed))
        } else {
            None
        }
    }
}

/// Try every candidate of region `index`, recursing into the next region on
/// each consistent placement and unwinding on exhaustion.
fn place_region(
    index: usize,
    candidates: &[Vec<Position>],
    used_rows: &mut [bool],
    used_cols: &mut [bool],
    placed: &mut Vec<Position>,
) -> bool {
    if index == candidates.len() {
        return true;
    }

    for &pos in &candidates[index] {
        if used_rows[pos.row] || used_cols[pos.col] {
            continue;
        }
        if placed.iter().any(|&queen| queen.chebyshev_distance(pos) <= 1) {
            continue;
        }

        used_rows[pos.row] = true;
        used_cols[pos.col] = true;
        placed.push(pos);

        if place_region(index + 1, candidates, used_rows, used_cols, placed) {
            return true;
        }

        used_rows[pos.row] = false;
        used_cols[pos.col] = false;
        placed.pop();
    }

    false
}
