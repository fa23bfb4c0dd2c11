//! Solution-derived hints, quota-limited per level.

use crate::board::{Board, CellState, Position};
use crate::rng::SimpleRng;

/// Hints available per level.
pub const MAX_HINTS: usize = 3;
/// How long a hint highlight stays on screen.
pub const HINT_DISPLAY_MS: u64 = 3_000;

/// Reveals unplaced solution cells.
pub struct HintProvider {
    rng: SimpleRng,
}

impl Default for HintProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HintProvider {
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a provider with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Highlight one uniformly chosen solution cell that does not yet hold
    /// a queen, schedule the highlight to expire [`HINT_DISPLAY_MS`] after
    /// `now_ms`, and charge the level's hint quota. Returns `None` when the
    /// puzzle is complete, the quota is spent, or every solution cell is
    /// occupied.
    pub fn request(&mut self, board: &mut Board, now_ms: u64) -> Option<Position> {
        if board.is_completed() || board.hints_used() >= MAX_HINTS {
            return None;
        }

        let open: Vec<Position> = board
            .solution()?
            .positions()
            .iter()
            .copied()
            .filter(|pos| board.cell(pos.row, pos.col).state != CellState::Queen)
            .collect();
        let &pick = self.rng.choose(&open)?;

        board.cell_mut(pick.row, pick.col).is_highlighted = true;
        board.hint_expires_at = Some(now_ms + HINT_DISPLAY_MS);
        board.hints_used += 1;
        Some(pick)
    }
}
