//! The tap-driven move state machine.
//!
//! Taps arrive one at a time from the interactive layer. A second tap on
//! the same cell within [`DOUBLE_TAP_DELAY_MS`] classifies as a double
//! tap; because the first tap of such a pair has already been applied as a
//! single tap, the double-tap transition is evaluated against the cell
//! state recorded when the gesture began. All of that bookkeeping lives in
//! [`TapTracker`], owned by the caller and passed in with each tap, so the
//! engine holds no hidden input state.

use crate::board::{Board, CellState};
use crate::validation::{can_place_queen, is_puzzle_completed, recompute_conflicts};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Two taps on the same cell within this window count as a double tap.
pub const DOUBLE_TAP_DELAY_MS: u64 = 300;

/// Classification of a tap on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    Single,
    Double,
}

/// Per-cell tap history: last-tap timestamps for double-tap detection and
/// the cell state at the start of the current gesture.
#[derive(Debug, Clone, Default)]
pub struct TapTracker {
    last_tap: HashMap<(usize, usize), u64>,
    gesture_origin: HashMap<(usize, usize), CellState>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tap and classify it against the previous tap on the same
    /// cell.
    pub fn classify(&mut self, row: usize, col: usize, timestamp_ms: u64) -> TapKind {
        let previous = self.last_tap.insert((row, col), timestamp_ms);
        match previous {
            Some(last) if timestamp_ms.saturating_sub(last) < DOUBLE_TAP_DELAY_MS => {
                TapKind::Double
            }
            _ => TapKind::Single,
        }
    }

    fn begin_gesture(&mut self, row: usize, col: usize, state: CellState) {
        self.gesture_origin.insert((row, col), state);
    }

    fn take_origin(&mut self, row: usize, col: usize) -> Option<CellState> {
        self.gesture_origin.remove(&(row, col))
    }

    /// Forget all recorded taps (reset / new game).
    pub fn clear(&mut self) {
        self.last_tap.clear();
        self.gesture_origin.clear();
    }
}

/// Outcome of a tap, reported to the host layer. Rejected placements are
/// ordinary outcomes, not errors: the board simply does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapResult {
    /// A marker was placed on an empty cell.
    MarkerPlaced,
    /// A marker was cleared back to empty.
    MarkerCleared,
    /// A queen was placed.
    QueenPlaced,
    /// A queen was placed and the puzzle is now complete.
    Complete,
    /// A queen was removed.
    QueenRemoved,
    /// Queen placement was rejected by the constraints; board unchanged.
    Rejected,
    /// The tap had no effect.
    Ignored,
    /// The coordinates lie outside the grid.
    OutOfBounds,
}

impl Board {
    /// Apply one tap at the given wall-clock timestamp. Classification and
    /// gesture state live in `taps`; every accepted transition refreshes
    /// the derived state (queen count, region bookkeeping, conflict flags,
    /// completion) before returning.
    pub fn apply_tap(
        &mut self,
        row: usize,
        col: usize,
        timestamp_ms: u64,
        taps: &mut TapTracker,
    ) -> TapResult {
        if !self.in_bounds(row, col) {
            return TapResult::OutOfBounds;
        }

        match taps.classify(row, col, timestamp_ms) {
            TapKind::Single => {
                taps.begin_gesture(row, col, self.cell(row, col).state);
                self.apply_single_tap(row, col)
            }
            TapKind::Double => {
                let origin = taps
                    .take_origin(row, col)
                    .unwrap_or(self.cell(row, col).state);
                self.apply_double_tap(row, col, origin)
            }
        }
    }

    /// Single tap: queens and markers come off, empty cells take a marker.
    fn apply_single_tap(&mut self, row: usize, col: usize) -> TapResult {
        let result = match self.cell(row, col).state {
            CellState::Queen => {
                self.cell_mut(row, col).state = CellState::Empty;
                TapResult::QueenRemoved
            }
            CellState::Marker => {
                self.cell_mut(row, col).state = CellState::Empty;
                TapResult::MarkerCleared
            }
            CellState::Empty => {
                self.cell_mut(row, col).state = CellState::Marker;
                TapResult::MarkerPlaced
            }
        };

        self.move_count += 1;
        self.refresh_derived_state();
        result
    }

    /// Second tap of a double-tap gesture. `origin` is the cell state
    /// before the gesture's first (already applied) tap:
    ///
    /// - queen: the first tap already cleared it, and a queen cell clears
    ///   on any tap, so there is nothing left to do;
    /// - marker: a marked cell never becomes a queen without being cleared
    ///   first, so the gesture ends with the first tap's clear;
    /// - empty: the first tap put down a transient marker; attempt the
    ///   queen placement it was leading up to.
    fn apply_double_tap(&mut self, row: usize, col: usize, origin: CellState) -> TapResult {
        match origin {
            CellState::Queen | CellState::Marker => TapResult::Ignored,
            CellState::Empty => self.try_place_queen(row, col),
        }
    }

    /// Attempt the gated queen placement on a cell holding the transient
    /// marker from the first half of a double tap. On rejection the board
    /// is left exactly as the first tap put it and no move is recorded.
    fn try_place_queen(&mut self, row: usize, col: usize) -> TapResult {
        debug_assert_ne!(self.cell(row, col).state, CellState::Queen);

        if !can_place_queen(self, row, col) {
            return TapResult::Rejected;
        }

        self.cell_mut(row, col).state = CellState::Queen;
        self.move_count += 1;
        self.refresh_derived_state();

        if self.is_completed {
            TapResult::Complete
        } else {
            TapResult::QueenPlaced
        }
    }

    /// Re-derive queen count, per-region bookkeeping, conflict flags, and
    /// the completion flag wholesale from the raw cell states, rather than
    /// patching them incrementally.
    pub(crate) fn refresh_derived_state(&mut self) {
        self.queens_placed = self
            .cells()
            .filter(|cell| cell.state == CellState::Queen)
            .count();

        for index in 0..self.regions.len() {
            let queen = self.regions[index]
                .cells
                .iter()
                .copied()
                .find(|pos| self.cells[pos.row][pos.col].state == CellState::Queen);
            self.regions[index].has_queen = queen.is_some();
            self.regions[index].queen_position = queen;
        }

        recompute_conflicts(self);
        self.is_completed = is_puzzle_completed(self);
    }
}
