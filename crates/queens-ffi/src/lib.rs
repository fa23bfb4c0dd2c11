use queens_core::{
    can_place_queen, Board, CellState, GenerateError, Generator, HintProvider, TapResult,
    TapTracker,
};
use std::sync::{Arc, Mutex};

uniffi::setup_scaffolding!();

/// Outcome of a tap delivered from the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TapOutcome {
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

impl From<TapResult> for TapOutcome {
    fn from(result: TapResult) -> Self {
        match result {
            TapResult::MarkerPlaced => TapOutcome::MarkerPlaced,
            TapResult::MarkerCleared => TapOutcome::MarkerCleared,
            TapResult::QueenPlaced => TapOutcome::QueenPlaced,
            TapResult::Complete => TapOutcome::Complete,
            TapResult::QueenRemoved => TapOutcome::QueenRemoved,
            TapResult::Rejected => TapOutcome::Rejected,
            TapResult::Ignored => TapOutcome::Ignored,
            TapResult::OutOfBounds => TapOutcome::OutOfBounds,
        }
    }
}

/// Cell occupant as rendered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum CellOccupant {
    Empty,
    Marker,
    Queen,
}

impl From<CellState> for CellOccupant {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Empty => CellOccupant::Empty,
            CellState::Marker => CellOccupant::Marker,
            CellState::Queen => CellOccupant::Queen,
        }
    }
}

/// Snapshot of one cell for rendering.
#[derive(Debug, Clone, uniffi::Record)]
pub struct CellSnapshot {
    /// Row position (0-based).
    pub row: u8,
    /// Column position (0-based).
    pub col: u8,
    /// Region the cell belongs to.
    pub region_id: u8,
    /// Region fill color as a hex string.
    pub region_color: String,
    /// What occupies the cell.
    pub occupant: CellOccupant,
    /// Whether this queen currently violates a constraint.
    pub is_conflict: bool,
    /// Whether a hint highlight is active on this cell.
    pub is_highlighted: bool,
}

/// A hinted cell.
#[derive(Debug, Clone, uniffi::Record)]
pub struct HintCell {
    pub row: u8,
    pub col: u8,
}

/// Errors crossing the FFI boundary.
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum GameError {
    #[error("level generation failed: {message}")]
    Generation { message: String },
}

impl From<GenerateError> for GameError {
    fn from(err: GenerateError) -> Self {
        GameError::Generation {
            message: err.to_string(),
        }
    }
}

/// The Queens game interface for mobile platforms. One instance owns one
/// session's board; nothing is shared across sessions.
#[derive(uniffi::Object)]
pub struct QueensGame {
    board: Mutex<Board>,
    taps: Mutex<TapTracker>,
    generator: Mutex<Generator>,
    hints: Mutex<HintProvider>,
}

#[uniffi::export]
impl QueensGame {
    /// Start a fresh solvable level on an N×N grid.
    #[uniffi::constructor]
    pub fn new(grid_size: u8) -> Result<Arc<Self>, GameError> {
        let mut generator = Generator::new();
        let board = generator.generate(grid_size as usize)?;
        Ok(Arc::new(Self {
            board: Mutex::new(board),
            taps: Mutex::new(TapTracker::new()),
            generator: Mutex::new(generator),
            hints: Mutex::new(HintProvider::new()),
        }))
    }

    /// Apply a tap at the given wall-clock timestamp. Double taps are
    /// detected against the previous tap on the same cell.
    pub fn apply_tap(&self, row: u8, col: u8, timestamp_ms: u64) -> TapOutcome {
        let mut taps = self.taps.lock().unwrap();
        self.board
            .lock()
            .unwrap()
            .apply_tap(row as usize, col as usize, timestamp_ms, &mut taps)
            .into()
    }

    /// Whether a queen placement at the cell would currently be accepted.
    pub fn can_place_queen(&self, row: u8, col: u8) -> bool {
        can_place_queen(&self.board.lock().unwrap(), row as usize, col as usize)
    }

    /// Reveal one unplaced solution cell, quota permitting. The returned
    /// cell is highlighted until `expire_hint` is called with a timestamp
    /// past the display deadline.
    pub fn request_hint(&self, timestamp_ms: u64) -> Option<HintCell> {
        let mut board = self.board.lock().unwrap();
        self.hints
            .lock()
            .unwrap()
            .request(&mut board, timestamp_ms)
            .map(|pos| HintCell {
                row: pos.row as u8,
                col: pos.col as u8,
            })
    }

    /// Clear an elapsed hint highlight. Safe to call from a timer at any
    /// time; does nothing until the display deadline has passed.
    pub fn expire_hint(&self, timestamp_ms: u64) {
        self.board.lock().unwrap().expire_hint(timestamp_ms);
    }

    /// Clear all cell states and counters but keep the level itself
    /// (regions and solution), so it can be replayed.
    pub fn reset(&self) {
        self.board.lock().unwrap().reset();
        self.taps.lock().unwrap().clear();
    }

    /// Discard the current level and generate a new one, keeping the
    /// current grid size when none is given.
    pub fn new_game(&self, grid_size: Option<u8>) -> Result<(), GameError> {
        let size = match grid_size {
            Some(size) => size as usize,
            None => self.board.lock().unwrap().grid_size(),
        };
        let board = self.generator.lock().unwrap().generate(size)?;
        *self.board.lock().unwrap() = board;
        self.taps.lock().unwrap().clear();
        Ok(())
    }

    /// Row-major snapshots of every cell for rendering.
    pub fn cells(&self) -> Vec<CellSnapshot> {
        let board = self.board.lock().unwrap();
        board
            .cells()
            .map(|cell| {
                let region_color = board
                    .region(cell.region_id)
                    .map(|region| region.color.clone())
                    .unwrap_or_default();
                CellSnapshot {
                    row: cell.row as u8,
                    col: cell.col as u8,
                    region_id: cell.region_id as u8,
                    region_color,
                    occupant: cell.state.into(),
                    is_conflict: cell.is_conflict,
                    is_highlighted: cell.is_highlighted,
                }
            })
            .collect()
    }

    pub fn grid_size(&self) -> u8 {
        self.board.lock().unwrap().grid_size() as u8
    }

    pub fn queens_placed(&self) -> u8 {
        self.board.lock().unwrap().queens_placed() as u8
    }

    pub fn move_count(&self) -> u32 {
        self.board.lock().unwrap().move_count() as u32
    }

    pub fn hints_used(&self) -> u8 {
        self.board.lock().unwrap().hints_used() as u8
    }

    pub fn is_completed(&self) -> bool {
        self.board.lock().unwrap().is_completed()
    }

    /// Board state as JSON for host-side debugging.
    pub fn board_json(&self) -> String {
        serde_json::to_string(&*self.board.lock().unwrap()).unwrap_or_default()
    }
}
