//! Board data model: positions, cells, regions, solutions, and the live
//! game state for one level.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Smallest supported grid size.
pub const MIN_GRID_SIZE: usize = 4;
/// Largest supported grid size.
pub const MAX_GRID_SIZE: usize = 10;

/// Fill colors for regions, indexed by `region id % len`.
pub const REGION_COLORS: [&str; 10] = [
    "#64B5F6", // Light Blue
    "#BA68C8", // Light Purple
    "#81C784", // Light Green
    "#FFB74D", // Light Orange
    "#F06292", // Light Pink
    "#D4E157", // Light Lime
    "#4DD0E1", // Light Cyan
    "#FFF176", // Light Yellow
    "#A1887F", // Light Brown
    "#7986CB", // Light Indigo
];

/// Named grid sizes as presented to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Grid size this difficulty plays on.
    pub fn grid_size(&self) -> usize {
        match self {
            Difficulty::Beginner => 6,
            Difficulty::Intermediate => 7,
            Difficulty::Advanced => 8,
            Difficulty::Expert => 9,
        }
    }

    /// All difficulties in ascending order.
    pub fn all_levels() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
            Difficulty::Expert,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Intermediate => write!(f, "Intermediate"),
            Difficulty::Advanced => write!(f, "Advanced"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

/// A cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to another position.
    pub fn chebyshev_distance(&self, other: Position) -> usize {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }

    /// Whether another position is an orthogonal or diagonal neighbor.
    pub fn is_adjacent(&self, other: Position) -> bool {
        *self != other && self.chebyshev_distance(other) <= 1
    }

    /// In-bounds orthogonal neighbors on a `grid_size` board.
    pub fn orthogonal_neighbors(&self, grid_size: usize) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if self.row > 0 {
            neighbors.push(Position::new(self.row - 1, self.col));
        }
        if self.row + 1 < grid_size {
            neighbors.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            neighbors.push(Position::new(self.row, self.col - 1));
        }
        if self.col + 1 < grid_size {
            neighbors.push(Position::new(self.row, self.col + 1));
        }
        neighbors
    }
}

/// What currently occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Marker,
    Queen,
}

/// A single cell of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Region this cell belongs to; fixed at generation time.
    pub region_id: usize,
    pub state: CellState,
    pub is_highlighted: bool,
    pub is_conflict: bool,
}

impl Cell {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// A connected group of cells that must contain exactly one queen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: usize,
    /// Fill color used by the rendering layer.
    pub color: String,
    pub cells: Vec<Position>,
    pub has_queen: bool,
    pub queen_position: Option<Position>,
}

impl Region {
    pub fn new(id: usize, cells: Vec<Position>) -> Self {
        Self {
            id,
            color: REGION_COLORS[id % REGION_COLORS.len()].to_string(),
            cells,
            has_queen: false,
            queen_position: None,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Whether every member cell is orthogonally reachable from the first.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cells.first() else {
            return false;
        };
        let members: HashSet<Position> = self.cells.iter().copied().collect();
        let mut visited = HashSet::with_capacity(members.len());
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(pos) = stack.pop() {
            let mut candidates = Vec::with_capacity(4);
            if pos.row > 0 {
                candidates.push(Position::new(pos.row - 1, pos.col));
            }
            candidates.push(Position::new(pos.row + 1, pos.col));
            if pos.col > 0 {
                candidates.push(Position::new(pos.row, pos.col - 1));
            }
            candidates.push(Position::new(pos.row, pos.col + 1));

            for next in candidates {
                if members.contains(&next) && visited.insert(next) {
                    stack.push(next);
                }
            }
        }

        visited.len() == members.len()
    }
}

/// One queen position per region, discovered at generation time and kept
/// for validation and hints. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    positions: Vec<Position>,
}

impl Solution {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Check the solution invariant for a `grid_size` board: one position
    /// per row and column, all pairs at Chebyshev distance >= 2.
    pub fn is_valid_for(&self, grid_size: usize) -> bool {
        if self.positions.len() != grid_size {
            return false;
        }
        let mut rows = vec![false; grid_size];
        let mut cols = vec![false; grid_size];
        for pos in &self.positions {
            if pos.row >= grid_size || pos.col >= grid_size {
                return false;
            }
            if rows[pos.row] || cols[pos.col] {
                return false;
            }
            rows[pos.row] = true;
            cols[pos.col] = true;
        }
        for (i, &a) in self.positions.iter().enumerate() {
            for &b in &self.positions[i + 1..] {
                if a.chebyshev_distance(b) < 2 {
                    return false;
                }
            }
        }
        true
    }
}

/// The live game state for one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) grid_size: usize,
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) regions: Vec<Region>,
    pub(crate) queens_placed: usize,
    pub(crate) move_count: usize,
    pub(crate) is_completed: bool,
    pub(crate) hints_used: usize,
    pub(crate) hint_expires_at: Option<u64>,
    pub(crate) solution: Option<Solution>,
}

impl Board {
    /// Assemble a fresh board from accepted regions and their solution.
    pub(crate) fn with_level(grid_size: usize, regions: Vec<Region>, solution: Solution) -> Self {
        let mut region_of = vec![vec![0usize; grid_size]; grid_size];
        for region in &regions {
            for pos in &region.cells {
                region_of[pos.row][pos.col] = region.id;
            }
        }

        let cells = (0..grid_size)
            .map(|row| {
                (0..grid_size)
                    .map(|col| Cell {
                        row,
                        col,
                        region_id: region_of[row][col],
                        state: CellState::Empty,
                        is_highlighted: false,
                        is_conflict: false,
                    })
                    .collect()
            })
            .collect();

        Self {
            grid_size,
            cells,
            regions,
            queens_placed: 0,
            move_count: 0,
            is_completed: false,
            hints_used: 0,
            hint_expires_at: None,
            solution: Some(solution),
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.grid_size && col < self.grid_size
    }

    /// The cell at `(row, col)`. Callers check `in_bounds` first.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row][col]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: usize) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn queens_placed(&self) -> usize {
        self.queens_placed
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn hints_used(&self) -> usize {
        self.hints_used
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// Positions of all queens currently on the board.
    pub fn queen_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|c| c.state == CellState::Queen)
            .map(Cell::position)
            .collect()
    }

    /// Clear all cell states, flags, and counters, keeping the regions and
    /// the solution so the same level can be replayed.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.state = CellState::Empty;
            cell.is_highlighted = false;
            cell.is_conflict = false;
        }
        for region in &mut self.regions {
            region.has_queen = false;
            region.queen_position = None;
        }
        self.queens_placed = 0;
        self.move_count = 0;
        self.is_completed = false;
        self.hints_used = 0;
        self.hint_expires_at = None;
    }

    /// Clear the hint highlight once its display deadline has passed.
    /// Idempotent; driven by the host's timer with a wall-clock timestamp.
    pub fn expire_hint(&mut self, now_ms: u64) {
        let Some(deadline) = self.hint_expires_at else {
            return;
        };
        if now_ms >= deadline {
            for cell in self.cells.iter_mut().flatten() {
                cell.is_highlighted = false;
            }
            self.hint_expires_at = None;
        }
    }
}
