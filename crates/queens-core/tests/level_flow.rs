//! End-to-end scenarios: generation, play, hints, and the fallback path.

use queens_core::{
    can_place_queen, row_band_regions, CellState, Generator, GeneratorConfig, HintProvider,
    PuzzleSolver, TapResult, TapTracker, MAX_GRID_SIZE, MAX_HINTS, MIN_GRID_SIZE,
};

/// Double-tap a cell: a quick pair of taps starting at `clock`.
fn double_tap(
    board: &mut queens_core::Board,
    taps: &mut TapTracker,
    row: usize,
    col: usize,
    clock: u64,
) -> TapResult {
    board.apply_tap(row, col, clock, taps);
    board.apply_tap(row, col, clock + 100, taps)
}

#[test]
fn generated_levels_are_always_solvable() {
    for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        for seed in 0..8 {
            let mut generator = Generator::with_seed(seed * 1_000 + n as u64);
            let board = generator.generate(n).unwrap();
            let solution = board.solution().expect("board carries a solution");
            assert_eq!(solution.len(), n);
            assert!(solution.is_valid_for(n));
            assert_eq!(board.regions().len(), n);
        }
    }
}

#[test]
fn row_band_fallback_is_solvable_for_every_supported_size() {
    // The row-band partition's solvability is load-bearing for the
    // generator's guarantee, so prove it exhaustively rather than assume.
    for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let regions = row_band_regions(n);
        let solution = PuzzleSolver::deterministic()
            .solve(n, &regions)
            .unwrap_or_else(|| panic!("row bands unsolvable for n = {n}"));
        assert!(solution.is_valid_for(n));
    }
}

#[test]
fn forced_fallback_generator_never_fails() {
    let config = GeneratorConfig {
        max_attempts: 0,
        max_fallback_attempts: 64,
    };
    let mut generator = Generator::with_config(config);
    for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        assert!(generator.generate(n).is_ok());
    }
}

#[test]
fn six_by_six_tap_scenario() {
    let mut generator = Generator::with_seed(2);
    let mut board = generator.generate(6).unwrap();
    let mut taps = TapTracker::new();

    // Single tap on the empty (0, 0): marker appears.
    assert_eq!(board.apply_tap(0, 0, 0, &mut taps), TapResult::MarkerPlaced);
    assert_eq!(board.cell(0, 0).state, CellState::Marker);

    // A second, slow tap clears it again.
    assert_eq!(
        board.apply_tap(0, 0, 1_000, &mut taps),
        TapResult::MarkerCleared
    );
    assert_eq!(board.cell(0, 0).state, CellState::Empty);

    // Two taps under 300 ms on a constraint-valid empty cell: queen.
    let target = board.solution().unwrap().positions()[0];
    assert!(can_place_queen(&board, target.row, target.col));
    let result = double_tap(&mut board, &mut taps, target.row, target.col, 5_000);
    assert!(matches!(result, TapResult::QueenPlaced | TapResult::Complete));
    assert_eq!(board.cell(target.row, target.col).state, CellState::Queen);

    // A single tap takes the queen off again.
    assert_eq!(
        board.apply_tap(target.row, target.col, 10_000, &mut taps),
        TapResult::QueenRemoved
    );
    assert_eq!(board.cell(target.row, target.col).state, CellState::Empty);
}

#[test]
fn solution_placement_completes_in_any_order() {
    let mut generator = Generator::with_seed(31);
    let mut board = generator.generate(7).unwrap();
    let mut taps = TapTracker::new();

    // Walk the solution back to front; order must not matter.
    let mut positions: Vec<_> = board.solution().unwrap().positions().to_vec();
    positions.reverse();

    let mut clock = 0u64;
    for (i, pos) in positions.iter().enumerate() {
        clock += 1_000;
        let result = double_tap(&mut board, &mut taps, pos.row, pos.col, clock);
        if i + 1 == positions.len() {
            assert_eq!(result, TapResult::Complete);
        } else {
            assert_eq!(result, TapResult::QueenPlaced);
        }
    }

    assert!(board.is_completed());
    assert_eq!(board.queens_placed(), 7);
    assert!(board.cells().all(|c| !c.is_conflict));
    assert!(board.regions().iter().all(|r| r.has_queen));
}

#[test]
fn endgame_hint_points_at_the_missing_cell() {
    let mut generator = Generator::with_seed(47);
    let mut board = generator.generate(6).unwrap();
    let mut taps = TapTracker::new();
    let mut hints = HintProvider::with_seed(48);
    let positions: Vec<_> = board.solution().unwrap().positions().to_vec();

    let mut clock = 0u64;
    for pos in &positions[..positions.len() - 1] {
        clock += 1_000;
        double_tap(&mut board, &mut taps, pos.row, pos.col, clock);
    }
    assert_eq!(board.queens_placed(), 5);

    // Only one solution cell is unoccupied, so the hint must name it.
    let last = positions[positions.len() - 1];
    assert_eq!(hints.request(&mut board, clock), Some(last));

    clock += 1_000;
    assert_eq!(
        double_tap(&mut board, &mut taps, last.row, last.col, clock),
        TapResult::Complete
    );

    // Completed puzzles yield no further hints.
    assert_eq!(hints.request(&mut board, clock), None);
}

#[test]
fn hint_quota_is_three_per_level() {
    let mut generator = Generator::with_seed(53);
    let mut board = generator.generate(6).unwrap();
    let mut hints = HintProvider::with_seed(54);

    for i in 0..MAX_HINTS {
        assert!(
            hints.request(&mut board, i as u64 * 10).is_some(),
            "hint {i} within quota"
        );
    }
    // Unplaced solution cells remain, but the quota is spent.
    assert!(board.queens_placed() < board.grid_size());
    assert_eq!(hints.request(&mut board, 1_000), None);
}

#[test]
fn reset_keeps_the_level_but_clears_play_state() {
    let mut generator = Generator::with_seed(61);
    let mut board = generator.generate(6).unwrap();
    let mut taps = TapTracker::new();
    let mut hints = HintProvider::with_seed(62);

    let target = board.solution().unwrap().positions()[0];
    double_tap(&mut board, &mut taps, target.row, target.col, 1_000);
    hints.request(&mut board, 2_000);

    let regions_before = board.regions().to_vec();
    let solution_before = board.solution().cloned();

    board.reset();
    taps.clear();

    assert_eq!(board.queens_placed(), 0);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.hints_used(), 0);
    assert!(board.cells().all(|c| c.state == CellState::Empty));
    assert_eq!(board.regions(), regions_before.as_slice());
    assert_eq!(board.solution().cloned(), solution_before);
}
