//! Basic example of using the Queens engine.

use queens_core::{CellState, Generator, HintProvider, TapTracker};

fn main() {
    env_logger::init();

    println!("Generating a 6x6 level...\n");
    let mut generator = Generator::new();
    let mut board = match generator.generate(6) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return;
        }
    };

    println!("Region map:");
    for row in 0..board.grid_size() {
        for col in 0..board.grid_size() {
            let id = board.cell(row, col).region_id;
            print!("{}", (b'A' + id as u8) as char);
        }
        println!();
    }

    let Some(solution) = board.solution().cloned() else {
        eprintln!("generated board is missing its solution");
        return;
    };
    println!("\nSolution positions:");
    for pos in solution.positions() {
        println!("  ({}, {})", pos.row, pos.col);
    }

    // Play the first two solution queens the way a UI would: a quick pair
    // of taps on each cell.
    let mut taps = TapTracker::new();
    let mut clock = 0u64;
    for pos in &solution.positions()[..2] {
        clock += 1_000;
        board.apply_tap(pos.row, pos.col, clock, &mut taps);
        board.apply_tap(pos.row, pos.col, clock + 100, &mut taps);
    }
    println!(
        "\nAfter two placements: {} queens, {} moves",
        board.queens_placed(),
        board.move_count()
    );

    // Ask for a hint on what remains.
    let mut hints = HintProvider::new();
    if let Some(pick) = hints.request(&mut board, clock) {
        println!("Hint: try ({}, {})", pick.row, pick.col);
    }

    println!("\nBoard:");
    for row in 0..board.grid_size() {
        for col in 0..board.grid_size() {
            let glyph = match board.cell(row, col).state {
                CellState::Empty => '.',
                CellState::Marker => 'x',
                CellState::Queen => 'Q',
            };
            print!("{glyph}");
        }
        println!();
    }
}
