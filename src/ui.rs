#![cfg(feature = "std")]
//! Text rendering of grids for the terminal front-end.

use crate::common::ShotResult;
use crate::grid::{CellState, Grid};
use crate::position::Position;

fn symbol(grid: &Grid, p: Position) -> char {
    match grid.cell(p).unwrap_or(CellState::Empty) {
        CellState::Hit => 'X',
        CellState::Miss => '.',
        // a concealed grid shows everything else as open water
        _ if grid.concealed() => 'O',
        CellState::Occupied => '■',
        CellState::Buffer => '.',
        CellState::Empty => 'O',
    }
}

/// Render a grid as the numbered board layout, one row per line.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from("  |");
    for col in 0..grid.size() {
        out.push_str(&format!(" {} |", col + 1));
    }
    for row in 0..grid.size() {
        out.push_str(&format!("\n{} |", row + 1));
        for col in 0..grid.size() {
            out.push_str(&format!(" {} |", symbol(grid, Position::new(row, col))));
        }
    }
    out.push('\n');
    out
}

/// One-line description of a shot result.
pub fn describe_shot(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "Miss!",
        ShotResult::Hit => "Vessel damaged!",
        ShotResult::Sunk => "Vessel destroyed!",
    }
}
