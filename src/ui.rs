#![cfg(feature = "std")]

use std::fmt::Display;

use crate::{grid::Grid, player_ai::AiPlayer};

/// Render a grid with column letters and 1-based row numbers.
pub fn format_grid<T: Copy + Display>(grid: &Grid<T>) -> String {
    let width = grid
        .iter()
        .map(|(_, v)| v.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::from("   ");
    for c in 0..grid.size() {
        let ch = (b'A' + c as u8) as char;
        out.push_str(&format!(" {:>width$}", ch, width = width));
    }
    out.push('\n');
    for r in 0..grid.size() {
        out.push_str(&format!("{:2} ", r + 1));
        for v in grid.row(r).unwrap_or_default() {
            out.push_str(&format!(" {:>width$}", v, width = width));
        }
        out.push('\n');
    }
    out
}

/// Print a titled grid to stdout.
pub fn print_grid<T: Copy + Display>(title: &str, grid: &Grid<T>) {
    println!("\n{}:", title);
    print!("{}", format_grid(grid));
}

/// Print the player's current view of the opponent board and both
/// scoring maps.
pub fn print_player_maps(player: &AiPlayer) {
    let grids = player.grids();
    print_grid("Opponent board", grids.cells());
    print_grid("Attack map", grids.attack());
    print_grid("Placement map", grids.placement_penalty());
    print_grid("Opponent shot histogram", grids.opponent_shots());
}
