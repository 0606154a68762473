//! Static "closer to the centre" weighting used to seed the agent's maps.
//!
//! Corners score 2, the rest of the border 3, and each ring further in
//! scores one more than the ring outside it. On odd boards the single
//! centre cell scores `size / 2 + 2`.

use crate::common::Point;
use crate::grid::{Grid, GridError};

/// Prior weight of (`row`, `col`) on a `board_size`×`board_size` board.
///
/// Coordinates are assumed to lie on the board.
pub fn prior_weight(board_size: usize, row: usize, col: usize) -> u32 {
    let edge = board_size.saturating_sub(1);
    if board_size % 2 == 1 && row == board_size / 2 && col == board_size / 2 {
        return (board_size / 2 + 2) as u32;
    }
    let ring = row.min(col).min(edge - row).min(edge - col);
    if ring > 0 {
        return ring as u32 + 3;
    }
    let on_row_edge = row == 0 || row == edge;
    let on_col_edge = col == 0 || col == edge;
    if on_row_edge && on_col_edge {
        2
    } else {
        3
    }
}

/// The prior for every cell of a board.
pub fn prior_map(board_size: usize) -> Result<Grid<u32>, GridError> {
    Grid::from_fn(board_size, |Point { row, col }| {
        prior_weight(board_size, row, col)
    })
}
