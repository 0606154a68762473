//! Typed records exchanged with the harness.

use alloc::string::String;

use crate::common::Point;
use crate::ship::Orientation;

/// Outcome notifications delivered to a player through `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// Our shot hit a ship that is still afloat.
    Hit(Point),
    /// This cell belongs to a ship our shot just sank. Sent once per cell.
    Kill(Point),
    /// Our shot landed in open water.
    Miss(Point),
    Win,
    Lose,
    Tie,
    /// The opponent fired at this cell of our board.
    OpponentShot(Point),
}

impl Event {
    /// Coordinate the event refers to, if any.
    pub fn point(&self) -> Option<Point> {
        match *self {
            Event::Hit(p) | Event::Kill(p) | Event::Miss(p) | Event::OpponentShot(p) => Some(p),
            Event::Win | Event::Lose | Event::Tie => None,
        }
    }

    pub fn is_kill(&self) -> bool {
        matches!(self, Event::Kill(_))
    }
}

/// Reply to `place_ship`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRecord {
    pub row: usize,
    pub col: usize,
    pub name: String,
    pub orientation: Orientation,
    pub length: usize,
}

impl PlacementRecord {
    pub fn origin(&self) -> Point {
        Point::new(self.row, self.col)
    }
}

/// Reply to `get_move`. The label is informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotRecord {
    pub row: usize,
    pub col: usize,
    pub label: String,
}

impl ShotRecord {
    pub fn target(&self) -> Point {
        Point::new(self.row, self.col)
    }
}
