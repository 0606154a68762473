//! Ship placements: a straight run of cells from an origin.

use alloc::vec::Vec;

use crate::common::Point;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step `(d_row, d_col)` along the ship.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    pub fn other(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Orientation of the line through `a` and `b`, if they share a row or
    /// column.
    pub fn between(a: Point, b: Point) -> Option<Orientation> {
        if a == b {
            None
        } else if a.row == b.row {
            Some(Orientation::Horizontal)
        } else if a.col == b.col {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}

/// A ship of `length` cells starting at `origin` (its top/left cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Point,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(origin: Point, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
        }
    }

    /// Whether the whole run lies on a `size`×`size` board.
    pub fn fits(&self, size: usize) -> bool {
        let (row_span, col_span) = match self.orientation {
            Orientation::Horizontal => (1, self.length),
            Orientation::Vertical => (self.length, 1),
        };
        let within = |start: usize, span: usize| start < size && span <= size - start;
        self.length > 0 && within(self.origin.row, row_span) && within(self.origin.col, col_span)
    }

    /// Cells the ship occupies, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let (dr, dc) = self.orientation.step();
        let origin = self.origin;
        (0..self.length).map(move |i| Point::new(origin.row + i * dr as usize, origin.col + i * dc as usize))
    }

    pub fn contains(&self, p: Point) -> bool {
        self.cells().any(|c| c == p)
    }

    /// On-board cells orthogonally adjacent to the ship: both flanks along
    /// its length and one cell past each end.
    pub fn surrounding(&self, size: usize) -> Vec<Point> {
        let mut out = Vec::with_capacity(2 * self.length + 2);
        for cell in self.cells() {
            for n in cell.neighbours(size) {
                if !self.contains(n) && !out.contains(&n) {
                    out.push(n);
                }
            }
        }
        out
    }
}

/// A legal placement together with its sampling score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub placement: Placement,
    pub score: f64,
}
