//! A dynamically sized square grid.
//!
//! Every per-cell map the agent keeps is a `Grid<T>` whose side length is
//! the configured board size. All reads and writes go through one
//! bounds-checked index calculation, so an off-board coordinate surfaces
//! as an error instead of touching a neighbouring row.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;
use num_traits::{Num, Zero};

use crate::common::Point;

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid must have at least one row.
    ZeroSize,
    /// Row or column index is out of bounds [0..size).
    IndexOutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize => write!(f, "ZeroSize: grid side length must be positive"),
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `size`×`size` grid stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Grid {
            size,
            cells: vec![value; size * size],
        })
    }

    /// Build a grid by evaluating `f` at every coordinate.
    pub fn from_fn<F>(size: usize, mut f: F) -> Result<Self, GridError>
    where
        F: FnMut(Point) -> T,
    {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let cells = (0..size * size)
            .map(|idx| f(Point::new(idx / size, idx % size)))
            .collect();
        Ok(Grid { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true when `p` lies on the grid.
    pub fn contains(&self, p: Point) -> bool {
        p.row < self.size && p.col < self.size
    }

    #[inline]
    fn index_of(&self, p: Point) -> Result<usize, GridError> {
        if self.contains(p) {
            Ok(p.row * self.size + p.col)
        } else {
            Err(GridError::IndexOutOfBounds {
                row: p.row,
                col: p.col,
            })
        }
    }

    /// Gets the value at `p`.
    pub fn get(&self, p: Point) -> Result<T, GridError> {
        let idx = self.index_of(p)?;
        Ok(self.cells[idx])
    }

    /// Sets the value at `p`.
    pub fn set(&mut self, p: Point, value: T) -> Result<(), GridError> {
        let idx = self.index_of(p)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.iter_mut().for_each(|c| *c = value);
    }

    /// Produce a new grid of the same size by mapping each value.
    pub fn map<U: Copy, F: FnMut(T) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }

    /// Iterator over every coordinate in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = self.size;
        (0..size * size).map(move |idx| Point::new(idx / size, idx % size))
    }

    /// Iterator over `(coordinate, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, T)> + '_ {
        self.points().zip(self.cells.iter().copied())
    }

    /// One row of the grid as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.size).then(|| &self.cells[self.row_range(row)])
    }

    fn row_range(&self, row: usize) -> Range<usize> {
        row * self.size..(row + 1) * self.size
    }
}

impl<T: Copy + Zero> Grid<T> {
    /// Create a grid with every cell zero.
    pub fn zeroed(size: usize) -> Result<Self, GridError> {
        Self::filled(size, T::zero())
    }
}

impl<T: Copy + Num> Grid<T> {
    /// Add `delta` to the value at `p`.
    pub fn add(&mut self, p: Point, delta: T) -> Result<(), GridError> {
        let idx = self.index_of(p)?;
        self.cells[idx] = self.cells[idx] + delta;
        Ok(())
    }

    /// Subtract `delta` from the value at `p`.
    pub fn sub(&mut self, p: Point, delta: T) -> Result<(), GridError> {
        let idx = self.index_of(p)?;
        self.cells[idx] = self.cells[idx] - delta;
        Ok(())
    }

    /// Sum of the values at every coordinate yielded by `points`.
    pub fn sum_over<I>(&self, points: I) -> Result<T, GridError>
    where
        I: IntoIterator<Item = Point>,
    {
        points
            .into_iter()
            .try_fold(T::zero(), |acc, p| Ok(acc + self.get(p)?))
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", self.size)?;
        for r in 0..self.size {
            for v in &self.cells[self.row_range(r)] {
                write!(f, "{:?} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(1);
        for r in 0..self.size {
            for (c, v) in self.cells[self.row_range(r)].iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", v, width = width)?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
