//! Common types for the agent: coordinates, cell states and errors.

use crate::grid::GridError;
use core::fmt;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move `steps` times by (`d_row`, `d_col`), returning `None` once the
    /// walk leaves a `size`×`size` board.
    pub fn offset(self, d_row: isize, d_col: isize, steps: usize, size: usize) -> Option<Point> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row as isize + d_row * steps;
        let col = self.col as isize + d_col * steps;
        if row < 0 || col < 0 || row as usize >= size || col as usize >= size {
            return None;
        }
        Some(Point::new(row as usize, col as usize))
    }

    /// The up-to-four orthogonal neighbours that lie on the board.
    pub fn neighbours(self, size: usize) -> impl Iterator<Item = Point> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc, 1, size))
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Point::new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// What the agent knows about a cell of the opponent's board this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Water,
    Hit,
    Miss,
    Kill,
}

impl CellState {
    /// Whether a shot outcome may move a cell from `self` to `next`.
    /// Water resolves once, and only a hit can later be sunk.
    pub fn can_become(self, next: CellState) -> bool {
        matches!(
            (self, next),
            (CellState::Water, CellState::Hit | CellState::Miss | CellState::Kill)
                | (CellState::Hit, CellState::Kill)
        )
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            CellState::Water => "~",
            CellState::Hit => "X",
            CellState::Miss => "o",
            CellState::Kill => "#",
        };
        f.pad(symbol)
    }
}

/// Errors returned by the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// Underlying grid error.
    Grid(GridError),
    /// Row or column outside `[0, board_size)`.
    InvalidCoordinate { row: usize, col: usize },
    /// Board size below 2 or above the supported maximum.
    InvalidBoardSize(usize),
    /// Requested ship length is zero or longer than the board.
    InvalidShipLength(usize),
    /// No placement of the requested length fits on the board.
    NoLegalPlacement { length: usize },
    /// Weighted sampling was asked to draw from zero total weight.
    EmptyCandidatePool,
    /// Accumulated kills did not match any alive ship length.
    InconsistentKillResolution { kills: usize },
    /// A shot outcome would move an already resolved cell to `to`.
    IllegalTransition {
        row: usize,
        col: usize,
        from: CellState,
        to: CellState,
    },
}

impl From<GridError> for AgentError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::IndexOutOfBounds { row, col } => AgentError::InvalidCoordinate { row, col },
            other => AgentError::Grid(other),
        }
    }
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Grid(e) => write!(f, "Grid error: {}", e),
            AgentError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            AgentError::InvalidBoardSize(size) => write!(f, "Unsupported board size {}", size),
            AgentError::InvalidShipLength(len) => write!(f, "Unsupported ship length {}", len),
            AgentError::NoLegalPlacement { length } => {
                write!(f, "No legal placement for a ship of length {}", length)
            }
            AgentError::EmptyCandidatePool => write!(f, "Candidate pool has no weight to sample"),
            AgentError::InconsistentKillResolution { kills } => {
                write!(f, "{} kills do not match any remaining ship length", kills)
            }
            AgentError::IllegalTransition { row, col, from, to } => write!(
                f,
                "Cell ({}, {}) cannot go from {:?} to {:?}",
                row, col, from, to
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AgentError {}
