//! Grids owned by the agent: what it knows about the opponent's board this
//! round, where its own fleet sits, and the two scoring maps rebuilt from
//! the opponent-shot histogram at the start of every round.

use crate::common::{AgentError, CellState, Point};
use crate::config::{ATTACK_SCALE, PLACEMENT_SCALE};
use crate::grid::Grid;
use crate::prior::prior_map;

/// All per-round and cross-round grids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridStore {
    size: usize,
    cells: Grid<CellState>,
    ships_placed: Grid<bool>,
    attack: Grid<i64>,
    opponent_shots: Grid<u32>,
    placement_penalty: Grid<i64>,
}

impl GridStore {
    /// Allocate every grid for a `size`×`size` board. The opponent-shot
    /// histogram starts at the prior so early rounds favour the centre.
    pub fn new(size: usize) -> Result<Self, AgentError> {
        let opponent_shots = prior_map(size)?;
        let mut store = GridStore {
            size,
            cells: Grid::filled(size, CellState::Water)?,
            ships_placed: Grid::filled(size, false)?,
            attack: Grid::zeroed(size)?,
            opponent_shots,
            placement_penalty: Grid::zeroed(size)?,
        };
        store.reset_round();
        Ok(store)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Clear the per-round grids and reseed both scoring maps from the
    /// histogram. The histogram itself is left untouched.
    pub fn reset_round(&mut self) {
        self.cells.fill(CellState::Water);
        self.ships_placed.fill(false);
        self.attack = self
            .opponent_shots
            .map(|n| ATTACK_SCALE * i64::from(n));
        self.placement_penalty = self
            .opponent_shots
            .map(|n| PLACEMENT_SCALE * i64::from(n));
    }

    pub fn cells(&self) -> &Grid<CellState> {
        &self.cells
    }

    pub fn ships_placed(&self) -> &Grid<bool> {
        &self.ships_placed
    }

    pub fn attack(&self) -> &Grid<i64> {
        &self.attack
    }

    pub fn opponent_shots(&self) -> &Grid<u32> {
        &self.opponent_shots
    }

    pub fn placement_penalty(&self) -> &Grid<i64> {
        &self.placement_penalty
    }

    pub fn cell(&self, p: Point) -> Result<CellState, AgentError> {
        Ok(self.cells.get(p)?)
    }

    /// Check that a shot at `p` may reveal `state` without touching the board.
    pub fn check_mark(&self, p: Point, state: CellState) -> Result<(), AgentError> {
        let current = self.cells.get(p)?;
        if current.can_become(state) {
            Ok(())
        } else {
            Err(AgentError::IllegalTransition {
                row: p.row,
                col: p.col,
                from: current,
                to: state,
            })
        }
    }

    /// Record what a shot at `p` revealed. A cell never moves backwards.
    pub fn mark(&mut self, p: Point, state: CellState) -> Result<(), AgentError> {
        self.check_mark(p, state)?;
        self.cells.set(p, state)?;
        Ok(())
    }

    pub(crate) fn attack_mut(&mut self) -> &mut Grid<i64> {
        &mut self.attack
    }

    pub(crate) fn ships_placed_mut(&mut self) -> &mut Grid<bool> {
        &mut self.ships_placed
    }

    pub(crate) fn placement_penalty_mut(&mut self) -> &mut Grid<i64> {
        &mut self.placement_penalty
    }

    /// Count one opponent shot at `p`.
    pub fn record_opponent_shot(&mut self, p: Point) -> Result<(), AgentError> {
        self.opponent_shots.add(p, 1)?;
        Ok(())
    }
}
