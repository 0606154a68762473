// Shot selection: a hunt/target state machine over the agent's grids.
// The state is derived from the hit queue on every call, never stored.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::GridStore,
    common::{AgentError, CellState, Point},
    grid::Grid,
    hits::HitChain,
    ship::Orientation,
};

/// Where the selector is in the hunt/target cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// No unresolved hits: shoot the best-scoring open water.
    Hunt,
    /// A hit with no known direction: try its neighbours.
    TargetSingle { origin: Point },
    /// The last two hits line up: extend the line at either end.
    TargetLine { latest: Point, axis: Orientation },
}

impl TargetState {
    /// Derive the state from the current hit queue.
    pub fn derive(chain: &HitChain) -> TargetState {
        if let Some((prev, latest)) = chain.latest_pair() {
            if let Some(axis) = Orientation::between(prev, latest) {
                return TargetState::TargetLine { latest, axis };
            }
        }
        match chain.latest() {
            Some(origin) => TargetState::TargetSingle { origin },
            None => TargetState::Hunt,
        }
    }

    /// Short tag attached to outgoing shots.
    pub fn label(&self) -> &'static str {
        match self {
            TargetState::Hunt => "hunt",
            TargetState::TargetSingle { .. } => "flank",
            TargetState::TargetLine { .. } => "extend",
        }
    }
}

/// Walk from `from` in steps of (`d_row`, `d_col`), skipping `Hit` cells.
/// Returns the first `Water` cell, or `None` on reaching the edge or any
/// other state.
pub fn open_end(
    cells: &Grid<CellState>,
    from: Point,
    d_row: isize,
    d_col: isize,
) -> Option<Point> {
    let size = cells.size();
    let mut steps = 1;
    while let Some(p) = from.offset(d_row, d_col, steps, size) {
        match cells.get(p).ok()? {
            CellState::Water => return Some(p),
            CellState::Hit => steps += 1,
            CellState::Miss | CellState::Kill => return None,
        }
    }
    None
}

/// Open water among the orthogonal neighbours of `origin`.
pub fn open_neighbours(cells: &Grid<CellState>, origin: Point) -> Vec<Point> {
    origin
        .neighbours(cells.size())
        .filter(|&n| cells.get(n) == Ok(CellState::Water))
        .collect()
}

/// Open water cells tied for the highest attack score.
pub fn hunt_candidates(grids: &GridStore) -> Vec<Point> {
    let cells = grids.cells();
    let mut best = i64::MIN;
    let mut out = Vec::new();
    for (p, score) in grids.attack().iter() {
        if cells.get(p) != Ok(CellState::Water) {
            continue;
        }
        if score > best {
            best = score;
            out.clear();
        }
        if score == best {
            out.push(p);
        }
    }
    out
}

/// Candidate shots for `state`. Target states that run out of options
/// fall back to hunting.
pub fn candidates(state: TargetState, grids: &GridStore) -> Vec<Point> {
    let cells = grids.cells();
    let targeted = match state {
        TargetState::Hunt => Vec::new(),
        TargetState::TargetSingle { origin } => open_neighbours(cells, origin),
        TargetState::TargetLine { latest, axis } => {
            let (dr, dc) = axis.step();
            let ends: Vec<Point> = [open_end(cells, latest, dr, dc), open_end(cells, latest, -dr, -dc)]
                .into_iter()
                .flatten()
                .collect();
            if ends.is_empty() {
                open_neighbours(cells, latest)
            } else {
                ends
            }
        }
    };
    if targeted.is_empty() {
        hunt_candidates(grids)
    } else {
        targeted
    }
}

/// Pick the next shot uniformly from the candidates of the current state.
pub fn select_shot<R: Rng + ?Sized>(
    grids: &GridStore,
    chain: &HitChain,
    rng: &mut R,
) -> Result<(Point, TargetState), AgentError> {
    let state = TargetState::derive(chain);
    let pool = candidates(state, grids);
    if pool.is_empty() {
        return Err(AgentError::EmptyCandidatePool);
    }
    let shot = pool[rng.random_range(0..pool.len())];
    log::debug!("{:?}: {} candidates, chose {}", state, pool.len(), shot);
    Ok((shot, state))
}

/// Lower the attack score at cells a ship of each remaining length could
/// no longer cover through `p`: every cell `1..len` away along both axes.
pub fn rule_out(attack: &mut Grid<i64>, p: Point, lengths: &[usize]) -> Result<(), AgentError> {
    let size = attack.size();
    for &len in lengths {
        for dist in 1..len {
            for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(q) = p.offset(dr, dc, dist, size) {
                    attack.sub(q, 1)?;
                }
            }
        }
    }
    Ok(())
}
