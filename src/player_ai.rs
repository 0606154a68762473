use alloc::format;
use alloc::string::ToString;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    ai,
    board::GridStore,
    common::{AgentError, CellState, Point},
    config::{ADJACENCY_PENALTY, MAX_BOARD_SIZE, SHIP_NAME_PREFIX},
    hits::{HitChain, ShipLengths},
    player::Player,
    placer,
    protocol::{Event, PlacementRecord, ShotRecord},
};

/// Heuristic player: centre-weighted hunting, hit-chain targeting, and
/// placement that avoids where the opponent likes to shoot.
pub struct AiPlayer {
    round: u32,
    grids: GridStore,
    chain: HitChain,
    fleet: ShipLengths,
    ships_placed: usize,
    rng: SmallRng,
}

impl AiPlayer {
    /// Create a player for a `board_size`×`board_size` board using `rng`
    /// as its only source of randomness.
    pub fn new(board_size: usize, rng: SmallRng) -> Result<Self, AgentError> {
        if !(2..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(AgentError::InvalidBoardSize(board_size));
        }
        Ok(Self {
            round: 0,
            grids: GridStore::new(board_size)?,
            chain: HitChain::new(),
            fleet: ShipLengths::new(),
            ships_placed: 0,
            rng,
        })
    }

    /// Deterministic player seeded with `seed`.
    pub fn from_seed(board_size: usize, seed: u64) -> Result<Self, AgentError> {
        Self::new(board_size, SmallRng::seed_from_u64(seed))
    }

    /// Player seeded from the thread-local OS-backed generator.
    #[cfg(feature = "std")]
    pub fn from_entropy(board_size: usize) -> Result<Self, AgentError> {
        let mut seed_rng = rand::rng();
        Self::new(board_size, SmallRng::from_rng(&mut seed_rng))
    }

    pub fn board_size(&self) -> usize {
        self.grids.size()
    }

    /// Rounds started so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn grids(&self) -> &GridStore {
        &self.grids
    }

    pub fn hit_chain(&self) -> &HitChain {
        &self.chain
    }

    /// Lengths of our ships not yet matched to a kill.
    pub fn fleet(&self) -> &[usize] {
        self.fleet.as_slice()
    }

    /// The targeting state the next `get_move` will act on.
    pub fn target_state(&self) -> ai::TargetState {
        ai::TargetState::derive(&self.chain)
    }

    fn resolve_pending_kills(&mut self) -> Result<(), AgentError> {
        let kills = self.chain.take_kills();
        if kills == 0 {
            return Ok(());
        }
        match self.fleet.resolve_kills(kills) {
            Ok(len) => {
                log::debug!("sunk a ship of length {}", len);
                Ok(())
            }
            Err(e) => {
                log::warn!("{} (afloat: {:?})", e, self.fleet.as_slice());
                Err(e)
            }
        }
    }

    fn apply(&mut self, event: Event) -> Result<(), AgentError> {
        match event {
            Event::Hit(p) => {
                self.grids.mark(p, CellState::Hit)?;
                self.grids.attack_mut().add(p, 1)?;
                self.chain.push(p);
            }
            Event::Kill(p) => {
                self.grids.mark(p, CellState::Kill)?;
                ai::rule_out(self.grids.attack_mut(), p, self.fleet.as_slice())?;
                self.chain.record_kill(p);
            }
            Event::Miss(p) => {
                self.grids.mark(p, CellState::Miss)?;
                ai::rule_out(self.grids.attack_mut(), p, self.fleet.as_slice())?;
            }
            Event::OpponentShot(p) => self.grids.record_opponent_shot(p)?,
            Event::Win | Event::Lose | Event::Tie => {
                log::info!("round {} finished: {:?}", self.round, event);
            }
        }
        Ok(())
    }

    /// Reject an event before any of its side effects land.
    fn validate(&self, event: &Event) -> Result<(), AgentError> {
        let Some(p) = event.point() else {
            return Ok(());
        };
        if !self.grids.cells().contains(p) {
            return Err(AgentError::InvalidCoordinate {
                row: p.row,
                col: p.col,
            });
        }
        let revealed = match event {
            Event::Hit(_) => CellState::Hit,
            Event::Miss(_) => CellState::Miss,
            Event::Kill(_) => CellState::Kill,
            _ => return Ok(()),
        };
        self.grids.check_mark(p, revealed)
    }
}

impl Player for AiPlayer {
    fn new_round(&mut self) {
        self.round += 1;
        self.ships_placed = 0;
        self.chain.clear();
        self.fleet.clear();
        self.grids.reset_round();
        log::debug!("round {} started", self.round);
    }

    fn place_ship(&mut self, length: usize) -> Result<PlacementRecord, AgentError> {
        let placement = placer::choose_placement(&self.grids, length, self.round, &mut self.rng)?;
        placer::commit_placement(&mut self.grids, &placement, ADJACENCY_PENALTY)?;
        self.fleet.push(length);
        let name = format!("{}{}", SHIP_NAME_PREFIX, self.ships_placed);
        self.ships_placed += 1;
        Ok(PlacementRecord {
            row: placement.origin.row,
            col: placement.origin.col,
            name,
            orientation: placement.orientation,
            length,
        })
    }

    fn get_move(&mut self) -> Result<ShotRecord, AgentError> {
        let (shot, state) = ai::select_shot(&self.grids, &self.chain, &mut self.rng)?;
        Ok(ShotRecord {
            row: shot.row,
            col: shot.col,
            label: state.label().to_string(),
        })
    }

    fn update(&mut self, event: Event) -> Result<(), AgentError> {
        if let Err(e) = self.validate(&event) {
            log::warn!("rejecting {:?}: {}", event, e);
            return Err(e);
        }
        // A run of Kill cells describes one sunk ship; it is matched against
        // our fleet once the run ends.
        let resolution = if event.is_kill() {
            Ok(())
        } else {
            self.resolve_pending_kills()
        };
        self.apply(event)?;
        resolution
    }
}
