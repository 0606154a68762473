//! In-process referee: holds each side's fleet, resolves shots, and drives
//! two players through rounds the way the tournament harness does.

use alloc::vec::Vec;
use core::fmt;

use crate::{
    common::{AgentError, Point},
    grid::Grid,
    player::Player,
    protocol::{Event, PlacementRecord},
    ship::Placement,
};

/// Errors raised while refereeing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    /// A player reported an error.
    Player { seat: usize, error: AgentError },
    /// Placement extends past the board edge.
    ShipOutOfBounds,
    /// Placement overlaps a ship already placed.
    ShipOverlaps,
    /// Player placed a ship of a different length than requested.
    LengthMismatch { requested: usize, placed: usize },
    /// Player fired off the board.
    ShotOutOfBounds(Point),
}

impl fmt::Display for RefereeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefereeError::Player { seat, error } => write!(f, "Player {}: {}", seat + 1, error),
            RefereeError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            RefereeError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            RefereeError::LengthMismatch { requested, placed } => {
                write!(f, "Requested a ship of length {}, got {}", requested, placed)
            }
            RefereeError::ShotOutOfBounds(p) => write!(f, "Shot at {} is off the board", p),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RefereeError {}

#[derive(Clone, Debug)]
struct PlacedShip {
    placement: Placement,
    hits: usize,
}

impl PlacedShip {
    fn is_sunk(&self) -> bool {
        self.hits >= self.placement.length
    }
}

/// One side's ships for a round.
#[derive(Clone, Debug)]
pub struct Fleet {
    ships: Vec<PlacedShip>,
    occupancy: Grid<Option<usize>>,
    shot: Grid<bool>,
}

impl Fleet {
    pub fn new(size: usize) -> Result<Self, AgentError> {
        Ok(Fleet {
            ships: Vec::new(),
            occupancy: Grid::filled(size, None)?,
            shot: Grid::filled(size, false)?,
        })
    }

    /// Add a ship from a player's placement reply.
    pub fn place(&mut self, record: &PlacementRecord) -> Result<(), RefereeError> {
        let placement = Placement::new(record.origin(), record.length, record.orientation);
        if !placement.fits(self.occupancy.size()) {
            return Err(RefereeError::ShipOutOfBounds);
        }
        if placement
            .cells()
            .any(|c| !matches!(self.occupancy.get(c), Ok(None)))
        {
            return Err(RefereeError::ShipOverlaps);
        }
        let idx = self.ships.len();
        for cell in placement.cells() {
            self.occupancy
                .set(cell, Some(idx))
                .map_err(|_| RefereeError::ShipOutOfBounds)?;
        }
        self.ships.push(PlacedShip { placement, hits: 0 });
        Ok(())
    }

    /// Cells covered by any ship.
    pub fn occupied(&self) -> impl Iterator<Item = Point> + '_ {
        self.occupancy
            .iter()
            .filter_map(|(p, slot)| slot.map(|_| p))
    }

    /// Resolve a shot at `p`, returning the events for the shooter. Sinking
    /// a ship reports `Kill` for every one of its cells. Repeat shots are
    /// misses.
    pub fn fire(&mut self, p: Point) -> Result<Vec<Event>, RefereeError> {
        let already = self.shot.get(p).map_err(|_| RefereeError::ShotOutOfBounds(p))?;
        let slot = self
            .occupancy
            .get(p)
            .map_err(|_| RefereeError::ShotOutOfBounds(p))?;
        let _ = self.shot.set(p, true);
        let idx = match slot {
            Some(idx) if !already => idx,
            _ => return Ok(alloc::vec![Event::Miss(p)]),
        };
        let ship = &mut self.ships[idx];
        ship.hits += 1;
        if ship.is_sunk() {
            Ok(ship.placement.cells().map(Event::Kill).collect())
        } else {
            Ok(alloc::vec![Event::Hit(p)])
        }
    }

    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(PlacedShip::is_sunk)
    }
}

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum RoundOutcome {
    Won { seat: usize },
    Tie,
}

/// Summary of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub shots: [usize; 2],
}

/// Totals over a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub rounds: usize,
    pub wins: [usize; 2],
    pub ties: usize,
    pub shots: [usize; 2],
}

impl MatchSummary {
    fn record(&mut self, report: &RoundReport) {
        self.rounds += 1;
        match report.outcome {
            RoundOutcome::Won { seat } => self.wins[seat] += 1,
            RoundOutcome::Tie => self.ties += 1,
        }
        self.shots[0] += report.shots[0];
        self.shots[1] += report.shots[1];
    }
}

fn notify(player: &mut dyn Player, seat: usize, event: Event) -> Result<(), RefereeError> {
    player
        .update(event)
        .map_err(|error| RefereeError::Player { seat, error })
}

/// Drives two players through rounds on a square board.
#[derive(Debug, Clone)]
pub struct Referee {
    board_size: usize,
    fleet: Vec<usize>,
    max_shots: usize,
}

impl Referee {
    /// Referee for `board_size` boards asking for ships of `fleet` lengths.
    /// Each side may fire at most `board_size²` shots per round.
    pub fn new(board_size: usize, fleet: &[usize]) -> Self {
        Self {
            board_size,
            fleet: fleet.to_vec(),
            max_shots: board_size * board_size,
        }
    }

    /// Override the per-side shot limit after which the round is a tie.
    pub fn with_max_shots(mut self, max_shots: usize) -> Self {
        self.max_shots = max_shots;
        self
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    fn place_fleet(&self, seat: usize, player: &mut dyn Player) -> Result<Fleet, RefereeError> {
        let mut fleet = Fleet::new(self.board_size).map_err(|error| RefereeError::Player { seat, error })?;
        for &length in &self.fleet {
            let record = player
                .place_ship(length)
                .map_err(|error| RefereeError::Player { seat, error })?;
            if record.length != length {
                return Err(RefereeError::LengthMismatch {
                    requested: length,
                    placed: record.length,
                });
            }
            fleet.place(&record)?;
        }
        Ok(fleet)
    }

    /// Play one round. `first` picks which seat shoots first. Seats take
    /// strict turns, so the first shooter reaches the shot limit first and
    /// the round ties as soon as the other seat has fired its last shot.
    pub fn play_round(
        &self,
        mut players: [&mut dyn Player; 2],
        first: usize,
    ) -> Result<RoundReport, RefereeError> {
        for p in players.iter_mut() {
            p.new_round();
        }
        let mut fleets = [
            self.place_fleet(0, &mut *players[0])?,
            self.place_fleet(1, &mut *players[1])?,
        ];

        let mut shots = [0usize; 2];
        let mut shooter = first % 2;
        loop {
            if shots[0] >= self.max_shots && shots[1] >= self.max_shots {
                notify(&mut *players[0], 0, Event::Tie)?;
                notify(&mut *players[1], 1, Event::Tie)?;
                log::info!("round tied after {:?} shots", shots);
                return Ok(RoundReport {
                    outcome: RoundOutcome::Tie,
                    shots,
                });
            }
            let target = 1 - shooter;
            let shot = players[shooter]
                .get_move()
                .map_err(|error| RefereeError::Player { seat: shooter, error })?
                .target();
            shots[shooter] += 1;
            for event in fleets[target].fire(shot)? {
                notify(&mut *players[shooter], shooter, event)?;
            }
            notify(&mut *players[target], target, Event::OpponentShot(shot))?;
            if fleets[target].all_sunk() {
                notify(&mut *players[shooter], shooter, Event::Win)?;
                notify(&mut *players[target], target, Event::Lose)?;
                log::info!("seat {} won after {:?} shots", shooter + 1, shots);
                return Ok(RoundReport {
                    outcome: RoundOutcome::Won { seat: shooter },
                    shots,
                });
            }
            shooter = target;
        }
    }

    /// Play `rounds` rounds, alternating who shoots first.
    pub fn play_match(
        &self,
        first: &mut dyn Player,
        second: &mut dyn Player,
        rounds: usize,
    ) -> Result<MatchSummary, RefereeError> {
        let mut summary = MatchSummary::default();
        for round in 0..rounds {
            let report = self.play_round([&mut *first, &mut *second], round)?;
            summary.record(&report);
        }
        Ok(summary)
    }
}
