use crate::{
    common::AgentError,
    protocol::{Event, PlacementRecord, ShotRecord},
};

/// Interface the harness drives, one call at a time.
pub trait Player {
    /// Reset round-specific state before ships are placed.
    fn new_round(&mut self);

    /// Place one ship of `length` cells.
    fn place_ship(&mut self, length: usize) -> Result<PlacementRecord, AgentError>;

    /// Choose the next cell to fire at.
    fn get_move(&mut self) -> Result<ShotRecord, AgentError>;

    /// Inform the player of a shot outcome, an opponent shot, or the end of
    /// the round.
    fn update(&mut self, event: Event) -> Result<(), AgentError>;
}
