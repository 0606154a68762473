#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
pub mod game;
mod grid;
mod hits;
#[cfg(feature = "std")]
mod logging;
mod placer;
mod player;
mod player_ai;
mod prior;
pub mod protocol;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::GridStore;
pub use common::*;
pub use config::*;
pub use game::{Fleet, MatchSummary, Referee, RefereeError, RoundOutcome, RoundReport};
pub use grid::{Grid, GridError};
pub use hits::{HitChain, ShipLengths};
#[cfg(feature = "std")]
pub use logging::{init_logging, LogFilters};
pub use placer::*;
pub use player::*;
pub use player_ai::*;
pub use prior::{prior_map, prior_weight};
pub use protocol::*;
pub use ship::*;
