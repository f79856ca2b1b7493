//! Core types: players, table state, dice, randomness, configuration.
//!
//! Everything here is independent of the turn rules. The `rules` module
//! drives these types; strategies read them.

pub mod config;
pub mod player;
pub mod rng;
pub mod roll;
pub mod state;

pub use config::{SimConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Player, PlayerId, STARTING_MONEY};
pub use rng::{GameRng, RandomSource, ScriptedRng, DIE_FACES};
pub use roll::Roll;
pub use state::Table;
