//! # machi-koro-sim
//!
//! A turn engine for the Machi Koro board game, built for pitting automated
//! decision strategies against each other over many games.
//!
//! ## Modules
//!
//! - `cards`: the fixed card catalog (costs, categories, deck counts)
//! - `supply`: the shared market, in full-deck or limited-piles layout
//! - `core`: players, table state, dice, randomness, run configuration
//! - `strategy`: the decision trait, the built-in bots, and a human seat
//! - `rules`: payout tables and the phase-by-phase turn engine
//! - `sim`: batch runner and win/length statistics
//!
//! ## Example
//!
//! ```
//! use machi_koro_sim::core::GameRng;
//! use machi_koro_sim::rules::Game;
//! use machi_koro_sim::strategy::{Punisher, Simple, Strategy};
//! use machi_koro_sim::supply::SupplyVariant;
//!
//! let mut rng = GameRng::new(7);
//! let seats: Vec<Box<dyn Strategy>> = vec![Box::new(Simple), Box::new(Punisher)];
//! let mut game = Game::new(seats, SupplyVariant::Default, &mut rng).unwrap();
//! let outcome = game.play(&mut rng).unwrap();
//! assert!(outcome.winner.index() < 2);
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;
pub mod sim;
pub mod strategy;
pub mod supply;

pub use crate::cards::{CardCatalog, CardCategory, CardId};
pub use crate::core::{GameRng, Player, PlayerId, RandomSource, Roll, ScriptedRng, SimConfig, Table};
pub use crate::error::{ConfigError, SimError, SupplyError};
pub use crate::rules::{Game, GameOutcome, TurnReport};
pub use crate::sim::{SimReport, SimStats, Simulation};
pub use crate::strategy::{Strategy, StrategyKind};
pub use crate::supply::{Supply, SupplyVariant};
