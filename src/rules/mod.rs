//! Turn rules.
//!
//! `income` holds the pure payout tables; `engine` runs the phase sequence
//! over a `Table` and asks each seat's `Strategy` for decisions.

pub mod engine;
pub mod income;

pub use engine::{Game, GameOutcome, TurnReport, STADIUM_TAKE, TV_STATION_TAKE};
