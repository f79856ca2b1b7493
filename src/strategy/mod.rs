//! Decision strategies.
//!
//! The engine consults a `Strategy` at fixed points of a turn. Every call gets
//! the read-only `Table`; what a strategy answers is either re-validated by
//! the engine (construction, targets) or taken at face value (dice choices).
//!
//! - `Simple`, `LowerRainbow`, `Punisher`: stateless bots built from a fixed
//!   build plan
//! - `Interactive`: asks a human over any reader/writer pair

pub mod bots;
pub mod interactive;

pub use bots::{BuildPlan, LowerRainbow, Pick, Punisher, Simple};
pub use interactive::Interactive;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{PlayerId, Roll, Table};

/// A decision policy for one seat.
///
/// Default methods decline every optional decision, which is what a bot that
/// never buys the relevant card would answer anyway.
pub trait Strategy {
    /// Display name, also used as the player's name.
    fn name(&self) -> &str;

    /// Roll two dice instead of one? Only asked when Train Station is built.
    fn choose_train_station(&mut self, _table: &Table) -> bool {
        false
    }

    /// Throw this roll away and roll again? Only asked when Radio Tower is built.
    fn choose_radio_tower(&mut self, _table: &Table, _roll: &Roll) -> bool {
        false
    }

    /// What to build this turn, if anything.
    fn choose_construction(&mut self, table: &Table) -> Option<CardId>;

    /// Opponent to take 5 coins from.
    fn choose_tv_station_target(&mut self, _table: &Table) -> Option<PlayerId> {
        None
    }

    /// Opponent and their establishment to take.
    fn choose_business_center_target(&mut self, _table: &Table) -> Option<(PlayerId, CardId)> {
        None
    }

    /// Own establishment to hand over in exchange.
    fn choose_business_center_swap(&mut self, _table: &Table) -> Option<CardId> {
        None
    }
}

/// Named strategies selectable from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Simple,
    Punisher,
    LowerRainbow,
    Human,
}

impl StrategyKind {
    /// Seat order used when no lineup is configured.
    pub const DEFAULT_LINEUP: [StrategyKind; 4] = [
        StrategyKind::Simple,
        StrategyKind::Punisher,
        StrategyKind::LowerRainbow,
        StrategyKind::Human,
    ];

    /// Instantiate the strategy. `Human` reads stdin and writes stdout.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Simple => Box::new(Simple),
            StrategyKind::Punisher => Box::new(Punisher),
            StrategyKind::LowerRainbow => Box::new(LowerRainbow),
            StrategyKind::Human => Box::new(Interactive::stdio()),
        }
    }

    /// Whether this strategy needs a person at the keyboard.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        self == StrategyKind::Human
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrategyKind::Simple => "Simple",
            StrategyKind::Punisher => "Punisher",
            StrategyKind::LowerRainbow => "LowerRainbow",
            StrategyKind::Human => "Human",
        };
        f.write_str(name)
    }
}
