//! Run configuration.
//!
//! `SimConfig` is everything the runner needs to play a batch of games. It is
//! validated once, up front; the engine assumes it receives valid parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::strategy::StrategyKind;
use crate::supply::SupplyVariant;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Parameters for a batch of simulated games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of games to play.
    pub games: u32,

    /// Players per game (2-4).
    pub player_count: usize,

    /// Market layout.
    pub variant: SupplyVariant,

    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,

    /// Strategy per seat. Empty means the default lineup.
    pub seats: Vec<StrategyKind>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1,
            player_count: MAX_PLAYERS,
            variant: SupplyVariant::Default,
            seed: None,
            seats: Vec::new(),
        }
    }
}

impl SimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: SupplyVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_seats(mut self, seats: impl IntoIterator<Item = StrategyKind>) -> Self {
        self.seats = seats.into_iter().collect();
        self
    }

    /// Check every parameter before any game is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: self.player_count,
            });
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        self.variant.validate()?;
        if !self.seats.is_empty() && self.seats.len() != self.player_count {
            return Err(ConfigError::SeatCount {
                expected: self.player_count,
                got: self.seats.len(),
            });
        }
        Ok(())
    }

    /// Strategy for each seat: the configured seats, or the first
    /// `player_count` entries of the default lineup.
    #[must_use]
    pub fn lineup(&self) -> Vec<StrategyKind> {
        if self.seats.is_empty() {
            StrategyKind::DEFAULT_LINEUP
                .iter()
                .copied()
                .take(self.player_count)
                .collect()
        } else {
            self.seats.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert_eq!(config.games, 1);
        assert_eq!(config.player_count, 4);
        assert_eq!(config.variant, SupplyVariant::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_count_bounds() {
        for n in [0, 1, 5] {
            let err = SimConfig::new().with_players(n).validate().unwrap_err();
            assert_eq!(err, ConfigError::PlayerCount { min: 2, max: 4, got: n });
        }
        for n in 2..=4 {
            assert!(SimConfig::new().with_players(n).validate().is_ok());
        }
    }

    #[test]
    fn test_zero_games_rejected() {
        assert_eq!(SimConfig::new().with_games(0).validate(), Err(ConfigError::NoGames));
    }

    #[test]
    fn test_pile_count_rejected() {
        let config = SimConfig::new().with_variant(SupplyVariant::LimitedPiles(0));
        assert_eq!(config.validate(), Err(ConfigError::PileCount { max: 15, got: 0 }));
    }

    #[test]
    fn test_seat_count_must_match() {
        let config = SimConfig::new()
            .with_players(3)
            .with_seats([StrategyKind::Simple, StrategyKind::Punisher]);
        assert_eq!(config.validate(), Err(ConfigError::SeatCount { expected: 3, got: 2 }));
    }

    #[test]
    fn test_lineup() {
        let config = SimConfig::new().with_players(3);
        assert_eq!(
            config.lineup(),
            vec![StrategyKind::Simple, StrategyKind::Punisher, StrategyKind::LowerRainbow]
        );

        let config = SimConfig::new()
            .with_players(2)
            .with_seats([StrategyKind::Punisher, StrategyKind::Punisher]);
        assert_eq!(config.lineup(), vec![StrategyKind::Punisher, StrategyKind::Punisher]);
    }

    #[test]
    fn test_config_serialization() {
        let config = SimConfig::new().with_seed(9).with_variant(SupplyVariant::UNIQUE_8);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
