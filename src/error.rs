//! Error types.
//!
//! Only two things can go wrong once a run is under way: the limited-piles
//! market runs out of cards while it still owes a replacement pile, or the
//! caller handed over a configuration that was never valid. Everything a
//! strategy gets wrong is absorbed by the engine instead of surfacing here.

use thiserror::Error;

/// Failures of the market engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SupplyError {
    /// The draw queue emptied while a closed pile still needed a replacement.
    #[error("draw deck exhausted with {open_piles} piles open (target {target_piles})")]
    DeckExhausted {
        open_piles: usize,
        target_piles: usize,
    },
}

/// Rejected run parameters. Raised before any game is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max}, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },

    #[error("at least one game must be played")]
    NoGames,

    #[error("pile count must be between 1 and {max}, got {got}")]
    PileCount { max: usize, got: usize },

    #[error("{got} seats given for {expected} players")]
    SeatCount { expected: usize, got: usize },

    #[error("unknown supply variant `{0}` (expected default, unique10 or unique8)")]
    UnknownVariant(String),
}

/// Anything the simulation runner can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("game {game} aborted: {source}")]
    Supply {
        game: u32,
        #[source]
        source: SupplyError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SupplyError::DeckExhausted { open_piles: 9, target_piles: 10 };
        assert_eq!(err.to_string(), "draw deck exhausted with 9 piles open (target 10)");

        let err = ConfigError::PlayerCount { min: 2, max: 4, got: 5 };
        assert_eq!(err.to_string(), "player count must be between 2 and 4, got 5");

        let err = SimError::Supply {
            game: 3,
            source: SupplyError::DeckExhausted { open_piles: 7, target_piles: 8 },
        };
        assert!(err.to_string().starts_with("game 3 aborted"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: SimError = ConfigError::NoGames.into();
        assert_eq!(err, SimError::Config(ConfigError::NoGames));
    }
}
