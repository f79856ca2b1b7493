//! Runs a configured batch of games.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{GameRng, RandomSource, SimConfig};
use crate::error::{ConfigError, SimError, SupplyError};
use crate::rules::{Game, GameOutcome};
use crate::strategy::StrategyKind;
use crate::supply::SupplyVariant;

use super::stats::SimStats;

/// Everything a run produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimReport {
    /// Seed of the `GameRng` used, when the runner created it.
    pub seed: Option<u64>,
    pub variant: SupplyVariant,
    pub seats: Vec<StrategyKind>,
    /// One entry per game, in play order.
    pub outcomes: Vec<GameOutcome>,
    pub stats: SimStats,
}

/// A validated batch of games.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run with a `GameRng` seeded from the config, or from the OS when no
    /// seed is set. The seed actually used is logged and reported.
    pub fn run(&self) -> Result<SimReport, SimError> {
        let mut rng = match self.config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "random seed");

        let mut report = self.run_with_rng(&mut rng)?;
        report.seed = Some(rng.seed());
        Ok(report)
    }

    /// Run every game on the given random source, never re-seeding it.
    pub fn run_with_rng<R: RandomSource>(&self, rng: &mut R) -> Result<SimReport, SimError> {
        let seats = self.config.lineup();
        let variant = self.config.variant;
        let mut outcomes = Vec::with_capacity(self.config.games as usize);

        for game in 1..=self.config.games {
            let outcome = play_one(&seats, variant, rng).map_err(|source| SimError::Supply { game, source })?;
            info!(
                game,
                winner = outcome.winner.0,
                strategy = %seats[outcome.winner.index()],
                rounds = outcome.rounds,
                "game finished"
            );
            outcomes.push(outcome);
        }

        let stats = SimStats::from_outcomes(seats.len(), &outcomes);
        debug!(win_counts = ?stats.win_counts, avg_rounds = stats.avg_rounds, "batch finished");
        Ok(SimReport {
            seed: None,
            variant,
            seats,
            outcomes,
            stats,
        })
    }
}

fn play_one<R: RandomSource>(
    seats: &[StrategyKind],
    variant: SupplyVariant,
    rng: &mut R,
) -> Result<GameOutcome, SupplyError> {
    let strategies = seats.iter().map(|kind| kind.build()).collect();
    let mut game = Game::new(strategies, variant, rng)?;
    game.play(rng)
}
