//! Aggregate statistics over finished games.

use serde::{Deserialize, Serialize};

use crate::rules::GameOutcome;

/// Wins per seat and game length over a batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimStats {
    pub games: usize,
    /// Indexed by seat.
    pub win_counts: Vec<u32>,
    pub avg_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
}

impl SimStats {
    /// Summarize `outcomes` for a table of `player_count` seats.
    ///
    /// Round figures are zero when there are no outcomes.
    #[must_use]
    pub fn from_outcomes(player_count: usize, outcomes: &[GameOutcome]) -> Self {
        let mut win_counts = vec![0; player_count];
        for outcome in outcomes {
            if let Some(wins) = win_counts.get_mut(outcome.winner.index()) {
                *wins += 1;
            }
        }

        let rounds = outcomes.iter().map(|o| o.rounds);
        let total: u64 = rounds.clone().map(u64::from).sum();
        let avg_rounds = if outcomes.is_empty() {
            0.0
        } else {
            total as f64 / outcomes.len() as f64
        };

        Self {
            games: outcomes.len(),
            win_counts,
            avg_rounds,
            min_rounds: rounds.clone().min().unwrap_or(0),
            max_rounds: rounds.max().unwrap_or(0),
        }
    }

    /// Fraction of games won by `seat`.
    #[must_use]
    pub fn win_rate(&self, seat: usize) -> f64 {
        match (self.win_counts.get(seat), self.games) {
            (Some(&wins), games) if games > 0 => f64::from(wins) / games as f64,
            _ => 0.0,
        }
    }
}

impl std::fmt::Display for SimStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wins: Vec<String> = self.win_counts.iter().map(u32::to_string).collect();
        writeln!(f, "*** Win counts: {}", wins.join(" vs. "))?;
        write!(
            f,
            "*** Turns: avg/min/max: {}/{}/{}",
            self.avg_rounds, self.min_rounds, self.max_rounds
        )
    }
}
