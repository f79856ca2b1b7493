//! Batch runs through the public runner.

use machi_koro_sim::core::{GameRng, SimConfig};
use machi_koro_sim::error::{SimError, SupplyError};
use machi_koro_sim::sim::Simulation;
use machi_koro_sim::strategy::StrategyKind;
use machi_koro_sim::supply::SupplyVariant;

use StrategyKind::*;

fn config(seats: &[StrategyKind]) -> SimConfig {
    SimConfig::new()
        .with_players(seats.len())
        .with_seats(seats.iter().copied())
}

#[test]
fn test_same_seed_same_report() {
    let sim = Simulation::new(config(&[Simple, Punisher, LowerRainbow]).with_games(10).with_seed(2024)).unwrap();
    let first = sim.run().unwrap();
    let second = sim.run().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.seed, Some(2024));
}

#[test]
fn test_shared_rng_is_not_reseeded_between_games() {
    let sim = Simulation::new(config(&[Simple, Punisher]).with_games(2)).unwrap();
    let batch = sim.run_with_rng(&mut GameRng::new(5)).unwrap();

    let single = Simulation::new(config(&[Simple, Punisher]).with_games(1)).unwrap();
    let mut rng = GameRng::new(5);
    let first = single.run_with_rng(&mut rng).unwrap();
    let second = single.run_with_rng(&mut rng).unwrap();

    assert_eq!(batch.outcomes, [first.outcomes[0], second.outcomes[0]]);
}

#[test]
fn test_stats_cover_every_game() {
    for players in 2..=4 {
        let seats: Vec<_> = [Punisher, Simple, LowerRainbow, Simple].into_iter().take(players).collect();
        let sim = Simulation::new(config(&seats).with_games(25).with_seed(players as u64)).unwrap();
        let report = sim.run().unwrap();

        let stats = &report.stats;
        assert_eq!(stats.games, 25);
        assert_eq!(stats.win_counts.len(), players);
        assert_eq!(stats.win_counts.iter().sum::<u32>(), 25);
        assert!(stats.min_rounds >= 1);
        assert!(f64::from(stats.min_rounds) <= stats.avg_rounds);
        assert!(stats.avg_rounds <= f64::from(stats.max_rounds));
    }
}

#[test]
fn test_limited_variants_are_reproducible() {
    for variant in [SupplyVariant::UNIQUE_10, SupplyVariant::UNIQUE_8] {
        let sim = Simulation::new(
            config(&[Simple, Punisher, LowerRainbow, Punisher])
                .with_variant(variant)
                .with_games(10)
                .with_seed(77),
        )
        .unwrap();

        let first = sim.run();
        assert_eq!(first, sim.run(), "{variant}");

        match first {
            Ok(report) => {
                assert_eq!(report.outcomes.len(), 10);
                assert_eq!(report.stats.games, 10);
                assert!(report.outcomes.iter().all(|o| o.winner.index() < 4 && o.rounds >= 1));
            }
            Err(SimError::Supply { game, source: SupplyError::DeckExhausted { open_piles, target_piles } }) => {
                assert!((1..=10).contains(&game), "{variant}: game {game}");
                assert_eq!(target_piles, variant.target_piles());
                assert!(open_piles < target_piles);
            }
            Err(other) => panic!("{variant}: {other}"),
        }
    }
}

#[test]
fn test_report_json() {
    let sim = Simulation::new(config(&[LowerRainbow, Punisher]).with_games(3).with_seed(1)).unwrap();
    let report = sim.run().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["seed"], 1);
    assert_eq!(json["seats"], serde_json::json!(["lower-rainbow", "punisher"]));
    assert_eq!(json["outcomes"].as_array().unwrap().len(), 3);
    assert_eq!(json["stats"]["games"], 3);
}

#[test]
fn test_text_summary_format() {
    let sim = Simulation::new(config(&[Simple, Simple]).with_games(4).with_seed(8)).unwrap();
    let text = sim.run().unwrap().stats.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("*** Win counts: "));
    assert_eq!(lines[0].matches(" vs. ").count(), 1);
    assert!(lines[1].starts_with("*** Turns: avg/min/max: "));
}
