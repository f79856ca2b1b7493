//! Command-line entry point: play a batch of games and print the tallies.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use machi_koro_sim::core::SimConfig;
use machi_koro_sim::sim::Simulation;
use machi_koro_sim::strategy::StrategyKind;
use machi_koro_sim::supply::SupplyVariant;

#[derive(Parser, Debug)]
#[command(name = "machi-koro-sim")]
#[command(about = "Simulate Machi Koro games between decision strategies")]
#[command(version)]
struct Cli {
    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Number of players (2-4)
    #[arg(short, long, default_value_t = 4)]
    players: usize,

    /// Supply variant: default, unique10 or unique8
    #[arg(short, long, default_value_t = SupplyVariant::Default)]
    variant: SupplyVariant,

    /// RNG seed; drawn from the OS when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Strategy for each seat, in turn order (repeat once per player)
    #[arg(long = "seat", value_enum)]
    seats: Vec<StrategyKind>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> SimConfig {
        let config = SimConfig::new()
            .with_games(self.games)
            .with_players(self.players)
            .with_variant(self.variant)
            .with_seats(self.seats.iter().copied());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let simulation = Simulation::new(cli.config()).context("invalid configuration")?;
    if simulation.config().lineup().iter().any(|kind| kind.is_interactive()) {
        warn!("a human seat is playing; prompts go to stdout (pass --seat to run bots only)");
    }

    if !cli.json {
        println!("Using {} players to play {} games", cli.players, cli.games);
        println!("Using Variant: {}", cli.variant);
    }

    let report = simulation.run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.stats);
    }
    Ok(())
}
