//! Batch simulation.
//!
//! Plays many games with one shared random source and aggregates the results.

pub mod runner;
pub mod stats;

pub use runner::{SimReport, Simulation};
pub use stats::SimStats;
