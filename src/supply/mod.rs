//! Market and supply state.
//!
//! The `Supply` owns the shuffled draw deck and the purchasable piles for one
//! game. `SupplyVariant` picks between the full layout and the limited,
//! restocking layout.

pub mod market;

pub use market::{Supply, SupplyVariant};
