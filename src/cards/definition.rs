//! Card definitions - static card data.
//!
//! `CardId` names one of the nineteen cards of the base game. `CardInfo`
//! holds the immutable properties of that card (category, cost, how many
//! copies go into the shared deck). How many copies a player owns lives on
//! the `Player` ledger, and how many are purchasable lives in the `Supply`.

use serde::{Deserialize, Serialize};

/// Identifier for a card.
///
/// There is no "none" variant: the absence of a card is `Option<CardId>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardId {
    // Landmarks
    /// Roll one or two dice.
    TrainStation,
    /// +1 coin per Cafe, Family Restaurant, Bakery and Convenience Store payout.
    ShoppingMall,
    /// Doubles grant one extra turn.
    AmusementPark,
    /// Re-roll once per turn.
    RadioTower,

    // Establishments
    WheatField,
    Ranch,
    Bakery,
    Cafe,
    ConvenienceStore,
    Forest,
    Stadium,
    TvStation,
    BusinessCenter,
    CheeseFactory,
    FurnitureFactory,
    Mine,
    FamilyRestaurant,
    AppleOrchard,
    ProduceMarket,
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Conceptual activation group of a card, in activation order.
///
/// The engine keys effects by dice total, so this is descriptive only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Landmark,
    /// Red: paid by the player who rolled.
    Restaurant,
    /// Green: pays on your own turn.
    SecondaryIndustry,
    /// Blue: pays on anyone's turn.
    PrimaryIndustry,
    /// Purple: at most one of each per player.
    MajorEstablishment,
}

/// How many copies of a card the shared deck starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialCount {
    /// Same count regardless of player count.
    Fixed(u32),
    /// One copy per player.
    PerPlayer,
    /// Never placed in the deck (landmarks).
    Unlimited,
}

impl InitialCount {
    /// Number of copies to put in the deck for a game of `player_count`.
    #[must_use]
    pub const fn deck_copies(self, player_count: usize) -> u32 {
        match self {
            InitialCount::Fixed(count) => count,
            InitialCount::PerPlayer => player_count as u32,
            InitialCount::Unlimited => 0,
        }
    }
}

/// Static card data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    pub id: CardId,
    pub category: CardCategory,
    /// Construction cost in coins.
    pub cost: i64,
    pub initial_count: InitialCount,
}

impl CardInfo {
    #[must_use]
    pub const fn new(id: CardId, category: CardCategory, cost: i64, initial_count: InitialCount) -> Self {
        Self {
            id,
            category,
            cost,
            initial_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_copies() {
        assert_eq!(InitialCount::Fixed(6).deck_copies(2), 6);
        assert_eq!(InitialCount::Fixed(6).deck_copies(4), 6);
        assert_eq!(InitialCount::PerPlayer.deck_copies(3), 3);
        assert_eq!(InitialCount::Unlimited.deck_copies(4), 0);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId::FamilyRestaurant.to_string(), "FamilyRestaurant");
        assert_eq!(format!("{}", CardId::Cafe), "Cafe");
    }

    #[test]
    fn test_card_id_serialization() {
        let json = serde_json::to_string(&CardId::TvStation).unwrap();
        assert_eq!(json, "\"TvStation\"");
        let back: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CardId::TvStation);
    }
}
