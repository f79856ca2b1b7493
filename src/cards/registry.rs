//! The card catalog.
//!
//! A read-only table built into the binary. Lookups are total: every
//! `CardId` has an entry, so there is no failure path.

use super::definition::{CardCategory, CardId, CardInfo, InitialCount};

use CardCategory::*;
use InitialCount::*;

/// Every card in the base game, in deck-building order.
static CATALOG: [CardInfo; 19] = [
    CardInfo::new(CardId::WheatField, PrimaryIndustry, 1, Fixed(6)),
    CardInfo::new(CardId::Ranch, PrimaryIndustry, 1, Fixed(6)),
    CardInfo::new(CardId::Bakery, SecondaryIndustry, 1, Fixed(6)),
    CardInfo::new(CardId::Cafe, Restaurant, 2, Fixed(6)),
    CardInfo::new(CardId::ConvenienceStore, SecondaryIndustry, 2, Fixed(6)),
    CardInfo::new(CardId::Forest, PrimaryIndustry, 3, Fixed(6)),
    CardInfo::new(CardId::Stadium, MajorEstablishment, 6, PerPlayer),
    CardInfo::new(CardId::TvStation, MajorEstablishment, 7, PerPlayer),
    CardInfo::new(CardId::BusinessCenter, MajorEstablishment, 8, PerPlayer),
    CardInfo::new(CardId::CheeseFactory, SecondaryIndustry, 5, Fixed(6)),
    CardInfo::new(CardId::FurnitureFactory, SecondaryIndustry, 3, Fixed(6)),
    CardInfo::new(CardId::Mine, PrimaryIndustry, 6, Fixed(6)),
    CardInfo::new(CardId::FamilyRestaurant, Restaurant, 3, Fixed(6)),
    CardInfo::new(CardId::AppleOrchard, PrimaryIndustry, 3, Fixed(6)),
    CardInfo::new(CardId::ProduceMarket, SecondaryIndustry, 2, Fixed(6)),
    CardInfo::new(CardId::TrainStation, Landmark, 4, Unlimited),
    CardInfo::new(CardId::ShoppingMall, Landmark, 10, Unlimited),
    CardInfo::new(CardId::AmusementPark, Landmark, 16, Unlimited),
    CardInfo::new(CardId::RadioTower, Landmark, 22, Unlimited),
];

/// Cards that go into the shared deck, in deck-building order.
pub const VALID_ESTABLISHMENTS: [CardId; 15] = [
    CardId::WheatField,
    CardId::Ranch,
    CardId::Bakery,
    CardId::Cafe,
    CardId::ConvenienceStore,
    CardId::Forest,
    CardId::Stadium,
    CardId::TvStation,
    CardId::BusinessCenter,
    CardId::CheeseFactory,
    CardId::FurnitureFactory,
    CardId::Mine,
    CardId::FamilyRestaurant,
    CardId::AppleOrchard,
    CardId::ProduceMarket,
];

/// The four per-player landmarks.
pub const VALID_LANDMARKS: [CardId; 4] = [
    CardId::TrainStation,
    CardId::ShoppingMall,
    CardId::AmusementPark,
    CardId::RadioTower,
];

/// Lookup facade over the static card table.
///
/// ## Example
///
/// ```
/// use machi_koro_sim::cards::{CardCatalog, CardCategory, CardId};
///
/// let info = CardCatalog::info(CardId::TvStation);
/// assert_eq!(info.cost, 7);
/// assert_eq!(info.category, CardCategory::MajorEstablishment);
/// assert!(CardCatalog::is_establishment(CardId::TvStation));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CardCatalog;

impl CardCatalog {
    /// Get the static record for a card.
    #[must_use]
    pub fn info(card: CardId) -> &'static CardInfo {
        // Every variant has a row.
        CATALOG
            .iter()
            .find(|info| info.id == card)
            .unwrap_or_else(|| unreachable!("{card} missing from catalog"))
    }

    /// Construction cost in coins.
    #[must_use]
    pub fn cost(card: CardId) -> i64 {
        Self::info(card).cost
    }

    #[must_use]
    pub fn category(card: CardId) -> CardCategory {
        Self::info(card).category
    }

    /// Is this a card that lives in the shared deck?
    #[must_use]
    pub fn is_establishment(card: CardId) -> bool {
        VALID_ESTABLISHMENTS.contains(&card)
    }

    #[must_use]
    pub fn is_landmark(card: CardId) -> bool {
        VALID_LANDMARKS.contains(&card)
    }

    /// Purple cards: one copy per player in the deck, at most one owned.
    #[must_use]
    pub fn is_major_establishment(card: CardId) -> bool {
        Self::category(card) == MajorEstablishment
    }

    /// Iterate over every card record.
    pub fn iter() -> impl Iterator<Item = &'static CardInfo> {
        CATALOG.iter()
    }

    /// Total deck size for a game of `player_count`.
    #[must_use]
    pub fn deck_size(player_count: usize) -> usize {
        VALID_ESTABLISHMENTS
            .iter()
            .map(|&card| Self::info(card).initial_count.deck_copies(player_count) as usize)
            .sum()
    }
}
