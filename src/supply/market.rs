//! The market engine.
//!
//! The shared deck is built once per game, shuffled, and then consumed from
//! the front. Two regimes decide how much of it is visible:
//!
//! - `Default`: the whole deck is laid out at once. Buying a card only
//!   lowers its pile; empty piles are never refilled.
//! - `LimitedPiles(n)`: exactly `n` distinct piles are open. Draws that match
//!   an open pile grow it; an emptied pile is replaced by drawing until a
//!   card type that is not already on display turns up.

use std::collections::VecDeque;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{CardCatalog, CardId, VALID_ESTABLISHMENTS};
use crate::core::rng::RandomSource;
use crate::error::{ConfigError, SupplyError};

/// How many distinct piles the market shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyVariant {
    /// Every establishment type visible with its full count.
    #[default]
    Default,
    /// A fixed number of distinct restocking piles.
    LimitedPiles(usize),
}

impl SupplyVariant {
    /// Ten restocking piles.
    pub const UNIQUE_10: Self = SupplyVariant::LimitedPiles(10);
    /// Eight restocking piles.
    pub const UNIQUE_8: Self = SupplyVariant::LimitedPiles(8);

    /// Number of distinct piles open at all times.
    #[must_use]
    pub fn target_piles(self) -> usize {
        match self {
            SupplyVariant::Default => VALID_ESTABLISHMENTS.len(),
            SupplyVariant::LimitedPiles(piles) => piles,
        }
    }

    /// Reject pile counts that could never be filled.
    pub fn validate(self) -> Result<(), ConfigError> {
        match self {
            SupplyVariant::LimitedPiles(piles) if piles == 0 || piles > VALID_ESTABLISHMENTS.len() => {
                Err(ConfigError::PileCount {
                    max: VALID_ESTABLISHMENTS.len(),
                    got: piles,
                })
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for SupplyVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplyVariant::Default => write!(f, "default"),
            SupplyVariant::LimitedPiles(piles) => write!(f, "unique{}", piles),
        }
    }
}

impl FromStr for SupplyVariant {
    type Err = ConfigError;

    /// Accepts `default` or `uniqueN` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "default" {
            return Ok(SupplyVariant::Default);
        }
        let variant = lower
            .strip_prefix("unique")
            .and_then(|n| n.parse::<usize>().ok())
            .map(SupplyVariant::LimitedPiles)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))?;
        variant.validate()?;
        Ok(variant)
    }
}

/// Outcome of a single draw from the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Draw {
    /// The card joined a pile that was already open.
    Refilled,
    /// The card opened a new pile.
    NewPile,
}

/// Per-game market state.
#[derive(Clone, Debug)]
pub struct Supply {
    variant: SupplyVariant,
    deck: VecDeque<CardId>,
    market: FxHashMap<CardId, u32>,
}

impl Supply {
    /// Build, shuffle, and lay out the deck for a game of `player_count`.
    pub fn initialize<R: RandomSource>(
        player_count: usize,
        variant: SupplyVariant,
        rng: &mut R,
    ) -> Result<Self, SupplyError> {
        let mut cards: Vec<CardId> = Vec::with_capacity(CardCatalog::deck_size(player_count));
        for card in VALID_ESTABLISHMENTS {
            let copies = CardCatalog::info(card).initial_count.deck_copies(player_count);
            cards.extend(std::iter::repeat(card).take(copies as usize));
        }
        rng.shuffle(&mut cards);

        let mut supply = Self {
            variant,
            deck: cards.into(),
            market: FxHashMap::default(),
        };

        match variant {
            SupplyVariant::Default => {
                while let Some(card) = supply.deck.pop_front() {
                    *supply.market.entry(card).or_insert(0) += 1;
                }
            }
            SupplyVariant::LimitedPiles(target) => {
                while supply.market.len() < target {
                    supply.draw()?;
                }
            }
        }

        trace!(%variant, piles = supply.market.len(), deck = supply.deck.len(), "supply initialized");
        Ok(supply)
    }

    #[must_use]
    pub fn variant(&self) -> SupplyVariant {
        self.variant
    }

    /// At least one copy is purchasable.
    #[must_use]
    pub fn is_available(&self, card: CardId) -> bool {
        self.count(card) > 0
    }

    /// Purchasable copies (0 when the pile is absent).
    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.market.get(&card).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn cost(&self, card: CardId) -> i64 {
        CardCatalog::cost(card)
    }

    /// Read-only view of the open piles.
    #[must_use]
    pub fn cards(&self) -> &FxHashMap<CardId, u32> {
        &self.market
    }

    /// Number of piles with at least one card.
    #[must_use]
    pub fn open_piles(&self) -> usize {
        self.market.values().filter(|&&count| count > 0).count()
    }

    /// Cards still in the draw queue.
    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Total purchasable cards across all piles.
    #[must_use]
    pub fn market_size(&self) -> u32 {
        self.market.values().sum()
    }

    /// Take one copy out of the market.
    ///
    /// Returns `Ok(true)` when an emptied pile was replaced by a new card type.
    /// Removing an unavailable card does nothing.
    pub fn remove_from_market(&mut self, card: CardId) -> Result<bool, SupplyError> {
        let Some(count) = self.market.get_mut(&card).filter(|count| **count > 0) else {
            return Ok(false);
        };
        *count -= 1;

        if self.variant == SupplyVariant::Default || *count > 0 {
            return Ok(false);
        }

        self.market.remove(&card);
        while self.draw()? == Draw::Refilled {}
        trace!(closed = %card, deck = self.deck.len(), "pile replaced");
        Ok(true)
    }

    fn draw(&mut self) -> Result<Draw, SupplyError> {
        let card = self.deck.pop_front().ok_or(SupplyError::DeckExhausted {
            open_piles: self.market.len(),
            target_piles: self.variant.target_piles(),
        })?;

        match self.market.get_mut(&card) {
            Some(count) => {
                *count += 1;
                Ok(Draw::Refilled)
            }
            None => {
                self.market.insert(card, 1);
                Ok(Draw::NewPile)
            }
        }
    }
}

impl std::fmt::Display for Supply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut piles: Vec<(CardId, u32)> = self
            .market
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&card, &count)| (card, count))
            .collect();
        piles.sort_by_key(|&(card, _)| (CardCatalog::cost(card), card));

        let listed: Vec<String> = piles
            .iter()
            .map(|(card, count)| format!("{}x {}(${})", count, card, CardCatalog::cost(*card)))
            .collect();
        write!(f, "{}", listed.join(","))
    }
}
