//! Player identification and the per-player ledger.
//!
//! ## PlayerId
//!
//! Seat index in turn order. Strategies name other players by `PlayerId`,
//! never by reference.
//!
//! ## Player
//!
//! Money, owned establishments, and owned landmarks. The ledger performs no
//! legality checks on mutation: callers decide what is allowed and then tell
//! the ledger what happened.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardId, VALID_ESTABLISHMENTS, VALID_LANDMARKS};
use crate::supply::Supply;

/// Coins every player starts with.
pub const STARTING_MONEY: i64 = 3;

/// Seat index, 0-based. List order is turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use machi_koro_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The seat that plays after this one.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Every other seat in forward turn order, starting right after this one.
    ///
    /// ```
    /// use machi_koro_sim::core::PlayerId;
    ///
    /// let order: Vec<_> = PlayerId::new(1).opponents(4).into_iter().map(|p| p.0).collect();
    /// assert_eq!(order, vec![2, 3, 0]);
    /// ```
    #[must_use]
    pub fn opponents(self, player_count: usize) -> SmallVec<[PlayerId; 4]> {
        let mut order = SmallVec::new();
        let mut cursor = self.next(player_count);
        while cursor != self {
            order.push(cursor);
            cursor = cursor.next(player_count);
        }
        order
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    money: i64,
    establishments: FxHashMap<CardId, u32>,
    landmarks: FxHashMap<CardId, bool>,
}

impl Player {
    /// A fresh player: 3 coins, one Wheat Field, one Bakery, no landmarks.
    pub fn new(name: impl Into<String>) -> Self {
        let mut establishments = FxHashMap::default();
        establishments.insert(CardId::WheatField, 1);
        establishments.insert(CardId::Bakery, 1);

        let landmarks = VALID_LANDMARKS.iter().map(|&card| (card, false)).collect();

        Self {
            name: name.into(),
            money: STARTING_MONEY,
            establishments,
            landmarks,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    /// Owned copies of an establishment (0 for landmarks and unowned cards).
    #[must_use]
    pub fn establishment_count(&self, card: CardId) -> u32 {
        self.establishments.get(&card).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn has_landmark(&self, card: CardId) -> bool {
        self.landmarks.get(&card).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn all_landmarks_built(&self) -> bool {
        self.landmarks.values().all(|&built| built)
    }

    /// Number of landmarks built so far.
    #[must_use]
    pub fn landmark_count(&self) -> usize {
        self.landmarks.values().filter(|&&built| built).count()
    }

    /// Owned establishments in catalog order.
    pub fn establishments(&self) -> impl Iterator<Item = (CardId, u32)> + '_ {
        VALID_ESTABLISHMENTS
            .iter()
            .map(move |&card| (card, self.establishment_count(card)))
            .filter(|&(_, count)| count > 0)
    }

    /// Unconditional add. No floor: callers that take money away clamp first.
    pub fn adjust_money(&mut self, delta: i64) {
        self.money += delta;
    }

    /// Add an establishment copy or flip a landmark flag. No cost or supply check.
    pub fn construct(&mut self, card: CardId) {
        if CardCatalog::is_establishment(card) {
            *self.establishments.entry(card).or_insert(0) += 1;
        } else if CardCatalog::is_landmark(card) {
            self.landmarks.insert(card, true);
        }
    }

    /// Remove one establishment copy. No-op when none is owned; landmarks are untouched.
    pub fn deconstruct(&mut self, card: CardId) {
        if let Some(count) = self.establishments.get_mut(&card) {
            *count -= 1;
            if *count == 0 {
                self.establishments.remove(&card);
            }
        }
    }

    /// Valid establishment, affordable, and available in the supply.
    ///
    /// Purple cards additionally require that the player does not own one yet.
    #[must_use]
    pub fn can_construct_establishment(&self, card: CardId, supply: &Supply) -> bool {
        if !CardCatalog::is_establishment(card) {
            return false;
        }
        if self.money < CardCatalog::cost(card) {
            return false;
        }
        if !supply.is_available(card) {
            return false;
        }
        !(CardCatalog::is_major_establishment(card) && self.establishment_count(card) > 0)
    }

    /// Valid landmark, affordable, and not built yet.
    #[must_use]
    pub fn can_construct_landmark(&self, card: CardId) -> bool {
        CardCatalog::is_landmark(card)
            && self.money >= CardCatalog::cost(card)
            && !self.has_landmark(card)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Player {}: {} coins", self.name, self.money)?;
        let owned: Vec<String> = self
            .establishments()
            .map(|(card, count)| format!("{}x {}(${})", count, card, CardCatalog::cost(card)))
            .collect();
        writeln!(f, "   {}", owned.join(" "))?;
        let landmarks: Vec<String> = VALID_LANDMARKS
            .iter()
            .map(|&card| {
                let mark = if self.has_landmark(card) { '+' } else { '-' };
                format!("{}{}(${})", mark, card, CardCatalog::cost(card))
            })
            .collect();
        write!(f, "   {}", landmarks.join(" "))
    }
}
