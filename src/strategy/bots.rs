//! Deterministic bots.
//!
//! Each bot is a unit struct plus a `BuildPlan`: an ordered list of landmarks
//! and establishments it wants, walked top to bottom every turn. Bots keep no
//! memory between calls.

use crate::cards::CardId;
use crate::core::{PlayerId, Roll, Table};

use super::Strategy;

/// One entry of a build plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// Build this landmark when the current player can afford it.
    Landmark(CardId),
    /// Build this establishment while owning fewer than `desired` copies and
    /// the supply has one. Affordability is left to the engine.
    Establishment(CardId, u32),
}

/// Ordered build preferences.
#[derive(Clone, Copy, Debug)]
pub struct BuildPlan(pub &'static [Pick]);

impl BuildPlan {
    /// First entry the current player wants and can get.
    #[must_use]
    pub fn choose(&self, table: &Table) -> Option<CardId> {
        let player = table.current_player();
        self.0.iter().find_map(|pick| match *pick {
            Pick::Landmark(card) => player.can_construct_landmark(card).then_some(card),
            Pick::Establishment(card, desired) => {
                (player.establishment_count(card) < desired && table.supply().is_available(card))
                    .then_some(card)
            }
        })
    }
}

use CardId::*;
use Pick::{Establishment as E, Landmark as L};

/// Landmarks in cost-efficiency order, then Bakeries.
#[derive(Clone, Copy, Debug, Default)]
pub struct Simple;

impl Simple {
    pub const PLAN: BuildPlan = BuildPlan(&[
        L(ShoppingMall),
        L(RadioTower),
        L(AmusementPark),
        L(TrainStation),
        E(Bakery, 3),
    ]);
}

impl Strategy for Simple {
    fn name(&self) -> &str {
        "Simple"
    }

    fn choose_construction(&mut self, table: &Table) -> Option<CardId> {
        Self::PLAN.choose(table)
    }
}

/// Landmarks, then a spread of cheap one-die establishments.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowerRainbow;

impl LowerRainbow {
    pub const PLAN: BuildPlan = BuildPlan(&[
        L(ShoppingMall),
        L(RadioTower),
        L(AmusementPark),
        L(TrainStation),
        E(ConvenienceStore, 3),
        E(Cafe, 3),
        E(Bakery, 3),
        E(Ranch, 3),
        E(Forest, 3),
        E(WheatField, 3),
    ]);
}

impl Strategy for LowerRainbow {
    fn name(&self) -> &str {
        "LowerRainbow"
    }

    fn choose_construction(&mut self, table: &Table) -> Option<CardId> {
        Self::PLAN.choose(table)
    }
}

/// Takes coins from opponents: Cafes, Stadium, TV Station, and always two dice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Punisher;

impl Punisher {
    pub const PLAN: BuildPlan = BuildPlan(&[
        L(ShoppingMall),
        L(TrainStation),
        L(RadioTower),
        E(Cafe, 4),
        E(Stadium, 1),
        E(TvStation, 1),
        E(Bakery, 4),
        E(Ranch, 2),
        E(WheatField, 2),
        L(AmusementPark),
    ]);

    /// Totals worth keeping instead of re-rolling.
    pub const KEEP_TOTALS: [u32; 3] = [1, 11, 12];
}

impl Strategy for Punisher {
    fn name(&self) -> &str {
        "Punisher"
    }

    fn choose_train_station(&mut self, _table: &Table) -> bool {
        true
    }

    fn choose_radio_tower(&mut self, _table: &Table, roll: &Roll) -> bool {
        !Self::KEEP_TOTALS.contains(&roll.total())
    }

    fn choose_construction(&mut self, table: &Table) -> Option<CardId> {
        Self::PLAN.choose(table)
    }

    /// Richest opponent; the first in seat order wins ties.
    fn choose_tv_station_target(&mut self, table: &Table) -> Option<PlayerId> {
        let richest = table.opponents().map(|(_, p)| p.money()).max()?;
        table
            .players()
            .find(|&(id, p)| id != table.current_id() && p.money() == richest)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, Player};
    use crate::supply::{Supply, SupplyVariant};

    fn table_with(money: i64) -> Table {
        let mut players: Vec<Player> = (0..3).map(|i| Player::new(format!("P{}", i))).collect();
        let current = players[0].money();
        players[0].adjust_money(money - current);
        let supply = Supply::initialize(3, SupplyVariant::Default, &mut GameRng::new(4)).unwrap();
        Table::new(players, supply)
    }

    #[test]
    fn test_simple_prefers_landmarks() {
        let table = table_with(10);
        assert_eq!(Simple.choose_construction(&table), Some(ShoppingMall));

        let table = table_with(4);
        assert_eq!(Simple.choose_construction(&table), Some(TrainStation));

        let table = table_with(2);
        assert_eq!(Simple.choose_construction(&table), Some(Bakery));
    }

    #[test]
    fn test_simple_respects_desired_count() {
        let mut table = table_with(2);
        table.player_mut(PlayerId::new(0)).construct(Bakery);
        table.player_mut(PlayerId::new(0)).construct(Bakery);
        assert_eq!(Simple.choose_construction(&table), None);
    }

    #[test]
    fn test_lower_rainbow_order() {
        let table = table_with(3);
        assert_eq!(LowerRainbow.choose_construction(&table), Some(ConvenienceStore));
    }

    #[test]
    fn test_punisher_establishments_ignore_cost() {
        // The plan names a Cafe even with no money; the engine filters it out.
        let table = table_with(0);
        assert_eq!(Punisher.choose_construction(&table), Some(Cafe));
    }

    #[test]
    fn test_punisher_dice_choices() {
        let table = table_with(0);
        let mut bot = Punisher;
        assert!(bot.choose_train_station(&table));
        assert!(!bot.choose_radio_tower(&table, &Roll::from_faces(&[1])));
        assert!(!bot.choose_radio_tower(&table, &Roll::from_faces(&[5, 6])));
        assert!(!bot.choose_radio_tower(&table, &Roll::from_faces(&[6, 6])));
        assert!(bot.choose_radio_tower(&table, &Roll::from_faces(&[3, 4])));
        assert!(bot.choose_radio_tower(&table, &Roll::from_faces(&[2])));
    }

    #[test]
    fn test_punisher_targets_richest_opponent() {
        let mut table = table_with(50);
        table.player_mut(PlayerId::new(1)).adjust_money(4);
        table.player_mut(PlayerId::new(2)).adjust_money(4);
        // Tie between seats 1 and 2 goes to seat 1; seat 0 is richer but is us.
        assert_eq!(Punisher.choose_tv_station_target(&table), Some(PlayerId::new(1)));

        table.player_mut(PlayerId::new(2)).adjust_money(1);
        assert_eq!(Punisher.choose_tv_station_target(&table), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_bots_decline_business_center() {
        let table = table_with(10);
        assert_eq!(Simple.choose_business_center_target(&table), None);
        assert_eq!(Punisher.choose_business_center_swap(&table), None);
        assert!(!LowerRainbow.choose_train_station(&table));
    }
}
