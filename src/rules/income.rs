//! Payout tables keyed by dice total.
//!
//! Pure functions over a single player's ledger. The engine decides who they
//! apply to and in which order.

use crate::cards::CardId;
use crate::core::Player;

/// +1 coin when the player owns the Shopping Mall.
fn mall_bonus(player: &Player) -> i64 {
    i64::from(player.has_landmark(CardId::ShoppingMall))
}

fn owned(player: &Player, card: CardId) -> i64 {
    i64::from(player.establishment_count(card))
}

/// Restaurant that charges the roller on this total, with its base rate.
#[must_use]
pub fn restaurant_for(total: u32) -> Option<(CardId, i64)> {
    match total {
        3 => Some((CardId::Cafe, 1)),
        9 | 10 => Some((CardId::FamilyRestaurant, 2)),
        _ => None,
    }
}

/// What `owner` charges the roller on this total, before capping.
#[must_use]
pub fn restaurant_fee(total: u32, owner: &Player) -> i64 {
    restaurant_for(total)
        .map(|(card, base)| owned(owner, card) * base * (1 + mall_bonus(owner)))
        .unwrap_or(0)
}

/// Bank income for the player who rolled.
#[must_use]
pub fn self_income(total: u32, player: &Player) -> i64 {
    use CardId::*;

    let count = |card| owned(player, card);
    let mall = mall_bonus(player);
    match total {
        1 => count(WheatField),
        2 => count(Ranch) + (1 + mall) * count(Bakery),
        3 => (1 + mall) * count(Bakery),
        4 => (3 + mall) * count(ConvenienceStore),
        5 => count(Forest),
        7 => 3 * count(Ranch) * count(CheeseFactory),
        8 => 3 * (count(Forest) + count(Mine)) * count(FurnitureFactory),
        9 => 5 * count(Mine),
        10 => 3 * count(AppleOrchard),
        11 | 12 => 2 * count(ProduceMarket),
        _ => 0,
    }
}

/// Bank income for a player on someone else's roll (blue cards only).
#[must_use]
pub fn others_income(total: u32, player: &Player) -> i64 {
    use CardId::*;

    let count = |card| owned(player, card);
    match total {
        1 => count(WheatField),
        2 => count(Ranch),
        5 => count(Forest),
        9 => 5 * count(Mine),
        10 => 3 * count(AppleOrchard),
        _ => 0,
    }
}
