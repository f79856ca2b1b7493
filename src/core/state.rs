//! Game state visible to strategies.
//!
//! `Table` holds everything about a game in progress except the strategies
//! themselves: the seated players, the supply, whose turn it is, and the round
//! counter. The engine mutates it; strategies only ever see `&Table`.

use super::player::{Player, PlayerId};
use crate::supply::Supply;

/// Public game state.
#[derive(Clone, Debug)]
pub struct Table {
    pub(crate) players: Vec<Player>,
    pub(crate) supply: Supply,
    pub(crate) current: PlayerId,
    pub(crate) round: u32,
}

impl Table {
    /// Seat `players` in turn order. Player 0 starts in round 1.
    pub fn new(players: Vec<Player>, supply: Supply) -> Self {
        assert!(!players.is_empty(), "Must have at least 1 player");
        assert!(players.len() <= 255, "At most 255 players supported");

        Self {
            players,
            supply,
            current: PlayerId::new(0),
            round: 1,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current.index()]
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    /// Look up a player. Returns `None` for seats that do not exist.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// All players in turn order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        PlayerId::all(self.players.len()).zip(self.players.iter())
    }

    /// Everyone but the current player, in forward turn order starting right
    /// after them.
    pub fn opponents(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.current
            .opponents(self.players.len())
            .into_iter()
            .map(move |id| (id, &self.players[id.index()]))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Move money between two players, capped at what `from` has.
    ///
    /// Returns the amount actually transferred.
    pub(crate) fn transfer_capped(&mut self, from: PlayerId, to: PlayerId, amount: i64) -> i64 {
        let paid = amount.min(self.players[from.index()].money()).max(0);
        self.player_mut(from).adjust_money(-paid);
        self.player_mut(to).adjust_money(paid);
        paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;
    use crate::supply::SupplyVariant;

    fn table(n: usize) -> Table {
        let players = (0..n).map(|i| Player::new(format!("P{}", i))).collect();
        let supply = Supply::initialize(n, SupplyVariant::Default, &mut GameRng::new(0)).unwrap();
        Table::new(players, supply)
    }

    #[test]
    fn test_new_table() {
        let table = table(3);
        assert_eq!(table.player_count(), 3);
        assert_eq!(table.current_id(), PlayerId::new(0));
        assert_eq!(table.round(), 1);
        assert_eq!(table.current_player().name(), "P0");
        assert!(table.player(PlayerId::new(3)).is_none());
    }

    #[test]
    fn test_opponents_exclude_current() {
        let mut table = table(4);
        table.current = PlayerId::new(2);
        let names: Vec<_> = table.opponents().map(|(_, p)| p.name().to_string()).collect();
        assert_eq!(names, vec!["P3", "P0", "P1"]);
    }

    #[test]
    fn test_transfer_capped() {
        let mut table = table(2);
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        assert_eq!(table.transfer_capped(a, b, 2), 2);
        assert_eq!(table.player(a).unwrap().money(), 1);
        assert_eq!(table.player(b).unwrap().money(), 5);

        assert_eq!(table.transfer_capped(a, b, 5), 1);
        assert_eq!(table.player(a).unwrap().money(), 0);
        assert_eq!(table.transfer_capped(a, b, 5), 0);
        assert_eq!(table.player(b).unwrap().money(), 6);
    }
}
