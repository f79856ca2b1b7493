//! The turn engine.
//!
//! One call to `Game::play_turn` runs the full phase sequence for the player
//! whose turn it is:
//!
//! Roll → restaurant fees → own bank income → others' bank income →
//! roll-of-6 purple effects → construction → win check → bonus turn / advance.
//!
//! Strategies are asked for decisions along the way; their answers are
//! validated here before they touch the table.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::cards::{CardCatalog, CardId};
use crate::core::{Player, PlayerId, RandomSource, Roll, Table};
use crate::error::SupplyError;
use crate::strategy::Strategy;
use crate::supply::{Supply, SupplyVariant};

use super::income;

/// Coins a Stadium takes from each opponent.
pub const STADIUM_TAKE: i64 = 2;
/// Coins a TV Station takes from the chosen opponent.
pub const TV_STATION_TAKE: i64 = 5;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Seat of the player who completed all four landmarks.
    pub winner: PlayerId,
    /// Round in which they did it.
    pub rounds: u32,
}

/// What a single phase sequence did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub round: u32,
    /// The roll that counted (after any re-roll).
    pub roll: Roll,
    /// Radio Tower was used.
    pub rerolled: bool,
    /// Card constructed this turn, if any.
    pub built: Option<CardId>,
    /// The same player goes again next.
    pub bonus_turn: bool,
    /// Set on the turn that ends the game.
    pub outcome: Option<GameOutcome>,
}

/// A game in progress: the table plus one strategy per seat.
pub struct Game {
    table: Table,
    strategies: Vec<Box<dyn Strategy>>,
    in_bonus_turn: bool,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Seat one player per strategy (named after it) and lay out the supply.
    pub fn new<R: RandomSource>(
        strategies: Vec<Box<dyn Strategy>>,
        variant: SupplyVariant,
        rng: &mut R,
    ) -> Result<Self, SupplyError> {
        let supply = Supply::initialize(strategies.len(), variant, rng)?;
        let players = strategies.iter().map(|s| Player::new(s.name())).collect();
        let table = Table::new(players, supply);
        debug!(players = table.player_count(), variant = %table.supply().variant(), "game set up");

        Ok(Self {
            table,
            strategies,
            in_bonus_turn: false,
            outcome: None,
        })
    }

    /// Read-only game state.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Direct ledger access, for setting up positions.
    ///
    /// Panics if the seat does not exist.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        self.table.player_mut(id)
    }

    /// The next `play_turn` is a bonus turn.
    #[must_use]
    pub fn is_bonus_turn(&self) -> bool {
        self.in_bonus_turn
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Play turns until someone completes their landmarks.
    pub fn play<R: RandomSource>(&mut self, rng: &mut R) -> Result<GameOutcome, SupplyError> {
        loop {
            if let Some(outcome) = self.play_turn(rng)?.outcome {
                return Ok(outcome);
            }
        }
    }

    /// Run one full phase sequence for the current player.
    ///
    /// Panics if the game is already over.
    pub fn play_turn<R: RandomSource>(&mut self, rng: &mut R) -> Result<TurnReport, SupplyError> {
        assert!(self.outcome.is_none(), "Game is already over");

        let me = self.table.current;
        let round = self.table.round;
        trace!(supply = %self.table.supply, "market");
        debug!(
            round,
            seat = me.0,
            player = self.table.current_player().name(),
            money = self.table.current_player().money(),
            bonus = self.in_bonus_turn,
            "turn start"
        );

        let (roll, rerolled) = self.roll_dice(me, rng);
        let total = roll.total();
        debug!(roll = %roll, rerolled, "rolled");

        self.collect_restaurant_fees(me, total);
        self.pay_own_income(me, total);
        self.pay_others_income(me, total);
        if total == 6 {
            self.resolve_stadium(me);
            self.resolve_tv_station(me);
            self.resolve_business_center(me);
        }
        let built = self.construct(me)?;

        let mut report = TurnReport {
            player: me,
            round,
            roll,
            rerolled,
            built,
            bonus_turn: false,
            outcome: None,
        };

        if self.table.players[me.index()].all_landmarks_built() {
            let outcome = GameOutcome { winner: me, rounds: round };
            debug!(seat = me.0, rounds = round, "all landmarks built");
            self.outcome = Some(outcome);
            report.outcome = Some(outcome);
            return Ok(report);
        }

        let bonus = !self.in_bonus_turn
            && self.table.players[me.index()].has_landmark(CardId::AmusementPark)
            && report.roll.is_doubles();
        if bonus {
            debug!(seat = me.0, "doubles: bonus turn");
            self.in_bonus_turn = true;
            report.bonus_turn = true;
        } else {
            self.in_bonus_turn = false;
            self.advance();
        }

        Ok(report)
    }

    fn advance(&mut self) {
        let next = self.table.current.next(self.table.player_count());
        self.table.current = next;
        if next == PlayerId::new(0) {
            self.table.round += 1;
        }
    }

    fn dice_to_roll(&mut self, me: PlayerId) -> usize {
        let two = self.table.players[me.index()].has_landmark(CardId::TrainStation)
            && self.strategies[me.index()].choose_train_station(&self.table);
        1 + usize::from(two)
    }

    fn roll_dice<R: RandomSource>(&mut self, me: PlayerId, rng: &mut R) -> (Roll, bool) {
        let dice = self.dice_to_roll(me);
        let roll = Roll::roll(rng, dice);

        let reroll = self.table.players[me.index()].has_landmark(CardId::RadioTower)
            && self.strategies[me.index()].choose_radio_tower(&self.table, &roll);
        if !reroll {
            return (roll, false);
        }

        trace!(discarded = %roll, "radio tower re-roll");
        let dice = self.dice_to_roll(me);
        (Roll::roll(rng, dice), true)
    }

    /// Red cards: opponents collect in reverse turn order, starting with the
    /// player seated just before the roller. Each payment is capped at what
    /// the roller has left at that moment.
    fn collect_restaurant_fees(&mut self, me: PlayerId, total: u32) {
        if income::restaurant_for(total).is_none() {
            return;
        }
        for owner in me.opponents(self.table.player_count()).into_iter().rev() {
            let fee = income::restaurant_fee(total, &self.table.players[owner.index()]);
            if fee > 0 {
                let paid = self.table.transfer_capped(me, owner, fee);
                trace!(to = owner.0, fee, paid, "restaurant fee");
            }
        }
    }

    fn pay_own_income(&mut self, me: PlayerId, total: u32) {
        let earned = income::self_income(total, &self.table.players[me.index()]);
        self.table.player_mut(me).adjust_money(earned);
        trace!(earned, "bank income");
    }

    fn pay_others_income(&mut self, me: PlayerId, total: u32) {
        for other in me.opponents(self.table.player_count()) {
            let earned = income::others_income(total, &self.table.players[other.index()]);
            self.table.player_mut(other).adjust_money(earned);
            trace!(seat = other.0, earned, "bank income");
        }
    }

    fn resolve_stadium(&mut self, me: PlayerId) {
        if self.table.players[me.index()].establishment_count(CardId::Stadium) == 0 {
            return;
        }
        for other in me.opponents(self.table.player_count()) {
            let paid = self.table.transfer_capped(other, me, STADIUM_TAKE);
            trace!(from = other.0, paid, "stadium");
        }
    }

    fn resolve_tv_station(&mut self, me: PlayerId) {
        if self.table.players[me.index()].establishment_count(CardId::TvStation) == 0 {
            return;
        }
        let choice = self.strategies[me.index()].choose_tv_station_target(&self.table);
        match choice.filter(|&target| self.is_opponent(me, target)) {
            Some(target) => {
                let paid = self.table.transfer_capped(target, me, TV_STATION_TAKE);
                trace!(from = target.0, paid, "tv station");
            }
            None => warn!(seat = me.0, ?choice, "tv station target rejected"),
        }
    }

    /// Give one of ours, take one of theirs. Both cards must be ordinary
    /// establishments actually owned by the respective side.
    fn resolve_business_center(&mut self, me: PlayerId) {
        if self.table.players[me.index()].establishment_count(CardId::BusinessCenter) == 0 {
            return;
        }
        let target = self.strategies[me.index()].choose_business_center_target(&self.table);
        let give = self.strategies[me.index()].choose_business_center_swap(&self.table);

        let swap = match (target, give) {
            (Some((them, take)), Some(give)) if self.is_legal_swap(me, them, take, give) => (them, take, give),
            _ => {
                warn!(seat = me.0, ?target, ?give, "business center swap rejected");
                return;
            }
        };

        let (them, take, give) = swap;
        trace!(with = them.0, %give, %take, "business center swap");
        self.table.player_mut(me).deconstruct(give);
        self.table.player_mut(them).construct(give);
        self.table.player_mut(them).deconstruct(take);
        self.table.player_mut(me).construct(take);
    }

    fn is_opponent(&self, me: PlayerId, other: PlayerId) -> bool {
        other != me && other.index() < self.table.player_count()
    }

    fn is_legal_swap(&self, me: PlayerId, them: PlayerId, take: CardId, give: CardId) -> bool {
        let tradeable =
            |card| CardCatalog::is_establishment(card) && !CardCatalog::is_major_establishment(card);
        self.is_opponent(me, them)
            && tradeable(take)
            && tradeable(give)
            && self.table.players[me.index()].establishment_count(give) > 0
            && self.table.players[them.index()].establishment_count(take) > 0
    }

    /// Ask for a card, drop it silently if it is not buildable, else pay and build.
    fn construct(&mut self, me: PlayerId) -> Result<Option<CardId>, SupplyError> {
        let choice = self.strategies[me.index()].choose_construction(&self.table);
        let player = &self.table.players[me.index()];
        let legal = choice.filter(|&card| {
            player.can_construct_establishment(card, &self.table.supply) || player.can_construct_landmark(card)
        });

        let Some(card) = legal else {
            debug!(?choice, "does not build");
            return Ok(None);
        };

        let cost = CardCatalog::cost(card);
        let player = self.table.player_mut(me);
        player.adjust_money(-cost);
        player.construct(card);
        if CardCatalog::is_establishment(card) {
            self.table.supply.remove_from_market(card)?;
        }
        debug!(%card, cost, "builds");
        Ok(Some(card))
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seats: Vec<&str> = self.strategies.iter().map(|s| s.name()).collect();
        f.debug_struct("Game")
            .field("seats", &seats)
            .field("table", &self.table)
            .field("in_bonus_turn", &self.in_bonus_turn)
            .field("outcome", &self.outcome)
            .finish()
    }
}
