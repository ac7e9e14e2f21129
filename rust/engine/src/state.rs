//! Per-hand betting state: pot, bet level, commitments and stacks.
//!
//! A [`RoundState`] lives for exactly one hand. Every chip that leaves a stack
//! is recorded in the seat's contribution, so `pot == contributed[0] +
//! contributed[1]` holds until the pot is paid out, and the hand can be
//! unwound on abort.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::Seat;
use crate::rules::{Blinds, ValidatedAction};

/// Betting stage of a Texas Hold'em hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Hole cards dealt, blinds posted
    PreFlop,
    /// Three community cards
    Flop,
    /// Fourth community card
    Turn,
    /// Fifth community card
    River,
    /// Hands revealed and compared
    Showdown,
}

impl Stage {
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::PreFlop => Some(Stage::Flop),
            Stage::Flop => Some(Stage::Turn),
            Stage::Turn => Some(Stage::River),
            Stage::River => Some(Stage::Showdown),
            Stage::Showdown => None,
        }
    }

    /// Community cards revealed on entering this stage.
    pub fn cards_revealed(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::PreFlop | Stage::Showdown => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::PreFlop => "Pre-Flop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }
}

/// Splits a tied pot. The odd chip, if any, goes to the Human seat.
pub fn split_pot(pot: u32) -> [u32; 2] {
    let half = pot / 2;
    [pot - half, half]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pot: u32,
    current_bet: u32,
    committed: [u32; 2],
    contributed: [u32; 2],
    folded: [bool; 2],
    stacks: [u32; 2],
    starting_stacks: [u32; 2],
    community: Vec<Card>,
    stage: Stage,
    settled: bool,
}

impl RoundState {
    /// Starts a hand: the Human seat posts the small blind and the House seat
    /// the big blind, each clamped to the chips available.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientChips`] when either seat has no chips,
    /// [`GameError::InvalidInput`] when both stacks together overflow `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use felt_engine::player::Seat;
    /// use felt_engine::rules::Blinds;
    /// use felt_engine::state::RoundState;
    ///
    /// let state = RoundState::new_hand([1000, 1000], &Blinds::default()).unwrap();
    /// assert_eq!(state.pot(), 75);
    /// assert_eq!(state.current_bet(), 50);
    /// assert_eq!(state.to_call(Seat::Human), 25);
    /// assert!(RoundState::new_hand([0, 1000], &Blinds::default()).is_err());
    /// ```
    pub fn new_hand(stacks: [u32; 2], blinds: &Blinds) -> Result<Self, GameError> {
        if let Some(&available) = stacks.iter().find(|&&s| s == 0) {
            return Err(GameError::InsufficientChips {
                needed: 1,
                available,
            });
        }
        // pot and total_chips hold the sum of both stacks
        if stacks[0].checked_add(stacks[1]).is_none() {
            return Err(GameError::InvalidInput(format!(
                "stacks {} and {} exceed {} chips in play",
                stacks[0],
                stacks[1],
                u32::MAX
            )));
        }
        let mut state = Self {
            pot: 0,
            current_bet: 0,
            committed: [0; 2],
            contributed: [0; 2],
            folded: [false; 2],
            stacks,
            starting_stacks: stacks,
            community: Vec::with_capacity(5),
            stage: Stage::PreFlop,
            settled: false,
        };
        state.commit(Seat::Human, blinds.small);
        state.commit(Seat::House, blinds.big);
        Ok(state)
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn stack(&self, seat: Seat) -> u32 {
        self.stacks[seat.index()]
    }
    pub fn stacks(&self) -> [u32; 2] {
        self.stacks
    }
    pub fn starting_stacks(&self) -> [u32; 2] {
        self.starting_stacks
    }
    pub fn committed(&self, seat: Seat) -> u32 {
        self.committed[seat.index()]
    }
    pub fn contributed(&self, seat: Seat) -> u32 {
        self.contributed[seat.index()]
    }
    pub fn has_folded(&self, seat: Seat) -> bool {
        self.folded[seat.index()]
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn to_call(&self, seat: Seat) -> u32 {
        self.current_bet.saturating_sub(self.committed(seat))
    }

    /// Chips on the table: both stacks plus the pot. Constant for a hand.
    pub fn total_chips(&self) -> u32 {
        self.stacks[0] + self.stacks[1] + self.pot
    }

    /// Moves up to `amount` chips from the seat's stack into the pot and
    /// returns how many actually moved.
    fn commit(&mut self, seat: Seat, amount: u32) -> u32 {
        let i = seat.index();
        let paid = amount.min(self.stacks[i]);
        self.stacks[i] -= paid;
        self.committed[i] += paid;
        self.contributed[i] += paid;
        self.pot += paid;
        self.current_bet = self.current_bet.max(self.committed[i]);
        paid
    }

    /// Applies a validated action; returns the chips it cost.
    pub(crate) fn apply(&mut self, seat: Seat, action: &ValidatedAction) -> u32 {
        match action {
            ValidatedAction::Fold => {
                self.folded[seat.index()] = true;
                0
            }
            ValidatedAction::Check => 0,
            other => self.commit(seat, other.chips()),
        }
    }

    /// Returns the part of a bet the other seat could not match because it
    /// is all-in. Yields the refunded seat and amount, if any.
    pub(crate) fn return_uncalled(&mut self) -> Option<(Seat, u32)> {
        let [a, b] = self.committed;
        let (over, excess) = match a.cmp(&b) {
            std::cmp::Ordering::Greater => (Seat::Human, a - b),
            std::cmp::Ordering::Less => (Seat::House, b - a),
            std::cmp::Ordering::Equal => return None,
        };
        if self.stack(over.other()) != 0 {
            return None;
        }
        let i = over.index();
        self.stacks[i] += excess;
        self.committed[i] -= excess;
        self.contributed[i] -= excess;
        self.pot -= excess;
        self.current_bet = self.committed[0].max(self.committed[1]);
        Some((over, excess))
    }

    /// Enters the next stage with newly revealed community cards. Per-stage
    /// commitments and the bet level reset; pot and stacks carry over.
    pub(crate) fn advance(&mut self, stage: Stage, revealed: &[Card]) {
        self.stage = stage;
        self.community.extend_from_slice(revealed);
        self.committed = [0; 2];
        self.current_bet = 0;
    }

    /// Pays the whole pot to `winner`.
    pub(crate) fn award(&mut self, winner: Seat) -> Result<u32, GameError> {
        let mut payouts = [0; 2];
        payouts[winner.index()] = self.pot;
        self.pay(payouts)?;
        Ok(payouts[winner.index()])
    }

    /// Splits the pot between both seats (see [`split_pot`]).
    pub(crate) fn split(&mut self) -> Result<[u32; 2], GameError> {
        let payouts = split_pot(self.pot);
        self.pay(payouts)?;
        Ok(payouts)
    }

    /// Gives every contribution back so both stacks return to their
    /// starting values.
    pub(crate) fn refund(&mut self) -> Result<(), GameError> {
        self.pay(self.contributed)
    }

    fn pay(&mut self, payouts: [u32; 2]) -> Result<(), GameError> {
        if self.settled {
            return Err(GameError::HandAlreadyComplete);
        }
        for (stack, paid) in self.stacks.iter_mut().zip(payouts) {
            *stack += paid;
        }
        self.pot = 0;
        self.settled = true;
        Ok(())
    }
}
