//! Seams between the betting engine and whoever decides actions.
//!
//! The engine pulls decisions for the Human seat from a [`Frontend`] (the
//! UI/input collaborator) and for the House seat from a [`Policy`]. Both see
//! the hand only through a [`SeatView`].

use rand::RngCore;

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::{Action, Seat};
use crate::rules::{LegalActions, ValidatedAction};
use crate::state::{RoundState, Stage};

/// What one seat can observe when it is asked to act.
#[derive(Debug, Clone, Copy)]
pub struct SeatView<'a> {
    pub seat: Seat,
    pub stage: Stage,
    pub hole_cards: [Card; 2],
    pub community: &'a [Card],
    pub pot: u32,
    pub current_bet: u32,
    pub to_call: u32,
    pub stack: u32,
    pub opponent_stack: u32,
}

impl<'a> SeatView<'a> {
    pub(crate) fn new(seat: Seat, hole_cards: [Card; 2], state: &'a RoundState) -> Self {
        Self {
            seat,
            stage: state.stage(),
            hole_cards,
            community: state.community(),
            pot: state.pot(),
            current_bet: state.current_bet(),
            to_call: state.to_call(seat),
            stack: state.stack(seat),
            opponent_stack: state.stack(seat.other()),
        }
    }

    /// Hole cards followed by the community cards revealed so far.
    pub fn known_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(2 + self.community.len());
        cards.extend_from_slice(&self.hole_cards);
        cards.extend_from_slice(self.community);
        cards
    }
}

/// Answer to an action request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Act(Action),
    /// Cancel the hand; all committed chips are returned.
    Abort,
}

/// The collaborator driving the Human seat and observing the hand.
///
/// Only [`Frontend::request_action`] is required. The hooks are purely
/// informational and cannot change what the engine does.
pub trait Frontend {
    /// Called on the Human seat's turn. Returning an action outside
    /// `options` gets it rejected via [`Frontend::on_rejected`] and asked
    /// again.
    fn request_action(&mut self, view: &SeatView<'_>, options: &LegalActions) -> Decision;

    /// Polled before every action request, for either seat.
    fn abort_requested(&self) -> bool {
        false
    }

    /// Called after community cards are revealed, and once at showdown.
    fn on_stage_advance(&mut self, _stage: Stage, _community: &[Card]) {}

    fn on_action(&mut self, _seat: Seat, _action: &ValidatedAction, _state: &RoundState) {}

    fn on_rejected(&mut self, _error: &GameError) {}
}

/// Decision logic for a rule-driven seat.
///
/// Randomness comes only from `rng`, so a seeded generator makes a policy
/// fully reproducible.
pub trait Policy {
    fn decide(&mut self, view: &SeatView<'_>, rng: &mut dyn RngCore) -> Action;

    fn name(&self) -> &str;
}
