#![allow(dead_code)]

use std::collections::VecDeque;

use felt_engine::actor::{Decision, Frontend, Policy, SeatView};
use felt_engine::cards::{parse_cards, Card};
use felt_engine::deck::Deck;
use felt_engine::errors::GameError;
use felt_engine::player::Action;
use felt_engine::rules::LegalActions;
use felt_engine::state::Stage;
use rand::{Rng, RngCore};

/// Builds a deck from cards listed in deal order:
/// human x2, house x2, burn, flop x3, burn, turn, burn, river.
pub fn deck(deal_order: &str) -> Deck {
    let cards = parse_cards(deal_order).expect("valid cards");
    Deck::stacked(&cards).expect("no duplicates")
}

pub fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid cards")
}

/// Plays the Human seat from a fixed list of decisions; aborts once the
/// list runs out.
#[derive(Default)]
pub struct ScriptedSeat {
    pub moves: VecDeque<Decision>,
    pub requests: usize,
    pub rejected: Vec<GameError>,
    pub stages: Vec<Stage>,
    pub abort_now: bool,
}

impl ScriptedSeat {
    pub fn new(actions: &[Action]) -> Self {
        Self {
            moves: actions.iter().copied().map(Decision::Act).collect(),
            ..Self::default()
        }
    }
}

impl Frontend for ScriptedSeat {
    fn request_action(&mut self, _view: &SeatView<'_>, _options: &LegalActions) -> Decision {
        self.requests += 1;
        self.moves.pop_front().unwrap_or(Decision::Abort)
    }

    fn abort_requested(&self) -> bool {
        self.abort_now
    }

    fn on_stage_advance(&mut self, stage: Stage, _community: &[Card]) {
        self.stages.push(stage);
    }

    fn on_rejected(&mut self, error: &GameError) {
        self.rejected.push(error.clone());
    }
}

/// House policy replaying fixed actions, then calling forever.
#[derive(Default)]
pub struct ScriptedPolicy {
    pub moves: VecDeque<Action>,
}

impl ScriptedPolicy {
    pub fn new(actions: &[Action]) -> Self {
        Self {
            moves: actions.iter().copied().collect(),
        }
    }
}

impl Policy for ScriptedPolicy {
    fn decide(&mut self, _view: &SeatView<'_>, _rng: &mut dyn RngCore) -> Action {
        self.moves.pop_front().unwrap_or(Action::Call)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Picks actions at random from the supplied generator, for either seat.
pub struct Chaotic<R> {
    pub rng: R,
}

fn random_action(rng: &mut dyn RngCore) -> Action {
    match rng.random_range(0..100) {
        0..=9 => Action::Fold,
        10..=29 => Action::Raise(rng.random_range(1..300)),
        30..=39 => Action::Check,
        _ => Action::Call,
    }
}

impl<R: RngCore> Frontend for Chaotic<R> {
    fn request_action(&mut self, _view: &SeatView<'_>, _options: &LegalActions) -> Decision {
        Decision::Act(random_action(&mut self.rng))
    }
}

impl<R> Policy for Chaotic<R> {
    fn decide(&mut self, _view: &SeatView<'_>, rng: &mut dyn RngCore) -> Action {
        random_action(rng)
    }

    fn name(&self) -> &str {
        "chaotic"
    }
}
