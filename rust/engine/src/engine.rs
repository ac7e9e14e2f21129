use std::cmp::Ordering;

use rand::RngCore;
use tracing::{debug, info, warn};

use crate::actor::{Decision, Frontend, Policy, SeatView};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, EvaluatedHand};
use crate::logger::ActionRecord;
use crate::player::{Action, Seat};
use crate::rules::{legal_actions, validate_action, Blinds, ValidatedAction};
use crate::state::{RoundState, Stage};

/// How a hand ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// One seat folded; the other took `pot` without a showdown.
    Folded { winner: Seat, pot: u32 },
    /// Both hands were compared. `winner` is `None` for a split pot.
    Showdown {
        hands: [EvaluatedHand; 2],
        winner: Option<Seat>,
        pot: u32,
        payouts: [u32; 2],
    },
    /// Cancelled by the frontend; every chip went back where it came from.
    Aborted,
}

/// Everything a caller needs once a hand is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOutcome {
    pub resolution: Resolution,
    pub hole_cards: [[Card; 2]; 2],
    pub board: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    pub starting_stacks: [u32; 2],
    pub stacks: [u32; 2],
}

impl HandOutcome {
    pub fn winner(&self) -> Option<Seat> {
        match &self.resolution {
            Resolution::Folded { winner, .. } => Some(*winner),
            Resolution::Showdown { winner, .. } => *winner,
            Resolution::Aborted => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.resolution == Resolution::Aborted
    }

    /// Chips won (positive) or lost (negative) by `seat` over the hand.
    pub fn net(&self, seat: Seat) -> i64 {
        let i = seat.index();
        i64::from(self.stacks[i]) - i64::from(self.starting_stacks[i])
    }
}

enum Flow {
    Continue,
    Folded(Seat),
    Aborted,
}

/// Drives a single heads-up hand from blinds to resolution.
///
/// The engine owns the deck, the [`RoundState`] and the random source used
/// for both the shuffle and the House policy. [`Engine::play`] consumes it,
/// so a resolved hand cannot be touched again.
///
/// # Examples
///
/// ```
/// use felt_engine::actor::{Decision, Frontend, Policy, SeatView};
/// use felt_engine::engine::Engine;
/// use felt_engine::player::Action;
/// use felt_engine::rules::{Blinds, LegalActions};
/// use rand::{RngCore, SeedableRng};
/// use rand_chacha::ChaCha20Rng;
///
/// struct AlwaysCall;
/// impl Frontend for AlwaysCall {
///     fn request_action(&mut self, _: &SeatView<'_>, _: &LegalActions) -> Decision {
///         Decision::Act(Action::Call)
///     }
/// }
/// impl Policy for AlwaysCall {
///     fn decide(&mut self, _: &SeatView<'_>, _: &mut dyn RngCore) -> Action {
///         Action::Call
///     }
///     fn name(&self) -> &str {
///         "always-call"
///     }
/// }
///
/// let engine = Engine::new_hand([1000, 1000], &Blinds::default(), ChaCha20Rng::seed_from_u64(7))
///     .unwrap();
/// let outcome = engine.play(&mut AlwaysCall, &mut AlwaysCall).unwrap();
/// assert_eq!(outcome.board.len(), 5);
/// assert_eq!(outcome.stacks[0] + outcome.stacks[1], 2000);
/// ```
#[derive(Debug)]
pub struct Engine<R> {
    state: RoundState,
    deck: Deck,
    hole_cards: [[Card; 2]; 2],
    rng: R,
    actions: Vec<ActionRecord>,
}

impl<R: RngCore> Engine<R> {
    /// Posts blinds, shuffles a fresh deck with `rng` and deals hole cards.
    pub fn new_hand(stacks: [u32; 2], blinds: &Blinds, mut rng: R) -> Result<Self, GameError> {
        let deck = Deck::shuffled(&mut rng);
        Self::with_deck(stacks, blinds, deck, rng)
    }

    /// Like [`Engine::new_hand`] but deals from `deck` as given.
    pub fn with_deck(
        stacks: [u32; 2],
        blinds: &Blinds,
        mut deck: Deck,
        rng: R,
    ) -> Result<Self, GameError> {
        let state = RoundState::new_hand(stacks, blinds)?;
        let human = [deck.draw()?, deck.draw()?];
        let house = [deck.draw()?, deck.draw()?];
        debug!(
            pot = state.pot(),
            stacks = ?state.stacks(),
            "blinds posted, hole cards dealt"
        );
        Ok(Self {
            state,
            deck,
            hole_cards: [human, house],
            rng,
            actions: Vec::new(),
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn hole_cards(&self, seat: Seat) -> [Card; 2] {
        self.hole_cards[seat.index()]
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Runs the hand to completion: betting on each stage, community cards
    /// between stages, then fold resolution, showdown or abort.
    pub fn play(
        mut self,
        frontend: &mut dyn Frontend,
        policy: &mut dyn Policy,
    ) -> Result<HandOutcome, GameError> {
        for stage in [Stage::PreFlop, Stage::Flop, Stage::Turn, Stage::River] {
            if stage != Stage::PreFlop {
                self.reveal(stage, frontend)?;
            }
            match self.betting_round(frontend, policy)? {
                Flow::Continue => {}
                Flow::Folded(loser) => return self.finish_fold(loser.other()),
                Flow::Aborted => return self.finish_abort(),
            }
        }
        self.showdown(frontend)
    }

    fn reveal(&mut self, stage: Stage, frontend: &mut dyn Frontend) -> Result<(), GameError> {
        self.deck.burn()?;
        let cards = self.deck.draw_n(stage.cards_revealed())?;
        self.state.advance(stage, &cards);
        debug!(
            stage = stage.name(),
            community = ?self.state.community(),
            pot = self.state.pot(),
            "community cards revealed"
        );
        frontend.on_stage_advance(stage, self.state.community());
        Ok(())
    }

    fn betting_round(
        &mut self,
        frontend: &mut dyn Frontend,
        policy: &mut dyn Policy,
    ) -> Result<Flow, GameError> {
        let stage = self.state.stage();
        // someone is all-in: nothing left to bet, run the board out
        if stage != Stage::PreFlop && Seat::BOTH.iter().any(|&s| self.state.stack(s) == 0) {
            return Ok(Flow::Continue);
        }

        let mut acted = [false; 2];
        let mut seat = Seat::Human;
        while !self.stage_complete(&acted) {
            if self.state.stack(seat) == 0 {
                seat = seat.other();
                continue;
            }
            if frontend.abort_requested() {
                return Ok(Flow::Aborted);
            }
            let Some(action) = self.next_action(seat, frontend, policy) else {
                return Ok(Flow::Aborted);
            };

            let bet_before = self.state.current_bet();
            let paid = self.state.apply(seat, &action);
            debug!(
                seat = seat.as_str(),
                stage = stage.name(),
                ?action,
                paid,
                pot = self.state.pot(),
                "action applied"
            );
            self.actions.push(ActionRecord {
                seat,
                stage,
                action,
            });
            frontend.on_action(seat, &action, &self.state);

            if action == ValidatedAction::Fold {
                return Ok(Flow::Folded(seat));
            }
            if self.state.current_bet() > bet_before {
                acted = [false; 2];
            }
            acted[seat.index()] = true;
            seat = seat.other();
        }

        if let Some((seat, amount)) = self.state.return_uncalled() {
            debug!(seat = seat.as_str(), amount, "uncalled chips returned");
        }
        Ok(Flow::Continue)
    }

    /// Both seats have acted since the last raise (or cannot act) and either
    /// the bets match or the seat behind is all-in.
    fn stage_complete(&self, acted: &[bool; 2]) -> bool {
        let done = |s: Seat| acted[s.index()] || self.state.stack(s) == 0;
        if !(done(Seat::Human) && done(Seat::House)) {
            return false;
        }
        let human = self.state.committed(Seat::Human);
        let house = self.state.committed(Seat::House);
        match human.cmp(&house) {
            Ordering::Equal => true,
            Ordering::Less => self.state.stack(Seat::Human) == 0,
            Ordering::Greater => self.state.stack(Seat::House) == 0,
        }
    }

    /// `None` means the frontend cancelled the hand.
    fn next_action(
        &mut self,
        seat: Seat,
        frontend: &mut dyn Frontend,
        policy: &mut dyn Policy,
    ) -> Option<ValidatedAction> {
        let stack = self.state.stack(seat);
        let to_call = self.state.to_call(seat);
        let view = SeatView::new(seat, self.hole_cards[seat.index()], &self.state);

        match seat {
            Seat::Human => {
                let options = legal_actions(stack, to_call);
                loop {
                    match frontend.request_action(&view, &options) {
                        Decision::Abort => return None,
                        Decision::Act(action) => match validate_action(stack, to_call, action) {
                            Ok(validated) => return Some(validated),
                            Err(e) => {
                                warn!(error = %e, ?action, "rejected action, asking again");
                                frontend.on_rejected(&e);
                            }
                        },
                    }
                }
            }
            Seat::House => {
                let action = policy.decide(&view, &mut self.rng);
                match validate_action(stack, to_call, action) {
                    Ok(validated) => Some(validated),
                    Err(e) => {
                        warn!(
                            policy = policy.name(),
                            error = %e,
                            ?action,
                            "policy chose an illegal action, calling instead"
                        );
                        validate_action(stack, to_call, Action::Call).ok()
                    }
                }
            }
        }
    }

    fn finish_fold(mut self, winner: Seat) -> Result<HandOutcome, GameError> {
        let pot = self.state.pot();
        self.state.award(winner)?;
        info!(
            winner = winner.as_str(),
            pot,
            stage = self.state.stage().name(),
            "hand won by fold"
        );
        Ok(self.into_outcome(Resolution::Folded { winner, pot }))
    }

    fn finish_abort(mut self) -> Result<HandOutcome, GameError> {
        self.state.refund()?;
        info!(
            stage = self.state.stage().name(),
            stacks = ?self.state.stacks(),
            "hand aborted, contributions refunded"
        );
        Ok(self.into_outcome(Resolution::Aborted))
    }

    fn showdown(mut self, frontend: &mut dyn Frontend) -> Result<HandOutcome, GameError> {
        self.state.advance(Stage::Showdown, &[]);
        frontend.on_stage_advance(Stage::Showdown, self.state.community());

        let hands = [self.showdown_hand(Seat::Human)?, self.showdown_hand(Seat::House)?];
        let pot = self.state.pot();
        let (winner, payouts) = match hands[0].cmp(&hands[1]) {
            Ordering::Greater => (Some(Seat::Human), [self.state.award(Seat::Human)?, 0]),
            Ordering::Less => (Some(Seat::House), [0, self.state.award(Seat::House)?]),
            Ordering::Equal => (None, self.state.split()?),
        };
        info!(
            winner = winner.map_or("split", Seat::as_str),
            pot,
            human = ?hands[0].category,
            house = ?hands[1].category,
            "showdown"
        );
        Ok(self.into_outcome(Resolution::Showdown {
            hands,
            winner,
            pot,
            payouts,
        }))
    }

    fn showdown_hand(&self, seat: Seat) -> Result<EvaluatedHand, GameError> {
        let mut cards = self.hole_cards[seat.index()].to_vec();
        cards.extend_from_slice(self.state.community());
        evaluate(&cards)
    }

    fn into_outcome(self, resolution: Resolution) -> HandOutcome {
        HandOutcome {
            resolution,
            hole_cards: self.hole_cards,
            board: self.state.community().to_vec(),
            actions: self.actions,
            starting_stacks: self.state.starting_stacks(),
            stacks: self.state.stacks(),
        }
    }
}
