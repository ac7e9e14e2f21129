//! The casino dealer that sits in the House seat.
//!
//! Strength is the hand category of the cards it can see. With a full board
//! (five or more known cards) that is the real evaluation; before the flop
//! it is estimated from rank multiplicity alone, so a pocket pair counts as
//! one pair and everything else as high card.
//!
//! | strength            | facing a bet                  | nothing to call |
//! |---------------------|-------------------------------|-----------------|
//! | `>= raise_at`       | raise `raise_amount` if covered, else call | same |
//! | `>= call_at`        | call                          | check           |
//! | below               | fold `fold_percent`% of the time, else call | check |

use felt_engine::actor::{Policy, SeatView};
use felt_engine::cards::Card;
use felt_engine::hand::{evaluate, Category};
use felt_engine::player::Action;
use rand::{Rng, RngCore};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealerConfig {
    pub raise_amount: u32,
    /// Chance, in percent, of folding a weak hand when facing a bet
    pub fold_percent: u8,
    pub raise_at: Category,
    pub call_at: Category,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            raise_amount: 50,
            fold_percent: 35,
            raise_at: Category::ThreeOfAKind,
            call_at: Category::OnePair,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DealerAI {
    config: DealerConfig,
}

impl DealerAI {
    pub fn new(config: DealerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DealerConfig {
        &self.config
    }

    /// Category of the best hand in `cards`, estimated when fewer than five
    /// are known.
    pub fn strength(cards: &[Card]) -> Category {
        if cards.len() >= 5 {
            if let Ok(hand) = evaluate(cards) {
                return hand.category;
            }
        }
        estimate(cards)
    }

    fn decide_with(
        &self,
        strength: Category,
        view: &SeatView<'_>,
        rng: &mut dyn RngCore,
    ) -> Action {
        let cfg = &self.config;
        if strength >= cfg.raise_at && view.stack > view.to_call.saturating_add(cfg.raise_amount) {
            return Action::Raise(cfg.raise_amount);
        }
        if view.to_call == 0 {
            return Action::Check;
        }
        if strength >= cfg.call_at {
            return Action::Call;
        }
        if rng.random_range(0..100u8) < cfg.fold_percent {
            Action::Fold
        } else {
            Action::Call
        }
    }
}

/// Multiplicity-only guess: pairs, trips and quads among the known ranks.
fn estimate(cards: &[Card]) -> Category {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    let pairs = counts.iter().filter(|&&n| n == 2).count();
    match counts.iter().copied().max().unwrap_or(0) {
        n if n >= 4 => Category::FourOfAKind,
        3 if pairs > 0 => Category::FullHouse,
        3 => Category::ThreeOfAKind,
        2 if pairs > 1 => Category::TwoPair,
        2 => Category::OnePair,
        _ => Category::HighCard,
    }
}

impl Policy for DealerAI {
    fn decide(&mut self, view: &SeatView<'_>, rng: &mut dyn RngCore) -> Action {
        let strength = Self::strength(&view.known_cards());
        let action = self.decide_with(strength, view, rng);
        trace!(?strength, to_call = view.to_call, ?action, "dealer decision");
        action
    }

    fn name(&self) -> &str {
        "dealer"
    }
}
