use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The 52-card deck owned by a single hand. Cards are dealt from the top
/// without replacement.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Full deck in canonical order (suit-major). Call [`Deck::shuffle`]
    /// before dealing a real hand.
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Deck whose top cards are `top` in order, followed by every other card
    /// in canonical order.
    pub fn stacked(top: &[Card]) -> Result<Self, GameError> {
        let mut seen = 0u64;
        for c in top {
            let bit = 1u64 << c.index();
            if seen & bit != 0 {
                return Err(GameError::InvalidInput(format!("duplicate card {}", c)));
            }
            seen |= bit;
        }
        let mut cards = top.to_vec();
        cards.extend(
            full_deck()
                .into_iter()
                .filter(|c| seen & (1u64 << c.index()) == 0),
        );
        Ok(Self { cards, position: 0 })
    }

    /// Restores all 52 cards and applies a uniform random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = full_deck();
        self.cards.shuffle(rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = *self.cards.get(self.position).ok_or(GameError::EmptyDeck)?;
        self.position += 1;
        Ok(c)
    }

    pub fn draw_n(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        (0..n).map(|_| self.draw()).collect()
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
