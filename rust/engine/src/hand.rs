use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

/// Result of ranking a hand. The derived ordering compares `category` first
/// and then `tiebreak` lexicographically; tie-break keys are only meaningful
/// between hands of the same category.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub category: Category,
    // rank values, most significant first
    pub tiebreak: Vec<u8>,
}

/// Ranks exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> EvaluatedHand {
    let mut ranks = cards.map(|c| c.rank.value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ranks);

    let mut counts = [0u8; 15];
    for &r in &ranks {
        counts[r as usize] += 1;
    }
    // (count, rank) sorted by count desc, then rank desc
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] > 0)
        .map(|r| (counts[r as usize], r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));
    let group_ranks = || groups.iter().map(|&(_, r)| r).collect::<Vec<u8>>();

    let (category, tiebreak) = match (straight, flush) {
        (Some(14), true) => (Category::RoyalFlush, straight_key(14)),
        (Some(high), true) => (Category::StraightFlush, straight_key(high)),
        _ if groups[0].0 == 4 => (Category::FourOfAKind, group_ranks()),
        _ if groups[0].0 == 3 && groups[1].0 >= 2 => (Category::FullHouse, group_ranks()),
        (_, true) => (Category::Flush, ranks.to_vec()),
        (Some(high), false) => (Category::Straight, straight_key(high)),
        _ if groups[0].0 == 3 => (Category::ThreeOfAKind, group_ranks()),
        _ if groups[0].0 == 2 && groups[1].0 == 2 => (Category::TwoPair, group_ranks()),
        _ if groups[0].0 == 2 => (Category::OnePair, group_ranks()),
        _ => (Category::HighCard, ranks.to_vec()),
    };

    EvaluatedHand { category, tiebreak }
}

/// Best five-card hand among `cards` (at least five, no duplicates).
///
/// # Errors
///
/// [`GameError::InvalidInput`] for fewer than five cards or a repeated card.
///
/// # Examples
///
/// ```
/// use felt_engine::cards::parse_cards;
/// use felt_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
/// assert_eq!(evaluate(&cards).unwrap().category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, GameError> {
    best_hand(cards).map(|(hand, _)| hand)
}

/// Like [`evaluate`] but also returns the five cards forming the hand.
pub fn best_hand(cards: &[Card]) -> Result<(EvaluatedHand, [Card; 5]), GameError> {
    check_input(cards)?;
    combinations(cards)
        .map(|five| (evaluate_five(&five), five))
        .max_by(|a, b| a.0.cmp(&b.0))
        .ok_or_else(|| GameError::InvalidInput("no five-card combination".into()))
}

pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.cmp(b)
}

/// Every 5-card subset of `cards`, by index in lexicographic order.
pub fn combinations(cards: &[Card]) -> Combinations<'_> {
    Combinations {
        cards,
        indices: [0, 1, 2, 3, 4],
        started: false,
        done: cards.len() < 5,
    }
}

#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    cards: &'a [Card],
    indices: [usize; 5],
    started: bool,
    done: bool,
}

impl Iterator for Combinations<'_> {
    type Item = [Card; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        let n = self.cards.len();
        // rightmost index that can still move right
        let mut i = 5;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < n - 5 + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..5 {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.current())
    }
}

impl Combinations<'_> {
    fn current(&self) -> [Card; 5] {
        self.indices.map(|i| self.cards[i])
    }
}

fn check_input(cards: &[Card]) -> Result<(), GameError> {
    if cards.len() < 5 {
        return Err(GameError::InvalidInput(format!(
            "need at least 5 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = 0u64;
    for c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Err(GameError::InvalidInput(format!("duplicate card {}", c)));
        }
        seen |= bit;
    }
    Ok(())
}

// `ranks` sorted descending
fn straight_high(ranks: &[u8; 5]) -> Option<u8> {
    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if ranks[0] - ranks[4] == 4 {
        return Some(ranks[0]);
    }
    // wheel: Ace plays low
    if *ranks == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn straight_key(high: u8) -> Vec<u8> {
    (0..5).map(|i| high - i).collect()
}
