use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// The two seats of a heads-up hand.
/// `Human` is actor A (small blind, first to act on every stage); `House` is
/// actor B (big blind), driven by a [`crate::actor::Policy`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    House,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::Human, Seat::House];

    pub fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::House => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::Human => Seat::House,
            Seat::House => Seat::Human,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Seat::Human => "human",
            Seat::House => "house",
        }
    }
}

/// An action requested by a seat before the engine validates it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pass without betting (only legal with nothing to call)
    Check,
    /// Match the current bet level; a check when nothing is owed
    Call,
    /// Call, then add this many chips on top
    Raise(u32),
    /// Give up the hand and the pot
    Fold,
}

/// Default chip balance a new player sits down with.
pub const STARTING_CHIPS: u32 = 1_000;

/// A chip balance that persists across hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self {
            name: name.into(),
            chips,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u32 {
        self.chips
    }

    pub fn is_busted(&self) -> bool {
        self.chips == 0
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn remove_chips(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.chips {
            return Err(GameError::InsufficientChips {
                needed: amount,
                available: self.chips,
            });
        }
        self.chips -= amount;
        Ok(())
    }
}
