use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    /// Drawing past the end of the deck. Indicates a bug, never bad input.
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Insufficient chips: needed {needed}, available {available}")]
    InsufficientChips { needed: u32, available: u32 },
    #[error("Invalid action: {0}")]
    InvalidAction(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Hand already complete")]
    HandAlreadyComplete,
}
