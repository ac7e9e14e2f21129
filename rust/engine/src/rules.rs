use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Action as A;

/// An action with concrete chip amounts, ready to apply to a
/// [`crate::state::RoundState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u32),
    Raise { call: u32, raise: u32 },
    /// Every remaining chip; may be less than a full call.
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips this action moves from the stack into the pot.
    pub fn chips(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => n,
            ValidatedAction::Raise { call, raise } => call + raise,
        }
    }
}

/// Fixed blinds posted at the start of every hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    pub fn new(small: u32, big: u32) -> Result<Self, GameError> {
        if small == 0 || small > big {
            return Err(GameError::InvalidInput(format!(
                "blinds must satisfy 0 < small <= big (got {}/{})",
                small, big
            )));
        }
        Ok(Self { small, big })
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self { small: 25, big: 50 }
    }
}

/// What the acting seat may do, handed to the collaborator with each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalActions {
    pub to_call: u32,
    pub stack: u32,
    pub can_check: bool,
    /// Largest raise on top of the call that the stack covers; 0 when only
    /// an all-in call is possible.
    pub max_raise: u32,
}

pub fn legal_actions(stack: u32, to_call: u32) -> LegalActions {
    LegalActions {
        to_call,
        stack,
        can_check: to_call == 0,
        max_raise: stack.saturating_sub(to_call),
    }
}

/// Validates a requested action against the stack and the amount owed.
///
/// Calls and raises the stack cannot cover become [`ValidatedAction::AllIn`]
/// rather than failing; a call with nothing owed is a check.
///
/// # Errors
///
/// [`GameError::InvalidAction`] for a check while facing a bet or a raise of
/// zero chips.
///
/// # Examples
///
/// ```
/// use felt_engine::player::Action;
/// use felt_engine::rules::{validate_action, ValidatedAction};
///
/// assert_eq!(validate_action(1000, 25, Action::Call), Ok(ValidatedAction::Call(25)));
/// assert_eq!(
///     validate_action(1000, 25, Action::Raise(50)),
///     Ok(ValidatedAction::Raise { call: 25, raise: 50 })
/// );
/// // stack too small for the full raise
/// assert_eq!(validate_action(60, 25, Action::Raise(50)), Ok(ValidatedAction::AllIn(60)));
/// assert!(validate_action(1000, 25, Action::Check).is_err());
/// ```
pub fn validate_action(stack: u32, to_call: u32, action: A) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::InvalidAction(format!(
                    "cannot check facing a bet of {}",
                    to_call
                )))
            }
        }
        A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if stack <= to_call {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(0) => Err(GameError::InvalidAction(
            "raise amount must be positive".into(),
        )),
        A::Raise(amount) => {
            if to_call.saturating_add(amount) >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise {
                    call: to_call,
                    raise: amount,
                })
            }
        }
    }
}
