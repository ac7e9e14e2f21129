//! Card, board, hand and action formatting for terminal display.
//!
//! Suits use Unicode symbols (♥ ♦ ♣ ♠) where the terminal is likely to
//! render them and fall back to ASCII letters (h d c s) otherwise.
//!
//! ```rust
//! use felt_engine::cards::{Card, Rank, Suit};
//! use felt_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use felt_engine::cards::{Card, Suit};
use felt_engine::hand::{Category, EvaluatedHand};
use felt_engine::player::{Action, Seat};
use felt_engine::rules::ValidatedAction;

/// On Windows only modern terminals (Windows Terminal, VS Code, anything
/// setting TERM_PROGRAM) get Unicode; everywhere else it is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// `[A♠ K♥ Q♦]`, or `[]` for an empty board.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn seat_label(seat: Seat) -> &'static str {
    match seat {
        Seat::Human => "You",
        Seat::House => "Dealer",
    }
}

pub fn format_action(action: &Action) -> String {
    match action {
        Action::Fold => "fold".to_string(),
        Action::Check => "check".to_string(),
        Action::Call => "call".to_string(),
        Action::Raise(amount) => format!("raise {}", amount),
    }
}

/// Describes an applied action from the table's point of view:
/// "You call 25", "Dealer calls 25".
pub fn format_validated(seat: Seat, action: &ValidatedAction) -> String {
    let you = seat == Seat::Human;
    let verb = |base: &str| {
        if you {
            base.to_string()
        } else {
            format!("{}s", base)
        }
    };
    let text = match action {
        ValidatedAction::Fold => verb("fold"),
        ValidatedAction::Check => verb("check"),
        ValidatedAction::Call(n) => format!("{} {}", verb("call"), n),
        ValidatedAction::Raise { call: 0, raise } => format!("{} {}", verb("bet"), raise),
        ValidatedAction::Raise { call, raise } => {
            format!("{} {} and {} {}", verb("call"), call, verb("raise"), raise)
        }
        ValidatedAction::AllIn(n) if you => format!("are all-in for {}", n),
        ValidatedAction::AllIn(n) => format!("is all-in for {}", n),
    };
    format!("{} {}", seat_label(seat), text)
}

fn rank_word(value: u8) -> &'static str {
    match value {
        14 => "Ace",
        13 => "King",
        12 => "Queen",
        11 => "Jack",
        10 => "Ten",
        9 => "Nine",
        8 => "Eight",
        7 => "Seven",
        6 => "Six",
        5 => "Five",
        4 => "Four",
        3 => "Three",
        2 => "Two",
        _ => "?",
    }
}

fn rank_plural(value: u8) -> String {
    let word = rank_word(value);
    if word.ends_with('x') {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

/// Category plus the rank that matters most, e.g. "Straight, Queen high".
pub fn format_hand(hand: &EvaluatedHand) -> String {
    let lead = hand.tiebreak.first().copied().unwrap_or(0);
    match hand.category {
        Category::RoyalFlush => hand.category.name().to_string(),
        Category::StraightFlush | Category::Straight | Category::Flush | Category::HighCard => {
            format!("{}, {} high", hand.category.name(), rank_word(lead))
        }
        Category::FullHouse => {
            let over = hand.tiebreak.get(1).copied().unwrap_or(0);
            format!(
                "{}, {} over {}",
                hand.category.name(),
                rank_plural(lead),
                rank_plural(over)
            )
        }
        _ => format!("{}, {}", hand.category.name(), rank_plural(lead)),
    }
}
