//! Parsing of typed player commands.

use felt_engine::player::Action;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(Action),
    /// `q` or `quit`: abandon the hand and leave the table
    Quit,
    /// Unparseable input, with a message for the player
    Invalid(String),
}

/// Parses a line typed at the action prompt (case-insensitive):
/// - `check` / `c` → Check
/// - `call` → Call
/// - `raise N` / `r N` → Raise by N on top of the call
/// - `fold` / `f` → Fold
/// - `q` / `quit` → Quit
///
/// Only syntax is checked here; whether the action is legal is up to the
/// engine.
///
/// ```rust
/// # use felt_cli::validation::{parse_player_action, ParseResult};
/// use felt_engine::player::Action;
///
/// assert_eq!(parse_player_action("r 50"), ParseResult::Action(Action::Raise(50)));
/// assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("bet"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&command) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match command {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(Action::Fold),
        "check" | "c" => ParseResult::Action(Action::Check),
        "call" => ParseResult::Action(Action::Call),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 50')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(Action::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid raise amount '{}'", amount)),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: check, call, raise <amount>, fold, q",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_forms() {
        assert_eq!(parse_player_action("c"), ParseResult::Action(Action::Check));
        assert_eq!(parse_player_action("f"), ParseResult::Action(Action::Fold));
        assert_eq!(parse_player_action("q"), ParseResult::Quit);
        assert_eq!(parse_player_action("  Call "), ParseResult::Action(Action::Call));
    }

    #[test]
    fn raise_needs_a_positive_number() {
        assert_eq!(parse_player_action("raise 120"), ParseResult::Action(Action::Raise(120)));
        assert!(matches!(parse_player_action("raise"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("raise 0"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("raise lots"), ParseResult::Invalid(_)));
        assert!(matches!(parse_player_action("r -5"), ParseResult::Invalid(_)));
    }

    #[test]
    fn unknown_and_empty_input() {
        match parse_player_action("allin") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(
            parse_player_action("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
    }
}
