//! `felt eval`: ranks five to seven cards given on the command line.

use std::io::Write;

use felt_engine::cards::parse_cards;
use felt_engine::hand::best_hand;

use crate::error::CliError;
use crate::formatters::{format_board, format_hand};
use crate::ui;

/// Cards may be given as separate arguments or in one quoted string
/// (`felt eval "Ah Kh Qh Jh Th"`); ranks accept `10` or `T`, suits letters or
/// symbols.
pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = match parse_cards(&cards.join(" ")) {
        Ok(cards) => cards,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    if !(5..=7).contains(&cards.len()) {
        let msg = format!("eval needs 5 to 7 cards, got {}", cards.len());
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let (hand, five) = match best_hand(&cards) {
        Ok(found) => found,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Best five: {}", format_board(&five))?;
    writeln!(out, "Tiebreak: {:?}", hand.tiebreak)?;
    Ok(())
}
