//! `felt deal`: deals one hand face up, burns included, without betting.

use std::io::Write;

use felt_engine::cards::Card;
use felt_engine::deck::Deck;
use felt_engine::hand::evaluate;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_hand};

pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(seed));

    let human = deck.draw_n(2)?;
    let house = deck.draw_n(2)?;
    let mut board = Vec::with_capacity(5);
    let mut burns = Vec::with_capacity(3);
    for count in [3, 1, 1] {
        burns.push(deck.draw()?);
        board.extend(deck.draw_n(count)?);
    }

    let with_board = |hole: &[Card]| {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(&board);
        evaluate(&cards)
    };
    let human_hand = with_board(&human)?;
    let house_hand = with_board(&house)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "You:    {}  {}", format_board(&human), format_hand(&human_hand))?;
    writeln!(out, "Dealer: {}  {}", format_board(&house), format_hand(&house_hand))?;
    writeln!(out, "Board:  {}", format_board(&board))?;
    let burned: Vec<String> = burns.iter().map(format_card).collect();
    writeln!(out, "Burned: {}", burned.join(" "))?;
    writeln!(out, "Remaining: {}", deck.remaining())?;
    Ok(())
}
