//! `felt rng`: shows what a seed produces, to check reproducibility by eye.

use std::io::Write;

use felt_engine::deck::Deck;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::CliError;
use crate::formatters::format_board;

/// Prints five raw ChaCha20 outputs and the first cards of a deck shuffled
/// from the same seed.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let sample: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();

    let mut deck = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(seed));
    let top = deck.draw_n(5)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "RNG sample: {:?}", sample)?;
    writeln!(out, "Deck top: {}", format_board(&top))?;
    Ok(())
}
