//! Simulation command: dealer against dealer, no input.
//!
//! Both seats are driven by policies from `felt-ai`; the human seat always
//! plays the dealer rules through an [`AutoPilot`]. When one side busts a new
//! match starts with fresh stacks. Every hand is checked for chip
//! conservation.
//!
//! # Environment Variables
//!
//! - `FELT_SIM_BREAK_AFTER`: stop after N hands and report an interruption

use std::io::Write;

use felt_ai::{AutoPilot, DealerAI, create_ai};
use felt_engine::engine::{HandOutcome, Resolution};
use felt_engine::game::Session;
use felt_engine::logger::{HandLogger, HandRecord};
use felt_engine::player::{Player, Seat};
use felt_engine::rules::Blinds;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    human_wins: u64,
    house_wins: u64,
    splits: u64,
    showdowns: u64,
    folds: u64,
    matches: u64,
}

impl Tally {
    fn record(&mut self, outcome: &HandOutcome) {
        match &outcome.resolution {
            Resolution::Folded { winner, .. } => {
                self.folds += 1;
                self.count_winner(Some(*winner));
            }
            Resolution::Showdown { winner, .. } => {
                self.showdowns += 1;
                self.count_winner(*winner);
            }
            Resolution::Aborted => {}
        }
    }

    fn count_winner(&mut self, winner: Option<Seat>) {
        match winner {
            Some(Seat::Human) => self.human_wins += 1,
            Some(Seat::House) => self.house_wins += 1,
            None => self.splits += 1,
        }
    }
}

fn new_match(config: &Config, blinds: Blinds, seed: u64) -> Session<ChaCha20Rng> {
    Session::seeded(
        [
            Player::new("pilot", config.starting_chips),
            Player::new("dealer", config.starting_chips),
        ],
        blinds,
        seed,
    )
}

/// Handle the sim command: play `hands` hands between two policies.
///
/// # Errors
///
/// - `CliError::InvalidInput` for zero hands or an unknown opponent
/// - `CliError::Engine` if a hand creates or destroys chips
/// - `CliError::Interrupted` when `FELT_SIM_BREAK_AFTER` stops the run early
#[allow(clippy::too_many_arguments)]
pub fn handle_sim_command(
    hands: u64,
    seed: Option<u64>,
    output: Option<String>,
    opponent: &str,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let dealer = config.dealer();
    let Some(mut house) = create_ai(opponent, &dealer) else {
        let msg = format!("unknown opponent '{}'", opponent);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    };
    let blinds = config.blinds()?;
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);

    if let Some(path) = output.as_deref()
        && std::path::Path::new(path).exists()
    {
        ui::display_warning(err, &format!("overwriting existing file {}", path))?;
    }
    let mut logger = match output.as_deref().map(HandLogger::create).transpose() {
        Ok(logger) => logger,
        Err(e) => {
            ui::write_error(err, &format!("Failed to open output file: {}", e))?;
            return Err(CliError::Io(e));
        }
    };

    let break_after = std::env::var("FELT_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());

    let mut pilot = AutoPilot::new(
        DealerAI::new(dealer),
        ChaCha20Rng::seed_from_u64(seed.wrapping_add(1)),
    );
    let mut session = new_match(config, blinds, seed);
    let mut tally = Tally {
        matches: 1,
        ..Tally::default()
    };
    let total_chips = u64::from(config.starting_chips) * 2;

    for completed in 1..=hands {
        if session.is_over() {
            debug!(
                matches = tally.matches,
                winner = ?session.winner(),
                "match over, starting a new one"
            );
            session = new_match(config, blinds, seed.wrapping_add(tally.matches * 2));
            tally.matches += 1;
        }

        let outcome = session.play_hand(&mut pilot, house.as_mut())?;
        let in_play: u64 = outcome.stacks.iter().map(|&s| u64::from(s)).sum();
        let held: u64 = session.players().iter().map(|p| u64::from(p.chips())).sum();
        if in_play != total_chips || held != total_chips {
            let msg = format!(
                "chip count changed in hand {}: expected {}, found {}",
                completed, total_chips, held
            );
            ui::write_error(err, &msg)?;
            return Err(CliError::Engine(msg));
        }
        tally.record(&outcome);

        if let Some(logger) = logger.as_mut() {
            let record = HandRecord::from_outcome(logger.next_id(), Some(seed), &outcome);
            logger.write(&record)?;
        }

        if let Some(b) = break_after
            && completed == b
            && completed < hands
        {
            writeln!(out, "Interrupted: simulated {}/{}", completed, hands)?;
            return Err(CliError::Interrupted(format!(
                "simulated {}/{}",
                completed, hands
            )));
        }
    }

    info!(hands, seed, ?tally, "simulation finished");
    writeln!(out, "Simulated: {} hands (seed {})", hands, seed)?;
    writeln!(out, "Matches: {}", tally.matches)?;
    writeln!(
        out,
        "Wins: pilot {}  {} {}  splits {}",
        tally.human_wins,
        house.name(),
        tally.house_wins,
        tally.splits
    )?;
    writeln!(
        out,
        "Showdowns: {}  Folds: {}",
        tally.showdowns, tally.folds
    )?;
    Ok(())
}
