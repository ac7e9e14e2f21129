//! # Play Command
//!
//! Interactive heads-up hold'em against the dealer.
//!
//! The human seat reads actions from stdin (`check`, `call`, `raise N`,
//! `fold`, `q`); the house seat is driven by a policy from `felt-ai`. Hands
//! continue until one side is out of chips, the requested number of hands has
//! been played, or the player quits. Quitting mid-hand cancels that hand and
//! returns every chip bet in it.

use std::io::{self, BufRead, Write};

use felt_ai::create_ai;
use felt_engine::actor::{Decision, Frontend, SeatView};
use felt_engine::cards::Card;
use felt_engine::engine::{HandOutcome, Resolution};
use felt_engine::errors::GameError;
use felt_engine::game::Session;
use felt_engine::logger::{HandLogger, HandRecord};
use felt_engine::player::{Action, Player, Seat};
use felt_engine::rules::{LegalActions, ValidatedAction};
use felt_engine::state::{RoundState, Stage};

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_hand, format_validated, seat_label};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

const PROMPT: &str = "Action (check/call/raise N/fold/q): ";

/// Terminal frontend for the human seat.
///
/// Frontend hooks cannot fail, so the first write error is kept and the
/// hand is cancelled at the next request.
struct ConsoleSeat<'a> {
    stdin: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    quit: bool,
    last_action: Option<Action>,
    io_error: Option<io::Error>,
}

impl<'a> ConsoleSeat<'a> {
    fn new(stdin: &'a mut dyn BufRead, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            stdin,
            out,
            err,
            quit: false,
            last_action: None,
            io_error: None,
        }
    }

    fn track(&mut self, result: io::Result<()>) {
        if let Err(e) = result
            && self.io_error.is_none()
        {
            self.io_error = Some(e);
        }
    }

    fn show_turn(&mut self, view: &SeatView<'_>, options: &LegalActions) -> io::Result<()> {
        writeln!(
            self.out,
            "Pot: {}  To call: {}  Your stack: {}  Dealer stack: {}",
            view.pot, view.to_call, view.stack, view.opponent_stack
        )?;
        let board = if view.community.is_empty() {
            "-".to_string()
        } else {
            format_board(view.community)
        };
        writeln!(
            self.out,
            "Your cards: {}  Board: {}",
            format_board(&view.hole_cards),
            board
        )?;
        if options.max_raise == 0 && !options.can_check {
            writeln!(self.out, "(calling puts you all-in)")?;
        }
        Ok(())
    }
}

impl Frontend for ConsoleSeat<'_> {
    fn request_action(&mut self, view: &SeatView<'_>, options: &LegalActions) -> Decision {
        let shown = self.show_turn(view, options);
        self.track(shown);
        loop {
            if self.io_error.is_some() {
                return Decision::Abort;
            }
            let prompted = ui::prompt(self.out, PROMPT);
            self.track(prompted);
            let Some(line) = read_stdin_line(self.stdin) else {
                self.quit = true;
                return Decision::Abort;
            };
            match parse_player_action(&line) {
                ParseResult::Action(action) => {
                    self.last_action = Some(action);
                    return Decision::Act(action);
                }
                ParseResult::Quit => {
                    self.quit = true;
                    return Decision::Abort;
                }
                ParseResult::Invalid(msg) => {
                    let written = ui::write_error(self.err, &msg);
                    self.track(written);
                }
            }
        }
    }

    fn abort_requested(&self) -> bool {
        self.quit || self.io_error.is_some()
    }

    fn on_stage_advance(&mut self, stage: Stage, community: &[Card]) {
        let written = match stage {
            Stage::Showdown => writeln!(self.out, "--- Showdown ---"),
            _ => writeln!(
                self.out,
                "--- {} ---  Board: {}",
                stage.name(),
                format_board(community)
            ),
        };
        self.track(written);
    }

    fn on_action(&mut self, seat: Seat, action: &ValidatedAction, state: &RoundState) {
        let written = writeln!(
            self.out,
            "{}  (pot {})",
            format_validated(seat, action),
            state.pot()
        );
        self.track(written);
    }

    fn on_rejected(&mut self, error: &GameError) {
        let msg = match self.last_action.take() {
            Some(action) => format!("'{}' rejected: {}", format_action(&action), error),
            None => error.to_string(),
        };
        let written = ui::write_error(self.err, &msg);
        self.track(written);
    }
}

/// Handle the play command: hands against the dealer until someone busts,
/// `hands` hands are done or the player quits.
///
/// The seed comes from `seed`, then the configuration, then the OS. When
/// `history` is set every finished hand is appended to it as JSONL.
///
/// # Examples
///
/// ```
/// use felt_cli::commands::handle_play_command;
/// use felt_cli::config::Config;
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut stdin = Cursor::new("fold\n");
/// handle_play_command(Some(1), Some(7), None, "dealer", &Config::default(), &mut out, &mut err, &mut stdin)
///     .unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Hands played: 1"));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn handle_play_command(
    hands: Option<u32>,
    seed: Option<u64>,
    history: Option<String>,
    opponent: &str,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if hands == Some(0) {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }
    let Some(mut policy) = create_ai(opponent, &config.dealer()) else {
        let msg = format!("unknown opponent '{}'", opponent);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    };
    let blinds = config.blinds()?;
    let seed = seed.or(config.seed).unwrap_or_else(rand::random);

    let mut logger = match history.as_deref().map(HandLogger::create).transpose() {
        Ok(logger) => logger,
        Err(e) => {
            ui::write_error(err, &format!("Failed to open history file: {}", e))?;
            return Err(CliError::Io(e));
        }
    };

    writeln!(
        out,
        "Heads-up hold'em vs {}  seed={}  blinds {}/{}",
        policy.name(),
        seed,
        blinds.small,
        blinds.big
    )?;

    let mut session = Session::seeded(
        [
            Player::new("you", config.starting_chips),
            Player::new(policy.name(), config.starting_chips),
        ],
        blinds,
        seed,
    );

    let mut quit = false;
    while !quit
        && !session.is_over()
        && hands.is_none_or(|n| session.hands_played() < n)
    {
        writeln!(
            out,
            "\n=== Hand {} ===  You: {}  Dealer: {}",
            session.hands_played() + 1,
            session.player(Seat::Human).chips(),
            session.player(Seat::House).chips()
        )?;

        let outcome = {
            let mut seat = ConsoleSeat::new(&mut *stdin, &mut *out, &mut *err);
            let played = session.play_hand(&mut seat, policy.as_mut());
            if let Some(e) = seat.io_error.take() {
                return Err(CliError::Io(e));
            }
            quit = seat.quit;
            played?
        };
        report_outcome(&outcome, out)?;

        if let Some(logger) = logger.as_mut() {
            let record = HandRecord::from_outcome(logger.next_id(), Some(seed), &outcome);
            logger.write(&record)?;
        }
    }

    if quit {
        writeln!(out, "Returning to lobby...")?;
    }
    writeln!(out, "Hands played: {}", session.hands_played())?;
    writeln!(
        out,
        "Final chips: You {}  Dealer {}",
        session.player(Seat::Human).chips(),
        session.player(Seat::House).chips()
    )?;
    match session.winner() {
        Some(Seat::Human) => writeln!(out, "The dealer is out of chips. You win the match!")?,
        Some(Seat::House) => writeln!(out, "You are out of chips. The dealer wins the match.")?,
        None => {}
    }
    Ok(())
}

fn report_outcome(outcome: &HandOutcome, out: &mut dyn Write) -> io::Result<()> {
    match &outcome.resolution {
        Resolution::Folded { winner, pot } => writeln!(
            out,
            "{} wins {} chips ({} folded)",
            seat_label(*winner),
            pot,
            seat_label(winner.other())
        ),
        Resolution::Showdown {
            hands,
            winner,
            pot,
            payouts,
        } => {
            for seat in Seat::BOTH {
                writeln!(
                    out,
                    "{}: {}  {}",
                    seat_label(seat),
                    format_board(&outcome.hole_cards[seat.index()]),
                    format_hand(&hands[seat.index()])
                )?;
            }
            match winner {
                Some(seat) => writeln!(out, "{} wins {} chips", seat_label(*seat), pot),
                None => writeln!(
                    out,
                    "Split pot: You {}  Dealer {}",
                    payouts[0], payouts[1]
                ),
            }
        }
        Resolution::Aborted => writeln!(out, "Hand cancelled, bets returned."),
    }
}
