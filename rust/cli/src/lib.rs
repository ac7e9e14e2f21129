//! # felt CLI Library
//!
//! Terminal front end for the `felt-engine` heads-up hold'em table.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand handler and
//! returns the process exit code.
//!
//! ```
//! use std::io;
//! let code = felt_cli::run(["felt", "eval", "Ah", "Kh", "Qh", "Jh", "Th"], &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play against the dealer, reading actions from stdin
//! - `sim`: Automated hands between two policies with a chip-conservation check
//! - `eval`: Rank five to seven cards
//! - `deal`: Deal a single hand face up
//! - `rng`: Show what a seed produces
//! - `cfg`: Display the resolved configuration

use std::io::Write;

use clap::Parser;

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, FeltCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_rng_command, handle_sim_command,
};
pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "deal", "rng", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`], [`exit_code::ERROR`] for bad arguments,
/// configuration or engine failures, [`exit_code::INTERRUPTED`] when a run
/// stops early.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["felt", "deal", "--seed", "42"];
/// let code = felt_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match FeltCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "felt - heads-up hold'em");
            write_or_exit!(err, "Usage: felt <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: felt --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Play {
            hands,
            seed,
            history,
            opponent,
        } => {
            let config = match config::load() {
                Ok(c) => c,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", CliError::from(e));
                    return exit_code::ERROR;
                }
            };
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(
                hands,
                seed,
                history,
                &opponent,
                &config,
                out,
                err,
                &mut stdin_lock,
            )
        }
        Commands::Sim {
            hands,
            seed,
            output,
            opponent,
        } => {
            let config = match config::load() {
                Ok(c) => c,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", CliError::from(e));
                    return exit_code::ERROR;
                }
            };
            handle_sim_command(hands, seed, output, &opponent, &config, out, err)
        }
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
