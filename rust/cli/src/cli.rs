//! Command-line argument types.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "felt", version, about = "Heads-up Texas Hold'em against the dealer")]
pub struct FeltCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against the dealer from the terminal
    Play {
        /// Stop after this many hands (default: until someone busts or quits)
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Append every finished hand to this JSONL file
        #[arg(long)]
        history: Option<String>,
        /// House policy: dealer or caller
        #[arg(long, default_value = "dealer")]
        opponent: String,
    },
    /// Run hands with both seats automated and report totals
    Sim {
        #[arg(long)]
        hands: u64,
        #[arg(long)]
        seed: Option<u64>,
        /// Write hand records as JSONL
        #[arg(long)]
        output: Option<String>,
        #[arg(long, default_value = "dealer")]
        opponent: String,
    },
    /// Rank five to seven cards, e.g. `felt eval Ah Kh Qh Jh Th`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal one hand face up
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the random stream a seed produces
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
