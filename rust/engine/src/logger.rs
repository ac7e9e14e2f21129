use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{HandOutcome, Resolution};
use crate::hand::EvaluatedHand;
use crate::player::Seat;
use crate::rules::ValidatedAction;
use crate::state::Stage;

/// One applied action, in the order it happened.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: Seat,
    pub stage: Stage,
    pub action: ValidatedAction,
}

/// Hands revealed at showdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Both seats on a split pot
    pub winners: Vec<Seat>,
    /// Human first, then House
    pub hands: Vec<EvaluatedHand>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A finished hand as written to the JSONL history, one object per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `YYYYMMDD-NNNNNN`
    pub hand_id: String,
    pub seed: Option<u64>,
    pub hole_cards: [[Card; 2]; 2],
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub result: Option<String>,
    /// Chips won or lost per seat, Human first
    pub net: [i64; 2],
    /// RFC3339, filled in on write when missing
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn from_outcome(hand_id: String, seed: Option<u64>, outcome: &HandOutcome) -> Self {
        let (result, showdown) = match &outcome.resolution {
            Resolution::Folded { winner, pot } => (
                format!("{} wins {} (fold)", winner.as_str(), pot),
                None,
            ),
            Resolution::Showdown {
                hands,
                winner: Some(winner),
                pot,
                ..
            } => (
                format!(
                    "{} wins {} with {}",
                    winner.as_str(),
                    pot,
                    hands[winner.index()].category.name()
                ),
                Some(ShowdownInfo {
                    winners: vec![*winner],
                    hands: hands.to_vec(),
                    notes: None,
                }),
            ),
            Resolution::Showdown {
                hands,
                winner: None,
                pot,
                ..
            } => (
                format!("split {}", pot),
                Some(ShowdownInfo {
                    winners: Seat::BOTH.to_vec(),
                    hands: hands.to_vec(),
                    notes: Some("split pot".into()),
                }),
            ),
            Resolution::Aborted => ("aborted".to_string(), None),
        };
        Self {
            hand_id,
            seed,
            hole_cards: outcome.hole_cards,
            actions: outcome.actions.clone(),
            board: outcome.board.clone(),
            result: Some(result),
            net: [outcome.net(Seat::Human), outcome.net(Seat::House)],
            ts: None,
            showdown,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file and hands out sequential ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only numbers hands; `write` is a no-op.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let Some(w) = &mut self.writer else {
            return Ok(());
        };
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()
    }
}

/// Reads every record from a JSONL history, skipping blank lines.
pub fn read_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<HandRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line).map_err(std::io::Error::other)?);
    }
    Ok(records)
}
