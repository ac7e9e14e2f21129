use std::io::Cursor;

use felt_cli::commands::handle_play_command;
use felt_cli::config::Config;
use felt_cli::logging::CapturedLogs;
use felt_cli::CliError;
use felt_engine::logger::read_records;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

struct PlayRun {
    result: Result<(), CliError>,
    out: String,
    err: String,
}

fn play_with(input: &str, hands: Option<u32>, seed: u64, history: Option<String>) -> PlayRun {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let result = handle_play_command(
        hands,
        Some(seed),
        history,
        "dealer",
        &Config::default(),
        &mut out,
        &mut err,
        &mut stdin,
    );
    PlayRun {
        result,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

#[test]
fn banner_shows_seed_and_blinds() {
    let run = play_with("q\n", Some(1), 1234, None);
    assert!(run.result.is_ok());
    assert!(run.out.contains("seed=1234  blinds 25/50"));
    assert!(run.out.contains("=== Hand 1 ===  You: 1000  Dealer: 1000"));
    assert!(run.out.contains("Pot: 75  To call: 25  Your stack: 975  Dealer stack: 950"));
}

#[test]
fn checking_into_a_bet_is_rejected_and_logged() {
    let logs = CapturedLogs::new();
    let subscriber = Registry::default().with(logs.layer());
    let run = tracing::subscriber::with_default(subscriber, || {
        play_with("check\nfold\n", Some(1), 5, None)
    });

    assert!(run.result.is_ok());
    assert!(
        run.err
            .contains("Error: 'check' rejected: Invalid action: cannot check facing a bet of 25"),
        "err={}",
        run.err
    );
    assert!(run.out.contains("You fold  (pot 75)"));
    assert!(run.out.contains("Final chips: You 975  Dealer 1025"));

    let warnings = logs.at_level(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("rejected action"));
}

#[test]
fn raise_shorthand_reaches_the_engine() {
    let run = play_with("r 100\nq\n", Some(1), 11, None);
    assert!(run.result.is_ok());
    assert!(run.out.contains("You call 25 and raise 100"), "out={}", run.out);
}

#[test]
fn history_file_gets_one_record_per_hand() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logs").join("hands.jsonl");
    let run = play_with(
        "fold\nfold\nfold\n",
        Some(3),
        77,
        Some(path.to_string_lossy().into_owned()),
    );
    assert!(run.result.is_ok());
    assert!(run.out.contains("Hands played: 3"));

    let records = read_records(&path).unwrap();
    assert_eq!(records.len(), 3);
    for (i, rec) in records.iter().enumerate() {
        assert!(rec.hand_id.ends_with(&format!("-{:06}", i + 1)));
        assert_eq!(rec.seed, Some(77));
        assert_eq!(rec.net, [-25, 25]);
        assert_eq!(rec.result.as_deref(), Some("house wins 75 (fold)"));
        assert!(rec.ts.is_some());
    }
}

#[test]
fn quitting_mid_hand_refunds_every_bet() {
    let run = play_with("call\nq\n", None, 3, None);
    assert!(run.result.is_ok());
    assert!(run.out.contains("Hand cancelled, bets returned."));
    assert!(run.out.contains("Hands played: 1"));
    assert!(run.out.contains("Final chips: You 1000  Dealer 1000"));
}

#[test]
fn the_match_ends_when_a_stack_is_gone() {
    // always calling, the human busts or breaks the dealer eventually
    let input = "call\n".repeat(20_000);
    let run = play_with(&input, None, 21, None);
    assert!(run.result.is_ok());
    assert!(
        run.out.contains("You win the match!") || run.out.contains("The dealer wins the match."),
        "out tail={}",
        &run.out[run.out.len().saturating_sub(400)..]
    );
    assert!(!run.out.contains("Returning to lobby"));
}
