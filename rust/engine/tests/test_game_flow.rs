mod common;

use common::{deck, ScriptedPolicy, ScriptedSeat};
use felt_engine::engine::{Engine, Resolution};
use felt_engine::errors::GameError;
use felt_engine::hand::Category;
use felt_engine::player::{Action, Seat};
use felt_engine::rules::{Blinds, ValidatedAction};
use felt_engine::state::Stage;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

// Human holds the royal flush by the river; House makes a queen-high straight.
const HUMAN_ROYAL: &str = "Ah Kh 2c 7d 3s Qh Jh Th 4s 9c 5s 8d";
// Royal flush on the board; both seats play it.
const BOARD_ROYAL: &str = "2c 3d 4h 5h 6c As Ks Qs 7c Js 8c Ts";

fn engine(deal_order: &str, stacks: [u32; 2]) -> Engine<ChaCha20Rng> {
    Engine::with_deck(
        stacks,
        &Blinds::default(),
        deck(deal_order),
        ChaCha20Rng::seed_from_u64(0),
    )
    .expect("hand starts")
}

#[test]
fn blinds_and_hole_cards_are_dealt_up_front() {
    let eng = engine(HUMAN_ROYAL, [1000, 1000]);
    assert_eq!(eng.state().pot(), 75);
    assert_eq!(eng.state().stacks(), [975, 950]);
    assert_eq!(eng.hole_cards(Seat::Human).to_vec(), common::cards("Ah Kh"));
    assert_eq!(eng.deck_remaining(), 48);
}

#[test]
fn preflop_fold_gives_house_the_blinds() {
    let mut human = ScriptedSeat::new(&[Action::Fold]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    assert_eq!(
        out.resolution,
        Resolution::Folded {
            winner: Seat::House,
            pot: 75
        }
    );
    assert_eq!(out.stacks, [975, 1025]);
    assert!(out.board.is_empty());
    assert!(human.stages.is_empty());
    assert_eq!(out.actions.len(), 1);
}

#[test]
fn fold_on_flop_ends_hand_without_turn_or_river() {
    let mut human = ScriptedSeat::new(&[Action::Call, Action::Raise(100)]);
    let mut house = ScriptedPolicy::new(&[Action::Call, Action::Fold]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut house)
        .unwrap();

    assert_eq!(
        out.resolution,
        Resolution::Folded {
            winner: Seat::Human,
            pot: 200
        }
    );
    assert_eq!(out.board.len(), 3);
    assert_eq!(human.stages, vec![Stage::Flop]);
    assert_eq!(out.stacks, [1050, 950]);
    assert_eq!(out.net(Seat::Human), 50);
    // a call with nothing owed is recorded as a check
    assert_eq!(out.actions[1].action, ValidatedAction::Check);
    assert_eq!(out.actions[2].stage, Stage::Flop);
}

#[test]
fn best_hand_takes_the_pot_at_showdown() {
    let mut human = ScriptedSeat::new(&[Action::Call, Action::Check, Action::Check, Action::Check]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();

    match &out.resolution {
        Resolution::Showdown {
            hands,
            winner,
            pot,
            payouts,
        } => {
            assert_eq!(hands[0].category, Category::RoyalFlush);
            assert_eq!(hands[1].category, Category::Straight);
            assert_eq!(*winner, Some(Seat::Human));
            assert_eq!(*pot, 100);
            assert_eq!(*payouts, [100, 0]);
        }
        other => panic!("expected showdown, got {:?}", other),
    }
    assert_eq!(
        human.stages,
        vec![Stage::Flop, Stage::Turn, Stage::River, Stage::Showdown]
    );
    assert_eq!(out.board, common::cards("Qh Jh Th 9c 8d"));
    assert_eq!(out.stacks, [1050, 950]);
}

#[test]
fn identical_hands_split_the_pot() {
    let mut human = ScriptedSeat::new(&[Action::Call, Action::Check, Action::Check, Action::Check]);
    let out = engine(BOARD_ROYAL, [1000, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    match out.resolution {
        Resolution::Showdown {
            winner, payouts, ..
        } => {
            assert_eq!(winner, None);
            assert_eq!(payouts, [50, 50]);
        }
        other => panic!("expected showdown, got {:?}", other),
    }
    assert_eq!(out.stacks, [1000, 1000]);
}

#[test]
fn abort_mid_hand_refunds_every_chip() {
    // script runs dry on the flop, which aborts
    let mut human = ScriptedSeat::new(&[Action::Raise(100)]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    assert!(out.is_aborted());
    assert_eq!(out.stacks, [1000, 1000]);
    assert_eq!(out.board.len(), 3);
    assert_eq!(out.winner(), None);
}

#[test]
fn abort_flag_is_honoured_before_the_first_request() {
    let mut human = ScriptedSeat::new(&[Action::Call]);
    human.abort_now = true;
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    assert_eq!(out.resolution, Resolution::Aborted);
    assert_eq!(human.requests, 0);
    assert_eq!(out.stacks, [1000, 1000]);
}

#[test]
fn illegal_human_action_is_rejected_and_asked_again() {
    let mut human = ScriptedSeat::new(&[Action::Check, Action::Raise(0), Action::Fold]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    assert_eq!(human.requests, 3);
    assert_eq!(human.rejected.len(), 2);
    assert!(matches!(human.rejected[0], GameError::InvalidAction(_)));
    assert_eq!(out.actions.len(), 1);
    assert_eq!(out.winner(), Some(Seat::House));
}

#[test]
fn illegal_policy_action_falls_back_to_a_call() {
    let mut human = ScriptedSeat::new(&[Action::Raise(50), Action::Fold]);
    let mut house = ScriptedPolicy::new(&[Action::Check]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut house)
        .unwrap();
    assert_eq!(out.actions[1].seat, Seat::House);
    assert_eq!(out.actions[1].action, ValidatedAction::Call(50));
}

#[test]
fn reraise_reopens_the_action() {
    let mut human = ScriptedSeat::new(&[Action::Raise(50), Action::Call, Action::Fold]);
    let mut house = ScriptedPolicy::new(&[Action::Raise(100)]);
    let out = engine(HUMAN_ROYAL, [1000, 1000])
        .play(&mut human, &mut house)
        .unwrap();
    let preflop: Vec<_> = out
        .actions
        .iter()
        .filter(|a| a.stage == Stage::PreFlop)
        .map(|a| a.action)
        .collect();
    assert_eq!(
        preflop,
        vec![
            ValidatedAction::Raise { call: 25, raise: 50 },
            ValidatedAction::Raise { call: 50, raise: 100 },
            ValidatedAction::Call(100),
        ]
    );
    // 200 each went in preflop; human folds the flop
    assert_eq!(out.stacks, [800, 1200]);
}

#[test]
fn all_in_runs_the_board_out_and_returns_the_uncalled_part() {
    let mut human = ScriptedSeat::new(&[Action::Raise(500)]);
    let out = engine(HUMAN_ROYAL, [1000, 200])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();

    assert_eq!(human.requests, 1);
    assert_eq!(out.board.len(), 5);
    assert_eq!(out.actions[1].action, ValidatedAction::AllIn(150));
    match out.resolution {
        Resolution::Showdown { pot, winner, .. } => {
            assert_eq!(pot, 400);
            assert_eq!(winner, Some(Seat::Human));
        }
        other => panic!("expected showdown, got {:?}", other),
    }
    assert_eq!(out.stacks, [1200, 0]);
}

#[test]
fn short_small_blind_is_all_in_from_the_start() {
    let mut human = ScriptedSeat::default();
    let out = engine(BOARD_ROYAL, [10, 1000])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    assert_eq!(human.requests, 0);
    assert_eq!(out.board.len(), 5);
    // house gets back the 40 the human could not match, then the split
    assert_eq!(out.stacks, [10, 1000]);
}

#[test]
fn empty_stack_cannot_start_a_hand() {
    let err = Engine::with_deck(
        [0, 1000],
        &Blinds::default(),
        deck(HUMAN_ROYAL),
        ChaCha20Rng::seed_from_u64(0),
    )
    .unwrap_err();
    assert!(matches!(err, GameError::InsufficientChips { .. }));
}

#[test]
fn huge_stacks_are_refused_before_any_chips_move() {
    let result = Engine::new_hand(
        [3_000_000_000, 3_000_000_000],
        &Blinds::default(),
        ChaCha20Rng::seed_from_u64(1),
    );
    assert!(matches!(result, Err(GameError::InvalidInput(_))));
}

#[test]
fn all_in_at_the_chip_limit_keeps_the_pot_exact() {
    let half = u32::MAX / 2;
    let mut human = ScriptedSeat::new(&[Action::Raise(u32::MAX)]);
    let outcome = engine(HUMAN_ROYAL, [half + 1, half])
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap();
    assert_eq!(human.requests, 1);
    assert_eq!(outcome.board.len(), 5);
    assert_eq!(outcome.winner(), Some(Seat::Human));
    assert_eq!(outcome.stacks, [u32::MAX, 0]);
}

#[test]
fn seeded_hands_replay_identically() {
    let play = |seed: u64| {
        let mut human = ScriptedSeat::new(&[Action::Call, Action::Check, Action::Check, Action::Check]);
        Engine::new_hand(
            [1000, 1000],
            &Blinds::default(),
            ChaCha20Rng::seed_from_u64(seed),
        )
        .unwrap()
        .play(&mut human, &mut ScriptedPolicy::default())
        .unwrap()
    };
    assert_eq!(play(42), play(42));
    assert_ne!(play(42).hole_cards, play(43).hole_cards);
}
