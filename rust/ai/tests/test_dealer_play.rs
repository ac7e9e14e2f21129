use felt_ai::{create_ai, AutoPilot, CallingStation, DealerAI, DealerConfig, POLICY_NAMES};
use felt_engine::engine::Resolution;
use felt_engine::game::Session;
use felt_engine::player::{Player, Seat};
use felt_engine::rules::Blinds;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn session(seed: u64) -> Session<rand_chacha::ChaCha20Rng> {
    Session::seeded(
        [Player::new("autopilot", 1000), Player::new("dealer", 1000)],
        Blinds::default(),
        seed,
    )
}

#[test]
fn factory_knows_every_listed_policy() {
    for name in POLICY_NAMES {
        let policy = create_ai(name, &DealerConfig::default()).expect("listed policy");
        assert_eq!(policy.name(), name);
    }
    assert!(create_ai("baseline", &DealerConfig::default()).is_none());
}

#[test]
fn dealer_against_dealer_conserves_chips() {
    for seed in 0..10 {
        let mut s = session(seed);
        let mut human = AutoPilot::new(DealerAI::default(), ChaCha8Rng::seed_from_u64(seed));
        let mut house = DealerAI::default();
        while !s.is_over() && s.hands_played() < 300 {
            let out = s.play_hand(&mut human, &mut house).unwrap();
            assert_ne!(out.resolution, Resolution::Aborted);
            let [a, b] = s.players();
            assert_eq!(a.chips() + b.chips(), 2000);
        }
    }
}

#[test]
fn calling_stations_always_reach_showdown() {
    let mut s = session(3);
    let mut human = AutoPilot::new(CallingStation, ChaCha8Rng::seed_from_u64(0));
    let mut house = CallingStation;
    for _ in 0..20 {
        if s.is_over() {
            break;
        }
        let out = s.play_hand(&mut human, &mut house).unwrap();
        assert!(matches!(out.resolution, Resolution::Showdown { .. }));
        assert_eq!(out.board.len(), 5);
        assert_eq!(out.net(Seat::Human), -out.net(Seat::House));
    }
}

#[test]
fn never_folding_dealer_never_folds() {
    let cfg = DealerConfig {
        fold_percent: 0,
        ..DealerConfig::default()
    };
    let mut s = session(11);
    let mut human = AutoPilot::new(CallingStation, ChaCha8Rng::seed_from_u64(0));
    let mut house = DealerAI::new(cfg);
    for _ in 0..30 {
        if s.is_over() {
            break;
        }
        let out = s.play_hand(&mut human, &mut house).unwrap();
        assert!(!matches!(
            out.resolution,
            Resolution::Folded {
                winner: Seat::Human,
                ..
            }
        ));
    }
}
