use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::info;

use crate::actor::{Frontend, Policy};
use crate::engine::{Engine, HandOutcome};
use crate::errors::GameError;
use crate::player::{Player, Seat};
use crate::rules::Blinds;

/// A heads-up match: two persistent chip balances playing hand after hand
/// until one of them is empty.
#[derive(Debug)]
pub struct Session<R> {
    players: [Player; 2],
    blinds: Blinds,
    rng: R,
    hands_played: u32,
}

impl Session<ChaCha20Rng> {
    /// A session whose shuffles and policy decisions all derive from `seed`.
    pub fn seeded(players: [Player; 2], blinds: Blinds, seed: u64) -> Self {
        Self::new(players, blinds, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Session<R> {
    pub fn new(players: [Player; 2], blinds: Blinds, rng: R) -> Self {
        Self {
            players,
            blinds,
            rng,
            hands_played: 0,
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn blinds(&self) -> &Blinds {
        &self.blinds
    }

    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn is_over(&self) -> bool {
        self.players.iter().any(Player::is_busted)
    }

    /// The seat still holding chips once the other has busted.
    pub fn winner(&self) -> Option<Seat> {
        match (self.players[0].is_busted(), self.players[1].is_busted()) {
            (false, true) => Some(Seat::Human),
            (true, false) => Some(Seat::House),
            _ => None,
        }
    }

    /// Plays one hand and moves the net result into the players' balances.
    /// Aborted hands count as played but leave balances untouched.
    pub fn play_hand(
        &mut self,
        frontend: &mut dyn Frontend,
        policy: &mut dyn Policy,
    ) -> Result<HandOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::HandAlreadyComplete);
        }
        let stacks = [self.players[0].chips(), self.players[1].chips()];
        let engine = Engine::new_hand(stacks, &self.blinds, &mut self.rng)?;
        let outcome = engine.play(frontend, policy)?;

        for seat in Seat::BOTH {
            let net = outcome.net(seat);
            let player = &mut self.players[seat.index()];
            if net > 0 {
                player.add_chips(net.unsigned_abs() as u32);
            } else if net < 0 {
                player.remove_chips(net.unsigned_abs() as u32)?;
            }
        }
        self.hands_played += 1;
        info!(
            hand = self.hands_played,
            human = self.players[0].chips(),
            house = self.players[1].chips(),
            "balances after hand"
        );
        Ok(outcome)
    }
}
