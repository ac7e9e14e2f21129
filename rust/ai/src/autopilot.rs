use felt_engine::actor::{Decision, Frontend, Policy, SeatView};
use felt_engine::rules::LegalActions;
use rand::RngCore;

/// Puts a [`Policy`] in the Human seat so hands run without input.
///
/// The autopilot keeps its own random source, independent of the engine's,
/// so both seats can be seeded separately.
#[derive(Debug)]
pub struct AutoPilot<P, R> {
    policy: P,
    rng: R,
}

impl<P: Policy, R: RngCore> AutoPilot<P, R> {
    pub fn new(policy: P, rng: R) -> Self {
        Self { policy, rng }
    }
}

impl<P: Policy, R: RngCore> Frontend for AutoPilot<P, R> {
    fn request_action(&mut self, view: &SeatView<'_>, _options: &LegalActions) -> Decision {
        Decision::Act(self.policy.decide(view, &mut self.rng))
    }
}
