//! # felt-ai: House Seat Policies
//!
//! Rule-driven decision makers for the House seat, plus an adapter that lets
//! a policy sit in the Human seat for unattended play.
//!
//! ## Core Components
//!
//! - [`dealer`] - The casino dealer: strength thresholds and a random fold
//! - [`autopilot`] - Drives a [`Frontend`](felt_engine::actor::Frontend) from a policy
//! - [`create_ai`] - Factory for policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_ai::{create_ai, DealerConfig};
//!
//! let dealer = create_ai("dealer", &DealerConfig::default()).expect("known policy");
//! assert_eq!(dealer.name(), "dealer");
//! assert!(create_ai("shark", &DealerConfig::default()).is_none());
//! ```

use felt_engine::actor::{Policy, SeatView};
use felt_engine::player::Action;
use rand::RngCore;

pub mod autopilot;
pub mod dealer;

pub use autopilot::AutoPilot;
pub use dealer::{DealerAI, DealerConfig};

/// Names accepted by [`create_ai`].
pub const POLICY_NAMES: [&str; 2] = ["dealer", "caller"];

/// Calls or checks every time. Useful as a neutral sparring partner.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingStation;

impl Policy for CallingStation {
    fn decide(&mut self, _view: &SeatView<'_>, _rng: &mut dyn RngCore) -> Action {
        Action::Call
    }

    fn name(&self) -> &str {
        "caller"
    }
}

/// Builds a policy by name; `None` for an unknown name.
pub fn create_ai(kind: &str, config: &DealerConfig) -> Option<Box<dyn Policy>> {
    match kind {
        "dealer" => Some(Box::new(DealerAI::new(*config))),
        "caller" => Some(Box::new(CallingStation)),
        _ => None,
    }
}
