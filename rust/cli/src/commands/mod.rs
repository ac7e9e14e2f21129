//! Command handlers, one module per subcommand.
//!
//! Each exposes `handle_<name>_command(...) -> Result<(), CliError>` and takes
//! its output streams (and stdin, for `play`) as parameters so tests can
//! drive it with in-memory buffers.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;
pub mod rng;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
