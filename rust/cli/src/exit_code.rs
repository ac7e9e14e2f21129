//! Process exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad config, I/O or engine errors.
pub const ERROR: i32 = 2;

/// A run stopped before completing (Unix convention for SIGINT).
pub const INTERRUPTED: i32 = 130;
