//! # felt-engine: Heads-Up Hold'em Core
//!
//! Hand evaluation and a betting state machine for one human seat against a
//! rule-driven house seat. Every random draw goes through a caller-supplied
//! RNG, so a seeded generator replays a hand exactly.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - 52-card deck with shuffle, draw and burn
//! - [`hand`] - Five-of-N hand ranking and comparison
//! - [`player`] - Seats, requested actions and persistent chip balances
//! - [`rules`] - Blinds and action validation
//! - [`state`] - Per-hand pot, bets and stacks
//! - [`actor`] - The `Frontend` and `Policy` seams
//! - [`engine`] - Runs one hand from blinds to payout
//! - [`game`] - Multi-hand sessions until a player busts
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use felt_engine::cards::parse_cards;
//! use felt_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Shuffles
//!
//! ```rust
//! use felt_engine::deck::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let mut a = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(42));
//! let mut b = Deck::shuffled(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a.draw_n(52).unwrap(), b.draw_n(52).unwrap());
//! ```

pub mod actor;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod state;
