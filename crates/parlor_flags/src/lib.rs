//! Pure flag-guessing game logic.
//!
//! Tracks a round-based guessing game against a shuffled country pool.
//! Each round shows three options; the player taps one. A correct tap
//! advances immediately, a miss waits for acknowledgment before the next
//! round is drawn (the UI shows a "Wrong" alert with a Continue button).
//! Randomness is injected through the constructor so drivers and tests
//! can run deterministically.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;

pub use error::FlagError;
pub use game::{CHOICES_PER_ROUND, DEFAULT_POOL, FlagGame, GuessOutcome, ROUNDS_PER_GAME};
