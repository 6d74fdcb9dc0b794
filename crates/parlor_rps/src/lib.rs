//! Pure rock-paper-scissors objective game logic.
//!
//! Each round the CPU draws a throw and an objective: the player must
//! pick the throw that WINS or LOSES against it, as instructed. A tie
//! satisfies neither objective. Unlike the flag game, every choice
//! resolves and redraws immediately; there is no held round.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod types;

pub use error::RpsError;
pub use game::{ROUNDS_PER_GAME, RoundReport, RpsGame};
pub use types::{Objective, Outcome, Throw};
