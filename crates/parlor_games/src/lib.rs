//! Parlor Games library - pure logic cores behind small UI shells
//!
//! Three independent, non-interacting cores, each consumed by its own
//! UI shell:
//!
//! - **Convert**: stateless temperature conversion between F, C, and K
//! - **Flags**: round-based flag guessing over a shuffled country pool
//! - **Rps**: rock-paper-scissors where the player must WIN or LOSE to
//!   order against a random CPU throw
//!
//! The cores share no state and never call each other; this crate only
//! gathers their surfaces for drivers that embed more than one. All
//! randomness is injected, so any core can be driven deterministically.
//!
//! # Example
//!
//! ```
//! use parlor_games::{FlagGame, GuessOutcome};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), parlor_games::FlagError> {
//! let mut game = FlagGame::new(["France", "Spain", "Italy"], StdRng::seed_from_u64(1))?;
//!
//! // A driver loop: always tap the right flag.
//! while !game.is_complete() {
//!     let outcome = game.guess(game.target_index())?;
//!     assert_eq!(outcome, GuessOutcome::Correct);
//! }
//! assert_eq!(game.accuracy_display(), "100.00%");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Crate-level exports - temperature conversion
pub use parlor_convert::{Unit, convert, to_celsius};

// Crate-level exports - flag guessing
pub use parlor_flags::{
    CHOICES_PER_ROUND, DEFAULT_POOL, FlagError, FlagGame, GuessOutcome, ROUNDS_PER_GAME,
};

// Crate-level exports - rock-paper-scissors
pub use parlor_rps::{Objective, Outcome, RoundReport, RpsError, RpsGame, Throw};
