//! Round state machine for the flag-guessing game.

use crate::FlagError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of options displayed per round.
pub const CHOICES_PER_ROUND: usize = 3;

/// Rounds in a complete game.
pub const ROUNDS_PER_GAME: u32 = 10;

/// Country pool from the original game.
pub const DEFAULT_POOL: [&str; 11] = [
    "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Russia", "Spain",
    "UK", "US",
];

/// Result of a single guess - explicit state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess was right; the next round has already been drawn.
    Correct,
    /// The guess was wrong; the game holds this round until the miss
    /// is acknowledged.
    Incorrect {
        /// The option the player wrongly tapped (for the alert message).
        tapped: String,
    },
}

/// Flag-guessing game engine.
///
/// Owns its counters and option pool exclusively; nothing is shared
/// across instances. The random source is supplied at construction,
/// so a seeded [`StdRng`] reproduces an entire game.
#[derive(Debug, Clone)]
pub struct FlagGame<R: Rng> {
    rng: R,
    pool: Vec<String>,
    target: usize,
    correct: u32,
    rounds: u32,
    /// Index of the wrongly tapped option, held until acknowledged.
    miss: Option<usize>,
}

impl FlagGame<StdRng> {
    /// Creates a game over the original country pool, seeded from the OS.
    #[instrument]
    pub fn with_default_pool() -> Self {
        Self::new(DEFAULT_POOL, StdRng::from_os_rng())
            .expect("default pool fills a round")
    }

    /// Creates a game over a custom pool, seeded from the OS.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::PoolTooSmall`] if `pool` has fewer than
    /// [`CHOICES_PER_ROUND`] entries.
    pub fn with_os_rng<I, S>(pool: I) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(pool, StdRng::from_os_rng())
    }
}

impl<R: Rng> FlagGame<R> {
    /// Creates a game over `pool` using the supplied random source and
    /// draws the first round.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::PoolTooSmall`] if `pool` has fewer than
    /// [`CHOICES_PER_ROUND`] entries.
    pub fn new<I, S>(pool: I, rng: R) -> Result<Self, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool: Vec<String> = pool.into_iter().map(Into::into).collect();
        if pool.len() < CHOICES_PER_ROUND {
            return Err(FlagError::PoolTooSmall { len: pool.len() });
        }

        let mut game = Self {
            rng,
            pool,
            target: 0,
            correct: 0,
            rounds: 0,
            miss: None,
        };
        game.new_round();
        Ok(game)
    }

    /// The three options displayed this round.
    pub fn choices(&self) -> &[String] {
        &self.pool[..CHOICES_PER_ROUND]
    }

    /// Index of the correct option among [`choices`](Self::choices).
    pub fn target_index(&self) -> usize {
        self.target
    }

    /// Name of the country the player is asked to tap.
    pub fn target(&self) -> &str {
        &self.pool[self.target]
    }

    /// Correct guesses so far.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Rounds played so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// The wrongly tapped option awaiting acknowledgment, if any.
    pub fn pending_miss(&self) -> Option<&str> {
        self.miss.map(|i| self.pool[i].as_str())
    }

    /// Resolves a guess at the displayed option `choice`.
    ///
    /// Every accepted guess counts exactly one round. A correct guess
    /// scores and redraws immediately; a miss is held until
    /// [`acknowledge_miss`](Self::acknowledge_miss).
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::ChoiceOutOfRange`] if `choice` is not one of
    /// the displayed options, or [`FlagError::MissPending`] if the
    /// previous miss has not been acknowledged.
    #[instrument(skip(self), fields(target = self.target))]
    pub fn guess(&mut self, choice: usize) -> Result<GuessOutcome, FlagError> {
        if choice >= CHOICES_PER_ROUND {
            return Err(FlagError::ChoiceOutOfRange { choice });
        }
        if self.miss.is_some() {
            return Err(FlagError::MissPending);
        }

        self.rounds += 1;

        if choice == self.target {
            self.correct += 1;
            tracing::debug!(round = self.rounds, "correct guess");
            self.new_round();
            Ok(GuessOutcome::Correct)
        } else {
            self.miss = Some(choice);
            tracing::debug!(round = self.rounds, "miss, holding round");
            Ok(GuessOutcome::Incorrect {
                tapped: self.pool[choice].clone(),
            })
        }
    }

    /// Acknowledges a held miss and draws the next round.
    ///
    /// Does nothing if no miss is pending, so a stray Continue tap is
    /// harmless.
    #[instrument(skip(self))]
    pub fn acknowledge_miss(&mut self) {
        if self.miss.take().is_some() {
            self.new_round();
        }
    }

    /// Zeroes both counters and draws a fresh round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.correct = 0;
        self.rounds = 0;
        self.miss = None;
        self.new_round();
    }

    /// Running accuracy as a percentage; `0.0` before any round.
    pub fn accuracy_percent(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        100.0 * f64::from(self.correct) / f64::from(self.rounds)
    }

    /// Accuracy formatted for display, e.g. `"30.00%"`.
    pub fn accuracy_display(&self) -> String {
        format!("{:.2}%", self.accuracy_percent())
    }

    /// Whether exactly [`ROUNDS_PER_GAME`] rounds have been played.
    ///
    /// A query, not an enforced boundary: the game accepts further
    /// guesses, which flip this back to `false`.
    pub fn is_complete(&self) -> bool {
        self.rounds == ROUNDS_PER_GAME
    }

    /// Shuffles the full pool and draws which displayed slot is correct.
    fn new_round(&mut self) {
        self.pool.shuffle(&mut self.rng);
        self.target = self.rng.random_range(0..CHOICES_PER_ROUND);
        self.miss = None;
    }
}
