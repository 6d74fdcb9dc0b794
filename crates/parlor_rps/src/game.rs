//! Round state machine for the objective game.

use crate::{Objective, Outcome, RpsError, Throw};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rounds in a complete game.
pub const ROUNDS_PER_GAME: u32 = 10;

/// Everything the UI needs to render one resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RoundReport {
    /// The CPU throw this round was played against.
    cpu_throw: Throw,
    /// The objective the player was tasked with.
    objective: Objective,
    /// How the player's throw fared.
    outcome: Outcome,
    /// Whether the outcome fulfilled the objective.
    success: bool,
}

/// Rock-paper-scissors objective game engine.
///
/// Owns its counters exclusively. The random source is supplied at
/// construction, so a seeded [`StdRng`] reproduces an entire game.
#[derive(Debug, Clone)]
pub struct RpsGame<R: Rng> {
    rng: R,
    cpu_throw: Throw,
    objective: Objective,
    correct: u32,
    rounds: u32,
}

impl RpsGame<StdRng> {
    /// Creates a game seeded from the OS.
    pub fn with_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RpsGame<R> {
    /// Creates a game using the supplied random source and draws the
    /// first round.
    pub fn new(rng: R) -> Self {
        let mut game = Self {
            rng,
            cpu_throw: Throw::Rock,
            objective: Objective::Win,
            correct: 0,
            rounds: 0,
        };
        game.new_round();
        game
    }

    /// The CPU's throw for the current round.
    pub fn cpu_throw(&self) -> Throw {
        self.cpu_throw
    }

    /// The objective for the current round.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Correct rounds so far.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Rounds played so far.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Resolves the player's throw against the current round and draws
    /// the next one unconditionally; there is no held round here.
    ///
    /// The player succeeds iff the outcome matches the objective, so a
    /// tie never scores.
    #[instrument(skip(self), fields(cpu = ?self.cpu_throw, objective = ?self.objective))]
    pub fn choose(&mut self, player: Throw) -> RoundReport {
        let outcome = if player == self.cpu_throw.winning_reply() {
            Outcome::Win
        } else if player == self.cpu_throw.losing_reply() {
            Outcome::Lose
        } else {
            Outcome::Tie
        };
        let success = outcome.satisfies(self.objective);

        let report = RoundReport {
            cpu_throw: self.cpu_throw,
            objective: self.objective,
            outcome,
            success,
        };

        self.rounds += 1;
        if success {
            self.correct += 1;
        }
        tracing::debug!(?outcome, success, round = self.rounds, "round resolved");

        self.new_round();
        report
    }

    /// Resolves a tap on throw button `choice` (0-2).
    ///
    /// # Errors
    ///
    /// Returns [`RpsError::ChoiceOutOfRange`] if `choice` is not one of
    /// the three buttons.
    pub fn choose_index(&mut self, choice: usize) -> Result<RoundReport, RpsError> {
        let throw = Throw::from_index(choice).ok_or(RpsError::ChoiceOutOfRange { choice })?;
        Ok(self.choose(throw))
    }

    /// Zeroes both counters.
    ///
    /// Deliberately leaves the current round in place; the original game
    /// restarts on whatever throw and objective are already showing.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.correct = 0;
        self.rounds = 0;
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
    /// A query, not an enforced boundary: further choices flip it back
    /// to `false`.
    pub fn is_complete(&self) -> bool {
        self.rounds == ROUNDS_PER_GAME
    }

    /// Draws the CPU throw and the player objective for the next round.
    fn new_round(&mut self) {
        self.cpu_throw = Throw::ALL[self.rng.random_range(0..Throw::ALL.len())];
        self.objective = if self.rng.random_range(0..2) == 0 {
            Objective::Win
        } else {
            Objective::Lose
        };
    }
}
