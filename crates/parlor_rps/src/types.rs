//! Core domain types for the rock-paper-scissors objective game.

use serde::{Deserialize, Serialize};

/// A throw in rock-paper-scissors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Throw {
    /// Rock (beats scissors).
    Rock,
    /// Paper (beats rock).
    Paper,
    /// Scissors (beats paper).
    Scissors,
}

impl Throw {
    /// All throws in the order the original UI lays out its buttons.
    pub const ALL: [Throw; 3] = [Throw::Rock, Throw::Paper, Throw::Scissors];

    /// Maps a tap index (0-2) to a throw.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The throw that beats this one.
    pub fn winning_reply(self) -> Self {
        match self {
            Throw::Rock => Throw::Paper,
            Throw::Paper => Throw::Scissors,
            Throw::Scissors => Throw::Rock,
        }
    }

    /// The throw that loses to this one.
    pub fn losing_reply(self) -> Self {
        match self {
            Throw::Rock => Throw::Scissors,
            Throw::Paper => Throw::Rock,
            Throw::Scissors => Throw::Paper,
        }
    }

    /// Emoji label from the original game.
    pub fn emoji(&self) -> &'static str {
        match self {
            Throw::Rock => "🪨",
            Throw::Paper => "📄",
            Throw::Scissors => "✂️",
        }
    }
}

/// The result the player is tasked to achieve against the CPU's throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    /// Pick the throw that beats the CPU.
    Win,
    /// Pick the throw that loses to the CPU.
    Lose,
}

impl Objective {
    /// Label for display ("WIN" / "LOSE").
    pub fn label(&self) -> &'static str {
        match self {
            Objective::Win => "WIN",
            Objective::Lose => "LOSE",
        }
    }
}

/// How a player's throw fares against the CPU's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player's throw beats the CPU's.
    Win,
    /// The player's throw loses to the CPU's.
    Lose,
    /// Both threw the same.
    Tie,
}

impl Outcome {
    /// Whether this outcome fulfills the round's objective.
    ///
    /// A tie satisfies neither objective.
    pub fn satisfies(self, objective: Objective) -> bool {
        matches!(
            (self, objective),
            (Outcome::Win, Objective::Win) | (Outcome::Lose, Objective::Lose)
        )
    }
}
