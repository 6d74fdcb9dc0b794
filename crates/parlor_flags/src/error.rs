//! Flag game error types.

use derive_more::{Display, Error};

/// Errors returned by [`FlagGame`](crate::FlagGame) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum FlagError {
    /// The option pool is too small to fill a round.
    #[display("option pool needs at least 3 entries, got {len}")]
    PoolTooSmall {
        /// Number of entries supplied.
        len: usize,
    },
    /// The tapped choice does not name one of the displayed options.
    #[display("choice {choice} is out of range for a 3-flag round")]
    ChoiceOutOfRange {
        /// The out-of-range index.
        choice: usize,
    },
    /// A miss from the previous guess has not been acknowledged yet.
    #[display("previous miss not yet acknowledged")]
    MissPending,
}
