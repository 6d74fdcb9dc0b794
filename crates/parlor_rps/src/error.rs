//! RPS game error types.

use derive_more::{Display, Error};

/// Errors returned by [`RpsGame`](crate::RpsGame) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RpsError {
    /// The tapped index does not name one of the three throws.
    #[display("choice {choice} is out of range for the 3 throw buttons")]
    ChoiceOutOfRange {
        /// The out-of-range index.
        choice: usize,
    },
}
