//! Temperature units.

use serde::{Deserialize, Serialize};

/// A temperature scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Unit {
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Degrees Celsius.
    Celsius,
    /// Kelvin.
    Kelvin,
}

impl Unit {
    /// Short label for this unit (for display in a segmented picker).
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Fahrenheit => "F",
            Unit::Celsius => "C",
            Unit::Kelvin => "K",
        }
    }
}
