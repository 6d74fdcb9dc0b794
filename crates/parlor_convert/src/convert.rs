//! Conversion between temperature scales.

use crate::Unit;
use tracing::instrument;

/// Converts `value` from one temperature unit to another.
///
/// Normalizes to Celsius first, then converts to the target scale.
/// Every real-number input is valid, including physically impossible
/// temperatures below absolute zero; the core does not validate
/// plausibility.
#[instrument]
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    let celsius = to_celsius(value, from);

    match to {
        Unit::Fahrenheit => (celsius * 9.0 / 5.0) + 32.0,
        Unit::Celsius => celsius,
        Unit::Kelvin => celsius + 273.15,
    }
}

/// Normalizes a value in the given unit to Celsius.
#[instrument]
pub fn to_celsius(value: f64, from: Unit) -> f64 {
    match from {
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Celsius => value,
        Unit::Kelvin => value - 273.15,
    }
}
