//! Pure temperature conversion logic.
//!
//! Converts a numeric temperature between Fahrenheit, Celsius, and Kelvin
//! by normalizing through Celsius. The core is stateless: a UI shell feeds
//! it a value and a unit pair and renders the result. No rounding is
//! applied here; display formatting is a presentation concern.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod convert;
mod unit;

pub use convert::{convert, to_celsius};
pub use unit::Unit;
