//! Round-trip and cross-scale tests for temperature conversion.

use parlor_convert::{Unit, convert};
use strum::IntoEnumIterator;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_round_trip_all_unit_pairs() {
    let samples = [-273.15, -40.0, 0.0, 36.6, 100.0, 451.0, 1234.5678];

    for from in Unit::iter() {
        for to in Unit::iter() {
            for &value in &samples {
                let there = convert(value, from, to);
                let back = convert(there, to, from);
                assert!(
                    (back - value).abs() < TOLERANCE,
                    "round trip {value} {}→{} drifted to {back}",
                    from.label(),
                    to.label()
                );
            }
        }
    }
}

#[test]
fn test_fahrenheit_celsius_crossover() {
    // -40 is the one point where the F and C scales agree.
    assert!((convert(-40.0, Unit::Fahrenheit, Unit::Celsius) - -40.0).abs() < TOLERANCE);
    assert!((convert(-40.0, Unit::Celsius, Unit::Fahrenheit) - -40.0).abs() < TOLERANCE);
}

#[test]
fn test_body_temperature_through_kelvin() {
    let kelvin = convert(98.6, Unit::Fahrenheit, Unit::Kelvin);
    assert!((kelvin - 310.15).abs() < TOLERANCE);
}

#[test]
fn test_unit_labels_match_picker() {
    let labels: Vec<_> = Unit::iter().map(|u| u.label()).collect();
    assert_eq!(labels, vec!["F", "C", "K"]);
}
