//! Integration tests for phyq-tagged.
//!
//! These tests exercise the tagged type from a consumer's perspective: erasing typed quantities into a
//! heterogeneous collection and reading them back.

use approx::assert_relative_eq;
use phyq::electromagnetism::{Millivolt, Volts, Voltage};
use phyq::length::{Kilometers, Length, Meter, Meters};
use phyq::mass::{Gram, Kilograms, Mass};
use phyq::time::{Duration, Hours, Minute, Second};
use phyq::{Dimension, Quantity, Ratio};
use phyq_tagged::{convert, TagError, TaggedQuantity};

// ─────────────────────────────────────────────────────────────────────────────
// Heterogeneous collections
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn mixed_collection_is_sorted_by_dimension() {
    let readings: Vec<TaggedQuantity> = vec![
        Meters::new(12.0).into(),
        Hours::new(0.5).into(),
        Kilometers::new(0.25).into(),
        Kilograms::new(3.0).into(),
    ];

    let total: f64 = readings
        .iter()
        .filter_map(|t| t.try_into_quantity::<Length, Meter>().ok())
        .map(|m| m.value())
        .sum();
    assert_relative_eq!(total, 262.0);

    let durations: Vec<_> = readings
        .iter()
        .filter(|t| t.dimension() == Dimension::TIME)
        .map(|t| t.try_into_quantity::<Duration, Minute>().unwrap())
        .collect();
    assert_eq!(durations.len(), 1);
    assert_relative_eq!(durations[0].value(), 30.0);
}

#[test]
fn every_unit_of_a_dimension_round_trips() {
    let tagged = TaggedQuantity::from(Kilograms::new(2.0));
    let g: Quantity<Mass, Gram> = tagged.try_into().unwrap();
    assert_relative_eq!(g.value(), 2000.0);
    let back: Kilograms = TaggedQuantity::from(g).try_into().unwrap();
    assert_relative_eq!(back.value(), 2.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error paths
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn dimension_mismatch_is_reported() {
    let tagged = TaggedQuantity::from(Volts::new(5.0));
    let err = tagged.try_into_quantity::<Duration, Second>().unwrap_err();
    assert_eq!(
        err,
        TagError::DimensionMismatch {
            expected: Dimension::TIME,
            found: tagged.dimension(),
        }
    );
    assert!(err.to_string().starts_with("dimension mismatch"));
}

#[test]
fn truncation_is_opt_in() {
    let tagged = TaggedQuantity::new(1_500i64, Dimension::LENGTH, Ratio::ONE).unwrap();
    let err = tagged.try_into_quantity::<Length, phyq::length::Kilometer>().unwrap_err();
    assert_eq!(err, TagError::TruncatingConversion { factor: Ratio::new(1, 1000) });
    let km = tagged.force_into_quantity::<Length, phyq::length::Kilometer>().unwrap();
    assert_eq!(km.value(), 1);
}

#[test]
fn invalid_ratio_is_rejected() {
    assert!(matches!(
        TaggedQuantity::new(1.0, Dimension::LENGTH, Ratio::new(-1, 2)),
        Err(TagError::InvalidRatio(_))
    ));
    assert_eq!(convert::factor(Ratio::ONE, Ratio::integer(0)), Err(TagError::InvalidRatio(Ratio::integer(0))));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion helpers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_to_changes_only_the_ratio() {
    let tagged = TaggedQuantity::from(Volts::new(0.25));
    let mv = tagged.convert_to(Ratio::new(1, 1000)).unwrap();
    assert_relative_eq!(mv.value(), 250.0);
    assert_eq!(mv.dimension(), tagged.dimension());
    let typed: Quantity<Voltage, Millivolt> = mv.try_into().unwrap();
    assert_relative_eq!(typed.value(), 250.0);
}

#[test]
fn convert_value_matches_typed_conversion() {
    let typed = Hours::new(1.5).to::<Second>().value();
    let runtime = convert::convert_value(1.5, Ratio::integer(3600), Ratio::ONE).unwrap();
    assert_relative_eq!(typed, runtime);
}
