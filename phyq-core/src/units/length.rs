//! Length kinds and units.
//!
//! The coherent unit for this dimension is [`Meter`] (`Meter::RATIO == 1`). Every other length unit is an exact
//! rational multiple of the metre, so integral conversions in the coarse-to-fine direction are exact.
//!
//! Two kinds share the length dimension:
//!
//! - [`Length`]: scalar distances, widths, radii.
//! - [`PositionVector`]: a vector displacement from an origin; its norm is a [`Length`].
//!
//! ```rust
//! use phyq_core::length::{Kilometer, Meter, Meters, PositionVector};
//! use phyq_core::{Kind, Vector};
//!
//! let d = Meters::new(1500.0);
//! assert_eq!(d.to::<Kilometer>().value(), 1.5);
//!
//! let r = Vector::new([3, 2, 1]) * PositionVector.in_unit(Kilometer);
//! assert_eq!(r.to::<Meter>().value(), Vector::new([3000, 2000, 1000]));
//! ```

use crate::{Dimension, Quantity};
use phyq_derive::{Kind, Unit};

/// Scalar length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = Dimension::LENGTH)]
pub struct Length;

/// Displacement from an origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = Dimension::LENGTH, character = vector, magnitude = Length)]
pub struct PositionVector;

// ─────────────────────────────────────────────────────────────────────────────
// SI units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Dimension::LENGTH, ratio = 1)]
pub struct Meter;
/// A length measured in metres.
pub type Meters<R = f64> = Quantity<Length, Meter, R>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Dimension::LENGTH, ratio = 1_000)]
pub struct Kilometer;
/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;
/// A length measured in kilometres.
pub type Kilometers<R = f64> = Quantity<Length, Kilometer, R>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Centimetre (`1/100 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Dimension::LENGTH, ratio = (1, 100))]
pub struct Centimeter;
/// A length measured in centimetres.
pub type Centimeters<R = f64> = Quantity<Length, Centimeter, R>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1/1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Dimension::LENGTH, ratio = (1, 1_000))]
pub struct Millimeter;
/// A length measured in millimetres.
pub type Millimeters<R = f64> = Quantity<Length, Millimeter, R>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm", dimension = Dimension::LENGTH, ratio = (1, 1_000_000))]
pub struct Micrometer;
/// A length measured in micrometres.
pub type Micrometers<R = f64> = Quantity<Length, Micrometer, R>;
/// One micrometre.
pub const UM: Micrometers = Micrometers::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// International customary units
// ─────────────────────────────────────────────────────────────────────────────

/// Inch (`0.0254 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Dimension::LENGTH, ratio = (254, 10_000))]
pub struct Inch;
/// A length measured in inches.
pub type Inches<R = f64> = Quantity<Length, Inch, R>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// Foot (`0.3048 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Dimension::LENGTH, ratio = (3_048, 10_000))]
pub struct Foot;
/// A length measured in feet.
pub type Feet<R = f64> = Quantity<Length, Foot, R>;
/// One foot.
pub const FT: Feet = Feet::new(1.0);

/// (Statute) mile (`1609.344 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = Dimension::LENGTH, ratio = (1_609_344, 1_000))]
pub struct Mile;
/// A length measured in miles.
pub type Miles<R = f64> = Quantity<Length, Mile, R>;
/// One mile.
pub const MI: Miles = Miles::new(1.0);

crate::impl_unit_conversions!(
    Length: Meter, Kilometer, Centimeter, Millimeter, Micrometer, Inch, Foot, Mile
);
