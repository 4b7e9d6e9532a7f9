//! Core type system for strongly typed physical quantities.
//!
//! `phyq-core` provides a zero-cost quantity model with scalar and vector magnitudes:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`]; it carries an exact [`Ratio`] to the coherent
//!   unit of its [`Dimension`].
//! - A *kind* is a zero-sized marker type implementing [`Kind`]; it names what is measured and whether it is
//!   scalar- or vector-shaped.
//! - A value tagged with a kind and a unit is a [`Quantity<K, U, R>`]. The magnitude `R` is any
//!   [`Representation`]: a primitive number, a [`Vector`], or a single vector [`Component`].
//! - Conversion is a type-checked exact rescale via [`Quantity::to`]; truncation needs [`Quantity::value_cast`].
//! - Derived kinds and units ([`Times`], [`Over`], [`Prod`], [`Per`]) are produced by `*` and `/`.
//!
//! Most users should depend on `phyq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (length vs time vs force, …) with exponent tracking.
//! - Compile-time separation of scalar and vector kinds: a velocity cannot carry a plain number.
//! - Exact unit conversion for integral magnitudes, rejecting lossy implicit conversions at compile time.
//! - Two interchangeable encodings for vector quantities: a quantity of vectors and a vector of quantities.
//!
//! # What this crate does not try to solve
//!
//! - Affine quantities (temperatures in °C, points vs differences).
//! - General-purpose symbolic simplification of arbitrary unit expressions; [`Simplify`] covers the common forms
//!   and [`Quantity::quantity_cast`] names the rest.
//! - Dynamically sized vectors or matrices.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use phyq_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose derived quantities with `/`, then name them:
//!
//! ```rust
//! use phyq_core::length::{Kilometer, PositionVector};
//! use phyq_core::mechanics::{KilometersPerHour, Velocity};
//! use phyq_core::time::Hours;
//! use phyq_core::{Kind, Quantity, Vector};
//!
//! let r = Vector::new([30, 20, 10]) * PositionVector.in_unit(Kilometer);
//! let v: Quantity<Velocity, KilometersPerHour, _> = (r / Hours::<i32>::new(2)).quantity_cast();
//! assert_eq!(v.value(), Vector::new([15, 10, 5]));
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `phyq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! phyq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity`, `Vector` and `Component`; a quantity serializes as its bare
//!   magnitude. With `std`, [`serde_with_unit`] also records the unit symbol.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Dimension,
//! character and precision mismatches are compile errors. Arithmetic follows IEEE-754 for floats (NaN and
//! infinities propagate) and Rust's overflow rules for integers.
//!
//! Unit conversions of integral magnitudes are checked instead: `to`, `value_cast` and the mixed-unit additive
//! operators panic when the converted value does not fit in the magnitude type. Mixed-unit `==` and `<` compare
//! exact widened products and never narrow. Integral `norm` panics when the root does not fit, and integral `pow`
//! with a negative exponent panics on zero.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod kind;
mod linalg;
mod macros;
mod ops;
mod quantity;
mod ratio;
mod representation;
mod scalar;
mod unit;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension, BASE_COUNT};
pub use kind::{Dimensionless, Kind, KindName, MagnitudeOf, Over, Raised, Ref, Times};
pub use linalg::{cross, dot, norm, Cross, Dot, Norm};
pub use ops::Simplify;
pub use quantity::Quantity;
pub use ratio::Ratio;
pub use representation::{
    Character, Component, Product, Quotient, Representation, ScalarCharacter, ScaleBy, VectorCharacter, Widen,
};
pub use scalar::{Root, Scalar};
pub use unit::{conversion_factor, Per, Pow, Prod, Unit, UnitSymbol, Unitless};
pub use vector::Vector;

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined kinds and units (grouped by domain)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined kind and unit modules (grouped by domain).
///
/// These are defined in `phyq-core` so they can implement conversion and operator traits without running into
/// Rust's orphan rules.
pub mod units;

pub use units::dimensionless;
pub use units::electromagnetism;
pub use units::length;
pub use units::mass;
pub use units::mechanics;
pub use units::time;
