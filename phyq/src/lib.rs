//! Strongly typed physical quantities with scalar and vector magnitudes.
//!
//! `phyq` is the user-facing crate in this workspace. It re-exports the full API from `phyq-core` plus the
//! predefined catalog of kinds and units (length, time, mass, mechanics, electromagnetism, pure numbers).
//!
//! The core idea is: a value is always a `Quantity<K, U, R>`, where `K` is a zero-sized *kind* (what is measured:
//! a length, a velocity, a force), `U` a zero-sized *unit* (how it is measured) and `R` the magnitude. Kinds and
//! units exist only at compile time; a quantity is exactly as large as its magnitude.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Prevents attaching a plain number to a vector kind (a velocity needs a vector magnitude).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`), and refuses conversions that would
//!   silently truncate an integral magnitude (`value_cast::<TargetUnit>()` opts into truncation).
//! - Computes the kind and unit of products and quotients, and lets you name the result with `quantity_cast`.
//! - Provides `cross`, `norm` and `dot` with correct units for both vector encodings.
//!
//! # What this crate does not try to solve
//!
//! - Parsing units from strings at run time.
//! - Arbitrary-precision arithmetic: magnitudes are primitive numbers or fixed-size vectors of them.
//! - A database of physical constants.
//!
//! # Quick start
//!
//! Attach magnitudes to references and convert:
//!
//! ```rust
//! use phyq::length::{Kilometer, Kilometers, Meter, Meters, PositionVector};
//! use phyq::{Kind, Vector};
//!
//! let d = 3 * Kilometers::<i32>::new(1);
//! assert_eq!(d.to::<Meter>().value(), 3000);
//! assert_eq!(d, Meters::<i32>::new(3000));
//!
//! let r = Vector::new([3, 2, 1]) * PositionVector.in_unit(Kilometer);
//! assert_eq!(r.to::<Meter>().value(), Vector::new([3000, 2000, 1000]));
//! ```
//!
//! Derived quantities carry their kind and unit; `quantity_cast` names them:
//!
//! ```rust
//! use phyq::mass::Kilograms;
//! use phyq::mechanics::{MetersPerSecond, Momentum, NewtonSecond, Velocity};
//! use phyq::{Quantity, Vector};
//!
//! let v: Quantity<Velocity, MetersPerSecond, Vector<i32, 3>> = Quantity::new(Vector::new([1, 2, 3]));
//! let p: Quantity<Momentum, NewtonSecond, _> = (Kilograms::<i32>::new(2) * v).quantity_cast().to();
//! assert_eq!(p.value(), Vector::new([2, 4, 6]));
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use phyq::length::Kilometers;
//! use phyq::time::Seconds;
//!
//! let _ = Kilometers::new(1.0) + Seconds::new(1.0);
//! ```
//!
//! Implicitly truncating an integral magnitude:
//!
//! ```compile_fail
//! use phyq::length::{Kilometer, Meters};
//!
//! let _ = Meters::<i32>::new(1001).to::<Kilometer>();
//! ```
//!
//! Attaching a scalar to a vector kind:
//!
//! ```compile_fail
//! use phyq::mechanics::{MetersPerSecond, Velocity};
//! use phyq::Quantity;
//!
//! let _ = Quantity::<Velocity, MetersPerSecond, f64>::new(1.0);
//! ```
//!
//! Attaching a vector to a scalar kind:
//!
//! ```compile_fail
//! use phyq::length::{Length, Meter};
//! use phyq::{Quantity, Vector};
//!
//! let _ = Quantity::<Length, Meter, Vector<f64, 3>>::new(Vector::new([1.0, 2.0, 3.0]));
//! ```
//!
//! Casting a vector of quantities as a whole:
//!
//! ```compile_fail
//! use phyq::length::{Kilometer, Meter, PositionVector};
//! use phyq::{Component, Kind, Vector};
//!
//! let m = PositionVector.in_unit(Meter);
//! let v = Vector::new([Component(1001) * m, Component(2) * m]);
//! let _ = v.value_cast::<Kilometer>();
//! ```
//!
//! # Modules
//!
//! Kinds and units are grouped by domain under modules (also re-exported at the crate root for convenience):
//!
//! - `phyq::length` (metres, kilometres, inches, position vectors, …)
//! - `phyq::time` (seconds, minutes, hours, days, …)
//! - `phyq::mass` (grams, kilograms, tonnes)
//! - `phyq::mechanics` (speed, velocity, force, momentum, moment of force, energy)
//! - `phyq::electromagnetism` (current, voltage, resistance, capacitance)
//! - `phyq::dimensionless` (`ONE`, percent)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `phyq-core`.
//! - `serde`: enables `serde` support; a quantity serializes as its bare magnitude. With `std`, the
//!   `serde_with_unit` helper also records the unit symbol.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! phyq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Every invalid
//! combination is a compile error. Float arithmetic follows IEEE-754; integer arithmetic follows Rust's overflow
//! rules. For run-time tagged quantities with fallible conversion, see the `phyq-tagged` crate.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use phyq_core::*;

/// Derive macros used by `phyq-core` to define kind and unit marker types.
///
/// These macros expand in terms of `crate::Kind`, `crate::Unit`, `crate::Ratio` and friends, so they are intended
/// for use inside `phyq-core` (or crates exposing the same crate-root API). Most users should not need them.
pub use phyq_derive::{Kind, Unit};

pub use phyq_core::units::dimensionless::*;
pub use phyq_core::units::electromagnetism::*;
pub use phyq_core::units::length::*;
pub use phyq_core::units::mass::*;
pub use phyq_core::units::mechanics::*;
pub use phyq_core::units::time::*;
