//! Pure numbers.
//!
//! [`ONE`] is the reference of dimensionless quantities: `2 * ONE` is the number two as a quantity, which can scale
//! any other quantity through quantity multiplication.
//!
//! ```rust
//! use phyq_core::dimensionless::{ONE, PERCENT};
//! use phyq_core::length::Meters;
//! use phyq_core::Unitless;
//!
//! let half = 50.0 * PERCENT;
//! assert_eq!(half.to::<Unitless>().value(), 0.5);
//!
//! let scaled = (3.0 * ONE) * Meters::new(2.0);
//! assert_eq!(scaled.value(), 6.0);
//! ```

use crate::{Dimension, Quantity, Ref};
use phyq_derive::Unit;

pub use crate::kind::Dimensionless;
pub use crate::unit::Unitless;

/// Reference of pure numbers.
pub const ONE: Ref<Dimensionless, Unitless> = Ref::new();

/// A pure number.
pub type Number<R = f64> = Quantity<Dimensionless, Unitless, R>;

/// Percent (`1/100`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = Dimension::DIMENSIONLESS, ratio = (1, 100))]
pub struct Percent;
/// A ratio expressed in percent.
pub type Percents<R = f64> = Quantity<Dimensionless, Percent, R>;
/// Reference of ratios in percent.
pub const PERCENT: Ref<Dimensionless, Percent> = Ref::new();

crate::impl_unit_conversions!(Dimensionless: Unitless, Percent);
