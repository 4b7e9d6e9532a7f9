//! Mass kinds and units.
//!
//! The coherent unit for this dimension is the [`Kilogram`] (`Kilogram::RATIO == 1`), so the gram carries a ratio
//! of `1/1000`.
//!
//! ```rust
//! use phyq_core::mass::{Gram, Kilograms};
//!
//! let m = Kilograms::<i32>::new(2);
//! assert_eq!(m.to::<Gram>().value(), 2000);
//! ```

use crate::{Dimension, Quantity};
use phyq_derive::{Kind, Unit};

/// Mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = Dimension::MASS)]
pub struct Mass;

/// Gram (`1/1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Dimension::MASS, ratio = (1, 1_000))]
pub struct Gram;
/// A mass measured in grams.
pub type Grams<R = f64> = Quantity<Mass, Gram, R>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Dimension::MASS, ratio = 1)]
pub struct Kilogram;
/// Type alias shorthand for [`Kilogram`].
pub type Kg = Kilogram;
/// A mass measured in kilograms.
pub type Kilograms<R = f64> = Quantity<Mass, Kilogram, R>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Metric tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = Dimension::MASS, ratio = 1_000)]
pub struct Tonne;
/// A mass measured in tonnes.
pub type Tonnes<R = f64> = Quantity<Mass, Tonne, R>;
/// One tonne.
pub const TONNE: Tonnes = Tonnes::new(1.0);

crate::impl_unit_conversions!(Mass: Gram, Kilogram, Tonne);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gram_is_a_thousandth() {
        assert_eq!(Kilograms::<i64>::new(3).to::<Gram>().value(), 3000);
        assert_eq!(Grams::<i64>::new(2999).value_cast::<Kilogram>().value(), 2);
        assert_relative_eq!(Grams::new(250.0).to::<Kilogram>().value(), 0.25);
    }

    #[test]
    fn tonne_conversions() {
        let t: Kilograms = TONNE.into();
        assert_relative_eq!(t.value(), 1000.0);
        assert_eq!(Tonnes::<i32>::new(1), Kilograms::<i32>::new(1000));
        assert_eq!(format!("{}", KG + G * 500.0), "1.5 kg");
    }
}
