//! Electrical kinds and units.
//!
//! All units are exact decimal multiples of the coherent SI units (ampere, volt, ohm, farad). A resistance times a
//! capacitance is a duration, which the RC example of the `phyq` crate relies on:
//!
//! ```rust
//! use phyq_core::electromagnetism::{Kiloohms, Microfarads};
//! use phyq_core::time::{Duration, Millisecond, Second};
//! use phyq_core::Quantity;
//!
//! let tau: Quantity<Duration, Second> = (Kiloohms::new(10.0) * Microfarads::new(100.0)).quantity_cast().to();
//! assert!((tau.value() - 1.0).abs() < 1e-12);
//! assert!((tau.to::<Millisecond>().value() - 1000.0).abs() < 1e-9);
//! ```

use crate::{Dimension, Quantity};
use phyq_derive::{Kind, Unit};

const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0]);
const RESISTANCE: Dimension = VOLTAGE.div(Dimension::CURRENT);
const CAPACITANCE: Dimension = Dimension::CURRENT.mul(Dimension::TIME).div(VOLTAGE);

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Electric current.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = Dimension::CURRENT)]
pub struct ElectricCurrent;

/// Electric potential difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = VOLTAGE)]
pub struct Voltage;

/// Electrical resistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = RESISTANCE)]
pub struct Resistance;

/// Capacitance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = CAPACITANCE)]
pub struct Capacitance;

// ─────────────────────────────────────────────────────────────────────────────
// Current
// ─────────────────────────────────────────────────────────────────────────────

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = Dimension::CURRENT, ratio = 1)]
pub struct Ampere;
/// A current measured in amperes.
pub type Amperes<R = f64> = Quantity<ElectricCurrent, Ampere, R>;
/// One ampere.
pub const AMPERE: Amperes = Amperes::new(1.0);

/// Milliampere (`1e-3 A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mA", dimension = Dimension::CURRENT, ratio = (1, 1_000))]
pub struct Milliampere;
/// A current measured in milliamperes.
pub type Milliamperes<R = f64> = Quantity<ElectricCurrent, Milliampere, R>;

// ─────────────────────────────────────────────────────────────────────────────
// Voltage
// ─────────────────────────────────────────────────────────────────────────────

/// Volt (`W/A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", dimension = VOLTAGE, ratio = 1)]
pub struct Volt;
/// A voltage measured in volts.
pub type Volts<R = f64> = Quantity<Voltage, Volt, R>;
/// One volt.
pub const VOLT: Volts = Volts::new(1.0);

/// Millivolt (`1e-3 V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mV", dimension = VOLTAGE, ratio = (1, 1_000))]
pub struct Millivolt;
/// A voltage measured in millivolts.
pub type Millivolts<R = f64> = Quantity<Voltage, Millivolt, R>;

/// Microvolt (`1e-6 V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µV", dimension = VOLTAGE, ratio = (1, 1_000_000))]
pub struct Microvolt;
/// A voltage measured in microvolts.
pub type Microvolts<R = f64> = Quantity<Voltage, Microvolt, R>;

/// Nanovolt (`1e-9 V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nV", dimension = VOLTAGE, ratio = (1, 1_000_000_000))]
pub struct Nanovolt;
/// A voltage measured in nanovolts.
pub type Nanovolts<R = f64> = Quantity<Voltage, Nanovolt, R>;

// ─────────────────────────────────────────────────────────────────────────────
// Resistance and capacitance
// ─────────────────────────────────────────────────────────────────────────────

/// Ohm (`V/A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ω", dimension = RESISTANCE, ratio = 1)]
pub struct Ohm;
/// A resistance measured in ohms.
pub type Ohms<R = f64> = Quantity<Resistance, Ohm, R>;

/// Kiloohm (`1000 Ω`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kΩ", dimension = RESISTANCE, ratio = 1_000)]
pub struct Kiloohm;
/// A resistance measured in kiloohms.
pub type Kiloohms<R = f64> = Quantity<Resistance, Kiloohm, R>;

/// Farad (`C/V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "F", dimension = CAPACITANCE, ratio = 1)]
pub struct Farad;
/// A capacitance measured in farads.
pub type Farads<R = f64> = Quantity<Capacitance, Farad, R>;

/// Microfarad (`1e-6 F`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µF", dimension = CAPACITANCE, ratio = (1, 1_000_000))]
pub struct Microfarad;
/// A capacitance measured in microfarads.
pub type Microfarads<R = f64> = Quantity<Capacitance, Microfarad, R>;

crate::impl_unit_conversions!(ElectricCurrent: Ampere, Milliampere);
crate::impl_unit_conversions!(Voltage: Volt, Millivolt, Microvolt, Nanovolt);
crate::impl_unit_conversions!(Resistance: Ohm, Kiloohm);
crate::impl_unit_conversions!(Capacitance: Farad, Microfarad);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn derived_dimensions() {
        assert_eq!(<Resistance as Kind>::DIMENSION, Dimension::new([2, 1, -3, -2, 0, 0, 0]));
        assert_eq!(<Capacitance as Kind>::DIMENSION, Dimension::new([-2, -1, 4, 2, 0, 0, 0]));
        assert_eq!(Ohm::DIMENSION, RESISTANCE);
    }

    #[test]
    fn ohms_law() {
        let i = Milliamperes::new(20.0);
        let r = Ohms::new(250.0);
        let v: Volts = (i * r).quantity_cast().to();
        assert_relative_eq!(v.value(), 5.0);
    }

    #[test]
    fn small_voltages() {
        let v: Microvolts = Millivolts::new(1.5).into();
        assert_relative_eq!(v.value(), 1500.0);
        assert_eq!(Volts::<i64>::new(2).to::<Nanovolt>().value(), 2_000_000_000);
        assert_eq!(format!("{}", Nanovolts::<i32>::new(7)), "7 nV");
    }
}
