//! Kinds and units of classical mechanics.
//!
//! Velocity, acceleration, force, momentum and moment of force are vector kinds; their norms are scalar kinds
//! ([`Speed`] for [`Velocity`], an anonymous [`MagnitudeOf`](crate::MagnitudeOf) for the others). Derived units
//! are spelled with [`Per`] and [`Prod`], so `KilometersPerHour` is exactly `5/18` m/s.
//!
//! ```rust
//! use phyq_core::mass::Kilograms;
//! use phyq_core::mechanics::{MetersPerSecond, Momentum, NewtonSecond, Velocity};
//! use phyq_core::{Quantity, Vector};
//!
//! let v: Quantity<Velocity, MetersPerSecond, _> = Quantity::new(Vector::new([1.0, 2.0, 3.0]));
//! let p: Quantity<Momentum, NewtonSecond, _> = (Kilograms::new(2.0) * v).quantity_cast().to();
//! assert_eq!(p.value(), Vector::new([2.0, 4.0, 6.0]));
//! ```

use crate::length::{Kilometer, Meter};
use crate::time::{Hour, Second};
use crate::{Dimension, Per, Prod, Quantity};
use phyq_derive::{Kind, Unit};

const SPEED: Dimension = Dimension::LENGTH.div(Dimension::TIME);
const ACCELERATION: Dimension = SPEED.div(Dimension::TIME);
const FORCE: Dimension = Dimension::MASS.mul(ACCELERATION);
const MOMENTUM: Dimension = Dimension::MASS.mul(SPEED);
const ENERGY: Dimension = FORCE.mul(Dimension::LENGTH);

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Scalar rate of motion, the norm of a [`Velocity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = SPEED)]
pub struct Speed;

/// Rate of change of position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = SPEED, character = vector, magnitude = Speed)]
pub struct Velocity;

/// Rate of change of velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = ACCELERATION, character = vector)]
pub struct Acceleration;

/// Force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = FORCE, character = vector)]
pub struct Force;

/// Linear momentum, mass times velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = MOMENTUM, character = vector)]
pub struct Momentum;

/// Torque, position crossed with force. Shares the energy dimension but not its kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = ENERGY, character = vector)]
pub struct MomentOfForce;

/// Energy (work, heat).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = ENERGY)]
pub struct Energy;

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

/// Newton (`kg·m/s²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = FORCE, ratio = 1)]
pub struct Newton;

/// Joule (`N·m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", dimension = ENERGY, ratio = 1)]
pub struct Joule;
/// An energy measured in joules.
pub type Joules<R = f64> = Quantity<Energy, Joule, R>;
/// One joule.
pub const JOULE: Joules = Joules::new(1.0);

/// Metres per second.
pub type MetersPerSecond = Per<Meter, Second>;
/// Kilometres per hour.
pub type KilometersPerHour = Per<Kilometer, Hour>;
/// Metres per second squared.
pub type MetersPerSecondSquared = Per<MetersPerSecond, Second>;
/// Newton second, the coherent momentum unit.
pub type NewtonSecond = Prod<Newton, Second>;
/// Newton metre, the coherent torque unit.
pub type NewtonMeter = Prod<Newton, Meter>;

/// A speed measured in metres per second.
pub type MetersPerSecondSpeed<R = f64> = Quantity<Speed, MetersPerSecond, R>;
/// A speed measured in kilometres per hour.
pub type KilometersPerHourSpeed<R = f64> = Quantity<Speed, KilometersPerHour, R>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Meters, PositionVector};
    use crate::mass::Kilograms;
    use crate::time::Seconds;
    use crate::{cross, norm, Kind, KindName, Ratio, Unit, UnitSymbol, Vector};
    use approx::assert_relative_eq;

    #[test]
    fn kmh_is_five_eighteenths() {
        assert_eq!(KilometersPerHour::RATIO, Ratio::new(5, 18));
        assert_eq!(UnitSymbol::<KilometersPerHour>::new().to_string(), "km/h");
        let v = KilometersPerHourSpeed::new(36.0).to::<MetersPerSecond>();
        assert_relative_eq!(v.value(), 10.0);
    }

    #[test]
    fn speed_from_length_over_time() {
        let v: MetersPerSecondSpeed = (Meters::new(100.0) / Seconds::new(8.0)).quantity_cast();
        assert_relative_eq!(v.value(), 12.5);
        assert_eq!(format!("{v}"), "12.5 m/s");
    }

    #[test]
    fn kind_names() {
        assert_eq!(KindName::<MomentOfForce>::new().to_string(), "moment_of_force");
        assert_eq!(
            KindName::<<Force as Kind>::MagnitudeKind>::new().to_string(),
            "|force|"
        );
        assert_eq!(KindName::<<Velocity as Kind>::MagnitudeKind>::new().to_string(), "speed");
    }

    #[test]
    fn torque_from_cross_product() {
        let r: Quantity<PositionVector, Meter, _> = Quantity::new(Vector::new([3.0, 0.0, 0.0]));
        let f: Quantity<Force, Newton, _> = Quantity::new(Vector::new([0.0, 10.0, 0.0]));
        let torque: Quantity<MomentOfForce, NewtonMeter, _> = cross(r, f).quantity_cast().to();
        assert_eq!(torque.value(), Vector::new([0.0, 0.0, 30.0]));
        assert_relative_eq!(norm(torque).value(), 30.0);
    }

    #[test]
    fn kinetic_energy() {
        let m = Kilograms::new(4.0);
        let v = MetersPerSecondSpeed::new(3.0);
        let e: Joules = (m * v.pow::<2>() / 2.0).quantity_cast().to();
        assert_relative_eq!(e.value(), 18.0);
        assert!(e > JOULE * 17.0);
    }
}
