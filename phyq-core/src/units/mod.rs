//! Predefined kinds and units grouped by domain.
//!
//! `phyq-core` ships a small catalog so that conversions, vector algebra and formatting work out of the box
//! without downstream crates having to fight Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: `Length`, `PositionVector`; SI and international customary length units.
//! - [`time`]: `Duration`; second, minute, hour, day.
//! - [`mass`]: `Mass`; kilogram (coherent), gram, tonne.
//! - [`mechanics`]: velocity, acceleration, force, momentum, moment of force, energy.
//! - [`electromagnetism`]: current, voltage, resistance, capacitance.
//! - [`dimensionless`]: pure numbers, [`ONE`](dimensionless::ONE) and percent.

pub mod dimensionless;
pub mod electromagnetism;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod time;
