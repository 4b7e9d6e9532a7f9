//! Time kinds and units.
//!
//! The coherent unit for this dimension is [`Second`] (`Second::RATIO == 1`). Civil units use the conventional
//! mapping `1 day = 86_400 s` (mean solar day; leap seconds ignored).
//!
//! ```rust
//! use phyq_core::time::{Hour, Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//!
//! let back = seconds.to::<Hour>();
//! assert!((back.value() - 0.5).abs() < 1e-12);
//! ```

use crate::{Dimension, Quantity};
use phyq_derive::{Kind, Unit};

/// Conventional civil mapping used by this module: seconds per mean solar day.
pub const SECONDS_PER_DAY: i128 = 86_400;

/// Elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Kind)]
#[kind(dimension = Dimension::TIME)]
pub struct Duration;

/// Milliseconds (`1 ms = 10^-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Dimension::TIME, ratio = (1, 1_000))]
pub struct Millisecond;
/// A duration measured in milliseconds.
pub type Milliseconds<R = f64> = Quantity<Duration, Millisecond, R>;
/// A constant representing one millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

/// Seconds (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Dimension::TIME, ratio = 1)]
pub struct Second;
/// A duration measured in seconds.
pub type Seconds<R = f64> = Quantity<Duration, Second, R>;
/// A constant representing one second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minutes (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Dimension::TIME, ratio = 60)]
pub struct Minute;
/// A duration measured in minutes.
pub type Minutes<R = f64> = Quantity<Duration, Minute, R>;
/// A constant representing one minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hours (`3_600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Dimension::TIME, ratio = 3_600)]
pub struct Hour;
/// A duration measured in hours.
pub type Hours<R = f64> = Quantity<Duration, Hour, R>;
/// A constant representing one hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Mean solar day (`86_400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Dimension::TIME, ratio = crate::Ratio::integer(SECONDS_PER_DAY))]
pub struct Day;
/// A duration measured in days.
pub type Days<R = f64> = Quantity<Duration, Day, R>;
/// A constant representing one day.
pub const DAY: Days = Days::new(1.0);

crate::impl_unit_conversions!(Duration: Millisecond, Second, Minute, Hour, Day);
