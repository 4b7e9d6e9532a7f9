//! Runtime-tagged `phyq` quantities for interchange.
//!
//! `phyq-tagged` erases the compile-time kind and unit of a [`phyq::Quantity`] into a [`TaggedQuantity`], which
//! carries the magnitude together with a runtime [`Dimension`](phyq::Dimension) and [`Ratio`](phyq::Ratio). This is
//! useful at the edges of a program (message queues, plugin boundaries, heterogeneous collections) where the type
//! of a quantity is only known at run time.
//!
//! Restoring a typed quantity is fallible: the dimension must match the target unit, and an integral magnitude is
//! only accepted when the conversion factor is integral. This mirrors the compile-time rules of the typed engine,
//! checked at run time instead.
//!
//! # Quick start
//!
//! ```rust
//! use phyq::length::{Kilometers, Length, Meter};
//! use phyq::time::{Duration, Second};
//! use phyq_tagged::{TagError, TaggedQuantity};
//!
//! let tagged: TaggedQuantity = Kilometers::new(1.5).into();
//!
//! let m = tagged.try_into_quantity::<Length, Meter>().unwrap();
//! assert!((m.value() - 1500.0).abs() < 1e-9);
//!
//! let err = tagged.try_into_quantity::<Duration, Second>().unwrap_err();
//! assert!(matches!(err, TagError::DimensionMismatch { .. }));
//! ```
//!
//! # Logging
//!
//! Rejected conversions are reported through the [`log`] facade at `debug` level; install any logger to see them.
//!
//! # Thread safety
//!
//! All types are `Copy`, `Send` and `Sync` when their magnitudes are. The crate holds no global state.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod convert;
mod error;
mod tagged;

pub use error::TagError;
pub use tagged::TaggedQuantity;
