//! Exact, compile-time checked physical quantities.
//!
//! `siq` is the user-facing crate in this workspace. It re-exports the full API from `siq-core`
//! plus every predefined unit at the crate root.
//!
//! The core idea is: a value is always a `Quantity<U, T>`, where `U` is a zero-sized type whose
//! dimension, scale and zero point are compile-time constants. Units are checked while the
//! program compiles and cost nothing at run time beyond the stored value.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Reconciles compatible units exactly: prefixes, imperial units and affine temperature
//!   scales are rational scales and offsets, not floating point factors.
//! - Derived units compose freely (`Per`, `Prod`, `Pow`, `Root`), including fractional
//!   exponents such as `V/√Hz`.
//! - Integer quantities only convert implicitly when the result is exact.
//!
//! # What this crate does not try to solve
//!
//! - Parsing units from free-form text.
//! - Discovering or registering units at run time. [`DynQuantity`] checks units at run time
//!   but only knows the ones compiled in.
//!
//! # Quick start
//!
//! ```rust
//! use siq::{Celsius, Kelvins, Kilometers, Meters, Millimeters};
//!
//! let d = Kilometers::new(1.0) + Meters::new(1.0) + Millimeters::new(1.0);
//! assert_eq!(d, Millimeters::new(1_001_001.0));
//!
//! assert_eq!(Celsius::new(0.0), Kelvins::new(273.15));
//! assert_eq!(Celsius::new(10.0) + Celsius::new(15.0), Kelvins::new(298.15));
//! ```
//!
//! Literal suffixes read like the units they build:
//!
//! ```rust
//! use siq::{Literals, Watts};
//!
//! assert_eq!(10.0.V() * 100.0.mA(), Watts::new(1.0));
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use siq::{Kilometers, Seconds};
//!
//! let d = Kilometers::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add a length to a time
//! ```
//!
//! ```compile_fail
//! use siq::{Celsius, Fahrenheit};
//!
//! // different zero points: cast one side first
//! let _ = Celsius::new(1.0) + Fahrenheit::new(1.0);
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root):
//!
//! - `siq::length`, `siq::time`, `siq::mass`, `siq::current`, `siq::temperature`, `siq::amount`
//! - `siq::angle`, `siq::photometry`, `siq::data`
//! - `siq::area`, `siq::volume`, `siq::velocity`, `siq::frequency`
//! - `siq::force`, `siq::energy`, `siq::power`, `siq::pressure`
//! - `siq::electromagnetism`, `siq::chemical`, `siq::thermal`, `siq::unitless`
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `siq-core`.
//! - `serde`: enables `serde` support for `Quantity<U, T>` and the `serde_with_unit` helper.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! siq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Unit mismatches are compile errors. [`DynQuantity`] reports them as [`QuantityError`]
//! values instead. Numeric overflow and NaN follow the representation.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use siq_core::*;

/// Derive macro used by `siq-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit`, `crate::Scale`, `crate::Offset` and
/// `crate::Quantity`, so it is intended for use inside `siq-core` (or crates exposing the same
/// crate-root API). Most users should not need this.
pub use siq_derive::Unit;

pub use siq_core::units::amount::*;
pub use siq_core::units::angle::*;
pub use siq_core::units::area::*;
pub use siq_core::units::chemical::*;
pub use siq_core::units::current::*;
pub use siq_core::units::data::*;
pub use siq_core::units::electromagnetism::*;
pub use siq_core::units::energy::*;
pub use siq_core::units::force::*;
pub use siq_core::units::frequency::*;
pub use siq_core::units::length::*;
pub use siq_core::units::mass::*;
pub use siq_core::units::photometry::*;
pub use siq_core::units::power::*;
pub use siq_core::units::pressure::*;
pub use siq_core::units::temperature::*;
pub use siq_core::units::thermal::*;
pub use siq_core::units::time::*;
pub use siq_core::units::unitless::*;
pub use siq_core::units::velocity::*;
pub use siq_core::units::volume::*;
