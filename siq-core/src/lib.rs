//! Core type system for exact, compile-time checked physical quantities.
//!
//! `siq-core` models a unit as three compile-time constants:
//!
//! - a [`Dimension`], a [`RootRatio`] over prime-tagged base dimensions, so `m²/s` is
//!   `(2²/3)^(1/1)` and dimension equality is tuple equality,
//! - a [`Scale`], the size of one unit in SI units, again an exact [`RootRatio`],
//! - an [`Offset`], the SI value of the unit's zero (non-zero only for affine units such as
//!   degrees Celsius).
//!
//! A unit is a zero-sized marker type implementing [`Unit`]. A value tagged with a unit is a
//! [`Quantity<U, T>`], backed by any [`Repr`] (`f64` unless stated otherwise). All unit algebra
//! is `const fn`, so mixing dimensions, adding units with different zero points or an integer
//! conversion that would truncate are rejected while the program compiles.
//!
//! Most users should depend on `siq` (the facade crate) unless they need direct access to these
//! primitives.
//!
//! # Quick start
//!
//! Mixed prefixes add up exactly, in the finest unit involved:
//!
//! ```rust
//! use siq_core::units::length::{Kilometers, Meters, Millimeters};
//!
//! let d = Kilometers::new(1.0) + Meters::new(1.0) + Millimeters::new(1.0);
//! assert_eq!(d, Millimeters::new(1_001_001.0));
//! assert_eq!(d.to_string(), "1001001 mm");
//! ```
//!
//! Products and quotients carry their dimension:
//!
//! ```rust
//! use siq_core::units::electromagnetism::Volts;
//! use siq_core::units::current::Milliamperes;
//! use siq_core::units::power::Watts;
//!
//! let p = Volts::new(10.0) * Milliamperes::new(100.0);
//! assert_eq!(p, Watts::new(1.0));
//! ```
//!
//! Integer quantities convert implicitly only when nothing is lost:
//!
//! ```rust
//! use siq_core::units::length::{Kilometers, Meter, Meters};
//!
//! assert_eq!(Meters::<i32>::new(2000), Kilometers::<i32>::new(2));
//! let m: Meters<i32> = Kilometers::<i32>::new(3).convert::<Meter>();
//! assert_eq!(m.value(), 3000);
//! ```
//!
//! ```rust,compile_fail
//! use siq_core::units::length::{Kilometer, Meters};
//!
//! // 1500 m is not a whole number of kilometres: use `cast` instead.
//! let _ = Meters::<i32>::new(1500).convert::<Kilometer>();
//! ```
//!
//! Units only known at run time go through [`DynQuantity`], which reports the same failures
//! as [`QuantityError`] values instead of compile errors.
//!
//! # `no_std`
//!
//! Disable default features to build `siq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! siq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U, T>` (raw value) and the
//!   [`serde_with_unit`] helper (value plus symbol). Implies `std`.
//!
//! # Panics and errors
//!
//! Unit mismatches are compile errors. Representation-level behaviour (integer overflow,
//! NaN and infinities) propagates unchanged. The only run-time errors come from
//! [`DynQuantity`] and are reported as [`QuantityError`].
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

mod macros;

pub mod arithmetic;
pub mod dimension;
pub mod maths;

mod conversion;
mod dynamic;
mod error;
mod literals;
mod quantity;
mod ratio;
mod repr;
mod root_ratio;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimension;
pub use dynamic::{DynQuantity, DynUnit};
pub use error::{QuantityError, Result};
pub use literals::Literals;
pub use quantity::{cast, value, IsQuantity, Quantity, RawValue};
pub use ratio::Ratio;
pub use repr::{FloatRepr, Repr};
pub use root_ratio::RootRatio;
pub use unit::{
    Atto, Centi, Common, Deca, Deci, Exa, Femto, Giga, Gibi, Hecto, Inv, Kibi, Kilo, Mebi, Mega,
    Micro, Milli, Nano, Per, Peta, Pico, Pow, Prod, Root, Simplify, SymbolOf, Tebi, Tera, Unit,
    Unitless,
};

/// Size of one unit in SI units of the same dimension.
pub type Scale = RootRatio;

/// SI value of a unit's zero point.
pub type Offset = Ratio;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `siq-core` so they can implement formatting and conversion traits
/// without running into Rust's orphan rules.
pub mod units;

pub use units::amount;
pub use units::angle;
pub use units::area;
pub use units::chemical;
pub use units::current;
pub use units::data;
pub use units::electromagnetism;
pub use units::energy;
pub use units::force;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::photometry;
pub use units::power;
pub use units::pressure;
pub use units::temperature;
pub use units::thermal;
pub use units::time;
pub use units::unitless;
pub use units::velocity;
pub use units::volume;
