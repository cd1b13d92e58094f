//! Speed and acceleration units.
//!
//! Most speeds are plain [`Per`] compositions of a length and a time unit, so their scale follows
//! from the operands (`km/h` is `1000/3600 m/s`). The knot and the acceleration units that are
//! not a simple ratio of two units are declared as named units.
//!
//! ```rust
//! use siq_core::units::length::Kilometers;
//! use siq_core::units::time::Hours;
//! use siq_core::units::velocity::MetersPerSecond;
//!
//! let v = Kilometers::new(36.0) / Hours::new(1.0);
//! let v: MetersPerSecond = v.cast();
//! assert!((v.value() - 10.0).abs() < 1e-12);
//! ```

use crate::dimension::{ACCELERATION, SPEED};
use crate::units::length::{Kilometer, Meter, Mile, Millimeter};
use crate::units::time::{Hour, Second};
use crate::{Per, Pow, Quantity, RootRatio};
use siq_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Speed
// ─────────────────────────────────────────────────────────────────────────────

/// Metres per second.
pub type MeterPerSecond = Per<Meter, Second>;
/// A speed in metres per second.
pub type MetersPerSecond<T = f64> = Quantity<MeterPerSecond, T>;

/// Millimetres per second.
pub type MillimeterPerSecond = Per<Millimeter, Second>;
/// A speed in millimetres per second.
pub type MillimetersPerSecond<T = f64> = Quantity<MillimeterPerSecond, T>;

/// Kilometres per second.
pub type KilometerPerSecond = Per<Kilometer, Second>;
/// A speed in kilometres per second.
pub type KilometersPerSecond<T = f64> = Quantity<KilometerPerSecond, T>;

/// Kilometres per hour.
pub type KilometerPerHour = Per<Kilometer, Hour>;
/// A speed in kilometres per hour.
pub type KilometersPerHour<T = f64> = Quantity<KilometerPerHour, T>;

/// Miles per hour.
pub type MilePerHour = Per<Mile, Hour>;
/// A speed in miles per hour.
pub type MilesPerHour<T = f64> = Quantity<MilePerHour, T>;

/// Knot (one nautical mile per hour).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kn", dimension = SPEED, scale = RootRatio::ratio(1_852, 3_600))]
pub struct Knot;
/// A speed in knots.
pub type Knots<T = f64> = Quantity<Knot, T>;

// ─────────────────────────────────────────────────────────────────────────────
// Acceleration
// ─────────────────────────────────────────────────────────────────────────────

/// Metres per second squared.
pub type MeterPerSecondSquared = Per<Meter, Pow<Second, 2>>;
/// An acceleration in metres per second squared.
pub type MetersPerSecondSquared<T = f64> = Quantity<MeterPerSecondSquared, T>;

/// Gal (`1 cm/s²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Gal", dimension = ACCELERATION, scale = RootRatio::ratio(1, 100))]
pub struct Gal;
/// An acceleration in gals.
pub type Gals<T = f64> = Quantity<Gal, T>;

/// Standard acceleration of gravity (`9.80665 m/s²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g₀", dimension = ACCELERATION, scale = RootRatio::ratio(980_665, 100_000))]
pub struct StandardGravity;
/// An acceleration in multiples of standard gravity.
pub type StandardGravities<T = f64> = Quantity<StandardGravity, T>;
