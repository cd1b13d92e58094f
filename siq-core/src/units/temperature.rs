//! Thermodynamic temperature units.
//!
//! [`Kelvin`] is the coherent unit. Celsius and Fahrenheit are affine units: besides a scale they
//! carry an exact offset (the SI value of their zero point):
//!
//! | unit              | scale | offset            |
//! |-------------------|-------|-------------------|
//! | [`Kelvin`]        | 1     | 0                 |
//! | [`DegreeCelsius`] | 1     | 27315/100 K       |
//! | [`DegreeFahrenheit`] | 5/9 | 45967/180 K     |
//!
//! Adding two temperatures of the same affine unit keeps that unit's offset, adding temperatures
//! whose offsets differ does not compile; [`Quantity::cast`](crate::Quantity::cast) to a common unit first.
//!
//! ```rust
//! use siq_core::units::temperature::{Celsius, Kelvins};
//!
//! let t = Celsius::new(10.0) + Celsius::new(15.0);
//! assert_eq!(t, Kelvins::new(298.15));
//! ```
//!
//! ```rust,compile_fail
//! use siq_core::units::temperature::{Celsius, Kelvins};
//!
//! let _ = Celsius::new(10.0) + Kelvins::new(15.0);
//! ```

use crate::dimension::TEMPERATURE;
use crate::macros::prefixed_units;
use crate::{Quantity, Ratio, RootRatio};
use siq_derive::Unit;

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", dimension = TEMPERATURE)]
pub struct Kelvin;
/// A quantity measured in kelvins.
pub type Kelvins<T = f64> = Quantity<Kelvin, T>;

prefixed_units! { Kelvin =>
    Nano: Nanokelvin, Nanokelvins;
    Micro: Microkelvin, Microkelvins;
    Milli: Millikelvin, Millikelvins;
}

/// Degree Celsius: kelvin-sized, zero at `273.15 K`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", dimension = TEMPERATURE, offset = Ratio::new(27_315, 100))]
pub struct DegreeCelsius;
/// A temperature in degrees Celsius.
pub type Celsius<T = f64> = Quantity<DegreeCelsius, T>;

/// Degree Fahrenheit: `5/9 K` wide, zero at `459.67 °F` below absolute zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "°F",
    dimension = TEMPERATURE,
    scale = RootRatio::ratio(5, 9),
    offset = Ratio::new(45_967, 180)
)]
pub struct DegreeFahrenheit;
/// A temperature in degrees Fahrenheit.
pub type Fahrenheit<T = f64> = Quantity<DegreeFahrenheit, T>;

/// Degree Rankine: Fahrenheit-sized, zero at absolute zero.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°R", dimension = TEMPERATURE, scale = RootRatio::ratio(5, 9))]
pub struct DegreeRankine;
/// A temperature in degrees Rankine.
pub type Rankine<T = f64> = Quantity<DegreeRankine, T>;

crate::impl_unit_conversions!(Kelvin, DegreeCelsius, DegreeFahrenheit, DegreeRankine);
