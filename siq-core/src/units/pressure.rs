//! Pressure units.

use crate::dimension::PRESSURE;
use crate::macros::prefixed_units;
use crate::{Quantity, RootRatio};
use siq_derive::Unit;

/// Pascal (`N/m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", dimension = PRESSURE)]
pub struct Pascal;
/// A quantity measured in pascals.
pub type Pascals<T = f64> = Quantity<Pascal, T>;
/// One pascal.
pub const PA: Pascals = Pascals::new(1.0);

prefixed_units! { Pascal =>
    Femto: Femtopascal, Femtopascals;
    Pico: Picopascal, Picopascals;
    Nano: Nanopascal, Nanopascals;
    Micro: Micropascal, Micropascals;
    Milli: Millipascal, Millipascals;
    Hecto: Hectopascal, Hectopascals;
    Kilo: Kilopascal, Kilopascals;
    Mega: Megapascal, Megapascals;
    Giga: Gigapascal, Gigapascals;
    Tera: Terapascal, Terapascals;
}

/// Bar (`100_000 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "bar", dimension = PRESSURE, scale = RootRatio::integer(100_000))]
pub struct Bar;
/// A quantity measured in bars.
pub type Bars<T = f64> = Quantity<Bar, T>;

prefixed_units! { Bar =>
    Milli: Millibar, Millibars;
}

/// Millimetre of mercury (`101325/760 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mmHg", dimension = PRESSURE, scale = RootRatio::ratio(101_325, 760))]
pub struct MillimeterOfMercury;
/// A quantity measured in millimetres of mercury.
pub type MillimetersOfMercury<T = f64> = Quantity<MillimeterOfMercury, T>;

/// Torr. Defined as `1/760 atm`, identical to [`MillimeterOfMercury`].
pub type Torr = MillimeterOfMercury;

/// Pound per square inch (`6894.76 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "psi", dimension = PRESSURE, scale = RootRatio::ratio(689_476, 100))]
pub struct Psi;
/// A quantity measured in pounds per square inch.
pub type PoundsPerSquareInch<T = f64> = Quantity<Psi, T>;

/// Standard atmosphere (`101_325 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "atm", dimension = PRESSURE, scale = RootRatio::integer(101_325))]
pub struct Atmosphere;
/// A quantity measured in standard atmospheres.
pub type Atmospheres<T = f64> = Quantity<Atmosphere, T>;

crate::impl_unit_conversions!(
    Pascal, Hectopascal, Kilopascal, Megapascal, Bar, Millibar, MillimeterOfMercury, Psi, Atmosphere
);
