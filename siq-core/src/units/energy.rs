//! Energy units.
//!
//! [`Joule`] is coherent. The watt-hour, calorie and electronvolt are exact rational multiples
//! of it.
//!
//! ```rust
//! use siq_core::units::energy::{Joule, KilowattHours};
//!
//! let e = KilowattHours::new(1.0).convert::<Joule>();
//! assert_eq!(e.value(), 3.6e6);
//! ```

use crate::dimension::ENERGY;
use crate::macros::prefixed_units;
use crate::{Quantity, RootRatio};
use siq_derive::Unit;

/// Joule (`N·m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", dimension = ENERGY)]
pub struct Joule;
/// A quantity measured in joules.
pub type Joules<T = f64> = Quantity<Joule, T>;
/// One joule.
pub const J: Joules = Joules::new(1.0);

prefixed_units! { Joule =>
    Femto: Femtojoule, Femtojoules;
    Pico: Picojoule, Picojoules;
    Nano: Nanojoule, Nanojoules;
    Micro: Microjoule, Microjoules;
    Milli: Millijoule, Millijoules;
    Kilo: Kilojoule, Kilojoules, KJ;
    Mega: Megajoule, Megajoules;
    Giga: Gigajoule, Gigajoules;
    Tera: Terajoule, Terajoules;
}

/// Watt-hour (`3600 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Wh", dimension = ENERGY, scale = RootRatio::integer(3_600))]
pub struct WattHour;
/// A quantity measured in watt-hours.
pub type WattHours<T = f64> = Quantity<WattHour, T>;

prefixed_units! { WattHour =>
    Kilo: KilowattHour, KilowattHours;
    Mega: MegawattHour, MegawattHours;
    Giga: GigawattHour, GigawattHours;
}

/// Calorie (`4.1855 J`, the 15 °C calorie).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cal", dimension = ENERGY, scale = RootRatio::ratio(41_855, 10_000))]
pub struct Calorie;
/// A quantity measured in calories.
pub type Calories<T = f64> = Quantity<Calorie, T>;

prefixed_units! { Calorie =>
    Kilo: Kilocalorie, Kilocalories;
}

/// Electronvolt (`1.602176634e-19 J`, exact since the 2019 SI).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "eV",
    dimension = ENERGY,
    scale = RootRatio::ratio(1_602_176_634, 10_000_000_000_000_000_000_000_000_000)
)]
pub struct ElectronVolt;
/// A quantity measured in electronvolts.
pub type ElectronVolts<T = f64> = Quantity<ElectronVolt, T>;

prefixed_units! { ElectronVolt =>
    Milli: MilliElectronVolt, MilliElectronVolts;
    Kilo: KiloElectronVolt, KiloElectronVolts;
    Mega: MegaElectronVolt, MegaElectronVolts;
    Giga: GigaElectronVolt, GigaElectronVolts;
    Tera: TeraElectronVolt, TeraElectronVolts;
}

/// Erg (`1e-7 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "erg", dimension = ENERGY, scale = RootRatio::ratio(1, 10_000_000))]
pub struct Erg;
/// A quantity measured in ergs.
pub type Ergs<T = f64> = Quantity<Erg, T>;

crate::impl_unit_conversions!(
    Joule, Millijoule, Kilojoule, Megajoule, WattHour, KilowattHour, Calorie, Kilocalorie,
    ElectronVolt, Erg
);
