//! Electrical and magnetic units.
//!
//! Every coherent unit here is derived from the watt and the ampere: `V = W/A`, `Ω = V/A`,
//! `F = C/V`, `H = Ω·s`, `T = V·s/m²`. Products and quotients of catalog quantities land on the
//! right dimension, so Ohm's law needs no conversion:
//!
//! ```rust
//! use siq_core::units::current::Milliamperes;
//! use siq_core::units::electromagnetism::{Ohms, Volts};
//!
//! let u = Ohms::new(470.0) * Milliamperes::new(10.0);
//! assert_eq!(u, Volts::new(4.7));
//! ```
//!
//! Noise spectral densities divide by the square root of a frequency, see
//! [`RootHertz`](crate::units::frequency::RootHertz).

use crate::dimension::{
    CAPACITANCE, ELECTRICAL_CONDUCTANCE, ELECTRICAL_RESISTANCE, ELECTRIC_CHARGE,
    ELECTRIC_POTENTIAL, INDUCTANCE, MAGNETIC_FLUX, MAGNETIC_FLUX_DENSITY,
};
use crate::macros::prefixed_units;
use crate::units::current::{Ampere, Nanoampere, Picoampere};
use crate::units::frequency::RootHertz;
use crate::{Per, Quantity, RootRatio};
use siq_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Potential
// ─────────────────────────────────────────────────────────────────────────────

/// Volt (`W/A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", dimension = ELECTRIC_POTENTIAL)]
pub struct Volt;
/// A quantity measured in volts.
pub type Volts<T = f64> = Quantity<Volt, T>;
/// One volt.
pub const V: Volts = Volts::new(1.0);

prefixed_units! { Volt =>
    Femto: Femtovolt, Femtovolts;
    Pico: Picovolt, Picovolts;
    Nano: Nanovolt, Nanovolts;
    Micro: Microvolt, Microvolts;
    Milli: Millivolt, Millivolts, MILLIVOLT;
    Kilo: Kilovolt, Kilovolts, KILOVOLT;
    Mega: Megavolt, Megavolts;
    Giga: Gigavolt, Gigavolts;
    Tera: Teravolt, Teravolts;
}

crate::impl_unit_conversions!(Volt, Nanovolt, Microvolt, Millivolt, Kilovolt);

// ─────────────────────────────────────────────────────────────────────────────
// Charge
// ─────────────────────────────────────────────────────────────────────────────

/// Coulomb (`A·s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", dimension = ELECTRIC_CHARGE)]
pub struct Coulomb;
/// A quantity measured in coulombs.
pub type Coulombs<T = f64> = Quantity<Coulomb, T>;

prefixed_units! { Coulomb =>
    Femto: Femtocoulomb, Femtocoulombs;
    Pico: Picocoulomb, Picocoulombs;
    Nano: Nanocoulomb, Nanocoulombs;
    Micro: Microcoulomb, Microcoulombs;
    Milli: Millicoulomb, Millicoulombs;
    Kilo: Kilocoulomb, Kilocoulombs;
    Mega: Megacoulomb, Megacoulombs;
    Giga: Gigacoulomb, Gigacoulombs;
    Tera: Teracoulomb, Teracoulombs;
}

/// Ampere-hour (`3600 C`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ah", dimension = ELECTRIC_CHARGE, scale = RootRatio::integer(3_600))]
pub struct AmpereHour;
/// A quantity measured in ampere-hours.
pub type AmpereHours<T = f64> = Quantity<AmpereHour, T>;

prefixed_units! { AmpereHour =>
    Milli: MilliampereHour, MilliampereHours;
}

crate::impl_unit_conversions!(Coulomb, Microcoulomb, Millicoulomb, AmpereHour, MilliampereHour);

// ─────────────────────────────────────────────────────────────────────────────
// Resistance and conductance
// ─────────────────────────────────────────────────────────────────────────────

/// Ohm (`V/A`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ω", dimension = ELECTRICAL_RESISTANCE)]
pub struct Ohm;
/// A quantity measured in ohms.
pub type Ohms<T = f64> = Quantity<Ohm, T>;

prefixed_units! { Ohm =>
    Femto: Femtoohm, Femtoohms;
    Pico: Picoohm, Picoohms;
    Nano: Nanoohm, Nanoohms;
    Micro: Microohm, Microohms;
    Milli: Milliohm, Milliohms;
    Kilo: Kiloohm, Kiloohms;
    Mega: Megaohm, Megaohms;
    Giga: Gigaohm, Gigaohms;
    Tera: Teraohm, Teraohms;
}

crate::impl_unit_conversions!(Ohm, Milliohm, Kiloohm, Megaohm);

/// Siemens (`1/Ω`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "S", dimension = ELECTRICAL_CONDUCTANCE)]
pub struct Siemens;
/// A quantity measured in siemens.
pub type Conductance<T = f64> = Quantity<Siemens, T>;

prefixed_units! { Siemens =>
    Femto: Femtosiemens;
    Pico: Picosiemens;
    Nano: Nanosiemens;
    Micro: Microsiemens;
    Milli: Millisiemens;
    Kilo: Kilosiemens;
    Mega: Megasiemens;
    Giga: Gigasiemens;
    Tera: Terasiemens;
}

crate::impl_unit_conversions!(Siemens, Microsiemens, Millisiemens);

// ─────────────────────────────────────────────────────────────────────────────
// Capacitance and inductance
// ─────────────────────────────────────────────────────────────────────────────

/// Farad (`C/V`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "F", dimension = CAPACITANCE)]
pub struct Farad;
/// A quantity measured in farads.
pub type Farads<T = f64> = Quantity<Farad, T>;

prefixed_units! { Farad =>
    Femto: Femtofarad, Femtofarads;
    Pico: Picofarad, Picofarads;
    Nano: Nanofarad, Nanofarads;
    Micro: Microfarad, Microfarads;
    Milli: Millifarad, Millifarads;
    Kilo: Kilofarad, Kilofarads;
    Mega: Megafarad, Megafarads;
    Giga: Gigafarad, Gigafarads;
    Tera: Terafarad, Terafarads;
}

crate::impl_unit_conversions!(Farad, Picofarad, Nanofarad, Microfarad);

/// Henry (`Ω·s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "H", dimension = INDUCTANCE)]
pub struct Henry;
/// A quantity measured in henries.
pub type Henries<T = f64> = Quantity<Henry, T>;

prefixed_units! { Henry =>
    Femto: Femtohenry, Femtohenries;
    Pico: Picohenry, Picohenries;
    Nano: Nanohenry, Nanohenries;
    Micro: Microhenry, Microhenries;
    Milli: Millihenry, Millihenries;
    Kilo: Kilohenry, Kilohenries;
    Mega: Megahenry, Megahenries;
    Giga: Gigahenry, Gigahenries;
    Tera: Terahenry, Terahenries;
}

crate::impl_unit_conversions!(Henry, Nanohenry, Microhenry, Millihenry);

// ─────────────────────────────────────────────────────────────────────────────
// Magnetism
// ─────────────────────────────────────────────────────────────────────────────

/// Tesla (`V·s/m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "T", dimension = MAGNETIC_FLUX_DENSITY)]
pub struct Tesla;
/// A quantity measured in teslas.
pub type Teslas<T = f64> = Quantity<Tesla, T>;

prefixed_units! { Tesla =>
    Femto: Femtotesla, Femtoteslas;
    Pico: Picotesla, Picoteslas;
    Nano: Nanotesla, Nanoteslas;
    Micro: Microtesla, Microteslas;
    Milli: Millitesla, Milliteslas;
    Kilo: Kilotesla, Kiloteslas;
    Mega: Megatesla, Megateslas;
    Giga: Gigatesla, Gigateslas;
    Tera: Teratesla, Terateslas;
}

/// Gauss (`1e-4 T`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "G", dimension = MAGNETIC_FLUX_DENSITY, scale = RootRatio::ratio(1, 10_000))]
pub struct Gauss;

crate::impl_unit_conversions!(Tesla, Nanotesla, Microtesla, Millitesla, Gauss);

/// Weber (`T·m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Wb", dimension = MAGNETIC_FLUX)]
pub struct Weber;
/// A quantity measured in webers.
pub type Webers<T = f64> = Quantity<Weber, T>;

prefixed_units! { Weber =>
    Femto: Femtoweber, Femtowebers;
    Pico: Picoweber, Picowebers;
    Nano: Nanoweber, Nanowebers;
    Micro: Microweber, Microwebers;
    Milli: Milliweber, Milliwebers;
    Kilo: Kiloweber, Kilowebers;
    Mega: Megaweber, Megawebers;
    Giga: Gigaweber, Gigawebers;
    Tera: Teraweber, Terawebers;
}

// ─────────────────────────────────────────────────────────────────────────────
// Noise spectral densities
// ─────────────────────────────────────────────────────────────────────────────

/// Volts per root hertz.
pub type VoltPerRootHertz = Per<Volt, RootHertz>;
/// A voltage noise density in `V/√Hz`.
pub type VoltsPerRootHertz<T = f64> = Quantity<VoltPerRootHertz, T>;

/// Nanovolts per root hertz.
pub type NanovoltPerRootHertz = Per<Nanovolt, RootHertz>;
/// A voltage noise density in `nV/√Hz`.
pub type NanovoltsPerRootHertz<T = f64> = Quantity<NanovoltPerRootHertz, T>;

/// Amperes per root hertz.
pub type AmperePerRootHertz = Per<Ampere, RootHertz>;
/// A current noise density in `A/√Hz`.
pub type AmperesPerRootHertz<T = f64> = Quantity<AmperePerRootHertz, T>;

/// Nanoamperes per root hertz.
pub type NanoamperePerRootHertz = Per<Nanoampere, RootHertz>;
/// A current noise density in `nA/√Hz`.
pub type NanoamperesPerRootHertz<T = f64> = Quantity<NanoamperePerRootHertz, T>;

/// Picoamperes per root hertz.
pub type PicoamperePerRootHertz = Per<Picoampere, RootHertz>;
/// A current noise density in `pA/√Hz`.
pub type PicoamperesPerRootHertz<T = f64> = Quantity<PicoamperePerRootHertz, T>;
