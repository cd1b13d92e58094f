//! Chemical units: molar energy, catalytic activity and molar concentration.

use crate::dimension::{CATALYTIC_ACTIVITY, MOLAR_CONCENTRATION};
use crate::macros::prefixed_units;
use crate::units::amount::Mole;
use crate::units::energy::{Joule, Kilojoule};
use crate::units::volume::CubicMeter;
use crate::{Per, Quantity, RootRatio};
use siq_derive::Unit;

/// Joules per mole.
pub type JoulePerMole = Per<Joule, Mole>;
/// A chemical potential in joules per mole.
pub type JoulesPerMole<T = f64> = Quantity<JoulePerMole, T>;

/// Kilojoules per mole.
pub type KilojoulePerMole = Per<Kilojoule, Mole>;
/// A chemical potential in kilojoules per mole.
pub type KilojoulesPerMole<T = f64> = Quantity<KilojoulePerMole, T>;

/// Katal (`mol/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kat", dimension = CATALYTIC_ACTIVITY)]
pub struct Katal;
/// A quantity measured in katals.
pub type Katals<T = f64> = Quantity<Katal, T>;

prefixed_units! { Katal =>
    Femto: Femtokatal, Femtokatals;
    Pico: Picokatal, Picokatals;
    Nano: Nanokatal, Nanokatals;
    Micro: Microkatal, Microkatals;
    Milli: Millikatal, Millikatals;
}

/// Enzyme unit (`1 µmol/min`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "U", dimension = CATALYTIC_ACTIVITY, scale = RootRatio::ratio(1, 60_000_000))]
pub struct EnzymeUnit;
/// A quantity measured in enzyme units.
pub type EnzymeUnits<T = f64> = Quantity<EnzymeUnit, T>;

crate::impl_unit_conversions!(Katal, Nanokatal, Microkatal, Millikatal, EnzymeUnit);

/// Moles per cubic metre.
pub type MolePerCubicMeter = Per<Mole, CubicMeter>;
/// A concentration in moles per cubic metre.
pub type MolesPerCubicMeter<T = f64> = Quantity<MolePerCubicMeter, T>;

/// Molar (`1 mol/L`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "M", dimension = MOLAR_CONCENTRATION, scale = RootRatio::integer(1_000))]
pub struct Molar;
/// A concentration in moles per litre.
pub type Molarity<T = f64> = Quantity<Molar, T>;

prefixed_units! { Molar =>
    Milli: Millimolar;
    Micro: Micromolar;
    Nano: Nanomolar;
    Pico: Picomolar;
}

crate::impl_unit_conversions!(Molar, Millimolar, Micromolar, Nanomolar);
