//! Force and momentum units.

use crate::dimension::FORCE;
use crate::macros::prefixed_units;
use crate::units::length::Meter;
use crate::units::time::Second;
use crate::{Prod, Quantity, RootRatio};
use siq_derive::Unit;

/// Newton (`kg·m/s²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", dimension = FORCE)]
pub struct Newton;
/// A quantity measured in newtons.
pub type Newtons<T = f64> = Quantity<Newton, T>;
/// One newton.
pub const N: Newtons = Newtons::new(1.0);

prefixed_units! { Newton =>
    Femto: Femtonewton, Femtonewtons;
    Pico: Piconewton, Piconewtons;
    Nano: Nanonewton, Nanonewtons;
    Micro: Micronewton, Micronewtons;
    Milli: Millinewton, Millinewtons;
    Kilo: Kilonewton, Kilonewtons, KN;
    Mega: Meganewton, Meganewtons;
    Giga: Giganewton, Giganewtons;
    Tera: Teranewton, Teranewtons;
}

/// Dyne (`1e-5 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dyn", dimension = FORCE, scale = RootRatio::ratio(1, 100_000))]
pub struct Dyne;
/// A quantity measured in dynes.
pub type Dynes<T = f64> = Quantity<Dyne, T>;

/// Kilogram-force (`9.80665 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kgf", dimension = FORCE, scale = RootRatio::ratio(980_665, 100_000))]
pub struct KilogramForce;
/// A quantity measured in kilograms-force.
pub type KilogramsForce<T = f64> = Quantity<KilogramForce, T>;

/// Pound-force (`4.4482216152605 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "lbf",
    dimension = FORCE,
    scale = RootRatio::ratio(44_482_216_152_605, 10_000_000_000_000)
)]
pub struct PoundForce;
/// A quantity measured in pounds-force.
pub type PoundsForce<T = f64> = Quantity<PoundForce, T>;

crate::impl_unit_conversions!(Newton, Millinewton, Kilonewton, Dyne, KilogramForce, PoundForce);

/// Newton second, the coherent unit of momentum and impulse.
pub type NewtonSecond = Prod<Newton, Second>;
/// A momentum in newton seconds.
pub type NewtonSeconds<T = f64> = Quantity<NewtonSecond, T>;

/// Newton metre, the unit of torque.
pub type NewtonMeter = Prod<Newton, Meter>;
/// A torque in newton metres.
pub type NewtonMeters<T = f64> = Quantity<NewtonMeter, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::MOMENTUM;
    use crate::units::mass::Kilograms;
    use crate::units::velocity::{MetersPerSecond, MetersPerSecondSquared};
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn mass_times_acceleration() {
        let f = Kilograms::new(2.0) * MetersPerSecondSquared::new(3.0);
        assert_eq!(f, Newtons::new(6.0));
        let f: Newtons = f.cast();
        assert_eq!(f.value(), 6.0);
    }

    #[test]
    fn momentum() {
        assert_eq!(NewtonSecond::DIM, MOMENTUM);
        let p = Kilograms::new(2.0) * MetersPerSecond::new(3.0);
        assert_eq!(p, NewtonSeconds::new(6.0));
    }

    #[test]
    fn non_si_units() {
        assert_eq!(Dynes::new(100_000.0), Newtons::new(1.0));
        let n: Newtons = KilogramsForce::new(1.0).into();
        assert_relative_eq!(n.value(), 9.806_65, max_relative = 1e-15);
        let n: Newtons = PoundsForce::new(1.0).into();
        assert_relative_eq!(n.value(), 4.448_221_615_260_5, max_relative = 1e-15);
    }

    #[test]
    fn integer_kilonewtons() {
        let n: Newtons<i64> = Kilonewtons::<i64>::new(12).into();
        assert_eq!(n.value(), 12_000);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Kilonewtons::new(3.5)), "3.5 kN");
        assert_eq!(format!("{}", NewtonMeters::new(40.0)), "40 N·m");
    }
}
