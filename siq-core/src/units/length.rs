//! Length units.
//!
//! The coherent unit for this dimension is [`Meter`] (`Meter::SCALE == 1`). Every other length
//! unit carries an exact rational scale relative to the metre.
//!
//! This module provides:
//!
//! - **SI ladder**: the metre with prefixes from femto- to tera-, built from the generic prefix
//!   wrappers ([`Kilo<Meter>`](crate::Kilo) and friends).
//! - **Common defined units**: ångström, inch, foot, yard, (statute) mile, nautical mile.
//! - **Astronomy**: astronomical unit (au), light-year (ly), parsec (pc).
//!
//! Notes on definitions used here:
//!
//! - The **international inch** is exactly `0.0254 m`; foot, yard and mile follow from it.
//! - The **astronomical unit** is exactly `149_597_870_700 m` (IAU 2012).
//! - The **light-year** is `c · 365.25 d` with `c = 299_792_458 m/s`, exactly `9_460_730_472_580_800 m`.
//! - The **parsec** is `au · 648000 / π`, with π taken as the rational approximation used for angles
//!   (see [`crate::units::angle::PI_RATIO`]).
//!
//! ```rust
//! use siq_core::units::length::{AstronomicalUnits, Kilometer};
//!
//! let au = AstronomicalUnits::new(1.0);
//! let km = au.convert::<Kilometer>();
//! assert_eq!(km.value(), 149_597_870.7);
//! ```

use crate::dimension::LENGTH;
use crate::macros::prefixed_units;
use crate::units::angle::PI_RATIO;
use crate::{Quantity, RootRatio};
use siq_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// SI base unit and prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = LENGTH)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters<T = f64> = Quantity<Meter, T>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

prefixed_units! { Meter =>
    Femto: Femtometer, Femtometers, FM;
    Pico: Picometer, Picometers, PM;
    Nano: Nanometer, Nanometers, NM;
    Micro: Micrometer, Micrometers, UM;
    Milli: Millimeter, Millimeters, MM;
    Centi: Centimeter, Centimeters, CM;
    Deci: Decimeter, Decimeters, DM;
    Kilo: Kilometer, Kilometers, KM;
    Mega: Megameter, Megameters, MEGAMETER;
    Giga: Gigameter, Gigameters, GIGAMETER;
    Tera: Terameter, Terameters, TERAMETER;
}

/// Type alias shorthand for [`Kilometer`].
pub type Km = Kilometer;

// ─────────────────────────────────────────────────────────────────────────────
// Defined units
// ─────────────────────────────────────────────────────────────────────────────

/// Ångström (`1e-10 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Å", dimension = LENGTH, scale = RootRatio::ratio(1, 10_000_000_000))]
pub struct Angstrom;
/// A quantity measured in ångströms.
pub type Angstroms<T = f64> = Quantity<Angstrom, T>;

/// International inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = LENGTH, scale = RootRatio::ratio(254, 10_000))]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches<T = f64> = Quantity<Inch, T>;

/// International foot (`12 in`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = LENGTH, scale = RootRatio::ratio(3_048, 10_000))]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet<T = f64> = Quantity<Foot, T>;

/// International yard (`3 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = LENGTH, scale = RootRatio::ratio(9_144, 10_000))]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards<T = f64> = Quantity<Yard, T>;

/// Statute mile (`1760 yd`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = LENGTH, scale = RootRatio::ratio(1_609_344, 1_000))]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles<T = f64> = Quantity<Mile, T>;

/// International nautical mile (`1852 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "NM", dimension = LENGTH, scale = RootRatio::integer(1_852))]
pub struct NauticalMile;
/// A quantity measured in nautical miles.
pub type NauticalMiles<T = f64> = Quantity<NauticalMile, T>;

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit (`149_597_870_700 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "au", dimension = LENGTH, scale = RootRatio::integer(149_597_870_700))]
pub struct AstronomicalUnit;
/// Type alias shorthand for [`AstronomicalUnit`].
pub type Au = AstronomicalUnit;
/// A quantity measured in astronomical units.
pub type AstronomicalUnits<T = f64> = Quantity<Au, T>;
/// One astronomical unit.
pub const AU: AstronomicalUnits = AstronomicalUnits::new(1.0);

/// Light-year (`c` times one Julian year).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ly", dimension = LENGTH, scale = RootRatio::integer(9_460_730_472_580_800))]
pub struct LightYear;
/// A quantity measured in light-years.
pub type LightYears<T = f64> = Quantity<LightYear, T>;

/// Parsec (`au · 648000 / π`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "pc",
    dimension = LENGTH,
    scale = RootRatio::integer(149_597_870_700 * 648_000).divide(PI_RATIO)
)]
pub struct Parsec;
/// A quantity measured in parsecs.
pub type Parsecs<T = f64> = Quantity<Parsec, T>;

crate::impl_unit_conversions!(
    Meter, Millimeter, Centimeter, Kilometer, Inch, Foot, Yard, Mile, NauticalMile
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Scales
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn prefixed_scales_are_exact() {
        assert_eq!(Kilometer::SCALE, RootRatio::integer(1_000));
        assert_eq!(Millimeter::SCALE, RootRatio::ratio(1, 1_000));
        assert_eq!(Femtometer::SCALE, RootRatio::ratio(1, 1_000_000_000_000_000));
        assert_eq!(Terameter::SCALE, RootRatio::integer(1_000_000_000_000));
    }

    #[test]
    fn imperial_units_chain() {
        assert_eq!(Foot::SCALE, Inch::SCALE.multiply(RootRatio::integer(12)));
        assert_eq!(Yard::SCALE, Foot::SCALE.multiply(RootRatio::integer(3)));
        assert_eq!(Mile::SCALE, Yard::SCALE.multiply(RootRatio::integer(1_760)));
    }

    #[test]
    fn parsec_is_about_three_light_years() {
        assert_relative_eq!(Parsec::SCALE.to_f64(), 3.085_677_581_491_367e16, max_relative = 1e-12);
        let pc = Parsecs::new(1.0).convert::<LightYear>();
        assert_relative_eq!(pc.value(), 3.261_563_777, max_relative = 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometer_to_meter() {
        let m = Kilometers::new(1.0).convert::<Meter>();
        assert_abs_diff_eq!(m.value(), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn inches_to_centimeters() {
        let cm: Centimeters = Inches::new(1.0).into();
        assert_relative_eq!(cm.value(), 2.54, max_relative = 1e-12);
    }

    #[test]
    fn integer_feet_to_inches_is_exact() {
        // 3048/10000 over 254/10000 is exactly 12.
        let inches = Feet::<i32>::new(3).convert::<Inch>();
        assert_eq!(inches.value(), 36);
        assert_eq!(Feet::<i32>::new(1), Inches::<i32>::new(12));
    }

    #[test]
    fn mixed_imperial_sum_lands_in_common_unit() {
        let sum = Feet::<i32>::new(1) + Inches::<i32>::new(3);
        assert_eq!(sum, Inches::<i32>::new(15));
    }

    #[test]
    fn light_year_to_kilometers() {
        let km = LightYears::new(1.0).convert::<Kilometer>();
        assert_relative_eq!(km.value(), 9_460_730_472_580.8, max_relative = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Meters::new(1.5)), "1.5 m");
        assert_eq!(format!("{:.1}", Kilometers::new(2.26)), "2.3 km");
        assert_eq!(format!("{}", Micrometers::<i32>::new(3)), "3 µm");
        assert_eq!(format!("{}", Angstroms::new(1.0)), "1 Å");
    }

    proptest! {
        #[test]
        fn meter_kilometer_round_trip(v in -1e12f64..1e12) {
            let back = Meters::new(v).convert::<Kilometer>().convert::<Meter>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn miles_never_shorter_than_yards(v in 0.0f64..1e6) {
            prop_assert!(Miles::new(v) >= Yards::new(v));
        }
    }
}
