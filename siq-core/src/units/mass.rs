//! Mass units.
//!
//! The coherent SI unit of mass is the kilogram, so the [`Gram`] carries the scale `1/1000` and
//! [`Kilogram`] is simply `Kilo<Gram>` with scale one.
//!
//! ```rust
//! use siq_core::units::mass::{Grams, Kilogram};
//!
//! let kg = Grams::new(1500.0).convert::<Kilogram>();
//! assert_eq!(kg.value(), 1.5);
//! ```

use crate::dimension::MASS;
use crate::macros::prefixed_units;
use crate::{Quantity, RootRatio};
use siq_derive::Unit;

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = MASS, scale = RootRatio::ratio(1, 1_000))]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams<T = f64> = Quantity<Gram, T>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

prefixed_units! { Gram =>
    Nano: Nanogram, Nanograms;
    Micro: Microgram, Micrograms;
    Milli: Milligram, Milligrams, MG;
    Kilo: Kilogram, Kilograms, KG;
}

/// Tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = MASS, scale = RootRatio::integer(1_000))]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes<T = f64> = Quantity<Tonne, T>;

prefixed_units! { Tonne =>
    Kilo: Kilotonne, Kilotonnes;
    Mega: Megatonne, Megatonnes;
    Giga: Gigatonne, Gigatonnes;
}

/// International avoirdupois pound (`0.45359237 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = MASS, scale = RootRatio::ratio(45_359_237, 100_000_000))]
pub struct Pound;
/// A quantity measured in pounds.
pub type Pounds<T = f64> = Quantity<Pound, T>;

/// Avoirdupois ounce (`1/16 lb`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", dimension = MASS, scale = RootRatio::ratio(45_359_237, 1_600_000_000))]
pub struct Ounce;
/// A quantity measured in ounces.
pub type Ounces<T = f64> = Quantity<Ounce, T>;

crate::impl_unit_conversions!(Gram, Milligram, Kilogram, Tonne, Pound, Ounce);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn kilogram_is_coherent() {
        assert!(Kilogram::SCALE.is_one());
        assert_eq!(Milligram::SCALE, RootRatio::ratio(1, 1_000_000));
        assert_eq!(Kilotonne::SCALE, RootRatio::integer(1_000_000));
    }

    #[test]
    fn pound_and_ounce() {
        assert_eq!(Pound::SCALE, Ounce::SCALE.multiply(RootRatio::integer(16)));
        let kg: Kilograms = Pounds::new(1.0).into();
        assert_relative_eq!(kg.value(), 0.453_592_37, max_relative = 1e-15);
        assert_eq!(Pounds::<i32>::new(2).convert::<Ounce>().value(), 32);
    }

    #[test]
    fn tonnes_to_kilograms() {
        let kg: Kilograms<i64> = Tonnes::<i64>::new(3).into();
        assert_eq!(kg.value(), 3_000);
        assert!(Megatonnes::new(1.0) > Kilotonnes::new(999.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Kilograms::new(70.0)), "70 kg");
        assert_eq!(format!("{}", Micrograms::new(5.0)), "5 µg");
    }

    proptest! {
        #[test]
        fn gram_kilogram_round_trip(v in -1e12f64..1e12) {
            let back = Grams::new(v).convert::<Kilogram>().convert::<Gram>();
            assert_relative_eq!(back.value(), v, max_relative = 1e-12, epsilon = 1e-9);
        }
    }
}
