//! Dimensionless ratio units.
//!
//! [`Unitless`](crate::Unitless) is the scale-one dimensionless unit. The units below are scaled
//! versions of it, so a ratio of two lengths can be read as a percentage:
//!
//! ```rust
//! use siq_core::units::length::{Kilometers, Meters};
//! use siq_core::units::unitless::Percents;
//!
//! let grade: Percents = (Meters::new(30.0) / Kilometers::new(1.0)).cast();
//! assert!((grade.value() - 3.0).abs() < 1e-12);
//! ```

use crate::dimension::DIMENSIONLESS;
use crate::{Quantity, RootRatio, Unitless};
use siq_derive::Unit;

/// Percent (`1/100`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = DIMENSIONLESS, scale = RootRatio::ratio(1, 100))]
pub struct Percent;
/// A quantity measured in percent.
pub type Percents<T = f64> = Quantity<Percent, T>;

/// Per mille (`1/1000`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "‰", dimension = DIMENSIONLESS, scale = RootRatio::ratio(1, 1_000))]
pub struct Permille;
/// A quantity measured in per mille.
pub type Permilles<T = f64> = Quantity<Permille, T>;

/// Parts per million (`1e-6`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppm", dimension = DIMENSIONLESS, scale = RootRatio::ratio(1, 1_000_000))]
pub struct PartsPerMillion;
/// A quantity measured in parts per million.
pub type Ppm<T = f64> = Quantity<PartsPerMillion, T>;

/// Parts per billion (`1e-9`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppb", dimension = DIMENSIONLESS, scale = RootRatio::ratio(1, 1_000_000_000))]
pub struct PartsPerBillion;
/// A quantity measured in parts per billion.
pub type Ppb<T = f64> = Quantity<PartsPerBillion, T>;

crate::impl_unit_conversions!(Unitless, Percent, Permille, PartsPerMillion, PartsPerBillion);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometers, Meters};
    use crate::{Simplify, Unit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn unitless_basics() {
        let u: Quantity<Unitless> = 1.5.into();
        assert_eq!(u.value(), 1.5);
        assert_eq!(format!("{}", u), "1.5");
        assert!(Unitless::SCALE.is_one());
        assert_eq!(Unitless::SYMBOL, "");
    }

    #[test]
    fn unitless_arithmetic() {
        let a: Quantity<Unitless> = Quantity::new(3.0);
        let b: Quantity<Unitless> = Quantity::new(4.0);
        assert_eq!((a + b).value(), 7.0);
        assert_eq!((a - b).value(), -1.0);
        assert_eq!((a * 4.0).value(), 12.0);
    }

    #[test]
    fn same_unit_ratio_simplifies() {
        let r: Quantity<Unitless> = (Meters::new(3.0) / Meters::new(4.0)).simplify();
        assert_eq!(r.value(), 0.75);
        let p: Percents = r.into();
        assert_relative_eq!(p.value(), 75.0, max_relative = 1e-15);
    }

    #[test]
    fn mixed_unit_ratio_is_dimensionless() {
        let r = Meters::new(1.0) / Kilometers::new(2.0);
        let p: Percents = r.cast();
        assert_relative_eq!(p.value(), 0.05, max_relative = 1e-15);
        assert!(r < Quantity::<Unitless>::new(0.001));
    }

    #[test]
    fn integer_ratios() {
        let ppm: Ppm<i64> = Percents::<i64>::new(3).into();
        assert_eq!(ppm.value(), 30_000);
        let pm: Permilles<i64> = Ppb::<i64>::new(2_500_000).cast();
        assert_eq!(pm.value(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Percents::new(12.5)), "12.5 %");
        assert_eq!(format!("{}", Ppm::<u32>::new(400)), "400 ppm");
    }

    proptest! {
        #[test]
        fn percent_round_trip(v in -1e9f64..1e9) {
            let p: Percents = Quantity::<Unitless>::new(v).into();
            let back: Quantity<Unitless> = p.into();
            assert_relative_eq!(back.value(), v, max_relative = 1e-12, epsilon = 1e-12);
        }
    }
}
