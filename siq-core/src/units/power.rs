//! Power units.
//!
//! The coherent unit for this dimension is [`Watt`]. Besides the SI prefix ladder the module
//! carries a few widely used non-SI units with exact definitions and the nominal solar
//! luminosity (IAU 2015 Resolution B3).
//!
//! ```rust
//! use siq_core::units::power::{SolarLuminosities, Watt};
//!
//! let w = SolarLuminosities::new(1.0).convert::<Watt>();
//! assert_eq!(w.value(), 3.828e26);
//! ```

use crate::dimension::POWER;
use crate::macros::prefixed_units;
use crate::{Quantity, RootRatio};
use siq_derive::Unit;

/// Watt (`J/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", dimension = POWER)]
pub struct Watt;
/// A quantity measured in watts.
pub type Watts<T = f64> = Quantity<Watt, T>;
/// One watt.
pub const WATT: Watts = Watts::new(1.0);

prefixed_units! { Watt =>
    Femto: Femtowatt, Femtowatts;
    Pico: Picowatt, Picowatts;
    Nano: Nanowatt, Nanowatts;
    Micro: Microwatt, Microwatts;
    Milli: Milliwatt, Milliwatts, MILLIWATT;
    Kilo: Kilowatt, Kilowatts, KILOWATT;
    Mega: Megawatt, Megawatts;
    Giga: Gigawatt, Gigawatts;
    Tera: Terawatt, Terawatts;
}

/// Erg per second (`1e-7 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "erg/s", dimension = POWER, scale = RootRatio::ratio(1, 10_000_000))]
pub struct ErgPerSecond;
/// A quantity measured in ergs per second.
pub type ErgsPerSecond<T = f64> = Quantity<ErgPerSecond, T>;

/// Metric horsepower (`735.49875 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "PS", dimension = POWER, scale = RootRatio::ratio(73_549_875, 100_000))]
pub struct HorsepowerMetric;
/// A quantity measured in metric horsepower.
pub type HorsepowerMetrics<T = f64> = Quantity<HorsepowerMetric, T>;

/// Electrical horsepower (`746 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hp_e", dimension = POWER, scale = RootRatio::integer(746))]
pub struct HorsepowerElectric;
/// A quantity measured in electrical horsepower.
pub type HorsepowerElectrics<T = f64> = Quantity<HorsepowerElectric, T>;

/// Nominal solar luminosity (`3.828e26 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(
    symbol = "L☉",
    dimension = POWER,
    scale = RootRatio::integer(382_800_000_000_000_000_000_000_000)
)]
pub struct SolarLuminosity;
/// A quantity measured in solar luminosities.
pub type SolarLuminosities<T = f64> = Quantity<SolarLuminosity, T>;

crate::impl_unit_conversions!(
    Watt, Milliwatt, Kilowatt, Megawatt, ErgPerSecond, HorsepowerMetric, HorsepowerElectric,
    SolarLuminosity
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::energy::Joules;
    use crate::units::time::Seconds;
    use crate::Unit;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn energy_per_time() {
        let p = Joules::new(10.0) / Seconds::new(2.0);
        assert_eq!(p, Watts::new(5.0));
    }

    #[test]
    fn prefix_ladder() {
        assert_eq!(Terawatt::SCALE, RootRatio::integer(1_000_000_000_000));
        assert_eq!(Femtowatt::SCALE, RootRatio::ratio(1, 1_000_000_000_000_000));
        let w: Watts<i64> = Megawatts::<i64>::new(3).into();
        assert_eq!(w.value(), 3_000_000);
    }

    #[test]
    fn non_si_units() {
        let w: Watts = HorsepowerMetrics::new(1.0).into();
        assert_relative_eq!(w.value(), 735.498_75, max_relative = 1e-15);
        assert_eq!(HorsepowerElectrics::<i32>::new(2).convert::<Watt>().value(), 1_492);
        assert_eq!(ErgsPerSecond::new(1e7), Watts::new(1.0));
    }

    #[test]
    fn solar_luminosity() {
        let sol: SolarLuminosities = Watts::new(3.828e26).into();
        assert_relative_eq!(sol.value(), 1.0, max_relative = 1e-15);
        assert!(SolarLuminosities::new(1.0) > Quantity::<Terawatt>::new(1e12));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Kilowatts::new(1.5)), "1.5 kW");
        assert_eq!(format!("{}", SolarLuminosities::new(2.0)), "2 L☉");
    }

    proptest! {
        #[test]
        fn watt_kilowatt_round_trip(v in -1e15f64..1e15) {
            let back = Watts::new(v).convert::<Kilowatt>().convert::<Watt>();
            assert_relative_eq!(back.value(), v, max_relative = 1e-12, epsilon = 1e-9);
        }
    }
}
