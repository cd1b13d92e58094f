//! Time units.
//!
//! The coherent unit for this dimension is [`Second`] (`Second::SCALE == 1`). All other time units
//! are exact integer or decimal multiples of the second.
//!
//! ## Conventions
//!
//! - Civil units use the conventional mapping `1 day = 86_400 s` (leap seconds ignored).
//! - The [`JulianYear`] is `365.25 d`, the year used by the light-year.
//!
//! ```rust
//! use siq_core::units::time::{Hours, Minute, Second};
//!
//! let half_hour = Hours::new(0.5);
//! assert_eq!(half_hour.convert::<Second>().value(), 1800.0);
//! assert_eq!(half_hour.convert::<Minute>().value(), 30.0);
//! ```

use crate::dimension::TIME;
use crate::macros::prefixed_units;
use crate::{Quantity, RootRatio};
use siq_derive::Unit;

/// Seconds per day, the civil mapping used by this module.
pub const SECONDS_PER_DAY: u128 = 86_400;

// ─────────────────────────────────────────────────────────────────────────────
// SI base unit and submultiples
// ─────────────────────────────────────────────────────────────────────────────

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = TIME)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds<T = f64> = Quantity<Second, T>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

prefixed_units! { Second =>
    Femto: Femtosecond, Femtoseconds, FEMTOSEC;
    Pico: Picosecond, Picoseconds, PICOSEC;
    Nano: Nanosecond, Nanoseconds, NANOSEC;
    Micro: Microsecond, Microseconds, MICROSEC;
    Milli: Millisecond, Milliseconds, MILLISEC;
}

// ─────────────────────────────────────────────────────────────────────────────
// Civil units
// ─────────────────────────────────────────────────────────────────────────────

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = TIME, scale = RootRatio::integer(60))]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes<T = f64> = Quantity<Minute, T>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = TIME, scale = RootRatio::integer(3_600))]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours<T = f64> = Quantity<Hour, T>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Day (`86_400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = TIME, scale = RootRatio::integer(SECONDS_PER_DAY))]
pub struct Day;
/// A quantity measured in days.
pub type Days<T = f64> = Quantity<Day, T>;
/// One day.
pub const DAY: Days = Days::new(1.0);

/// Week (`7 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wk", dimension = TIME, scale = RootRatio::integer(7 * SECONDS_PER_DAY))]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks<T = f64> = Quantity<Week, T>;

/// Julian year (`365.25 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a", dimension = TIME, scale = RootRatio::integer(36_525 * SECONDS_PER_DAY / 100))]
pub struct JulianYear;
/// A quantity measured in Julian years.
pub type JulianYears<T = f64> = Quantity<JulianYear, T>;

crate::impl_unit_conversions!(
    Second, Millisecond, Microsecond, Nanosecond, Minute, Hour, Day, Week
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{LightYear, Meter};
    use crate::{Per, Unit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn civil_scales() {
        assert_eq!(Hour::SCALE, Minute::SCALE.multiply(RootRatio::integer(60)));
        assert_eq!(Week::SCALE, RootRatio::integer(604_800));
        assert_eq!(JulianYear::SCALE, RootRatio::integer(31_557_600));
    }

    #[test]
    fn integer_hours_to_seconds() {
        let s = Hours::<i64>::new(2).convert::<Second>();
        assert_eq!(s.value(), 7_200);
        let s: Seconds<i64> = Days::<i64>::new(1).into();
        assert_eq!(s.value(), 86_400);
    }

    #[test]
    fn explicit_cast_from_finer_unit_truncates() {
        let h: Hours<i32> = Minutes::<i32>::new(119).cast();
        assert_eq!(h.value(), 1);
        let h: Hours<i32> = Minutes::<i32>::new(-119).cast();
        assert_eq!(h.value(), -1);
    }

    #[test]
    fn light_year_is_speed_of_light_times_julian_year() {
        type MetersPerSecond = Per<Meter, Second>;
        let c = Quantity::<MetersPerSecond>::new(299_792_458.0);
        let ly = c * JulianYears::new(1.0);
        assert_eq!(ly, Quantity::<LightYear>::new(1.0));
    }

    #[test]
    fn minutes_plus_seconds() {
        let t = Minutes::new(1.0) + Seconds::new(30.0);
        assert_eq!(t.value(), 90.0);
        assert_eq!(format!("{}", t), "90 s");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Hours::new(1.5)), "1.5 h");
        assert_eq!(format!("{}", Microseconds::<u32>::new(7)), "7 µs");
    }

    proptest! {
        #[test]
        fn hour_minute_round_trip(v in -1e9f64..1e9) {
            let back = Hours::new(v).convert::<Minute>().convert::<Hour>();
            assert_relative_eq!(back.value(), v, max_relative = 1e-12, epsilon = 1e-12);
        }

        #[test]
        fn integer_seconds_round_trip_through_milliseconds(v in -1_000_000_000i64..1_000_000_000) {
            let ms: Milliseconds<i64> = Seconds::<i64>::new(v).into();
            let back: Seconds<i64> = ms.cast();
            prop_assert_eq!(back.value(), v);
        }
    }
}
