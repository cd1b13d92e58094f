//! Plane and solid angle units.
//!
//! [`Radian`] is the coherent unit for plane angles and [`Steradian`] for solid angles. Both are
//! base dimensions of the catalog, so angles never mix silently with plain numbers.
//!
//! Degree-based units use the rational approximation [`PI_RATIO`] of π. It is accurate to better
//! than `1e-19`, well below `f64` resolution, while keeping every angular scale an exact ratio.
//!
//! ```rust
//! use siq_core::units::angle::{Degrees, Radian};
//!
//! let right = Degrees::new(90.0).convert::<Radian>();
//! assert!((right.value() - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use crate::dimension::{PLANAR_ANGLE, SOLID_ANGLE};
use crate::macros::prefixed_units;
use crate::units::time::{Minute, Second};
use crate::{Per, Quantity, RootRatio};
use siq_derive::Unit;

/// `21053343141 / 6701487259`, a rational approximation of π.
pub const PI_RATIO: RootRatio = RootRatio::ratio(21_053_343_141, 6_701_487_259);

// ─────────────────────────────────────────────────────────────────────────────
// Plane angle
// ─────────────────────────────────────────────────────────────────────────────

/// Radian (coherent unit of plane angle).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", dimension = PLANAR_ANGLE)]
pub struct Radian;
/// A quantity measured in radians.
pub type Radians<T = f64> = Quantity<Radian, T>;
/// One radian.
pub const RAD: Radians = Radians::new(1.0);

prefixed_units! { Radian =>
    Nano: Nanoradian, Nanoradians;
    Micro: Microradian, Microradians;
    Milli: Milliradian, Milliradians, MRAD;
}

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°", dimension = PLANAR_ANGLE, scale = PI_RATIO.divide(RootRatio::integer(180)))]
pub struct Degree;
/// A quantity measured in degrees.
pub type Degrees<T = f64> = Quantity<Degree, T>;
/// One degree.
pub const DEG: Degrees = Degrees::new(1.0);

/// Minute of arc (`1/60 °`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "′", dimension = PLANAR_ANGLE, scale = PI_RATIO.divide(RootRatio::integer(10_800)))]
pub struct Arcminute;
/// A quantity measured in minutes of arc.
pub type Arcminutes<T = f64> = Quantity<Arcminute, T>;

/// Second of arc (`1/3600 °`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "″", dimension = PLANAR_ANGLE, scale = PI_RATIO.divide(RootRatio::integer(648_000)))]
pub struct Arcsecond;
/// A quantity measured in seconds of arc.
pub type Arcseconds<T = f64> = Quantity<Arcsecond, T>;

/// Gradian (`π/200 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "gon", dimension = PLANAR_ANGLE, scale = PI_RATIO.divide(RootRatio::integer(200)))]
pub struct Gradian;
/// A quantity measured in gradians.
pub type Gradians<T = f64> = Quantity<Gradian, T>;

/// Full turn (`2π rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "tr", dimension = PLANAR_ANGLE, scale = PI_RATIO.multiply(RootRatio::integer(2)))]
pub struct Turn;
/// A quantity measured in turns.
pub type Turns<T = f64> = Quantity<Turn, T>;

crate::impl_unit_conversions!(Radian, Milliradian, Degree, Arcminute, Arcsecond, Gradian, Turn);

// ─────────────────────────────────────────────────────────────────────────────
// Solid angle
// ─────────────────────────────────────────────────────────────────────────────

/// Steradian (coherent unit of solid angle).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "sr", dimension = SOLID_ANGLE)]
pub struct Steradian;
/// A quantity measured in steradians.
pub type Steradians<T = f64> = Quantity<Steradian, T>;

// ─────────────────────────────────────────────────────────────────────────────
// Angular velocity
// ─────────────────────────────────────────────────────────────────────────────

/// Radians per second.
pub type RadianPerSecond = Per<Radian, Second>;
/// An angular velocity in radians per second.
pub type RadiansPerSecond<T = f64> = Quantity<RadianPerSecond, T>;

/// Degrees per second.
pub type DegreePerSecond = Per<Degree, Second>;
/// An angular velocity in degrees per second.
pub type DegreesPerSecond<T = f64> = Quantity<DegreePerSecond, T>;

/// Revolutions per minute.
pub type RevolutionPerMinute = Per<Turn, Minute>;
/// An angular velocity in revolutions per minute.
pub type RevolutionsPerMinute<T = f64> = Quantity<RevolutionPerMinute, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::ANGULAR_VELOCITY;
    use crate::Unit;
    use approx::assert_relative_eq;
    use core::f64::consts::PI;
    use proptest::prelude::*;

    #[test]
    fn pi_ratio_matches_f64_pi() {
        assert_relative_eq!(PI_RATIO.to_f64(), PI, max_relative = 1e-16);
    }

    #[test]
    fn degree_scale_is_reduced() {
        assert_eq!(Degree::SCALE, RootRatio::ratio(2_339_260_349, 134_029_745_180));
        assert_eq!(Arcsecond::SCALE.multiply(RootRatio::integer(3_600)), Degree::SCALE);
    }

    #[test]
    fn half_turn_is_pi_radians() {
        let r = Turns::new(0.5).convert::<Radian>();
        assert_relative_eq!(r.value(), PI, max_relative = 1e-15);
        let d: Degrees = Radians::new(PI).into();
        assert_relative_eq!(d.value(), 180.0, max_relative = 1e-15);
    }

    #[test]
    fn arcminutes_and_arcseconds() {
        let d: Degrees = Arcminutes::new(90.0).into();
        assert_relative_eq!(d.value(), 1.5, max_relative = 1e-15);
        assert_eq!(Arcminutes::<i64>::new(2).convert::<Arcsecond>().value(), 120);
    }

    #[test]
    fn angular_velocity() {
        assert_eq!(RevolutionPerMinute::DIM, ANGULAR_VELOCITY);
        let w: RadiansPerSecond = RevolutionsPerMinute::new(60.0).cast();
        assert_relative_eq!(w.value(), 2.0 * PI, max_relative = 1e-15);
        let w = Degrees::new(90.0) / crate::units::time::Seconds::new(2.0);
        assert_eq!(format!("{}", w), "45 °/s");
    }

    #[test]
    fn plane_and_solid_angles_differ() {
        assert_ne!(Radian::DIM, Steradian::DIM);
    }

    proptest! {
        #[test]
        fn degree_radian_round_trip(v in -1e6f64..1e6) {
            let back = Degrees::new(v).convert::<Radian>().convert::<Degree>();
            assert_relative_eq!(back.value(), v, max_relative = 1e-12, epsilon = 1e-9);
        }
    }
}
