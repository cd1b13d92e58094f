//! Floating point maths on quantities.
//!
//! Roots and powers change the unit as well as the value: `sqrt` of a quantity in `U` is a
//! quantity in [`Root<U, 2>`](crate::Root), whose dimension and scale are the exact square roots of `U`'s.
//! Everything here needs a floating point representation ([`FloatRepr`]).
//!
//! ```rust
//! use siq_core::units::area::SquareMeters;
//! use siq_core::units::length::Meters;
//!
//! let side = SquareMeters::new(16.0).sqrt();
//! assert_eq!(side, Meters::new(4.0));
//! ```
//!
//! Trigonometric functions only exist for plane angles:
//!
//! ```rust,compile_fail
//! use siq_core::units::length::Meters;
//!
//! let _ = Meters::new(1.0).sin();
//! ```

use crate::dimension::PLANAR_ANGLE;
use crate::units::angle::{Radian, Radians, Turn};
use crate::{FloatRepr, Pow, Quantity, Root, Unit};
use core::marker::PhantomData;

struct PlaneAngle<U>(PhantomData<U>);

impl<U: Unit> PlaneAngle<U> {
    const CHECK: () = assert!(
        U::DIM.const_eq(&PLANAR_ANGLE),
        "dimension mismatch: trigonometric functions take a plane angle"
    );
}

impl<U: Unit, T: FloatRepr> Quantity<U, T> {
    /// Square root; the unit becomes `Root<U, 2>`.
    #[inline]
    pub fn sqrt(self) -> Quantity<Root<U, 2>, T> {
        Quantity::new(self.value().sqrt())
    }

    /// Cube root; the unit becomes `Root<U, 3>`.
    #[inline]
    pub fn cbrt(self) -> Quantity<Root<U, 3>, T> {
        Quantity::new(self.value().cbrt())
    }

    /// `R`-th root; the unit becomes `Root<U, R>`.
    ///
    /// ```rust
    /// use siq_core::units::length::{Meter, Meters};
    /// use siq_core::{Pow, Quantity};
    ///
    /// let q = Quantity::<Pow<Meter, 4>>::new(81.0).root::<4>();
    /// assert!((q.value() - 3.0).abs() < 1e-12);
    /// assert_eq!(q, Meters::new(q.value()));
    /// ```
    #[inline]
    pub fn root<const R: u32>(self) -> Quantity<Root<U, R>, T> {
        let v = self.value();
        let r = match R {
            1 => v,
            2 => v.sqrt(),
            3 => v.cbrt(),
            _ => v.powf(T::ONE / T::from_f64(R as f64)),
        };
        Quantity::new(r)
    }

    /// Integer power; the unit becomes `Pow<U, K>`.
    ///
    /// ```rust
    /// use siq_core::units::area::SquareMeters;
    /// use siq_core::units::length::Meters;
    ///
    /// assert_eq!(Meters::new(3.0).powi::<2>(), SquareMeters::new(9.0));
    /// ```
    #[inline]
    pub fn powi<const K: i32>(self) -> Quantity<Pow<U, K>, T> {
        Quantity::new(self.value().powf(T::from_f64(K as f64)))
    }

    /// `sqrt(self² + other²)` without undue overflow.
    #[inline]
    pub fn hypot(self, other: Self) -> Self {
        Self::new(self.value().hypot(other.value()))
    }

    /// Fused `self * a + b`.
    #[inline]
    pub fn mul_add(self, a: T, b: Self) -> Self {
        Self::new(self.value().mul_add(a, b.value()))
    }

    /// Largest whole number of units not above `self`.
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(self.value().floor())
    }

    /// Smallest whole number of units not below `self`.
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.value().ceil())
    }

    /// Nearest whole number of units, ties away from zero.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.value().round())
    }

    /// Whole part.
    #[inline]
    pub fn trunc(self) -> Self {
        Self::new(self.value().trunc())
    }

    /// Positive difference: `self - other` when positive, zero otherwise.
    #[inline]
    pub fn fdim(self, other: Self) -> Self {
        let d = self.value() - other.value();
        if d > T::ZERO || d.is_nan() {
            Self::new(d)
        } else {
            Self::ZERO
        }
    }

    /// `true` for NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.value().is_nan()
    }

    /// `true` for ±∞.
    #[inline]
    pub fn is_infinite(self) -> bool {
        self.value().is_infinite()
    }

    /// `true` when neither NaN nor infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value().is_finite()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Plane angles
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    fn radians(self) -> T {
        let () = PlaneAngle::<U>::CHECK;
        self.cast::<Radians<T>>().value()
    }

    /// Sine of a plane angle.
    ///
    /// ```rust
    /// use siq_core::units::angle::Degrees;
    /// assert!((Degrees::<f64>::new(30.0).sin() - 0.5).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn sin(self) -> T {
        self.radians().sin()
    }

    /// Cosine of a plane angle.
    #[inline]
    pub fn cos(self) -> T {
        self.radians().cos()
    }

    /// Tangent of a plane angle.
    #[inline]
    pub fn tan(self) -> T {
        self.radians().tan()
    }

    /// One full turn expressed in `U`.
    #[inline]
    fn full_turn() -> T {
        let () = PlaneAngle::<U>::CHECK;
        Quantity::<Turn, T>::new(T::ONE).cast::<Self>().value()
    }

    /// Wraps a plane angle into `[0, 1 turn)`.
    ///
    /// ```rust
    /// use siq_core::units::angle::Degrees;
    /// assert_eq!(Degrees::new(-90.0).wrap_pos(), Degrees::new(270.0));
    /// ```
    #[inline]
    pub fn wrap_pos(self) -> Self {
        let full = Self::full_turn();
        Self::new(rem_euclid(self.value(), full))
    }

    /// Wraps a plane angle into `(-1/2 turn, 1/2 turn]`.
    #[inline]
    pub fn wrap_signed(self) -> Self {
        let full = Self::full_turn();
        let half = full / T::from_f64(2.0);
        let y = rem_euclid(self.value() + half, full) - half;
        Self::new(if y <= -half { y + full } else { y })
    }

    /// Smallest signed separation between two plane angles, in `(-1/2 turn, 1/2 turn]`.
    #[inline]
    pub fn signed_separation(self, other: Self) -> Self {
        Self::new(self.value() - other.value()).wrap_signed()
    }
}

#[inline]
fn rem_euclid<T: FloatRepr>(x: T, m: T) -> T {
    let r = x - m * (x / m).floor();
    if r < T::ZERO {
        r + m
    } else if r >= m {
        r - m
    } else {
        r
    }
}

/// Arcsine of a plain number, in radians.
#[inline]
pub fn asin<T: FloatRepr>(x: T) -> Radians<T> {
    Quantity::new(x.asin())
}

/// Arccosine of a plain number, in radians.
#[inline]
pub fn acos<T: FloatRepr>(x: T) -> Radians<T> {
    Quantity::new(x.acos())
}

/// Arctangent of a plain number, in radians.
#[inline]
pub fn atan<T: FloatRepr>(x: T) -> Radians<T> {
    Quantity::new(x.atan())
}

/// Four-quadrant arctangent of `y / x` for two quantities of one dimension, in radians.
///
/// ```rust
/// use siq_core::maths::atan2;
/// use siq_core::units::length::{Meters, Millimeters};
///
/// let a = atan2(Millimeters::new(1_000.0), Meters::new(1.0));
/// assert!((a.value() - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
/// ```
#[inline]
pub fn atan2<A: Unit, B: Unit, T: FloatRepr>(y: Quantity<A, T>, x: Quantity<B, T>) -> Radians<T> {
    let x = x.cast::<Quantity<A, T>>();
    Quantity::<Radian, T>::new(y.value().atan2(x.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::angle::{Degrees, Turns};
    use crate::units::area::SquareMeters;
    use crate::units::frequency::{Frequency, Hertz};
    use crate::units::length::{Meter, Meters};
    use crate::units::time::Seconds;
    use crate::units::volume::CubicMeters;
    use crate::RootRatio;
    use approx::assert_relative_eq;
    use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use proptest::prelude::*;

    #[test]
    fn roots_change_the_unit() {
        assert_eq!(SquareMeters::new(16.0).sqrt(), Meters::new(4.0));
        let side = CubicMeters::new(27.0).cbrt();
        assert_relative_eq!(side.value(), 3.0, max_relative = 1e-15);
        assert_eq!(<Root<Pow<Meter, 3>, 3>>::DIM, Meter::DIM);
        let r = Quantity::<Pow<Meter, 4>>::new(16.0).root::<4>();
        assert_relative_eq!(r.value(), 2.0, max_relative = 1e-15);
    }

    #[test]
    fn square_root_of_hertz_squared_is_hertz() {
        let f = Frequency::new(4.0).sqrt() * Frequency::new(9.0).sqrt();
        assert_eq!(f, Frequency::new(6.0));
        assert_eq!(<Root<Hertz, 2>>::SCALE, RootRatio::ONE);
    }

    #[test]
    fn powers() {
        assert_eq!(Meters::new(3.0).powi::<2>(), SquareMeters::new(9.0));
        assert_eq!(Seconds::new(4.0).powi::<-1>(), Frequency::new(0.25));
        assert_eq!(Meters::new(5.0).powi::<0>().value(), 1.0);
    }

    #[test]
    fn rounding_and_differences() {
        let m = Meters::new(2.5);
        assert_eq!(m.floor().value(), 2.0);
        assert_eq!(m.ceil().value(), 3.0);
        assert_eq!(m.round().value(), 3.0);
        assert_eq!((-m).trunc().value(), -2.0);
        assert_eq!(Meters::new(5.0).fdim(Meters::new(3.0)).value(), 2.0);
        assert_eq!(Meters::new(3.0).fdim(Meters::new(5.0)).value(), 0.0);
        assert_eq!(Meters::new(3.0).hypot(Meters::new(4.0)).value(), 5.0);
        assert_eq!(Meters::new(2.0).mul_add(3.0, Meters::new(1.0)).value(), 7.0);
    }

    #[test]
    fn classification() {
        assert!(Meters::<f64>::NAN.is_nan());
        assert!(Meters::<f64>::INFINITY.is_infinite());
        assert!(Meters::new(1.0).is_finite());
        assert!(!Meters::<f64>::NEG_INFINITY.is_finite());
    }

    #[test]
    fn trigonometry() {
        assert_relative_eq!(Degrees::new(30.0).sin(), 0.5, max_relative = 1e-15);
        assert_relative_eq!(Degrees::new(60.0).cos(), 0.5, max_relative = 1e-14);
        assert_relative_eq!(Turns::new(0.125).tan(), 1.0, max_relative = 1e-15);
        assert_relative_eq!(asin(1.0).value(), FRAC_PI_2);
        assert_relative_eq!(acos(-1.0).value(), PI);
        assert_relative_eq!(atan(1.0).value(), FRAC_PI_4);
        assert_relative_eq!(atan2(Meters::new(-1.0), Meters::new(0.0)).value(), -FRAC_PI_2);
    }

    #[test]
    fn wrapping() {
        assert_relative_eq!(Degrees::new(370.0).wrap_pos().value(), 10.0, epsilon = 1e-12);
        assert_eq!(Degrees::new(-90.0).wrap_pos().value(), 270.0);
        assert_eq!(Degrees::new(190.0).wrap_signed().value(), -170.0);
        assert_eq!(Degrees::new(180.0).wrap_signed().value(), 180.0);
        assert_eq!(Degrees::new(-180.0).wrap_signed().value(), 180.0);
        assert_eq!(Degrees::new(10.0).signed_separation(Degrees::new(350.0)).value(), 20.0);
    }

    proptest! {
        #[test]
        fn wrap_pos_is_in_range(v in -1e6f64..1e6) {
            let w = Degrees::new(v).wrap_pos().value();
            prop_assert!((0.0..360.0).contains(&w));
        }

        #[test]
        fn sqrt_then_square(v in 0.0f64..1e12) {
            let back = SquareMeters::new(v).sqrt().powi::<2>();
            assert_relative_eq!(back.value(), v, max_relative = 1e-12, epsilon = 1e-12);
        }
    }
}
