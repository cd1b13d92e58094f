//! Numeric representations a [`Quantity`](crate::Quantity) can be stored in.
//!
//! [`Repr`] is implemented for the primitive integer and floating point types. It exposes what
//! the conversion engine needs: whether the type is floating, its numeric limits, and
//! conversions through `f64` and `i128`. [`FloatRepr`] adds the floating point maths used by
//! [`crate::maths`]; with the `std` feature disabled those come from `libm`.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, Sub, SubAssign};

/// Primitive numeric type usable as the value of a quantity.
///
/// Limits that do not exist for integers (`NAN`, `INFINITY`, `EPSILON`) are zero there, so
/// generic code can query them uniformly.
pub trait Repr:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// `true` for `f32` and `f64`.
    const IS_FLOAT: bool;
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Most negative finite value.
    const MIN: Self;
    /// Largest finite value.
    const MAX: Self;
    /// Smallest positive normal value (`1` for integers).
    const MIN_POSITIVE: Self;
    /// Machine epsilon (`0` for integers).
    const EPSILON: Self;
    /// Quiet NaN (`0` for integers).
    const NAN: Self;
    /// Positive infinity (`0` for integers).
    const INFINITY: Self;
    /// Negative infinity (`0` for integers).
    const NEG_INFINITY: Self;

    /// Widening (or rounding, for large integers) conversion to `f64`.
    fn to_f64(self) -> f64;
    /// Conversion from `f64` with Rust's saturating `as` semantics.
    fn from_f64(value: f64) -> Self;
    /// Conversion to `i128`, truncating floats.
    fn to_i128(self) -> i128;
    /// Conversion from `i128` with wrapping `as` semantics.
    fn from_i128(value: i128) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
}

macro_rules! impl_signed_int {
    ($($t:ty),*) => {
        $(
            impl Repr for $t {
                const IS_FLOAT: bool = false;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const MIN_POSITIVE: Self = 1;
                const EPSILON: Self = 0;
                const NAN: Self = 0;
                const INFINITY: Self = 0;
                const NEG_INFINITY: Self = 0;

                #[inline]
                fn to_f64(self) -> f64 { self as f64 }
                #[inline]
                fn from_f64(value: f64) -> Self { value as $t }
                #[inline]
                fn to_i128(self) -> i128 { self as i128 }
                #[inline]
                fn from_i128(value: i128) -> Self { value as $t }
                #[inline]
                fn abs(self) -> Self { <$t>::abs(self) }
            }
        )*
    };
}

macro_rules! impl_unsigned_int {
    ($($t:ty),*) => {
        $(
            impl Repr for $t {
                const IS_FLOAT: bool = false;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const MIN_POSITIVE: Self = 1;
                const EPSILON: Self = 0;
                const NAN: Self = 0;
                const INFINITY: Self = 0;
                const NEG_INFINITY: Self = 0;

                #[inline]
                fn to_f64(self) -> f64 { self as f64 }
                #[inline]
                fn from_f64(value: f64) -> Self { value as $t }
                #[inline]
                fn to_i128(self) -> i128 { self as i128 }
                #[inline]
                fn from_i128(value: i128) -> Self { value as $t }
                #[inline]
                fn abs(self) -> Self { self }
            }
        )*
    };
}

impl_signed_int!(i8, i16, i32, i64, i128, isize);
impl_unsigned_int!(u8, u16, u32, u64, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Floating point
// ─────────────────────────────────────────────────────────────────────────────

/// Floating point representation with the maths used by [`crate::maths`].
pub trait FloatRepr: Repr + core::ops::Neg<Output = Self> {
    /// Square root.
    fn sqrt(self) -> Self;
    /// Cube root.
    fn cbrt(self) -> Self;
    /// `self^exp`.
    fn powf(self, exp: Self) -> Self;
    /// `sqrt(self² + other²)` without undue overflow.
    fn hypot(self, other: Self) -> Self;
    /// Fused `self * a + b`.
    fn mul_add(self, a: Self, b: Self) -> Self;
    /// Largest integer not above `self`.
    fn floor(self) -> Self;
    /// Smallest integer not below `self`.
    fn ceil(self) -> Self;
    /// Nearest integer, ties away from zero.
    fn round(self) -> Self;
    /// Integer part.
    fn trunc(self) -> Self;
    /// Sine of radians.
    fn sin(self) -> Self;
    /// Cosine of radians.
    fn cos(self) -> Self;
    /// Tangent of radians.
    fn tan(self) -> Self;
    /// Arcsine in radians.
    fn asin(self) -> Self;
    /// Arccosine in radians.
    fn acos(self) -> Self;
    /// Arctangent in radians.
    fn atan(self) -> Self;
    /// Four-quadrant arctangent of `self / other` in radians.
    fn atan2(self, other: Self) -> Self;
    /// `true` for NaN.
    fn is_nan(self) -> bool;
    /// `true` for ±∞.
    fn is_infinite(self) -> bool;
    /// `true` when neither NaN nor infinite.
    fn is_finite(self) -> bool;
}

macro_rules! impl_float {
    (
        $t:ident,
        sqrt = $sqrt:ident, cbrt = $cbrt:ident, pow = $pow:ident, hypot = $hypot:ident,
        fma = $fma:ident, floor = $floor:ident, ceil = $ceil:ident, round = $round:ident,
        trunc = $trunc:ident, fabs = $fabs:ident, sin = $sin:ident, cos = $cos:ident,
        tan = $tan:ident, asin = $asin:ident, acos = $acos:ident, atan = $atan:ident,
        atan2 = $atan2:ident
    ) => {
        impl Repr for $t {
            const IS_FLOAT: bool = true;
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const MIN: Self = $t::MIN;
            const MAX: Self = $t::MAX;
            const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
            const EPSILON: Self = $t::EPSILON;
            const NAN: Self = $t::NAN;
            const INFINITY: Self = $t::INFINITY;
            const NEG_INFINITY: Self = $t::NEG_INFINITY;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $t
            }
            #[inline]
            fn abs(self) -> Self {
                #[cfg(feature = "std")]
                {
                    $t::abs(self)
                }
                #[cfg(not(feature = "std"))]
                {
                    libm::$fabs(self)
                }
            }
        }

        impl FloatRepr for $t {
            #[cfg(feature = "std")]
            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn sqrt(self) -> Self {
                libm::$sqrt(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn cbrt(self) -> Self {
                $t::cbrt(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn cbrt(self) -> Self {
                libm::$cbrt(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn powf(self, exp: Self) -> Self {
                $t::powf(self, exp)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn powf(self, exp: Self) -> Self {
                libm::$pow(self, exp)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn hypot(self, other: Self) -> Self {
                $t::hypot(self, other)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn hypot(self, other: Self) -> Self {
                libm::$hypot(self, other)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $t::mul_add(self, a, b)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn mul_add(self, a: Self, b: Self) -> Self {
                libm::$fma(self, a, b)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn floor(self) -> Self {
                $t::floor(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn floor(self) -> Self {
                libm::$floor(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn ceil(self) -> Self {
                $t::ceil(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn ceil(self) -> Self {
                libm::$ceil(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn round(self) -> Self {
                $t::round(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn round(self) -> Self {
                libm::$round(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn trunc(self) -> Self {
                $t::trunc(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn trunc(self) -> Self {
                libm::$trunc(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn sin(self) -> Self {
                $t::sin(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn sin(self) -> Self {
                libm::$sin(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn cos(self) -> Self {
                $t::cos(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn cos(self) -> Self {
                libm::$cos(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn tan(self) -> Self {
                $t::tan(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn tan(self) -> Self {
                libm::$tan(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn asin(self) -> Self {
                $t::asin(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn asin(self) -> Self {
                libm::$asin(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn acos(self) -> Self {
                $t::acos(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn acos(self) -> Self {
                libm::$acos(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn atan(self) -> Self {
                $t::atan(self)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn atan(self) -> Self {
                libm::$atan(self)
            }

            #[cfg(feature = "std")]
            #[inline]
            fn atan2(self, other: Self) -> Self {
                $t::atan2(self, other)
            }
            #[cfg(not(feature = "std"))]
            #[inline]
            fn atan2(self, other: Self) -> Self {
                libm::$atan2(self, other)
            }

            #[inline]
            fn is_nan(self) -> bool {
                $t::is_nan(self)
            }
            #[inline]
            fn is_infinite(self) -> bool {
                $t::is_infinite(self)
            }
            #[inline]
            fn is_finite(self) -> bool {
                $t::is_finite(self)
            }
        }
    };
}

impl_float!(
    f64,
    sqrt = sqrt, cbrt = cbrt, pow = pow, hypot = hypot, fma = fma, floor = floor,
    ceil = ceil, round = round, trunc = trunc, fabs = fabs, sin = sin, cos = cos, tan = tan,
    asin = asin, acos = acos, atan = atan, atan2 = atan2
);

impl_float!(
    f32,
    sqrt = sqrtf, cbrt = cbrtf, pow = powf, hypot = hypotf, fma = fmaf, floor = floorf,
    ceil = ceilf, round = roundf, trunc = truncf, fabs = fabsf, sin = sinf, cos = cosf,
    tan = tanf, asin = asinf, acos = acosf, atan = atanf, atan2 = atan2f
);

/// `x^y` on `f64`, used when evaluating root scales.
#[inline]
pub(crate) fn powf(x: f64, y: f64) -> f64 {
    FloatRepr::powf(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn integer_limits_follow_numeric_limits_conventions() {
        assert_eq!(<i32 as Repr>::NAN, 0);
        assert_eq!(<i32 as Repr>::INFINITY, 0);
        assert_eq!(<i32 as Repr>::EPSILON, 0);
        assert_eq!(<i32 as Repr>::MIN, i32::MIN);
        assert_eq!(<u8 as Repr>::MAX, 255);
        assert!(!<i64 as Repr>::IS_FLOAT);
    }

    #[test]
    fn float_limits() {
        assert!(<f64 as Repr>::NAN.is_nan());
        assert_eq!(<f32 as Repr>::EPSILON, f32::EPSILON);
        assert_eq!(<f64 as Repr>::MIN_POSITIVE, f64::MIN_POSITIVE);
        assert!(<f32 as Repr>::IS_FLOAT);
    }

    #[test]
    fn conversions() {
        assert_eq!(<i16 as Repr>::from_f64(2.9), 2);
        assert_eq!(<u8 as Repr>::from_f64(-3.0), 0);
        assert_eq!(<i32 as Repr>::from_f64(f64::NAN), 0);
        assert_eq!(Repr::to_i128(-7.8f64), -7);
        assert_eq!(<f32 as Repr>::from_i128(3), 3.0);
    }

    #[test]
    fn abs() {
        assert_eq!(Repr::abs(-4i32), 4);
        assert_eq!(Repr::abs(4u32), 4);
        assert_eq!(Repr::abs(-0.5f64), 0.5);
    }

    #[test]
    fn float_maths() {
        assert_abs_diff_eq!(FloatRepr::sqrt(9.0f64), 3.0);
        assert_abs_diff_eq!(FloatRepr::cbrt(27.0f32), 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(FloatRepr::hypot(3.0f64, 4.0), 5.0);
        assert_abs_diff_eq!(powf(2.0, 0.5), core::f64::consts::SQRT_2, epsilon = 1e-15);
    }
}
