//! Signed exact fractions, used for unit offsets.

use crate::arithmetic::gcd;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signed fraction `num / den` in lowest terms with `den > 0`.
///
/// Offsets such as the `273.15 K` between Celsius and Kelvin are kept as `Ratio`s so that
/// offset differences between units stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ratio {
    num: i128,
    den: i128,
}

impl Ratio {
    /// Zero.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// Builds and reduces `num / den`.
    ///
    /// # Panics
    ///
    /// Panics (fails const evaluation) when `den == 0`.
    pub const fn new(num: i128, den: i128) -> Self {
        assert!(den != 0, "Ratio denominator must be non-zero");
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
        if g == 0 {
            return Self::ZERO;
        }
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// The whole number `n`.
    #[inline]
    pub const fn integer(n: i128) -> Self {
        Self { num: n, den: 1 }
    }

    /// Numerator.
    #[inline]
    pub const fn num(&self) -> i128 {
        self.num
    }

    /// Denominator (always positive).
    #[inline]
    pub const fn den(&self) -> i128 {
        self.den
    }

    /// `self + rhs`.
    ///
    /// # Panics
    ///
    /// Panics (fails const evaluation) on overflow.
    pub const fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(r) => r,
            None => panic!("offset arithmetic overflow"),
        }
    }

    /// `self + rhs`, `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        let g = gcd(self.den as u128, rhs.den as u128) as i128;
        let (den, lhs, rhs) = match (
            (self.den / g).checked_mul(rhs.den),
            self.num.checked_mul(rhs.den / g),
            rhs.num.checked_mul(self.den / g),
        ) {
            (Some(d), Some(l), Some(r)) => (d, l, r),
            _ => return None,
        };
        match lhs.checked_add(rhs) {
            Some(num) => Some(Self::new(num, den)),
            None => None,
        }
    }

    /// `self - rhs`.
    #[inline]
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// `self - rhs`, `None` on overflow.
    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs.neg())
    }

    /// `-self`.
    #[inline]
    pub const fn neg(self) -> Self {
        Self {
            num: -self.num,
            den: self.den,
        }
    }

    /// `self * num / den`, `None` on overflow or when `den == 0`.
    pub const fn checked_scaled(self, num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        match (self.num.checked_mul(num), self.den.checked_mul(den)) {
            (Some(n), Some(d)) => Some(Self::new(n, d)),
            _ => None,
        }
    }

    /// `true` when the fraction is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.num == 0
    }

    /// `true` for whole numbers.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Equality usable in `const` contexts.
    #[inline]
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }

    /// Nearest `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
