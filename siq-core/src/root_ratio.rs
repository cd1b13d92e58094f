//! Exact algebra on numbers of the form `(num / den)^(1 / root)`.
//!
//! [`RootRatio`] is the single numeric representation behind both dimensions and scales. Values
//! are always kept in canonical form:
//!
//! - `num / den` is in lowest terms,
//! - `root` is the smallest possible, i.e. `gcd(root, every prime exponent of num and den) == 1`,
//! - `1 / 1` always carries `root == 1`.
//!
//! With canonical forms, algebraic equality is plain field equality, which is what makes
//! dimension checks a compile-time comparison.
//!
//! ```rust
//! use siq_core::RootRatio;
//!
//! // (1/4)^(1/2) == 1/2
//! const HALF: RootRatio = RootRatio::new(1, 4, 2);
//! assert_eq!(HALF, RootRatio::ratio(1, 2));
//!
//! // (1/2)^(1/2) * (3)^(1/3) == (9/8)^(1/6)
//! let a = RootRatio::new(1, 2, 2);
//! let b = RootRatio::new(3, 1, 3);
//! assert_eq!(a.multiply(b), RootRatio::new(9, 8, 6));
//! ```

use crate::arithmetic::{checked_lcm, checked_power, gcd, prime_factors};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// `?` for `Option` inside `const fn`.
macro_rules! try_fit {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return None,
        }
    };
}

const fn expect_fits(v: Option<RootRatio>) -> RootRatio {
    match v {
        Some(v) => v,
        None => panic!("integer overflow in unit arithmetic"),
    }
}

/// `(num / den)^(1 / root)` in canonical form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RootRatio {
    num: u128,
    den: u128,
    root: u32,
}

impl RootRatio {
    /// The multiplicative identity `(1 / 1)^(1 / 1)`.
    pub const ONE: Self = Self {
        num: 1,
        den: 1,
        root: 1,
    };

    /// Builds and canonicalises `(num / den)^(1 / root)`.
    ///
    /// # Panics
    ///
    /// Panics (fails const evaluation) when any component is zero.
    pub const fn new(num: u128, den: u128, root: u32) -> Self {
        assert!(num > 0, "RootRatio numerator must be positive");
        assert!(den > 0, "RootRatio denominator must be positive");
        assert!(root > 0, "RootRatio root must be positive");
        Self::canonical(num, den, root)
    }

    /// The plain fraction `num / den`.
    #[inline]
    pub const fn ratio(num: u128, den: u128) -> Self {
        Self::new(num, den, 1)
    }

    /// The integer `n`.
    #[inline]
    pub const fn integer(n: u128) -> Self {
        Self::new(n, 1, 1)
    }

    /// Numerator of the canonical form.
    #[inline]
    pub const fn num(&self) -> u128 {
        self.num
    }

    /// Denominator of the canonical form.
    #[inline]
    pub const fn den(&self) -> u128 {
        self.den
    }

    /// Root of the canonical form.
    #[inline]
    pub const fn root_index(&self) -> u32 {
        self.root
    }

    const fn canonical(num: u128, den: u128, root: u32) -> Self {
        let g = gcd(num, den);
        let num = num / g;
        let den = den / g;
        if root == 1 || (num == 1 && den == 1) {
            return Self { num, den, root: 1 };
        }

        let nf = prime_factors(num);
        let df = prime_factors(den);
        let k = df.exponent_gcd(nf.exponent_gcd(root));
        if k == 1 {
            Self { num, den, root }
        } else {
            Self {
                num: nf.root(k),
                den: df.root(k),
                root: root / k,
            }
        }
    }

    /// `self^(1 / r)`, canonicalised.
    pub const fn root(self, r: u32) -> Self {
        assert!(r > 0, "root index must be positive");
        let root = match self.root.checked_mul(r) {
            Some(v) => v,
            None => panic!("root index overflow"),
        };
        Self::canonical(self.num, self.den, root)
    }

    /// `1 / self`. Canonical form is preserved, so no reduction is needed.
    #[inline]
    pub const fn invert(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
            root: self.root,
        }
    }

    /// `self * rhs`.
    ///
    /// # Panics
    ///
    /// Panics (fails const evaluation) on overflow; see [`checked_multiply`](Self::checked_multiply).
    pub const fn multiply(self, rhs: Self) -> Self {
        expect_fits(self.checked_multiply(rhs))
    }

    /// `self * rhs`, `None` when a component overflows.
    pub const fn checked_multiply(self, rhs: Self) -> Option<Self> {
        if self.root == 1 && rhs.root == 1 {
            // Cross-reduce first to keep the intermediate products small.
            let g1 = gcd(self.num, rhs.den);
            let g2 = gcd(rhs.num, self.den);
            let num = try_fit!((self.num / g1).checked_mul(rhs.num / g2));
            let den = try_fit!((self.den / g2).checked_mul(rhs.den / g1));
            return Some(Self::canonical(num, den, 1));
        }

        let g = gcd(self.root as u128, rhs.root as u128) as u32;
        let a = self.root / g;
        let b = rhs.root / g;
        let num = try_fit!(checked_power(self.num, b));
        let num = try_fit!(num.checked_mul(try_fit!(checked_power(rhs.num, a))));
        let den = try_fit!(checked_power(self.den, b));
        let den = try_fit!(den.checked_mul(try_fit!(checked_power(rhs.den, a))));
        let root = try_fit!(try_fit!(g.checked_mul(a)).checked_mul(b));
        Some(Self::canonical(num, den, root))
    }

    /// `self / rhs`.
    #[inline]
    pub const fn divide(self, rhs: Self) -> Self {
        self.multiply(rhs.invert())
    }

    /// `self / rhs`, `None` when a component overflows.
    #[inline]
    pub const fn checked_divide(self, rhs: Self) -> Option<Self> {
        self.checked_multiply(rhs.invert())
    }

    /// `self^k`; negative exponents invert, `k == 0` yields [`RootRatio::ONE`].
    pub const fn power(self, k: i32) -> Self {
        let base = if k < 0 { self.invert() } else { self };
        let mut acc = Self::ONE;
        let mut i = 0;
        while i < k.unsigned_abs() {
            acc = acc.multiply(base);
            i += 1;
        }
        acc
    }

    /// Largest ratio that divides both `self` and `rhs` exactly, at their common root.
    ///
    /// Both operands are raised to the root `R = lcm(ra, rb)`; the result is
    /// `(gcd(numerators) / lcm(denominators))^(1 / R)`. A value expressed in either operand
    /// converts to the common ratio by a factor whose `R`-th power is an integer.
    ///
    /// # Panics
    ///
    /// Panics (fails const evaluation) on overflow; see [`checked_common`](Self::checked_common).
    pub const fn common(self, rhs: Self) -> Self {
        expect_fits(self.checked_common(rhs))
    }

    /// [`common`](Self::common), `None` when a component overflows.
    pub const fn checked_common(self, rhs: Self) -> Option<Self> {
        let r = try_fit!(checked_lcm(self.root as u128, rhs.root as u128));
        if r > u32::MAX as u128 {
            return None;
        }
        let r = r as u32;
        let ea = r / self.root;
        let eb = r / rhs.root;
        let num = gcd(
            try_fit!(checked_power(self.num, ea)),
            try_fit!(checked_power(rhs.num, eb)),
        );
        let den = try_fit!(checked_lcm(
            try_fit!(checked_power(self.den, ea)),
            try_fit!(checked_power(rhs.den, eb)),
        ));
        Some(Self::canonical(num, den, r))
    }

    /// `true` for whole numbers (`den == 1` and `root == 1`).
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.den == 1 && self.root == 1
    }

    /// `true` for the identity.
    #[inline]
    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    /// Field-wise equality usable in `const` contexts.
    #[inline]
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den && self.root == other.root
    }

    /// Nearest `f64`.
    pub fn to_f64(self) -> f64 {
        let ratio = self.num as f64 / self.den as f64;
        if self.root == 1 {
            ratio
        } else {
            crate::repr::powf(ratio, 1.0 / self.root as f64)
        }
    }
}

impl Default for RootRatio {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for RootRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.den, self.root) {
            (1, 1) => write!(f, "{}", self.num),
            (_, 1) => write!(f, "{}/{}", self.num, self.den),
            (1, r) => write!(f, "{}^(1/{})", self.num, r),
            (_, r) => write!(f, "({}/{})^(1/{})", self.num, self.den, r),
        }
    }
}
