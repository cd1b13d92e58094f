//! Const integer arithmetic: exponentiation, gcd/lcm, primality and prime factorisation.
//!
//! Everything here is a `const fn` so that dimension and scale algebra can be evaluated while
//! the compiler instantiates unit types. Overflow is reported with a panic, which turns into a
//! compile error when it happens during constant evaluation. The `checked_*` forms return
//! `None` instead, for callers working on values only known at run time.
//!
//! ```rust
//! use siq_core::arithmetic::{gcd, power, prime_factors};
//!
//! const F: siq_core::arithmetic::PrimeFactors = prime_factors(360);
//! assert_eq!(F.get(0), (2, 3));
//! assert_eq!(F.get(1), (3, 2));
//! assert_eq!(F.get(2), (5, 1));
//! assert_eq!(gcd(84, 36), 12);
//! assert_eq!(power(3, 4), 81);
//! ```

/// Upper bound on the number of *distinct* prime factors of a `u128`.
///
/// The product of the first 27 primes already exceeds `u128::MAX`.
pub const MAX_FACTORS: usize = 32;

/// Greatest common divisor. `gcd(0, n) == n`.
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common multiple. `lcm(0, n) == 0`.
pub const fn lcm(a: u128, b: u128) -> u128 {
    expect_fits(checked_lcm(a, b))
}

/// Least common multiple, `None` on overflow.
pub const fn checked_lcm(a: u128, b: u128) -> Option<u128> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Unwraps the result of a checked operation, panicking on overflow.
///
/// In constant evaluation the panic is a compile error.
#[inline]
const fn expect_fits(v: Option<u128>) -> u128 {
    match v {
        Some(v) => v,
        None => panic!("integer overflow in unit arithmetic"),
    }
}

/// Integer exponentiation by recursive squaring. `power(b, 0) == 1`.
pub const fn power(base: u128, exp: u32) -> u128 {
    expect_fits(checked_power(base, exp))
}

/// Integer exponentiation, `None` on overflow.
pub const fn checked_power(base: u128, exp: u32) -> Option<u128> {
    if exp == 0 {
        return Some(1);
    }
    let half = match checked_power(base, exp / 2) {
        Some(h) => h,
        None => return None,
    };
    let sq = match half.checked_mul(half) {
        Some(sq) => sq,
        None => return None,
    };
    if exp % 2 == 0 {
        Some(sq)
    } else {
        sq.checked_mul(base)
    }
}

/// Returns `true` when `n` is prime.
pub const fn is_prime(n: u128) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime strictly greater than `n`.
pub const fn next_prime(n: u128) -> u128 {
    let mut candidate = n + 1;
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// The list `[1, 2, 3, 5, 7, ...]` of length `N`.
///
/// Index 0 holds `1`, which tags the dimensionless base dimension; the following entries are the
/// first `N - 1` primes.
pub const fn prime_list<const N: usize>() -> [u128; N] {
    let mut out = [0u128; N];
    let mut p = 1;
    let mut i = 0;
    while i < N {
        out[i] = p;
        p = next_prime(p);
        i += 1;
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Prime factorisation
// ─────────────────────────────────────────────────────────────────────────────

/// Multiset of `(prime, exponent)` pairs, in increasing prime order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeFactors {
    factors: [(u128, u32); MAX_FACTORS],
    len: usize,
}

impl PrimeFactors {
    const EMPTY: Self = Self {
        factors: [(0, 0); MAX_FACTORS],
        len: 0,
    };

    /// Number of distinct primes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` for the factorisation of 1.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The `i`-th `(prime, exponent)` pair.
    #[inline]
    pub const fn get(&self, i: usize) -> (u128, u32) {
        assert!(i < self.len, "prime factor index out of range");
        self.factors[i]
    }

    /// Exponent of `prime`, zero when absent.
    pub const fn exponent_of(&self, prime: u128) -> u32 {
        let mut i = 0;
        while i < self.len {
            if self.factors[i].0 == prime {
                return self.factors[i].1;
            }
            i += 1;
        }
        0
    }

    /// Iterates over the `(prime, exponent)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u128, u32)> + '_ {
        self.factors[..self.len].iter().copied()
    }

    /// `gcd(init, e1, e2, ...)` over all exponents.
    pub const fn exponent_gcd(&self, init: u32) -> u32 {
        let mut g = init as u128;
        let mut i = 0;
        while i < self.len {
            g = gcd(g, self.factors[i].1 as u128);
            i += 1;
        }
        g as u32
    }

    /// `true` when every exponent is divisible by `r`, i.e. the number is a perfect `r`-th power.
    pub const fn is_exact_root(&self, r: u32) -> bool {
        let mut i = 0;
        while i < self.len {
            if self.factors[i].1 % r != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Product of `p^(e / r)`; exact `r`-th root when [`is_exact_root`](Self::is_exact_root).
    pub const fn root(&self, r: u32) -> u128 {
        let mut acc: u128 = 1;
        let mut i = 0;
        while i < self.len {
            let (p, e) = self.factors[i];
            acc = expect_fits(acc.checked_mul(power(p, e / r)));
            i += 1;
        }
        acc
    }

    const fn with(mut self, prime: u128) -> Self {
        let mut i = 0;
        while i < self.len {
            if self.factors[i].0 == prime {
                self.factors[i].1 += 1;
                return self;
            }
            i += 1;
        }
        self.factors[self.len] = (prime, 1);
        self.len += 1;
        self
    }
}

/// Factors `n >= 1` by trial division up to `sqrt(n)`.
pub const fn prime_factors(n: u128) -> PrimeFactors {
    assert!(n >= 1, "prime_factors is only defined for positive integers");

    let mut out = PrimeFactors::EMPTY;
    let mut num = n;
    let mut z = 2;
    while z <= num / z {
        if num % z == 0 {
            out = out.with(z);
            num /= z;
        } else {
            z += if z == 2 { 1 } else { 2 };
        }
    }
    if num > 1 {
        out = out.with(num);
    }
    out
}
