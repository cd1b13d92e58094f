//! Unit types and traits.

use crate::dimension::{Dimension, DIMENSIONLESS};
use crate::{Offset, Quantity, Repr, RootRatio, Scale};
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `DIM` is the [`Dimension`] the unit measures.
/// * `SCALE` is the size of one unit expressed in the coherent SI unit of that dimension.
///   Example: `Kilo<Meter>::SCALE == 1000` because `1 km = 1000 m`.
/// * `OFFSET` is the SI value of the unit's zero point, zero for every multiplicative unit.
///   Example: Celsius has `OFFSET == 27315/100` because `0 °C = 273.15 K`.
/// * `SYMBOL` is the printable string (e.g. `"m"`). Composite units leave it empty and
///   override [`Unit::fmt_symbol`] instead.
///
/// All four are associated consts, so dimension and scale algebra is resolved at compile time.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `SCALE` is a canonical [`RootRatio`] and therefore strictly positive.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension of this unit.
    const DIM: Dimension;

    /// One unit expressed in the SI unit of the same dimension.
    const SCALE: Scale;

    /// SI value of this unit's zero.
    const OFFSET: Offset = Offset::ZERO;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;

    /// Writes the symbol. Composite units build theirs from their parts.
    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str(Self::SYMBOL)
    }
}

/// Adapter that displays the symbol of `U`.
///
/// ```rust
/// use siq_core::units::length::Meter;
/// use siq_core::{Kilo, Per, SymbolOf};
/// use siq_core::units::time::Second;
///
/// assert_eq!(SymbolOf::<Per<Kilo<Meter>, Second>>::new().to_string(), "km/s");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymbolOf<U: Unit>(PhantomData<U>);

impl<U: Unit> SymbolOf<U> {
    /// Creates the adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<U: Unit> Display for SymbolOf<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        U::fmt_symbol(f)
    }
}

/// Formats `<value> <symbol>`, forwarding precision flags to the value.
pub(crate) fn fmt_quantity<U: Unit, T: Repr + Display>(
    q: &Quantity<U, T>,
    f: &mut Formatter<'_>,
) -> Result {
    Display::fmt(&q.value(), f)?;
    f.write_str(" ")?;
    U::fmt_symbol(f)
}

// ─────────────────────────────────────────────────────────────────────────────
// Composite units
// ─────────────────────────────────────────────────────────────────────────────

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`: dimensions and scales are divided, the offset is
/// dropped. It is generic over any numerator and denominator units, which allows implementing
/// arithmetic generically for all pairs without bespoke macros.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    const DIM: Dimension = N::DIM.divide(D::DIM);
    const SCALE: Scale = N::SCALE.divide(D::SCALE);
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        N::fmt_symbol(f)?;
        f.write_str("/")?;
        D::fmt_symbol(f)
    }
}

/// Unit representing the product of two other units (`A·B`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B> {
    const DIM: Dimension = A::DIM.multiply(B::DIM);
    const SCALE: Scale = A::SCALE.multiply(B::SCALE);
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        A::fmt_symbol(f)?;
        f.write_str("·")?;
        B::fmt_symbol(f)
    }
}

/// Reciprocal of a unit (`1/U`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Inv<U: Unit>(PhantomData<U>);

impl<U: Unit> Unit for Inv<U> {
    const DIM: Dimension = U::DIM.invert();
    const SCALE: Scale = U::SCALE.invert();
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        f.write_str("1/")?;
        U::fmt_symbol(f)
    }
}

/// `R`-th root of a unit, e.g. `Root<Hertz, 2>` for `√Hz`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Root<U: Unit, const R: u32>(PhantomData<U>);

impl<U: Unit, const R: u32> Unit for Root<U, R> {
    const DIM: Dimension = U::DIM.root(R);
    const SCALE: Scale = U::SCALE.root(R);
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        U::fmt_symbol(f)?;
        write!(f, "^(1/{})", R)
    }
}

/// Integer power of a unit, e.g. `Pow<Meter, 2>` for `m^2`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Pow<U: Unit, const K: i32>(PhantomData<U>);

impl<U: Unit, const K: i32> Unit for Pow<U, K> {
    const DIM: Dimension = U::DIM.power(K);
    const SCALE: Scale = U::SCALE.power(K);
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        U::fmt_symbol(f)?;
        write!(f, "^{}", K)
    }
}

/// Common unit of two units of the same dimension and offset.
///
/// Its scale is [`RootRatio::common`] of both scales: the largest unit in which values of
/// either operand are whole multiples. This is the result unit of mixed-unit `+` and `-`.
/// The offset is taken from `A`; addition only compiles when both offsets agree.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Common<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Common<A, B> {
    const DIM: Dimension = A::DIM;
    const SCALE: Scale = A::SCALE.common(B::SCALE);
    const OFFSET: Offset = A::OFFSET;
    const SYMBOL: &'static str = "";

    fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
        if Self::SCALE.const_eq(&A::SCALE) {
            A::fmt_symbol(f)
        } else if Self::SCALE.const_eq(&B::SCALE) {
            B::fmt_symbol(f)
        } else {
            write!(f, "({})·", Self::SCALE.divide(A::SCALE))?;
            A::fmt_symbol(f)
        }
    }
}

macro_rules! impl_composite_display {
    ($([$($params:tt)*] $unit:ty),* $(,)?) => {
        $(
            impl<$($params)*, T: Repr + Display> Display for Quantity<$unit, T> {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    fmt_quantity(self, f)
                }
            }
        )*
    };
}

impl_composite_display! {
    [N: Unit, D: Unit] Per<N, D>,
    [A: Unit, B: Unit] Prod<A, B>,
    [U: Unit] Inv<U>,
    [U: Unit, const R: u32] Root<U, R>,
    [U: Unit, const K: i32] Pow<U, K>,
    [A: Unit, B: Unit] Common<A, B>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Prefixes
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! prefixes {
    ($($(#[$meta:meta])* $name:ident => $symbol:literal, $scale:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
            pub struct $name<U: Unit>(PhantomData<U>);

            impl<U: Unit> Unit for $name<U> {
                const DIM: Dimension = U::DIM;
                const SCALE: Scale = U::SCALE.multiply($scale);
                const SYMBOL: &'static str = "";

                fn fmt_symbol(f: &mut Formatter<'_>) -> Result {
                    f.write_str($symbol)?;
                    U::fmt_symbol(f)
                }
            }

            impl<U: Unit, T: Repr + Display> Display for Quantity<$name<U>, T> {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    fmt_quantity(self, f)
                }
            }
        )*
    };
}

prefixes! {
    /// `10^-18 U`.
    Atto => "a", RootRatio::ratio(1, 1_000_000_000_000_000_000);
    /// `10^-15 U`.
    Femto => "f", RootRatio::ratio(1, 1_000_000_000_000_000);
    /// `10^-12 U`.
    Pico => "p", RootRatio::ratio(1, 1_000_000_000_000);
    /// `10^-9 U`.
    Nano => "n", RootRatio::ratio(1, 1_000_000_000);
    /// `10^-6 U`.
    Micro => "µ", RootRatio::ratio(1, 1_000_000);
    /// `10^-3 U`.
    Milli => "m", RootRatio::ratio(1, 1_000);
    /// `10^-2 U`.
    Centi => "c", RootRatio::ratio(1, 100);
    /// `10^-1 U`.
    Deci => "d", RootRatio::ratio(1, 10);
    /// `10 U`.
    Deca => "da", RootRatio::integer(10);
    /// `10^2 U`.
    Hecto => "h", RootRatio::integer(100);
    /// `10^3 U`.
    Kilo => "k", RootRatio::integer(1_000);
    /// `10^6 U`.
    Mega => "M", RootRatio::integer(1_000_000);
    /// `10^9 U`.
    Giga => "G", RootRatio::integer(1_000_000_000);
    /// `10^12 U`.
    Tera => "T", RootRatio::integer(1_000_000_000_000);
    /// `10^15 U`.
    Peta => "P", RootRatio::integer(1_000_000_000_000_000);
    /// `10^18 U`.
    Exa => "E", RootRatio::integer(1_000_000_000_000_000_000);
    /// `2^10 U`.
    Kibi => "Ki", RootRatio::integer(1 << 10);
    /// `2^20 U`.
    Mebi => "Mi", RootRatio::integer(1 << 20);
    /// `2^30 U`.
    Gibi => "Gi", RootRatio::integer(1 << 30);
    /// `2^40 U`.
    Tebi => "Ti", RootRatio::integer(1 << 40);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensionless
// ─────────────────────────────────────────────────────────────────────────────

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` has scale one and an empty symbol. It is used to model the result of
/// simplifying same-unit ratios (e.g., `Meters / Meters`) into a plain "number-like"
/// `Quantity<Unitless>`.
///
/// Unlike a type alias to `f64`, this is a proper zero-sized type, which ensures that only
/// explicitly constructed `Quantity<Unitless>` values are treated as dimensionless, not bare
/// primitives.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const DIM: Dimension = DIMENSIONLESS;
    const SCALE: Scale = RootRatio::ONE;
    const SYMBOL: &'static str = "";
}

impl<T: Repr + Display> Display for Quantity<Unitless, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.value(), f)
    }
}

/// Trait for simplifying composite unit types.
///
/// This allows reducing unit expressions to simpler forms, such as `Per<U, U>` to `Unitless`
/// or `Per<N, Per<N, D>>` to `D`.
pub trait Simplify {
    /// The simplified quantity type.
    type Out;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Self::Out;
}

impl<U: Unit, T: Repr> Simplify for Quantity<Per<U, U>, T> {
    type Out = Quantity<Unitless, T>;
    /// ```rust
    /// use siq_core::units::length::Meters;
    /// use siq_core::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<Unitless, T> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, T: Repr> Simplify for Quantity<Per<N, Per<N, D>>, T> {
    type Out = Quantity<D, T>;
    fn simplify(self) -> Quantity<D, T> {
        Quantity::new(self.value())
    }
}

impl<U: Unit, T: Repr> Simplify for Quantity<Prod<U, Inv<U>>, T> {
    type Out = Quantity<Unitless, T>;
    fn simplify(self) -> Quantity<Unitless, T> {
        Quantity::new(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{AREA, FREQUENCY, LENGTH, SPEED};
    use crate::units::length::Meter;
    use crate::units::time::Second;

    #[test]
    fn prefixes_scale_base_unit() {
        assert_eq!(<Kilo<Meter>>::SCALE, RootRatio::integer(1000));
        assert_eq!(<Milli<Second>>::SCALE, RootRatio::ratio(1, 1000));
        assert_eq!(<Kilo<Meter>>::DIM, LENGTH);
        assert!(<Kilo<Meter>>::OFFSET.is_zero());
    }

    #[test]
    fn composite_units() {
        assert_eq!(<Per<Kilo<Meter>, Second>>::DIM, SPEED);
        assert_eq!(<Per<Kilo<Meter>, Second>>::SCALE, RootRatio::integer(1000));
        assert_eq!(<Pow<Kilo<Meter>, 2>>::DIM, AREA);
        assert_eq!(<Pow<Kilo<Meter>, 2>>::SCALE, RootRatio::integer(1_000_000));
        assert_eq!(<Inv<Second>>::DIM, FREQUENCY);
        assert_eq!(<Root<Pow<Meter, 2>, 2>>::DIM, LENGTH);
    }

    #[test]
    fn common_unit_is_the_finer_prefix() {
        assert_eq!(<Common<Kilo<Meter>, Meter>>::SCALE, RootRatio::ONE);
        assert_eq!(<Common<Meter, Milli<Meter>>>::SCALE, RootRatio::ratio(1, 1000));
    }

    #[test]
    fn symbols() {
        assert_eq!(SymbolOf::<Kilo<Meter>>::new().to_string(), "km");
        assert_eq!(SymbolOf::<Micro<Second>>::new().to_string(), "µs");
        assert_eq!(SymbolOf::<Per<Meter, Second>>::new().to_string(), "m/s");
        assert_eq!(SymbolOf::<Prod<Meter, Second>>::new().to_string(), "m·s");
        assert_eq!(SymbolOf::<Pow<Meter, 3>>::new().to_string(), "m^3");
        assert_eq!(SymbolOf::<Inv<Second>>::new().to_string(), "1/s");
        assert_eq!(SymbolOf::<Root<Second, 2>>::new().to_string(), "s^(1/2)");
        assert_eq!(SymbolOf::<Common<Kilo<Meter>, Meter>>::new().to_string(), "m");
    }

    #[test]
    fn composite_display_uses_precision() {
        let v = Quantity::<Per<Meter, Second>>::new(1.23456);
        assert_eq!(format!("{:.2}", v), "1.23 m/s");
        assert_eq!(format!("{}", Quantity::<Unitless>::new(0.5)), "0.5");
    }

    #[test]
    fn simplify_same_unit_ratio() {
        let q = Quantity::<Per<Meter, Meter>>::new(3.0);
        assert_eq!(q.simplify().value(), 3.0);
        let q = Quantity::<Per<Meter, Per<Meter, Second>>>::new(2.0);
        let s: Quantity<Second> = q.simplify();
        assert_eq!(s.value(), 2.0);
    }
}
