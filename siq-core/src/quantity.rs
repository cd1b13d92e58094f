//! Quantity type and its implementations.

use crate::conversion::{self, Conversion, Implicit};
use crate::unit::{Common, Inv, Per, Prod, Unit};
use crate::Repr;
use core::cmp::Ordering;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U, T>` wraps a value of representation `T` (`f64` unless stated otherwise)
/// together with phantom type information about its unit `U`. Dimension, scale and offset of
/// `U` are compile-time constants, so every check below costs nothing at run time:
///
/// - `+`/`-` require the same dimension and offset and produce the common unit of both sides,
/// - `*`/`/` combine dimensions and scales and drop offsets,
/// - comparisons work across units of one dimension,
/// - [`convert`](Self::convert) only compiles when no precision can be lost,
///   [`cast`](Self::cast) always compiles for one dimension.
///
/// # Examples
///
/// ```rust
/// use siq_core::units::length::{Kilometers, Meters, Millimeters};
///
/// let total = Kilometers::new(1.0) + Meters::new(1.0) + Millimeters::new(1.0);
/// assert_eq!(total, Millimeters::new(1_001_001.0));
/// ```
///
/// Quantities of different dimensions do not add up:
///
/// ```rust,compile_fail
/// use siq_core::units::length::Meters;
/// use siq_core::units::time::Seconds;
///
/// let _ = Meters::new(1.0) + Seconds::new(1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, T: Repr = f64>(T, PhantomData<U>);

/// Implemented by every [`Quantity`]; names its unit and representation.
///
/// Used as the target of [`Quantity::cast`] and by the dimension predicates in
/// [`crate::dimension`].
pub trait IsQuantity: Copy {
    /// The unit marker.
    type Unit: Unit;
    /// The numeric representation.
    type Repr: Repr;

    /// Wraps a raw value.
    fn from_raw(value: Self::Repr) -> Self;
    /// Unwraps the raw value.
    fn raw(self) -> Self::Repr;
}

impl<U: Unit, T: Repr> IsQuantity for Quantity<U, T> {
    type Unit = U;
    type Repr = T;

    #[inline]
    fn from_raw(value: T) -> Self {
        Self::new(value)
    }

    #[inline]
    fn raw(self) -> T {
        self.0
    }
}

impl<U: Unit, T: Repr> Quantity<U, T> {
    /// Zero.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// NaN of the representation (zero for integers).
    ///
    /// ```rust
    /// use siq_core::units::length::Meters;
    /// assert!(Meters::<f64>::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(T::NAN);

    /// Positive infinity of the representation (zero for integers).
    pub const INFINITY: Self = Self::new(T::INFINITY);

    /// Negative infinity of the representation (zero for integers).
    pub const NEG_INFINITY: Self = Self::new(T::NEG_INFINITY);

    /// Machine epsilon of the representation (zero for integers).
    pub const EPSILON: Self = Self::new(T::EPSILON);

    /// Most negative finite value.
    pub const MIN: Self = Self::new(T::MIN);

    /// Largest finite value.
    pub const MAX: Self = Self::new(T::MAX);

    /// Smallest positive normal value (one for integers).
    pub const MIN_POSITIVE: Self = Self::new(T::MIN_POSITIVE);

    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use siq_core::units::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use siq_core::units::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(self) -> T {
        self.0
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use siq_core::units::angle::Degrees;
    /// let a = Degrees::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Returns the smaller of two quantities of the same unit.
    ///
    /// ```rust
    /// use siq_core::units::length::Meters;
    /// let a = Meters::new(3.0);
    /// let b = Meters::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two quantities of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }

    /// Converts to another unit of the same dimension without changing the representation.
    ///
    /// Compiles only when the conversion cannot lose precision: always for floating point
    /// representations, and for integers only when the scale factor and the offset shift are
    /// whole numbers (e.g. kilometres to metres, not metres to kilometres).
    ///
    /// ```rust
    /// use siq_core::units::length::{Kilometers, Meter};
    ///
    /// let m = Kilometers::<i32>::new(2).convert::<Meter>();
    /// assert_eq!(m.value(), 2000);
    /// ```
    ///
    /// ```rust,compile_fail
    /// use siq_core::units::length::{Kilometer, Meters};
    ///
    /// let _ = Meters::<i32>::new(2000).convert::<Kilometer>();
    /// ```
    #[inline]
    pub fn convert<V: Unit>(self) -> Quantity<V, T> {
        let () = Implicit::<U, V, T>::CHECK;
        Quantity::new(self.rescale::<V>())
    }

    /// Explicitly converts to any quantity type of the same dimension.
    ///
    /// Scale, offset and representation may all change. Integer targets truncate toward zero.
    ///
    /// ```rust
    /// use siq_core::units::time::{Milliseconds, Seconds};
    ///
    /// let s: Seconds<i32> = Milliseconds::<i64>::new(1).cast();
    /// assert_eq!(s.value(), 0);
    /// let s: Seconds<i32> = Milliseconds::<i64>::new(2500).cast();
    /// assert_eq!(s.value(), 2);
    /// ```
    #[inline]
    pub fn cast<Q: IsQuantity>(self) -> Q {
        let () = Conversion::<U, Q::Unit>::SAME_DIMENSION;
        Q::from_raw(conversion::rescale::<T, Q::Repr>(
            self.0,
            Conversion::<U, Q::Unit>::FACTOR,
            Conversion::<U, Q::Unit>::SHIFT,
            <Q::Unit as Unit>::SCALE,
        ))
    }

    /// Reciprocal quantity; dimension and scale are inverted and any offset is dropped.
    ///
    /// ```rust
    /// use siq_core::units::time::Seconds;
    /// use siq_core::units::frequency::Frequency;
    ///
    /// let f = Seconds::new(0.5).inv();
    /// assert_eq!(f, Frequency::new(2.0));
    /// ```
    #[inline]
    pub fn inv(self) -> Quantity<Inv<U>, T> {
        Quantity::new(T::ONE / self.0)
    }

    /// Value expressed in unit `V`, in the same representation, without any checks.
    #[inline]
    fn rescale<V: Unit>(self) -> T {
        let factor = Conversion::<U, V>::FACTOR;
        let shift = Conversion::<U, V>::SHIFT;
        if factor.is_one() && shift.is_zero() {
            self.0
        } else {
            conversion::rescale::<T, T>(self.0, factor, shift, V::SCALE)
        }
    }
}

/// Explicit conversion, free-function form of [`Quantity::cast`].
///
/// ```rust
/// use siq_core::cast;
/// use siq_core::units::temperature::{Celsius, Kelvins};
///
/// let t: Celsius = cast(Kelvins::new(273.15));
/// assert!(t.value().abs() < 1e-9);
/// ```
#[inline]
pub fn cast<Q: IsQuantity, F: IsQuantity>(from: F) -> Q {
    let q: Quantity<F::Unit, F::Repr> = Quantity::new(from.raw());
    q.cast()
}

/// Raw value of a quantity or of a plain number.
pub trait RawValue: Copy {
    /// The representation.
    type Repr;
    /// Returns the raw value.
    fn raw_value(self) -> Self::Repr;
}

impl<U: Unit, T: Repr> RawValue for Quantity<U, T> {
    type Repr = T;
    #[inline]
    fn raw_value(self) -> T {
        self.0
    }
}

macro_rules! impl_raw_value {
    ($($t:ty),*) => {
        $(
            impl RawValue for $t {
                type Repr = $t;
                #[inline]
                fn raw_value(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_raw_value!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

/// Raw value of `x`, whether it is a quantity or a plain number.
///
/// ```rust
/// use siq_core::value;
/// use siq_core::units::length::Meters;
///
/// assert_eq!(value(Meters::new(2.0)), 2.0);
/// assert_eq!(value(3.5), 3.5);
/// ```
#[inline]
pub fn value<V: RawValue>(x: V) -> V::Repr {
    x.raw_value()
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Sums in the common scale of both operands.
///
/// Both operands must convert implicitly into that scale. Integer sums of units whose scales
/// differ by an irrational factor are rejected:
///
/// ```rust,compile_fail
/// use siq_core::units::frequency::{Hertz, Kilohertz};
/// use siq_core::{Quantity, Root};
///
/// let a = Quantity::<Root<Kilohertz, 2>, i64>::new(1);
/// let b = Quantity::<Root<Hertz, 2>, i64>::new(0);
/// let _ = a + b;
/// ```
impl<A: Unit, B: Unit, T: Repr> Add<Quantity<B, T>> for Quantity<A, T> {
    type Output = Quantity<Common<A, B>, T>;
    #[inline]
    fn add(self, rhs: Quantity<B, T>) -> Self::Output {
        let () = Conversion::<A, B>::SAME_OFFSET;
        let () = Implicit::<A, Common<A, B>, T>::CHECK;
        let () = Implicit::<B, Common<A, B>, T>::CHECK;
        Quantity::new(self.rescale::<Common<A, B>>() + rhs.rescale::<Common<A, B>>())
    }
}

impl<A: Unit, B: Unit, T: Repr> Sub<Quantity<B, T>> for Quantity<A, T> {
    type Output = Quantity<Common<A, B>, T>;
    #[inline]
    fn sub(self, rhs: Quantity<B, T>) -> Self::Output {
        let () = Conversion::<A, B>::SAME_OFFSET;
        let () = Implicit::<A, Common<A, B>, T>::CHECK;
        let () = Implicit::<B, Common<A, B>, T>::CHECK;
        Quantity::new(self.rescale::<Common<A, B>>() - rhs.rescale::<Common<A, B>>())
    }
}

impl<A: Unit, B: Unit, T: Repr> AddAssign<Quantity<B, T>> for Quantity<A, T> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<B, T>) {
        let () = Conversion::<B, A>::SAME_OFFSET;
        self.0 += rhs.convert::<A>().0;
    }
}

impl<A: Unit, B: Unit, T: Repr> SubAssign<Quantity<B, T>> for Quantity<A, T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<B, T>) {
        let () = Conversion::<B, A>::SAME_OFFSET;
        self.0 -= rhs.convert::<A>().0;
    }
}

impl<A: Unit, B: Unit, T: Repr> Mul<Quantity<B, T>> for Quantity<A, T> {
    type Output = Quantity<Prod<A, B>, T>;
    #[inline]
    fn mul(self, rhs: Quantity<B, T>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N: Unit, D: Unit, T: Repr> Div<Quantity<D, T>> for Quantity<N, T> {
    type Output = Quantity<Per<N, D>, T>;
    #[inline]
    fn div(self, rhs: Quantity<D, T>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

impl<U: Unit, T: Repr> Mul<T> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit, T: Repr> Div<T> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit, T: Repr> Rem<T> for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: T) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit, T: Repr> MulAssign<T> for Quantity<U, T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs;
    }
}

impl<U: Unit, T: Repr> DivAssign<T> for Quantity<U, T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs;
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl<U: Unit> Mul<Quantity<U, $t>> for $t {
                type Output = Quantity<U, $t>;
                #[inline]
                fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                    rhs * self
                }
            }

            impl<U: Unit> Div<Quantity<U, $t>> for $t {
                type Output = Quantity<Inv<U>, $t>;
                #[inline]
                fn div(self, rhs: Quantity<U, $t>) -> Self::Output {
                    Quantity::new(self / rhs.0)
                }
            }
        )*
    };
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl<U: Unit, T: Repr + Neg<Output = T>> Neg for Quantity<U, T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit, T: Repr> From<T> for Quantity<U, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<U: Unit, T: Repr> Default for Quantity<U, T> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<U: Unit, T: Repr> Sum for Quantity<U, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| Self::new(acc.0 + q.0))
    }
}

impl<'a, U: Unit, T: Repr> Sum<&'a Quantity<U, T>> for Quantity<U, T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| Self::new(acc.0 + q.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

impl<A: Unit, B: Unit, T: Repr> PartialEq<Quantity<B, T>> for Quantity<A, T> {
    #[inline]
    fn eq(&self, other: &Quantity<B, T>) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl<A: Unit, B: Unit, T: Repr> PartialOrd<Quantity<B, T>> for Quantity<A, T> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<B, T>) -> Option<Ordering> {
        let () = Conversion::<A, B>::SAME_DIMENSION;
        conversion::compare(self.0, (A::SCALE, A::OFFSET), other.0, (B::SCALE, B::OFFSET))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, T: Repr + Serialize> Serialize for Quantity<U, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, T: Repr + Deserialize<'de>> Deserialize<'de> for Quantity<U, T> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols
/// in serialized data. This is useful for external APIs, configuration files, or
/// self-documenting data formats.
///
/// # Examples
///
/// ```rust
/// use siq_core::units::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "siq_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use crate::SymbolOf;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};
    use std::string::{String, ToString};

    /// Serializes a `Quantity<U, T>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, T, S>(quantity: &Quantity<U, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        T: Repr + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", &SymbolOf::<U>::new().to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity<U, T>` from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field is validated if present but not required, so raw `{"value": ..}`
    /// documents still load.
    pub fn deserialize<'de, U, T, D>(deserializer: D) -> Result<Quantity<U, T>, D::Error>
    where
        U: Unit,
        T: Repr + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, T>(PhantomData<(U, T)>);

        impl<'de, U: Unit, T: Repr + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, T> {
            type Value = Quantity<U, T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, T>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit_str) = unit {
                    let expected = SymbolOf::<U>::new().to_string();
                    if unit_str != expected {
                        return Err(de::Error::custom(format!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::frequency::{Hertz, Kilohertz};
    use crate::units::length::{Kilometer, Kilometers, Meter, Meters, Millimeters};
    use crate::units::temperature::{Celsius, DegreeCelsius, Kelvin, Kelvins};
    use crate::units::time::{Milliseconds, Second, Seconds};
    use crate::unit::Root;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn integer_addition_uses_finest_unit() {
        let sum = Meters::<i32>::new(1) + Kilometers::<i32>::new(2);
        assert_eq!(sum.value(), 2001);
        assert_eq!(sum, Meters::<i32>::new(2001));
    }

    #[test]
    fn sums_of_root_units() {
        type RootKhz<T> = Quantity<Root<Kilohertz, 2>, T>;
        type RootHz<T> = Quantity<Root<Hertz, 2>, T>;

        let sum = RootKhz::<i64>::new(2) + RootKhz::<i64>::new(3);
        assert_eq!(sum.value(), 5);

        let sum = RootKhz::<f64>::new(1.0) + RootHz::<f64>::new(0.0);
        assert_relative_eq!(sum.value(), 1000f64.sqrt(), max_relative = 1e-12);
        let diff = RootHz::<f64>::new(1.0) - RootKhz::<f64>::new(1.0);
        assert_relative_eq!(diff.value(), 1.0 - 1000f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn integer_equality_across_scales() {
        assert_eq!(Meters::<i32>::new(2000), Kilometers::<i32>::new(2));
        assert!(Meters::<i32>::new(1999) < Kilometers::<i32>::new(2));
    }

    #[test]
    fn float_sum_of_three_prefixes_is_exact() {
        let total = Kilometers::new(1.0) + Meters::new(1.0) + Millimeters::new(1.0);
        assert_eq!(total.value(), 1_001_001.0);
        assert_eq!(total, Millimeters::new(1_001_001.0));
    }

    #[test]
    fn implicit_conversion_to_finer_unit() {
        let ms = Seconds::<i32>::new(1).convert::<crate::Milli<Second>>();
        assert_eq!(ms.value(), 1000);
        let m = Kilometers::new(1.5).convert::<Meter>();
        assert_eq!(m.value(), 1500.0);
        let km = Meters::new(1500.0).convert::<Kilometer>();
        assert_relative_eq!(km.value(), 1.5);
    }

    #[test]
    fn explicit_cast_truncates_integers() {
        let s: Seconds<i32> = Milliseconds::<i64>::new(1).cast();
        assert_eq!(s.value(), 0);
        let ms: Milliseconds<i32> = cast(Seconds::<i64>::new(1));
        assert_eq!(ms.value(), 1000);
    }

    #[test]
    fn temperature_ordering_across_offsets() {
        assert!(Kelvins::<i32>::new(0) < Celsius::<i32>::new(0));
        assert!(Kelvins::<i32>::new(300) > Celsius::<i32>::new(0));
        assert_eq!(Celsius::new(0.0), Kelvins::new(273.15));
    }

    #[test]
    fn celsius_addition_keeps_offset() {
        let sum = Celsius::new(10.0) + Celsius::new(15.0);
        assert_eq!(sum.value(), 25.0);
        assert_eq!(sum, Kelvins::new(298.15));
        let diff = Celsius::new(10.0) - Celsius::new(15.0);
        assert_eq!(diff, Celsius::new(-5.0));
    }

    #[test]
    fn cast_between_offsets() {
        let k: Kelvins = Celsius::new(10.0).cast();
        assert_relative_eq!(k.value(), 283.15);
        let c: Quantity<DegreeCelsius> = Kelvins::new(0.0).cast();
        assert_relative_eq!(c.value(), -273.15);
        let k: Quantity<Kelvin, i32> = Celsius::<i32>::new(0).cast();
        assert_eq!(k.value(), 273);
    }

    #[test]
    fn multiplication_drops_offset() {
        let product = Celsius::new(5.0) * Meters::new(1.0);
        assert_eq!(product, Kelvins::new(5.0) * Meters::new(1.0));
    }

    #[test]
    fn inverse_drops_offset() {
        let inv = Celsius::new(10.0).inv();
        assert_eq!(inv, 1.0 / Kelvins::new(10.0));
    }

    #[test]
    fn scalar_operations() {
        let d: Meters = Meters::new(3.0);
        assert_eq!((d * 2.0).value(), 6.0);
        assert_eq!((2.0 * d).value(), 6.0);
        assert_eq!((d / 2.0).value(), 1.5);
        assert_eq!((d % 2.0).value(), 1.0);
        let mut e = d;
        e *= 4.0;
        e /= 2.0;
        assert_eq!(e.value(), 6.0);
        assert_eq!((-d).value(), -3.0);
    }

    #[test]
    fn compound_assignment_converts_rhs() {
        let mut d = Meters::new(1.0);
        d += Kilometers::new(1.0);
        assert_eq!(d.value(), 1001.0);
        d -= Millimeters::new(1000.0);
        assert_relative_eq!(d.value(), 1000.0);
        let mut n = Meters::<i32>::new(1);
        n += Kilometers::<i32>::new(1);
        assert_eq!(n.value(), 1001);
    }

    #[test]
    fn limits() {
        assert!(Meters::<f64>::NAN.value().is_nan());
        assert_eq!(Meters::<i32>::NAN.value(), 0);
        assert_eq!(Meters::<i32>::MAX.value(), i32::MAX);
        assert_eq!(Meters::<f32>::EPSILON.value(), f32::EPSILON);
        assert!(Meters::<f64>::INFINITY.value().is_infinite());
        assert_eq!(Meters::<f64>::MIN_POSITIVE.value(), f64::MIN_POSITIVE);
    }

    #[test]
    fn sum_and_min_max() {
        let values = [Meters::new(1.0), Meters::new(2.0), Meters::new(3.5)];
        let total: Meters = values.iter().sum();
        assert_eq!(total.value(), 6.5);
        let total: Meters = values.into_iter().sum();
        assert_eq!(total.value(), 6.5);
        assert_eq!(values[0].max(values[2]).value(), 3.5);
        assert_eq!(values[1].min(values[2]).value(), 2.0);
    }

    #[test]
    fn nan_compares_unordered() {
        assert!(Meters::<f64>::NAN != Meters::<f64>::NAN);
        assert_eq!(Meters::<f64>::NAN.partial_cmp(&Kilometers::new(1.0)), None);
    }

    #[test]
    fn free_value_function() {
        assert_eq!(value(Meters::new(2.0)), 2.0);
        assert_eq!(value(7i32), 7);
    }

    proptest! {
        #[test]
        fn float_round_trip(v in -1e9f64..1e9) {
            let there: Kilometers = Meters::new(v).cast();
            let back: Meters = there.cast();
            prop_assert!((back.value() - v).abs() <= 1e-6 * v.abs().max(1.0));
        }

        #[test]
        fn integer_round_trip_through_finer_unit(v in -1_000_000i64..1_000_000) {
            let ms = Seconds::<i64>::new(v).convert::<crate::Milli<Second>>();
            let back: Seconds<i64> = ms.cast();
            prop_assert_eq!(back.value(), v);
        }

        #[test]
        fn addition_is_commutative_across_units(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let x = Meters::new(a) + Kilometers::new(b);
            let y = Kilometers::new(b) + Meters::new(a);
            prop_assert_eq!(x.value(), y.value());
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn raw_value_round_trip() {
            let json = serde_json::to_string(&Meters::new(42.5)).unwrap();
            assert_eq!(json, "42.5");
            let back: Meters = serde_json::from_str(&json).unwrap();
            assert_eq!(back.value(), 42.5);
        }

        #[derive(Serialize, Deserialize)]
        struct Route {
            #[serde(with = "crate::serde_with_unit")]
            length: Kilometers,
        }

        #[test]
        fn with_unit_round_trip() {
            let route = Route {
                length: Kilometers::new(12.0),
            };
            let json = serde_json::to_string(&route).unwrap();
            assert_eq!(json, r#"{"length":{"value":12.0,"unit":"km"}}"#);
            let back: Route = serde_json::from_str(&json).unwrap();
            assert_eq!(back.length.value(), 12.0);
        }

        #[test]
        fn with_unit_rejects_wrong_symbol() {
            let err = serde_json::from_str::<Route>(r#"{"length":{"value":1.0,"unit":"m"}}"#)
                .err()
                .unwrap();
            assert!(err.to_string().contains("unit mismatch"));
        }

        #[test]
        fn with_unit_accepts_missing_symbol() {
            let back: Route = serde_json::from_str(r#"{"length":{"value":3.0}}"#).unwrap();
            assert_eq!(back.length.value(), 3.0);
        }
    }
}
