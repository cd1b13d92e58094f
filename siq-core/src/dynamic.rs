//! Quantities whose unit is only known at run time.
//!
//! [`Quantity`] checks dimensions, offsets and precision at compile time. Code that learns
//! units while running, such as a loader reading a column header, can carry values as
//! [`DynQuantity`] instead: the same rules apply, but violations come back as
//! [`QuantityError`] values.
//!
//! ```rust
//! use siq_core::units::length::{Kilometers, Meter, Meters};
//! use siq_core::DynQuantity;
//!
//! let a = DynQuantity::from(Kilometers::new(1.0));
//! let b = DynQuantity::from(Meters::new(250.0));
//! let sum = a.checked_add(b)?;
//! assert_eq!(sum.to_quantity::<Meter>()?.value(), 1250.0);
//! # Ok::<(), siq_core::QuantityError>(())
//! ```

use crate::conversion;
use crate::{Dimension, Offset, Quantity, QuantityError, Repr, Result, RootRatio, Scale, Unit};
use core::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimension, scale and offset of a unit, as run-time values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynUnit {
    dim: Dimension,
    scale: Scale,
    offset: Offset,
}

impl DynUnit {
    /// Describes a unit from its parts.
    pub const fn new(dim: Dimension, scale: Scale, offset: Offset) -> Self {
        Self { dim, scale, offset }
    }

    /// Describes the compile-time unit `U`.
    pub const fn of<U: Unit>() -> Self {
        Self::new(U::DIM, U::SCALE, U::OFFSET)
    }

    /// The coherent SI unit of `dim`.
    pub const fn coherent(dim: Dimension) -> Self {
        Self::new(dim, RootRatio::ONE, Offset::ZERO)
    }

    /// Dimension.
    pub const fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Scale relative to the coherent SI unit.
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// SI value of the unit's zero.
    pub const fn offset(&self) -> Offset {
        self.offset
    }
}

/// A value tagged with a [`DynUnit`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynQuantity<T: Repr = f64> {
    value: T,
    unit: DynUnit,
}

impl<T: Repr> DynQuantity<T> {
    /// Tags `value` with `unit`.
    pub const fn new(value: T, unit: DynUnit) -> Self {
        Self { value, unit }
    }

    /// Tags `value` with the compile-time unit `U`.
    pub const fn of<U: Unit>(value: T) -> Self {
        Self::new(value, DynUnit::of::<U>())
    }

    /// Raw value, in [`Self::unit`].
    pub const fn value(&self) -> T {
        self.value
    }

    /// The unit the value is expressed in.
    pub const fn unit(&self) -> DynUnit {
        self.unit
    }

    /// Dimension of the value.
    pub const fn dimension(&self) -> Dimension {
        self.unit.dim
    }

    fn same_dimension(&self, other: DynUnit, op: &str) -> Result<()> {
        if self.unit.dim == other.dim {
            return Ok(());
        }
        log::debug!("{op} rejected: dimension {} is not {}", self.unit.dim, other.dim);
        Err(QuantityError::DimensionMismatch {
            left: self.unit.dim,
            right: other.dim,
        })
    }

    fn same_offset(&self, other: DynUnit, op: &str) -> Result<()> {
        if self.unit.offset == other.offset {
            return Ok(());
        }
        log::debug!("{op} rejected: offset {} differs from {}", self.unit.offset, other.offset);
        Err(QuantityError::OffsetMismatch {
            left: self.unit.offset,
            right: other.offset,
        })
    }

    fn overflow(&self, other: DynUnit, op: &'static str) -> QuantityError {
        log::debug!(
            "{op} rejected: scales {} and {} of {} and {} overflow",
            self.unit.scale,
            other.scale,
            self.unit.dim,
            other.dim
        );
        QuantityError::Overflow { op }
    }

    /// Factor and offset shift taking a value in `self.unit` to `target`.
    fn conversion(&self, target: DynUnit, op: &'static str) -> Result<(Scale, Offset)> {
        match (
            self.unit.scale.checked_divide(target.scale),
            self.unit.offset.checked_sub(target.offset),
        ) {
            (Some(factor), Some(shift)) => Ok((factor, shift)),
            _ => Err(self.overflow(target, op)),
        }
    }

    fn exact(&self, target: DynUnit, (factor, shift): (Scale, Offset), op: &str) -> Result<()> {
        if T::IS_FLOAT || conversion::is_exact(factor, shift, target.scale) {
            return Ok(());
        }
        log::debug!("{op} rejected: factor {factor} with offset {shift} is not exact");
        Err(QuantityError::PrecisionLoss {
            factor,
            offset: shift,
        })
    }

    fn rescaled<T2: Repr>(
        self,
        (factor, shift): (Scale, Offset),
        target: DynUnit,
    ) -> DynQuantity<T2> {
        DynQuantity::new(
            conversion::rescale::<T, T2>(self.value, factor, shift, target.scale),
            target,
        )
    }

    /// Converts to `target` under the implicit rule of [`Quantity::convert`]: same dimension,
    /// and for integer representations an exact factor and offset shift.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`], [`QuantityError::PrecisionLoss`] or
    /// [`QuantityError::Overflow`].
    pub fn convert_to(self, target: DynUnit) -> Result<Self> {
        self.same_dimension(target, "conversion")?;
        let conv = self.conversion(target, "conversion")?;
        self.exact(target, conv, "conversion")?;
        Ok(self.rescaled(conv, target))
    }

    /// Converts to `target` and representation `T2` like [`Quantity::cast`]; integer targets
    /// truncate toward zero.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`] or [`QuantityError::Overflow`].
    pub fn cast_to<T2: Repr>(self, target: DynUnit) -> Result<DynQuantity<T2>> {
        self.same_dimension(target, "cast")?;
        let conv = self.conversion(target, "cast")?;
        Ok(self.rescaled(conv, target))
    }

    /// Checked conversion back into a compile-time unit, under the implicit rule.
    ///
    /// # Errors
    ///
    /// See [`Self::convert_to`].
    pub fn to_quantity<U: Unit>(self) -> Result<Quantity<U, T>> {
        self.convert_to(DynUnit::of::<U>())
            .map(|q| Quantity::new(q.value))
    }

    fn combine(self, rhs: Self, op: &'static str, f: impl FnOnce(T, T) -> T) -> Result<Self> {
        self.same_dimension(rhs.unit, op)?;
        self.same_offset(rhs.unit, op)?;
        let scale = self
            .unit
            .scale
            .checked_common(rhs.unit.scale)
            .ok_or_else(|| self.overflow(rhs.unit, op))?;
        let common = DynUnit::new(self.unit.dim, scale, self.unit.offset);
        let lconv = self.conversion(common, op)?;
        let rconv = rhs.conversion(common, op)?;
        self.exact(common, lconv, op)?;
        rhs.exact(common, rconv, op)?;
        let l: DynQuantity<T> = self.rescaled(lconv, common);
        let r: DynQuantity<T> = rhs.rescaled(rconv, common);
        Ok(Self::new(f(l.value, r.value), common))
    }

    /// Sum in the common scale of both operands.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`], [`QuantityError::OffsetMismatch`], or for integer
    /// representations [`QuantityError::PrecisionLoss`] when the scales differ by an irrational
    /// factor. [`QuantityError::Overflow`] when the common scale does not fit.
    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, "addition", |a, b| a + b)
    }

    /// Difference in the common scale of both operands.
    ///
    /// # Errors
    ///
    /// As [`Self::checked_add`].
    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.combine(rhs, "subtraction", |a, b| a - b)
    }

    /// Product; dimensions and scales multiply and the offset is dropped.
    ///
    /// # Errors
    ///
    /// [`QuantityError::Overflow`] when the product dimension or scale does not fit.
    pub fn checked_mul(self, rhs: Self) -> Result<Self> {
        match (
            self.unit.dim.checked_multiply(rhs.unit.dim),
            self.unit.scale.checked_multiply(rhs.unit.scale),
        ) {
            (Some(dim), Some(scale)) => Ok(Self::new(
                self.value * rhs.value,
                DynUnit::new(dim, scale, Offset::ZERO),
            )),
            _ => Err(self.overflow(rhs.unit, "multiplication")),
        }
    }

    /// Quotient; dimensions and scales divide and the offset is dropped.
    ///
    /// # Errors
    ///
    /// [`QuantityError::Overflow`] when the quotient dimension or scale does not fit.
    pub fn checked_div(self, rhs: Self) -> Result<Self> {
        match (
            self.unit.dim.checked_divide(rhs.unit.dim),
            self.unit.scale.checked_divide(rhs.unit.scale),
        ) {
            (Some(dim), Some(scale)) => Ok(Self::new(
                self.value / rhs.value,
                DynUnit::new(dim, scale, Offset::ZERO),
            )),
            _ => Err(self.overflow(rhs.unit, "division")),
        }
    }

    /// Reciprocal; dimension and scale are inverted and the offset is dropped.
    pub fn inv(self) -> Self {
        let unit = DynUnit::new(self.unit.dim.invert(), self.unit.scale.invert(), Offset::ZERO);
        Self::new(T::ONE / self.value, unit)
    }

    /// Orders two quantities of one dimension by their SI values.
    ///
    /// # Errors
    ///
    /// [`QuantityError::DimensionMismatch`].
    pub fn try_cmp(&self, other: &Self) -> Result<Option<Ordering>> {
        self.same_dimension(other.unit, "comparison")?;
        Ok(conversion::compare(
            self.value,
            (self.unit.scale, self.unit.offset),
            other.value,
            (other.unit.scale, other.unit.offset),
        ))
    }
}

impl<U: Unit, T: Repr> From<Quantity<U, T>> for DynQuantity<T> {
    fn from(q: Quantity<U, T>) -> Self {
        Self::of::<U>(q.value())
    }
}

impl<U: Unit, T: Repr> TryFrom<DynQuantity<T>> for Quantity<U, T> {
    type Error = QuantityError;

    fn try_from(q: DynQuantity<T>) -> Result<Self> {
        q.to_quantity::<U>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{LENGTH, PLANAR_ANGLE, POWER, TIME};
    use crate::units::angle::Degrees;
    use crate::units::frequency::{Hertz, Kilohertz};
    use crate::units::current::Milliamperes;
    use crate::units::electromagnetism::Volts;
    use crate::units::length::{Kilometer, Kilometers, Meter, Meters};
    use crate::units::power::Watt;
    use crate::units::temperature::{Celsius, DegreeCelsius, Kelvin, Kelvins};
    use crate::units::time::{Second, Seconds};
    use crate::{Ratio, Root};
    use approx::assert_relative_eq;

    #[test]
    fn round_trip_through_static_units() {
        let d = DynQuantity::from(Kilometers::new(2.0));
        assert_eq!(d.dimension(), LENGTH);
        assert_eq!(d.unit().scale(), RootRatio::integer(1_000));
        let m: Meters = d.to_quantity::<Meter>().unwrap();
        assert_eq!(m.value(), 2_000.0);
        let km: Kilometers = Kilometers::try_from(d).unwrap();
        assert_eq!(km.value(), 2.0);
    }

    #[test]
    fn dimension_mismatch() {
        let d = DynQuantity::from(Meters::new(1.0));
        assert_eq!(
            d.to_quantity::<Second>(),
            Err(QuantityError::DimensionMismatch {
                left: LENGTH,
                right: TIME
            })
        );
        let t = DynQuantity::from(Seconds::new(1.0));
        assert!(matches!(
            d.checked_add(t),
            Err(QuantityError::DimensionMismatch { .. })
        ));
        assert!(d.try_cmp(&t).is_err());
    }

    #[test]
    fn integer_precision() {
        let d = DynQuantity::from(Meters::<i32>::new(2_000));
        assert_eq!(
            d.to_quantity::<Kilometer>(),
            Err(QuantityError::PrecisionLoss {
                factor: RootRatio::ratio(1, 1_000),
                offset: Ratio::ZERO
            })
        );
        let km: DynQuantity<i32> = d.cast_to(DynUnit::of::<Kilometer>()).unwrap();
        assert_eq!(km.value(), 2);
        let m = DynQuantity::<i64>::of::<Kilometer>(3).to_quantity::<Meter>().unwrap();
        assert_eq!(m.value(), 3_000);
    }

    #[test]
    fn mixed_scale_sum() {
        let a = DynQuantity::<i64>::of::<Kilometer>(1);
        let b = DynQuantity::<i64>::of::<Meter>(1);
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.unit(), DynUnit::of::<Meter>());
        assert_eq!(sum.value(), 1_001);
        let diff = a.checked_sub(b).unwrap();
        assert_eq!(diff.value(), 999);
    }

    #[test]
    fn offsets() {
        let c = DynQuantity::from(Celsius::new(10.0));
        let k = DynQuantity::from(Kelvins::new(15.0));
        assert!(matches!(
            c.checked_add(k),
            Err(QuantityError::OffsetMismatch { .. })
        ));
        let sum = c.checked_add(DynQuantity::from(Celsius::new(15.0))).unwrap();
        assert_eq!(sum.unit(), DynUnit::of::<DegreeCelsius>());
        let k: Kelvins = sum.to_quantity::<Kelvin>().unwrap();
        assert_relative_eq!(k.value(), 298.15, epsilon = 1e-9);
        let zero = DynQuantity::from(Celsius::new(0.0));
        let freezing = DynQuantity::from(Kelvins::new(273.15));
        assert_eq!(zero.try_cmp(&freezing), Ok(Some(Ordering::Equal)));
    }

    #[test]
    fn products_and_quotients() {
        let p = DynQuantity::from(Volts::new(10.0))
            .checked_mul(DynQuantity::from(Milliamperes::new(100.0)))
            .unwrap();
        assert_eq!(p.dimension(), POWER);
        let w = p.to_quantity::<Watt>().unwrap();
        assert_relative_eq!(w.value(), 1.0, max_relative = 1e-15);
        let v = DynQuantity::from(Meters::new(10.0))
            .checked_div(DynQuantity::from(Seconds::new(2.0)))
            .unwrap();
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.dimension(), LENGTH.divide(TIME));
        let f = DynQuantity::from(Seconds::new(0.5)).inv();
        assert_eq!(f.dimension(), TIME.invert());
        assert_eq!(f.value(), 2.0);
    }

    #[test]
    fn integer_sum_across_irrational_factor() {
        let a = DynQuantity::<i64>::of::<Root<Kilohertz, 2>>(1);
        let b = DynQuantity::<i64>::of::<Root<Hertz, 2>>(0);
        assert!(matches!(
            a.checked_add(b),
            Err(QuantityError::PrecisionLoss { .. })
        ));
        assert!(matches!(
            b.checked_sub(a),
            Err(QuantityError::PrecisionLoss { .. })
        ));

        let a = DynQuantity::<f64>::of::<Root<Kilohertz, 2>>(1.0);
        let b = DynQuantity::<f64>::of::<Root<Hertz, 2>>(0.0);
        let sum = a.checked_add(b).unwrap();
        assert_eq!(sum.unit(), DynUnit::of::<Root<Hertz, 2>>());
        assert_relative_eq!(sum.value(), 1000f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn scale_overflow_is_an_error() {
        let d = DynQuantity::from(Degrees::new(1.0));
        let cube = d.checked_mul(d).and_then(|d2| d2.checked_mul(d)).unwrap();
        assert_eq!(cube.dimension(), PLANAR_ANGLE.power(3));
        assert_eq!(
            cube.checked_mul(d),
            Err(QuantityError::Overflow {
                op: "multiplication"
            })
        );
        assert_eq!(
            cube.checked_div(d.inv()),
            Err(QuantityError::Overflow { op: "division" })
        );
    }

    #[test]
    fn coherent_unit() {
        let u = DynUnit::coherent(LENGTH);
        assert_eq!(u, DynUnit::of::<Meter>());
        assert!(u.offset().is_zero());
    }
}
