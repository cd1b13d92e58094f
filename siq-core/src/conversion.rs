//! Scale and offset conversion between units.
//!
//! A value `v` in a unit with scale `S` and offset `O` denotes the SI value `v·S + O`.
//! Converting from `(Ss, Os)` to `(Sd, Od)` therefore computes
//! `v' = v·(Ss/Sd) + (Os − Od)/Sd`. Integer representations go through exact `i128` arithmetic
//! whenever the factors are rational and nothing overflows; everything else goes through `f64`.

use crate::{Offset, Repr, RootRatio, Scale, Unit};
use core::cmp::Ordering;
use core::marker::PhantomData;

/// Compile-time facts about converting from unit `A` to unit `B`.
pub(crate) struct Conversion<A, B>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Conversion<A, B> {
    pub(crate) const FACTOR: Scale = A::SCALE.divide(B::SCALE);
    pub(crate) const SHIFT: Offset = A::OFFSET.sub(B::OFFSET);
    pub(crate) const EXACT: bool = is_exact(Self::FACTOR, Self::SHIFT, B::SCALE);

    pub(crate) const SAME_DIMENSION: () = assert!(
        A::DIM.const_eq(&B::DIM),
        "dimension mismatch: the units measure different physical dimensions"
    );

    pub(crate) const SAME_OFFSET: () = {
        let () = Self::SAME_DIMENSION;
        assert!(
            A::OFFSET.const_eq(&B::OFFSET),
            "offset mismatch: do not add or subtract units with different offsets, cast one side first"
        );
    };
}

/// Compile-time check of an implicit (lossless) conversion in representation `T`.
pub(crate) struct Implicit<A, B, T>(PhantomData<(A, B, T)>);

impl<A: Unit, B: Unit, T: Repr> Implicit<A, B, T> {
    pub(crate) const CHECK: () = {
        let () = Conversion::<A, B>::SAME_DIMENSION;
        assert!(
            T::IS_FLOAT || Conversion::<A, B>::EXACT,
            "precision loss: this integer conversion is not exact, use an explicit cast"
        );
    };
}

/// `true` when every integer converts to an integer: the factor is whole and the
/// offset shift, measured in the destination unit, is whole too.
pub(crate) const fn is_exact(factor: Scale, shift: Offset, dest: Scale) -> bool {
    if !factor.is_integer() {
        return false;
    }
    if shift.is_zero() {
        return true;
    }
    if dest.root_index() != 1 || dest.num() > i128::MAX as u128 || dest.den() > i128::MAX as u128 {
        return false;
    }
    match shift.checked_scaled(dest.den() as i128, dest.num() as i128) {
        Some(in_dest) => in_dest.is_integer(),
        None => false,
    }
}

#[inline]
fn to_i128(x: u128) -> Option<i128> {
    if x <= i128::MAX as u128 {
        Some(x as i128)
    } else {
        None
    }
}

fn rescale_exact(v: i128, factor: Scale, shift: Offset, dest: Scale) -> Option<i128> {
    if factor.root_index() != 1 {
        return None;
    }
    let fnum = to_i128(factor.num())?;
    let fden = to_i128(factor.den())?;
    if shift.is_zero() {
        return Some(v.checked_mul(fnum)? / fden);
    }
    if dest.root_index() != 1 {
        return None;
    }
    let dnum = to_i128(dest.num())?;
    let dden = to_i128(dest.den())?;
    // v·fnum/fden + (snum/sden)·(dden/dnum) over one denominator
    let num = v
        .checked_mul(fnum)?
        .checked_mul(shift.den())?
        .checked_mul(dnum)?
        .checked_add(shift.num().checked_mul(dden)?.checked_mul(fden)?)?;
    let den = fden.checked_mul(shift.den())?.checked_mul(dnum)?;
    Some(num / den)
}

/// Floating point evaluation of `v·factor + shift/dest`.
pub(crate) fn rescale_f64(v: f64, factor: Scale, shift: Offset, dest: Scale) -> f64 {
    let scaled = if factor.is_one() {
        v
    } else if factor.root_index() == 1 {
        v * factor.num() as f64 / factor.den() as f64
    } else {
        v * factor.to_f64()
    };
    if shift.is_zero() {
        scaled
    } else {
        scaled + shift.to_f64() / dest.to_f64()
    }
}

/// Converts `value` by `factor` and `shift` into a unit of scale `dest`, possibly changing
/// the representation. Integer targets truncate toward zero.
pub(crate) fn rescale<T: Repr, T2: Repr>(value: T, factor: Scale, shift: Offset, dest: Scale) -> T2 {
    if !T::IS_FLOAT && !T2::IS_FLOAT {
        if let Some(v) = rescale_exact(value.to_i128(), factor, shift, dest) {
            return T2::from_i128(v);
        }
    }
    if T::IS_FLOAT == T2::IS_FLOAT && factor.is_one() && shift.is_zero() {
        return T2::from_f64(value.to_f64());
    }
    T2::from_f64(rescale_f64(value.to_f64(), factor, shift, dest))
}

/// Orders two values given with their own scale and offset by their SI values.
pub(crate) fn compare<T: Repr>(
    lhs: T,
    (ls, lo): (Scale, Offset),
    rhs: T,
    (rs, ro): (Scale, Offset),
) -> Option<Ordering> {
    if ls == rs && lo == ro {
        return lhs.partial_cmp(&rhs);
    }
    if !T::IS_FLOAT {
        if let Some((l, r)) = cross_multiplied(lhs.to_i128(), (ls, lo), rhs.to_i128(), (rs, ro)) {
            return Some(l.cmp(&r));
        }
    }
    let l = rescale_f64(lhs.to_f64(), ls, lo, RootRatio::ONE);
    let r = rescale_f64(rhs.to_f64(), rs, ro, RootRatio::ONE);
    l.partial_cmp(&r)
}

/// Both sides multiplied by the product of all denominators, exact in `i128`.
fn cross_multiplied(
    lhs: i128,
    (ls, lo): (Scale, Offset),
    rhs: i128,
    (rs, ro): (Scale, Offset),
) -> Option<(i128, i128)> {
    if ls.root_index() != 1 || rs.root_index() != 1 {
        return None;
    }
    let (lsn, lsd) = (to_i128(ls.num())?, to_i128(ls.den())?);
    let (rsn, rsd) = (to_i128(rs.num())?, to_i128(rs.den())?);
    let (lon, lod) = (lo.num(), lo.den());
    let (ron, rod) = (ro.num(), ro.den());

    let lhs_factor = lsn.checked_mul(rsd)?.checked_mul(lod)?.checked_mul(rod)?;
    let lhs_offset = lon.checked_mul(rsd)?.checked_mul(lsd)?.checked_mul(rod)?;
    let rhs_factor = rsn.checked_mul(lsd)?.checked_mul(rod)?.checked_mul(lod)?;
    let rhs_offset = ron.checked_mul(lsd)?.checked_mul(rsd)?.checked_mul(lod)?;

    Some((
        lhs.checked_mul(lhs_factor)?.checked_add(lhs_offset)?,
        rhs.checked_mul(rhs_factor)?.checked_add(rhs_offset)?,
    ))
}
