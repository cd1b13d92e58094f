//! Macros for defining units and conversions.

/// Generates `From` trait implementations for all pairs of units within a dimension.
///
/// Every generated `From` goes through [`Quantity::convert`](crate::Quantity::convert), so it is
/// available for every representation but, for integers, only compiles in the lossless direction.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<T: $crate::Repr> From<$crate::Quantity<$first, T>> for $crate::Quantity<$rest, T> {
                fn from(value: $crate::Quantity<$first, T>) -> Self {
                    value.convert::<$rest>()
                }
            }

            impl<T: $crate::Repr> From<$crate::Quantity<$rest, T>> for $crate::Quantity<$first, T> {
                fn from(value: $crate::Quantity<$rest, T>) -> Self {
                    value.convert::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// Declares prefixed variants of a base unit.
///
/// Each line `Prefix: Unit, Quantities, ONE;` produces a unit alias `Unit = Prefix<Base>`, an
/// optional quantity alias `Quantities<T = f64>` and an optional one-valued `f64` constant.
macro_rules! prefixed_units {
    ($base:ident => $($prefix:ident: $unit:ident $(, $qty:ident $(, $one:ident)?)?;)+) => {
        $(
            #[doc = concat!(
                "[`", stringify!($base), "`] with the [`", stringify!($prefix),
                "`](crate::", stringify!($prefix), ") prefix."
            )]
            pub type $unit = $crate::$prefix<$base>;
            $(
                #[doc = concat!("A quantity measured in [`", stringify!($unit), "`].")]
                pub type $qty<T = f64> = $crate::Quantity<$unit, T>;
                $(
                    #[doc = concat!("One [`", stringify!($unit), "`].")]
                    pub const $one: $qty = $qty::new(1.0);
                )?
            )?
        )+
    };
}

pub(crate) use prefixed_units;
