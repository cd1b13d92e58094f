//! Electric current units.

use crate::dimension::ELECTRIC_CURRENT;
use crate::macros::prefixed_units;
use crate::Quantity;
use siq_derive::Unit;

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", dimension = ELECTRIC_CURRENT)]
pub struct Ampere;
/// A quantity measured in amperes.
pub type Amperes<T = f64> = Quantity<Ampere, T>;
/// One ampere.
pub const A: Amperes = Amperes::new(1.0);

prefixed_units! { Ampere =>
    Femto: Femtoampere, Femtoamperes;
    Pico: Picoampere, Picoamperes;
    Nano: Nanoampere, Nanoamperes;
    Micro: Microampere, Microamperes;
    Milli: Milliampere, Milliamperes, MILLIAMP;
    Kilo: Kiloampere, Kiloamperes;
    Mega: Megaampere, Megaamperes;
    Giga: Gigaampere, Gigaamperes;
    Tera: Teraampere, Teraamperes;
}

crate::impl_unit_conversions!(Ampere, Microampere, Milliampere, Kiloampere);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milliamperes_add_to_amperes() {
        let total = Amperes::new(1.0) + Milliamperes::new(250.0);
        assert_eq!(total, Milliamperes::new(1_250.0));
        assert_eq!(format!("{}", total), "1250 mA");
    }

    #[test]
    fn integer_conversion() {
        let ua: Microamperes<i64> = Milliamperes::<i64>::new(3).into();
        assert_eq!(ua.value(), 3_000);
    }
}
