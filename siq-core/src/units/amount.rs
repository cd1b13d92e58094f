//! Amount of substance units.

use crate::dimension::AMOUNT_OF_SUBSTANCE;
use crate::macros::prefixed_units;
use crate::Quantity;
use siq_derive::Unit;

/// Mole (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", dimension = AMOUNT_OF_SUBSTANCE)]
pub struct Mole;
/// A quantity measured in moles.
pub type Moles<T = f64> = Quantity<Mole, T>;
/// One mole.
pub const MOL: Moles = Moles::new(1.0);

prefixed_units! { Mole =>
    Femto: Femtomole, Femtomoles;
    Pico: Picomole, Picomoles;
    Nano: Nanomole, Nanomoles;
    Micro: Micromole, Micromoles;
    Milli: Millimole, Millimoles;
    Kilo: Kilomole, Kilomoles;
}

crate::impl_unit_conversions!(Mole, Nanomole, Micromole, Millimole, Kilomole);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn millimoles_to_moles() {
        let mol: Moles = Millimoles::new(2_500.0).into();
        assert_relative_eq!(mol.value(), 2.5);
        assert_eq!(format!("{}", Micromoles::new(4.0)), "4 µmol");
    }
}
