//! Photometric units: luminous intensity, luminous flux and illuminance.

use crate::dimension::{ILLUMINANCE, LUMINOUS_FLUX, LUMINOUS_INTENSITY};
use crate::macros::prefixed_units;
use crate::Quantity;
use siq_derive::Unit;

/// Candela (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", dimension = LUMINOUS_INTENSITY)]
pub struct Candela;
/// A quantity measured in candelas.
pub type Candelas<T = f64> = Quantity<Candela, T>;

prefixed_units! { Candela =>
    Femto: Femtocandela, Femtocandelas;
    Pico: Picocandela, Picocandelas;
    Nano: Nanocandela, Nanocandelas;
    Micro: Microcandela, Microcandelas;
    Milli: Millicandela, Millicandelas;
    Kilo: Kilocandela, Kilocandelas;
    Mega: Megacandela, Megacandelas;
    Giga: Gigacandela, Gigacandelas;
}

/// Lumen (`cd·sr`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lm", dimension = LUMINOUS_FLUX)]
pub struct Lumen;
/// A quantity measured in lumens.
pub type Lumens<T = f64> = Quantity<Lumen, T>;

/// Lux (`lm/m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lx", dimension = ILLUMINANCE)]
pub struct Lux;
/// A quantity measured in lux.
pub type Illuminance<T = f64> = Quantity<Lux, T>;

prefixed_units! { Lux =>
    Milli: Millilux;
    Kilo: Kilolux;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::angle::Steradians;
    use crate::units::length::Meters;
    use crate::Unit;

    #[test]
    fn lumen_is_candela_steradian() {
        let flux = Candelas::new(100.0) * Steradians::new(2.0);
        assert_eq!(flux, Lumens::new(200.0));
    }

    #[test]
    fn lux_is_lumen_per_square_metre() {
        let area = Meters::new(2.0) * Meters::new(5.0);
        let e = Lumens::new(500.0) / area;
        assert_eq!(e, Illuminance::new(50.0));
        assert_eq!(Kilolux::SCALE.num(), 1_000);
    }
}
