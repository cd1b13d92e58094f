//! Volume and density units.

use crate::dimension::VOLUME;
use crate::macros::prefixed_units;
use crate::units::length::{Centimeter, Meter};
use crate::units::mass::{Gram, Kilogram};
use crate::{Per, Pow, Quantity, RootRatio};
use siq_derive::Unit;

/// Cubic metre.
pub type CubicMeter = Pow<Meter, 3>;
/// A volume in cubic metres.
pub type CubicMeters<T = f64> = Quantity<CubicMeter, T>;

/// Cubic centimetre.
pub type CubicCentimeter = Pow<Centimeter, 3>;
/// A volume in cubic centimetres.
pub type CubicCentimeters<T = f64> = Quantity<CubicCentimeter, T>;

/// Litre (`1 dm³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", dimension = VOLUME, scale = RootRatio::ratio(1, 1_000))]
pub struct Liter;
/// A volume in litres.
pub type Liters<T = f64> = Quantity<Liter, T>;

prefixed_units! { Liter =>
    Micro: Microliter, Microliters;
    Milli: Milliliter, Milliliters;
    Centi: Centiliter, Centiliters;
    Deci: Deciliter, Deciliters;
    Hecto: Hectoliter, Hectoliters;
}

crate::impl_unit_conversions!(CubicMeter, CubicCentimeter, Liter, Milliliter);

// ─────────────────────────────────────────────────────────────────────────────
// Density
// ─────────────────────────────────────────────────────────────────────────────

/// Kilograms per cubic metre.
pub type KilogramPerCubicMeter = Per<Kilogram, CubicMeter>;
/// A density in kilograms per cubic metre.
pub type KilogramsPerCubicMeter<T = f64> = Quantity<KilogramPerCubicMeter, T>;

/// Grams per cubic centimetre.
pub type GramPerCubicCentimeter = Per<Gram, CubicCentimeter>;
/// A density in grams per cubic centimetre.
pub type GramsPerCubicCentimeter<T = f64> = Quantity<GramPerCubicCentimeter, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DENSITY;
    use crate::units::mass::Kilograms;
    use crate::Unit;
    use approx::assert_relative_eq;

    #[test]
    fn litre_is_cubic_decimetre() {
        assert_eq!(Milliliter::SCALE, CubicCentimeter::SCALE);
        let l: Liters<i32> = CubicMeters::<i32>::new(2).into();
        assert_eq!(l.value(), 2_000);
    }

    #[test]
    fn water_density() {
        assert_eq!(GramPerCubicCentimeter::DIM, DENSITY);
        let rho = Kilograms::new(1.0) / Liters::new(1.0);
        let rho: KilogramsPerCubicMeter = rho.cast();
        assert_relative_eq!(rho.value(), 1_000.0);
        assert_eq!(GramsPerCubicCentimeter::new(1.0), KilogramsPerCubicMeter::new(1_000.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Milliliters::new(250.0)), "250 mL");
        assert_eq!(format!("{}", CubicMeters::new(1.0)), "1 m^3");
    }
}
