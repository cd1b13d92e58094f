//! Area units.

use crate::dimension::AREA;
use crate::units::length::{Centimeter, Kilometer, Meter, Millimeter};
use crate::{Pow, Quantity, RootRatio};
use siq_derive::Unit;

/// Square metre.
pub type SquareMeter = Pow<Meter, 2>;
/// An area in square metres.
pub type SquareMeters<T = f64> = Quantity<SquareMeter, T>;

/// Square millimetre.
pub type SquareMillimeter = Pow<Millimeter, 2>;
/// An area in square millimetres.
pub type SquareMillimeters<T = f64> = Quantity<SquareMillimeter, T>;

/// Square centimetre.
pub type SquareCentimeter = Pow<Centimeter, 2>;
/// An area in square centimetres.
pub type SquareCentimeters<T = f64> = Quantity<SquareCentimeter, T>;

/// Square kilometre.
pub type SquareKilometer = Pow<Kilometer, 2>;
/// An area in square kilometres.
pub type SquareKilometers<T = f64> = Quantity<SquareKilometer, T>;

/// Are (`100 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "a", dimension = AREA, scale = RootRatio::integer(100))]
pub struct Are;
/// An area in ares.
pub type Ares<T = f64> = Quantity<Are, T>;

/// Hectare (`10_000 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ha", dimension = AREA, scale = RootRatio::integer(10_000))]
pub struct Hectare;
/// An area in hectares.
pub type Hectares<T = f64> = Quantity<Hectare, T>;

crate::impl_unit_conversions!(SquareMeter, SquareKilometer, Are, Hectare);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometers, Meters};
    use crate::Unit;

    #[test]
    fn square_kilometer_scale() {
        assert_eq!(SquareKilometer::SCALE, RootRatio::integer(1_000_000));
        assert_eq!(SquareKilometer::DIM, AREA);
    }

    #[test]
    fn product_of_lengths_is_an_area() {
        let a = Meters::new(100.0) * Meters::new(100.0);
        assert_eq!(a, Hectares::new(1.0));
        let field = Kilometers::new(1.0) * Meters::new(500.0);
        assert_eq!(field, Hectares::new(50.0));
    }

    #[test]
    fn integer_hectares_to_ares() {
        let a: Ares<i32> = Hectares::<i32>::new(3).into();
        assert_eq!(a.value(), 300);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", SquareKilometers::new(2.0)), "2 km^2");
    }
}
