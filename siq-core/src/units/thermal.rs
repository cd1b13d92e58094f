//! Heat capacity and thermal resistance.
//!
//! These are quotients involving a temperature. [`Per`] drops the offset, so they measure
//! temperature differences and are only meaningful with kelvin-sized intervals.

use crate::units::energy::Joule;
use crate::units::mass::Kilogram;
use crate::units::power::Watt;
use crate::units::temperature::Kelvin;
use crate::{Per, Prod, Quantity};

/// Joules per kelvin.
pub type JoulePerKelvin = Per<Joule, Kelvin>;
/// A heat capacity in joules per kelvin.
pub type JoulesPerKelvin<T = f64> = Quantity<JoulePerKelvin, T>;

/// Joules per kilogram kelvin.
pub type JoulePerKilogramKelvin = Per<Joule, Prod<Kilogram, Kelvin>>;
/// A specific heat capacity in joules per kilogram kelvin.
pub type JoulesPerKilogramKelvin<T = f64> = Quantity<JoulePerKilogramKelvin, T>;

/// Kelvins per watt.
pub type KelvinPerWatt = Per<Kelvin, Watt>;
/// A thermal resistance in kelvins per watt.
pub type KelvinsPerWatt<T = f64> = Quantity<KelvinPerWatt, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{HEAT_CAPACITY, THERMAL_RESISTANCE};
    use crate::units::energy::Joules;
    use crate::units::mass::Kilograms;
    use crate::units::power::Watts;
    use crate::units::temperature::Kelvins;
    use crate::Unit;

    #[test]
    fn dimensions() {
        assert_eq!(JoulePerKelvin::DIM, HEAT_CAPACITY);
        assert_eq!(KelvinPerWatt::DIM, THERMAL_RESISTANCE);
        assert!(KelvinPerWatt::OFFSET.is_zero());
    }

    #[test]
    fn heat_capacity() {
        let c = Joules::new(100.0) / Kelvins::new(2.0);
        assert_eq!(c, JoulesPerKelvin::new(50.0));
        let cp = JoulesPerKilogramKelvin::new(4_186.0);
        let heat = cp * Kilograms::new(2.0) * Kelvins::new(10.0);
        assert_eq!(heat, Joules::new(83_720.0));
    }

    #[test]
    fn temperature_rise_across_heat_sink() {
        let rise = KelvinsPerWatt::new(2.0) * Watts::new(10.0);
        assert_eq!(rise, Kelvins::new(20.0));
        assert_eq!(format!("{}", KelvinsPerWatt::new(2.0)), "2 K/W");
    }
}
