//! Dimensions encoded as root-ratios over prime-tagged base dimensions.
//!
//! Every base dimension is assigned a distinct prime. A derived dimension is the product of base
//! dimensions raised to rational exponents, which is exactly a [`RootRatio`]: length² / time
//! becomes `(2² / 3)^(1/1)`, and a noise density such as `V / √Hz` picks up a root. Unique prime
//! factorisation makes two dimensions equal if and only if their canonical tuples are equal.
//!
//! ```rust
//! use siq_core::dimension::*;
//!
//! assert_eq!(LENGTH.multiply(LENGTH), AREA);
//! assert_eq!(ELECTRIC_POTENTIAL.divide(ELECTRIC_CURRENT), ELECTRICAL_RESISTANCE);
//! assert_eq!(FREQUENCY.root(2).multiply(FREQUENCY.root(2)), FREQUENCY);
//! ```

use crate::arithmetic::{is_prime, prime_factors, prime_list};
use crate::{IsQuantity, RootRatio, Unit};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A physical dimension.
///
/// Thin wrapper around [`RootRatio`] so that dimensions and scales cannot be mixed up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dimension(RootRatio);

impl Dimension {
    /// Wraps a raw root-ratio.
    #[inline]
    pub const fn from_root_ratio(ratio: RootRatio) -> Self {
        Self(ratio)
    }

    /// The underlying root-ratio.
    #[inline]
    pub const fn as_root_ratio(&self) -> RootRatio {
        self.0
    }

    /// Product of two dimensions.
    #[inline]
    pub const fn multiply(self, rhs: Self) -> Self {
        Self(self.0.multiply(rhs.0))
    }

    /// Quotient of two dimensions.
    #[inline]
    pub const fn divide(self, rhs: Self) -> Self {
        Self(self.0.divide(rhs.0))
    }

    /// Product of two dimensions, `None` when the encoding overflows.
    pub const fn checked_multiply(self, rhs: Self) -> Option<Self> {
        match self.0.checked_multiply(rhs.0) {
            Some(r) => Some(Self(r)),
            None => None,
        }
    }

    /// Quotient of two dimensions, `None` when the encoding overflows.
    #[inline]
    pub const fn checked_divide(self, rhs: Self) -> Option<Self> {
        self.checked_multiply(rhs.invert())
    }

    /// Reciprocal dimension.
    #[inline]
    pub const fn invert(self) -> Self {
        Self(self.0.invert())
    }

    /// `r`-th root of the dimension.
    #[inline]
    pub const fn root(self, r: u32) -> Self {
        Self(self.0.root(r))
    }

    /// Integer power of the dimension.
    #[inline]
    pub const fn power(self, k: i32) -> Self {
        Self(self.0.power(k))
    }

    /// Equality usable in `const` contexts.
    #[inline]
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.0.const_eq(&other.0)
    }

    /// `true` for [`DIMENSIONLESS`].
    #[inline]
    pub const fn is_dimensionless(&self) -> bool {
        self.0.is_one()
    }

    /// Rational exponent `(numerator, denominator)` of the base dimension tagged by `prime`.
    ///
    /// ```rust
    /// use siq_core::dimension::{DimSystem, VOLTAGE_NOISE_DENSITY};
    ///
    /// let time = DimSystem::PRIMES[2];
    /// // V/√Hz = kg·m²·s⁻³·A⁻¹·s^(1/2)
    /// assert_eq!(VOLTAGE_NOISE_DENSITY.exponent(time), (-5, 2));
    /// ```
    pub const fn exponent(&self, prime: u128) -> (i64, u32) {
        let up = prime_factors(self.0.num()).exponent_of(prime) as i64;
        let down = prime_factors(self.0.den()).exponent_of(prime) as i64;
        let root = self.0.root_index();
        let num = up - down;
        let g = crate::arithmetic::gcd(num.unsigned_abs() as u128, root as u128) as i64;
        if num == 0 {
            (0, 1)
        } else {
            (num / g, (root as i64 / g) as u32)
        }
    }
}

impl fmt::Display for Dimension {
    /// Formats the dimension as a product of base symbols, e.g. `L·M·T^-2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (index, &prime) in DimSystem::PRIMES.iter().enumerate().skip(1) {
            let (num, den) = self.exponent(prime);
            if num == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            f.write_str(BASE_SYMBOLS[index])?;
            match (num, den) {
                (1, 1) => {}
                (n, 1) => write!(f, "^{}", n)?,
                (n, d) => write!(f, "^({}/{})", n, d)?,
            }
        }
        if first {
            // Only primes outside the 11-dimension system are present.
            write!(f, "{}", self.0)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimensional systems
// ─────────────────────────────────────────────────────────────────────────────

/// Base dimension tagged by `prime` (or `1` for dimensionless).
///
/// # Panics
///
/// Panics (fails const evaluation) when `prime` is neither `1` nor prime.
pub const fn base_dimension(prime: u128) -> Dimension {
    assert!(prime == 1 || is_prime(prime), "base dimensions must be tagged by primes");
    Dimension(RootRatio::integer(prime))
}

/// A dimensional system with `N` base dimensions (index 0 is dimensionless).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionalSystem<const N: usize>;

impl<const N: usize> DimensionalSystem<N> {
    /// `[1, 2, 3, 5, ...]`, one tag per base dimension.
    pub const PRIMES: [u128; N] = prime_list::<N>();

    /// The base dimension at `index`.
    pub const fn get_base_dimension(index: usize) -> Dimension {
        assert!(index < N, "base dimension index out of range");
        base_dimension(Self::PRIMES[index])
    }
}

/// The 11-dimension system used by the unit catalog.
pub type DimSystem = DimensionalSystem<11>;

const BASE_SYMBOLS: [&str; 11] = ["1", "L", "T", "M", "I", "Θ", "N", "J", "A", "Ω", "D"];

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// No dimension.
pub const DIMENSIONLESS: Dimension = DimSystem::get_base_dimension(0);
/// Length.
pub const LENGTH: Dimension = DimSystem::get_base_dimension(1);
/// Time.
pub const TIME: Dimension = DimSystem::get_base_dimension(2);
/// Mass.
pub const MASS: Dimension = DimSystem::get_base_dimension(3);
/// Electric current.
pub const ELECTRIC_CURRENT: Dimension = DimSystem::get_base_dimension(4);
/// Thermodynamic temperature.
pub const TEMPERATURE: Dimension = DimSystem::get_base_dimension(5);
/// Amount of substance.
pub const AMOUNT_OF_SUBSTANCE: Dimension = DimSystem::get_base_dimension(6);
/// Luminous intensity.
pub const LUMINOUS_INTENSITY: Dimension = DimSystem::get_base_dimension(7);
/// Planar angle, kept apart from dimensionless ratios.
pub const PLANAR_ANGLE: Dimension = DimSystem::get_base_dimension(8);
/// Solid angle.
pub const SOLID_ANGLE: Dimension = DimSystem::get_base_dimension(9);
/// Quantity of information.
pub const DATA_QUANTITY: Dimension = DimSystem::get_base_dimension(10);

// ─────────────────────────────────────────────────────────────────────────────
// Derived dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Length / time.
pub const SPEED: Dimension = LENGTH.divide(TIME);
/// Speed / time.
pub const ACCELERATION: Dimension = SPEED.divide(TIME);
/// Planar angle / time.
pub const ANGULAR_VELOCITY: Dimension = PLANAR_ANGLE.divide(TIME);
/// Mass · speed.
pub const MOMENTUM: Dimension = MASS.multiply(SPEED);
/// Length².
pub const AREA: Dimension = LENGTH.multiply(LENGTH);
/// Length³.
pub const VOLUME: Dimension = AREA.multiply(LENGTH);
/// Mass · acceleration.
pub const FORCE: Dimension = MASS.multiply(ACCELERATION);
/// Force · speed.
pub const POWER: Dimension = FORCE.multiply(SPEED);
/// Power · time.
pub const ENERGY: Dimension = POWER.multiply(TIME);
/// Force / area.
pub const PRESSURE: Dimension = FORCE.divide(AREA);
/// 1 / time.
pub const FREQUENCY: Dimension = TIME.invert();
/// Data / time.
pub const DATA_RATE: Dimension = DATA_QUANTITY.divide(TIME);
/// Power / current.
pub const ELECTRIC_POTENTIAL: Dimension = POWER.divide(ELECTRIC_CURRENT);
/// Current · time.
pub const ELECTRIC_CHARGE: Dimension = ELECTRIC_CURRENT.multiply(TIME);
/// Power / current².
pub const ELECTRICAL_RESISTANCE: Dimension =
    POWER.divide(ELECTRIC_CURRENT.multiply(ELECTRIC_CURRENT));
/// 1 / resistance.
pub const ELECTRICAL_CONDUCTANCE: Dimension = ELECTRICAL_RESISTANCE.invert();
/// Charge / potential.
pub const CAPACITANCE: Dimension = ELECTRIC_CHARGE.divide(ELECTRIC_POTENTIAL);
/// Resistance · time.
pub const INDUCTANCE: Dimension = ELECTRICAL_RESISTANCE.multiply(TIME);
/// Potential · time / area.
pub const MAGNETIC_FLUX_DENSITY: Dimension = ELECTRIC_POTENTIAL.multiply(TIME).divide(AREA);
/// Flux density · area.
pub const MAGNETIC_FLUX: Dimension = MAGNETIC_FLUX_DENSITY.multiply(AREA);
/// Current / √frequency.
pub const CURRENT_NOISE_DENSITY: Dimension = ELECTRIC_CURRENT.divide(FREQUENCY.root(2));
/// Potential / √frequency.
pub const VOLTAGE_NOISE_DENSITY: Dimension = ELECTRIC_POTENTIAL.divide(FREQUENCY.root(2));
/// Energy / amount of substance.
pub const CHEMICAL_POTENTIAL: Dimension = ENERGY.divide(AMOUNT_OF_SUBSTANCE);
/// Amount of substance / time.
pub const CATALYTIC_ACTIVITY: Dimension = AMOUNT_OF_SUBSTANCE.divide(TIME);
/// Amount of substance / volume.
pub const MOLAR_CONCENTRATION: Dimension = AMOUNT_OF_SUBSTANCE.divide(VOLUME);
/// Luminous intensity · solid angle.
pub const LUMINOUS_FLUX: Dimension = LUMINOUS_INTENSITY.multiply(SOLID_ANGLE);
/// Luminous flux / area.
pub const ILLUMINANCE: Dimension = LUMINOUS_FLUX.divide(AREA);
/// Energy / temperature.
pub const HEAT_CAPACITY: Dimension = ENERGY.divide(TEMPERATURE);
/// Temperature / power.
pub const THERMAL_RESISTANCE: Dimension = TEMPERATURE.divide(POWER);
/// Mass / volume.
pub const DENSITY: Dimension = MASS.divide(VOLUME);

// ─────────────────────────────────────────────────────────────────────────────
// Predicates
// ─────────────────────────────────────────────────────────────────────────────

/// `true` when both units share a dimension.
#[inline]
pub const fn is_same_unit_dimension<A: Unit, B: Unit>() -> bool {
    A::DIM.const_eq(&B::DIM)
}

/// `true` when both quantity types share a dimension.
///
/// ```rust
/// use siq_core::dimension::is_same_dimension;
/// use siq_core::units::length::{Kilometers, Meters};
/// use siq_core::units::time::Seconds;
///
/// assert!(is_same_dimension::<Meters, Kilometers<i32>>());
/// assert!(!is_same_dimension::<Meters, Seconds>());
/// ```
#[inline]
pub const fn is_same_dimension<A: IsQuantity, B: IsQuantity>() -> bool {
    is_same_unit_dimension::<A::Unit, B::Unit>()
}

macro_rules! dimension_predicates {
    ($($name:ident => $dim:ident),* $(,)?) => {
        $(
            #[doc = concat!("`true` when `Q` has dimension [`", stringify!($dim), "`].")]
            #[inline]
            pub const fn $name<Q: IsQuantity>() -> bool {
                <Q::Unit as Unit>::DIM.const_eq(&$dim)
            }
        )*
    };
}

dimension_predicates! {
    is_dimensionless => DIMENSIONLESS,
    is_length => LENGTH,
    is_time => TIME,
    is_mass => MASS,
    is_electric_current => ELECTRIC_CURRENT,
    is_temperature => TEMPERATURE,
    is_amount_of_substance => AMOUNT_OF_SUBSTANCE,
    is_luminous_intensity => LUMINOUS_INTENSITY,
    is_planar_angle => PLANAR_ANGLE,
    is_solid_angle => SOLID_ANGLE,
    is_data_quantity => DATA_QUANTITY,
    is_speed => SPEED,
    is_acceleration => ACCELERATION,
    is_angular_velocity => ANGULAR_VELOCITY,
    is_momentum => MOMENTUM,
    is_area => AREA,
    is_volume => VOLUME,
    is_force => FORCE,
    is_power => POWER,
    is_energy => ENERGY,
    is_pressure => PRESSURE,
    is_frequency => FREQUENCY,
    is_data_rate => DATA_RATE,
    is_electric_potential => ELECTRIC_POTENTIAL,
    is_electric_charge => ELECTRIC_CHARGE,
    is_electrical_resistance => ELECTRICAL_RESISTANCE,
    is_electrical_conductance => ELECTRICAL_CONDUCTANCE,
    is_capacitance => CAPACITANCE,
    is_inductance => INDUCTANCE,
    is_magnetic_flux_density => MAGNETIC_FLUX_DENSITY,
    is_magnetic_flux => MAGNETIC_FLUX,
    is_current_noise_density => CURRENT_NOISE_DENSITY,
    is_voltage_noise_density => VOLTAGE_NOISE_DENSITY,
    is_chemical_potential => CHEMICAL_POTENTIAL,
    is_catalytic_activity => CATALYTIC_ACTIVITY,
    is_molar_concentration => MOLAR_CONCENTRATION,
    is_luminous_flux => LUMINOUS_FLUX,
    is_illuminance => ILLUMINANCE,
    is_heat_capacity => HEAT_CAPACITY,
    is_thermal_resistance => THERMAL_RESISTANCE,
    is_density => DENSITY,
}
