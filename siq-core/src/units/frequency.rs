//! Frequency units.
//!
//! [`Hertz`] is `1/s`. Because its plural is invariant, quantities in hertz use the alias
//! [`Frequency`]; prefixed variants follow the same pattern (`Quantity<Megahertz>`).
//!
//! Roots of frequencies are first-class: `sqrt` of a quantity in [`Megahertz`] has scale
//! `1000 Hz^(1/2)`, which is what noise spectral densities are expressed in.
//!
//! ```rust
//! use siq_core::units::frequency::Frequency;
//! use siq_core::units::time::Seconds;
//!
//! let f: Frequency = Seconds::new(0.5).inv().cast();
//! assert_eq!(f.value(), 2.0);
//! ```

use crate::dimension::FREQUENCY;
use crate::macros::prefixed_units;
use crate::{Quantity, Root};
use siq_derive::Unit;

/// Hertz (`1/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", dimension = FREQUENCY)]
pub struct Hertz;
/// A quantity measured in hertz.
pub type Frequency<T = f64> = Quantity<Hertz, T>;
/// One hertz.
pub const HZ: Frequency = Frequency::new(1.0);

prefixed_units! { Hertz =>
    Femto: Femtohertz;
    Pico: Picohertz;
    Nano: Nanohertz;
    Micro: Microhertz;
    Milli: Millihertz;
    Kilo: Kilohertz;
    Mega: Megahertz;
    Giga: Gigahertz;
    Tera: Terahertz;
}

/// Square root of a hertz, the denominator of noise densities.
pub type RootHertz = Root<Hertz, 2>;

crate::impl_unit_conversions!(Hertz, Millihertz, Kilohertz, Megahertz, Gigahertz);
