//! Quantity of data and data rate units.
//!
//! The [`Bit`] is the coherent unit. Decimal prefixes (`kB`, `MB`) and binary prefixes (`KiB`,
//! `MiB`) are both available and compare exactly with each other.
//!
//! ```rust
//! use siq_core::units::data::{Kibibytes, Mebibytes};
//!
//! assert!(Mebibytes::new(1.0) > Kibibytes::new(2.0));
//! ```

use crate::dimension::DATA_QUANTITY;
use crate::macros::prefixed_units;
use crate::units::time::Second;
use crate::{Per, Quantity, RootRatio};
use siq_derive::Unit;

/// Bit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "b", dimension = DATA_QUANTITY)]
pub struct Bit;
/// A quantity measured in bits.
pub type Bits<T = f64> = Quantity<Bit, T>;

prefixed_units! { Bit =>
    Kilo: Kilobit, Kilobits;
    Mega: Megabit, Megabits;
    Giga: Gigabit, Gigabits;
    Tera: Terabit, Terabits;
}

/// Byte (`8 b`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "B", dimension = DATA_QUANTITY, scale = RootRatio::integer(8))]
pub struct Byte;
/// A quantity measured in bytes.
pub type Bytes<T = f64> = Quantity<Byte, T>;

prefixed_units! { Byte =>
    Kilo: Kilobyte, Kilobytes;
    Mega: Megabyte, Megabytes;
    Giga: Gigabyte, Gigabytes;
    Tera: Terabyte, Terabytes;
    Kibi: Kibibyte, Kibibytes;
    Mebi: Mebibyte, Mebibytes;
    Gibi: Gibibyte, Gibibytes;
    Tebi: Tebibyte, Tebibytes;
}

crate::impl_unit_conversions!(Bit, Byte, Kilobyte, Megabyte, Kibibyte, Mebibyte, Gibibyte);

// ─────────────────────────────────────────────────────────────────────────────
// Data rate
// ─────────────────────────────────────────────────────────────────────────────

/// Bits per second.
pub type BitPerSecond = Per<Bit, Second>;
/// A data rate in bits per second.
pub type BitsPerSecond<T = f64> = Quantity<BitPerSecond, T>;
/// Kilobits per second.
pub type KilobitPerSecond = Per<Kilobit, Second>;
/// Megabits per second.
pub type MegabitPerSecond = Per<Megabit, Second>;
/// Gigabits per second.
pub type GigabitPerSecond = Per<Gigabit, Second>;
/// Terabits per second.
pub type TerabitPerSecond = Per<Terabit, Second>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DATA_RATE;
    use crate::units::time::Seconds;
    use crate::Unit;

    #[test]
    fn binary_prefixes() {
        assert_eq!(Kibibyte::SCALE, RootRatio::integer(8 * 1_024));
        assert_eq!(Tebibyte::SCALE, RootRatio::integer(8 << 40));
        assert_eq!(Mebibytes::<i64>::new(1), Kibibytes::<i64>::new(1_024));
        assert!(Mebibytes::new(1.0) > Kibibytes::new(2.0));
    }

    #[test]
    fn decimal_and_binary_compare_exactly() {
        assert!(Kibibytes::<i64>::new(1) > Kilobytes::<i64>::new(1));
        assert_eq!(Kilobytes::<i64>::new(1), Bits::<i64>::new(8_000));
    }

    #[test]
    fn transfer_rate() {
        assert_eq!(MegabitPerSecond::DIM, DATA_RATE);
        let rate = Megabytes::new(10.0) / Seconds::new(2.0);
        let mbps: Quantity<MegabitPerSecond> = rate.cast();
        assert_eq!(mbps.value(), 40.0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Gibibytes::<u64>::new(16)), "16 GiB");
        assert_eq!(format!("{}", Quantity::<GigabitPerSecond>::new(1.0)), "1 Gb/s");
    }
}
