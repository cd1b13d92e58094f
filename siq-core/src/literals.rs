//! Literal-style constructors on `f64`.
//!
//! [`Literals`] is a thin layer over [`Quantity::new`](crate::Quantity::new) that reads like a
//! unit suffix:
//!
//! ```rust
//! use siq_core::Literals;
//! use siq_core::units::electromagnetism::Volts;
//!
//! let u = 10.0.kOhm() * 0.5.mA();
//! assert_eq!(u, Volts::new(5.0));
//! assert_eq!(0.0.degC(), 273.15.K());
//! ```
//!
//! Method names follow the unit symbols. Where a symbol clashes with an inherent `f64`
//! method the name is spelled out (`minute` rather than `min`).

use crate::units::{
    amount::*, angle::*, area::*, current::*, data::*, electromagnetism::*, energy::*,
    force::*, frequency::*, length::*, mass::*, power::*, pressure::*, temperature::*,
    time::*, velocity::*, volume::*,
};
use crate::Quantity;

macro_rules! literals {
    ($($name:ident => $qty:ty, $what:literal;)*) => {
        /// Unit-suffix constructors for `f64` values.
        #[allow(non_snake_case)]
        pub trait Literals: Sized {
            $(
                #[doc = concat!("`self` ", $what, ".")]
                fn $name(self) -> $qty;
            )*
        }

        impl Literals for f64 {
            $(
                #[inline]
                fn $name(self) -> $qty {
                    <$qty>::new(self)
                }
            )*
        }
    };
}

literals! {
    // length
    nm => Nanometers, "nanometres";
    um => Micrometers, "micrometres";
    mm => Millimeters, "millimetres";
    cm => Centimeters, "centimetres";
    m => Meters, "metres";
    km => Kilometers, "kilometres";
    inch => Inches, "inches";
    ft => Feet, "feet";
    yd => Yards, "yards";
    mi => Miles, "miles";
    nmi => NauticalMiles, "nautical miles";
    au => AstronomicalUnits, "astronomical units";
    ly => LightYears, "light years";
    pc => Parsecs, "parsecs";

    // time
    ns => Nanoseconds, "nanoseconds";
    us => Microseconds, "microseconds";
    ms => Milliseconds, "milliseconds";
    s => Seconds, "seconds";
    minute => Minutes, "minutes";
    h => Hours, "hours";
    day => Days, "days";

    // mass
    ug => Micrograms, "micrograms";
    mg => Milligrams, "milligrams";
    g => Grams, "grams";
    kg => Kilograms, "kilograms";
    tonne => Tonnes, "tonnes";
    lb => Pounds, "pounds";

    // temperature
    mK => Millikelvins, "millikelvins";
    K => Kelvins, "kelvins";
    degC => Celsius, "degrees Celsius";
    degF => Fahrenheit, "degrees Fahrenheit";

    // angle
    mrad => Milliradians, "milliradians";
    rad => Radians, "radians";
    deg => Degrees, "degrees";
    arcmin => Arcminutes, "minutes of arc";
    arcsec => Arcseconds, "seconds of arc";

    // frequency
    mHz => Quantity<Millihertz>, "millihertz";
    Hz => Frequency, "hertz";
    kHz => Quantity<Kilohertz>, "kilohertz";
    MHz => Quantity<Megahertz>, "megahertz";
    GHz => Quantity<Gigahertz>, "gigahertz";

    // electricity
    pA => Picoamperes, "picoamperes";
    nA => Nanoamperes, "nanoamperes";
    uA => Microamperes, "microamperes";
    mA => Milliamperes, "milliamperes";
    A => Amperes, "amperes";
    nV => Nanovolts, "nanovolts";
    uV => Microvolts, "microvolts";
    mV => Millivolts, "millivolts";
    V => Volts, "volts";
    kV => Kilovolts, "kilovolts";
    mOhm => Milliohms, "milliohms";
    Ohm => Ohms, "ohms";
    kOhm => Kiloohms, "kiloohms";
    MOhm => Megaohms, "megaohms";
    S => Conductance, "siemens";
    pF => Picofarads, "picofarads";
    nF => Nanofarads, "nanofarads";
    uF => Microfarads, "microfarads";
    F => Farads, "farads";
    uH => Microhenries, "microhenries";
    mH => Millihenries, "millihenries";
    H => Henries, "henries";
    C => Coulombs, "coulombs";
    mAh => MilliampereHours, "milliampere-hours";
    mT => Milliteslas, "milliteslas";
    T => Teslas, "teslas";

    // mechanics
    mps => MetersPerSecond, "metres per second";
    kmph => KilometersPerHour, "kilometres per hour";
    kn => Knots, "knots";
    N => Newtons, "newtons";
    kN => Kilonewtons, "kilonewtons";
    mW => Milliwatts, "milliwatts";
    W => Watts, "watts";
    kW => Kilowatts, "kilowatts";
    MW => Megawatts, "megawatts";
    J => Joules, "joules";
    kJ => Kilojoules, "kilojoules";
    Wh => WattHours, "watt-hours";
    kWh => KilowattHours, "kilowatt-hours";
    cal => Calories, "calories";
    kcal => Kilocalories, "kilocalories";
    eV => ElectronVolts, "electronvolts";
    Pa => Pascals, "pascals";
    hPa => Hectopascals, "hectopascals";
    kPa => Kilopascals, "kilopascals";
    bar => Bars, "bars";
    mbar => Millibars, "millibars";
    mmHg => MillimetersOfMercury, "millimetres of mercury";
    torr => MillimetersOfMercury, "torr";
    psi => PoundsPerSquareInch, "pounds per square inch";
    atm => Atmospheres, "standard atmospheres";

    // geometry
    m2 => SquareMeters, "square metres";
    ha => Hectares, "hectares";
    m3 => CubicMeters, "cubic metres";
    mL => Milliliters, "millilitres";
    L => Liters, "litres";

    // amount
    mmol => Millimoles, "millimoles";
    mol => Moles, "moles";

    // data
    b => Bits, "bits";
    B => Bytes, "bytes";
    kB => Kilobytes, "kilobytes";
    MB => Megabytes, "megabytes";
    GB => Gigabytes, "gigabytes";
    kiB => Kibibytes, "kibibytes";
    MiB => Mebibytes, "mebibytes";
    GiB => Gibibytes, "gibibytes";
    bps => BitsPerSecond, "bits per second";
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lengths_and_times() {
        assert_eq!(1.0.km() + 1.0.m() + 1.0.mm(), 1_001_001.0.mm());
        assert_eq!(1.5.minute(), 90.0.s());
        assert_eq!(2.0.h(), 120.0.minute());
        assert_eq!(12.0.inch(), 1.0.ft());
    }

    #[test]
    fn temperatures() {
        assert_eq!(0.0.degC(), 273.15.K());
        let c: Celsius = 0.0.degF().cast();
        assert_relative_eq!(c.value(), -17.777_777_777_8, epsilon = 1e-9);
        assert_eq!(10.0.degC() - 15.0.degC(), (-5.0).degC());
    }

    #[test]
    fn electronics() {
        assert_eq!(10.0.V() * 100.0.mA(), 1.0.W());
        assert_eq!(10.0.kOhm() * 100.0.uF(), 1.0.s());
        assert_eq!(1.0.mT(), Quantity::<Gauss>::new(10.0));
        assert_eq!(2.0.A() * 1.0.h(), 2_000.0.mAh());
    }

    #[test]
    fn pressures() {
        assert_eq!(1.0.atm(), 760.0.mmHg());
        assert_eq!(1.0.mmHg(), 1.0.torr());
        assert_eq!(1.0.bar(), 1_000.0.hPa());
        let pa: Pascals = 1.0.psi().into();
        assert_relative_eq!(pa.value(), 6_894.76, max_relative = 1e-15);
    }

    #[test]
    fn data() {
        assert!(1.0.MiB() > 1.0.MB());
        assert_eq!(1.0.B(), 8.0.b());
        assert_eq!(1.0.kiB(), 1_024.0.B());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", 2.2.kOhm()), "2.2 kΩ");
        assert_eq!(format!("{}", 433.92.MHz()), "433.92 MHz");
        assert_eq!(format!("{}", 21.0.degC()), "21 °C");
    }
}
