//! Predefined unit modules grouped by dimension.
//!
//! Every unit is a zero-sized marker declared with `#[derive(Unit)]`, next to a
//! `Quantity` alias named after its plural (`Meter` / `Meters`). Units whose plural is
//! invariant get a descriptive alias instead (`Hertz` / `Frequency`).
//!
//! ## Modules
//!
//! - [`length`], [`time`], [`mass`], [`current`], [`temperature`], [`amount`]: the SI base
//!   quantities plus common non-SI units (miles, days, pounds, degrees Fahrenheit).
//! - [`angle`]: plane and solid angles, angular velocity.
//! - [`photometry`]: candela, lumen, lux.
//! - [`data`]: bits, bytes, binary prefixes and data rates.
//! - [`area`], [`volume`]: squared and cubed lengths, hectares, litres, densities.
//! - [`velocity`]: speeds and accelerations built as `Per<Length, Time>`.
//! - [`frequency`]: hertz and its square root.
//! - [`force`], [`energy`], [`power`], [`pressure`]: mechanics.
//! - [`electromagnetism`]: volts, ohms, farads, teslas and noise densities.
//! - [`chemical`]: molar energy, catalytic activity, molarity.
//! - [`thermal`]: heat capacity and thermal resistance.
//! - [`unitless`]: percent, permille and parts-per notations.

pub mod amount;
pub mod angle;
pub mod area;
pub mod chemical;
pub mod current;
pub mod data;
pub mod electromagnetism;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod photometry;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod thermal;
pub mod time;
pub mod unitless;
pub mod velocity;
pub mod volume;
