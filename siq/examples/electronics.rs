//! Circuit arithmetic with literal suffixes, square-root units and runtime-checked values.

use siq::{DynQuantity, Literals, Microvolts, Milliwatts, Quantity, QuantityError, Seconds, Volts};
use siq::{Kilohertz, NanovoltsPerRootHertz};

fn main() -> Result<(), QuantityError> {
    // Ohm's law and power
    let i = 5.0.V() / 2.2.kOhm();
    let p: Milliwatts = (5.0.V() * i).cast();
    println!("I = {:.3}, P = {:.2}", i.cast::<siq::Milliamperes>(), p);

    // RC time constant
    let tau: Seconds = (10.0.kOhm() * 47.0.nF()).cast();
    println!("tau = {:.6}", tau);

    // integrated noise: density times the square root of the bandwidth
    let density = NanovoltsPerRootHertz::new(4.0);
    let bandwidth = Quantity::<Kilohertz>::new(20.0);
    let noise: Microvolts = (density * bandwidth.sqrt()).cast();
    println!("noise over {bandwidth} = {noise:.3}");

    // the same check at run time, for units read from data
    let supply = DynQuantity::from(Volts::new(3.3));
    let reading = DynQuantity::from(1_200.0.mV());
    let headroom = supply.checked_sub(reading)?;
    let v: Volts = headroom.to_quantity()?;
    println!("headroom = {v}");

    if let Err(e) = supply.checked_add(DynQuantity::from(1.0.A())) {
        println!("rejected: {e}");
    }
    Ok(())
}
