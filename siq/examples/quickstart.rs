//! Minimal end-to-end example: mixed prefixes, temperatures and integer conversions.

use siq::{Celsius, Fahrenheit, Kelvins, Kilometers, Meters, Millimeters};

fn main() {
    let d = Kilometers::new(1.0) + Meters::new(1.0) + Millimeters::new(1.0);
    assert_eq!(d, Millimeters::new(1_001_001.0));
    println!("1 km + 1 m + 1 mm = {d}");

    let room = Celsius::new(21.0);
    let f: Fahrenheit = room.cast();
    let k: Kelvins = room.cast();
    println!("{room} = {f:.1} = {k:.2}");

    // integers convert implicitly only in the lossless direction
    let m: Meters<i32> = Kilometers::<i32>::new(3).into();
    let km: Kilometers<i32> = Meters::<i32>::new(3_400).cast();
    println!("{m} / truncated back: {km}");
    assert_eq!(m, Kilometers::<i32>::new(3));
    assert_eq!(km.value(), 3);
}
