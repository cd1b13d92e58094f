//! Angle helpers example: wrapping, separation and trigonometry.

use siq::maths::atan2;
use siq::{Arcseconds, Degrees, Meters};

fn main() {
    let a: Degrees = Degrees::new(370.0).wrap_signed();
    assert!((a.value() - 10.0).abs() < 1e-12);

    let s: Degrees = Degrees::new(45.0).signed_separation(Degrees::new(350.0));
    assert!((s.value() - 55.0).abs() < 1e-12);

    let arcsec: Arcseconds = Degrees::new(1.0).into();
    assert!((arcsec.value() - 3600.0).abs() < 1e-9);

    let slope = atan2(Meters::new(1.0), Meters::new(1.0)).cast::<Degrees>();
    println!("slope = {slope:.1}, sin = {:.3}", slope.sin());
    assert!((slope.value() - 45.0).abs() < 1e-12);
}
