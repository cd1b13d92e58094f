//! Derived-unit example: ratios, `Simplify` and dimensionless notations.

use siq::{Kilometers, Meters, Percents, Ppm, Quantity, Seconds, Simplify, Unitless};

fn main() {
    let half = Meters::new(1.0) / Meters::new(2.0);
    let unitless: Quantity<Unitless> = half.simplify();
    assert_eq!(unitless.value(), 0.5);

    // a road climbing 30 m over 1 km
    let grade: Percents = (Meters::new(30.0) / Kilometers::new(1.0)).cast();
    println!("grade = {grade}");
    assert!((grade.value() - 3.0).abs() < 1e-12);

    let drift: Ppm = (Seconds::new(0.0864) / Seconds::new(86_400.0)).cast();
    println!("clock drift = {drift:.1}");
    assert!((drift.value() - 1.0).abs() < 1e-9);
}
