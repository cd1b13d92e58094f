//! Example demonstrating the serde_with_unit helper module.
//!
//! `#[serde(with = "siq::serde_with_unit")]` keeps the unit symbol next to the value on a
//! per-field basis; plain fields serialize as the raw number.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() -> Result<(), serde_json::Error> {
    use serde::{Deserialize, Serialize};
    use siq::{Celsius, Hectopascals, Kilometers, MetersPerSecond};

    #[derive(Serialize, Deserialize, Debug)]
    struct WeatherReport {
        station_id: String,

        #[serde(with = "siq::serde_with_unit")]
        temperature: Celsius,

        #[serde(with = "siq::serde_with_unit")]
        pressure: Hectopascals,

        wind_speed: MetersPerSecond,

        #[serde(with = "siq::serde_with_unit")]
        visibility: Kilometers,
    }

    let report = WeatherReport {
        station_id: "LEBL".to_string(),
        temperature: Celsius::new(22.0),
        pressure: Hectopascals::new(1013.2),
        wind_speed: MetersPerSecond::new(5.5),
        visibility: Kilometers::new(10.0),
    };

    let json = serde_json::to_string_pretty(&report)?;
    println!("Serialized:\n{json}\n");

    let restored: WeatherReport = serde_json::from_str(&json)?;
    println!("Deserialized:");
    println!("  temperature: {}", restored.temperature);
    println!("  pressure:    {}", restored.pressure);
    println!("  wind speed:  {}", restored.wind_speed);
    println!("  visibility:  {}\n", restored.visibility);

    // the symbol is optional on input, but a wrong one is an error
    let bare = r#"{"station_id":"X","temperature":{"value":1.0},"pressure":{"value":990.0},
                   "wind_speed":0.0,"visibility":{"value":3.0}}"#;
    let parsed: WeatherReport = serde_json::from_str(bare)?;
    println!("Without symbols: {}", parsed.visibility);

    let wrong = r#"{"station_id":"X","temperature":{"value":1.0,"unit":"K"},"pressure":{"value":990.0},
                    "wind_speed":0.0,"visibility":{"value":3.0}}"#;
    match serde_json::from_str::<WeatherReport>(wrong) {
        Ok(_) => println!("unexpectedly accepted a kelvin reading"),
        Err(e) => println!("Rejected: {e}"),
    }
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
