//! Examples of serializing and deserializing quantities.
//!
//! To run this example with serde support:
//! ```bash
//! cargo run --example serialization --features serde
//! ```

#[cfg(feature = "serde")]
fn main() {
    use phyq::length::{Kilometers, Meter, Meters, PositionVector};
    use phyq::mass::Kilograms;
    use phyq::mechanics::{MetersPerSecondSpeed, MetersPerSecond, Velocity};
    use phyq::time::Seconds;
    use phyq::{Quantity, Vector};
    use serde::{Deserialize, Serialize};

    println!("=== Quantity Serialization Examples ===\n");

    // Bare magnitudes
    println!("1. Basic JSON Serialization:");
    let distance = Meters::new(42.5);
    let json = serde_json::to_string(&distance).unwrap();
    println!("   Distance: {} → JSON: {}", distance, json);
    let restored: Meters = serde_json::from_str(&json).unwrap();
    println!("   JSON: {} → {}", json, restored);
    println!();

    // Vector magnitudes serialize as fixed-length sequences
    println!("2. Vector Quantities:");
    let r: Quantity<PositionVector, Meter, Vector<f64, 3>> = Quantity::new(Vector::new([1.0, -2.0, 0.5]));
    let json = serde_json::to_string(&r).unwrap();
    println!("   Position: {} → JSON: {}", r, json);
    let v: Quantity<Velocity, MetersPerSecond, Vector<i32, 2>> = serde_json::from_str("[3, 4]").unwrap();
    println!("   JSON: [3, 4] → {}", v);
    println!();

    // Structs
    #[derive(Serialize, Deserialize, Debug)]
    struct Measurement {
        distance: Meters,
        time: Seconds,
        mass: Kilograms,
        #[serde(with = "phyq::serde_with_unit")]
        top_speed: MetersPerSecondSpeed,
    }

    println!("3. Serializing Structs with Quantities:");
    let measurement = Measurement {
        distance: Meters::new(100.0),
        time: Seconds::new(9.58),
        mass: Kilograms::new(75.0),
        top_speed: MetersPerSecondSpeed::new(12.4),
    };
    let json = serde_json::to_string_pretty(&measurement).unwrap();
    println!("   Struct to JSON:\n{}", json);
    let restored: Measurement = serde_json::from_str(&json).unwrap();
    println!("   Restored: {:?}", restored);
    println!();

    // The unit must match exactly
    println!("4. Unit Checking with serde_with_unit:");
    let bad = r#"{"distance":1.0,"time":1.0,"mass":1.0,"top_speed":{"value":1.0,"unit":"km/h"}}"#;
    match serde_json::from_str::<Measurement>(bad) {
        Ok(m) => println!("   unexpectedly accepted: {:?}", m),
        Err(e) => println!("   rejected: {}", e),
    }
    println!();

    // Converting first
    println!("5. Converting Units Before Serialization:");
    let distance_km = Kilometers::new(5.0);
    let distance_m = distance_km.to::<Meter>();
    let json = serde_json::to_string(&distance_m).unwrap();
    println!("   {} → {} → JSON: {}", distance_km, distance_m, json);

    println!("=== Important Notes ===");
    println!("• Quantities serialize as their bare magnitude");
    println!("• serde_with_unit records the unit symbol and rejects a different one on input");
    println!("• You must specify the correct unit type when deserializing");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
