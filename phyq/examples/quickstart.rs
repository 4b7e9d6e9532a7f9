//! Minimal end-to-end example: attach magnitudes to references, convert, and name a derived quantity.

use phyq::length::{Kilometer, Length, Meter, PositionVector};
use phyq::mechanics::{KilometersPerHour, Velocity};
use phyq::time::{Duration, Hour};
use phyq::{norm, Kind, Quantity, Vector};

fn main() {
    let d = 3 * Length.in_unit(Kilometer);
    assert_eq!(d.to::<Meter>().value(), 3000);

    let pos = Vector::new([30.0, 20.0, 10.0]) * PositionVector.in_unit(Kilometer);
    let dur = 2.0 * Duration.in_unit(Hour);
    let v: Quantity<Velocity, KilometersPerHour, _> = (pos / dur).quantity_cast();
    assert_eq!(v.value(), Vector::new([15.0, 10.0, 5.0]));

    println!("position {pos}, elapsed {dur}");
    println!("velocity {v}, speed {:.2}", norm(v));
}
