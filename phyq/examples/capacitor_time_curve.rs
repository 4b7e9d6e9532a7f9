//! Discharge curve of an RC circuit: `V(t) = V0 · exp(-t / RC)`, printed every millisecond for 50 ms.
//!
//! The voltage is shown in the largest unit in which it is at least one.

use phyq::electromagnetism::{Kiloohms, Microfarads, Microvolts, Millivolts, Nanovolts, Volts};
use phyq::time::{Milliseconds, Seconds};

fn main() {
    println!("phyq capacitor time curve example...");

    let c = Microfarads::new(0.47);
    let v0 = Volts::new(5.0);
    let r = Kiloohms::new(4.7);
    let tau: Seconds = (r * c).quantity_cast().to();

    for ms in 0..=50 {
        let t = Milliseconds::new(f64::from(ms));
        let vt: Volts = v0 * (-(t / tau)).exp().value();

        print!("at {t} voltage is ");
        if vt >= Volts::new(1.0) {
            println!("{vt:.3}");
        } else if vt >= Millivolts::new(1.0) {
            println!("{:.3}", Millivolts::from(vt));
        } else if vt >= Microvolts::new(1.0) {
            println!("{:.3}", Microvolts::from(vt));
        } else {
            println!("{:.3}", Nanovolts::from(vt));
        }
    }
}
