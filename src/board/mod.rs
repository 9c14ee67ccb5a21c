//! nRF52840 implementations of the library's hardware traits.
//!
//! Pin assignments follow the map in `irbridge::config`; `main.rs` hands
//! the matching peripherals to the constructors here.

pub mod battery;
pub mod ir_led;
pub mod system_off;

use embassy_time::Instant;
use irbridge::Clock;

/// Milliseconds since boot from the Embassy time driver (RTC1).
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
