//! Carrier PWM compare values.
//!
//! The nRF52 PWM drives a channel high for `top - compare` ticks of each
//! period when the POLARITY bit is clear, and `SimplePwm::set_duty` always
//! clears it. A compare equal to `top` therefore holds the output low.

use crate::config::IR_CARRIER_HZ;

/// PWM base clock with `Prescaler::Div1`.
pub const PWM_CLOCK_HZ: u32 = 16_000_000;

/// Counter top and compare values for one carrier period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carrier {
    top: u16,
    high_ticks: u16,
}

impl Carrier {
    /// 38 kHz with the LED lit for a third of each period.
    pub const IR: Carrier = Carrier::new(PWM_CLOCK_HZ, IR_CARRIER_HZ, 3);

    /// Carrier at `carrier_hz` from a `clock_hz` counter, high for
    /// `1 / duty_div` of the period.
    pub const fn new(clock_hz: u32, carrier_hz: u32, duty_div: u16) -> Self {
        let top = (clock_hz / carrier_hz) as u16;
        Self {
            top,
            high_ticks: top / duty_div,
        }
    }

    pub const fn top(&self) -> u16 {
        self.top
    }

    /// Compare value for the carrier on (mark) or off (space/idle).
    pub const fn compare(&self, on: bool) -> u16 {
        if on {
            self.top - self.high_ticks
        } else {
            self.top
        }
    }

    /// Ticks per period the output spends high for a given compare.
    pub const fn high_ticks(&self, compare: u16) -> u16 {
        self.top.saturating_sub(compare)
    }
}
