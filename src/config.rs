//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, calibration values and protocol constants live
//! here so they can be tuned in one place.

use crate::input::LogicalButton;

// Buttons

/// Delay before sampling the buttons at the start of every poll cycle (ms).
pub const SETTLE_DELAY_MS: u32 = 100;

/// Delay between first seeing a button low and confirming it (ms).
pub const CONFIRM_DELAY_MS: u32 = 50;

// Power

/// Time without a dispatched press before entering deep sleep (ms).
pub const IDLE_TIMEOUT_MS: u64 = 5_000;

/// The only button allowed to wake the device from deep sleep.
pub const WAKE_BUTTON: LogicalButton = LogicalButton::Input;

// Battery ADC
//
// volts = raw / ADC_FULL_SCALE * DIVIDER_RATIO * ADC_REFERENCE_VOLTS * CALIBRATION

/// Largest raw value of the 12-bit battery channel.
pub const ADC_FULL_SCALE: u16 = 4095;

/// The battery is measured through a 1:2 resistor divider.
pub const DIVIDER_RATIO: f32 = 2.0;

/// Full-scale input voltage of the ADC channel.
pub const ADC_REFERENCE_VOLTS: f32 = 3.3;

/// Empirical correction measured against a bench meter.
pub const CALIBRATION: f32 = 1.1;

// IR (NEC protocol)

/// Carrier frequency of the IR LED.
pub const IR_CARRIER_HZ: u32 = 38_000;

/// Leader mark (µs).
pub const NEC_LEADER_MARK_US: u16 = 9_000;

/// Leader space (µs).
pub const NEC_LEADER_SPACE_US: u16 = 4_500;

/// Mark preceding every data bit and the stop bit (µs).
pub const NEC_BIT_MARK_US: u16 = 562;

/// Space after the mark for a logical '0' (µs).
pub const NEC_ZERO_SPACE_US: u16 = 562;

/// Space after the mark for a logical '1' (µs).
pub const NEC_ONE_SPACE_US: u16 = 1_687;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button INPUT   → P0.11  (also the System OFF wake pin)
//   Button UP      → P0.12
//   Button DOWN    → P0.24
//   Button LEFT    → P0.25
//   Button RIGHT   → P0.26
//   Button OK      → P0.27
//   IR LED         → P0.13  (PWM0 channel 0)
//   Battery sense  → P0.29  (AIN5, via 1:2 divider)
