//! irbridge - six-button IR remote for nRF52840.
//!
//! Reads six active-low buttons, sends the matching NEC code through an IR
//! LED, and drops into System OFF after 5 s without a press. The Input
//! button wakes the device, which restarts the firmware from here.
//!
//! # Hardware Configuration
//! - **Microcontroller**: nRF52840 (ARM Cortex-M4F)
//! - **Buttons**: P0.11 (Input), P0.12 (Up), P0.24 (Down), P0.25 (Left),
//!   P0.26 (Right), P0.27 (Ok), internal pull-ups
//! - **IR LED**: P0.13 via PWM0 (38 kHz carrier)
//! - **Battery**: P0.29 / AIN5 through a 1:2 divider
//!
//! # Build
//! ```bash
//! cargo build --release --features embedded --target thumbv7em-none-eabihf
//! ```

#![no_std]
#![no_main]

mod board;

use defmt::info;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pin as _, Pull};
use embassy_time::Delay;
use irbridge::{ButtonPins, ControlLoop, InputDebouncer, Transmitter, VoltageMonitor};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Boot");
    let p = embassy_nrf::init(Default::default());

    let monitor = VoltageMonitor::new(board::battery::BatteryAdc::new(p.SAADC, p.P0_29).await);
    info!("Monitor init");

    let transmitter = Transmitter::new(board::ir_led::NecLed::new(p.PWM0, p.P0_13));
    info!("IR init");

    let pin_numbers = ButtonPins {
        input: p.P0_11.pin(),
        up: p.P0_12.pin(),
        down: p.P0_24.pin(),
        left: p.P0_25.pin(),
        right: p.P0_26.pin(),
        ok: p.P0_27.pin(),
    };
    let debouncer = InputDebouncer::new(ButtonPins {
        input: Input::new(p.P0_11, Pull::Up),
        up: Input::new(p.P0_12, Pull::Up),
        down: Input::new(p.P0_24, Pull::Up),
        left: Input::new(p.P0_25, Pull::Up),
        right: Input::new(p.P0_26, Pull::Up),
        ok: Input::new(p.P0_27, Pull::Up),
    });
    info!("CTRL init");

    let control = ControlLoop::new(debouncer, transmitter, monitor, board::UptimeClock);
    control
        .run(&mut Delay, board::system_off::SystemOff::new(pin_numbers))
        .await
}
