//! Deep sleep via nRF52840 System OFF.
//!
//! The wake pin is switched to SENSE-low so pressing it raises DETECT,
//! which brings the chip out of System OFF through a reset.

use embassy_nrf::pac;
use embassy_nrf::pac::gpio::vals;
use irbridge::{ButtonPins, DeepSleep, LogicalButton};

pub struct SystemOff {
    /// Port-0 pin numbers, read from the peripherals `main` binds.
    pins: ButtonPins<u8>,
}

impl SystemOff {
    pub fn new(pins: ButtonPins<u8>) -> Self {
        Self { pins }
    }
}

impl DeepSleep for SystemOff {
    fn sleep_until_pressed(&mut self, wake: LogicalButton) -> ! {
        // Only the wake pin gets SENSE; every other pin keeps its config
        // (pull-ups stay on so no input floats while off).
        let pin = usize::from(*self.pins.get(wake));
        pac::P0.pin_cnf(pin).write(|w| {
            w.set_dir(vals::Dir::INPUT);
            w.set_input(vals::Input::CONNECT);
            w.set_pull(vals::Pull::PULLUP);
            w.set_sense(vals::Sense::LOW);
        });

        pac::POWER.systemoff().write(|w| w.set_systemoff(true));

        // Under a debugger System OFF is only emulated; park the core.
        loop {
            cortex_m::asm::wfe();
        }
    }
}
