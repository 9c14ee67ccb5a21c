//! IR LED driver.
//!
//! PWM0 generates the 38 kHz carrier on the LED pin; marks enable the
//! carrier and spaces hold the output low. Burst timing comes from the
//! Embassy timer, which is well inside NEC receiver tolerances.

use embassy_nrf::peripherals;
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use embassy_time::Timer;
use irbridge::ir::{nec, Carrier};
use irbridge::{Error, InfraredCode, IrEmitter};

pub struct NecLed {
    pwm: SimplePwm<'static, peripherals::PWM0>,
}

impl NecLed {
    pub fn new(pwm: peripherals::PWM0, pin: peripherals::P0_13) -> Self {
        let mut pwm = SimplePwm::new_1ch(pwm, pin);
        pwm.set_prescaler(Prescaler::Div1);
        pwm.set_max_duty(Carrier::IR.top());

        let mut led = Self { pwm };
        led.carrier(false);
        led
    }

    // set_duty clears POLARITY: the pin is high for `top - duty` ticks, so
    // off is duty == top, never 0.
    fn carrier(&mut self, on: bool) {
        self.pwm.set_duty(0, Carrier::IR.compare(on));
    }
}

impl IrEmitter for NecLed {
    async fn emit(&mut self, code: InfraredCode) -> Result<(), Error> {
        let frame = nec::encode(code)?;

        for burst in &frame {
            self.carrier(true);
            Timer::after_micros(u64::from(burst.mark_us)).await;
            self.carrier(false);
            if burst.space_us > 0 {
                Timer::after_micros(u64::from(burst.space_us)).await;
            }
        }

        Ok(())
    }
}
