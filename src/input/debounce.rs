//! Polled button debouncing.
//!
//! One call to [`InputDebouncer::poll`] is one cycle of the control loop:
//!
//! 1. wait [`SETTLE_DELAY_MS`] so contact bounce from any earlier
//!    transition has died down (this is also what keeps the loop from
//!    spinning),
//! 2. scan the pins in priority order and stop at the first one reading low,
//! 3. wait [`CONFIRM_DELAY_MS`] and re-read that pin only.
//!
//! A pin that bounced back high during the confirm window ends the cycle
//! with no press; lower-priority pins are not looked at until the next
//! cycle.

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use super::{ButtonPins, LogicalButton};
use crate::config::{CONFIRM_DELAY_MS, SETTLE_DELAY_MS};

/// A physical pin bound to the logical button it reports.
pub struct ButtonBinding<P> {
    pin: P,
    button: LogicalButton,
}

impl<P: InputPin> ButtonBinding<P> {
    fn new(pin: P, button: LogicalButton) -> Self {
        Self { pin, button }
    }

    /// Logical button this pin reports.
    pub fn button(&self) -> LogicalButton {
        self.button
    }

    /// Active-low read. A failed read counts as released so a flaky pin
    /// can never cause a transmission.
    fn is_pressed(&mut self) -> bool {
        self.pin.is_low().unwrap_or(false)
    }
}

/// Owns the button bindings and turns raw levels into press events.
pub struct InputDebouncer<P> {
    /// Bindings in priority order.
    bindings: [ButtonBinding<P>; 6],
}

impl<P: InputPin> InputDebouncer<P> {
    /// Bind each pin to its button, in [`LogicalButton::PRIORITY`] order.
    pub fn new(pins: ButtonPins<P>) -> Self {
        let ButtonPins {
            input,
            up,
            down,
            left,
            right,
            ok,
        } = pins;

        Self {
            bindings: [
                ButtonBinding::new(input, LogicalButton::Input),
                ButtonBinding::new(up, LogicalButton::Up),
                ButtonBinding::new(down, LogicalButton::Down),
                ButtonBinding::new(left, LogicalButton::Left),
                ButtonBinding::new(right, LogicalButton::Right),
                ButtonBinding::new(ok, LogicalButton::Ok),
            ],
        }
    }

    /// Buttons in the order they are scanned.
    pub fn scan_order(&self) -> impl Iterator<Item = LogicalButton> + '_ {
        self.bindings.iter().map(ButtonBinding::button)
    }

    /// Run one poll cycle and report at most one confirmed press.
    pub async fn poll<D: DelayNs>(&mut self, delay: &mut D) -> Option<LogicalButton> {
        delay.delay_ms(SETTLE_DELAY_MS).await;

        for binding in self.bindings.iter_mut() {
            if !binding.is_pressed() {
                continue;
            }

            // Debounce: wait and re-check the same pin only.
            delay.delay_ms(CONFIRM_DELAY_MS).await;

            return if binding.is_pressed() {
                debug!("Button: {} confirmed", binding.button().tag());
                Some(binding.button())
            } else {
                debug!("Button: {} bounced", binding.button().tag());
                None
            };
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::{Cell, RefCell};
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Debug)]
    struct ReadFault;

    impl embedded_hal::digital::Error for ReadFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Pin that replays scripted reads, then reports `idle` forever.
    /// `Ok(true)` means the pin reads low (pressed).
    #[derive(Clone)]
    struct ScriptedPin {
        reads: Rc<RefCell<VecDeque<Result<bool, ReadFault>>>>,
        count: Rc<Cell<usize>>,
    }

    impl ScriptedPin {
        fn new(script: &[Option<bool>]) -> Self {
            let reads = script
                .iter()
                .map(|r| r.ok_or(ReadFault))
                .collect::<VecDeque<_>>();
            Self {
                reads: Rc::new(RefCell::new(reads)),
                count: Rc::new(Cell::new(0)),
            }
        }

        fn released() -> Self {
            Self::new(&[])
        }

        fn reads(&self) -> usize {
            self.count.get()
        }
    }

    impl ErrorType for ScriptedPin {
        type Error = ReadFault;
    }

    impl InputPin for ScriptedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.count.set(self.count.get() + 1);
            self.reads.borrow_mut().pop_front().unwrap_or(Ok(false))
        }
    }

    /// Delay that records the requested milliseconds without waiting.
    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        async fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    impl CountingDelay {
        fn total_ms(&self) -> u64 {
            self.total_ns / 1_000_000
        }
    }

    fn debouncer(pins: [ScriptedPin; 6]) -> InputDebouncer<ScriptedPin> {
        let [input, up, down, left, right, ok] = pins;
        InputDebouncer::new(ButtonPins {
            input,
            up,
            down,
            left,
            right,
            ok,
        })
    }

    fn released_pins() -> [ScriptedPin; 6] {
        core::array::from_fn(|_| ScriptedPin::released())
    }

    #[test]
    fn scan_order_matches_priority() {
        let deb = debouncer(released_pins());
        let order: Vec<_> = deb.scan_order().collect();
        assert_eq!(order, LogicalButton::PRIORITY);
    }

    #[test]
    fn idle_cycle_only_waits_settle_delay() {
        let mut deb = debouncer(released_pins());
        let mut delay = CountingDelay::default();

        let press = embassy_futures::block_on(deb.poll(&mut delay));

        assert_eq!(press, None);
        assert_eq!(delay.total_ms(), u64::from(SETTLE_DELAY_MS));
    }

    #[test]
    fn held_button_is_confirmed_after_both_delays() {
        let mut pins = released_pins();
        pins[3] = ScriptedPin::new(&[Some(true), Some(true)]);
        let mut deb = debouncer(pins);
        let mut delay = CountingDelay::default();

        let press = embassy_futures::block_on(deb.poll(&mut delay));

        assert_eq!(press, Some(LogicalButton::Left));
        assert_eq!(
            delay.total_ms(),
            u64::from(SETTLE_DELAY_MS + CONFIRM_DELAY_MS)
        );
    }

    #[test]
    fn bounce_does_not_fall_through_to_lower_priority() {
        let mut pins = released_pins();
        // Up bounces back high; Ok is solidly held the whole time.
        pins[1] = ScriptedPin::new(&[Some(true), Some(false)]);
        pins[5] = ScriptedPin::new(&[Some(true), Some(true), Some(true)]);
        let ok_pin = pins[5].clone();
        let mut deb = debouncer(pins);
        let mut delay = CountingDelay::default();

        let press = embassy_futures::block_on(deb.poll(&mut delay));

        assert_eq!(press, None);
        assert_eq!(ok_pin.reads(), 0);
    }

    #[test]
    fn scan_stops_at_first_low_pin() {
        let mut pins = released_pins();
        pins[2] = ScriptedPin::new(&[Some(true), Some(true)]);
        pins[4] = ScriptedPin::new(&[Some(true), Some(true)]);
        let right_pin = pins[4].clone();
        let mut deb = debouncer(pins);
        let mut delay = CountingDelay::default();

        let press = embassy_futures::block_on(deb.poll(&mut delay));

        assert_eq!(press, Some(LogicalButton::Down));
        assert_eq!(right_pin.reads(), 0);
    }

    #[test]
    fn read_error_counts_as_released() {
        let mut pins = released_pins();
        pins[0] = ScriptedPin::new(&[None]);
        let mut deb = debouncer(pins);
        let mut delay = CountingDelay::default();

        let press = embassy_futures::block_on(deb.poll(&mut delay));

        assert_eq!(press, None);
    }

    #[test]
    fn read_error_during_confirm_rejects_press() {
        let mut pins = released_pins();
        pins[0] = ScriptedPin::new(&[Some(true), None]);
        let mut deb = debouncer(pins);
        let mut delay = CountingDelay::default();

        let press = embassy_futures::block_on(deb.poll(&mut delay));

        assert_eq!(press, None);
    }
}
