//! Control loop - debounce, dispatch, idle sleep.
//!
//! Every cycle asks the debouncer for a press. A press is transmitted,
//! restarts the idle timer and triggers a battery reading for the log.
//! A cycle without a press only checks the idle timer; once it has run
//! out the loop hands over to [`DeepSleep`] and never comes back.
//!
//! ```text
//!            press: send, reset timer
//!            ┌─────┐
//!            ▼     │
//!  start ─► Active ┴──── idle ≥ timeout ───► Sleeping (System OFF)
//!            ▲                                  │
//!            └──────── reset via wake pin ◄─────┘
//! ```

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::battery::{BatterySensor, VoltageMonitor};
use crate::config::{IDLE_TIMEOUT_MS, WAKE_BUTTON};
use crate::input::{InputDebouncer, LogicalButton};
use crate::ir::{IrEmitter, Transmitter};
use crate::power::{DeepSleep, IdleTimer, PowerState};

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// The device's main state machine.
pub struct ControlLoop<P, E, S, C> {
    debouncer: InputDebouncer<P>,
    transmitter: Transmitter<E>,
    monitor: VoltageMonitor<S>,
    clock: C,
    idle: IdleTimer,
}

impl<P, E, S, C> ControlLoop<P, E, S, C>
where
    P: InputPin,
    E: IrEmitter,
    S: BatterySensor,
    C: Clock,
{
    /// Take ownership of the components. The idle timer starts now.
    pub fn new(
        debouncer: InputDebouncer<P>,
        transmitter: Transmitter<E>,
        monitor: VoltageMonitor<S>,
        clock: C,
    ) -> Self {
        let idle = IdleTimer::new(clock.now_ms(), IDLE_TIMEOUT_MS);
        Self {
            debouncer,
            transmitter,
            monitor,
            clock,
            idle,
        }
    }

    pub fn idle_timer(&self) -> &IdleTimer {
        &self.idle
    }

    pub fn transmitter(&self) -> &Transmitter<E> {
        &self.transmitter
    }

    /// Run one poll cycle and report whether to stay awake.
    pub async fn cycle<D: DelayNs>(&mut self, delay: &mut D) -> PowerState {
        if let Some(button) = self.debouncer.poll(delay).await {
            self.dispatch(button).await;
            return PowerState::Active;
        }

        if self.idle.expired(self.clock.now_ms()) {
            PowerState::Sleeping
        } else {
            PowerState::Active
        }
    }

    /// Poll until the idle timeout runs out, then enter deep sleep.
    ///
    /// Never returns: the sleep call powers the chip down and waking
    /// restarts the firmware from scratch.
    pub async fn run<D: DelayNs, W: DeepSleep>(mut self, delay: &mut D, mut deep_sleep: W) -> ! {
        info!("mainloop");
        loop {
            if self.cycle(delay).await == PowerState::Sleeping {
                info!(
                    "Idle since {} ms, going to sleep (wake: {})",
                    self.idle.last_activity_ms(),
                    WAKE_BUTTON.tag()
                );
                deep_sleep.sleep_until_pressed(WAKE_BUTTON);
            }
        }
    }

    async fn dispatch(&mut self, button: LogicalButton) {
        self.transmitter.send(button).await;

        let now = self.clock.now_ms();
        self.idle.activity(now);
        info!("did_press, at {} ms", now);

        let volts = self.monitor.read_voltage().await;
        info!("Battery: {} V", volts);
    }
}
