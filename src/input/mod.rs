//! Button input subsystem - six active-low tactile switches.
//!
//! Each switch pulls its pin to ground when pressed; the pins use the
//! internal pull-up so an idle button reads high.
//!
//! ## Components
//!
//! - **LogicalButton**: what a press means, independent of wiring
//! - **ButtonPins**: one pin per logical button, handed over at startup
//! - **InputDebouncer**: per-cycle sampling with settle/confirm delays

pub mod debounce;

pub use debounce::InputDebouncer;

/// Logical buttons on the remote.
///
/// Declaration order is the priority order used when several buttons are
/// held at once: earlier variants win.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalButton {
    /// Source/input select. Also the wake button.
    Input,
    Up,
    Down,
    Left,
    Right,
    Ok,
}

impl LogicalButton {
    /// Every button, highest priority first.
    pub const PRIORITY: [LogicalButton; 6] = [
        LogicalButton::Input,
        LogicalButton::Up,
        LogicalButton::Down,
        LogicalButton::Left,
        LogicalButton::Right,
        LogicalButton::Ok,
    ];

    /// Two-letter tag used in diagnostic output.
    pub const fn tag(self) -> &'static str {
        match self {
            LogicalButton::Input => "IN",
            LogicalButton::Up => "UP",
            LogicalButton::Down => "DN",
            LogicalButton::Left => "LE",
            LogicalButton::Right => "RI",
            LogicalButton::Ok => "OK",
        }
    }
}

/// The six button pins, one field per logical button.
///
/// Taking the pins as named fields (rather than a list) makes the binding
/// total and one-to-one at compile time.
pub struct ButtonPins<P> {
    pub input: P,
    pub up: P,
    pub down: P,
    pub left: P,
    pub right: P,
    pub ok: P,
}

impl<P> ButtonPins<P> {
    /// The pin bound to `button`.
    pub fn get(&self, button: LogicalButton) -> &P {
        match button {
            LogicalButton::Input => &self.input,
            LogicalButton::Up => &self.up,
            LogicalButton::Down => &self.down,
            LogicalButton::Left => &self.left,
            LogicalButton::Right => &self.right,
            LogicalButton::Ok => &self.ok,
        }
    }
}
