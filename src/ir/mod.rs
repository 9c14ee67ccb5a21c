//! Infrared output subsystem.
//!
//! 1. **Codes** - the fixed button → (address, command) table.
//! 2. **NEC** - turns a code into the mark/space pulse train.
//! 3. **Transmitter** - sends the code for a logical button through an
//!    [`IrEmitter`].
//! 4. **Carrier** - PWM compare values for the 38 kHz LED carrier.

pub mod carrier;
pub mod codes;
pub mod nec;
pub mod transmitter;

pub use carrier::Carrier;
pub use codes::code_for;
pub use transmitter::Transmitter;

use crate::error::Error;

/// An NEC address/command pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfraredCode {
    /// 16-bit (extended NEC) or 8-bit device address.
    pub address: u16,
    /// Command byte.
    pub command: u8,
}

impl InfraredCode {
    pub const fn new(address: u16, command: u8) -> Self {
        Self { address, command }
    }
}

/// Hardware that can put one IR code on the air.
///
/// Implementations block (asynchronously) for at most one frame; the
/// caller does not wait for any acknowledgement beyond that.
#[allow(async_fn_in_trait)]
pub trait IrEmitter {
    async fn emit(&mut self, code: InfraredCode) -> Result<(), Error>;
}
