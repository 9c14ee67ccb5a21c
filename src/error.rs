//! Unified error type for irbridge.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type returned by the hardware collaborators.
///
/// None of these stop the control loop: the loop logs them and moves on
/// to the next poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // IR
    /// The emitter could not play the frame.
    Emit,

    // Battery
    /// The ADC did not produce a sample.
    Sensor,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}
