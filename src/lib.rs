//! Library interface for irbridge.
//!
//! Everything that decides *what* the remote does lives here and is
//! generic over `embedded-hal` pins/delays and small collaborator traits,
//! so it builds and tests on the host (no embedded hardware required).
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and supplies the nRF52840 implementations from `src/board/`.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

// ═══════════════════════════════════════════════════════════════════════════
// Configuration & Errors
// ═══════════════════════════════════════════════════════════════════════════

pub mod config;
pub mod error;

pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Subsystems
// ═══════════════════════════════════════════════════════════════════════════

pub mod battery;
pub mod control;
pub mod input;
pub mod ir;
pub mod power;
pub mod power_logic;

pub use battery::{BatterySensor, VoltageMonitor};
pub use control::{Clock, ControlLoop};
pub use input::{ButtonPins, InputDebouncer, LogicalButton};
pub use ir::{InfraredCode, IrEmitter, Transmitter};
pub use power::{DeepSleep, IdleTimer, PowerState};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - cross-module
// ═══════════════════════════════════════════════════════════════════════════
