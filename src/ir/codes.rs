//! Button → IR code table for the target TV.
//!
//! All buttons share the TV's extended NEC address; the command byte
//! selects the key.

use super::InfraredCode;
use crate::input::LogicalButton;

/// Extended NEC address of the TV.
pub const TV_ADDRESS: u16 = 0xBF00;

pub const INPUT: InfraredCode = InfraredCode::new(TV_ADDRESS, 0x12);
pub const UP: InfraredCode = InfraredCode::new(TV_ADDRESS, 0x16);
pub const DOWN: InfraredCode = InfraredCode::new(TV_ADDRESS, 0x17);
pub const LEFT: InfraredCode = InfraredCode::new(TV_ADDRESS, 0x19);
pub const RIGHT: InfraredCode = InfraredCode::new(TV_ADDRESS, 0x18);
pub const OK: InfraredCode = InfraredCode::new(TV_ADDRESS, 0x15);

/// IR code sent for `button`.
pub const fn code_for(button: LogicalButton) -> InfraredCode {
    match button {
        LogicalButton::Input => INPUT,
        LogicalButton::Up => UP,
        LogicalButton::Down => DOWN,
        LogicalButton::Left => LEFT,
        LogicalButton::Right => RIGHT,
        LogicalButton::Ok => OK,
    }
}
