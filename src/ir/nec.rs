//! NEC IR protocol encoder.
//!
//! The NEC protocol uses pulse distance encoding on a 38 kHz carrier:
//!
//! - **Leader**: 9ms mark, 4.5ms space
//! - **Logical '0'**: 562µs mark + 562µs space
//! - **Logical '1'**: 562µs mark + 1.687ms space
//! - **Stop**: 562µs mark
//!
//! # Data Frame Structure
//!
//! ```text
//! [Leader][Byte 0][Byte 1][Command][~Command][Stop]
//!          8 bits  8 bits   8 bits   8 bits
//! ```
//!
//! Bits go out LSB first. For 8-bit addresses bytes 0/1 are the address
//! and its inverse; extended NEC (address > 0xFF) sends the 16-bit
//! address low byte first with no inverse.

use heapless::Vec;

use super::InfraredCode;
use crate::config::{
    NEC_BIT_MARK_US, NEC_LEADER_MARK_US, NEC_LEADER_SPACE_US, NEC_ONE_SPACE_US,
    NEC_ZERO_SPACE_US,
};
use crate::error::Error;

/// Leader + 32 data bits + stop.
pub const FRAME_BURSTS: usize = 34;

/// Carrier on for `mark_us`, then off for `space_us`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Burst {
    pub mark_us: u16,
    pub space_us: u16,
}

/// A complete frame, ready to be played back by an emitter.
pub type Frame = Vec<Burst, FRAME_BURSTS>;

/// The four bytes carried by the frame for `code`.
pub fn frame_bytes(code: InfraredCode) -> [u8; 4] {
    let [lo, hi] = code.address.to_le_bytes();
    let address = if code.address > 0xFF { [lo, hi] } else { [lo, !lo] };
    [address[0], address[1], code.command, !code.command]
}

/// Encode `code` as a NEC frame.
pub fn encode(code: InfraredCode) -> Result<Frame, Error> {
    let mut frame = Frame::new();

    push(&mut frame, NEC_LEADER_MARK_US, NEC_LEADER_SPACE_US)?;

    for byte in frame_bytes(code) {
        for bit in 0..8 {
            let space = if byte & (1 << bit) != 0 {
                NEC_ONE_SPACE_US
            } else {
                NEC_ZERO_SPACE_US
            };
            push(&mut frame, NEC_BIT_MARK_US, space)?;
        }
    }

    push(&mut frame, NEC_BIT_MARK_US, 0)?;

    Ok(frame)
}

/// Total on-air time of `frame` in microseconds.
pub fn frame_duration_us(frame: &[Burst]) -> u32 {
    frame
        .iter()
        .map(|b| u32::from(b.mark_us) + u32::from(b.space_us))
        .sum()
}

fn push(frame: &mut Frame, mark_us: u16, space_us: u16) -> Result<(), Error> {
    frame
        .push(Burst { mark_us, space_us })
        .map_err(|_| Error::BufferOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_bits(frame: &Frame, byte_index: usize) -> [bool; 8] {
        let start = 1 + byte_index * 8;
        core::array::from_fn(|bit| frame[start + bit].space_us == NEC_ONE_SPACE_US)
    }

    #[test]
    fn extended_address_is_sent_low_byte_first() {
        assert_eq!(
            frame_bytes(InfraredCode::new(0xBF00, 0x16)),
            [0x00, 0xBF, 0x16, 0xE9]
        );
    }

    #[test]
    fn short_address_is_followed_by_its_inverse() {
        assert_eq!(
            frame_bytes(InfraredCode::new(0x04, 0x08)),
            [0x04, 0xFB, 0x08, 0xF7]
        );
    }

    #[test]
    fn frame_has_leader_and_stop() {
        let frame = encode(InfraredCode::new(0xBF00, 0x15)).unwrap();
        assert_eq!(frame.len(), FRAME_BURSTS);
        assert_eq!(
            frame[0],
            Burst {
                mark_us: 9_000,
                space_us: 4_500
            }
        );
        assert_eq!(
            frame[FRAME_BURSTS - 1],
            Burst {
                mark_us: 562,
                space_us: 0
            }
        );
        assert!(frame[1..FRAME_BURSTS - 1]
            .iter()
            .all(|b| b.mark_us == NEC_BIT_MARK_US));
    }

    #[test]
    fn bits_go_out_lsb_first() {
        let frame = encode(InfraredCode::new(0xBF00, 0x16)).unwrap();
        // 0x00
        assert_eq!(data_bits(&frame, 0), [false; 8]);
        // 0xBF = 1011_1111
        assert_eq!(
            data_bits(&frame, 1),
            [true, true, true, true, true, true, false, true]
        );
        // 0x16 = 0001_0110
        assert_eq!(
            data_bits(&frame, 2),
            [false, true, true, false, true, false, false, false]
        );
    }

    #[test]
    fn command_inverse_is_complementary() {
        let frame = encode(InfraredCode::new(0xBF00, 0x19)).unwrap();
        let cmd = data_bits(&frame, 2);
        let inv = data_bits(&frame, 3);
        for bit in 0..8 {
            assert_ne!(cmd[bit], inv[bit]);
        }
    }

    #[test]
    fn frame_duration_counts_marks_and_spaces() {
        // 0x00 0xBF 0x16 0xE9 carries 15 ones and 17 zeros.
        let frame = encode(InfraredCode::new(0xBF00, 0x16)).unwrap();
        let expected = 9_000 + 4_500 + 32 * 562 + 15 * 1_687 + 17 * 562 + 562;
        assert_eq!(frame_duration_us(&frame), expected);
    }
}
