//! Power-on command table
//!
//! The order and settle times below are a hard contract with the panel:
//! dropping or reordering a step leaves the panel dark or scrambled.

use crate::command::{Command, Instruction};
use crate::rotation::Rotation;

/// COLMOD parameter selecting 16 bits per pixel (5-6-5)
pub const COLMOD_RGB565: u8 = 0x55;

/// Number of commands in the power-on table
pub const INIT_SEQUENCE_LEN: usize = 5;

/// Build the power-on command table for `rotation`
///
/// The driver sends these in order, waiting after each command that
/// carries a delay, and then clears the panel.
pub fn init_sequence(rotation: Rotation) -> [Command; INIT_SEQUENCE_LEN] {
    [
        Command::bare(Instruction::SWRESET).then_wait(150),
        Command::bare(Instruction::SLPOUT).then_wait(255),
        Command::with_params(Instruction::COLMOD, &[COLMOD_RGB565]),
        Command::with_params(Instruction::MADCTL, &[rotation.madctl()]),
        Command::bare(Instruction::DISPON).then_wait(100),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_order_and_delays() {
        let seq = init_sequence(Rotation::Portrait);
        let order: [Instruction; INIT_SEQUENCE_LEN] = [
            Instruction::SWRESET,
            Instruction::SLPOUT,
            Instruction::COLMOD,
            Instruction::MADCTL,
            Instruction::DISPON,
        ];
        for (cmd, expected) in seq.iter().zip(order.iter()) {
            assert_eq!(cmd.instruction, *expected);
        }

        assert_eq!(seq[0].delay_ms, Some(150));
        assert_eq!(seq[1].delay_ms, Some(255));
        assert_eq!(seq[2].delay_ms, None);
        assert_eq!(seq[3].delay_ms, None);
        assert_eq!(seq[4].delay_ms, Some(100));
    }

    #[test]
    fn test_init_params() {
        let seq = init_sequence(Rotation::LandscapeFlipped);
        assert!(!seq[0].has_data());
        assert!(!seq[1].has_data());
        assert_eq!(seq[2].params.as_slice(), &[0x55]);
        assert_eq!(seq[3].params.as_slice(), &[0xA0]);
        assert!(!seq[4].has_data());
    }
}
