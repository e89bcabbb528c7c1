//! ST7789 wire protocol vocabulary
//!
//! This crate defines the bytes that travel over the display bus. It knows
//! nothing about pins or SPI peripherals; it only describes *what* is sent.
//!
//! # Transaction Framing
//!
//! Every transaction is two-phase:
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │ COMMAND phase (DC low)       │ DATA phase (DC high)         │
//! │ exactly 1 opcode byte        │ 0..N parameter / pixel bytes │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//! Chip select is asserted around each phase and released after it. The
//! data phase is skipped entirely for commands without parameters.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod command;
pub mod rotation;
pub mod sequence;
pub mod window;

pub use command::{Command, Instruction, MAX_PARAMS};
pub use rotation::Rotation;
pub use sequence::{init_sequence, COLMOD_RGB565, INIT_SEQUENCE_LEN};
pub use window::{address_payload, window_commands, Window};
