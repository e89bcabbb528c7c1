//! Command opcodes and parameterized commands

use heapless::Vec;

/// Maximum parameter bytes carried by a single register command
///
/// Pixel streams are not commands; they are written as raw data phases
/// after [`Instruction::RAMWR`].
pub const MAX_PARAMS: usize = 4;

/// ST7789 instruction opcodes used by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Instruction {
    /// No operation
    NOP = 0x00,
    /// Software reset
    SWRESET = 0x01,
    /// Sleep in
    SLPIN = 0x10,
    /// Sleep out
    SLPOUT = 0x11,
    /// Normal display mode on
    NORON = 0x13,
    /// Display inversion off
    INVOFF = 0x20,
    /// Display inversion on
    INVON = 0x21,
    /// Display off
    DISPOFF = 0x28,
    /// Display on
    DISPON = 0x29,
    /// Column address set
    CASET = 0x2A,
    /// Row address set
    RASET = 0x2B,
    /// Memory write
    RAMWR = 0x2C,
    /// Memory data access control (orientation)
    MADCTL = 0x36,
    /// Interface pixel format
    COLMOD = 0x3A,
}

impl Instruction {
    /// Opcode byte sent during the command phase
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Look up an instruction from its opcode
    pub fn from_opcode(byte: u8) -> Option<Self> {
        use Instruction::*;
        let instruction = match byte {
            0x00 => NOP,
            0x01 => SWRESET,
            0x10 => SLPIN,
            0x11 => SLPOUT,
            0x13 => NORON,
            0x20 => INVOFF,
            0x21 => INVON,
            0x28 => DISPOFF,
            0x29 => DISPON,
            0x2A => CASET,
            0x2B => RASET,
            0x2C => RAMWR,
            0x36 => MADCTL,
            0x3A => COLMOD,
            _ => return None,
        };
        Some(instruction)
    }
}

/// A register command: opcode, optional parameters, and the settle time
/// the controller needs afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Opcode sent in the command phase
    pub instruction: Instruction,
    /// Parameter bytes sent in the data phase (empty = no data phase)
    pub params: Vec<u8, MAX_PARAMS>,
    /// Mandatory delay after the transaction, in milliseconds
    pub delay_ms: Option<u32>,
}

impl Command {
    /// Command without parameters or delay
    pub fn bare(instruction: Instruction) -> Self {
        Self {
            instruction,
            params: Vec::new(),
            delay_ms: None,
        }
    }

    /// Command with parameter bytes
    ///
    /// Parameters beyond [`MAX_PARAMS`] are dropped; no register used by this
    /// driver takes more than four.
    pub fn with_params(instruction: Instruction, params: &[u8]) -> Self {
        let mut vec = Vec::new();
        for &byte in params.iter().take(MAX_PARAMS) {
            let _ = vec.push(byte);
        }
        Self {
            instruction,
            params: vec,
            delay_ms: None,
        }
    }

    /// Attach a settle delay
    pub fn then_wait(mut self, delay_ms: u32) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    /// Whether this command has a data phase
    pub fn has_data(&self) -> bool {
        !self.params.is_empty()
    }
}
