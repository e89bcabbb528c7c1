//! Address window encoding
//!
//! A window is primed with three transactions:
//! - CASET: `[x0_hi, x0_lo, x1_hi, x1_lo]`
//! - RASET: `[y0_hi, y0_lo, y1_hi, y1_lo]`
//! - RAMWR: no parameters; the pixel stream follows as data
//!
//! For the axis-swapping rotations the logical x bounds land in RASET and
//! the logical y bounds in CASET.

use crate::command::{Command, Instruction};
use crate::rotation::Rotation;

/// Inclusive rectangle of logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Create a window; bounds are reordered so that `x0 <= x1`, `y0 <= y1`
    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// Single-pixel window
    pub fn point(x: u16, y: u16) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        (self.x1 - self.x0) as u32 + 1
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        (self.y1 - self.y0) as u32 + 1
    }

    /// Number of pixels the controller expects after RAMWR
    pub fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }
}

/// Big-endian `[start_hi, start_lo, end_hi, end_lo]` address payload
pub fn address_payload(start: u16, end: u16) -> [u8; 4] {
    let s = start.to_be_bytes();
    let e = end.to_be_bytes();
    [s[0], s[1], e[0], e[1]]
}

/// The CASET, RASET and RAMWR commands that prime `window`
///
/// This is the only place logical coordinates are mapped to controller
/// columns and rows.
pub fn window_commands(window: Window, rotation: Rotation) -> [Command; 3] {
    let (cols, rows) = if rotation.swaps_axes() {
        ((window.y0, window.y1), (window.x0, window.x1))
    } else {
        ((window.x0, window.x1), (window.y0, window.y1))
    };

    [
        Command::with_params(Instruction::CASET, &address_payload(cols.0, cols.1)),
        Command::with_params(Instruction::RASET, &address_payload(rows.0, rows.1)),
        Command::bare(Instruction::RAMWR),
    ]
}
