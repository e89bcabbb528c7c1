//! Board-agnostic core logic for the Croupier display and joystick
//!
//! This crate contains everything that does not depend on a specific bus
//! or pin implementation:
//!
//! - Packed 16-bit color and canvas geometry (clipping)
//! - The [`Panel`](traits::Panel) trait implemented by display drivers,
//!   including chunked solid fills
//! - Configuration types and the optional TOML loader
//! - Input state machines: direction tracking and click debouncing

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod color;
pub mod config;
pub mod geometry;
pub mod input;
pub mod traits;

pub use color::Rgb565;
pub use geometry::{Rect, Window};
pub use input::{Direction, InputError};
pub use traits::{DisplayError, Panel};

pub use croupier_protocol::Rotation;
