//! Hardware driver implementations
//!
//! This crate provides concrete implementations on top of `embedded-hal`
//! and `croupier-hal`:
//!
//! - ST7789 SPI display controller (implements
//!   [`Panel`](croupier_core::Panel))
//! - Two-axis analog joystick with push switch

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod display;
pub mod input;

pub use display::{Lines, NoPin, St7789};
pub use input::Joystick;
