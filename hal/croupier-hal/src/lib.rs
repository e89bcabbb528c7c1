//! Croupier Hardware Abstraction Layer
//!
//! Digital pins, SPI and delays come from `embedded-hal` 1.0. This crate
//! adds the two capabilities `embedded-hal` does not cover:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  croupier-drivers (Joystick, St7789)    │
//! └─────────────────────────────────────────┘
//!            │                    │
//!            ▼                    ▼
//! ┌─────────────────────┐  ┌────────────────┐
//! │ croupier-hal        │  │ embedded-hal   │
//! │ AnalogInput,        │  │ SpiBus, pins,  │
//! │ Monotonic           │  │ DelayNs        │
//! └─────────────────────┘  └────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`adc::AnalogInput`] - Single-channel analog reads (joystick axes)
//! - [`clock::Monotonic`] - Millisecond timestamps for debouncing

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;

pub use adc::AnalogInput;
pub use clock::Monotonic;
