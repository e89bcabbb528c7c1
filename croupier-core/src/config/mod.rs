//! Configuration types
//!
//! Construction-time configuration for the display driver, the joystick
//! sampler and the UI theme. With the `toml` feature the whole tree can be
//! loaded from a TOML document.

pub mod types;

#[cfg(feature = "toml")]
pub mod toml;

pub use types::*;
