//! Display controller drivers

pub mod st7789;

pub use st7789::{DriverState, Lines, NoPin, St7789};
