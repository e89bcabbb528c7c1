//! Joystick input state machines
//!
//! These are pure and timestamp-driven: the caller samples the hardware
//! and passes readings plus a millisecond timestamp. All elapsed-time
//! arithmetic wraps, so a `u32` millisecond counter rolling over is fine.
//!
//! - [`classify`] maps an analog reading to a [`Direction`]
//! - [`DirectionTracker`] applies edge / auto-repeat reporting
//! - [`ClickDetector`] debounces the push switch and reports short clicks
//! - [`Calibration`] averages rest readings into a new center

pub mod calibration;
pub mod click;
pub mod direction;

pub use calibration::Calibration;
pub use click::{ButtonPhase, ClickDetector};
pub use direction::{classify, Direction, DirectionTracker};

/// Input errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// Analog read failed
    Adc,
    /// Switch line could not be read
    Pin,
    /// Calibration finished without a single sample
    CalibrationEmptySample,
}
