//! Configuration type definitions

use crate::color::Rgb565;
use crate::traits::panel::{DEFAULT_CHUNK_PIXELS, MAX_CHUNK_PIXELS};
use croupier_protocol::Rotation;

/// Configuration errors, surfaced at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A required parameter was not supplied
    MissingField(&'static str),
    /// A parameter is out of its accepted range
    InvalidValue(&'static str),
    /// The configuration document could not be parsed
    Parse,
}

/// SPI bus timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct BusConfig {
    /// Clock frequency in Hz
    pub frequency_hz: u32,
    /// SPI mode 0-3 (CPOL/CPHA)
    pub mode: u8,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            frequency_hz: 40_000_000,
            mode: 3,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Logical width in pixels (after rotation)
    pub width: u16,
    /// Logical height in pixels (after rotation)
    pub height: u16,
    /// Panel orientation
    pub rotation: Rotation,
    /// Pixels per streamed transfer
    pub chunk_pixels: u16,
    /// Data/command line wired
    pub dc_line: bool,
    /// Chip-select line wired
    pub select_line: bool,
    /// Hardware reset line wired
    pub reset_line: bool,
    /// Backlight line wired
    pub backlight_line: bool,
    /// Color the panel is cleared to after power-on
    pub default_fill: Rgb565,
    /// Bus timing
    pub bus: BusConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new(240, 320)
    }
}

impl DisplayConfig {
    /// Create a config for a `width` x `height` canvas with default options
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rotation: Rotation::Portrait,
            chunk_pixels: DEFAULT_CHUNK_PIXELS as u16,
            dc_line: true,
            select_line: false,
            reset_line: true,
            backlight_line: false,
            default_fill: Rgb565::BLACK,
            bus: BusConfig {
                frequency_hz: 40_000_000,
                mode: 3,
            },
        }
    }

    /// Set the orientation
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the pixel chunk size
    pub const fn with_chunk_pixels(mut self, chunk_pixels: u16) -> Self {
        self.chunk_pixels = chunk_pixels;
        self
    }

    /// Check ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::InvalidValue("display.width"));
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidValue("display.height"));
        }
        if self.chunk_pixels == 0 || self.chunk_pixels as usize > MAX_CHUNK_PIXELS {
            return Err(ConfigError::InvalidValue("display.chunk_pixels"));
        }
        if self.bus.frequency_hz == 0 {
            return Err(ConfigError::InvalidValue("display.bus.frequency_hz"));
        }
        if self.bus.mode > 3 {
            return Err(ConfigError::InvalidValue("display.bus.mode"));
        }
        Ok(())
    }
}

/// Joystick configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct JoystickConfig {
    /// X axis rest reading
    pub x_center: u16,
    /// Y axis rest reading
    pub y_center: u16,
    /// Deflection needed to leave the dead zone
    pub threshold: u16,
    /// Switch debounce window (ms)
    pub debounce_ms: u32,
    /// Longest hold still reported as a click (ms)
    pub click_max_ms: u32,
    /// Minimum interval between repeated directions (ms)
    pub repeat_delay_ms: u32,
    /// Switch reads low when pressed (pull-up wiring)
    pub button_active_low: bool,
    /// Default calibration window (ms)
    pub calibration_ms: u32,
    /// Full-scale ADC reading
    pub adc_max: u16,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            x_center: 2048,
            y_center: 2048,
            threshold: 800,
            debounce_ms: 50,
            click_max_ms: 300,
            repeat_delay_ms: 150,
            button_active_low: true,
            calibration_ms: 3000,
            adc_max: 4095,
        }
    }
}

impl JoystickConfig {
    /// Check ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adc_max == 0 {
            return Err(ConfigError::InvalidValue("joystick.adc_max"));
        }
        if self.x_center > self.adc_max {
            return Err(ConfigError::InvalidValue("joystick.x_center"));
        }
        if self.y_center > self.adc_max {
            return Err(ConfigError::InvalidValue("joystick.y_center"));
        }
        if self.threshold == 0 || self.threshold > self.adc_max {
            return Err(ConfigError::InvalidValue("joystick.threshold"));
        }
        if self.click_max_ms <= self.debounce_ms {
            return Err(ConfigError::InvalidValue("joystick.click_max_ms"));
        }
        Ok(())
    }
}

/// UI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct ThemeConfig {
    /// Normal text
    pub text: Rgb565,
    /// Screen background
    pub background: Rgb565,
    /// Highlighted text (titles, selected rows)
    pub highlight_text: Rgb565,
    /// Highlighted row / button background
    pub highlight_background: Rgb565,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            text: Rgb565::WHITE,
            background: Rgb565::BLACK,
            highlight_text: Rgb565::GREEN,
            highlight_background: Rgb565::YELLOW,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CroupierConfig {
    /// Display configuration
    pub display: DisplayConfig,
    /// Joystick configuration
    pub joystick: JoystickConfig,
    /// UI colors
    pub theme: ThemeConfig,
}

impl CroupierConfig {
    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.display.validate()?;
        self.joystick.validate()
    }
}
