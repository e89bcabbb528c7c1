//! TOML configuration loading
//!
//! ```toml
//! [display]
//! width = 240
//! height = 320
//! rotation = 1
//!
//! [display.bus]
//! frequency_hz = 40000000
//!
//! [joystick]
//! threshold = 600
//! ```
//!
//! `display.width` and `display.height` are required; everything else
//! falls back to the defaults in [`super::types`]. The parsed tree is
//! validated before it is returned.

use serde::Deserialize;

use super::types::{
    BusConfig, ConfigError, CroupierConfig, DisplayConfig, JoystickConfig, ThemeConfig,
};
use crate::color::Rgb565;
use crate::traits::panel::DEFAULT_CHUNK_PIXELS;
use croupier_protocol::Rotation;

#[derive(Deserialize)]
struct RawConfig {
    display: Option<RawDisplay>,
    #[serde(default)]
    joystick: JoystickConfig,
    #[serde(default)]
    theme: ThemeConfig,
}

#[derive(Deserialize)]
struct RawDisplay {
    width: Option<u16>,
    height: Option<u16>,
    rotation: Option<u8>,
    chunk_pixels: Option<u16>,
    dc_line: Option<bool>,
    select_line: Option<bool>,
    reset_line: Option<bool>,
    backlight_line: Option<bool>,
    default_fill: Option<Rgb565>,
    #[serde(default)]
    bus: BusConfig,
}

impl RawDisplay {
    fn resolve(self) -> Result<DisplayConfig, ConfigError> {
        let width = self.width.ok_or(ConfigError::MissingField("display.width"))?;
        let height = self.height.ok_or(ConfigError::MissingField("display.height"))?;

        let rotation = match self.rotation.unwrap_or(0) {
            selector @ 0..=3 => Rotation::from_selector(selector),
            _ => return Err(ConfigError::InvalidValue("display.rotation")),
        };

        let mut display = DisplayConfig::new(width, height).with_rotation(rotation);
        display.chunk_pixels = self.chunk_pixels.unwrap_or(DEFAULT_CHUNK_PIXELS as u16);
        display.dc_line = self.dc_line.unwrap_or(display.dc_line);
        display.select_line = self.select_line.unwrap_or(display.select_line);
        display.reset_line = self.reset_line.unwrap_or(display.reset_line);
        display.backlight_line = self.backlight_line.unwrap_or(display.backlight_line);
        display.default_fill = self.default_fill.unwrap_or(display.default_fill);
        display.bus = self.bus;
        Ok(display)
    }
}

impl CroupierConfig {
    /// Parse and validate a TOML configuration document
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = ::toml::from_str(input).map_err(|_| ConfigError::Parse)?;

        let display = raw
            .display
            .ok_or(ConfigError::MissingField("display"))?
            .resolve()?;

        let config = CroupierConfig {
            display,
            joystick: raw.joystick,
            theme: raw.theme,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_document() {
        let config = CroupierConfig::from_toml("[display]\nwidth = 240\nheight = 320\n").unwrap();
        assert_eq!(config.display, DisplayConfig::new(240, 320));
        assert_eq!(config.joystick, JoystickConfig::default());
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_full_document() {
        let doc = r#"
            [display]
            width = 320
            height = 240
            rotation = 1
            chunk_pixels = 256
            select_line = true
            backlight_line = true
            default_fill = 0xFFFF

            [display.bus]
            frequency_hz = 20000000
            mode = 0

            [joystick]
            x_center = 2000
            threshold = 600
            button_active_low = false

            [theme]
            highlight_background = 0x001F
        "#;
        let config = CroupierConfig::from_toml(doc).unwrap();
        assert_eq!(config.display.rotation, Rotation::Landscape);
        assert_eq!(config.display.chunk_pixels, 256);
        assert!(config.display.select_line);
        assert!(config.display.backlight_line);
        assert!(config.display.dc_line);
        assert_eq!(config.display.default_fill, Rgb565::WHITE);
        assert_eq!(config.display.bus.frequency_hz, 20_000_000);
        assert_eq!(config.display.bus.mode, 0);
        assert_eq!(config.joystick.x_center, 2000);
        assert_eq!(config.joystick.y_center, 2048);
        assert_eq!(config.joystick.threshold, 600);
        assert!(!config.joystick.button_active_low);
        assert_eq!(config.theme.highlight_background, Rgb565::BLUE);
        assert_eq!(config.theme.text, Rgb565::WHITE);
    }

    #[test]
    fn test_missing_dimensions() {
        assert_eq!(
            CroupierConfig::from_toml("[display]\nwidth = 240\n"),
            Err(ConfigError::MissingField("display.height"))
        );
        assert_eq!(
            CroupierConfig::from_toml("[joystick]\nthreshold = 10\n"),
            Err(ConfigError::MissingField("display"))
        );
    }

    #[test]
    fn test_out_of_range_values() {
        assert_eq!(
            CroupierConfig::from_toml("[display]\nwidth = 240\nheight = 320\nrotation = 4\n"),
            Err(ConfigError::InvalidValue("display.rotation"))
        );
        assert_eq!(
            CroupierConfig::from_toml("[display]\nwidth = 240\nheight = 320\nchunk_pixels = 4096\n"),
            Err(ConfigError::InvalidValue("display.chunk_pixels"))
        );
    }

    #[test]
    fn test_malformed_document() {
        assert_eq!(
            CroupierConfig::from_toml("[display\nwidth = "),
            Err(ConfigError::Parse)
        );
    }
}
