//! ST7789 display controller (SPI, 16-bit color)
//!
//! The ST7789 takes a one-byte opcode with the data/command line low,
//! followed by parameter or pixel bytes with the line high. Chip select,
//! when wired, is asserted around each phase separately.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──► reset() ──► initialize_display() ──► Ready
//!              ▲                                   │
//!              └──────── bus / line failure ◄──────┘
//! ```
//!
//! Window and pixel calls are refused with
//! [`DisplayError::NotInitialized`] outside the `Ready` state. A failed
//! transfer drops the driver back to `Uninitialized`; the controller's
//! window state is unknown at that point, so the only way back is another
//! reset and init.

use core::convert::Infallible;

use croupier_core::config::{ConfigError, DisplayConfig};
use croupier_core::traits::{DisplayError, Panel};
use croupier_core::Window;
use croupier_protocol::{init_sequence, window_commands, Command};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::spi::SpiBus;

/// Placeholder for a control line that is not wired
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPin;

impl ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Optional control lines
///
/// Each line is either supplied or absent. Absent lines are skipped: no
/// reset pulse without RST, no chip-select framing without CS, and so on.
#[derive(Debug)]
pub struct Lines<DC = NoPin, CS = NoPin, RST = NoPin, BL = NoPin> {
    /// Data/command select
    pub dc: Option<DC>,
    /// Chip select (active low)
    pub cs: Option<CS>,
    /// Hardware reset (active low)
    pub rst: Option<RST>,
    /// Backlight enable
    pub bl: Option<BL>,
}

impl Lines {
    /// No lines wired
    pub const fn none() -> Self {
        Self {
            dc: None,
            cs: None,
            rst: None,
            bl: None,
        }
    }
}

impl<DC, CS, RST, BL> Lines<DC, CS, RST, BL> {
    /// Supply the data/command line
    pub fn with_dc<P: OutputPin>(self, pin: P) -> Lines<P, CS, RST, BL> {
        Lines {
            dc: Some(pin),
            cs: self.cs,
            rst: self.rst,
            bl: self.bl,
        }
    }

    /// Supply the chip-select line
    pub fn with_cs<P: OutputPin>(self, pin: P) -> Lines<DC, P, RST, BL> {
        Lines {
            dc: self.dc,
            cs: Some(pin),
            rst: self.rst,
            bl: self.bl,
        }
    }

    /// Supply the reset line
    pub fn with_rst<P: OutputPin>(self, pin: P) -> Lines<DC, CS, P, BL> {
        Lines {
            dc: self.dc,
            cs: self.cs,
            rst: Some(pin),
            bl: self.bl,
        }
    }

    /// Supply the backlight line
    pub fn with_bl<P: OutputPin>(self, pin: P) -> Lines<DC, CS, RST, P> {
        Lines {
            dc: self.dc,
            cs: self.cs,
            rst: self.rst,
            bl: Some(pin),
        }
    }

    /// Check that every line the configuration declares was supplied
    fn check(&self, config: &DisplayConfig) -> Result<(), ConfigError> {
        if config.dc_line && self.dc.is_none() {
            return Err(ConfigError::MissingField("display.dc_line"));
        }
        if config.select_line && self.cs.is_none() {
            return Err(ConfigError::MissingField("display.select_line"));
        }
        if config.reset_line && self.rst.is_none() {
            return Err(ConfigError::MissingField("display.reset_line"));
        }
        if config.backlight_line && self.bl.is_none() {
            return Err(ConfigError::MissingField("display.backlight_line"));
        }
        Ok(())
    }
}

/// Driver lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverState {
    /// Power-on, or after a failed transfer
    Uninitialized,
    /// Reset pulse done, waiting for the init table
    Reset,
    /// Accepting window and pixel traffic
    Ready,
}

/// Data/command level for one transfer phase
#[derive(Clone, Copy)]
enum Phase {
    Command,
    Data,
}

/// ST7789 driver
pub struct St7789<SPI, D, DC = NoPin, CS = NoPin, RST = NoPin, BL = NoPin> {
    spi: SPI,
    delay: D,
    lines: Lines<DC, CS, RST, BL>,
    config: DisplayConfig,
    state: DriverState,
}

impl<SPI, D, DC, CS, RST, BL> St7789<SPI, D, DC, CS, RST, BL>
where
    SPI: SpiBus<u8>,
    D: DelayNs,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Create a driver
    ///
    /// Validates `config` and checks that the declared lines were supplied.
    /// Nothing is sent until [`reset`](Self::reset).
    pub fn new(
        spi: SPI,
        delay: D,
        lines: Lines<DC, CS, RST, BL>,
        config: DisplayConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        lines.check(&config)?;

        Ok(Self {
            spi,
            delay,
            lines,
            config,
            state: DriverState::Uninitialized,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Driver configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Drive idle levels and pulse the reset line
    ///
    /// Idle: RST high, DC low, CS high, BL high. The pulse is high 100 ms,
    /// low 100 ms, high 200 ms; without a reset line only the idle levels
    /// are driven.
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("st7789: reset");

        self.state = DriverState::Uninitialized;
        let result = self.pulse_reset();
        self.guard(result)?;
        self.state = DriverState::Reset;
        Ok(())
    }

    fn pulse_reset(&mut self) -> Result<(), DisplayError> {
        drive(&mut self.lines.dc, false)?;
        drive(&mut self.lines.cs, true)?;
        drive(&mut self.lines.bl, true)?;

        if let Some(rst) = self.lines.rst.as_mut() {
            rst.set_high().map_err(|_| DisplayError::Pin)?;
            self.delay.delay_ms(100);
            rst.set_low().map_err(|_| DisplayError::Pin)?;
            self.delay.delay_ms(100);
            rst.set_high().map_err(|_| DisplayError::Pin)?;
            self.delay.delay_ms(200);
        }
        Ok(())
    }

    /// Run the power-on command table and clear to the default color
    ///
    /// Requires a preceding [`reset`](Self::reset).
    pub fn initialize_display(&mut self) -> Result<(), DisplayError> {
        if self.state != DriverState::Reset {
            return Err(DisplayError::NotInitialized);
        }

        for command in init_sequence(self.config.rotation).iter() {
            let result = self.send(command);
            self.guard(result)?;
        }
        self.state = DriverState::Ready;

        let (width, height) = self.size();
        let full = Window::new(0, 0, width - 1, height - 1);
        self.fill_window(full, self.config.default_fill)?;

        #[cfg(feature = "defmt")]
        defmt::info!("st7789: ready {}x{}", width, height);
        Ok(())
    }

    /// Switch the backlight; no-op without a backlight line
    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        let result = drive(&mut self.lines.bl, on);
        self.guard(result)
    }

    /// Give back the bus, delay and lines
    pub fn release(self) -> (SPI, D, Lines<DC, CS, RST, BL>) {
        (self.spi, self.delay, self.lines)
    }

    /// Send one command: opcode, optional parameters, optional settle time
    fn send(&mut self, command: &Command) -> Result<(), DisplayError> {
        self.transfer(Phase::Command, &[command.instruction.opcode()])?;
        if command.has_data() {
            self.transfer(Phase::Data, &command.params)?;
        }
        if let Some(ms) = command.delay_ms {
            self.delay.delay_ms(ms);
        }
        Ok(())
    }

    /// One framed phase: set DC, select, write, flush, deselect
    fn transfer(&mut self, phase: Phase, bytes: &[u8]) -> Result<(), DisplayError> {
        drive(&mut self.lines.dc, matches!(phase, Phase::Data))?;
        drive(&mut self.lines.cs, false)?;
        self.spi.write(bytes).map_err(|_| DisplayError::Bus)?;
        self.spi.flush().map_err(|_| DisplayError::Bus)?;
        drive(&mut self.lines.cs, true)
    }

    /// Drop to `Uninitialized` on any failure
    fn guard<T>(&mut self, result: Result<T, DisplayError>) -> Result<T, DisplayError> {
        if let Err(_e) = &result {
            #[cfg(feature = "defmt")]
            defmt::warn!("st7789: transfer failed: {}", _e);
            self.state = DriverState::Uninitialized;
        }
        result
    }

    fn ensure_ready(&self) -> Result<(), DisplayError> {
        if self.state == DriverState::Ready {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }
}

/// Set an optional line; absent lines succeed silently
fn drive<P: OutputPin>(line: &mut Option<P>, high: bool) -> Result<(), DisplayError> {
    match line {
        Some(pin) if high => pin.set_high().map_err(|_| DisplayError::Pin),
        Some(pin) => pin.set_low().map_err(|_| DisplayError::Pin),
        None => Ok(()),
    }
}

impl<SPI, D, DC, CS, RST, BL> Panel for St7789<SPI, D, DC, CS, RST, BL>
where
    SPI: SpiBus<u8>,
    D: DelayNs,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    fn size(&self) -> (u16, u16) {
        (self.config.width, self.config.height)
    }

    fn chunk_pixels(&self) -> usize {
        self.config.chunk_pixels as usize
    }

    fn set_window(&mut self, window: Window) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        for command in window_commands(window, self.config.rotation).iter() {
            let result = self.send(command);
            self.guard(result)?;
        }
        Ok(())
    }

    fn write_pixels(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.ensure_ready()?;
        let result = self.transfer(Phase::Data, bytes);
        self.guard(result)
    }
}
