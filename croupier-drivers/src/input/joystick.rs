//! Two-axis analog joystick with push switch
//!
//! Owns the two analog channels, the switch line and a millisecond clock,
//! and feeds them into the state machines from
//! [`croupier_core::input`]. Callers poll from their main loop; nothing
//! here blocks except [`Joystick::calibrate`].

use croupier_core::config::{ConfigError, JoystickConfig};
use croupier_core::input::{classify, Calibration, ClickDetector, Direction, DirectionTracker};
use croupier_core::InputError;
use croupier_hal::{AnalogInput, Monotonic};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Interval between calibration samples
const CALIBRATION_SAMPLE_MS: u32 = 10;

/// Joystick input sampler
pub struct Joystick<X, Y, B, C> {
    x: X,
    y: Y,
    button: B,
    clock: C,
    config: JoystickConfig,
    center: (u16, u16),
    tracker: DirectionTracker,
    click: ClickDetector,
    /// Click completed by `is_button_down` and not yet reported
    pending_click: bool,
}

impl<X, Y, B, C> Joystick<X, Y, B, C>
where
    X: AnalogInput,
    Y: AnalogInput,
    B: InputPin,
    C: Monotonic,
{
    /// Create a sampler centered on the configured rest position
    pub fn new(x: X, y: Y, button: B, clock: C, config: JoystickConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let now = clock.now_ms();

        Ok(Self {
            x,
            y,
            button,
            clock,
            center: (config.x_center, config.y_center),
            tracker: DirectionTracker::new(config.repeat_delay_ms, now),
            click: ClickDetector::new(config.debounce_ms, config.click_max_ms, now),
            pending_click: false,
            config,
        })
    }

    /// Raw `(x, y)` conversions
    pub fn get_raw_samples(&mut self) -> Result<(u16, u16), InputError> {
        let x = self.x.read().map_err(|_| InputError::Adc)?;
        let y = self.y.read().map_err(|_| InputError::Adc)?;
        Ok((x, y))
    }

    /// Sample the stick and report a direction event
    ///
    /// Without `allow_repeat` a direction is reported once per deflection;
    /// with it, a held direction repeats every `repeat_delay_ms`.
    pub fn get_direction(&mut self, allow_repeat: bool) -> Result<Direction, InputError> {
        let (x, y) = self.get_raw_samples()?;
        let direction = classify(x, y, self.center, self.config.threshold);
        Ok(self.tracker.update(direction, allow_repeat, self.clock.now_ms()))
    }

    /// Whether a short click completed since the last poll
    pub fn check_for_single_click(&mut self) -> Result<bool, InputError> {
        let clicked = self.sample_button()?;
        Ok(core::mem::take(&mut self.pending_click) || clicked)
    }

    /// Debounced switch level
    pub fn is_button_down(&mut self) -> Result<bool, InputError> {
        if self.sample_button()? {
            self.pending_click = true;
        }
        Ok(self.click.is_pressed())
    }

    fn sample_button(&mut self) -> Result<bool, InputError> {
        let high = self.button.is_high().map_err(|_| InputError::Pin)?;
        let active = high != self.config.button_active_low;
        Ok(self.click.update(active, self.clock.now_ms()))
    }

    /// Average rest readings for `duration_ms` and adopt them as the center
    ///
    /// Samples every 10 ms. The stick must not be touched meanwhile. On
    /// failure the previous center is kept.
    pub fn calibrate<D: DelayNs>(
        &mut self,
        duration_ms: u32,
        delay: &mut D,
    ) -> Result<(u16, u16), InputError> {
        #[cfg(feature = "defmt")]
        defmt::info!("joystick: calibrating for {} ms", duration_ms);

        let mut calibration = Calibration::new();
        let start = self.clock.now_ms();
        while self.clock.now_ms().wrapping_sub(start) < duration_ms {
            let (x, y) = self.get_raw_samples()?;
            calibration.add(x, y);
            delay.delay_ms(CALIBRATION_SAMPLE_MS);
        }

        let center = match calibration.finish() {
            Ok(center) => center,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("joystick: calibration failed, no samples");
                return Err(e);
            }
        };
        self.center = center;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "joystick: center x={} y={} ({} samples)",
            center.0,
            center.1,
            calibration.samples()
        );
        Ok(center)
    }

    /// Calibrate for the configured default window
    pub fn calibrate_default<D: DelayNs>(&mut self, delay: &mut D) -> Result<(u16, u16), InputError> {
        self.calibrate(self.config.calibration_ms, delay)
    }

    /// Current rest position
    pub fn center(&self) -> (u16, u16) {
        self.center
    }

    /// Override the rest position
    pub fn set_center(&mut self, x: u16, y: u16) {
        self.center = (x, y);
    }

    /// Forget held directions and any in-progress press
    pub fn reset_state(&mut self) {
        let now = self.clock.now_ms();
        self.tracker.reset(now);
        self.click.reset(now);
        self.pending_click = false;
    }

    /// Give back the channels, switch and clock
    pub fn release(self) -> (X, Y, B, C) {
        (self.x, self.y, self.button, self.clock)
    }
}
