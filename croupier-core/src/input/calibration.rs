//! Rest-position calibration

use super::InputError;

/// Running mean of rest readings on both axes
#[derive(Debug, Clone, Copy, Default)]
pub struct Calibration {
    sum_x: u64,
    sum_y: u64,
    samples: u32,
}

impl Calibration {
    pub const fn new() -> Self {
        Self {
            sum_x: 0,
            sum_y: 0,
            samples: 0,
        }
    }

    /// Add one `(x, y)` reading
    pub fn add(&mut self, x: u16, y: u16) {
        self.sum_x += u64::from(x);
        self.sum_y += u64::from(y);
        self.samples = self.samples.saturating_add(1);
    }

    /// Number of readings so far
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Integer mean of the readings as the new `(x, y)` center
    pub fn finish(&self) -> Result<(u16, u16), InputError> {
        if self.samples == 0 {
            return Err(InputError::CalibrationEmptySample);
        }
        let n = u64::from(self.samples);
        Ok(((self.sum_x / n) as u16, (self.sum_y / n) as u16))
    }
}
