//! Debounced click detection for the joystick push switch

/// Debounced switch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPhase {
    /// Released
    #[default]
    Idle,
    /// Held down
    Pressed,
}

/// Switch debouncer that reports short press-and-release cycles
///
/// A level change is accepted only once more than `debounce_ms` has passed
/// since the previous accepted change. Changes inside that window are
/// ignored and do not restart it. A click is reported on the accepted
/// release, and only if the press lasted less than `click_max_ms`.
#[derive(Debug, Clone, Copy)]
pub struct ClickDetector {
    debounce_ms: u32,
    click_max_ms: u32,
    phase: ButtonPhase,
    last_transition_ms: u32,
    press_start_ms: u32,
}

impl ClickDetector {
    /// Create a detector in the released phase
    pub const fn new(debounce_ms: u32, click_max_ms: u32, now_ms: u32) -> Self {
        Self {
            debounce_ms,
            click_max_ms,
            phase: ButtonPhase::Idle,
            last_transition_ms: now_ms,
            press_start_ms: now_ms,
        }
    }

    /// Feed the current switch level; returns true when a click completes
    pub fn update(&mut self, active: bool, now_ms: u32) -> bool {
        let settled = now_ms.wrapping_sub(self.last_transition_ms) > self.debounce_ms;

        match self.phase {
            ButtonPhase::Idle if active && settled => {
                self.phase = ButtonPhase::Pressed;
                self.press_start_ms = now_ms;
                self.last_transition_ms = now_ms;
                false
            }
            ButtonPhase::Pressed if !active && settled => {
                self.phase = ButtonPhase::Idle;
                self.last_transition_ms = now_ms;
                now_ms.wrapping_sub(self.press_start_ms) < self.click_max_ms
            }
            _ => false,
        }
    }

    /// Current debounced phase
    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    /// Whether the switch is (debounced) held down
    pub fn is_pressed(&self) -> bool {
        self.phase == ButtonPhase::Pressed
    }

    /// Return to the released phase
    pub fn reset(&mut self, now_ms: u32) {
        *self = Self::new(self.debounce_ms, self.click_max_ms, now_ms);
    }
}
