//! Direction classification and reporting

/// Joystick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Inside the dead zone
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
}

/// Classify a reading against the rest position
///
/// The first matching rule wins: right, left, down, up. Diagonals
/// therefore resolve to the horizontal axis.
pub fn classify(x: u16, y: u16, center: (u16, u16), threshold: u16) -> Direction {
    let (cx, cy) = center;
    if x > cx.saturating_add(threshold) {
        Direction::Right
    } else if x < cx.saturating_sub(threshold) {
        Direction::Left
    } else if y > cy.saturating_add(threshold) {
        Direction::Down
    } else if y < cy.saturating_sub(threshold) {
        Direction::Up
    } else {
        Direction::Center
    }
}

/// Turns per-poll classifications into reported directions
///
/// In edge mode a direction is reported once, on the poll where it first
/// appears. In repeat mode a held direction is reported again every time
/// more than `repeat_delay_ms` has passed since the previous report.
#[derive(Debug, Clone, Copy)]
pub struct DirectionTracker {
    repeat_delay_ms: u32,
    last: Direction,
    last_report_ms: u32,
}

impl DirectionTracker {
    /// Create a tracker starting at `Center`
    pub const fn new(repeat_delay_ms: u32, now_ms: u32) -> Self {
        Self {
            repeat_delay_ms,
            last: Direction::Center,
            last_report_ms: now_ms,
        }
    }

    /// Feed one classification, get the direction to report
    pub fn update(&mut self, direction: Direction, allow_repeat: bool, now_ms: u32) -> Direction {
        if !allow_repeat {
            let changed = direction != self.last;
            self.last = direction;
            return if changed { direction } else { Direction::Center };
        }

        if direction == Direction::Center {
            self.last = Direction::Center;
            return Direction::Center;
        }

        let elapsed = now_ms.wrapping_sub(self.last_report_ms);
        if direction != self.last || elapsed > self.repeat_delay_ms {
            self.last = direction;
            self.last_report_ms = now_ms;
            direction
        } else {
            Direction::Center
        }
    }

    /// Last classification seen (edge mode) or reported (repeat mode)
    pub fn last(&self) -> Direction {
        self.last
    }

    /// Forget the held direction
    pub fn reset(&mut self, now_ms: u32) {
        self.last = Direction::Center;
        self.last_report_ms = now_ms;
    }
}
