//! Canvas geometry
//!
//! Drawing requests arrive as [`Rect`]s with a signed origin so callers can
//! ask for areas that hang off the canvas. They are clipped to a
//! [`Window`] before anything touches the bus.

pub use croupier_protocol::Window;

/// Requested drawing area; may lie partly or fully outside the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersection with a `canvas_width` x `canvas_height` canvas
    ///
    /// Returns `None` when the intersection is empty.
    pub fn clip(&self, canvas_width: u16, canvas_height: u16) -> Option<Window> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let x0 = (self.x as i64).max(0);
        let y0 = (self.y as i64).max(0);
        let x1 = (self.x as i64 + self.width as i64 - 1).min(canvas_width as i64 - 1);
        let y1 = (self.y as i64 + self.height as i64 - 1).min(canvas_height as i64 - 1);

        if x0 > x1 || y0 > y1 {
            return None;
        }

        Some(Window {
            x0: x0 as u16,
            y0: y0 as u16,
            x1: x1 as u16,
            y1: y1 as u16,
        })
    }

    /// Whether the point lies inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (x, y) = (x as i64, y as i64);
        x >= self.x as i64
            && y >= self.y as i64
            && x < self.x as i64 + self.width as i64
            && y < self.y as i64 + self.height as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clip_inside() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.clip(240, 320), Some(Window::new(10, 20, 39, 59)));
    }

    #[test]
    fn test_clip_overhang() {
        let rect = Rect::new(-5, 300, 20, 50);
        assert_eq!(rect.clip(240, 320), Some(Window::new(0, 300, 14, 319)));
    }

    #[test]
    fn test_clip_fully_outside() {
        assert_eq!(Rect::new(240, 0, 10, 10).clip(240, 320), None);
        assert_eq!(Rect::new(0, -10, 10, 10).clip(240, 320), None);
        assert_eq!(Rect::new(-100, -100, 50, 50).clip(240, 320), None);
    }

    #[test]
    fn test_clip_empty() {
        assert_eq!(Rect::new(0, 0, 0, 10).clip(240, 320), None);
        assert_eq!(Rect::new(0, 0, 10, 0).clip(240, 320), None);
        assert_eq!(Rect::new(0, 0, 10, 10).clip(0, 0), None);
    }

    proptest! {
        #[test]
        fn prop_clip_matches_pointwise_intersection(
            x in -400i32..400, y in -400i32..400, w in 0u32..500, h in 0u32..500,
        ) {
            let rect = Rect::new(x, y, w, h);
            let clipped = rect.clip(240, 320);
            // Sample the four corners of the canvas-space intersection
            match clipped {
                Some(win) => {
                    prop_assert!(win.x1 < 240 && win.y1 < 320);
                    prop_assert!(rect.contains(win.x0 as i32, win.y0 as i32));
                    prop_assert!(rect.contains(win.x1 as i32, win.y1 as i32));
                    prop_assert!(win.x0 == 0 || !rect.contains(win.x0 as i32 - 1, win.y0 as i32));
                    prop_assert!(win.y0 == 0 || !rect.contains(win.x0 as i32, win.y0 as i32 - 1));
                    prop_assert!(win.x1 == 239 || !rect.contains(win.x1 as i32 + 1, win.y1 as i32));
                    prop_assert!(win.y1 == 319 || !rect.contains(win.x1 as i32, win.y1 as i32 + 1));
                }
                None => {
                    let overlaps = w > 0 && h > 0
                        && (x as i64) < 240 && (x as i64 + w as i64) > 0
                        && (y as i64) < 320 && (y as i64 + h as i64) > 0;
                    prop_assert!(!overlaps);
                }
            }
        }
    }
}
