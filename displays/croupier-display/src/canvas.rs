//! Frame compositor
//!
//! [`Canvas`] turns logical drawing calls into windowed panel transfers.
//! Every request is clipped before it reaches the panel, so off-canvas
//! drawing is silently dropped rather than reported.
//!
//! Text is composited into a scratch buffer first: each visible glyph is
//! rasterized once and the whole clipped text region goes out as one
//! window plus one pixel stream.

use croupier_core::geometry::Rect;
use croupier_core::traits::{DisplayError, Panel};
use croupier_core::{Rgb565, Window};

use crate::glyph::{rasterize, TextSize};

/// Default scratch size: 320 px x 16 rows x 2 bytes
pub const DEFAULT_SCRATCH_BYTES: usize = 10240;

/// Drawing surface over a [`Panel`]
pub struct Canvas<P, const N: usize = DEFAULT_SCRATCH_BYTES> {
    panel: P,
    scratch: [u8; N],
    background: Rgb565,
}

impl<P: Panel, const N: usize> Canvas<P, N> {
    /// Wrap `panel` with a black fallback background
    pub fn new(panel: P) -> Self {
        Self {
            panel,
            scratch: [0; N],
            background: Rgb565::BLACK,
        }
    }

    /// Set the color used behind text drawn without an explicit background
    pub fn with_background(mut self, background: Rgb565) -> Self {
        self.background = background;
        self
    }

    pub fn set_background(&mut self, background: Rgb565) {
        self.background = background;
    }

    pub fn background(&self) -> Rgb565 {
        self.background
    }

    /// Canvas size `(width, height)`
    pub fn size(&self) -> (u16, u16) {
        self.panel.size()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Unwrap the panel
    pub fn into_inner(self) -> P {
        self.panel
    }

    fn clip(&self, rect: Rect) -> Option<Window> {
        let (width, height) = self.panel.size();
        rect.clip(width, height)
    }

    /// Fill a rectangle; the part outside the canvas is dropped
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Rgb565,
    ) -> Result<(), DisplayError> {
        match self.clip(Rect::new(x, y, width, height)) {
            Some(window) => self.panel.fill_window(window, color),
            None => Ok(()),
        }
    }

    /// Fill the whole canvas
    pub fn clear(&mut self, color: Rgb565) -> Result<(), DisplayError> {
        let (width, height) = self.panel.size();
        self.fill_rect(0, 0, width as u32, height as u32, color)
    }

    /// Set one pixel; ignored outside the canvas
    pub fn pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), DisplayError> {
        let Some(window) = self.clip(Rect::new(x, y, 1, 1)) else {
            return Ok(());
        };
        self.panel.set_window(window)?;
        self.panel.write_pixels(&color.to_be_bytes())
    }

    /// Draw a single line of text with its top-left cell corner at `(x, y)`
    ///
    /// Cells get `fg` where the glyph is set, otherwise `bg`, or the canvas
    /// background when `bg` is `None`. Returns the x coordinate just past
    /// the last cell, whether or not anything was visible.
    ///
    /// Fails with [`DisplayError::BufferOverflow`] before any bus traffic
    /// when the visible part of the text does not fit the scratch buffer.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Option<Rgb565>,
        size: TextSize,
    ) -> Result<i32, DisplayError> {
        let cell_w = size.cell_width();
        let cell_h = size.cell_height();
        let chars = text.chars().count() as u32;
        let text_width = chars.saturating_mul(cell_w);
        let end_x = (x as i64 + text_width as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32;

        let Some(window) = self.clip(Rect::new(x, y, text_width, cell_h)) else {
            return Ok(end_x);
        };

        let bytes = window.pixel_count() as usize * 2;
        if bytes > N {
            return Err(DisplayError::BufferOverflow);
        }

        let bg = bg.unwrap_or(self.background);
        let fg_bytes = fg.to_be_bytes();
        let bg_bytes = bg.to_be_bytes();
        let stride = window.width() as i64;

        // Offsets of the window inside the text rectangle
        let left = window.x0 as i64 - x as i64;
        let right = window.x1 as i64 - x as i64;
        let top = window.y0 as i64 - y as i64;
        let first_cell = (left / cell_w as i64) as usize;
        let last_cell = (right / cell_w as i64) as usize;

        for (cell, ch) in text
            .chars()
            .enumerate()
            .skip(first_cell)
            .take(last_cell - first_cell + 1)
        {
            let glyph = rasterize(ch, size);
            let cell_x = cell as i64 * cell_w as i64;
            let col_from = left.max(cell_x);
            let col_to = right.min(cell_x + cell_w as i64 - 1);

            for row in 0..window.height() as i64 {
                let glyph_row = (top + row) as u32;
                for col in col_from..=col_to {
                    let on = glyph.is_set((col - cell_x) as u32, glyph_row);
                    let offset = ((row * stride + (col - left)) * 2) as usize;
                    self.scratch[offset..offset + 2]
                        .copy_from_slice(if on { &fg_bytes } else { &bg_bytes });
                }
            }
        }

        self.panel.set_window(window)?;
        self.panel.write_pixels(&self.scratch[..bytes])?;
        Ok(end_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockPanel, Op};
    use proptest::prelude::*;

    fn canvas() -> Canvas<MockPanel> {
        Canvas::new(MockPanel::new(240, 320))
    }

    #[test]
    fn test_fill_rect_inside() {
        let mut c = canvas();
        c.fill_rect(10, 20, 30, 40, Rgb565::RED).unwrap();
        let panel = c.panel();
        assert_eq!(panel.windows(), [Window::new(10, 20, 39, 59)]);
        assert_eq!(panel.writes().iter().sum::<usize>(), 1200);
        assert!(panel.region_is(Window::new(10, 20, 39, 59), Rgb565::RED));
        assert_ne!(panel.at(9, 20), Rgb565::RED);
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut c = canvas();
        c.fill_rect(-10, 310, 50, 50, Rgb565::GREEN).unwrap();
        assert_eq!(c.panel().windows(), [Window::new(0, 310, 39, 319)]);
        assert_eq!(c.panel().writes().iter().sum::<usize>(), 400);
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut c = canvas();
        c.fill_rect(240, 0, 10, 10, Rgb565::GREEN).unwrap();
        c.fill_rect(-20, -20, 20, 20, Rgb565::GREEN).unwrap();
        c.fill_rect(0, 0, 0, 10, Rgb565::GREEN).unwrap();
        assert!(c.panel().ops.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut c = canvas();
        c.clear(Rgb565::BLUE).unwrap();
        assert_eq!(c.panel().windows(), [Window::new(0, 0, 239, 319)]);
        assert_eq!(c.panel().writes().len(), 150);
        assert!(c.panel().region_is(Window::new(0, 0, 239, 319), Rgb565::BLUE));
    }

    #[test]
    fn test_pixel() {
        let mut c = canvas();
        c.pixel(5, 6, Rgb565::WHITE).unwrap();
        c.pixel(-1, 6, Rgb565::WHITE).unwrap();
        c.pixel(5, 320, Rgb565::WHITE).unwrap();
        assert_eq!(c.panel().ops, [Op::Window(Window::point(5, 6)), Op::Write(1)]);
        assert_eq!(c.panel().at(5, 6), Rgb565::WHITE);
    }

    #[test]
    fn test_text_single_transfer() {
        let mut c = canvas();
        let end = c
            .draw_text("Hi!", 10, 20, Rgb565::WHITE, Some(Rgb565::BLUE), TextSize::UI)
            .unwrap();
        assert_eq!(end, 34);
        assert_eq!(
            c.panel().ops,
            [Op::Window(Window::new(10, 20, 33, 35)), Op::Write(24 * 16)]
        );
    }

    #[test]
    fn test_text_pixels_match_glyphs() {
        let mut c = canvas();
        c.draw_text("AB", 0, 0, Rgb565::WHITE, Some(Rgb565::BLUE), TextSize::UI)
            .unwrap();
        for (i, ch) in ['A', 'B'].iter().enumerate() {
            let glyph = rasterize(*ch, TextSize::UI);
            for row in 0..16u32 {
                for col in 0..8u32 {
                    let expected = if glyph.is_set(col, row) {
                        Rgb565::WHITE
                    } else {
                        Rgb565::BLUE
                    };
                    let px = c.panel().at((i as u32 * 8 + col) as u16, row as u16);
                    assert_eq!(px, expected, "{} at ({}, {})", ch, col, row);
                }
            }
        }
    }

    #[test]
    fn test_text_fallback_background() {
        let mut c = canvas().with_background(Rgb565::MAGENTA);
        c.draw_text(" ", 0, 0, Rgb565::WHITE, None, TextSize::UI)
            .unwrap();
        assert!(c.panel().region_is(Window::new(0, 0, 7, 15), Rgb565::MAGENTA));
    }

    #[test]
    fn test_text_clipped_left_and_bottom() {
        let mut c = canvas();
        // First cell and a half hang off the left edge, bottom rows off the bottom
        c.draw_text("ABC", -12, 310, Rgb565::WHITE, Some(Rgb565::BLUE), TextSize::UI)
            .unwrap();
        assert_eq!(c.panel().windows(), [Window::new(0, 310, 11, 319)]);

        let glyph_b = rasterize('B', TextSize::UI);
        let glyph_c = rasterize('C', TextSize::UI);
        for row in 0..10u32 {
            for col in 0..12u32 {
                let text_col = col + 12;
                let glyph = if text_col < 16 { &glyph_b } else { &glyph_c };
                let expected = if glyph.is_set(text_col % 8, row) {
                    Rgb565::WHITE
                } else {
                    Rgb565::BLUE
                };
                assert_eq!(c.panel().at(col as u16, 310 + row as u16), expected);
            }
        }
    }

    #[test]
    fn test_text_offscreen_is_noop() {
        let mut c = canvas();
        let end = c
            .draw_text("abc", 0, 400, Rgb565::WHITE, None, TextSize::UI)
            .unwrap();
        assert_eq!(end, 24);
        assert!(c.panel().ops.is_empty());
    }

    #[test]
    fn test_text_overflow() {
        let mut c: Canvas<MockPanel, 256> = Canvas::new(MockPanel::new(240, 320));
        assert_eq!(
            c.draw_text("ABC", 0, 0, Rgb565::WHITE, None, TextSize::UI),
            Err(DisplayError::BufferOverflow)
        );
        assert!(c.panel().ops.is_empty());
        // Clipping happens before sizing: 8 visible columns x 16 rows fit
        assert!(c
            .draw_text("ABC", -16, 0, Rgb565::WHITE, None, TextSize::UI)
            .is_ok());
    }

    #[test]
    fn test_full_width_line_fits_default_scratch() {
        let mut c: Canvas<MockPanel> = Canvas::new(MockPanel::new(320, 240));
        let line = "0123456789012345678901234567890123456789";
        assert!(c
            .draw_text(line, 0, 0, Rgb565::WHITE, None, TextSize::UI)
            .is_ok());
    }

    proptest! {
        #[test]
        fn prop_fill_rect_window_is_clipped_intersection(
            x in -300i32..300,
            y in -400i32..400,
            w in 0u32..400,
            h in 0u32..400,
        ) {
            let mut c = canvas();
            c.fill_rect(x, y, w, h, Rgb565::RED).unwrap();
            let expected = Rect::new(x, y, w, h).clip(240, 320);
            match expected {
                Some(window) => {
                    prop_assert_eq!(c.panel().windows(), [window]);
                    prop_assert_eq!(
                        c.panel().writes().iter().sum::<usize>(),
                        window.pixel_count() as usize
                    );
                }
                None => prop_assert!(c.panel().ops.is_empty()),
            }
        }

        #[test]
        fn prop_text_is_one_window_one_write(
            x in -100i32..260,
            y in -20i32..330,
            len in 0usize..12,
        ) {
            let text = &"ABCDEFGHIJKL"[..len];
            let mut c = canvas();
            c.draw_text(text, x, y, Rgb565::WHITE, None, TextSize::UI).unwrap();
            let ops = &c.panel().ops;
            prop_assert!(ops.is_empty() || ops.len() == 2);
        }
    }
}
