//! Fixed-width glyph rasterizer
//!
//! Glyphs come from the 8x8 `font8x8` basic table and are scaled by an
//! integer factor on each axis. Anything outside printable ASCII renders
//! as the placeholder glyph.

/// Width and height of an unscaled glyph
pub const BASE_GLYPH: u32 = 8;

/// Largest scale factor on either axis
pub const MAX_SCALE: u8 = 4;

/// Glyph drawn for code points the font does not cover
pub const PLACEHOLDER: char = '?';

/// Integer text scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextSize {
    scale_x: u8,
    scale_y: u8,
}

impl TextSize {
    /// Unscaled 8x8
    pub const SMALL: Self = Self {
        scale_x: 1,
        scale_y: 1,
    };

    /// 8x16 cell used by the UI
    pub const UI: Self = Self {
        scale_x: 1,
        scale_y: 2,
    };

    /// Scale factors, each 1..=4
    pub const fn new(scale_x: u8, scale_y: u8) -> Option<Self> {
        if scale_x == 0 || scale_x > MAX_SCALE || scale_y == 0 || scale_y > MAX_SCALE {
            return None;
        }
        Some(Self { scale_x, scale_y })
    }

    pub const fn scale_x(&self) -> u8 {
        self.scale_x
    }

    pub const fn scale_y(&self) -> u8 {
        self.scale_y
    }

    /// Cell width in pixels
    pub const fn cell_width(&self) -> u32 {
        BASE_GLYPH * self.scale_x as u32
    }

    /// Cell height in pixels
    pub const fn cell_height(&self) -> u32 {
        BASE_GLYPH * self.scale_y as u32
    }
}

impl Default for TextSize {
    fn default() -> Self {
        Self::UI
    }
}

/// Monochrome bitmap of one scaled glyph
///
/// Row `r` is `rows[r]`; bit `c` set means column `c` is foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBitmap {
    rows: [u32; (BASE_GLYPH * MAX_SCALE as u32) as usize],
    width: u32,
    height: u32,
}

impl GlyphBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `(col, row)` is foreground; outside the cell is background
    pub fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        self.rows[row as usize] & (1 << col) != 0
    }
}

/// Whether `ch` has its own glyph
pub fn is_printable(ch: char) -> bool {
    matches!(ch, ' '..='~')
}

/// Rasterize `ch` at `size`
pub fn rasterize(ch: char, size: TextSize) -> GlyphBitmap {
    let ch = if is_printable(ch) { ch } else { PLACEHOLDER };
    let base = font8x8::legacy::BASIC_LEGACY[ch as usize];

    let sx = size.scale_x as u32;
    let sy = size.scale_y as u32;
    let mut bitmap = GlyphBitmap {
        rows: [0; (BASE_GLYPH * MAX_SCALE as u32) as usize],
        width: size.cell_width(),
        height: size.cell_height(),
    };

    for (src_row, &bits) in base.iter().enumerate() {
        // Least significant bit is the leftmost pixel
        let mut row = 0u32;
        for col in 0..BASE_GLYPH {
            if bits & (1 << col) != 0 {
                let mask = ((1u32 << sx) - 1) << (col * sx);
                row |= mask;
            }
        }
        let first = src_row * sy as usize;
        for r in &mut bitmap.rows[first..first + sy as usize] {
            *r = row;
        }
    }
    bitmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_text_size_bounds() {
        assert!(TextSize::new(0, 1).is_none());
        assert!(TextSize::new(1, 5).is_none());
        let size = TextSize::new(4, 4).unwrap();
        assert_eq!(size.cell_width(), 32);
        assert_eq!(size.cell_height(), 32);
        assert_eq!(TextSize::UI.cell_width(), 8);
        assert_eq!(TextSize::UI.cell_height(), 16);
    }

    #[test]
    fn test_letter_a() {
        // 'A' row 0 is 0x0C: columns 2 and 3
        let glyph = rasterize('A', TextSize::SMALL);
        assert_eq!(glyph.width(), 8);
        assert_eq!(glyph.height(), 8);
        let row0: [bool; 8] = core::array::from_fn(|c| glyph.is_set(c as u32, 0));
        assert_eq!(row0, [false, false, true, true, false, false, false, false]);
        // Bottom row is empty
        assert!((0..8).all(|c| !glyph.is_set(c, 7)));
    }

    #[test]
    fn test_space_is_blank() {
        let glyph = rasterize(' ', TextSize::UI);
        assert!((0..16).all(|r| (0..8).all(|c| !glyph.is_set(c, r))));
    }

    #[test]
    fn test_non_ascii_uses_placeholder() {
        let size = TextSize::UI;
        assert_eq!(rasterize('é', size), rasterize('?', size));
        assert_eq!(rasterize('\n', size), rasterize('?', size));
        assert_eq!(rasterize('\u{7F}', size), rasterize('?', size));
        assert_ne!(rasterize('A', size), rasterize('?', size));
    }

    #[test]
    fn test_scaling_doubles_rows() {
        let small = rasterize('A', TextSize::SMALL);
        let tall = rasterize('A', TextSize::UI);
        for r in 0..16 {
            for c in 0..8 {
                assert_eq!(tall.is_set(c, r), small.is_set(c, r / 2));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_scaled_glyph_matches_base(
            code in 0x20u8..=0x7E,
            sx in 1u8..=4,
            sy in 1u8..=4,
        ) {
            let ch = code as char;
            let base = rasterize(ch, TextSize::SMALL);
            let scaled = rasterize(ch, TextSize::new(sx, sy).unwrap());
            prop_assert_eq!(scaled.width(), 8 * sx as u32);
            prop_assert_eq!(scaled.height(), 8 * sy as u32);
            for r in 0..scaled.height() {
                for c in 0..scaled.width() {
                    prop_assert_eq!(
                        scaled.is_set(c, r),
                        base.is_set(c / sx as u32, r / sy as u32)
                    );
                }
            }
        }
    }
}
