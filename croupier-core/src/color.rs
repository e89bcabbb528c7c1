//! Packed 16-bit color
//!
//! Every drawing call takes and stores this representation. Bytes go on the
//! wire high byte first.

/// 5-6-5 packed color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);
    pub const RED: Self = Self(0xF800);
    pub const GREEN: Self = Self(0x07E0);
    pub const BLUE: Self = Self(0x001F);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const CYAN: Self = Self(0x07FF);
    pub const MAGENTA: Self = Self(0xF81F);

    /// Pack already-quantized channels (red 0-31, green 0-63, blue 0-31)
    ///
    /// Out-of-range channel values are masked to their bit width.
    pub const fn from_channels(r5: u8, g6: u8, b5: u8) -> Self {
        let r = (r5 & 0x1F) as u16;
        let g = (g6 & 0x3F) as u16;
        let b = (b5 & 0x1F) as u16;
        Self((r << 11) | (g << 5) | b)
    }

    /// Raw packed value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Wire bytes (big-endian)
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}
