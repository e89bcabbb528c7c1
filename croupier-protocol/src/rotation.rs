//! Panel orientation
//!
//! The controller scans its memory in one of four orders selected through
//! the MADCTL register. Two of them are "portrait-rotated" and exchange the
//! meaning of columns and rows.

/// Display orientation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Selector 0
    #[default]
    Portrait,
    /// Selector 1 (axes swapped)
    Landscape,
    /// Selector 2
    PortraitFlipped,
    /// Selector 3 (axes swapped)
    LandscapeFlipped,
}

impl Rotation {
    /// Build from a 0-3 selector; larger values wrap modulo 4
    pub const fn from_selector(selector: u8) -> Self {
        match selector % 4 {
            0 => Rotation::Portrait,
            1 => Rotation::Landscape,
            2 => Rotation::PortraitFlipped,
            _ => Rotation::LandscapeFlipped,
        }
    }

    /// The 0-3 selector for this orientation
    pub const fn selector(self) -> u8 {
        match self {
            Rotation::Portrait => 0,
            Rotation::Landscape => 1,
            Rotation::PortraitFlipped => 2,
            Rotation::LandscapeFlipped => 3,
        }
    }

    /// MADCTL register value (MY/MX/MV bits)
    pub const fn madctl(self) -> u8 {
        match self {
            Rotation::Portrait => 0x00,
            Rotation::Landscape => 0x60,
            Rotation::PortraitFlipped => 0xC0,
            Rotation::LandscapeFlipped => 0xA0,
        }
    }

    /// Whether logical x/y map to controller rows/columns
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Rotation::Landscape | Rotation::LandscapeFlipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_madctl_patterns() {
        assert_eq!(Rotation::from_selector(0).madctl(), 0x00);
        assert_eq!(Rotation::from_selector(1).madctl(), 0x60);
        assert_eq!(Rotation::from_selector(2).madctl(), 0xC0);
        assert_eq!(Rotation::from_selector(3).madctl(), 0xA0);
    }

    #[test]
    fn test_selector_wraps() {
        assert_eq!(Rotation::from_selector(4), Rotation::Portrait);
        assert_eq!(Rotation::from_selector(7), Rotation::LandscapeFlipped);
        for selector in 0..4 {
            assert_eq!(Rotation::from_selector(selector).selector(), selector);
        }
    }

    #[test]
    fn test_axis_swap() {
        assert!(!Rotation::Portrait.swaps_axes());
        assert!(Rotation::Landscape.swaps_axes());
        assert!(!Rotation::PortraitFlipped.swaps_axes());
        assert!(Rotation::LandscapeFlipped.swaps_axes());
    }
}
