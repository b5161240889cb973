//! Driver configuration
//!
//! Defaults reproduce the controller setup of a stock 128x64 SSD1306
//! module at address 0x3C.

use monopage_hal::DeviceAddress;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default contrast level sent during initialization
pub const DEFAULT_CONTRAST: u8 = 0xCF;

/// What to do with characters missing from the font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlyphFallback {
    /// Fail with `Error::UnsupportedCharacter` before anything is sent
    #[default]
    Reject,
    /// Draw the space glyph instead
    Blank,
}

/// Display driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Controller I2C address
    pub address: DeviceAddress,
    /// Contrast operand for the init sequence (0-255)
    pub contrast: u8,
    /// Handling of characters outside the font
    pub unknown_glyph: GlyphFallback,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfig {
    /// Default configuration
    pub const fn new() -> Self {
        Self {
            address: DeviceAddress::SSD1306_PRIMARY,
            contrast: DEFAULT_CONTRAST,
            unknown_glyph: GlyphFallback::Reject,
        }
    }

    /// Use a different controller address
    pub const fn with_address(mut self, address: DeviceAddress) -> Self {
        self.address = address;
        self
    }

    /// Use a different contrast level
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Choose the unknown-character policy
    pub const fn with_unknown_glyph(mut self, fallback: GlyphFallback) -> Self {
        self.unknown_glyph = fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.address.seven_bit(), 0x3C);
        assert_eq!(config.contrast, 0xCF);
        assert_eq!(config.unknown_glyph, GlyphFallback::Reject);
    }

    #[test]
    fn test_builders() {
        let config = DisplayConfig::new()
            .with_address(DeviceAddress::SSD1306_SECONDARY)
            .with_contrast(0x7F)
            .with_unknown_glyph(GlyphFallback::Blank);

        assert_eq!(config.address.seven_bit(), 0x3D);
        assert_eq!(config.contrast, 0x7F);
        assert_eq!(config.unknown_glyph, GlyphFallback::Blank);
    }
}
