//! Packed ARGB color values.
//!
//! Output points are addressed as packed 32-bit colors in `0xAARRGGBB`
//! layout, the native format of the render engine's color buffers.

use std::fmt;

/// A packed 32-bit ARGB color value.
///
/// The engine produces one of these per addressable output point. The
/// harness treats the value as opaque apart from component access; no
/// color-space conversion happens here.
///
/// # Examples
///
/// ```
/// use lumen_core::PackedColor;
///
/// let magenta = PackedColor::from_rgb(255, 0, 255);
/// assert_eq!(magenta.red(), 255);
/// assert_eq!(magenta.green(), 0);
/// assert_eq!(magenta.alpha(), 255);
/// assert_eq!(magenta.value(), 0xFF_FF00FF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Fully opaque black; the "off" state of an output point.
    pub const BLACK: PackedColor = PackedColor(0xFF_000000);

    /// Fully opaque white.
    pub const WHITE: PackedColor = PackedColor(0xFF_FFFFFF);

    /// Creates a color from a raw packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(value: u32) -> Self {
        Self(value)
    }

    /// Creates a fully opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Returns the raw packed `0xAARRGGBB` value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the alpha component.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the red component.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the green component.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for PackedColor {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<PackedColor> for u32 {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

impl fmt::Display for PackedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_component_access() {
        let c = PackedColor::from_argb(0x80_40C0FF);
        assert_eq!(c.alpha(), 0x80);
        assert_eq!(c.red(), 0x40);
        assert_eq!(c.green(), 0xC0);
        assert_eq!(c.blue(), 0xFF);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        let c = PackedColor::from_rgb(1, 2, 3);
        assert_eq!(c.alpha(), 255);
        assert_eq!(c.value(), 0xFF_010203);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(PackedColor::WHITE.to_string(), "#FFFFFFFF");
        assert_eq!(PackedColor::BLACK.to_string(), "#FF000000");
    }

    #[test]
    fn test_u32_round_trip() {
        let c = PackedColor::from(0xDEAD_BEEF_u32);
        let raw: u32 = c.into();
        assert_eq!(raw, 0xDEAD_BEEF_u32);
    }
}
