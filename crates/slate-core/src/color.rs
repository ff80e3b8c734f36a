#![forbid(unsafe_code)]

//! Packed RGBA colour.

/// A compact RGBA colour.
///
/// - **Size:** 4 bytes.
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
///
/// Stored as straight alpha. Compositing in this engine is paste/overwrite,
/// so no blending operations live here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    /// Fully transparent (alpha = 0).
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque white. Index 0 of the classic three-colour e-paper palette.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black. Index 1 of the classic three-colour e-paper palette.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red. Index 2 of the classic three-colour e-paper palette.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Create an opaque RGB colour (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create an RGBA colour with explicit alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// BT.601 luma, for grayscale encoding.
    #[inline]
    pub const fn luma(self) -> u8 {
        let y = 299 * self.r() as u32 + 587 * self.g() as u32 + 114 * self.b() as u32;
        (y / 1000) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::Rgba;

    #[test]
    fn channel_packing_round_trips() {
        let c = Rgba::rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.0, 0x1234_5678);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c.a(), 0x78);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn palette_constants() {
        assert_eq!(Rgba::WHITE, Rgba::rgba(255, 255, 255, 255));
        assert_eq!(Rgba::BLACK, Rgba::rgba(0, 0, 0, 255));
        assert_eq!(Rgba::RED, Rgba::rgba(255, 0, 0, 255));
        assert_eq!(Rgba::TRANSPARENT.a(), 0);
    }

    #[test]
    fn luma_extremes() {
        assert_eq!(Rgba::BLACK.luma(), 0);
        assert_eq!(Rgba::WHITE.luma(), 255);
        // Red contributes 29.9% of full scale
        assert_eq!(Rgba::RED.luma(), 76);
    }
}
