//! RGBA color value shared by styles, override tags and frame samples
//!
//! Channels are stored the way renderers consume them: straight 8-bit RGB
//! plus an opacity fraction where `0.0` is fully transparent and `1.0` is
//! fully opaque. The inversion of ASS alpha happens once, in the codec.

use core::fmt;

/// Resolved RGBA color
///
/// # Examples
///
/// ```rust
/// use ass_frames::utils::Rgba;
///
/// let red = Rgba::opaque(255, 0, 0);
/// assert_eq!(red.a, 1.0);
/// assert_eq!(red.to_css(), "rgba(255, 0, 0, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Opacity, `0.0` transparent to `1.0` opaque
    pub a: f64,
}

impl Rgba {
    /// Opaque white, the fallback for unparseable colors
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Opaque black
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Opaque red, the conventional ASS secondary color
    pub const RED: Self = Self::opaque(255, 0, 0);

    /// Create a color from all four channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with its opacity replaced
    #[must_use]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` notation for web-based rendering layers
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::color_to_ass_hex(*self))
    }
}
