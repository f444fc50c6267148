//! Style AST node for ASS style definitions
//!
//! Unlike the raw row, a [`Style`] holds decoded values: colors are [`Rgba`],
//! sizes and percentages are `f64`, flags live in [`TextFormatting`].

use crate::utils::Rgba;

bitflags::bitflags! {
    /// Text formatting flags of a style
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TextFormatting: u8 {
        /// Bold text formatting
        const BOLD = 1 << 0;
        /// Italic text formatting
        const ITALIC = 1 << 1;
        /// Underline text formatting
        const UNDERLINE = 1 << 2;
        /// Strike-through text formatting
        const STRIKE_OUT = 1 << 3;
    }
}

/// Style definition from `[V4+ Styles]`
///
/// # Examples
///
/// ```rust
/// use ass_frames::parser::ast::Style;
///
/// let style = Style {
///     name: "Sign".to_string(),
///     font_size: 36.0,
///     ..Style::default()
/// };
///
/// assert_eq!(style.font_name, "Arial");
/// assert_eq!(style.alignment, 2);
/// assert!(!style.bold());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Style name (unique within the table)
    pub name: String,

    /// Font family
    pub font_name: String,

    /// Font size in points
    pub font_size: f64,

    /// Fill color
    pub primary_color: Rgba,

    /// Karaoke pre-highlight color
    pub secondary_color: Rgba,

    /// Outline color
    pub outline_color: Rgba,

    /// Shadow/background color
    pub back_color: Rgba,

    /// Bold/italic/underline/strike-out flags
    pub formatting: TextFormatting,

    /// Horizontal scale percentage
    pub scale_x: f64,

    /// Vertical scale percentage
    pub scale_y: f64,

    /// Extra letter spacing in pixels
    pub spacing: f64,

    /// Z rotation in degrees
    pub angle: f64,

    /// Border style (1 = outline + shadow, 3 = opaque box)
    pub border_style: i32,

    /// Outline width in pixels
    pub outline: f64,

    /// Shadow depth in pixels
    pub shadow: f64,

    /// Numpad alignment code (1-9)
    pub alignment: u8,

    /// Left margin in pixels
    pub margin_l: i32,

    /// Right margin in pixels
    pub margin_r: i32,

    /// Vertical margin in pixels
    pub margin_v: i32,

    /// Font encoding identifier
    pub encoding: i32,
}

impl Style {
    /// Whether the style is bold
    #[must_use]
    pub const fn bold(&self) -> bool {
        self.formatting.contains(TextFormatting::BOLD)
    }

    /// Whether the style is italic
    #[must_use]
    pub const fn italic(&self) -> bool {
        self.formatting.contains(TextFormatting::ITALIC)
    }

    /// Whether the style is underlined
    #[must_use]
    pub const fn underline(&self) -> bool {
        self.formatting.contains(TextFormatting::UNDERLINE)
    }

    /// Whether the style is struck out
    #[must_use]
    pub const fn strike_out(&self) -> bool {
        self.formatting.contains(TextFormatting::STRIKE_OUT)
    }
}

impl Default for Style {
    /// Values libass and common editors assume for an unspecified `Default`
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            font_name: "Arial".to_string(),
            font_size: 20.0,
            primary_color: Rgba::WHITE,
            secondary_color: Rgba::RED,
            outline_color: Rgba::BLACK,
            back_color: Rgba::BLACK,
            formatting: TextFormatting::empty(),
            scale_x: 100.0,
            scale_y: 100.0,
            spacing: 0.0,
            angle: 0.0,
            border_style: 1,
            outline: 2.0,
            shadow: 2.0,
            alignment: 2,
            margin_l: 10,
            margin_r: 10,
            margin_v: 10,
            encoding: 1,
        }
    }
}
