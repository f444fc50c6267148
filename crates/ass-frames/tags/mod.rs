//! Override tag catalogue and block scanner
//!
//! Dialogue text interleaves plain runs with `{...}` override blocks. This
//! module recognises the fixed catalogue of tags the frame sampler
//! understands and turns a block body into ordered [`OverrideTag`] records.
//!
//! # Catalogue
//!
//! | Tag | Kind | Payload |
//! |-----|------|---------|
//! | `\c`, `\1c` | primary color | `&H` + 6/8 hex + `&` |
//! | `\2c`, `\3c`, `\4c` | secondary/outline/back color | `&H` + 6/8 hex + `&` |
//! | `\alpha`, `\1a`..`\4a` | alpha channels | `&H` + 2 hex + `&` |
//! | `\fs` | font size | decimal |
//! | `\frz`, `\fr` | rotation (degrees) | signed decimal |
//! | `\fscx`, `\fscy` | horizontal/vertical scale (percent) | decimal |
//!
//! Anything else (`\b1`, `\pos(..)`, `\p1`, `\k20`, ...) is skipped without
//! error. Parenthesised arguments are skipped as a unit, so tags nested in
//! `\t(...)` never leak into the block's own overrides.

use crate::utils::{parse_alpha, parse_color, try_parse_color, Rgba};
use core::fmt;

pub mod extract;
pub mod segments;
pub mod transition;

pub use extract::{extract_colors, extract_positioning, ExtractedColors, Movement, Positioning};
pub use segments::{parse_segments, strip_override_blocks, TextSegment};
pub use transition::{extract_transitions, Transition};

/// Override property addressed by a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverrideKind {
    /// `\c` / `\1c`
    PrimaryColor,
    /// `\2c`
    SecondaryColor,
    /// `\3c`
    OutlineColor,
    /// `\4c`
    BackColor,
    /// `\alpha` (all channels)
    Alpha,
    /// `\1a`
    PrimaryAlpha,
    /// `\2a`
    SecondaryAlpha,
    /// `\3a`
    OutlineAlpha,
    /// `\4a`
    BackAlpha,
    /// `\fs`
    FontSize,
    /// `\frz` / `\fr`
    Rotation,
    /// `\fscx`
    ScaleX,
    /// `\fscy`
    ScaleY,
}

/// Payload grammar of an override kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    Color,
    Alpha,
    Number,
}

impl OverrideKind {
    /// Resolve a tag name (without backslash) to its kind
    ///
    /// ```rust
    /// # use ass_frames::tags::OverrideKind;
    /// assert_eq!(OverrideKind::from_tag_name("1c"), Some(OverrideKind::PrimaryColor));
    /// assert_eq!(OverrideKind::from_tag_name("fscx"), Some(OverrideKind::ScaleX));
    /// assert_eq!(OverrideKind::from_tag_name("bord"), None);
    /// ```
    #[must_use]
    pub fn from_tag_name(name: &str) -> Option<Self> {
        let kind = match name {
            "c" | "1c" => Self::PrimaryColor,
            "2c" => Self::SecondaryColor,
            "3c" => Self::OutlineColor,
            "4c" => Self::BackColor,
            "alpha" => Self::Alpha,
            "1a" => Self::PrimaryAlpha,
            "2a" => Self::SecondaryAlpha,
            "3a" => Self::OutlineAlpha,
            "4a" => Self::BackAlpha,
            "fs" => Self::FontSize,
            "frz" | "fr" => Self::Rotation,
            "fscx" => Self::ScaleX,
            "fscy" => Self::ScaleY,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical tag name
    #[must_use]
    pub const fn tag_name(self) -> &'static str {
        match self {
            Self::PrimaryColor => "c",
            Self::SecondaryColor => "2c",
            Self::OutlineColor => "3c",
            Self::BackColor => "4c",
            Self::Alpha => "alpha",
            Self::PrimaryAlpha => "1a",
            Self::SecondaryAlpha => "2a",
            Self::OutlineAlpha => "3a",
            Self::BackAlpha => "4a",
            Self::FontSize => "fs",
            Self::Rotation => "frz",
            Self::ScaleX => "fscx",
            Self::ScaleY => "fscy",
        }
    }

    const fn payload(self) -> Payload {
        match self {
            Self::PrimaryColor | Self::SecondaryColor | Self::OutlineColor | Self::BackColor => {
                Payload::Color
            }
            Self::Alpha
            | Self::PrimaryAlpha
            | Self::SecondaryAlpha
            | Self::OutlineAlpha
            | Self::BackAlpha => Payload::Alpha,
            Self::FontSize | Self::Rotation | Self::ScaleX | Self::ScaleY => Payload::Number,
        }
    }

    /// Check a raw payload against this kind's grammar
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self.payload() {
            Payload::Color => try_parse_color(value).is_ok(),
            Payload::Alpha => parse_alpha(value).is_some(),
            Payload::Number => parse_number(value).is_some(),
        }
    }
}

impl fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.tag_name())
    }
}

/// Decoded payload of an override tag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverrideValue {
    /// Color payload
    Color(Rgba),
    /// Opacity fraction (`1.0` opaque)
    Alpha(f64),
    /// Numeric payload (size, degrees or percent)
    Number(f64),
}

/// A recognised override tag
///
/// `offset` is the char offset of the `{` opening the block the tag came
/// from; every tag of one block shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideTag {
    /// Property the tag overrides
    pub kind: OverrideKind,
    /// Raw payload text, e.g. `&H00FF00&` or `40`
    pub value: String,
    /// Char offset of the enclosing block in the dialogue text
    pub offset: usize,
}

impl OverrideTag {
    /// Build a tag when `name` is in the catalogue and `value` fits its grammar
    #[must_use]
    pub fn from_parts(name: &str, value: &str, offset: usize) -> Option<Self> {
        let kind = OverrideKind::from_tag_name(name)?;
        let value = value.trim();
        kind.accepts(value).then(|| Self {
            kind,
            value: value.to_string(),
            offset,
        })
    }

    /// Decode the payload
    ///
    /// ```rust
    /// # use ass_frames::tags::{OverrideTag, OverrideValue};
    /// # use ass_frames::utils::Rgba;
    /// let tag = OverrideTag::from_parts("c", "&H00FF00&", 0).unwrap();
    /// assert_eq!(tag.decoded(), OverrideValue::Color(Rgba::opaque(0, 255, 0)));
    /// ```
    #[must_use]
    pub fn decoded(&self) -> OverrideValue {
        decode_value(self.kind, &self.value)
    }
}

/// Decode a payload for `kind`, substituting codec defaults for bad input
#[must_use]
pub fn decode_value(kind: OverrideKind, value: &str) -> OverrideValue {
    match kind.payload() {
        Payload::Color => OverrideValue::Color(parse_color(value)),
        Payload::Alpha => OverrideValue::Alpha(parse_alpha(value).unwrap_or(1.0)),
        Payload::Number => OverrideValue::Number(parse_number(value).unwrap_or(0.0)),
    }
}

/// Finite decimal, optionally signed
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the tags of one override block body (braces already stripped)
///
/// Recognised tags are appended to `tags` in source order, each stamped with
/// `offset`. Unknown tags and payloads that do not match the catalogue are
/// skipped.
///
/// ```rust
/// # use ass_frames::tags::{parse_override_block, OverrideKind};
/// let mut tags = Vec::new();
/// parse_override_block("\\b1\\fs40\\c&H0000FF&\\t(0,500,\\fs80)", 3, &mut tags);
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[0].kind, OverrideKind::FontSize);
/// assert_eq!(tags[1].offset, 3);
/// ```
pub fn parse_override_block(content: &str, offset: usize, tags: &mut Vec<OverrideTag>) {
    for (name, args) in scan_block(content) {
        if let Some(tag) = OverrideTag::from_parts(name, args, offset) {
            tags.push(tag);
        }
    }
}

/// Split a block body into `(name, args)` pairs
///
/// The name is an optional leading digit followed by ASCII letters; the
/// arguments run to the next backslash outside parentheses.
pub(crate) fn scan_block(content: &str) -> Vec<(&str, &str)> {
    let bytes = content.as_bytes();
    let mut pairs = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'\\' {
            pos += 1;
            continue;
        }
        pos += 1;

        let name_start = pos;
        if pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }
        let name_end = pos;

        let mut depth = 0usize;
        while pos < bytes.len() {
            match bytes[pos] {
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b'\\' if depth == 0 => break,
                _ => {}
            }
            pos += 1;
        }

        if name_end > name_start {
            pairs.push((&content[name_start..name_end], &content[name_end..pos]));
        }
    }

    pairs
}

/// Split a parenthesised argument list at top-level commas
///
/// Returns `None` when `args` does not open with `(`. A missing closing
/// parenthesis is tolerated; the list runs to the end of the input.
pub(crate) fn paren_args(args: &str) -> Option<Vec<&str>> {
    let inner = args.trim().strip_prefix('(')?;
    let bytes = inner.as_bytes();

    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut part_start = 0;
    let mut end = bytes.len();

    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' if depth == 0 => {
                end = i;
                break;
            }
            b')' => depth -= 1,
            b',' if depth == 0 => {
                parts.push(&inner[part_start..i]);
                part_start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[part_start..end]);

    Some(parts)
}
