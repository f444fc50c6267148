//! Single-shot extractors for layout collaborators
//!
//! These look for the first occurrence of a handful of tags without building
//! the full segment model. Tags nested inside `\t(...)` are not considered.

use super::{paren_args, parse_number, scan_block, segments, OverrideKind};
use crate::utils::{try_parse_color, Rgba};

/// `\move` arguments
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movement {
    /// Start X
    pub x1: f64,
    /// Start Y
    pub y1: f64,
    /// End X
    pub x2: f64,
    /// End Y
    pub y2: f64,
    /// Movement window in ms; `None` spans the whole dialogue
    pub window: Option<(f64, f64)>,
}

/// Positioning tags found in a dialogue line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Positioning {
    /// `\an` numpad alignment (1-9)
    pub alignment: Option<u8>,
    /// `\pos(x,y)`
    pub position: Option<(f64, f64)>,
    /// `\move(x1,y1,x2,y2[,t1,t2])`
    pub movement: Option<Movement>,
    /// `\org(x,y)`
    pub origin: Option<(f64, f64)>,
}

impl Positioning {
    /// Whether no positioning tag was found
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.position.is_none()
            && self.movement.is_none()
            && self.origin.is_none()
    }
}

/// Explicit colors found in a dialogue line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedColors {
    /// `\c` / `\1c`
    pub primary: Option<Rgba>,
    /// `\2c`
    pub secondary: Option<Rgba>,
    /// `\3c`
    pub outline: Option<Rgba>,
    /// `\4c`
    pub back: Option<Rgba>,
}

/// Find the first alignment, position, movement and origin tags
///
/// Malformed occurrences are skipped, so a later well-formed tag of the same
/// kind can still be picked up.
///
/// ```rust
/// # use ass_frames::tags::extract_positioning;
/// let p = extract_positioning("{\\an8\\pos(640,50)}Title");
/// assert_eq!(p.alignment, Some(8));
/// assert_eq!(p.position, Some((640.0, 50.0)));
/// assert!(p.movement.is_none());
/// ```
#[must_use]
pub fn extract_positioning(text: &str) -> Positioning {
    let mut found = Positioning::default();

    for (_, content) in segments::blocks(text) {
        for (name, args) in scan_block(&content) {
            match name {
                "an" if found.alignment.is_none() => {
                    found.alignment = args
                        .trim()
                        .parse::<u8>()
                        .ok()
                        .filter(|a| (1..=9).contains(a));
                }
                "pos" if found.position.is_none() => found.position = parse_point(args),
                "org" if found.origin.is_none() => found.origin = parse_point(args),
                "move" if found.movement.is_none() => found.movement = parse_move(args),
                _ => {}
            }
        }
    }

    found
}

/// Find the first explicit color for each of the four color slots
///
/// ```rust
/// # use ass_frames::tags::extract_colors;
/// # use ass_frames::utils::Rgba;
/// let colors = extract_colors("{\\c&H0000FF&\\3c&H000000&}Red");
/// assert_eq!(colors.primary, Some(Rgba::opaque(255, 0, 0)));
/// assert_eq!(colors.outline, Some(Rgba::BLACK));
/// assert_eq!(colors.back, None);
/// ```
#[must_use]
pub fn extract_colors(text: &str) -> ExtractedColors {
    let mut found = ExtractedColors::default();

    for (_, content) in segments::blocks(text) {
        for (name, args) in scan_block(&content) {
            let slot = match OverrideKind::from_tag_name(name) {
                Some(OverrideKind::PrimaryColor) => &mut found.primary,
                Some(OverrideKind::SecondaryColor) => &mut found.secondary,
                Some(OverrideKind::OutlineColor) => &mut found.outline,
                Some(OverrideKind::BackColor) => &mut found.back,
                _ => continue,
            };
            if slot.is_none() {
                *slot = try_parse_color(args).ok();
            }
        }
    }

    found
}

fn parse_point(args: &str) -> Option<(f64, f64)> {
    match paren_args(args)?.as_slice() {
        [x, y] => Some((parse_number(x)?, parse_number(y)?)),
        _ => None,
    }
}

fn parse_move(args: &str) -> Option<Movement> {
    let parts = paren_args(args)?;
    let numbers = parts
        .iter()
        .map(|part| parse_number(part))
        .collect::<Option<Vec<f64>>>()?;

    match numbers.as_slice() {
        &[x1, y1, x2, y2] => Some(Movement {
            x1,
            y1,
            x2,
            y2,
            window: None,
        }),
        &[x1, y1, x2, y2, t1, t2] => Some(Movement {
            x1,
            y1,
            x2,
            y2,
            window: Some((t1, t2)),
        }),
        _ => None,
    }
}
