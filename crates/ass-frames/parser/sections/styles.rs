//! Styles section parser for ASS scripts
//!
//! Handles `Format:` and `Style:` lines of `[V4+ Styles]`. Values are mapped
//! to fields by position in the active format and decoded straight into a
//! [`Style`]. A row is all-or-nothing: a field count that differs from the
//! format drops the whole row.

use super::{field_key, parse_format_fields, split_directive, DEFAULT_STYLE_FORMAT};
use crate::parser::ast::{Style, TextFormatting};
use crate::parser::errors::ParseError;
use crate::utils::{parse_color, parse_numeric};

/// Parser for `[V4+ Styles]` lines
#[derive(Debug, Default, Clone)]
pub struct StylesParser {
    /// Field keys from the last `Format:` line
    format: Option<Vec<String>>,
}

impl StylesParser {
    /// Create a parser with no format seen yet
    #[must_use]
    pub const fn new() -> Self {
        Self { format: None }
    }

    /// Field names in effect, falling back to the standard v4+ list
    #[must_use]
    pub fn format(&self) -> Vec<&str> {
        self.format.as_ref().map_or_else(
            || DEFAULT_STYLE_FORMAT.to_vec(),
            |fields| fields.iter().map(String::as_str).collect(),
        )
    }

    /// Handle one line of the section
    ///
    /// Returns `Ok(Some(style))` for a decoded `Style:` row and `Ok(None)` for
    /// `Format:` and any other line.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::FieldCountMismatch`] when the row's value count
    /// differs from the format, or [`ParseError::MissingStyleName`] when the
    /// `Name` value is empty or absent.
    pub fn parse_line(&mut self, line: &str, line_no: usize) -> Result<Option<Style>, ParseError> {
        let Some((key, value)) = split_directive(line) else {
            return Ok(None);
        };

        if key.eq_ignore_ascii_case("Format") {
            self.format = Some(parse_format_fields(value));
            Ok(None)
        } else if key.eq_ignore_ascii_case("Style") {
            self.parse_style(value, line_no).map(Some)
        } else {
            Ok(None)
        }
    }

    fn parse_style(&self, data: &str, line_no: usize) -> Result<Style, ParseError> {
        let format = self.format();
        let values: Vec<&str> = data.split(',').map(str::trim).collect();

        if values.len() != format.len() {
            return Err(ParseError::FieldCountMismatch {
                line: line_no,
                expected: format.len(),
                found: values.len(),
            });
        }

        let defaults = Style::default();
        let mut style = Style {
            name: String::new(),
            ..Style::default()
        };

        for (field, value) in format.iter().zip(values) {
            match field_key(field).as_str() {
                "name" => style.name = value.to_string(),
                "fontname" => style.font_name = value.to_string(),
                "fontsize" => style.font_size = number_or(value, defaults.font_size),
                "primarycolor" => style.primary_color = parse_color(value),
                "secondarycolor" => style.secondary_color = parse_color(value),
                "outlinecolor" | "tertiarycolor" => style.outline_color = parse_color(value),
                "backcolor" => style.back_color = parse_color(value),
                "bold" => style
                    .formatting
                    .set(TextFormatting::BOLD, matches!(value, "1" | "-1")),
                "italic" => style
                    .formatting
                    .set(TextFormatting::ITALIC, matches!(value, "1" | "-1")),
                "underline" => style.formatting.set(TextFormatting::UNDERLINE, value == "1"),
                "strikeout" => style.formatting.set(TextFormatting::STRIKE_OUT, value == "1"),
                "scalex" => style.scale_x = number_or(value, defaults.scale_x),
                "scaley" => style.scale_y = number_or(value, defaults.scale_y),
                "spacing" => style.spacing = number_or(value, 0.0),
                "angle" => style.angle = number_or(value, 0.0),
                "borderstyle" => style.border_style = parse_numeric(value).unwrap_or(0),
                "outline" => style.outline = number_or(value, 0.0),
                "shadow" => style.shadow = number_or(value, 0.0),
                "alignment" => {
                    style.alignment = parse_numeric::<u8>(value)
                        .ok()
                        .filter(|a| (1..=9).contains(a))
                        .unwrap_or(defaults.alignment);
                }
                "marginl" => style.margin_l = parse_numeric(value).unwrap_or(0),
                "marginr" => style.margin_r = parse_numeric(value).unwrap_or(0),
                "marginv" => style.margin_v = parse_numeric(value).unwrap_or(0),
                "encoding" => style.encoding = parse_numeric(value).unwrap_or(0),
                _ => {}
            }
        }

        if style.name.is_empty() {
            return Err(ParseError::MissingStyleName { line: line_no });
        }

        Ok(style)
    }
}

/// Finite float or the given default
fn number_or(value: &str, default: f64) -> f64 {
    parse_numeric::<f64>(value)
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}
