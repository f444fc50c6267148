//! Section-specific line parsers for ASS scripts
//!
//! The scanner in [`main`](super::main) owns the current-section state and
//! hands each non-comment line to the parser for that section. Every parser
//! here is line-at-a-time: it keeps only the `Format:` field list it has
//! seen so far.
//!
//! # Example
//!
//! ```rust
//! use ass_frames::parser::sections::{EventsParser, StylesParser};
//!
//! let mut styles = StylesParser::new();
//! styles.parse_line("Format: Name, Fontname, Fontsize", 1).unwrap();
//! let style = styles.parse_line("Style: Sign,Verdana,36", 2).unwrap().unwrap();
//! assert_eq!(style.font_size, 36.0);
//!
//! let mut events = EventsParser::new();
//! let event = events
//!     .parse_line("Dialogue: 0,0:00:01.00,0:00:03.00,Sign,,0,0,0,,Hi, there", 3)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(event.text, "Hi, there");
//! ```

pub mod events;
pub mod script_info;
pub mod styles;

pub use events::EventsParser;
pub use script_info::ScriptInfoParser;
pub use styles::StylesParser;

use core::fmt;

/// Field order assumed for `Style:` rows before any `Format:` line
pub const DEFAULT_STYLE_FORMAT: [&str; 23] = [
    "Name",
    "Fontname",
    "Fontsize",
    "PrimaryColour",
    "SecondaryColour",
    "OutlineColour",
    "BackColour",
    "Bold",
    "Italic",
    "Underline",
    "StrikeOut",
    "ScaleX",
    "ScaleY",
    "Spacing",
    "Angle",
    "BorderStyle",
    "Outline",
    "Shadow",
    "Alignment",
    "MarginL",
    "MarginR",
    "MarginV",
    "Encoding",
];

/// Field order assumed for `Dialogue:` rows before any `Format:` line
pub const DEFAULT_EVENT_FORMAT: [&str; 10] = [
    "Layer", "Start", "End", "Style", "Name", "MarginL", "MarginR", "MarginV", "Effect", "Text",
];

/// Sections the scanner dispatches to a parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    /// `[Script Info]`
    ScriptInfo,
    /// `[V4+ Styles]` or legacy `[V4 Styles]`
    Styles,
    /// `[Events]`
    Events,
}

impl SectionType {
    /// Resolve a header name (without brackets)
    ///
    /// ```rust
    /// # use ass_frames::parser::sections::SectionType;
    /// assert_eq!(SectionType::from_header("V4+ Styles"), Some(SectionType::Styles));
    /// assert_eq!(SectionType::from_header("v4 styles"), Some(SectionType::Styles));
    /// assert_eq!(SectionType::from_header("Fonts"), None);
    /// ```
    #[must_use]
    pub fn from_header(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("Script Info") {
            Some(Self::ScriptInfo)
        } else if name.eq_ignore_ascii_case("V4+ Styles") || name.eq_ignore_ascii_case("V4 Styles")
        {
            Some(Self::Styles)
        } else if name.eq_ignore_ascii_case("Events") {
            Some(Self::Events)
        } else {
            None
        }
    }

    /// Canonical header name
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::ScriptInfo => "Script Info",
            Self::Styles => "V4+ Styles",
            Self::Events => "Events",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.header_name())
    }
}

/// Split `Key: value` at the first colon, trimming both sides
pub(crate) fn split_directive(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Parse the field list of a `Format:` line
pub(crate) fn parse_format_fields(value: &str) -> Vec<String> {
    value.split(',').map(|field| field.trim().to_string()).collect()
}

/// Canonical lookup key for a format field name
///
/// Lowercases and folds the `Colour` spelling so `PrimaryColour` and
/// `primarycolor` name the same field.
pub(crate) fn field_key(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace("colour", "color")
}
