//! `[Script Info]` line parser
//!
//! Every `Key: value` line is kept verbatim. Lines without a colon carry no
//! information and are skipped.

use super::split_directive;

/// Parser for `[Script Info]` lines
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptInfoParser;

impl ScriptInfoParser {
    /// Create a parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decode one line into a key-value pair
    ///
    /// ```rust
    /// # use ass_frames::parser::sections::ScriptInfoParser;
    /// let parser = ScriptInfoParser::new();
    /// assert_eq!(
    ///     parser.parse_line("Title: Demo: Part 2"),
    ///     Some(("Title".to_string(), "Demo: Part 2".to_string()))
    /// );
    /// assert_eq!(parser.parse_line("garbage"), None);
    /// ```
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<(String, String)> {
        let (key, value) = split_directive(line)?;
        if key.is_empty() {
            return None;
        }
        Some((key.to_string(), value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_unknown_keys_and_empty_values() {
        let parser = ScriptInfoParser::new();
        assert_eq!(
            parser.parse_line("YCbCr Matrix: TV.709"),
            Some(("YCbCr Matrix".to_string(), "TV.709".to_string()))
        );
        assert_eq!(
            parser.parse_line("Original Script:"),
            Some(("Original Script".to_string(), String::new()))
        );
        assert_eq!(parser.parse_line(": value"), None);
    }
}
