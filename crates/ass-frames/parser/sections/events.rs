//! Events section parser for ASS scripts
//!
//! Handles `Format:` and `Dialogue:` lines of `[Events]`. Because dialogue
//! text may itself contain commas, the tokens between the `Text` position and
//! the trailing fields are rejoined into the text value. `Comment:` and the
//! other non-dialogue event kinds are ignored.

use super::{field_key, parse_format_fields, split_directive, DEFAULT_EVENT_FORMAT};
use crate::parser::ast::DialogueEvent;
use crate::parser::errors::ParseError;
use crate::utils::{parse_numeric, parse_time};

/// Parser for `[Events]` lines
#[derive(Debug, Default, Clone)]
pub struct EventsParser {
    /// Field keys from the last `Format:` line
    format: Option<Vec<String>>,
}

impl EventsParser {
    /// Create a parser with no format seen yet
    #[must_use]
    pub const fn new() -> Self {
        Self { format: None }
    }

    /// Field names in effect, falling back to the standard v4+ list
    #[must_use]
    pub fn format(&self) -> Vec<&str> {
        self.format.as_ref().map_or_else(
            || DEFAULT_EVENT_FORMAT.to_vec(),
            |fields| fields.iter().map(String::as_str).collect(),
        )
    }

    /// Handle one line of the section
    ///
    /// Returns `Ok(Some(event))` for an accepted `Dialogue:` row and
    /// `Ok(None)` for `Format:`, `Comment:` and any other line.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when a dialogue row is dropped: too few
    /// fields, missing `Start`/`End`, end before start, or no visible text.
    pub fn parse_line(
        &mut self,
        line: &str,
        line_no: usize,
    ) -> Result<Option<DialogueEvent>, ParseError> {
        let Some((key, value)) = split_directive(line) else {
            return Ok(None);
        };

        if key.eq_ignore_ascii_case("Format") {
            self.format = Some(parse_format_fields(value));
            Ok(None)
        } else if key.eq_ignore_ascii_case("Dialogue") {
            self.parse_dialogue(value, line_no).map(Some)
        } else {
            Ok(None)
        }
    }

    fn parse_dialogue(&self, data: &str, line_no: usize) -> Result<DialogueEvent, ParseError> {
        let format = self.format();
        let tokens: Vec<&str> = data.split(',').collect();

        if tokens.len() < format.len() {
            return Err(ParseError::InsufficientFields {
                line: line_no,
                expected: format.len(),
                found: tokens.len(),
            });
        }

        let extra = tokens.len() - format.len();
        let text_index = format.iter().position(|f| field_key(f) == "text");

        // Fields after `Text` shift right by the number of rejoined tokens
        let value_of = |index: usize| -> String {
            match text_index {
                Some(t) if index == t => tokens[t..=t + extra].join(","),
                Some(t) if index > t => tokens[index + extra].trim().to_string(),
                _ => tokens[index].trim().to_string(),
            }
        };
        let field = |name: &str| -> Option<String> {
            format
                .iter()
                .position(|f| field_key(f) == name)
                .map(&value_of)
        };
        let int_field = |name: &str| -> i32 {
            field(name)
                .and_then(|v| parse_numeric(&v).ok())
                .unwrap_or(0)
        };

        let start = field("start")
            .filter(|v| !v.is_empty())
            .ok_or(ParseError::MissingTiming {
                line: line_no,
                field: "Start",
            })?;
        let end = field("end")
            .filter(|v| !v.is_empty())
            .ok_or(ParseError::MissingTiming {
                line: line_no,
                field: "End",
            })?;

        let (start, end) = (parse_time(&start), parse_time(&end));
        if end < start {
            return Err(ParseError::NegativeDuration {
                line: line_no,
                start,
                end,
            });
        }

        let text = field("text").unwrap_or_default();
        let style = field("style").unwrap_or_default();
        let mut event = DialogueEvent::new(start, end, &style, &text);
        if event.text.is_empty() {
            return Err(ParseError::EmptyText { line: line_no });
        }

        event.layer = int_field("layer");
        event.name = field("name").unwrap_or_default();
        event.margin_l = int_field("marginl");
        event.margin_r = int_field("marginr");
        event.margin_v = int_field("marginv");
        event.effect = field("effect").unwrap_or_default();

        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FORMAT: &str =
        "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

    fn parser() -> EventsParser {
        let mut parser = EventsParser::new();
        assert!(parser.parse_line(FORMAT, 1).unwrap().is_none());
        parser
    }

    #[test]
    fn parse_basic_dialogue() {
        let event = parser()
            .parse_line("Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,Hello", 2)
            .unwrap()
            .unwrap();

        assert_eq!(event.start, 1.0);
        assert_eq!(event.end, 3.0);
        assert_eq!(event.style, "Default");
        assert_eq!(event.text, "Hello");
        assert_eq!(event.original_text, "Hello");
    }

    #[test]
    fn handle_text_with_commas() {
        let event = parser()
            .parse_line(
                "Dialogue: 1,0:00:00.00,0:00:05.00,Sign,Bob,5,6,7,Scroll up,Well, well, {\\i1}well",
                2,
            )
            .unwrap()
            .unwrap();

        assert_eq!(event.text, "Well, well, well");
        assert_eq!(event.original_text, "Well, well, {\\i1}well");
        assert_eq!(event.layer, 1);
        assert_eq!(event.name, "Bob");
        assert_eq!((event.margin_l, event.margin_r, event.margin_v), (5, 6, 7));
        assert_eq!(event.effect, "Scroll up");
    }

    #[test]
    fn text_not_last_in_format() {
        let mut parser = EventsParser::new();
        parser.parse_line("Format: Start, Text, End", 1).unwrap();
        let event = parser
            .parse_line("Dialogue: 0:00:00.00,a,b,0:00:02.00", 2)
            .unwrap()
            .unwrap();
        assert_eq!(event.text, "a,b");
        assert_eq!(event.end, 2.0);
    }

    #[test]
    fn insufficient_fields() {
        let result = parser().parse_line("Dialogue: 0,0:00:01.00,0:00:03.00,Default", 4);
        assert_eq!(
            result,
            Err(ParseError::InsufficientFields {
                line: 4,
                expected: 10,
                found: 4,
            })
        );
    }

    #[test]
    fn missing_or_reversed_times_are_rejected() {
        let mut p = parser();
        assert_eq!(
            p.parse_line("Dialogue: 0,,0:00:03.00,Default,,0,0,0,,Hi", 2),
            Err(ParseError::MissingTiming {
                line: 2,
                field: "Start",
            })
        );
        assert!(matches!(
            p.parse_line("Dialogue: 0,0:00:05.00,0:00:03.00,Default,,0,0,0,,Hi", 3),
            Err(ParseError::NegativeDuration { line: 3, .. })
        ));

        let mut no_end = EventsParser::new();
        no_end.parse_line("Format: Start, Text", 1).unwrap();
        assert!(matches!(
            no_end.parse_line("Dialogue: 0:00:00.00,Hi", 2),
            Err(ParseError::MissingTiming { field: "End", .. })
        ));
    }

    #[test]
    fn tag_only_text_is_rejected() {
        assert_eq!(
            parser().parse_line("Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,{\\fs20}  ", 7),
            Err(ParseError::EmptyText { line: 7 })
        );
    }

    #[test]
    fn comments_and_other_events_are_ignored() {
        let mut p = parser();
        assert_eq!(
            p.parse_line("Comment: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,Hidden", 2),
            Ok(None)
        );
        assert_eq!(p.parse_line("Command: 0,0:00:01.00,0:00:03.00,,,0,0,0,,x", 3), Ok(None));
    }

    #[test]
    fn malformed_scalars_degrade() {
        let event = parser()
            .parse_line("Dialogue: top,0:00:bad,0:00:01.00,Default,,x,0,0,,Hi", 2)
            .unwrap()
            .unwrap();
        assert_eq!(event.layer, 0);
        assert_eq!(event.margin_l, 0);
        assert_eq!(event.start, 0.0);
    }

    #[test]
    fn default_format_without_format_line() {
        let mut parser = EventsParser::new();
        let event = parser
            .parse_line("Dialogue: 0,0:00:00.50,0:00:01.00,Default,,0,0,0,,Early", 1)
            .unwrap()
            .unwrap();
        assert_eq!(event.start, 0.5);
        assert_eq!(event.text, "Early");
    }
}
