//! Main parser coordination and dispatch logic
//!
//! Contains the `Parser` struct: a single-pass, line-driven scanner that
//! tracks the current section and hands each line to that section's parser.
//! Row-level failures are recorded as issues and the row is dropped.

use super::{
    ast::ScriptInfo,
    errors::{IssueCategory, ParseError, ParseIssue},
    sections::{EventsParser, ScriptInfoParser, SectionType, StylesParser},
    AssSubtitle,
};
use crate::utils::create_hash_map;

/// Where the scanner is in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Before the first header
    Preamble,
    /// Inside a section this crate parses
    Known(SectionType),
    /// Inside a section whose lines are ignored
    Unknown,
}

/// Internal parser state for coordinating section parsing
pub(super) struct Parser<'a> {
    /// Source text being parsed
    source: &'a str,
    /// Current section
    position: Position,
    /// `[Script Info]` line parser
    script_info_parser: ScriptInfoParser,
    /// `[V4+ Styles]` line parser
    styles_parser: StylesParser,
    /// `[Events]` line parser
    events_parser: EventsParser,
    /// Aggregate being built
    subtitle: AssSubtitle,
}

impl<'a> Parser<'a> {
    /// Create new parser for source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source: source.strip_prefix('\u{FEFF}').unwrap_or(source),
            position: Position::Preamble,
            script_info_parser: ScriptInfoParser::new(),
            styles_parser: StylesParser::new(),
            events_parser: EventsParser::new(),
            subtitle: AssSubtitle {
                script_info: ScriptInfo::default(),
                styles: create_hash_map(),
                dialogues: Vec::new(),
                issues: Vec::new(),
            },
        }
    }

    /// Parse complete script
    pub fn parse(mut self) -> AssSubtitle {
        for (index, raw) in self.source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            let line_no = index + 1;
            if let Some(name) = section_header(line) {
                self.enter_section(name, line_no);
            } else {
                self.dispatch(line, line_no);
            }
        }

        tracing::debug!(
            styles = self.subtitle.styles.len(),
            dialogues = self.subtitle.dialogues.len(),
            issues = self.subtitle.issues.len(),
            "parsed script"
        );

        self.subtitle
    }

    /// Switch the current section
    fn enter_section(&mut self, name: &str, line_no: usize) {
        self.position = match SectionType::from_header(name) {
            Some(section) => {
                tracing::trace!(line = line_no, %section, "entering section");
                Position::Known(section)
            }
            None => {
                tracing::trace!(line = line_no, name, "skipping unknown section");
                self.subtitle.issues.push(ParseIssue::info(
                    IssueCategory::Structure,
                    format!("Unknown section [{name}] ignored"),
                    line_no,
                ));
                Position::Unknown
            }
        };
    }

    /// Hand a content line to the current section's parser
    fn dispatch(&mut self, line: &str, line_no: usize) {
        let Position::Known(section) = self.position else {
            return;
        };

        match section {
            SectionType::ScriptInfo => {
                if let Some((key, value)) = self.script_info_parser.parse_line(line) {
                    self.subtitle.script_info.fields.push((key, value));
                }
            }
            SectionType::Styles => match self.styles_parser.parse_line(line, line_no) {
                Ok(Some(style)) => {
                    self.subtitle.styles.insert(style.name.clone(), style);
                }
                Ok(None) => {}
                Err(error) => self.record(&error),
            },
            SectionType::Events => match self.events_parser.parse_line(line, line_no) {
                Ok(Some(event)) => self.subtitle.dialogues.push(event),
                Ok(None) => {}
                Err(error) => self.record(&error),
            },
        }
    }

    /// Downgrade a row error to an issue
    fn record(&mut self, error: &ParseError) {
        tracing::debug!(line = error.line(), %error, "dropping row");
        self.subtitle.issues.push(ParseIssue::from(error));
    }
}

/// Name inside a `[Name]` header line
fn section_header(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}
