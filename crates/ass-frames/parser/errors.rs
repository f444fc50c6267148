//! Row-level parse errors and recoverable parse issues
//!
//! Row parsers return [`ParseError`] for structural problems; the section
//! scanner never propagates them. Each one is turned into a [`ParseIssue`],
//! the row is dropped and scanning continues, so callers always receive a
//! (possibly partial) script.

use core::fmt;
use thiserror::Error;

/// Structural failure of a single `Style:` or `Dialogue:` row
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Style row field count differs from its `Format:` line
    #[error("Field count mismatch at line {line}: expected {expected}, found {found}")]
    FieldCountMismatch {
        /// Line number (1-based)
        line: usize,
        /// Fields declared by the format line
        expected: usize,
        /// Fields present in the row
        found: usize,
    },

    /// Dialogue row has fewer fields than its `Format:` line
    #[error("Insufficient fields at line {line}: expected at least {expected}, found {found}")]
    InsufficientFields {
        /// Line number (1-based)
        line: usize,
        /// Fields declared by the format line
        expected: usize,
        /// Fields present in the row
        found: usize,
    },

    /// Style row has an empty or absent `Name`
    #[error("Style at line {line} has no name")]
    MissingStyleName {
        /// Line number (1-based)
        line: usize,
    },

    /// Dialogue row lacks a `Start` or `End` value
    #[error("Dialogue at line {line} is missing its {field} time")]
    MissingTiming {
        /// Line number (1-based)
        line: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// Dialogue row ends before it starts
    #[error("Dialogue at line {line} ends ({end}s) before it starts ({start}s)")]
    NegativeDuration {
        /// Line number (1-based)
        line: usize,
        /// Decoded start in seconds
        start: f64,
        /// Decoded end in seconds
        end: f64,
    },

    /// Dialogue row has no visible text once override blocks are removed
    #[error("Dialogue at line {line} has no text")]
    EmptyText {
        /// Line number (1-based)
        line: usize,
    },
}

impl ParseError {
    /// Line the error was reported on
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::FieldCountMismatch { line, .. }
            | Self::InsufficientFields { line, .. }
            | Self::MissingStyleName { line }
            | Self::MissingTiming { line, .. }
            | Self::NegativeDuration { line, .. }
            | Self::EmptyText { line } => *line,
        }
    }

    /// Issue category used when the error is downgraded to a [`ParseIssue`]
    #[must_use]
    pub const fn category(&self) -> IssueCategory {
        match self {
            Self::FieldCountMismatch { .. } | Self::InsufficientFields { .. } => {
                IssueCategory::Format
            }
            Self::MissingStyleName { .. } => IssueCategory::Style,
            Self::MissingTiming { .. } | Self::NegativeDuration { .. } => IssueCategory::Timing,
            Self::EmptyText { .. } => IssueCategory::Event,
        }
    }
}

/// Parse issue severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueSeverity {
    /// Information that does not affect the parsed model
    Info,

    /// A row or directive was dropped
    Warning,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Issue categories for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IssueCategory {
    /// Script structure issues (sections)
    Structure,

    /// Style definition problems
    Style,

    /// Event/dialogue issues
    Event,

    /// Timing-related problems
    Timing,

    /// Field layout issues
    Format,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Style => write!(f, "style"),
            Self::Event => write!(f, "event"),
            Self::Timing => write!(f, "timing"),
            Self::Format => write!(f, "format"),
        }
    }
}

/// Recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based)
    pub line: usize,
}

impl ParseIssue {
    /// Create a new parse issue
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
        }
    }

    /// Create warning issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Create info issue
    #[must_use]
    pub const fn info(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Info, category, message, line)
    }
}

impl From<&ParseError> for ParseIssue {
    fn from(error: &ParseError) -> Self {
        Self::warning(error.category(), error.to_string(), error.line())
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) at line {}: {}",
            self.severity, self.category, self.line, self.message
        )
    }
}
