//! Dialogue event AST node
//!
//! A [`DialogueEvent`] owns its decoded timing, both forms of its text, the
//! derived override segments and transitions, and a write-once frame cache.

use crate::animation::FrameSample;
use crate::tags::{extract_transitions, parse_segments, strip_override_blocks, TextSegment, Transition};
use std::sync::OnceLock;

/// Dialogue line from the `[Events]` section
///
/// Times are seconds from the start of the script. `text` is the line with
/// every `{...}` block removed; `original_text` keeps the tags.
///
/// # Examples
///
/// ```rust
/// use ass_frames::parser::ast::DialogueEvent;
///
/// let event = DialogueEvent::new(1.0, 3.0, "Default", "{\\b1}Hello");
///
/// assert_eq!(event.text, "Hello");
/// assert_eq!(event.original_text, "{\\b1}Hello");
/// assert_eq!(event.duration_ms(), 2000.0);
/// assert!(event.contains_time(3.0));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DialogueEvent {
    /// Render layer, passed through
    pub layer: i32,

    /// Start time in seconds
    pub start: f64,

    /// End time in seconds (`end >= start`)
    pub end: f64,

    /// Style name; resolved by the consumer
    pub style: String,

    /// Actor name
    pub name: String,

    /// Left margin override (0 keeps the style margin)
    pub margin_l: i32,

    /// Right margin override
    pub margin_r: i32,

    /// Vertical margin override
    pub margin_v: i32,

    /// Effect field, passed through
    pub effect: String,

    /// Text with override blocks removed, trimmed
    pub text: String,

    /// Text as written in the script
    pub original_text: String,

    /// Plain runs with their accumulated overrides
    pub segments: Vec<TextSegment>,

    /// `\t(...)` directives in source order
    pub transitions: Vec<Transition>,

    #[cfg_attr(feature = "serde", serde(skip))]
    frames: OnceLock<Vec<FrameSample>>,
}

impl DialogueEvent {
    /// Build a dialogue from times and tagged text
    ///
    /// Derives the stripped text, segments and transitions. Times are taken
    /// as given; the parser is what rejects `end < start`.
    #[must_use]
    pub fn new(start: f64, end: f64, style: &str, text: &str) -> Self {
        Self {
            start,
            end,
            style: style.to_string(),
            text: strip_override_blocks(text).trim().to_string(),
            original_text: text.to_string(),
            segments: parse_segments(text),
            transitions: extract_transitions(text),
            ..Self::default()
        }
    }

    /// Duration in milliseconds
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        (self.end - self.start) * 1000.0
    }

    /// Whether `time` (seconds) lies in `[start, end]`
    #[must_use]
    pub fn contains_time(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }

    /// Frames sampled so far, if the cache has been populated
    #[must_use]
    pub fn cached_frames(&self) -> Option<&[FrameSample]> {
        self.frames.get().map(Vec::as_slice)
    }

    /// Return the cached frames, filling the cache with `init` first if empty
    pub(crate) fn frames_or_init(&self, init: impl FnOnce() -> Vec<FrameSample>) -> &[FrameSample] {
        self.frames.get_or_init(init)
    }
}

impl PartialEq for DialogueEvent {
    /// Compares the parsed content; the frame cache is ignored
    fn eq(&self, other: &Self) -> bool {
        self.layer == other.layer
            && self.start == other.start
            && self.end == other.end
            && self.style == other.style
            && self.name == other.name
            && self.margin_l == other.margin_l
            && self.margin_r == other.margin_r
            && self.margin_v == other.margin_v
            && self.effect == other.effect
            && self.text == other.text
            && self.original_text == other.original_text
            && self.segments == other.segments
            && self.transitions == other.transitions
    }
}
