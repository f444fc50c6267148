//! # ass-frames
//!
//! ASS (Advanced `SubStation` Alpha) subtitle parser and frame-interpolation
//! engine. Parses a script into styles and dialogues, extracts inline
//! override tags and `\t(...)` transitions, and samples each dialogue's
//! resolved visual state (colors, opacity, size, rotation, scale) over time.
//!
//! ## Features
//!
//! - **Lenient parsing**: malformed rows are dropped and reported, never fatal
//! - **Override catalogue**: colors, alpha channels, `\fs`, `\frz`, `\fscx`/`\fscy`
//! - **Transitions**: windowed, optionally accelerated, composed in order
//! - **Frame cache**: each dialogue is sampled once and reused by point queries
//! - **`parallel`**: fill every frame cache across the rayon pool
//! - **`serde`**: serialization for every model type
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_frames::{get_active_dialogues, get_frame_data_at_time, parse};
//!
//! let script_text = r"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [V4+ Styles]
//! Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
//! Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,{\t(0,1000,\fs40)}Hello World!
//! ";
//!
//! let subtitle = parse(script_text);
//! let active = get_active_dialogues(&subtitle, 0.5);
//! assert_eq!(active.len(), 1);
//!
//! let style = subtitle.style_or_default(&active[0].style);
//! let frame = get_frame_data_at_time(active[0], 0.5, &style);
//! assert_eq!(frame.font_size, 30.0);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod animation;
pub mod parser;
pub mod tags;
pub mod utils;

pub use animation::{
    generate_frame_data, get_active_dialogues, get_frame_data_at_time, FrameSample, FrameSampler,
    SamplerConfig, DEFAULT_FRAME_RATE, MAX_FRAME_SAMPLES,
};
pub use parser::{
    AssSubtitle, DialogueEvent, IssueCategory, IssueSeverity, ParseError, ParseIssue, ScriptInfo,
    Style,
};
pub use tags::{
    extract_colors, extract_positioning, OverrideKind, OverrideTag, TextSegment, Transition,
};
pub use utils::{apply_alpha_to_color, interpolate_color, parse_color, parse_time, CoreError, Rgba};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse script text into an [`AssSubtitle`]
///
/// Never fails: see [`AssSubtitle::issues`] for rows that were dropped.
#[must_use]
pub fn parse(source: &str) -> AssSubtitle {
    AssSubtitle::parse(source)
}

/// Script format declared by `ScriptType` in `[Script Info]`
///
/// # Examples
///
/// ```rust
/// use ass_frames::ScriptVersion;
///
/// assert_eq!(ScriptVersion::from_header("v4.00"), Some(ScriptVersion::SsaV4));
/// assert_eq!(ScriptVersion::from_header("v4.00+"), Some(ScriptVersion::AssV4));
/// assert_eq!(ScriptVersion::from_header("v4.00++"), Some(ScriptVersion::AssV4Plus));
/// assert_eq!(ScriptVersion::from_header("invalid"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptVersion {
    /// SSA v4.00 (`[V4 Styles]`)
    SsaV4,
    /// ASS v4.00+ (`[V4+ Styles]`)
    AssV4,
    /// ASS v4.00++ with extended fields
    AssV4Plus,
}

impl ScriptVersion {
    /// Parse a `ScriptType` header value
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        match header.trim() {
            "v4.00" => Some(Self::SsaV4),
            "v4.00+" => Some(Self::AssV4),
            "v4.00++" | "v4.00+ extended" => Some(Self::AssV4Plus),
            _ => None,
        }
    }
}

/// Result type for strict codec operations
pub type Result<T> = core::result::Result<T, CoreError>;
