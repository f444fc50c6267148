//! ASS script parser module
//!
//! Turns script text into an [`AssSubtitle`]: script metadata, a name-keyed
//! style table, and the ordered dialogue list with derived override segments
//! and transitions. Parsing never fails; malformed rows are dropped and
//! reported through [`AssSubtitle::issues`].
//!
//! # Example
//!
//! ```rust
//! use ass_frames::parser::AssSubtitle;
//!
//! let script_text = r"
//! [Script Info]
//! Title: Example
//! ScriptType: v4.00+
//!
//! [Events]
//! Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
//! Dialogue: 0,0:00:00.00,0:00:05.00,Default,,0,0,0,,Hello World!
//! ";
//!
//! let subtitle = AssSubtitle::parse(script_text);
//! assert_eq!(subtitle.script_info().get("Title"), Some("Example"));
//! assert_eq!(subtitle.dialogues().len(), 1);
//! ```

use crate::animation::{generate_frame_data, get_frame_data_at_time, FrameSample};
use crate::utils::FastHashMap;
use std::borrow::Cow;

pub mod ast;
pub mod errors;
mod main;
pub mod sections;

pub use ast::{DialogueEvent, ScriptInfo, Style, TextFormatting};
pub use errors::{IssueCategory, IssueSeverity, ParseError, ParseIssue};

use main::Parser;

/// Parsed subtitle script
///
/// Read-only after parsing apart from each dialogue's write-once frame cache.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssSubtitle {
    /// `[Script Info]` fields
    script_info: ScriptInfo,

    /// Styles keyed by name; later definitions replace earlier ones
    styles: FastHashMap<String, Style>,

    /// Accepted dialogues in source order
    dialogues: Vec<DialogueEvent>,

    /// Recoverable problems found while parsing
    issues: Vec<ParseIssue>,
}

impl AssSubtitle {
    /// Parse script text
    ///
    /// Always returns a (possibly partial) script; see [`issues`](Self::issues)
    /// for what was dropped.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn parse(source: &str) -> Self {
        Parser::new(source).parse()
    }

    /// Script metadata
    #[must_use]
    pub const fn script_info(&self) -> &ScriptInfo {
        &self.script_info
    }

    /// Style table
    #[must_use]
    pub const fn styles(&self) -> &FastHashMap<String, Style> {
        &self.styles
    }

    /// Accepted dialogues in source order
    #[must_use]
    pub fn dialogues(&self) -> &[DialogueEvent] {
        &self.dialogues
    }

    /// Issues collected while parsing
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Look up a style by name
    #[must_use]
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    /// Look up a style, falling back to [`Style::default`] when unresolved
    #[must_use]
    pub fn style_or_default(&self, name: &str) -> Cow<'_, Style> {
        self.style(name)
            .map_or_else(|| Cow::Owned(Style::default()), Cow::Borrowed)
    }

    /// Dialogues visible at `time` seconds
    #[must_use]
    pub fn active_dialogues(&self, time: f64) -> Vec<&DialogueEvent> {
        crate::animation::get_active_dialogues(self, time)
    }

    /// Resolved visual state of `dialogue` at `time` seconds
    ///
    /// Resolves the dialogue's style against this script's table.
    ///
    /// ```rust
    /// # use ass_frames::parser::AssSubtitle;
    /// let subtitle = AssSubtitle::parse(
    ///     "[Events]\nDialogue: 0,0:00:00.00,0:00:01.00,Missing,,0,0,0,,{\\t(0,1000,\\fs40)}x",
    /// );
    /// let dialogue = &subtitle.dialogues()[0];
    /// assert_eq!(subtitle.frame_at(dialogue, 1.0).font_size, 40.0);
    /// ```
    #[must_use]
    pub fn frame_at(&self, dialogue: &DialogueEvent, time: f64) -> FrameSample {
        get_frame_data_at_time(dialogue, time, &self.style_or_default(&dialogue.style))
    }

    /// Fill every dialogue's frame cache at `frame_rate`
    ///
    /// Dialogues whose cache is already populated are left untouched. With
    /// the `parallel` feature the work is spread over the rayon pool.
    pub fn prepare_frames(&self, frame_rate: f64) {
        let fill = |dialogue: &DialogueEvent| {
            let style = self.style_or_default(&dialogue.style);
            dialogue.frames_or_init(|| generate_frame_data(dialogue, &style, frame_rate));
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.dialogues.par_iter().for_each(fill);
        }

        #[cfg(not(feature = "parallel"))]
        self.dialogues.iter().for_each(fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Rgba;

    const SCRIPT: &str = r"[Script Info]
Title: Sample
PlayResX: 1280
PlayResY: 720

[V4+ Styles]
Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding
Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1
Style: Red,Arial,24,&H000000FF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,Hello
Dialogue: 0,0:00:02.00,0:00:04.00,Red,,0,0,0,,{\t(0,1000,\fs48)}World
";

    #[test]
    fn parses_all_sections() {
        let subtitle = AssSubtitle::parse(SCRIPT);
        assert_eq!(subtitle.script_info().play_res_x(), Some(1280));
        assert_eq!(subtitle.styles().len(), 2);
        assert_eq!(subtitle.dialogues().len(), 2);
        assert!(subtitle.issues().is_empty());
        assert_eq!(
            subtitle.style("Red").map(|s| s.primary_color),
            Some(Rgba::RED)
        );
    }

    #[test]
    fn duplicate_style_names_overwrite() {
        let source = "[V4+ Styles]\nFormat: Name, Fontsize\nStyle: A,10\nStyle: A,30\n";
        let subtitle = AssSubtitle::parse(source);
        assert_eq!(subtitle.styles().len(), 1);
        assert_eq!(subtitle.style("A").map(|s| s.font_size), Some(30.0));
    }

    #[test]
    fn unresolved_style_uses_default() {
        let subtitle = AssSubtitle::parse(SCRIPT);
        assert!(matches!(subtitle.style_or_default("Nope"), Cow::Owned(_)));
        assert!(matches!(subtitle.style_or_default("Red"), Cow::Borrowed(_)));
    }

    #[test]
    fn prepare_frames_fills_every_cache() {
        let subtitle = AssSubtitle::parse(SCRIPT);
        subtitle.prepare_frames(10.0);
        for dialogue in subtitle.dialogues() {
            let frames = dialogue.cached_frames().map_or(0, <[FrameSample]>::len);
            assert_eq!(frames, 21);
        }

        // Second call keeps the first frame rate
        subtitle.prepare_frames(60.0);
        assert_eq!(
            subtitle.dialogues()[0].cached_frames().map(<[FrameSample]>::len),
            Some(21)
        );
    }

    #[test]
    fn frame_at_uses_dialogue_style() {
        let subtitle = AssSubtitle::parse(SCRIPT);
        let world = &subtitle.dialogues()[1];
        assert_eq!(subtitle.frame_at(world, 2.0).font_size, 24.0);
        assert_eq!(subtitle.frame_at(world, 2.5).font_size, 36.0);
        assert_eq!(subtitle.frame_at(world, 3.5).font_size, 48.0);
        assert_eq!(subtitle.active_dialogues(2.5).len(), 2);
    }
}
