//! Edge case and error recovery tests for script parsing.
//!
//! Covers section scanning, style table building and dialogue parsing through
//! the public `parse` entry point.

use ass_frames::{parse, IssueCategory, IssueSeverity, Rgba};

const STYLE_FORMAT: &str = "Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, OutlineColour, BackColour, Bold, Italic, Underline, StrikeOut, ScaleX, ScaleY, Spacing, Angle, BorderStyle, Outline, Shadow, Alignment, MarginL, MarginR, MarginV, Encoding";
const EVENT_FORMAT: &str =
    "Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

fn script(styles: &[&str], events: &[&str]) -> String {
    format!(
        "[Script Info]\nTitle: Edge\n\n[V4+ Styles]\n{STYLE_FORMAT}\n{}\n\n[Events]\n{EVENT_FORMAT}\n{}\n",
        styles.join("\n"),
        events.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEFAULT_STYLE: &str = "Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10,1";

    #[test]
    fn test_single_dialogue() {
        let subtitle = parse(&script(
            &[DEFAULT_STYLE],
            &["Dialogue: 0,0:00:01.00,0:00:03.00,Default,,0,0,0,,Hello"],
        ));

        assert_eq!(subtitle.dialogues().len(), 1);
        let dialogue = &subtitle.dialogues()[0];
        assert_eq!(dialogue.start, 1.0);
        assert_eq!(dialogue.end, 3.0);
        assert_eq!(dialogue.text, "Hello");
        assert_eq!(subtitle.style("Default").map(|s| s.font_size), Some(20.0));
    }

    #[test]
    fn test_short_style_row_is_dropped() {
        let short = "Style: Broken,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,2,2,10,10,10";
        let subtitle = parse(&script(&[DEFAULT_STYLE, short], &[]));

        assert!(subtitle.style("Broken").is_none());
        assert_eq!(subtitle.styles().len(), 1);
        assert_eq!(subtitle.issues().len(), 1);
        assert_eq!(subtitle.issues()[0].category, IssueCategory::Format);
        assert_eq!(subtitle.issues()[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn test_dropped_dialogues_keep_order_of_survivors() {
        let subtitle = parse(&script(
            &[DEFAULT_STYLE],
            &[
                "Dialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,First",
                "Dialogue: 0,0:00:02.00,0:00:01.00,Default,,0,0,0,,Backwards",
                "Dialogue: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,{\\b1}",
                "Dialogue: 0,0:00:01.00,0:00:02.00,Default",
                "Dialogue: 0,0:00:03.00,0:00:04.00,Default,,0,0,0,,Last",
            ],
        ));

        let texts: Vec<&str> = subtitle.dialogues().iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["First", "Last"]);
        assert_eq!(subtitle.issues().len(), 3);
        assert!(subtitle.dialogues().iter().all(|d| d.start <= d.end));
    }

    #[test]
    fn test_unresolved_style_reference_is_kept() {
        let subtitle = parse(&script(
            &[],
            &["Dialogue: 0,0:00:00.00,0:00:01.00,Ghost,,0,0,0,,Boo"],
        ));
        assert_eq!(subtitle.dialogues()[0].style, "Ghost");
        assert_eq!(subtitle.style_or_default("Ghost").name, "Default");
    }

    #[test]
    fn test_lines_under_unknown_sections_are_ignored() {
        let source = "[Fonts]\nfontname: x.ttf\nDialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,Hidden\n\
                      [Events]\nDialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,Shown\n";
        let subtitle = parse(source);

        assert_eq!(subtitle.dialogues().len(), 1);
        assert_eq!(subtitle.dialogues()[0].text, "Shown");
        assert_eq!(subtitle.issues()[0].severity, IssueSeverity::Info);
    }

    #[test]
    fn test_crlf_and_indentation() {
        let source = "[Script Info]\r\n  PlayResX: 640\r\n[Events]\r\n\tDialogue: 0,0:00:00.00,0:00:01.00,Default,,0,0,0,,Hi\r\n";
        let subtitle = parse(source);
        assert_eq!(subtitle.script_info().play_res_x(), Some(640));
        assert_eq!(subtitle.dialogues()[0].text, "Hi");
    }

    #[test]
    fn test_legacy_v4_styles_section() {
        let source = "[V4 Styles]\n\
                      Format: Name, Fontname, Fontsize, PrimaryColour, SecondaryColour, TertiaryColour, BackColour\n\
                      Style: Old,Arial,18,&H00FFFFFF,&H000000FF,&H0000FF00,&H00000000\n";
        let subtitle = parse(source);
        let style = subtitle.style("Old").cloned().unwrap_or_default();
        assert_eq!(style.name, "Old");
        assert_eq!(style.outline_color, Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn test_format_can_be_redefined() {
        let source = "[Events]\n\
                      Format: Start, End, Text\n\
                      Dialogue: 0:00:00.00,0:00:01.00,a\n\
                      Format: Text, Start, End\n\
                      Dialogue: b,0:00:02.00,0:00:03.00\n";
        let subtitle = parse(source);
        let texts: Vec<&str> = subtitle.dialogues().iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(subtitle.dialogues()[1].start, 2.0);
    }

    #[test]
    fn test_script_info_preserves_unknown_keys() {
        let subtitle = parse("[Script Info]\nWrapStyle: 0\nCustom Key: some: value\n");
        assert_eq!(subtitle.script_info().get("Custom Key"), Some("some: value"));
        assert_eq!(subtitle.script_info().get("WrapStyle"), Some("0"));
    }
}
