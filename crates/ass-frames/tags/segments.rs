//! Splitting dialogue text into plain runs and override blocks
//!
//! Each plain run becomes a [`TextSegment`] carrying a snapshot of every
//! override seen earlier in the line. Snapshots are cumulative and keep
//! duplicates: a later `\fs` is appended after an earlier one, and consumers
//! apply the list in order so the last tag wins.

use super::{parse_override_block, OverrideTag};

/// Contiguous run of plain text with the overrides active before it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSegment {
    /// Plain text of the run
    pub text: String,
    /// Char offset of the first character in the original text
    pub start: usize,
    /// Char offset one past the last character
    pub end: usize,
    /// Every override accumulated before this run, in source order
    pub overrides: Vec<OverrideTag>,
}

/// Piece of dialogue text produced by [`split_pieces`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    /// Plain run `[start, end)` in chars
    Text {
        start: usize,
        end: usize,
        text: String,
    },
    /// Override block body; `offset` is the char offset of its `{`
    Block { offset: usize, content: String },
}

/// Split text into alternating plain runs and `{...}` blocks
///
/// An unterminated `{` is treated as plain text. Empty runs between adjacent
/// blocks are not emitted.
pub(crate) fn split_pieces(text: &str) -> Vec<Piece> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut run_start = 0;
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] == '{' {
            if let Some(rel) = chars[pos + 1..].iter().position(|&c| c == '}') {
                let close = pos + 1 + rel;
                if pos > run_start {
                    pieces.push(Piece::Text {
                        start: run_start,
                        end: pos,
                        text: chars[run_start..pos].iter().collect(),
                    });
                }
                pieces.push(Piece::Block {
                    offset: pos,
                    content: chars[pos + 1..close].iter().collect(),
                });
                pos = close + 1;
                run_start = pos;
                continue;
            }
        }
        pos += 1;
    }

    if run_start < chars.len() {
        pieces.push(Piece::Text {
            start: run_start,
            end: chars.len(),
            text: chars[run_start..].iter().collect(),
        });
    }

    pieces
}

/// Override block bodies with their char offsets
pub(crate) fn blocks(text: &str) -> impl Iterator<Item = (usize, String)> {
    split_pieces(text).into_iter().filter_map(|piece| match piece {
        Piece::Block { offset, content } => Some((offset, content)),
        Piece::Text { .. } => None,
    })
}

/// Build the segment list for a dialogue line
///
/// # Example
///
/// ```rust
/// use ass_frames::tags::{parse_segments, OverrideKind};
///
/// let segments = parse_segments("{\\c&H00FF00&}Green {\\fs30}big");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].text, "Green ");
/// assert_eq!(segments[0].overrides[0].kind, OverrideKind::PrimaryColor);
/// // cumulative: the second run still carries the color
/// assert_eq!(segments[1].overrides.len(), 2);
/// assert_eq!(segments[1].start, 26);
/// ```
#[must_use]
pub fn parse_segments(text: &str) -> Vec<TextSegment> {
    let mut current: Vec<OverrideTag> = Vec::new();
    let mut segments = Vec::new();

    for piece in split_pieces(text) {
        match piece {
            Piece::Block { offset, content } => {
                parse_override_block(&content, offset, &mut current);
            }
            Piece::Text { start, end, text } => segments.push(TextSegment {
                text,
                start,
                end,
                overrides: current.clone(),
            }),
        }
    }

    segments
}

/// Remove every `{...}` block, keeping plain text verbatim
///
/// ```rust
/// # use ass_frames::tags::strip_override_blocks;
/// assert_eq!(strip_override_blocks("{\\b1}Hi{\\b0}, there"), "Hi, there");
/// assert_eq!(strip_override_blocks("open { brace"), "open { brace");
/// ```
#[must_use]
pub fn strip_override_blocks(text: &str) -> String {
    split_pieces(text)
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Text { text, .. } => Some(text),
            Piece::Block { .. } => None,
        })
        .collect()
}
