//! Point queries over parsed dialogues

use super::{FrameSample, FrameSampler};
use crate::parser::ast::{DialogueEvent, Style};
use crate::parser::AssSubtitle;

/// Resolved visual state of `dialogue` at `current_time` seconds
///
/// Samples the dialogue at the default 30 fps on first use and caches the
/// result on the dialogue. The answer is the cached sample nearest to the
/// requested instant; on an exact tie the earlier sample wins.
///
/// ```rust
/// use ass_frames::animation::get_frame_data_at_time;
/// use ass_frames::parser::ast::{DialogueEvent, Style};
///
/// let dialogue = DialogueEvent::new(10.0, 11.0, "Default", "{\\t(0,1000,\\fs40)}x");
/// let frame = get_frame_data_at_time(&dialogue, 10.5, &Style::default());
///
/// assert_eq!(frame.timestamp, 500.0);
/// assert_eq!(frame.font_size, 30.0);
/// ```
#[must_use]
pub fn get_frame_data_at_time(
    dialogue: &DialogueEvent,
    current_time: f64,
    style: &Style,
) -> FrameSample {
    FrameSampler::default().frame_at(dialogue, current_time, style)
}

/// Dialogues whose `[start, end]` contains `current_time`, in script order
#[must_use]
pub fn get_active_dialogues(subtitle: &AssSubtitle, current_time: f64) -> Vec<&DialogueEvent> {
    subtitle
        .dialogues()
        .iter()
        .filter(|dialogue| dialogue.contains_time(current_time))
        .collect()
}

/// Sample closest to `relative_ms`; the first of equally close samples wins
pub(super) fn nearest_frame(frames: &[FrameSample], relative_ms: f64) -> Option<&FrameSample> {
    frames.iter().min_by(|a, b| {
        let da = (a.timestamp - relative_ms).abs();
        let db = (b.timestamp - relative_ms).abs();
        da.total_cmp(&db)
    })
}
