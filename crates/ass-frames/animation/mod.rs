//! Frame sampling: resolved visual state over a dialogue's lifetime
//!
//! A dialogue's visual state starts from its style, takes the overrides that
//! precede its first text run, and is then animated by its `\t(...)`
//! transitions. [`generate_frame_data`] samples that state at a fixed rate
//! from the dialogue start to its end inclusive.
//!
//! Transitions compose sequentially: for each property, every transition
//! active at `t` interpolates from the value left by the transitions before
//! it in list order.
//!
//! # Example
//!
//! ```rust
//! use ass_frames::animation::generate_frame_data;
//! use ass_frames::parser::ast::{DialogueEvent, Style};
//!
//! let dialogue = DialogueEvent::new(0.0, 1.0, "Default", "{\\t(0,1000,\\fs40)}Grow");
//! let frames = generate_frame_data(&dialogue, &Style::default(), 30.0);
//!
//! assert_eq!(frames.len(), 31);
//! assert_eq!(frames[15].timestamp, 500.0);
//! assert_eq!(frames[15].font_size, 30.0);
//! assert_eq!(frames[30].font_size, 40.0);
//! ```

mod query;

pub use query::{get_active_dialogues, get_frame_data_at_time};

use crate::parser::ast::{DialogueEvent, Style};
use crate::parser::AssSubtitle;
use crate::tags::{decode_value, OverrideKind, OverrideTag, OverrideValue, Transition};
use crate::utils::{interpolate_color, lerp, Rgba};

/// Sample rate used when none is configured
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Upper bound on the samples generated for one dialogue
///
/// Longer dialogues are sampled at a reduced rate so the sequence still
/// spans the whole duration.
pub const MAX_FRAME_SAMPLES: usize = 100_000;

/// Resolved visual state of a dialogue at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameSample {
    /// Milliseconds from the dialogue start
    pub timestamp: f64,
    /// Fill color
    pub primary_color: Rgba,
    /// Secondary fill color
    pub secondary_color: Rgba,
    /// Outline color
    pub outline_color: Rgba,
    /// Shadow color
    pub back_color: Rgba,
    /// Fill opacity (`0.0` transparent, `1.0` opaque)
    pub alpha: f64,
    /// Font size in points
    pub font_size: f64,
    /// Z rotation in degrees
    pub rotation: f64,
    /// Horizontal scale percentage
    pub scale_x: f64,
    /// Vertical scale percentage
    pub scale_y: f64,
}

impl FrameSample {
    /// State at `timestamp = 0` before any override
    #[must_use]
    pub fn from_style(style: &Style) -> Self {
        Self {
            timestamp: 0.0,
            primary_color: style.primary_color,
            secondary_color: style.secondary_color,
            outline_color: style.outline_color,
            back_color: style.back_color,
            alpha: 1.0,
            font_size: style.font_size,
            rotation: style.angle,
            scale_x: style.scale_x,
            scale_y: style.scale_y,
        }
    }

    /// Apply an override immediately
    pub fn apply(&mut self, tag: &OverrideTag) {
        self.blend(tag.kind, tag.decoded(), 1.0);
    }

    /// Move one property toward `value` by `progress`
    ///
    /// `progress = 0` leaves the property unchanged and `progress = 1` lands
    /// exactly on `value`. Color tags move the RGB channels only; opacity
    /// belongs to the alpha tags.
    pub fn blend(&mut self, kind: OverrideKind, value: OverrideValue, progress: f64) {
        match (kind, value) {
            (OverrideKind::PrimaryColor, OverrideValue::Color(c)) => {
                mix_rgb(&mut self.primary_color, c, progress);
            }
            (OverrideKind::SecondaryColor, OverrideValue::Color(c)) => {
                mix_rgb(&mut self.secondary_color, c, progress);
            }
            (OverrideKind::OutlineColor, OverrideValue::Color(c)) => {
                mix_rgb(&mut self.outline_color, c, progress);
            }
            (OverrideKind::BackColor, OverrideValue::Color(c)) => {
                mix_rgb(&mut self.back_color, c, progress);
            }
            (OverrideKind::Alpha, OverrideValue::Alpha(a)) => {
                self.alpha = lerp(self.alpha, a, progress);
                for color in [
                    &mut self.secondary_color,
                    &mut self.outline_color,
                    &mut self.back_color,
                ] {
                    color.a = lerp(color.a, a, progress);
                }
            }
            (OverrideKind::PrimaryAlpha, OverrideValue::Alpha(a)) => {
                self.alpha = lerp(self.alpha, a, progress);
            }
            (OverrideKind::SecondaryAlpha, OverrideValue::Alpha(a)) => {
                self.secondary_color.a = lerp(self.secondary_color.a, a, progress);
            }
            (OverrideKind::OutlineAlpha, OverrideValue::Alpha(a)) => {
                self.outline_color.a = lerp(self.outline_color.a, a, progress);
            }
            (OverrideKind::BackAlpha, OverrideValue::Alpha(a)) => {
                self.back_color.a = lerp(self.back_color.a, a, progress);
            }
            (OverrideKind::FontSize, OverrideValue::Number(n)) => {
                self.font_size = lerp(self.font_size, n, progress);
            }
            (OverrideKind::Rotation, OverrideValue::Number(n)) => {
                self.rotation = lerp(self.rotation, n, progress);
            }
            (OverrideKind::ScaleX, OverrideValue::Number(n)) => {
                self.scale_x = lerp(self.scale_x, n, progress);
            }
            (OverrideKind::ScaleY, OverrideValue::Number(n)) => {
                self.scale_y = lerp(self.scale_y, n, progress);
            }
            _ => {}
        }
    }
}

impl Default for FrameSample {
    fn default() -> Self {
        Self::from_style(&Style::default())
    }
}

/// Interpolate RGB toward `target`, keeping the current opacity
fn mix_rgb(color: &mut Rgba, target: Rgba, progress: f64) {
    let alpha = color.a;
    *color = interpolate_color(*color, target, progress).with_alpha(alpha);
}

/// Runtime sampler settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Samples per second
    pub frame_rate: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl SamplerConfig {
    /// Set the sample rate; non-finite or non-positive rates fall back to
    /// [`DEFAULT_FRAME_RATE`]
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = sanitize_frame_rate(frame_rate);
        self
    }
}

fn sanitize_frame_rate(frame_rate: f64) -> f64 {
    if frame_rate.is_finite() && frame_rate > 0.0 {
        frame_rate
    } else {
        DEFAULT_FRAME_RATE
    }
}

/// Frame sampler bound to a [`SamplerConfig`]
///
/// ```rust
/// use ass_frames::animation::{FrameSampler, SamplerConfig};
/// use ass_frames::parser::ast::{DialogueEvent, Style};
///
/// let sampler = FrameSampler::new(SamplerConfig::default().with_frame_rate(10.0));
/// let dialogue = DialogueEvent::new(0.0, 0.5, "Default", "Hi");
///
/// assert_eq!(sampler.frames(&dialogue, &Style::default()).len(), 6);
/// assert!(dialogue.cached_frames().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameSampler {
    config: SamplerConfig,
}

impl FrameSampler {
    /// Create a sampler
    #[must_use]
    pub const fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> SamplerConfig {
        self.config
    }

    /// Sample a dialogue without touching its cache
    #[must_use]
    pub fn generate(&self, dialogue: &DialogueEvent, style: &Style) -> Vec<FrameSample> {
        generate_frame_data(dialogue, style, self.config.frame_rate)
    }

    /// Cached frames of a dialogue, sampling them on first use
    pub fn frames<'a>(&self, dialogue: &'a DialogueEvent, style: &Style) -> &'a [FrameSample] {
        dialogue.frames_or_init(|| {
            let frames = self.generate(dialogue, style);
            tracing::trace!(
                start = dialogue.start,
                frames = frames.len(),
                "populated frame cache"
            );
            frames
        })
    }

    /// Nearest cached sample to `time` seconds
    #[must_use]
    pub fn frame_at(&self, dialogue: &DialogueEvent, time: f64, style: &Style) -> FrameSample {
        let relative = (time - dialogue.start) * 1000.0;
        query::nearest_frame(self.frames(dialogue, style), relative)
            .copied()
            .unwrap_or_else(|| FrameSample::from_style(style))
    }

    /// Fill the cache of every dialogue in `subtitle`
    pub fn prepare(&self, subtitle: &AssSubtitle) {
        subtitle.prepare_frames(self.config.frame_rate);
    }
}

/// Sample a dialogue's visual state from its start to its end
///
/// Timestamps are `i * 1000 / frame_rate` milliseconds, strictly ascending;
/// the last one is exactly the dialogue duration. A non-finite or
/// non-positive `frame_rate` is replaced by [`DEFAULT_FRAME_RATE`], and the
/// rate is lowered when needed to stay within [`MAX_FRAME_SAMPLES`].
#[must_use]
pub fn generate_frame_data(
    dialogue: &DialogueEvent,
    style: &Style,
    frame_rate: f64,
) -> Vec<FrameSample> {
    let duration = dialogue.duration_ms().max(0.0).min(f64::MAX);
    let frame_rate = bounded_rate(sanitize_frame_rate(frame_rate), duration);

    let mut initial = FrameSample::from_style(style);
    if let Some(first) = dialogue.segments.first() {
        for tag in &first.overrides {
            initial.apply(tag);
        }
    }

    let transitions: Vec<(&Transition, Vec<(OverrideKind, OverrideValue)>)> = dialogue
        .transitions
        .iter()
        .map(|t| {
            let targets = t
                .targets
                .iter()
                .map(|(kind, value)| (*kind, decode_value(*kind, value)))
                .collect();
            (t, targets)
        })
        .collect();

    let capacity = ((duration * frame_rate / 1000.0).ceil() as usize)
        .saturating_add(1)
        .min(MAX_FRAME_SAMPLES + 1);
    let mut frames = Vec::with_capacity(capacity);
    let mut index = 0u64;

    loop {
        let timestamp = (index as f64 * 1000.0 / frame_rate).min(duration);

        let mut frame = initial;
        frame.timestamp = timestamp;
        for (transition, targets) in &transitions {
            if let Some(progress) = transition.progress(timestamp) {
                for &(kind, value) in targets {
                    frame.blend(kind, value, progress);
                }
            }
        }
        frames.push(frame);

        if timestamp >= duration {
            break;
        }
        index += 1;
    }

    frames
}

/// Largest rate not exceeding `frame_rate` that covers `duration` ms within
/// [`MAX_FRAME_SAMPLES`]
fn bounded_rate(frame_rate: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return frame_rate;
    }
    let ceiling = (MAX_FRAME_SAMPLES - 1) as f64 * 1000.0 / duration;
    frame_rate.min(ceiling)
}
