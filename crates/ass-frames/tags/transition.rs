//! `\t(...)` transition extraction
//!
//! A transition animates one or more override properties toward target
//! values over a window measured in milliseconds from the dialogue start.
//! Supported argument shapes:
//!
//! - `\t(t1,t2,tags)` - linear
//! - `\t(t1,t2,accel,tags)` - progress raised to `accel`
//!
//! Shorter forms (`\t(tags)`, `\t(accel,tags)`) carry no window and are
//! skipped.

use super::{
    paren_args, parse_number, parse_override_block, scan_block, segments, OverrideKind, OverrideTag,
};

/// Time-windowed animation toward a set of override targets
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    /// Window start in ms relative to the dialogue start
    pub start: f64,
    /// Window end in ms relative to the dialogue start (`end >= start`)
    pub end: f64,
    /// Acceleration exponent applied to linear progress
    pub accel: f64,
    /// Target payload per property, one entry per kind, ordered by the
    /// position of each kind's last fragment in the source
    pub targets: Vec<(OverrideKind, String)>,
}

impl Transition {
    /// Create a linear transition over `[start, end]`
    ///
    /// The bounds are swapped if given in reverse order.
    #[must_use]
    pub fn new(start: f64, end: f64, targets: Vec<(OverrideKind, String)>) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        Self {
            start,
            end,
            accel: 1.0,
            targets,
        }
    }

    /// Replace the acceleration exponent; non-positive or non-finite values
    /// leave the transition linear
    #[must_use]
    pub fn with_accel(mut self, accel: f64) -> Self {
        self.accel = if accel.is_finite() && accel > 0.0 {
            accel
        } else {
            1.0
        };
        self
    }

    /// Progress at `t` ms, or `None` before the window opens
    ///
    /// Past the window the target is held (progress `1.0`). A zero-width
    /// window jumps straight to `1.0` at its start.
    ///
    /// ```rust
    /// # use ass_frames::tags::Transition;
    /// let t = Transition::new(0.0, 1000.0, Vec::new());
    /// assert_eq!(t.progress(500.0), Some(0.5));
    /// assert_eq!(t.progress(2000.0), Some(1.0));
    /// assert_eq!(t.progress(-1.0), None);
    /// ```
    #[must_use]
    pub fn progress(&self, t: f64) -> Option<f64> {
        if t < self.start {
            return None;
        }

        let width = self.end - self.start;
        if width <= 0.0 {
            return Some(1.0);
        }

        let linear = ((t - self.start) / width).clamp(0.0, 1.0);
        if (self.accel - 1.0).abs() < f64::EPSILON {
            Some(linear)
        } else {
            Some(linear.powf(self.accel))
        }
    }

    /// Window width in ms
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Target payload for `kind`, if the transition animates it
    #[must_use]
    pub fn target(&self, kind: OverrideKind) -> Option<&str> {
        self.targets
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| value.as_str())
    }
}

/// Keep the last fragment per kind, in the order those last fragments appear
fn collapse_targets(tags: Vec<OverrideTag>) -> Vec<(OverrideKind, String)> {
    let mut targets: Vec<(OverrideKind, String)> = Vec::with_capacity(tags.len());
    for tag in tags {
        targets.retain(|(kind, _)| *kind != tag.kind);
        targets.push((tag.kind, tag.value));
    }
    targets
}

/// Collect every well-formed `\t(...)` directive in a dialogue line
///
/// Directives are returned in source order across all override blocks.
///
/// ```rust
/// # use ass_frames::tags::{extract_transitions, OverrideKind};
/// let transitions = extract_transitions("{\\t(0,1000,\\fs40)}Grow");
/// assert_eq!(transitions.len(), 1);
/// assert_eq!(transitions[0].end, 1000.0);
/// assert_eq!(transitions[0].target(OverrideKind::FontSize), Some("40"));
/// ```
#[must_use]
pub fn extract_transitions(text: &str) -> Vec<Transition> {
    let mut transitions = Vec::new();

    for (offset, content) in segments::blocks(text) {
        for (name, args) in scan_block(&content) {
            if name != "t" {
                continue;
            }
            if let Some(transition) = parse_transition(args, offset) {
                transitions.push(transition);
            }
        }
    }

    transitions
}

/// Decode the argument list of one `\t`
fn parse_transition(args: &str, offset: usize) -> Option<Transition> {
    let parts = paren_args(args)?;
    if parts.len() < 3 {
        tracing::debug!(offset, args, "skipping \\t with fewer than 3 arguments");
        return None;
    }

    let (Some(start), Some(end)) = (parse_number(parts[0]), parse_number(parts[1])) else {
        tracing::debug!(offset, args, "skipping \\t with non-numeric window");
        return None;
    };
    if end < start {
        tracing::debug!(offset, start, end, "skipping \\t ending before it starts");
        return None;
    }

    let (accel, fragments) = match parse_number(parts[2]) {
        Some(accel) if parts.len() >= 4 => (accel, &parts[3..]),
        _ => (1.0, &parts[2..]),
    };

    let mut tags = Vec::new();
    parse_override_block(&fragments.join(","), offset, &mut tags);
    if tags.is_empty() {
        tracing::debug!(offset, args, "skipping \\t without recognised targets");
        return None;
    }

    Some(Transition::new(start, end, collapse_targets(tags)).with_accel(accel))
}
