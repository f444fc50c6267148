//! Time and color codec plus shared helpers
//!
//! Stateless conversions between ASS timestamp/color text and numeric
//! seconds / [`Rgba`]. The lenient decoders (`parse_time`, `parse_color`)
//! never fail: malformed input degrades to `0.0` seconds or opaque white.
//! Strict `try_*` variants report a [`CoreError`] instead.
//!
//! # Example
//!
//! ```rust
//! use ass_frames::utils::{parse_color, parse_time, Rgba};
//!
//! assert_eq!(parse_time("0:01:30.50"), 90.5);
//! assert_eq!(parse_color("&H0000FF&"), Rgba::opaque(255, 0, 0));
//! ```

use core::{fmt, str::FromStr};

pub mod color;
pub mod errors;
pub mod hashers;

pub use color::Rgba;
pub use errors::CoreError;
pub use hashers::{create_hash_map, create_hash_map_with_capacity, FastHashMap};

/// Decode an ASS timestamp (`H:MM:SS.CS`) into seconds
///
/// Best-effort: input that does not split into exactly three colon-separated
/// fields yields `0.0`, and any individual field that fails to parse counts
/// as zero.
///
/// # Example
///
/// ```rust
/// # use ass_frames::utils::parse_time;
/// assert_eq!(parse_time("1:00:00.00"), 3600.0);
/// assert_eq!(parse_time("0:xx:02.50"), 2.5);
/// assert_eq!(parse_time("02.50"), 0.0);
/// ```
#[must_use]
pub fn parse_time(time_str: &str) -> f64 {
    let parts: Vec<&str> = time_str.trim().split(':').collect();
    if parts.len() != 3 {
        return 0.0;
    }

    let hours = parts[0].trim().parse::<i64>().map_or(0.0, |h| h as f64);
    let minutes = parts[1].trim().parse::<i64>().map_or(0.0, |m| m as f64);
    let seconds = parts[2]
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|s| s.is_finite())
        .unwrap_or(0.0);

    hours.mul_add(3600.0, minutes.mul_add(60.0, seconds))
}

/// Strictly decode an ASS timestamp into seconds
///
/// # Errors
///
/// Returns [`CoreError::InvalidTime`] if the text is not three
/// colon-separated fields with non-negative integer hours/minutes, minutes
/// below 60 and a finite non-negative seconds value below 60.
pub fn try_parse_time(time_str: &str) -> Result<f64, CoreError> {
    let parts: Vec<&str> = time_str.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(CoreError::invalid_time(time_str, "expected H:MM:SS.CS"));
    }

    let hours: u32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| CoreError::invalid_time(time_str, "invalid hours"))?;
    let minutes: u32 = parts[1]
        .trim()
        .parse()
        .map_err(|_| CoreError::invalid_time(time_str, "invalid minutes"))?;
    let seconds: f64 = parts[2]
        .trim()
        .parse()
        .map_err(|_| CoreError::invalid_time(time_str, "invalid seconds"))?;

    if minutes >= 60 {
        return Err(CoreError::invalid_time(time_str, "minutes must be < 60"));
    }
    if !seconds.is_finite() || !(0.0..60.0).contains(&seconds) {
        return Err(CoreError::invalid_time(time_str, "seconds must be in [0, 60)"));
    }

    Ok(f64::from(hours).mul_add(3600.0, f64::from(minutes).mul_add(60.0, seconds)))
}

/// Format seconds back to ASS time (`H:MM:SS.CC`)
///
/// Negative or non-finite input formats as zero.
///
/// ```rust
/// # use ass_frames::utils::format_ass_time;
/// assert_eq!(format_ass_time(3661.5), "1:01:01.50");
/// ```
#[must_use]
pub fn format_ass_time(seconds: f64) -> String {
    let centiseconds = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 100.0).round() as u64
    } else {
        0
    };

    let hours = centiseconds / 360_000;
    let remainder = centiseconds % 360_000;
    let minutes = remainder / 6000;
    let remainder = remainder % 6000;
    let secs = remainder / 100;
    let cs = remainder % 100;

    format!("{hours}:{minutes:02}:{secs:02}.{cs:02}")
}

/// Decode an ASS color, falling back to opaque white
///
/// Accepts `&H` followed by 6 (`BBGGRR`) or 8 (`AABBGGRR`) hex digits with an
/// optional trailing `&`. ASS alpha is inverted (`00` is opaque), so the
/// resulting opacity is `(255 - AA) / 255`; omitted alpha is opaque.
///
/// ```rust
/// # use ass_frames::utils::{parse_color, Rgba};
/// assert_eq!(parse_color("&H0000FF&"), Rgba::opaque(255, 0, 0));
/// assert_eq!(parse_color("&HFF00FF00").a, 0.0);
/// assert_eq!(parse_color("blue"), Rgba::WHITE);
/// ```
#[must_use]
pub fn parse_color(color_str: &str) -> Rgba {
    try_parse_color(color_str).unwrap_or(Rgba::WHITE)
}

/// Strictly decode an ASS color
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`] if the text is not `&H` plus 6 or 8
/// hex digits (optionally followed by `&`).
pub fn try_parse_color(color_str: &str) -> Result<Rgba, CoreError> {
    let hex = strip_hex_prefix(color_str).ok_or_else(|| CoreError::invalid_color(color_str))?;

    if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CoreError::invalid_color(color_str));
    }

    let value = u32::from_str_radix(hex, 16).map_err(|_| CoreError::invalid_color(color_str))?;
    let ass_alpha = if hex.len() == 8 { (value >> 24) as u8 } else { 0 };

    Ok(Rgba {
        r: (value & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: ((value >> 16) & 0xFF) as u8,
        a: f64::from(255 - ass_alpha) / 255.0,
    })
}

/// Decode an ASS alpha payload (`&HAA&`) into an opacity fraction
///
/// Returns `None` unless the text is `&H` plus exactly two hex digits.
///
/// ```rust
/// # use ass_frames::utils::parse_alpha;
/// assert_eq!(parse_alpha("&H00&"), Some(1.0));
/// assert_eq!(parse_alpha("&HFF&"), Some(0.0));
/// assert_eq!(parse_alpha("&H1&"), None);
/// ```
#[must_use]
pub fn parse_alpha(alpha_str: &str) -> Option<f64> {
    try_parse_alpha(alpha_str).ok()
}

/// Strictly decode an ASS alpha payload
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`] for anything but `&H` plus two hex
/// digits (optionally followed by `&`).
pub fn try_parse_alpha(alpha_str: &str) -> Result<f64, CoreError> {
    let hex = strip_hex_prefix(alpha_str).ok_or_else(|| CoreError::invalid_color(alpha_str))?;
    if hex.len() != 2 {
        return Err(CoreError::invalid_color(alpha_str));
    }

    let ass_alpha = u8::from_str_radix(hex, 16).map_err(|_| CoreError::invalid_color(alpha_str))?;
    Ok(f64::from(255 - ass_alpha) / 255.0)
}

/// Strip `&H`/`&h` and an optional trailing `&`
fn strip_hex_prefix(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let hex = trimmed
        .strip_prefix("&H")
        .or_else(|| trimmed.strip_prefix("&h"))?;
    Some(hex.strip_suffix('&').unwrap_or(hex))
}

/// Encode a color as `&HAABBGGRR&`
///
/// Inverse of [`parse_color`] for the 8-digit form, up to alpha rounding.
///
/// ```rust
/// # use ass_frames::utils::{color_to_ass_hex, Rgba};
/// assert_eq!(color_to_ass_hex(Rgba::opaque(255, 0, 0)), "&H000000FF&");
/// ```
#[must_use]
pub fn color_to_ass_hex(color: Rgba) -> String {
    let opacity = if color.a.is_finite() { color.a.clamp(0.0, 1.0) } else { 1.0 };
    let ass_alpha = 255.0_f64.mul_add(-opacity, 255.0).round() as u8;

    format!(
        "&H{ass_alpha:02X}{:02X}{:02X}{:02X}&",
        color.b, color.g, color.r
    )
}

/// Linear interpolation between two scalars
///
/// Exact at both ends: `t = 0` yields `from`, `t = 1` yields `to`.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from.mul_add(1.0 - t, to * t)
}

/// Component-wise linear interpolation between two colors
///
/// RGB channels are rounded to the nearest integer; opacity stays
/// fractional. Callers pass progress already clamped to `[0, 1]`.
///
/// ```rust
/// # use ass_frames::utils::{interpolate_color, Rgba};
/// let mid = interpolate_color(Rgba::BLACK, Rgba::new(255, 100, 0, 0.0), 0.5);
/// assert_eq!(mid, Rgba::new(128, 50, 0, 0.5));
/// ```
#[must_use]
pub fn interpolate_color(from: Rgba, to: Rgba, t: f64) -> Rgba {
    let channel = |a: u8, b: u8| lerp(f64::from(a), f64::from(b), t).round().clamp(0.0, 255.0) as u8;

    Rgba {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
        a: lerp(from.a, to.a, t),
    }
}

/// Scale a color's opacity by `alpha`
///
/// The product is clamped to `[0, 1]`; a non-finite `alpha` leaves the
/// color unchanged.
///
/// ```rust
/// # use ass_frames::utils::{apply_alpha_to_color, Rgba};
/// let faded = apply_alpha_to_color(Rgba::new(10, 20, 30, 0.5), 0.5);
/// assert_eq!(faded, Rgba::new(10, 20, 30, 0.25));
/// ```
#[must_use]
pub fn apply_alpha_to_color(color: Rgba, alpha: f64) -> Rgba {
    if !alpha.is_finite() {
        return color;
    }
    color.with_alpha((color.a * alpha).clamp(0.0, 1.0))
}

/// Parse numeric value from an ASS field
///
/// # Errors
///
/// Returns [`CoreError::InvalidNumeric`] if the trimmed text does not parse.
pub fn parse_numeric<T>(value_str: &str) -> Result<T, CoreError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value_str
        .trim()
        .parse()
        .map_err(|e: T::Err| CoreError::invalid_numeric(value_str, &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_basic() {
        assert!((parse_time("0:00:01.00") - 1.0).abs() < 1e-9);
        assert!((parse_time("0:01:30.50") - 90.5).abs() < 1e-9);
        assert!((parse_time("2:00:00.00") - 7200.0).abs() < 1e-9);
    }

    #[test]
    fn parse_time_malformed_shapes_are_zero() {
        assert_eq!(parse_time(""), 0.0);
        assert_eq!(parse_time("01.00"), 0.0);
        assert_eq!(parse_time("0:01.00"), 0.0);
        assert_eq!(parse_time("0:0:0:01.00"), 0.0);
    }

    #[test]
    fn parse_time_bad_fields_count_as_zero() {
        assert!((parse_time("x:00:05.00") - 5.0).abs() < 1e-9);
        assert!((parse_time("1:00:nan") - 3600.0).abs() < 1e-9);
        assert!((parse_time("0:02:zz") - 120.0).abs() < 1e-9);
    }

    #[test]
    fn try_parse_time_rejects_bad_input() {
        assert!(try_parse_time("0:00:05.00").is_ok());
        assert!(try_parse_time("0:60:00.00").is_err());
        assert!(try_parse_time("0:00:60.00").is_err());
        assert!(try_parse_time("abc").is_err());
        assert!(matches!(
            try_parse_time("0:aa:00.00"),
            Err(CoreError::InvalidTime(_))
        ));
    }

    #[test]
    fn format_time_round_trip() {
        assert_eq!(format_ass_time(0.0), "0:00:00.00");
        assert_eq!(format_ass_time(-3.0), "0:00:00.00");
        assert_eq!(format_ass_time(5.25), "0:00:05.25");
        assert!((parse_time(&format_ass_time(4523.37)) - 4523.37).abs() < 1e-6);
    }

    #[test]
    fn parse_color_six_digits_is_opaque() {
        assert_eq!(parse_color("&H0000FF&"), Rgba::opaque(255, 0, 0));
        assert_eq!(parse_color("&H00FF00&"), Rgba::opaque(0, 255, 0));
        assert_eq!(parse_color("&HFF0000"), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn parse_color_eight_digits_inverts_alpha() {
        assert_eq!(parse_color("&H00FFFFFF"), Rgba::WHITE);
        let half = parse_color("&H80000000&");
        assert!((half.a - 127.0 / 255.0).abs() < 1e-12);
        assert_eq!(parse_color("&HFF000000&").a, 0.0);
    }

    #[test]
    fn parse_color_other_shapes_are_white() {
        assert_eq!(parse_color(""), Rgba::WHITE);
        assert_eq!(parse_color("&HFF&"), Rgba::WHITE);
        assert_eq!(parse_color("&H0000GG&"), Rgba::WHITE);
        assert_eq!(parse_color("16777215"), Rgba::WHITE);
        assert!(try_parse_color("#ff0000").is_err());
    }

    #[test]
    fn lowercase_prefix_and_digits() {
        assert_eq!(parse_color("&h00ff00"), Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn alpha_payloads() {
        assert_eq!(parse_alpha("&H00&"), Some(1.0));
        assert_eq!(parse_alpha("&HFF"), Some(0.0));
        assert_eq!(parse_alpha("FF"), None);
        assert_eq!(parse_alpha("&H123&"), None);
    }

    #[test]
    fn ass_hex_round_trip() {
        let color = Rgba::new(12, 34, 56, 128.0 / 255.0);
        let encoded = color_to_ass_hex(color);
        assert_eq!(encoded, "&H7F38220C&");
        let decoded = parse_color(&encoded);
        assert_eq!((decoded.r, decoded.g, decoded.b), (12, 34, 56));
        assert!((decoded.a - color.a).abs() < 1e-9);
    }

    #[test]
    fn lerp_is_exact_at_ends() {
        assert_eq!(lerp(20.0, 40.0, 0.0), 20.0);
        assert_eq!(lerp(20.0, 40.0, 1.0), 40.0);
        assert_eq!(lerp(20.0, 40.0, 0.5), 30.0);
    }

    #[test]
    fn color_interpolation_rounds_rgb() {
        let from = Rgba::opaque(0, 0, 0);
        let to = Rgba::new(255, 255, 1, 0.0);
        let mid = interpolate_color(from, to, 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (128, 128, 1));
        assert!((mid.a - 0.5).abs() < 1e-12);
        assert_eq!(interpolate_color(from, to, 0.0), from);
        assert_eq!(interpolate_color(from, to, 1.0), to);
    }

    #[test]
    fn alpha_application_clamps() {
        let c = Rgba::opaque(1, 2, 3);
        assert_eq!(apply_alpha_to_color(c, 0.5).a, 0.5);
        assert_eq!(apply_alpha_to_color(c, 3.0).a, 1.0);
        assert_eq!(apply_alpha_to_color(c, -1.0).a, 0.0);
        assert_eq!(apply_alpha_to_color(c, f64::NAN), c);
    }

    #[test]
    fn numeric_parsing() {
        assert_eq!(parse_numeric::<i32>(" 42 "), Ok(42));
        assert!(parse_numeric::<i32>("4.2").is_err());
        assert!((parse_numeric::<f64>("4.2").unwrap_or_default() - 4.2).abs() < 1e-12);
    }
}
