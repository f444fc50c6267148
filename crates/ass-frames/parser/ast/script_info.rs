//! Script Info AST node for ASS script metadata
//!
//! Holds the `[Script Info]` section as ordered key-value pairs with
//! accessors for the handful of fields consumers commonly need.

use crate::ScriptVersion;

/// Script Info section containing metadata and headers
///
/// Keys are kept verbatim, including ones this crate does not interpret.
///
/// # Examples
///
/// ```rust
/// use ass_frames::parser::ast::ScriptInfo;
///
/// let info = ScriptInfo::from_pairs([("Title", "Test Script"), ("PlayResX", "1920")]);
///
/// assert_eq!(info.get("Title"), Some("Test Script"));
/// assert_eq!(info.play_res_x(), Some(1920));
/// assert_eq!(info.play_res_y(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptInfo {
    /// Key-value pairs in source order
    pub fields: Vec<(String, String)>,
}

impl ScriptInfo {
    /// Build from borrowed pairs
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Get field value by key (case-sensitive)
    ///
    /// When a key repeats, the last occurrence wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a field, keeping the original position on replace
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| k == key) {
            slot.1 = value.to_string();
        } else {
            self.fields.push((key.to_string(), value.to_string()));
        }
    }

    /// Reference width (`PlayResX`)
    #[must_use]
    pub fn play_res_x(&self) -> Option<u32> {
        self.get("PlayResX")?.trim().parse().ok()
    }

    /// Reference height (`PlayResY`)
    #[must_use]
    pub fn play_res_y(&self) -> Option<u32> {
        self.get("PlayResY")?.trim().parse().ok()
    }

    /// Script format version from `ScriptType`
    #[must_use]
    pub fn version(&self) -> Option<ScriptVersion> {
        ScriptVersion::from_header(self.get("ScriptType")?)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the section had no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
