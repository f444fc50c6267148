//! AST definitions for ASS scripts
//!
//! Nodes own decoded values rather than borrowing spans: styles carry
//! [`Rgba`](crate::utils::Rgba) colors, dialogues carry second-based times
//! plus the derived segment and transition lists the frame sampler consumes.
//!
//! # Examples
//!
//! ```rust
//! use ass_frames::parser::ast::{DialogueEvent, ScriptInfo, Style};
//!
//! let info = ScriptInfo::from_pairs([("Title", "Test")]);
//! let style = Style::default();
//! let event = DialogueEvent::new(5.0, 10.0, &style.name, "Hello World!");
//!
//! assert_eq!(info.get("Title"), Some("Test"));
//! assert_eq!(event.style, "Default");
//! ```

mod event;
mod script_info;
mod style;

pub use event::DialogueEvent;
pub use script_info::ScriptInfo;
pub use style::{Style, TextFormatting};
