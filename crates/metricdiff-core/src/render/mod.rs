//! Report rendering for metric catalog diffs.
//!
//! Rendering is informational only and never changes the diff itself.

pub mod json;
pub mod line_diff;
pub mod markdown;

pub use json::render_json;
pub use line_diff::full_context_diff;
pub use markdown::{render_markdown, ReportOptions};
