//! Rendering module for converting reports to output formats.

mod json;
mod markdown;
mod stats;

pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use stats::ReportStats;
