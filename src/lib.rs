//! # mdreport
//!
//! Hierarchical Markdown report assembly for Rust.
//!
//! A report is a tree of titled sections. Each section holds intro content
//! (text lines, pipe tables and bullet outlines) followed by keyed
//! subsections. Hosts keep one root section alive for a whole run, replace
//! subsections as their state changes, and render the root whenever they
//! need the current report.
//!
//! ## Quick Start
//!
//! ```
//! use mdreport::{Section, Table, Tree};
//!
//! fn main() -> mdreport::Result<()> {
//!     let mut report = Section::root("Report")?;
//!     report.add_intro_content(["Intro"])?;
//!
//!     let mut agents = Table::with_columns("Agents", [("Name", "left"), ("Tasks", "right")])?;
//!     agents.add_row(["planner", "3"])?;
//!
//!     let mut plan = Tree::new("Plan");
//!     plan.add("collect sources").add("read papers");
//!
//!     let mut status = Section::new("Status", 2)?;
//!     status.add_intro_content([agents])?;
//!     status.add_intro_content([plan])?;
//!     report.add_subsections([status])?;
//!
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Exact Markdown layout**: ATX headings, GFM pipe tables, bullet outlines
//! - **Validated mutation**: batch operations are all-or-nothing
//! - **Ordered subsections**: insertion order is rendering order
//! - **JSON descriptions**: build and dump reports with serde

pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, ColumnSpec, Element, Item, Justification, Row, Section, SubsectionBatch, Table, Tree,
};
pub use render::{from_json, to_json, to_markdown, JsonFormat, MarkdownRenderer, ReportStats};
