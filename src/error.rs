//! Error types for mdreport library.

use thiserror::Error;

/// Result type alias for mdreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or rendering a report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A section was given an empty title.
    #[error("Section title must not be empty")]
    EmptyTitle,

    /// A section was given a heading level below 1.
    #[error("Section level must be at least 1, got {0}")]
    InvalidLevel(usize),

    /// Subsection keys that already exist in the target section.
    #[error("Subsection keys already exist: {}", .0.join(", "))]
    DuplicateKeys(Vec<String>),

    /// Values offered as subsections that are not sections.
    #[error("Subsection values must be sections: {}", .0.join(", "))]
    NotASection(Vec<String>),

    /// Sections offered as intro content.
    #[error("Sections cannot be intro content, attach them as subsections: {}", .0.join(", "))]
    SectionAsContent(Vec<String>),

    /// A positional row whose length does not match the declared columns.
    #[error("Row has {found} cells but the table declares {expected} columns")]
    RowLength {
        /// Number of declared columns
        expected: usize,
        /// Number of cells in the row
        found: usize,
    },

    /// A keyed row referencing columns that were never declared.
    #[error("Unknown columns: {}", .0.join(", "))]
    UnknownColumns(Vec<String>),

    /// An alignment token outside left/right/center/full.
    #[error("Unrecognized justification: {0:?}")]
    InvalidJustification(String),

    /// An outline bullet that is not a single marker character.
    #[error("Invalid bullet token: {0:?}")]
    InvalidBullet(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error reading a report description.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Whether this error was raised by a validation rule of the document model.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::Render(_) | Error::Parse(_))
    }
}
