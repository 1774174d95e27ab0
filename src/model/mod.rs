//! Document model types for report assembly.
//!
//! A report is a tree of [`Section`]s. Each section owns its intro content
//! (text [`Element`]s, [`Table`]s and [`Tree`] outlines) and an ordered,
//! keyed collection of child sections. The model validates every mutation;
//! once a value is built, rendering it cannot fail.

mod element;
mod section;
mod table;
mod tree;

pub use element::{Block, Element, Item};
pub use section::{Section, SubsectionBatch};
pub use table::{ColumnSpec, Justification, Row, Table};
pub use tree::Tree;
