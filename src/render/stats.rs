//! Report statistics.

use crate::model::{Block, Section, Tree};
use serde::{Deserialize, Serialize};

use super::to_markdown;

/// Counts collected from a report tree and its Markdown rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Number of sections, the root included
    pub section_count: u32,

    /// Number of text elements
    pub element_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of table rows across all tables
    pub table_row_count: u32,

    /// Number of outlines
    pub tree_count: u32,

    /// Number of outline nodes across all outlines
    pub tree_node_count: u32,

    /// Deepest heading level in the report
    pub max_level: u32,

    /// Word count of the rendered Markdown
    pub word_count: u32,

    /// Character count of the rendered Markdown
    pub char_count: u32,
}

impl ReportStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk a report and count everything in it.
    pub fn collect(section: &Section) -> Self {
        let mut stats = Self::new();
        stats.add_section(section);
        stats.count_text(&to_markdown(section));
        stats
    }

    fn add_section(&mut self, section: &Section) {
        self.section_count += 1;
        self.max_level = self.max_level.max(section.level() as u32);

        for block in section.content() {
            match block {
                Block::Element(_) => self.element_count += 1,
                Block::Table(table) => {
                    self.table_count += 1;
                    self.table_row_count += table.row_count() as u32;
                }
                Block::Tree(tree) => self.add_tree(tree),
            }
        }
        for (_, subsection) in section.subsections() {
            self.add_section(subsection);
        }
    }

    fn add_tree(&mut self, tree: &Tree) {
        self.tree_count += 1;
        self.tree_node_count += tree.node_count() as u32;
    }

    /// Count words and characters in text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().count() as u32;
    }

    /// Total number of content blocks.
    pub fn block_count(&self) -> u32 {
        self.element_count + self.table_count + self.tree_count
    }
}
