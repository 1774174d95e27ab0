//! Markdown rendering for reports.
//!
//! Every model type implements [`Display`](fmt::Display) with the default
//! renderer, so `section.to_string()` is the complete report.

use std::fmt;

use crate::model::{Block, Element, Section, Table, Tree};

/// Convert a report to Markdown.
pub fn to_markdown(section: &Section) -> String {
    MarkdownRenderer::new().render(section)
}

/// Markdown renderer.
///
/// The only knobs are the fallback tokens for outlines whose root sets no
/// bullet or indentation of its own.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    tree_bullet: Option<String>,
    tree_indentation: Option<String>,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bullet used by outlines that do not choose their own.
    pub fn with_tree_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.tree_bullet = Some(bullet.into());
        self
    }

    /// Set the indentation used by outlines that do not choose their own.
    pub fn with_tree_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.tree_indentation = Some(indentation.into());
        self
    }

    /// Render a report to Markdown.
    pub fn render(&self, section: &Section) -> String {
        log::trace!("Rendering section {:?}", section.title());
        let mut output = String::new();
        self.render_section(&mut output, section);
        output
    }

    /// Render a single table.
    pub fn render_table(&self, table: &Table) -> String {
        let mut output = String::new();
        self.write_table(&mut output, table);
        output
    }

    /// Render a single outline.
    pub fn render_tree(&self, tree: &Tree) -> String {
        let mut output = String::new();
        self.write_tree(&mut output, tree);
        output
    }

    // Heading, blank line, content lines, blank line, subsections.
    fn render_section(&self, output: &mut String, section: &Section) {
        output.push_str(&"#".repeat(section.level()));
        output.push(' ');
        output.push_str(section.title());
        output.push('\n');

        for block in section.content() {
            output.push('\n');
            self.render_block(output, block);
        }
        output.push('\n');

        for (_, subsection) in section.subsections() {
            output.push('\n');
            self.render_section(output, subsection);
        }
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Element(element) => self.write_element(output, element),
            Block::Table(table) => self.write_table(output, table),
            Block::Tree(tree) => self.write_tree(output, tree),
        }
    }

    fn write_element(&self, output: &mut String, element: &Element) {
        output.push_str(element.text());
    }

    fn write_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }

        if !table.title().is_empty() {
            output.push_str("Table: ");
            output.push_str(table.title());
            output.push('\n');
        }

        write_table_line(output, table.columns().iter().map(String::as_str));
        output.push('\n');

        let markers: Vec<String> = table
            .columns()
            .iter()
            .zip(table.justifications())
            .map(|(column, justification)| justification.marker(column))
            .collect();
        write_table_line(output, markers.iter().map(String::as_str));

        for row in table.rows() {
            output.push('\n');
            write_table_line(output, row.iter().map(String::as_str));
        }
    }

    fn write_tree(&self, output: &mut String, tree: &Tree) {
        let bullet = tree.resolve_bullet(self.tree_bullet.as_deref());
        let indentation = tree.resolve_indentation(self.tree_indentation.as_deref());
        write_tree_node(output, tree, bullet, indentation, 0);
    }
}

/// `| a | b |`
fn write_table_line<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    output.push('|');
    for cell in cells {
        output.push(' ');
        output.push_str(cell);
        output.push_str(" |");
    }
}

// Descendants use the root's bullet and indentation, never their own.
fn write_tree_node(
    output: &mut String,
    node: &Tree,
    bullet: &str,
    indentation: &str,
    depth: usize,
) {
    if depth > 0 {
        output.push('\n');
    }
    output.push_str(&indentation.repeat(depth));
    output.push_str(bullet);
    output.push(' ');
    output.push_str(node.label());

    for child in node.children() {
        write_tree_node(output, child, bullet, indentation, depth + 1);
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_markdown(self))
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&MarkdownRenderer::new().render_table(self))
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&MarkdownRenderer::new().render_tree(self))
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Element(element) => fmt::Display::fmt(element, f),
            Block::Table(table) => fmt::Display::fmt(table, f),
            Block::Tree(tree) => fmt::Display::fmt(tree, f),
        }
    }
}
