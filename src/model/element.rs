//! Single-line content and the content item enums.

use super::{Section, Table, Tree};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single line of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(String);

impl Element {
    /// Create an element from text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the text of the element.
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Consume the element and return its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// A content item stored in a section's intro.
///
/// Serialized untagged: a string is an element, an object with a `label`
/// is a tree, any other object is a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Block {
    /// A line of text
    Element(Element),
    /// A pipe table
    Table(Table),
    /// A bullet outline
    Tree(Tree),
}

impl Block {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Element(_) => "element",
            Block::Table(_) => "table",
            Block::Tree(_) => "tree",
        }
    }
}

// Dispatch on shape so a table or tree keeps its own validation error.
impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(text) => Ok(Block::Element(Element::from(text))),
            Value::Object(map) if map.contains_key("label") => {
                Tree::deserialize(Value::Object(map))
                    .map(Block::Tree)
                    .map_err(de::Error::custom)
            }
            Value::Object(map) => Table::deserialize(Value::Object(map))
                .map(Block::Table)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "content must be text, a table or a tree, found {}",
                other
            ))),
        }
    }
}

impl From<Element> for Block {
    fn from(element: Element) -> Self {
        Block::Element(element)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Block::Table(table)
    }
}

impl From<Tree> for Block {
    fn from(tree: Tree) -> Self {
        Block::Tree(tree)
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Block::Element(Element::new(text))
    }
}

impl From<String> for Block {
    fn from(text: String) -> Self {
        Block::Element(Element::from(text))
    }
}

/// Anything a caller may hand to a section mutator.
///
/// Intro content accepts every variant except [`Item::Section`]; subsection
/// mutators accept only [`Item::Section`]. Both reject the rest with a
/// validation error instead of silently coercing.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Raw text, wrapped into an [`Element`] on insertion
    Text(String),
    /// A line of text
    Element(Element),
    /// A pipe table
    Table(Table),
    /// A bullet outline
    Tree(Tree),
    /// A section
    Section(Section),
}

impl Item {
    /// Convert into a content block, handing sections back unchanged.
    pub(crate) fn into_block(self) -> std::result::Result<Block, Section> {
        match self {
            Item::Text(text) => Ok(Block::Element(Element::from(text))),
            Item::Element(element) => Ok(Block::Element(element)),
            Item::Table(table) => Ok(Block::Table(table)),
            Item::Tree(tree) => Ok(Block::Tree(tree)),
            Item::Section(section) => Err(section),
        }
    }

    /// One-line description used when listing offending values.
    pub(crate) fn describe(&self) -> String {
        match self {
            Item::Text(text) => format!("text {:?}", text),
            Item::Element(element) => format!("element {:?}", element.text()),
            Item::Table(table) => format!("table {:?}", table.title()),
            Item::Tree(tree) => format!("tree {:?}", tree.label()),
            Item::Section(section) => format!("section {:?}", section.title()),
        }
    }
}

impl From<&str> for Item {
    fn from(text: &str) -> Self {
        Item::Text(text.to_string())
    }
}

impl From<String> for Item {
    fn from(text: String) -> Self {
        Item::Text(text)
    }
}

impl From<Element> for Item {
    fn from(element: Element) -> Self {
        Item::Element(element)
    }
}

impl From<Table> for Item {
    fn from(table: Table) -> Self {
        Item::Table(table)
    }
}

impl From<Tree> for Item {
    fn from(tree: Tree) -> Self {
        Item::Tree(tree)
    }
}

impl From<Section> for Item {
    fn from(section: Section) -> Self {
        Item::Section(section)
    }
}

impl From<Block> for Item {
    fn from(block: Block) -> Self {
        match block {
            Block::Element(element) => Item::Element(element),
            Block::Table(table) => Item::Table(table),
            Block::Tree(tree) => Item::Tree(tree),
        }
    }
}
