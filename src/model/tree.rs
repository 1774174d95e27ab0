//! Bullet outline types.

use super::Element;
use crate::error::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A node of a bulleted outline.
///
/// A node's own `bullet` and `indentation` only matter when it is rendered
/// as the root of an outline; descendants always inherit the root's tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTree", into = "RawTree")]
pub struct Tree {
    label: String,
    bullet: Option<String>,
    indentation: Option<String>,
    children: Vec<Tree>,
}

impl Tree {
    /// Bullet used when neither the node nor the caller provides one.
    pub const DEFAULT_BULLET: &'static str = "*";

    /// Indentation per depth used when neither the node nor the caller provides one.
    pub const DEFAULT_INDENTATION: &'static str = "  ";

    /// Create a leaf node with default styling.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bullet: None,
            indentation: None,
            children: Vec::new(),
        }
    }

    /// Set this node's bullet token.
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Result<Self> {
        self.set_bullet(Some(bullet.into()))?;
        Ok(self)
    }

    /// Set this node's indentation token.
    pub fn with_indentation(mut self, indentation: impl Into<String>) -> Self {
        self.indentation = Some(indentation.into());
        self
    }

    /// Replace this node's bullet token, or clear it with `None`.
    pub fn set_bullet(&mut self, bullet: Option<String>) -> Result<()> {
        if let Some(ref token) = bullet {
            validate_bullet(token)?;
        }
        self.bullet = bullet;
        Ok(())
    }

    /// Replace this node's indentation token, or clear it with `None`.
    pub fn set_indentation(&mut self, indentation: Option<String>) {
        self.indentation = indentation;
    }

    /// Attach a child and return it.
    ///
    /// Strings and elements become new leaf nodes.
    pub fn add(&mut self, child: impl Into<Tree>) -> &mut Tree {
        self.children.push(child.into());
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Attach several children and return them in order.
    pub fn add_children<T: Into<Tree>>(
        &mut self,
        children: impl IntoIterator<Item = T>,
    ) -> &mut [Tree] {
        let start = self.children.len();
        self.children.extend(children.into_iter().map(Into::into));
        &mut self.children[start..]
    }

    /// Own bullet, then `default`, then [`Tree::DEFAULT_BULLET`].
    pub fn resolve_bullet<'a>(&'a self, default: Option<&'a str>) -> &'a str {
        self.bullet
            .as_deref()
            .or(default)
            .unwrap_or(Self::DEFAULT_BULLET)
    }

    /// Own indentation, then `default`, then [`Tree::DEFAULT_INDENTATION`].
    pub fn resolve_indentation<'a>(&'a self, default: Option<&'a str>) -> &'a str {
        self.indentation
            .as_deref()
            .or(default)
            .unwrap_or(Self::DEFAULT_INDENTATION)
    }

    /// Get the node label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get this node's own bullet token.
    pub fn bullet(&self) -> Option<&str> {
        self.bullet.as_deref()
    }

    /// Get this node's own indentation token.
    pub fn indentation(&self) -> Option<&str> {
        self.indentation.as_deref()
    }

    /// Direct children in order.
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Mutable access to the direct children.
    pub fn children_mut(&mut self) -> &mut [Tree] {
        &mut self.children
    }

    /// Check if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Tree::node_count).sum::<usize>()
    }

    /// Number of levels below and including this node.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Tree::depth).max().unwrap_or(0)
    }
}

/// A bullet is exactly one character: `*`, `-`, an ASCII digit, or any
/// character outside `\w` and `\s`. Word characters are Unicode letters,
/// Unicode digits and `_`, so `•` is accepted while `٣` is not.
fn validate_bullet(token: &str) -> Result<()> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c == '*' || c == '-' || c.is_ascii_digit() => Ok(()),
        (Some(c), None) if !c.is_alphanumeric() && c != '_' && !c.is_whitespace() => Ok(()),
        _ => Err(Error::InvalidBullet(token.to_string())),
    }
}

impl From<&str> for Tree {
    fn from(label: &str) -> Self {
        Tree::new(label)
    }
}

impl From<String> for Tree {
    fn from(label: String) -> Self {
        Tree::new(label)
    }
}

impl From<Element> for Tree {
    fn from(element: Element) -> Self {
        Tree::new(element.into_inner())
    }
}

impl From<&Element> for Tree {
    fn from(element: &Element) -> Self {
        Tree::new(element.text())
    }
}

/// Serialized form of a [`Tree`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTree {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bullet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    indentation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<RawChild>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum RawChild {
    Leaf(String),
    Node(Tree),
}

impl<'de> Deserialize<'de> for RawChild {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(label) => Ok(RawChild::Leaf(label)),
            other => Tree::deserialize(other)
                .map(RawChild::Node)
                .map_err(de::Error::custom),
        }
    }
}

impl TryFrom<RawTree> for Tree {
    type Error = Error;

    fn try_from(raw: RawTree) -> Result<Self> {
        let mut tree = Tree::new(raw.label);
        tree.set_bullet(raw.bullet)?;
        tree.indentation = raw.indentation;
        tree.add_children(raw.children.into_iter().map(|child| match child {
            RawChild::Leaf(label) => Tree::new(label),
            RawChild::Node(node) => node,
        }));
        Ok(tree)
    }
}

impl From<Tree> for RawTree {
    fn from(tree: Tree) -> Self {
        let children = tree
            .children
            .into_iter()
            .map(|child| {
                if child.is_leaf() && child.bullet.is_none() && child.indentation.is_none() {
                    RawChild::Leaf(child.label)
                } else {
                    RawChild::Node(child)
                }
            })
            .collect();
        Self {
            label: tree.label,
            bullet: tree.bullet,
            indentation: tree.indentation,
            children,
        }
    }
}
