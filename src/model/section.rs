//! Section types.

use super::{Block, Item};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::ops::Index;

/// A titled, levelled container of intro content and keyed subsections.
///
/// Subsections render in insertion order. Attaching a subsection raises its
/// level to `self.level() + 1` when it is not already deeper than this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSection", into = "RawSection")]
pub struct Section {
    title: String,
    level: usize,
    content: Vec<Block>,
    subsections: Subsections,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>, level: usize) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        if level == 0 {
            return Err(Error::InvalidLevel(level));
        }
        Ok(Self {
            title,
            level,
            content: Vec::new(),
            subsections: Subsections::default(),
        })
    }

    /// Create an empty top-level (level 1) section.
    pub fn root(title: impl Into<String>) -> Result<Self> {
        Self::new(title, 1)
    }

    /// Builder form of [`Section::add_intro_content`].
    pub fn with_content<T: Into<Item>>(
        mut self,
        items: impl IntoIterator<Item = T>,
    ) -> Result<Self> {
        self.add_intro_content(items)?;
        Ok(self)
    }

    /// Builder form of [`Section::add_subsections`].
    pub fn with_subsections(mut self, items: impl Into<SubsectionBatch>) -> Result<Self> {
        self.add_subsections(items)?;
        Ok(self)
    }

    /// Append intro content.
    ///
    /// Raw strings are wrapped as elements. If any item is a section the call
    /// fails and the content is left untouched.
    pub fn add_intro_content<T: Into<Item>>(
        &mut self,
        items: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let mut blocks = Vec::new();
        let mut rejected = Vec::new();
        for item in items {
            match item.into().into_block() {
                Ok(block) => blocks.push(block),
                Err(section) => rejected.push(Item::Section(section).describe()),
            }
        }
        if !rejected.is_empty() {
            return Err(Error::SectionAsContent(rejected));
        }

        self.content.extend(blocks);
        Ok(())
    }

    /// Replace intro content. On error the previous content is kept.
    pub fn set_intro_content<T: Into<Item>>(
        &mut self,
        items: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let previous = std::mem::take(&mut self.content);
        if let Err(e) = self.add_intro_content(items) {
            self.content = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Attach new subsections after the existing ones.
    ///
    /// Every value must be a section and no key may already be present (or
    /// repeat within the batch). Nothing is attached unless all entries pass.
    pub fn add_subsections(&mut self, items: impl Into<SubsectionBatch>) -> Result<()> {
        let entries = items.into().validate(&self.subsections)?;
        for (key, section) in entries {
            self.attach(key, section);
        }
        Ok(())
    }

    /// Replace all subsections. On error the previous subsections are kept.
    pub fn set_subsections(&mut self, items: impl Into<SubsectionBatch>) -> Result<()> {
        let entries = items.into().validate(&Subsections::default())?;
        self.subsections = Subsections::default();
        for (key, section) in entries {
            self.attach(key, section);
        }
        Ok(())
    }

    /// Get a subsection by key.
    pub fn subsection(&self, key: &str) -> Option<&Section> {
        self.subsections.get(key)
    }

    /// Get a mutable subsection by key.
    pub fn subsection_mut(&mut self, key: &str) -> Option<&mut Section> {
        self.subsections.get_mut(key)
    }

    /// Store `section` under `key`, returning the section it replaced.
    ///
    /// An existing key keeps its position; a new key is appended. No
    /// uniqueness check applies, this is the in-place update path.
    pub fn set_subsection(
        &mut self,
        key: impl Into<String>,
        mut section: Section,
    ) -> Option<Section> {
        let key = key.into();
        self.normalize_child(&key, &mut section);
        self.subsections.upsert(key, section)
    }

    /// Detach a subsection, keeping the order of the others.
    pub fn remove_subsection(&mut self, key: &str) -> Option<Section> {
        self.subsections.remove(key)
    }

    /// Check whether a subsection key is present.
    pub fn contains_subsection(&self, key: &str) -> bool {
        self.subsections.index.contains_key(key)
    }

    /// Remove all content and subsections. Title and level are kept.
    pub fn clear(&mut self) {
        self.content.clear();
        self.subsections = Subsections::default();
    }

    /// Get the section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the heading level (1 = `#`).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Intro content in order.
    pub fn content(&self) -> &[Block] {
        &self.content
    }

    /// Subsections as `(key, section)` pairs in insertion order.
    pub fn subsections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.subsections
            .entries
            .iter()
            .map(|(key, section)| (key.as_str(), section))
    }

    /// Subsection keys in insertion order.
    pub fn subsection_keys(&self) -> impl Iterator<Item = &str> {
        self.subsections.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Get the number of direct subsections.
    pub fn subsection_count(&self) -> usize {
        self.subsections.entries.len()
    }

    /// Check if the section has neither content nor subsections.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.subsections.entries.is_empty()
    }

    fn attach(&mut self, key: String, mut section: Section) {
        self.normalize_child(&key, &mut section);
        log::debug!(
            "Attached subsection {:?} at level {} under {:?}",
            key,
            section.level,
            self.title
        );
        self.subsections.push(key, section);
    }

    fn normalize_child(&self, key: &str, child: &mut Section) {
        if child.level <= self.level {
            log::debug!(
                "Raising subsection {:?} from level {} to {}",
                key,
                child.level,
                self.level + 1
            );
            child.level = self.level + 1;
        }
    }
}

impl Index<&str> for Section {
    type Output = Section;

    /// Panics if no subsection has this key; use [`Section::subsection`] to probe.
    fn index(&self, key: &str) -> &Section {
        match self.subsection(key) {
            Some(section) => section,
            None => panic!("no subsection {:?} in section {:?}", key, self.title),
        }
    }
}

/// Ordered subsection storage: entries in insertion order plus a key index.
#[derive(Debug, Clone, Default, PartialEq)]
struct Subsections {
    entries: Vec<(String, Section)>,
    index: HashMap<String, usize>,
}

impl Subsections {
    fn get(&self, key: &str) -> Option<&Section> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Section> {
        let i = *self.index.get(key)?;
        Some(&mut self.entries[i].1)
    }

    fn push(&mut self, key: String, section: Section) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, section));
    }

    fn upsert(&mut self, key: String, section: Section) -> Option<Section> {
        match self.index.get(&key) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, section)),
            None => {
                self.push(key, section);
                None
            }
        }
    }

    fn remove(&mut self, key: &str) -> Option<Section> {
        let i = self.index.remove(key)?;
        let (_, section) = self.entries.remove(i);
        for position in self.index.values_mut() {
            if *position > i {
                *position -= 1;
            }
        }
        Some(section)
    }
}

/// Subsections offered to [`Section::add_subsections`] or [`Section::set_subsections`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubsectionBatch {
    /// Values keyed by their own section titles
    Sequence(Vec<Item>),
    /// Values under explicit keys
    Keyed(Vec<(String, Item)>),
}

impl SubsectionBatch {
    /// Check the batch against `existing` and return the entries to attach.
    fn validate(self, existing: &Subsections) -> Result<Vec<(String, Section)>> {
        let pairs: Vec<(Option<String>, Item)> = match self {
            SubsectionBatch::Sequence(items) => items.into_iter().map(|i| (None, i)).collect(),
            SubsectionBatch::Keyed(pairs) => pairs.into_iter().map(|(k, i)| (Some(k), i)).collect(),
        };

        let not_sections: Vec<String> = pairs
            .iter()
            .filter(|(_, item)| !matches!(item, Item::Section(_)))
            .map(|(_, item)| item.describe())
            .collect();
        if !not_sections.is_empty() {
            return Err(Error::NotASection(not_sections));
        }

        let entries: Vec<(String, Section)> = pairs
            .into_iter()
            .filter_map(|(key, item)| match item {
                Item::Section(section) => {
                    Some((key.unwrap_or_else(|| section.title.clone()), section))
                }
                _ => None,
            })
            .collect();

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for (key, _) in &entries {
            let clash = existing.index.contains_key(key) || !seen.insert(key.as_str());
            if clash && !duplicates.contains(key) {
                duplicates.push(key.clone());
            }
        }
        if !duplicates.is_empty() {
            return Err(Error::DuplicateKeys(duplicates));
        }

        Ok(entries)
    }
}

impl From<Section> for SubsectionBatch {
    fn from(section: Section) -> Self {
        SubsectionBatch::Sequence(vec![Item::Section(section)])
    }
}

impl From<Vec<Section>> for SubsectionBatch {
    fn from(sections: Vec<Section>) -> Self {
        SubsectionBatch::Sequence(sections.into_iter().map(Item::Section).collect())
    }
}

impl<const N: usize> From<[Section; N]> for SubsectionBatch {
    fn from(sections: [Section; N]) -> Self {
        SubsectionBatch::Sequence(sections.into_iter().map(Item::Section).collect())
    }
}

impl From<Vec<Item>> for SubsectionBatch {
    fn from(items: Vec<Item>) -> Self {
        SubsectionBatch::Sequence(items)
    }
}

impl From<Vec<(String, Section)>> for SubsectionBatch {
    fn from(pairs: Vec<(String, Section)>) -> Self {
        SubsectionBatch::Keyed(
            pairs
                .into_iter()
                .map(|(k, s)| (k, Item::Section(s)))
                .collect(),
        )
    }
}

impl From<Vec<(&str, Section)>> for SubsectionBatch {
    fn from(pairs: Vec<(&str, Section)>) -> Self {
        SubsectionBatch::Keyed(
            pairs
                .into_iter()
                .map(|(k, s)| (k.to_string(), Item::Section(s)))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, Section); N]> for SubsectionBatch {
    fn from(pairs: [(&str, Section); N]) -> Self {
        SubsectionBatch::Keyed(
            pairs
                .into_iter()
                .map(|(k, s)| (k.to_string(), Item::Section(s)))
                .collect(),
        )
    }
}

impl From<Vec<(String, Item)>> for SubsectionBatch {
    fn from(pairs: Vec<(String, Item)>) -> Self {
        SubsectionBatch::Keyed(pairs)
    }
}

impl<const N: usize> From<[(&str, Item); N]> for SubsectionBatch {
    fn from(pairs: [(&str, Item); N]) -> Self {
        SubsectionBatch::Keyed(pairs.into_iter().map(|(k, i)| (k.to_string(), i)).collect())
    }
}

/// Serialized form of a [`Section`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSection {
    title: String,
    #[serde(default = "default_level")]
    level: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    content: Vec<Block>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    subsections: Vec<RawSubsection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSubsection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    section: Section,
}

fn default_level() -> usize {
    1
}

impl TryFrom<RawSection> for Section {
    type Error = Error;

    fn try_from(raw: RawSection) -> Result<Self> {
        let mut section = Section::new(raw.title, raw.level)?;
        section.add_intro_content(raw.content)?;
        let keyed: Vec<(String, Section)> = raw
            .subsections
            .into_iter()
            .map(|sub| {
                let key = sub.key.unwrap_or_else(|| sub.section.title.clone());
                (key, sub.section)
            })
            .collect();
        section.add_subsections(keyed)?;
        Ok(section)
    }
}

impl From<Section> for RawSection {
    fn from(section: Section) -> Self {
        let subsections = section
            .subsections
            .entries
            .into_iter()
            .map(|(key, section)| RawSubsection {
                key: (key != section.title).then_some(key),
                section,
            })
            .collect();
        Self {
            title: section.title,
            level: section.level,
            content: section.content,
            subsections,
        }
    }
}
