//! Property-based tests for section assembly and rendering.
//!
//! These check the structural rules that must hold for any input:
//! - construction keeps title and level, rejects empty titles and level 0
//! - intro content is additive and order-preserving
//! - failed mutations leave a section unchanged
//! - attached subsections end up deeper than their parent

use mdreport::{Block, Element, Error, Item, Section, Table, Tree};
use proptest::prelude::*;

/// Generate non-empty section titles
fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 _-]{0,15}"
}

/// Generate single-line content text
fn line_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,:]{0,20}"
}

/// Generate valid heading levels
fn level_strategy() -> impl Strategy<Value = usize> {
    1usize..8
}

proptest! {
    #[test]
    fn test_new_keeps_title_and_level(title in title_strategy(), level in level_strategy()) {
        let section = Section::new(title.clone(), level).unwrap();
        prop_assert_eq!(section.title(), title.as_str());
        prop_assert_eq!(section.level(), level);
        prop_assert!(section.content().is_empty());
        prop_assert_eq!(section.subsection_count(), 0);
    }

    #[test]
    fn test_level_zero_always_fails(title in title_strategy()) {
        prop_assert_eq!(Section::new(title, 0).unwrap_err(), Error::InvalidLevel(0));
    }

    #[test]
    fn test_empty_title_always_fails(level in level_strategy()) {
        prop_assert_eq!(Section::new("", level).unwrap_err(), Error::EmptyTitle);
    }

    #[test]
    fn test_intro_content_is_additive(
        first in prop::collection::vec(line_strategy(), 0..5),
        second in prop::collection::vec(line_strategy(), 0..5),
    ) {
        let mut section = Section::root("S").unwrap();
        section.add_intro_content(first.clone()).unwrap();
        section.add_intro_content(second.clone()).unwrap();

        let expected: Vec<Block> = first
            .iter()
            .chain(second.iter())
            .map(|line| Block::Element(Element::new(line.as_str())))
            .collect();
        prop_assert_eq!(section.content(), expected.as_slice());
    }

    #[test]
    fn test_section_content_is_rejected(
        lines in prop::collection::vec(line_strategy(), 0..5),
        position in 0usize..5,
    ) {
        let mut section = Section::root("S").unwrap();
        section.add_intro_content(["existing"]).unwrap();
        let before = section.clone();

        let mut items: Vec<Item> = lines.into_iter().map(Item::from).collect();
        let position = position.min(items.len());
        items.insert(position, Item::from(Section::root("Nested").unwrap()));

        prop_assert!(section.add_intro_content(items).is_err());
        prop_assert_eq!(section, before);
    }

    #[test]
    fn test_duplicate_keys_leave_subsections_unchanged(
        titles in prop::collection::hash_set(title_strategy(), 1..6),
    ) {
        let titles: Vec<String> = titles.into_iter().collect();
        let mut parent = Section::root("Parent").unwrap();
        let sections: Vec<Section> = titles
            .iter()
            .map(|t| Section::root(t.as_str()).unwrap())
            .collect();
        parent.add_subsections(sections).unwrap();
        let before = parent.clone();

        let clash = Section::root(titles[0].as_str()).unwrap();
        prop_assert!(parent.add_subsections([clash]).is_err());
        prop_assert_eq!(parent, before);
    }

    #[test]
    fn test_attached_levels_are_normalized(
        parent_level in level_strategy(),
        child_level in level_strategy(),
    ) {
        let mut parent = Section::new("Parent", parent_level).unwrap();
        parent.add_subsections([Section::new("Child", child_level).unwrap()]).unwrap();

        let expected = if child_level <= parent_level { parent_level + 1 } else { child_level };
        prop_assert_eq!(parent["Child"].level(), expected);
        prop_assert!(parent["Child"].level() > parent_level);
    }

    #[test]
    fn test_clear_preserves_identity(
        title in title_strategy(),
        level in level_strategy(),
        lines in prop::collection::vec(line_strategy(), 0..5),
    ) {
        let mut section = Section::new(title.clone(), level).unwrap();
        section.add_intro_content(lines).unwrap();
        section.add_subsections([Section::root("Child").unwrap()]).unwrap();
        section.clear();

        prop_assert!(section.is_empty());
        prop_assert_eq!(section.title(), title.as_str());
        prop_assert_eq!(section.level(), level);
    }

    #[test]
    fn test_render_starts_with_heading(
        title in title_strategy(),
        level in level_strategy(),
        lines in prop::collection::vec(line_strategy(), 0..5),
    ) {
        let mut section = Section::new(title.clone(), level).unwrap();
        section.add_intro_content(lines.clone()).unwrap();
        let rendered = section.to_string();

        let heading = format!("{} {}\n", "#".repeat(level), title);
        prop_assert!(rendered.starts_with(&heading));

        let mut expected = heading;
        for line in &lines {
            expected.push('\n');
            expected.push_str(line);
        }
        expected.push('\n');
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn test_positional_row_length_must_match(
        columns in prop::collection::vec("[A-Z][a-z]{0,6}", 1..5),
        cells in prop::collection::vec("[a-z]{0,4}", 0..7),
    ) {
        let mut table = Table::with_columns("", columns.clone()).unwrap();
        let result = table.add_row(cells.clone());
        if cells.len() == columns.len() {
            prop_assert!(result.is_ok());
            prop_assert_eq!(table.row_count(), 1);
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                Error::RowLength { expected: columns.len(), found: cells.len() }
            );
            prop_assert_eq!(table.row_count(), 0);
        }
    }

    #[test]
    fn test_tree_descendants_use_root_bullet(
        bullet in prop::sample::select(vec!["*", "-", "+", "1", ">"]),
        labels in prop::collection::vec("[a-z]{1,6}", 1..5),
    ) {
        let mut root = Tree::new("root").with_bullet(bullet).unwrap();
        let mut node = root.add(Tree::new(labels[0].as_str()).with_bullet("~").unwrap());
        for label in &labels[1..] {
            node = node.add(label.as_str());
        }

        for (depth, line) in root.to_string().lines().enumerate() {
            let expected_prefix = format!("{}{} ", "  ".repeat(depth), bullet);
            prop_assert!(line.starts_with(&expected_prefix));
        }
    }
}
