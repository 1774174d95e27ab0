//! End-to-end rendering tests.

use mdreport::{to_markdown, MarkdownRenderer, Row, Section, Table, Tree};

#[test]
fn test_report_with_details() {
    let mut report = Section::new("Report", 1).unwrap();
    report.add_intro_content(["Intro"]).unwrap();

    let mut details = Section::new("Details", 2).unwrap();
    details.add_intro_content(["line"]).unwrap();
    report.add_subsections([("Details", details)]).unwrap();

    assert_eq!(
        to_markdown(&report),
        "# Report\n\nIntro\n\n## Details\n\nline\n"
    );
}

#[test]
fn test_table_lines() {
    let mut table = Table::with_columns("T", [("A", "left"), ("B", "right")]).unwrap();
    table.add_row(["x", "y"]).unwrap();

    let rendered = table.to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines, ["Table: T", "| A | B |", "| :- | -: |", "| x | y |"]);
}

#[test]
fn test_keyed_rows_render_placeholders() {
    let mut table = Table::with_columns("", ["Agent", "State", "Note"]).unwrap();
    table.add_row([("State", "idle"), ("Agent", "writer")]).unwrap();
    table
        .add_row(Row::keyed([("Agent", "critic"), ("Note", "retrying")]))
        .unwrap();

    assert_eq!(
        table.to_string(),
        "| Agent | State | Note |\n\
         | :--- | :--- | :-- |\n\
         | writer | idle |  |\n\
         | critic |  | retrying |"
    );
}

#[test]
fn test_nested_report() {
    let mut plan = Tree::new("Plan").with_bullet("-").unwrap();
    let research = plan.add("Research");
    research.add_children(["Search", "Summarize"]);
    plan.add("Write");

    let mut queue = Table::with_columns("Queue", [("Task", "left"), ("Priority", "center")]).unwrap();
    queue.add_row(["draft", "high"]).unwrap();

    let mut tasks = Section::new("Tasks", 1).unwrap();
    tasks.add_intro_content([plan]).unwrap();

    let mut agents = Section::new("Agents", 1).unwrap();
    agents.add_intro_content([queue]).unwrap();

    let mut report = Section::root("Run").unwrap();
    report.add_intro_content(["Budget: 10"]).unwrap();
    report.add_subsections([tasks, agents]).unwrap();

    let expected = "# Run\n\
                    \n\
                    Budget: 10\n\
                    \n\
                    ## Tasks\n\
                    \n\
                    - Plan\n  - Research\n    - Search\n    - Summarize\n  - Write\n\
                    \n\
                    ## Agents\n\
                    \n\
                    Table: Queue\n| Task | Priority |\n| :-- | :-----: |\n| draft | high |\n";
    assert_eq!(report.to_string(), expected);
}

#[test]
fn test_renderer_defaults_apply_to_unstyled_outlines() {
    let mut outline = Tree::new("a");
    outline.add("b");
    let mut section = Section::root("S").unwrap();
    section.add_intro_content([outline]).unwrap();

    let renderer = MarkdownRenderer::new().with_tree_bullet("+");
    assert_eq!(renderer.render(&section), "# S\n\n+ a\n  + b\n");
    assert_eq!(section.to_string(), "# S\n\n* a\n  * b\n");
}

#[test]
fn test_clear_then_render() {
    let mut report = Section::new("Report", 2).unwrap();
    report.add_intro_content(["x"]).unwrap();
    report
        .add_subsections([Section::root("Child").unwrap()])
        .unwrap();
    report.clear();
    assert_eq!(report.to_string(), "## Report\n\n");
}
