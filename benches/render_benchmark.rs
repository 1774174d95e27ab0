//! Benchmarks for mdreport rendering performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic reports of increasing width and depth.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mdreport::{Section, Table, Tree};

/// Creates a report with `width` subsections per level, `depth` levels deep.
fn create_test_report(width: usize, depth: usize) -> Section {
    fn fill(section: &mut Section, width: usize, depth: usize) {
        let mut table = Table::with_columns("Agents", [("Name", "left"), ("Tasks", "right")])
            .expect("valid columns");
        for i in 0..10 {
            table
                .add_row([format!("agent-{}", i).as_str(), "3"])
                .expect("valid row");
        }
        let mut plan = Tree::new("Plan");
        for i in 0..5 {
            plan.add(format!("step {}", i)).add_children(["a", "b"]);
        }
        section
            .add_intro_content(["Benchmark content line for mdreport rendering."])
            .expect("text content");
        section.add_intro_content([table]).expect("table content");
        section.add_intro_content([plan]).expect("tree content");

        if depth == 0 {
            return;
        }
        for i in 0..width {
            let mut child = Section::root(format!("Child {}", i)).expect("valid title");
            fill(&mut child, width, depth - 1);
            section.add_subsections([child]).expect("unique keys");
        }
    }

    let mut root = Section::root("Benchmark").expect("valid title");
    fill(&mut root, width, depth);
    root
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for (width, depth) in [(2, 2), (4, 3), (8, 3)] {
        let report = create_test_report(width, depth);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, depth)),
            &report,
            |b, report| b.iter(|| black_box(report.to_string())),
        );
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_4x3", |b| b.iter(|| black_box(create_test_report(4, 3))));
}

criterion_group!(benches, bench_render, bench_build);
criterion_main!(benches);
