//! Benchmarks for the measurement and layout pass.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::expect_fun_call,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use autotable::layout::{measure_grid, TableLayout};
use autotable::render::backend::TextMeasurer;
use autotable::types::TableContent;

struct MonoMeasurer;

impl TextMeasurer for MonoMeasurer {
    fn text_width(&mut self, text: &str, _font: &str) -> f32 {
        text.chars().count() as f32 * 8.4
    }
}

fn grid(rows: usize, cols: usize) -> TableContent {
    TableContent::from_text(
        (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| format!("rowId: {r}\ncolumnId: {c}"))
                    .collect()
            })
            .collect(),
    )
    .expect("rectangular grid")
}

/// Benchmark the full measure pass across grid sizes
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure_grid");
    for (rows, cols) in [(30, 20), (100, 50), (500, 50)] {
        let content = grid(rows, cols);
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{rows}x{cols}")),
            &content,
            |b, content| b.iter(|| measure_grid(black_box(content), &mut MonoMeasurer)),
        );
    }
    group.finish();
}

/// Benchmark cumulative layout construction from measured sizes
fn bench_layout(c: &mut Criterion) {
    let content = grid(500, 50);
    let measured = measure_grid(&content, &mut MonoMeasurer);

    c.bench_function("table_layout_500x50", |b| {
        b.iter(|| TableLayout::new(black_box(measured.size_table()), 1, 1))
    });
}

/// Benchmark hit testing on a large layout
fn bench_hit_test(c: &mut Criterion) {
    let content = grid(500, 50);
    let measured = measure_grid(&content, &mut MonoMeasurer);
    let layout = TableLayout::new(measured.size_table(), 1, 1);

    c.bench_function("row_at_y_500", |b| {
        b.iter(|| layout.row_at_y(black_box(layout.total_height() * 0.73)))
    });
}

criterion_group!(benches, bench_measure, bench_layout, bench_hit_test);
criterion_main!(benches);
