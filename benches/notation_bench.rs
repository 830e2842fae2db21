use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xlrange_primitives::{
    column_label_to_number, column_number_to_label, format_range, parse_range_notation,
    RangeDescriptor, ALL_COLUMNS, ALL_ROWS,
};

fn bench_parse_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("cell", |b| b.iter(|| parse_range_notation(black_box("D5"))));

    group.bench_function("cell_range", |b| {
        b.iter(|| parse_range_notation(black_box("$B$2:$D$5")))
    });

    group.bench_function("column_span", |b| {
        b.iter(|| parse_range_notation(black_box("AA:AZ")))
    });

    group.bench_function("bare_row", |b| b.iter(|| parse_range_notation(black_box("42"))));

    group.bench_function("quoted_sheet", |b| {
        b.iter(|| parse_range_notation(black_box("'Q1 ''24'''!b2:d5")))
    });

    group.bench_function("invalid", |b| {
        b.iter(|| parse_range_notation(black_box("not a range")))
    });

    group.finish();
}

fn bench_format_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let cases = [
        ("cell", RangeDescriptor::cell(5, 4)),
        ("region", RangeDescriptor::region(2, 2, 4, 3)),
        ("columns", RangeDescriptor::region(1, 27, ALL_ROWS, 3)),
        ("rows", RangeDescriptor::region(5, 1, 2, ALL_COLUMNS)),
    ];
    for (name, range) in &cases {
        group.bench_with_input(BenchmarkId::new("range", name), range, |b, range| {
            b.iter(|| format_range(black_box(range), Some("Sheet 1")))
        });
    }

    group.finish();
}

fn bench_column_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("column");

    for column in [1, 702, 16_384].iter() {
        group.bench_with_input(BenchmarkId::new("to_label", column), column, |b, &n| {
            b.iter(|| column_number_to_label(black_box(n)))
        });
    }

    group.bench_function("to_number", |b| {
        b.iter(|| column_label_to_number(black_box("XFD")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_notation,
    bench_format_range,
    bench_column_codec
);
criterion_main!(benches);
