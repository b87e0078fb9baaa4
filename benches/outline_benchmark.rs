//! Benchmarks for outline building and rendering.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic pandoc JSON documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

fn plain(text: String) -> Value {
    json!({"t": "Plain", "c": [{"t": "Str", "c": text}]})
}

/// Creates a pandoc JSON document with the given number of sections.
///
/// Each section has a heading, a lead paragraph and a bullet list whose
/// items carry a nested ordered list.
fn create_test_document(section_count: usize) -> String {
    let mut blocks = Vec::new();

    for i in 0..section_count {
        blocks.push(json!({"t": "Header", "c": [
            1 + i % 3,
            [format!("section-{}", i), ["bench"], []],
            [{"t": "Str", "c": format!("Section {}", i + 1)}]
        ]}));
        blocks.push(json!({"t": "Para", "c": [
            {"t": "Str", "c": "Lead"},
            {"t": "Space"},
            {"t": "Emph", "c": [{"t": "Str", "c": "paragraph"}]},
            {"t": "Space"},
            {"t": "Link", "c": [["", [], []], [{"t": "Str", "c": "link"}], ["https://example.com/?q=1&r=2", ""]]}
        ]}));

        let items: Vec<Value> = (0..5)
            .map(|j| {
                json!([
                    plain(format!("item {} & more", j)),
                    {"t": "OrderedList", "c": [
                        [1, {"t": "Decimal"}, {"t": "Period"}],
                        [[plain("first".into())], [plain("second".into())]]
                    ]}
                ])
            })
            .collect();
        blocks.push(json!({"t": "BulletList", "c": items}));
    }

    json!({"pandoc-api-version": [1, 23, 1], "meta": {}, "blocks": blocks}).to_string()
}

/// Benchmark pandoc AST layout detection.
fn bench_format_detection(c: &mut Criterion) {
    let value: Value = serde_json::from_str(&create_test_document(1)).unwrap();

    c.bench_function("detect_current_layout", |b| {
        b.iter(|| pandoc_opml::detect_format(black_box(&value)).unwrap());
    });
}

/// Benchmark parsing and outline building at various sizes.
fn bench_outline_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_building");

    for section_count in [10, 100, 1000].iter() {
        let json = create_test_document(*section_count);
        let doc = pandoc_opml::parse_json(&json).unwrap();

        group.bench_function(format!("parse_{}_sections", section_count), |b| {
            b.iter(|| pandoc_opml::parse_json(black_box(&json)).unwrap());
        });
        group.bench_function(format!("build_{}_sections", section_count), |b| {
            b.iter(|| pandoc_opml::build_outline(black_box(&doc.blocks)));
        });
    }

    group.finish();
}

/// Benchmark end-to-end OPML rendering.
fn bench_opml_rendering(c: &mut Criterion) {
    let json = create_test_document(100);

    c.bench_function("to_opml_100_sections", |b| {
        b.iter(|| pandoc_opml::to_opml(black_box(&json)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_outline_building,
    bench_opml_rendering,
);
criterion_main!(benches);
