//! Benchmarks for table resolution.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use serde_json::{json, Value};
use sheetgrid::{EditablePolicy, TableData, TableSettings, TableView};

/// Synthetic payload of `rows` x `cols` styled numeric cells with a merge
/// every tenth row.
fn payload(rows: usize, cols: usize) -> String {
    let row_data: Vec<Value> = (0..rows)
        .map(|r| {
            let values: Vec<Value> = (0..cols)
                .map(|c| {
                    json!({
                        "formattedValue": format!("{}", r * cols + c),
                        "effectiveValue": { "numberValue": (r * cols + c) as f64 },
                        "effectiveFormat": {
                            "backgroundColor": { "red": 0.9, "green": 0.9, "blue": 0.9 },
                            "textFormat": { "bold": c == 0, "fontSize": 10 },
                            "borders": {
                                "bottom": {
                                    "style": "SOLID",
                                    "width": 1,
                                    "colorStyle": { "rgbColor": {} }
                                }
                            }
                        }
                    })
                })
                .collect();
            json!({ "values": values })
        })
        .collect();

    let merges: Vec<Value> = (0..rows)
        .step_by(10)
        .map(|r| {
            json!({
                "startRowIndex": r,
                "endRowIndex": r + 1,
                "startColumnIndex": 0,
                "endColumnIndex": 2
            })
        })
        .collect();

    json!({
        "sheets": [{
            "data": [{ "rowData": row_data }],
            "merges": merges
        }]
    })
    .to_string()
}

fn bench_decode(c: &mut Criterion) {
    let json = payload(100, 20);

    c.bench_function("decode_100x20", |b| {
        b.iter(|| TableData::from_json(black_box(&json)).expect("Failed to decode"))
    });
}

fn bench_resolve_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for (rows, cols) in [(10, 10), (100, 20), (1000, 20)] {
        let data = TableData::from_json(&payload(rows, cols)).expect("Failed to decode");
        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::new("read_only", format!("{rows}x{cols}")),
            &data,
            |b, data| b.iter(|| TableView::default().resolve(black_box(data))),
        );
    }

    group.finish();
}

fn bench_resolve_editable(c: &mut Criterion) {
    let data = TableData::from_json(&payload(100, 20)).expect("Failed to decode");
    let view = TableView::new(TableSettings {
        editable: EditablePolicy::Numeric,
        create_matrix: true,
        ..TableSettings::default()
    });

    c.bench_function("resolve_editable_100x20", |b| {
        b.iter(|| view.resolve(black_box(&data)))
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_resolve_sizes,
    bench_resolve_editable,
);

criterion_main!(benches);
