// Rust guideline compliant 2026-10-18

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use envelope_core::{
    generate_docs_from_json, EnvelopeConfig, NoopHook, ResponseBuilder, ResponseParams,
};
use serde_json::{json, Value};

fn build_rows(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| json!({"id": i, "name": format!("row {}", i)}))
            .collect(),
    )
}

fn bench_build_collapsed(c: &mut Criterion) {
    let builder = ResponseBuilder::with_hook(&EnvelopeConfig::default(), NoopHook);
    let rows = build_rows(1000);
    c.bench_function("build_collapsed_1000", |b| {
        b.iter(|| black_box(builder.ok(ResponseParams::new().payload(rows.clone()))))
    });
}

fn bench_build_with_found(c: &mut Criterion) {
    let builder = ResponseBuilder::with_hook(&EnvelopeConfig::default(), NoopHook);
    let rows = build_rows(1000);
    c.bench_function("build_found_1000", |b| {
        b.iter(|| {
            black_box(builder.ok(ResponseParams::new().found(1000).payload(rows.clone())))
        })
    });
}

fn bench_generate_docs(c: &mut Criterion) {
    let examples = json!({
        "ok": {"payload": {"id": 1}},
        "created": {"payload": [1, 2, 3]},
        "bad_request": {},
        "unauth": null,
        "not_found": null,
        "server_error": null,
    });
    c.bench_function("generate_docs", |b| {
        b.iter(|| black_box(generate_docs_from_json(&examples)))
    });
}

criterion_group!(
    benches,
    bench_build_collapsed,
    bench_build_with_found,
    bench_generate_docs
);
criterion_main!(benches);
