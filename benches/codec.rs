use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use toon_codec::{decode, encode, stats, toon, Value};

fn flat_document() -> Value {
    toon!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "active": true,
    })
}

fn product_table(size: usize) -> Value {
    let rows: Vec<Value> = (0..size)
        .map(|i| {
            toon!({
                "sku": (format!("SKU{}", i)),
                "name": (format!("Product {}", i)),
                "price": (9.99 + i as f64),
                "quantity": (i as u32),
            })
        })
        .collect();
    Value::Array(rows)
}

fn nested_document() -> Value {
    toon!({
        "id": 42,
        "metadata": {
            "created": "2023-01-01T00:00:00Z",
            "updated": "2023-12-31T23:59:59Z",
            "version": 3,
        },
        "tags": ["important", "verified", "production"],
    })
}

fn benchmark_encode_flat(c: &mut Criterion) {
    let value = flat_document();
    c.bench_function("encode_flat_object", |b| {
        b.iter(|| encode(black_box(&value)))
    });
}

fn benchmark_decode_flat(c: &mut Criterion) {
    let text = encode(&flat_document());
    c.bench_function("decode_flat_object", |b| {
        b.iter(|| decode(black_box(&text)))
    });
}

fn benchmark_encode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_tabular");
    for size in [10, 50, 100, 500].iter() {
        let value = product_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_decode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_tabular");
    for size in [10, 50, 100, 500].iter() {
        let text = encode(&product_table(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let value = nested_document();
    let text = encode(&value);

    let mut group = c.benchmark_group("nested");
    group.bench_function("encode", |b| b.iter(|| encode(black_box(&value))));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&text))));
    group.finish();
}

fn benchmark_primitive_arrays(c: &mut Criterion) {
    let numbers = Value::Array((0..100).map(Value::from).collect());
    let floats = Value::Array((0..100).map(|i| Value::from(i as f64 * 1.5)).collect());

    let mut group = c.benchmark_group("primitive_array");
    group.bench_function("encode_integers", |b| {
        b.iter(|| encode(black_box(&numbers)))
    });
    group.bench_function("encode_floats", |b| b.iter(|| encode(black_box(&floats))));

    let numbers_text = encode(&numbers);
    let floats_text = encode(&floats);
    group.bench_function("decode_integers", |b| {
        b.iter(|| decode(black_box(&numbers_text)))
    });
    group.bench_function("decode_floats", |b| {
        b.iter(|| decode(black_box(&floats_text)))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let value = product_table(100);

    let mut group = c.benchmark_group("comparison");
    group.bench_function("toon_encode", |b| b.iter(|| encode(black_box(&value))));
    group.bench_function("json_encode", |b| {
        b.iter(|| serde_json::to_string(black_box(&value)))
    });

    let toon_text = encode(&value);
    let json_text = serde_json::to_string(&value).unwrap();
    group.bench_function("toon_decode", |b| b.iter(|| decode(black_box(&toon_text))));
    group.bench_function("json_decode", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&json_text)))
    });
    group.bench_function("stats", |b| {
        b.iter(|| stats(black_box(&json_text), black_box(&toon_text)))
    });
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let value = nested_document();
    c.bench_function("roundtrip_nested", |b| {
        b.iter(|| {
            let text = encode(black_box(&value));
            decode(black_box(&text)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_flat,
    benchmark_decode_flat,
    benchmark_encode_tabular,
    benchmark_decode_tabular,
    benchmark_nested,
    benchmark_primitive_arrays,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
