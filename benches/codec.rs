use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_codec::{decode, encode, from_str, to_string, toon, Value};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn make_products(count: u32) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            sku: format!("SKU{i}"),
            name: format!("Product {i}"),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_value_encode(c: &mut Criterion) {
    let value = toon!({
        "company": "ACME",
        "employees": [
            { "name": "Alice", "age": 30 },
            { "name": "Bob", "age": 25 }
        ],
        "tags": ["rocket", "anvil", "dynamite"]
    });

    c.bench_function("encode_value_tree", |b| b.iter(|| encode(black_box(&value))));
}

fn benchmark_value_decode(c: &mut Criterion) {
    let text = "company: ACME\nemployees[2]{name,age}:\n  Alice,30\n  Bob,25\ntags[3]: rocket,anvil,dynamite";

    c.bench_function("decode_value_tree", |b| {
        b.iter(|| decode(black_box(text)).unwrap())
    });
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let toon = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(toon)))
    });
}

fn benchmark_tabular_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular_array");

    for size in [10, 100, 500].iter() {
        let products = make_products(*size);
        let text = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &products, |b, p| {
            b.iter(|| to_string(black_box(p)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, t| {
            b.iter(|| from_str::<Vec<Product>>(black_box(t)))
        });
    }
    group.finish();
}

fn benchmark_inline_arrays(c: &mut Criterion) {
    let numbers: Vec<i32> = (0..1000).collect();
    let text = to_string(&numbers).unwrap();

    let mut group = c.benchmark_group("inline_array");
    group.bench_function("encode_1000_ints", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });
    group.bench_function("decode_1000_ints", |b| {
        b.iter(|| from_str::<Vec<i32>>(black_box(&text)))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let products = make_products(100);

    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon_serialize", |b| {
        b.iter(|| to_string(black_box(&products)))
    });
    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&products)))
    });

    let toon_str = to_string(&products).unwrap();
    let json_str = serde_json::to_string(&products).unwrap();

    group.bench_function("toon_deserialize", |b| {
        b.iter(|| from_str::<Vec<Product>>(black_box(&toon_str)))
    });
    group.bench_function("json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<Vec<Product>>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let value: Value = toon!({
        "users": [
            { "name": "Alice", "age": 30 },
            { "name": "Bob", "age": 25 }
        ]
    });

    c.bench_function("roundtrip_value_tree", |b| {
        b.iter(|| {
            let text = encode(black_box(&value));
            decode(black_box(&text)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_value_encode,
    benchmark_value_decode,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_tabular_arrays,
    benchmark_inline_arrays,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
