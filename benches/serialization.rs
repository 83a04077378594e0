use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_con::{from_str, to_string};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Nested {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: i as u32,
            name: format!("user-{i}"),
            email: format!("user{i}@example.com"),
            active: i % 2 == 0,
        })
        .collect()
}

fn bench_encode_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };
    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn bench_decode_simple(c: &mut Criterion) {
    let con = "id: 123\nname: Alice\nemail: alice@example.com\nactive: true";
    c.bench_function("decode_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(con)))
    });
}

fn bench_tabular_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular");
    for size in [10, 100, 500] {
        let rows = users(size);
        let con = to_string(&rows).unwrap();
        group.bench_with_input(BenchmarkId::new("encode", size), &rows, |b, rows| {
            b.iter(|| to_string(black_box(rows)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &con, |b, con| {
            b.iter(|| from_str::<Vec<User>>(black_box(con)))
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let nested = Nested {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-06-01".to_string(),
            version: 3,
        },
        tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };
    let con = to_string(&nested).unwrap();
    c.bench_function("encode_nested", |b| b.iter(|| to_string(black_box(&nested))));
    c.bench_function("decode_nested", |b| {
        b.iter(|| from_str::<Nested>(black_box(&con)))
    });
}

criterion_group!(
    benches,
    bench_encode_simple,
    bench_decode_simple,
    bench_tabular_arrays,
    bench_nested
);
criterion_main!(benches);
