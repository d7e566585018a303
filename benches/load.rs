use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Deserialize;
use serde_fable::{from_str, load_str};

#[derive(Deserialize)]
#[allow(dead_code)]
struct Product {
    sku: String,
    name: Option<String>,
    price: f64,
    quantity: i64,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct Catalog {
    products: Vec<Product>,
}

fn catalog(size: usize) -> String {
    let mut input = String::from("%% 0.2.0\ntable+ products\nstring,string?,float,integer\n\"sku\",\"name\",\"price\",\"quantity\"\n");
    for i in 0..size {
        input.push_str(&format!(
            "\"SKU{}\",\"Product {}\",{}.99,{}\n",
            i,
            i,
            i,
            i * 3
        ));
    }
    input
}

fn benchmark_load_variables(c: &mut Criterion) {
    let input = "integer retries 3  # comment\nfloat ratio 1_000.5\nstring motto \"  . (451)-hi \"\nboolean? verbose null\nfloat limit +inf\n";

    c.bench_function("load_variables", |b| b.iter(|| load_str(black_box(input))));
}

fn benchmark_load_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_table");

    for size in [10, 50, 100, 500].iter() {
        let input = catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| load_str(black_box(input)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_table");

    for size in [10, 50, 100, 500].iter() {
        let input = catalog(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| from_str::<Catalog>(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_load_variables,
    benchmark_load_table,
    benchmark_deserialize_table
);
criterion_main!(benches);
