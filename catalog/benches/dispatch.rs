//! dispatch.rs
use criterion::{criterion_group, criterion_main, Criterion};

use catalog::{Dispatcher, Limits};
use value::RawParam;

fn bench_lookup(c: &mut Criterion) {
    let d = Dispatcher::with_catalog(Limits::default()).unwrap();
    c.bench_function("resolve hit", |b| b.iter(|| d.registry().resolve("eulerZigzag")));
    c.bench_function("resolve miss", |b| b.iter(|| d.registry().resolve("notarealfn")));
}

fn bench_invoke(c: &mut Criterion) {
    let d = Dispatcher::with_catalog(Limits::default()).unwrap();
    for (name, tokens) in [
        ("fib", vec!["20"]),
        ("isPrime", vec!["1000003"]),
        ("collatz", vec!["27"]),
        ("bell", vec!["200"]),
        ("matmul", vec!["[[1,2],[3,4]]", "[[5,6],[7,8]]"]),
    ] {
        let params: Vec<RawParam> = tokens.into_iter().map(RawParam::from).collect();
        c.bench_function(&format!("invoke {}", name), |b| {
            b.iter(|| d.invoke(name, &params))
        });
    }
}

criterion_group!(benches, bench_lookup, bench_invoke);
criterion_main!(benches);
