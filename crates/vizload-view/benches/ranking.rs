//! Benchmarks for top-N ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use vizload_core::types::Dataset;
use vizload_view::{rank_countries, Metric};

fn generate_countries(size: usize) -> Dataset {
    let records: Vec<_> = (0..size)
        .map(|i| {
            json!({
                "country": format!("Country {}", i),
                "cases": ((i as f64 * 0.37).sin().abs() * 1e8) as u64,
                "deaths": if i % 7 == 0 { serde_json::Value::Null } else { json!(i * 13) },
                "countryInfo": { "flag": format!("https://example.com/{}.png", i) },
            })
        })
        .collect();
    Dataset::Json(serde_json::Value::Array(records))
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_countries");

    for size in [200, 2000, 20000].iter() {
        let data = generate_countries(*size);

        group.bench_with_input(BenchmarkId::new("cases", size), &data, |b, data| {
            b.iter(|| rank_countries(black_box(data), Metric::Cases, 10))
        });

        group.bench_with_input(BenchmarkId::new("deaths", size), &data, |b, data| {
            b.iter(|| rank_countries(black_box(data), Metric::Deaths, 10))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rank);
criterion_main!(benches);
