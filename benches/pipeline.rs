// benches/pipeline.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use phone_advisor::{extract_filters, filter_data, phone::PhoneRecord, store::Dataset};

fn synthetic(n: usize) -> Dataset {
    let rows = (0..n)
        .map(|i| {
            let price = 5_000 + (i as i64 * 137) % 60_000;
            let ram = [4, 6, 8, 12, 16][i % 5];
            PhoneRecord::new("Brand", &format!("Model {i}"), price, ram)
        })
        .collect();
    Dataset::from_records(rows)
}

fn bench_pipeline(c: &mut Criterion) {
    let ds = synthetic(10_000);
    let query = "phone under ₹14000 with 16GB RAM";

    c.bench_function("extract_filters", |b| {
        b.iter(|| black_box(extract_filters(black_box(query))))
    });

    let constraints = extract_filters(query);
    c.bench_function("filter_data_10k", |b| {
        b.iter(|| black_box(filter_data(black_box(&ds), &constraints).len()))
    });

    c.bench_function("query_to_results_10k", |b| {
        b.iter(|| {
            let c = extract_filters(black_box(query));
            black_box(filter_data(&ds, &c).len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
