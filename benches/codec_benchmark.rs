use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csvcodec::{csv_to_json, parse_table, to_csv_string, CsvOptions, Delimiter, Table};

fn sample_table(rows: usize) -> Table {
    let header = vec!["ID".to_string(), "Name".to_string(), "Note".to_string()];
    let records = (0..rows)
        .map(|i| {
            vec![
                i.to_string(),
                format!("Name_{}", i),
                format!("said \"hi\", {} times", i % 7),
            ]
        })
        .collect();
    Table::new(header, records)
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [100, 1000, 10000, 100000].iter() {
        let table = sample_table(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(to_csv_string(&table, Delimiter::COMMA)));
        });
    }

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = CsvOptions::default();

    for size in [100, 1000, 10000, 100000].iter() {
        let text = to_csv_string(&sample_table(*size), Delimiter::COMMA);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(parse_table(&text, &options).unwrap()));
        });
    }

    group.finish();
}

fn benchmark_csv_to_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("csv_to_json");
    let options = CsvOptions::default().infer_types(true);

    for size in [1000, 10000].iter() {
        let text = to_csv_string(&sample_table(*size), Delimiter::COMMA);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(csv_to_json(&text, &options).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize,
    benchmark_parse,
    benchmark_csv_to_json
);
criterion_main!(benches);
