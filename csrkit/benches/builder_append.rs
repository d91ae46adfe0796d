use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csrkit::{matvec, BuilderConfig, CsrMatrixBuilder, MatrixBuilder};

const ROWS: usize = 10_000;
const ENTRIES_PER_ROW: usize = 32;

fn build(config: BuilderConfig) -> csrkit::ReadOnlyCsrMatrix<f64> {
    let mut builder = CsrMatrixBuilder::<f64>::with_config(config);
    for row in 0..ROWS {
        builder.start_row().unwrap();
        for k in 0..ENTRIES_PER_ROW {
            let col = ((row * 31 + k * 97) % 50_000) as i64;
            builder.append_entry(col, (k + 1) as f64).unwrap();
        }
    }
    builder.build_matrix(true).unwrap()
}

fn bench_append(c: &mut Criterion) {
    c.bench_function("append_no_hint", |b| {
        b.iter(|| black_box(build(BuilderConfig::with_capacity(0))))
    });

    c.bench_function("append_with_hint", |b| {
        let config = BuilderConfig::with_capacity(ROWS * ENTRIES_PER_ROW).with_expected_rows(ROWS);
        b.iter(|| black_box(build(config.clone())))
    });

    let features: Vec<String> = (0..ENTRIES_PER_ROW)
        .map(|k| format!("{}:{}.5", k * 13, k))
        .collect();
    c.bench_function("append_sparse_row", |b| {
        b.iter(|| {
            let mut builder = CsrMatrixBuilder::<f64>::new(ROWS * ENTRIES_PER_ROW);
            for _ in 0..1_000 {
                builder.append_sparse_row(black_box(features.as_slice())).unwrap();
            }
            black_box(builder.build_matrix(true).unwrap())
        })
    });
}

fn bench_matvec(c: &mut Criterion) {
    let matrix = build(BuilderConfig::default());
    let dense = vec![0.5; matrix.num_columns()];

    c.bench_function("matvec", |b| {
        b.iter(|| black_box(matvec(&matrix, black_box(&dense)).unwrap()))
    });
}

criterion_group!(benches, bench_append, bench_matvec);
criterion_main!(benches);
