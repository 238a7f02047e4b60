//! Benchmarks for incremental DCSR construction and lookup

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dcsr::{DcsrMatrix, MatrixConfig, SparseVector};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_vector(rng: &mut StdRng, len: usize, nnz: usize) -> SparseVector {
    (0..nnz)
        .map(|_| (rng.gen_range(0..len), rng.gen_range(0.5..10.0)))
        .collect()
}

fn build_by_rows(rng: &mut StdRng, rows: usize, cols: usize, nnz_per_row: usize) -> DcsrMatrix {
    let mut matrix = DcsrMatrix::new();
    for _ in 0..rows {
        matrix.append_row(&random_vector(rng, cols, nnz_per_row));
    }
    matrix
}

fn bench_append_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_row");
    for &rows in &[100usize, 1_000, 10_000] {
        let mut rng = StdRng::seed_from_u64(1);
        let vectors: Vec<SparseVector> = (0..rows)
            .map(|_| random_vector(&mut rng, 1_000, 16))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(rows), &vectors, |b, vectors| {
            b.iter(|| {
                let mut matrix = DcsrMatrix::new();
                for v in vectors {
                    matrix.append_row(v);
                }
                black_box(matrix.nnz())
            })
        });
    }
    group.finish();
}

fn bench_append_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_column");
    for &segment_size in &[2usize, 5, 16] {
        let mut rng = StdRng::seed_from_u64(2);
        let columns: Vec<SparseVector> = (0..500)
            .map(|_| random_vector(&mut rng, 1_000, 8))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(segment_size),
            &columns,
            |b, columns| {
                b.iter(|| {
                    let config = MatrixConfig::default().with_segment_size(segment_size);
                    let Ok(mut matrix) = DcsrMatrix::from_config(config) else {
                        return 0;
                    };
                    for v in columns {
                        matrix.append_column(v);
                    }
                    black_box(matrix.nnz())
                })
            },
        );
    }
    group.finish();
}

fn bench_get_value(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut matrix = build_by_rows(&mut rng, 2_000, 2_000, 20);
    for _ in 0..200 {
        matrix.append_column(&random_vector(&mut rng, 2_000, 50));
    }
    let queries: Vec<(usize, usize)> = (0..1_000)
        .map(|_| (rng.gen_range(0..2_000), rng.gen_range(0..2_200)))
        .collect();

    let mut group = c.benchmark_group("get_value");
    group.bench_function("fragmented", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for &(i, j) in &queries {
                sum += matrix.get_value(i, j).unwrap_or_default();
            }
            black_box(sum)
        })
    });

    matrix.defragment();
    group.bench_function("defragmented", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for &(i, j) in &queries {
                sum += matrix.get_value(i, j).unwrap_or_default();
            }
            black_box(sum)
        })
    });
    group.finish();
}

fn bench_defragment(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let mut matrix = build_by_rows(&mut rng, 5_000, 1_000, 10);
    for _ in 0..100 {
        matrix.append_column(&random_vector(&mut rng, 5_000, 200));
    }

    c.bench_function("defragment", |b| {
        b.iter(|| {
            let mut copy = matrix.clone();
            copy.defragment();
            black_box(copy.watermark())
        })
    });
}

criterion_group!(
    benches,
    bench_append_row,
    bench_append_column,
    bench_get_value,
    bench_defragment
);
criterion_main!(benches);
