use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use math_lu::{LuConfig, decompose, decompose_with, inverse_matrix};
use ndarray::{Array1, Array2};

fn test_matrix(n: usize) -> Array2<f64> {
    // Dominant entries on the anti-diagonal, so every column needs a row swap.
    Array2::from_shape_fn((n, n), |(i, j)| {
        if i + j == n - 1 {
            n as f64 + (i % 3) as f64
        } else {
            ((i * 31 + j * 17) % 13) as f64 / 13.0 - 0.5
        }
    })
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("lu_decompose");
    for n in [16, 64, 256] {
        let a = test_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| decompose(black_box(a)).unwrap())
        });
    }
    group.finish();

    // Forces the parallel row update when built with the `rayon` feature.
    let eager = LuConfig {
        parallel_threshold: 0,
        ..LuConfig::default()
    };
    let a = test_matrix(256);
    c.bench_function("lu_decompose_256_eager_parallel", |b| {
        b.iter(|| decompose_with(black_box(&a), &eager).unwrap())
    });
}

fn bench_solve(c: &mut Criterion) {
    let n = 128;
    let a = test_matrix(n);
    let rhs = Array1::from_shape_fn(n, |i| i as f64);
    let factorization = decompose(&a).unwrap();

    c.bench_function("lu_solve_128_factored", |b| {
        b.iter(|| factorization.solve(black_box(&rhs)).unwrap())
    });

    c.bench_function("lu_inverse_64", |b| {
        let a = test_matrix(64);
        b.iter(|| inverse_matrix(black_box(&a)).unwrap())
    });
}

criterion_group!(benches, bench_decompose, bench_solve);
criterion_main!(benches);
