//! Criterion benchmarks for the root-finding engine.
//!
//! Run with:
//! ```bash
//! cargo bench --package polysolve-core --bench solver_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polysolve_core::solve;

/// Builds the monic polynomial with roots 1, 2, ..., degree.
///
/// Expanding from factored form keeps the coefficients exact and gives the
/// Durand–Kerner iteration well-separated real roots.
fn polynomial_with_integer_roots(degree: usize) -> Vec<f64> {
    let mut coeffs = vec![1.0];
    for root in 1..=degree {
        let r = root as f64;
        let mut next = vec![0.0; coeffs.len() + 1];
        for (i, &c) in coeffs.iter().enumerate() {
            next[i] += c;
            next[i + 1] -= c * r;
        }
        coeffs = next;
    }
    coeffs
}

fn bench_closed_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form");
    group.bench_function("linear", |b| {
        b.iter(|| solve(black_box(&[2.0, -4.0])).expect("solve must succeed"))
    });
    group.bench_function("quadratic_real", |b| {
        b.iter(|| solve(black_box(&[1.0, -3.0, 2.0])).expect("solve must succeed"))
    });
    group.bench_function("quadratic_complex", |b| {
        b.iter(|| solve(black_box(&[1.0, 0.0, 1.0])).expect("solve must succeed"))
    });
    group.finish();
}

fn bench_durand_kerner(c: &mut Criterion) {
    let mut group = c.benchmark_group("durand_kerner");
    for degree in [3usize, 4, 6, 8] {
        let coeffs = polynomial_with_integer_roots(degree);
        group.bench_with_input(BenchmarkId::new("degree", degree), &coeffs, |b, coeffs| {
            b.iter(|| solve(black_box(coeffs)).expect("solve must succeed"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closed_form, bench_durand_kerner);
criterion_main!(benches);
