//! Criterion benchmarks for the solve request/response codec.
//!
//! Run with:
//! ```bash
//! cargo bench --package polysolve-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex64;
use polysolve_core::{
    decode_request, decode_response, encode_request, encode_response, SolveRequest, SolveResponse,
};

fn make_request(degree: usize) -> SolveRequest {
    let coefficients: Vec<f64> = (0..=degree).map(|i| (i as f64) * 0.5 - 1.0).collect();
    SolveRequest::new(coefficients)
}

fn make_response(root_count: usize) -> SolveResponse {
    let roots: Vec<Complex64> = (0..root_count)
        .map(|i| Complex64::new(i as f64, -(i as f64) / 2.0))
        .collect();
    SolveResponse::success(roots)
}

fn bench_encode_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_request");
    for degree in [1usize, 2, 5, 10, 50] {
        let req = make_request(degree);
        group.bench_with_input(BenchmarkId::new("degree", degree), &req, |b, req| {
            b.iter(|| encode_request(black_box(req)))
        });
    }
    group.finish();
}

fn bench_decode_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_request");
    for degree in [1usize, 2, 5, 10, 50] {
        let bytes = encode_request(&make_request(degree));
        group.bench_with_input(BenchmarkId::new("degree", degree), &bytes, |b, bytes| {
            b.iter(|| decode_request(black_box(bytes)).expect("decode must succeed"))
        });
    }
    group.finish();
}

fn bench_response_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_roundtrip");
    for root_count in [1usize, 3, 10, 50] {
        let resp = make_response(root_count);
        group.bench_with_input(
            BenchmarkId::new("roots", root_count),
            &resp,
            |b, resp| {
                b.iter(|| {
                    let bytes = encode_response(black_box(resp));
                    decode_response(black_box(&bytes)).expect("decode must succeed")
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_request,
    bench_decode_request,
    bench_response_roundtrip
);
criterion_main!(benches);
