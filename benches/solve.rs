//! Benchmarks for the end-to-end equation pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use eqsolve::{extract_coefficients, solve_equation, validate, Degree};

const INPUTS: [(&str, Degree); 4] = [
    ("2x + 4 = 10", Degree::Linear),
    ("-0.5x - 3.25 = 7", Degree::Linear),
    ("x² + 2x - 3 = 0", Degree::Quadratic),
    ("3x² - x + 12 = 4", Degree::Quadratic),
];

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for (text, degree) in INPUTS {
        group.bench_with_input(BenchmarkId::new(degree.to_string(), text), &text, |b, text| {
            b.iter(|| black_box(validate(text, degree)))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_equation");
    for (text, degree) in INPUTS {
        group.bench_with_input(BenchmarkId::new(degree.to_string(), text), &text, |b, text| {
            b.iter(|| black_box(solve_equation(text, degree)))
        });
    }
    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    c.bench_function("extract_quadratic", |b| {
        b.iter(|| black_box(extract_coefficients("3x² - x + 12 = 4", Degree::Quadratic)))
    });
}

criterion_group!(benches, bench_validate, bench_pipeline, bench_extraction);
criterion_main!(benches);
