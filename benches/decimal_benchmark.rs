// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - decimal and scientific text into (coefficient, scale)
// 2. Formatting - canonical text rendering
// 3. Arithmetic - aligned addition, multiplication, rounded division
// 4. Rescaling - exact upscale and rounded downscale
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use exactdec::{Decimal, RoundingMode};

// ============================================================================
// Parsing Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["123", "-123.456789", "1.23e+100", "123456789012345678901234567890.12345"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| black_box(input).parse::<Decimal>().unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let values = [
        ("integer", Decimal::new(123456789, 0)),
        ("fractional", Decimal::new(123456789, 4)),
        ("negative_scale", Decimal::new(123456789, -10)),
        ("short_coefficient", Decimal::new(5, 30)),
    ];
    for (name, value) in values {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| black_box(value).to_string());
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let a = Decimal::new(123456789012345678, 6);
    let b = Decimal::new(987654321, 2);

    group.bench_function("add_aligned_scales", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b));
    });
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b));
    });
    group.bench_function("div_half_even_scale_20", |bench| {
        bench.iter(|| {
            black_box(&a)
                .div(black_box(&b), 20, RoundingMode::HalfEven)
                .unwrap()
        });
    });
    group.bench_function("cmp_mixed_scales", |bench| {
        bench.iter(|| black_box(&a).cmp(black_box(&b)));
    });

    group.finish();
}

// ============================================================================
// Rescale Benchmarks
// ============================================================================

fn benchmark_rescale(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescale");

    let value = Decimal::new(123456789012345678, 9);

    for target in [9i32, 29, 2] {
        group.bench_with_input(
            BenchmarkId::from_parameter(target),
            &target,
            |bench, &target| {
                bench.iter(|| {
                    black_box(&value)
                        .rescale(target, RoundingMode::HalfEven)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_arithmetic,
    benchmark_rescale
);
criterion_main!(benches);
