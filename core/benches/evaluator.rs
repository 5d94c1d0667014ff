//! Benchmarks for the expression evaluator.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. parse_only: lexing and tree construction
//! 2. eval_only: pure evaluation of a pre-parsed tree
//! 3. full_pipeline: `Context::evaluate`, arena reset included

use bumpalo::Bump;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use exprs_core::{
    Context, EvalFlags,
    evaluator::{self, EvaluatorOptions},
    parser,
};

/// Generate a mixed-operator chain like "1 + 2 * 3 - 1 + 2 * 3 ..." with `n` terms.
fn generate_chain(n: usize) -> String {
    let mut expr = String::from("1");
    for i in 0..n {
        match i % 3 {
            0 => expr.push_str(" + 2 * 3"),
            1 => expr.push_str(" - 0x10 / 4"),
            _ => expr.push_str(" + 1.5 ** 2"),
        }
    }
    expr
}

const SIZES: [usize; 4] = [50, 200, 1000, 5000];

fn bench_parse_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_only");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let source = generate_chain(size);
            let mut arena = Bump::new();
            b.iter(|| {
                arena.reset();
                let parsed = parser::parse(&arena, black_box(&source)).expect("Parse failed");
                black_box(parsed.expr);
            });
        });
    }

    group.finish();
}

fn bench_eval_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval_only");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            // Setup: parse the expression once
            let arena = Bump::new();
            let source = generate_chain(size);
            let parsed = parser::parse(&arena, &source).expect("Parse failed");

            b.iter(|| {
                let result = evaluator::eval_with_options(
                    black_box(&parsed),
                    black_box(EvaluatorOptions::default()),
                )
                .expect("Evaluation failed");
                black_box(result);
            });
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let source = generate_chain(size);
            let mut ctx = Context::with_defaults().expect("Context creation failed");
            b.iter(|| {
                let result = ctx
                    .evaluate(black_box(&source), EvalFlags::empty())
                    .expect("Evaluation failed");
                black_box(result);
            });
        });
    }

    group.bench_function("string_concat", |b| {
        let mut ctx = Context::with_defaults().expect("Context creation failed");
        b.iter(|| {
            let result = ctx
                .evaluate(black_box(r#"'total: ' + (1.5 * 4) + " of " + 0xFF"#), EvalFlags::empty())
                .expect("Evaluation failed");
            black_box(result);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_only,
    bench_eval_only,
    bench_full_pipeline
);
criterion_main!(benches);
