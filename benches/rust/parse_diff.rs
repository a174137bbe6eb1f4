//! Parse / Differentiate / Evaluate Benchmark
//!
//! Benchmarks a long generated sum in every notation, from parsing through
//! differentiation to evaluation of the unsimplified derivative.

use criterion::{Criterion, criterion_group, criterion_main};
use exprdiff::{Notation, Parser, parse};
use std::fmt::Write;
use std::hint::black_box;

// =============================================================================
// Expression Generator
// =============================================================================

/// Generates a left-nested sum of N mixed terms in prefix notation
///
/// Implicit postfix cannot delimit nested variadics, so those terms can be
/// switched off.
fn generate_mixed_prefix(n: usize, variadics: bool) -> String {
    let mut s = String::with_capacity(n * 40);
    for _ in 1..n {
        s.push_str("(+ ");
    }
    for i in 1..=n {
        match i % 4 {
            0 => write!(s, "(* {} (* x y))", i).unwrap(),
            1 => write!(s, "(/ (- x {}) (+ z 1))", i).unwrap(),
            2 => write!(s, "(gauss {} y (+ one z) x)", i).unwrap(),
            3 if variadics => write!(s, "(var x y (negate z) {})", i).unwrap(),
            3 => write!(s, "(negate (* z {}))", i).unwrap(),
            _ => unreachable!(),
        }
        if i > 1 {
            s.push(')');
        }
        s.push(' ');
    }
    s.truncate(s.trim_end().len());
    s
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_sum_200");
    group.sample_size(20);

    let n = 200;
    let prefix_str = generate_mixed_prefix(n, true);
    let expr = parse(&prefix_str, Notation::Prefix).unwrap();
    let postfix_str = expr.render(Notation::Postfix);
    let infix_str = parse(&generate_mixed_prefix(n, false), Notation::Prefix)
        .unwrap()
        .render(Notation::Infix);

    // -------------------------------------------------------------------------
    // Parsing Benchmarks
    // -------------------------------------------------------------------------

    group.bench_function("parse_prefix", |b| {
        b.iter(|| parse(black_box(&prefix_str), Notation::Prefix))
    });

    group.bench_function("parse_postfix", |b| {
        b.iter(|| parse(black_box(&postfix_str), Notation::Postfix))
    });

    group.bench_function("parse_implicit_postfix", |b| {
        b.iter(|| parse(black_box(&infix_str), Notation::Infix))
    });

    let bounded = Parser::new(Notation::Prefix).max_depth(Some(exprdiff::DEFAULT_MAX_DEPTH));
    group.bench_function("parse_prefix_bounded", |b| {
        b.iter(|| bounded.parse(black_box(&prefix_str)))
    });

    // -------------------------------------------------------------------------
    // Differentiation and Evaluation
    // -------------------------------------------------------------------------

    group.bench_function("diff_x", |b| {
        b.iter(|| black_box(&expr).differentiate(black_box("x")))
    });

    let derivative = expr.differentiate("x");
    let point = [0.7, 0.3, 0.5];

    group.bench_function("eval_expr", |b| {
        b.iter(|| black_box(&expr).evaluate(black_box(&point)))
    });

    group.bench_function("eval_derivative", |b| {
        b.iter(|| black_box(&derivative).evaluate(black_box(&point)))
    });

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    group.bench_function("render_prefix", |b| {
        b.iter(|| black_box(&derivative).render(Notation::Prefix))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_diff);

criterion_main!(benches);
