use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wff::{is_satisfiable, is_tautology, parse, to_cnf, to_dnf, truth_table};

const PIGEONS: &str = "(p1 | p2) & (q1 | q2) & (r1 | r2) \
    & ~(p1 & q1) & ~(p1 & r1) & ~(q1 & r1) \
    & ~(p2 & q2) & ~(p2 & r2) & ~(q2 & r2)";

const DISTRIBUTION: &str = "(a & b) | (c & d) | (e & f) | (g & h)";

const CONTRAPOSITION: &str = "((a -> b) & (b -> c) & (c -> d) & (d -> e)) -> (~e -> ~a)";

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            parse(black_box(PIGEONS)).unwrap();
            parse(black_box(CONTRAPOSITION)).unwrap();
        })
    });
}

fn truth_table_benchmark(c: &mut Criterion) {
    let formula = parse(PIGEONS).unwrap();
    c.bench_function("truth_table", |b| {
        b.iter(|| truth_table(black_box(&formula)).filter(|(_, value)| *value).count())
    });
}

fn analysis_benchmark(c: &mut Criterion) {
    let pigeons = parse(PIGEONS).unwrap();
    let contraposition = parse(CONTRAPOSITION).unwrap();
    c.bench_function("analysis", |b| {
        b.iter(|| {
            assert!(!is_satisfiable(black_box(&pigeons)));
            assert!(is_tautology(black_box(&contraposition)));
        })
    });
}

fn normal_form_benchmark(c: &mut Criterion) {
    let distribution = parse(DISTRIBUTION).unwrap();
    let contraposition = parse(CONTRAPOSITION).unwrap();
    c.bench_function("normal_form", |b| {
        b.iter(|| {
            to_cnf(black_box(&distribution));
            to_dnf(black_box(&contraposition));
        })
    });
}

criterion_group!(
    benches,
    parse_benchmark,
    truth_table_benchmark,
    analysis_benchmark,
    normal_form_benchmark
);
criterion_main!(benches);
