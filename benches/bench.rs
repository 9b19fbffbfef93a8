use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use queens_solver::queens::checker::{BruteForce, CheckerType, ConstraintChecker, Occupancy};
use queens_solver::queens::solver::Solver;
use std::hint::black_box;
use std::time::Duration;

fn solve_with<C: ConstraintChecker>(n: usize) {
    let mut solver: Solver<C> = Solver::new(n);
    black_box(solver.solve());
}

fn bench_eight_queens(c: &mut Criterion) {
    c.bench_function("8 queens - brute force", |b| {
        b.iter(|| solve_with::<BruteForce>(black_box(8)));
    });

    c.bench_function("8 queens - occupancy", |b| {
        b.iter(|| solve_with::<Occupancy>(black_box(8)));
    });
}

fn bench_checkers(c: &mut Criterion) {
    let mut group = c.benchmark_group("checker");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for n in [6, 8, 10] {
        group.bench_with_input(BenchmarkId::new("brute force", n), &n, |b, &n| {
            b.iter(|| solve_with::<BruteForce>(n));
        });
        group.bench_with_input(BenchmarkId::new("occupancy", n), &n, |b, &n| {
            b.iter(|| solve_with::<Occupancy>(n));
        });
    }

    group.finish();
}

fn bench_runtime_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    group.bench_function("static occupancy", |b| {
        b.iter(|| solve_with::<Occupancy>(black_box(9)));
    });

    group.bench_function("runtime occupancy", |b| {
        b.iter(|| {
            let mut solver = Solver::with_checker(9, CheckerType::Occupancy.to_impl(9));
            black_box(solver.solve());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_eight_queens,
    bench_checkers,
    bench_runtime_dispatch
);
criterion_main!(benches);
