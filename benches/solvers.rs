use criterion::{criterion_group, criterion_main, Criterion};

use brent1d::optim::{fminbr, zeroin, FminbrSettings, ZeroinSettings};

// ---------------------------------------------------------------------------
// Baselines: the fallback steps alone, without interpolation
// ---------------------------------------------------------------------------

fn bisect(f: impl Fn(f64) -> f64, mut a: f64, mut b: f64, tol: f64) -> f64 {
    let mut fa = f(a);
    while (b - a).abs() > tol {
        let m = 0.5 * (a + b);
        let fm = f(m);
        if (fm > 0.0) == (fa > 0.0) {
            a = m;
            fa = fm;
        } else {
            b = m;
        }
    }
    0.5 * (a + b)
}

fn golden(f: impl Fn(f64) -> f64, mut a: f64, mut b: f64, tol: f64) -> f64 {
    let r = 0.5 * (3.0 - 5.0_f64.sqrt());
    let mut x1 = a + r * (b - a);
    let mut x2 = b - r * (b - a);
    let mut f1 = f(x1);
    let mut f2 = f(x2);
    while b - a > tol {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = a + r * (b - a);
            f1 = f(x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = b - r * (b - a);
            f2 = f(x2);
        }
    }
    0.5 * (a + b)
}

// ---------------------------------------------------------------------------
// Root finding
// ---------------------------------------------------------------------------

fn root_cubic(c: &mut Criterion) {
    let mut g = c.benchmark_group("root_cubic");
    let f = |x: f64| (x * x - 2.0) * x - 5.0;
    let settings = ZeroinSettings {
        tol: 1e-12,
        ..ZeroinSettings::default()
    };

    g.bench_function("zeroin", |b| {
        b.iter(|| zeroin(f, std::hint::black_box(2.0), 3.0, &settings).unwrap().x)
    });

    g.bench_function("bisection", |b| {
        b.iter(|| bisect(f, std::hint::black_box(2.0), 3.0, 1e-12))
    });

    g.finish();
}

fn root_triple(c: &mut Criterion) {
    let mut g = c.benchmark_group("root_triple");
    let f = |x: f64| x.sin() - x;
    let settings = ZeroinSettings {
        tol: 1e-12,
        ..ZeroinSettings::default()
    };

    g.bench_function("zeroin", |b| {
        b.iter(|| zeroin(f, std::hint::black_box(-1.0), 3.0, &settings).unwrap().x)
    });

    g.bench_function("bisection", |b| {
        b.iter(|| bisect(f, std::hint::black_box(-1.0), 3.0, 1e-12))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Minimization
// ---------------------------------------------------------------------------

fn min_smooth(c: &mut Criterion) {
    let mut g = c.benchmark_group("min_smooth");
    let f = |x: f64| (x.cos() - x).powi(2) - 2.0;
    let settings = FminbrSettings {
        tol: 1e-10,
        ..FminbrSettings::default()
    };

    g.bench_function("fminbr", |b| {
        b.iter(|| fminbr(f, std::hint::black_box(-1.0), 3.0, &settings).unwrap().x)
    });

    g.bench_function("golden_section", |b| {
        b.iter(|| golden(f, std::hint::black_box(-1.0), 3.0, 1e-8))
    });

    g.finish();
}

fn min_kink(c: &mut Criterion) {
    let mut g = c.benchmark_group("min_kink");
    let f = |x: f64| (x - 0.2).abs();
    let settings = FminbrSettings {
        tol: 1e-10,
        ..FminbrSettings::default()
    };

    g.bench_function("fminbr", |b| {
        b.iter(|| fminbr(f, std::hint::black_box(-1.0), 1.0, &settings).unwrap().x)
    });

    g.bench_function("golden_section", |b| {
        b.iter(|| golden(f, std::hint::black_box(-1.0), 1.0, 1e-8))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, root_cubic, root_triple, min_smooth, min_kink);
criterion_main!(benches);
