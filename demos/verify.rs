// Runs the classic verification cases for fminbr and zeroin and prints the
// point found, the function value there and the number of evaluations.
//
//   cargo run --example verify
//   cargo run --example verify --features tracing   (per-iteration events,
//                                                    filtered by RUST_LOG)

use brent1d::optim::{fminbr, zeroin, CountedFn, FminbrSettings, ZeroinSettings};

fn test_min(a: f64, b: f64, f: fn(f64) -> f64, msg: &str) {
    let mut counted = CountedFn::new(f);
    let settings = FminbrSettings {
        tol: f64::EPSILON,
        ..FminbrSettings::default()
    };
    println!("\nFor function {msg}\nin [{a}, {b}]");
    match fminbr(|x| counted.call(x), a, b, &settings) {
        Ok(r) => {
            println!("min found is at\t\t\t{:.9e}", r.x);
            println!("Min function value found\t{:.4e}", f(r.x));
            println!("No. of iterations\t\t{}", counted.count());
        }
        Err(e) => println!("failed: {e}"),
    }
}

fn test_root(a: f64, b: f64, f: fn(f64) -> f64, msg: &str) {
    let mut counted = CountedFn::new(f);
    let settings = ZeroinSettings {
        tol: f64::EPSILON,
        ..ZeroinSettings::default()
    };
    println!("\nFor function {msg}\nin [{a}, {b}]");
    match zeroin(|x| counted.call(x), a, b, &settings) {
        Ok(r) => {
            println!("root found is at\t\t{:.9e}", r.x);
            println!("Function value there\t\t{:.4e}", f(r.x));
            println!("No. of iterations\t\t{}", counted.count());
        }
        Err(e) => println!("failed: {e}"),
    }
}

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("brent1d=trace")),
        )
        .init();

    println!("── fminbr ──");
    test_min(0.0, 1.0, |x| (x.powi(2) - 2.0) * x - 5.0, "x^3 - 2*x - 5");
    println!("Exact min is at\t\t\t0.81650");

    test_min(2.0, 3.0, |x| ((x.powi(2) - 2.0) * x - 5.0).powi(2), "(x^3 - 2*x - 5)^2");
    println!("Exact root is\t\t\t2.0945514815");

    test_min(2.0, 3.0, |x| (x.cos() - x).powi(2) - 2.0, "(cos(x)-x)^2 - 2");
    test_min(-1.0, 3.0, |x| (x.cos() - x).powi(2) - 2.0, "(cos(x)-x)^2 - 2");
    test_min(-1.0, 3.0, |x| (x.sin() - x).powi(2) + 1.0, "(sin(x)-x)^2 + 1");

    println!("\n── zeroin ──");
    test_root(2.0, 3.0, |x| (x.powi(2) - 2.0) * x - 5.0, "x^3 - 2*x - 5");
    println!("Exact root is\t\t\t2.0945514815");

    test_root(2.0, 3.0, |x| x.cos() - x, "cos(x)-x");
    test_root(-1.0, 3.0, |x| x.cos() - x, "cos(x)-x");
    test_root(-1.0, 3.0, |x| x.sin() - x, "sin(x)-x");
}
