// demos/demo.rs
use vr_bench::analytics::bs_analytic;
use vr_bench::math_utils::Timer;
use vr_bench::mc::estimators::{mc_antithetic, mc_control_variate, mc_naive, EstimatorResult};
use vr_bench::report::{compare, ComparisonConfig};
use vr_bench::rng::SimRng;
use vr_bench::{MarketParams, OptionKind};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--scaling" {
        run_scaling_study();
    } else {
        run_demo_mode();
    }
}

fn print_estimate(name: &str, result: &EstimatorResult, analytic: f64, elapsed_ms: f64) {
    println!("{} price: {:.6} ({:.2} ms)", name, result.price, elapsed_ms);
    println!("  std error: {:.6}", result.std_error);
    println!("  95% CI: [{:.6}, {:.6}]", result.ci_lower, result.ci_upper);
    println!("  absolute error: {:.6}", (result.price - analytic).abs());
    println!("  CI covers analytic: {}\n", result.ci_contains(analytic));
}

fn run_demo_mode() {
    println!("Running vr-bench Monte Carlo Demo\n");

    let market = MarketParams::default();
    let paths = 100_000;
    let mut rng = SimRng::from_seed(12345);

    for kind in [OptionKind::Call, OptionKind::Put] {
        let analytic = bs_analytic::bs_price(&market, kind);
        println!("--- European {} ---", kind.label());
        println!("Analytic Price: {:.6}\n", analytic);

        let mut timer = Timer::new();

        timer.start();
        let naive = mc_naive(&market, kind, paths, &mut rng);
        print_estimate("Naive", &naive, analytic, timer.elapsed_ms());

        timer.start();
        let anti = mc_antithetic(&market, kind, paths, &mut rng);
        print_estimate("Antithetic", &anti, analytic, timer.elapsed_ms());
        println!("  pair correlation: {:.6}\n", anti.correlation());

        timer.start();
        let control = mc_control_variate(&market, kind, paths, &mut rng);
        print_estimate("Control variate", &control, analytic, timer.elapsed_ms());
        println!("  b*: {:.6}, rho: {:.6}\n", control.b_star(), control.correlation());
    }

    let config = ComparisonConfig {
        paths,
        seed: Some(12345),
        ..Default::default()
    };
    println!("{}", compare(&config, &mut config.rng()));
}

fn run_scaling_study() {
    let market = MarketParams::default();
    let analytic = bs_analytic::bs_price(&market, OptionKind::Call);
    let mut rng = SimRng::from_seed(42);

    println!("paths,naive_se,antithetic_se,control_se,control_abs_error");
    for paths in [1_000, 10_000, 100_000, 1_000_000] {
        let naive = mc_naive(&market, OptionKind::Call, paths, &mut rng);
        let anti = mc_antithetic(&market, OptionKind::Call, paths, &mut rng);
        let control = mc_control_variate(&market, OptionKind::Call, paths, &mut rng);
        println!(
            "{},{:.6},{:.6},{:.6},{:.6}",
            paths,
            naive.std_error,
            anti.std_error,
            control.std_error,
            (control.price - analytic).abs()
        );
    }
}
