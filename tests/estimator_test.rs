// tests/estimator_test.rs
use vr_bench::analytics::bs_analytic;
use vr_bench::mc::estimators::{mc_antithetic, mc_control_variate, mc_naive, EstimatorResult};
use vr_bench::report::{compare, relative_efficiency, ComparisonConfig, Method};
use vr_bench::rng::SimRng;
use vr_bench::{MarketParams, OptionKind};

const PATHS: usize = 100_000;

type Estimator = fn(&MarketParams, OptionKind, usize, &mut SimRng) -> EstimatorResult;

fn within_four_se(result: &EstimatorResult, reference: f64) -> bool {
    (result.price - reference).abs() < 4.0 * result.std_error
}

fn check_convergence(name: &str, estimator: Estimator, kind: OptionKind) {
    let market = MarketParams::default();
    let reference = bs_analytic::bs_price(&market, kind);
    let trials = 20;

    let hits = (0..trials)
        .filter(|seed| {
            let mut rng = SimRng::from_seed(1_000 + seed);
            within_four_se(&estimator(&market, kind, PATHS, &mut rng), reference)
        })
        .count();

    println!("{} ({:?}): {}/{} trials within 4 standard errors", name, kind, hits, trials);
    assert!(hits >= 19, "{} converged in only {}/{} trials", name, hits, trials);
}

#[test]
fn test_naive_converges_to_analytic() {
    check_convergence("naive", mc_naive, OptionKind::Call);
}

#[test]
fn test_antithetic_converges_to_analytic() {
    check_convergence("antithetic", mc_antithetic, OptionKind::Call);
}

#[test]
fn test_control_variate_converges_to_analytic() {
    check_convergence("control variate", mc_control_variate, OptionKind::Call);
}

#[test]
fn test_put_estimators_converge() {
    check_convergence("naive", mc_naive, OptionKind::Put);
    check_convergence("antithetic", mc_antithetic, OptionKind::Put);
    check_convergence("control variate", mc_control_variate, OptionKind::Put);
}

#[test]
fn test_naive_confidence_interval_coverage() {
    let market = MarketParams::default();
    let reference = bs_analytic::bs_price(&market, OptionKind::Call);
    let trials = 100;

    let covered = (0..trials)
        .filter(|seed| {
            let mut rng = SimRng::from_seed(50_000 + seed);
            mc_naive(&market, OptionKind::Call, PATHS, &mut rng).ci_contains(reference)
        })
        .count();

    println!("\nNaive 95% CI coverage: {}/{}", covered, trials);
    // nominal 95%; allow binomial noise over 100 trials
    assert!(covered >= 88, "CI covered the analytic price in only {}/{} trials", covered, trials);
}

#[test]
fn test_antithetic_pair_correlation_is_negative() {
    let market = MarketParams::default();
    let mut rng = SimRng::from_seed(42);

    let result = mc_antithetic(&market, OptionKind::Call, PATHS, &mut rng);
    let correlation = result.correlation();

    println!("\nAntithetic pair correlation: {}", correlation);
    assert!((-1.0..=0.0).contains(&correlation), "correlation {} outside [-1, 0]", correlation);
}

#[test]
fn test_variance_reduction_against_naive() {
    let market = MarketParams::default();
    let mut rng = SimRng::from_seed(7);

    let naive = mc_naive(&market, OptionKind::Call, PATHS, &mut rng);
    let anti = mc_antithetic(&market, OptionKind::Call, PATHS, &mut rng);
    let control = mc_control_variate(&market, OptionKind::Call, PATHS, &mut rng);

    println!("\nVariance naive: {}", naive.variance);
    println!("Variance antithetic: {}", anti.variance);
    println!("Variance control: {}", control.variance);
    println!("Control correlation: {}", control.correlation());

    assert!(anti.variance < naive.variance);
    assert!(control.variance < naive.variance);
    assert!(control.correlation().abs() > 0.5);

    // equal cost: efficiency reduces to the variance ratio
    let efficiency = relative_efficiency(naive.variance, 1.0, control.variance, 1.0);
    assert!(efficiency > 1.0, "control efficiency {} not above 1", efficiency);
}

#[test]
fn test_control_row_efficiency_beats_naive_in_reports() {
    let trials = 20;

    let wins = (0..trials)
        .filter(|seed| {
            let config = ComparisonConfig {
                paths: PATHS,
                seed: Some(300 + seed),
                ..Default::default()
            };
            let report = compare(&config, &mut config.rng());
            report.row(Method::ControlVariate).efficiency > 1.0
        })
        .count();

    println!("\nControl efficiency above 1.0 in {}/{} reports", wins, trials);
    // wall-clock timings are noisy, so only require a clear majority
    assert!(wins >= 15, "control efficiency above 1.0 in only {}/{} reports", wins, trials);
}

#[test]
fn test_control_variate_shrinks_standard_error() {
    let market = MarketParams::default();
    let mut rng = SimRng::from_seed(2024);

    let naive = mc_naive(&market, OptionKind::Call, PATHS, &mut rng);
    let control = mc_control_variate(&market, OptionKind::Call, PATHS, &mut rng);

    assert!(control.std_error < naive.std_error);
    assert!(control.ci_upper - control.ci_lower < naive.ci_upper - naive.ci_lower);
}

#[test]
fn test_estimators_draw_independent_samples() {
    let market = MarketParams::default();
    let mut rng = SimRng::from_seed(3);

    let first = mc_naive(&market, OptionKind::Call, 10_000, &mut rng);
    let second = mc_naive(&market, OptionKind::Call, 10_000, &mut rng);

    assert_ne!(first.price, second.price);
}
