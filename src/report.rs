// src/report.rs
//! Side-by-side comparison of the three Monte Carlo estimators against the
//! closed-form Black-Scholes price.
//!
//! # Relative efficiency
//!
//! ```text
//! eff = (var_naive * t_naive) / (var_method * t_method)
//! ```
//! Values above 1 mean the method buys more precision per unit of compute
//! than plain Monte Carlo. The naive row is 1 by construction and the
//! analytical row is +inf with zero error and zero time.

use crate::analytics::bs_analytic;
use crate::error::{validation::validate_paths, McResult};
use crate::market::{MarketParams, OptionKind};
use crate::math_utils::{round6, Timer};
use crate::mc::estimators::{mc_antithetic, mc_control_variate, mc_naive, EstimatorResult};
use crate::rng::SimRng;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{info, warn};

/// Floor applied to measured elapsed times before they enter a ratio
pub const MIN_ELAPSED_SECS: f64 = 1e-12;

/// Sample count used when none is given
pub const DEFAULT_PATHS: usize = 100_000;

/// Fixed header printed above the table
pub const REPORT_TITLE: &str = "Comparaison des différentes méthodes de Monte Carlo";

const SEPARATOR_WIDTH: usize = 70;

const COLUMNS: [&str; 8] = [
    "Prix estimé",
    "Prix Black-Scholes",
    "Erreur absolue",
    "Erreur Std",
    "Temps (s)",
    "Efficacité relative",
    "Corrélation",
    "b*",
];

/// Pricing method, one per report row, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Naive,
    Antithetic,
    ControlVariate,
    Analytical,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Naive,
        Method::Antithetic,
        Method::ControlVariate,
        Method::Analytical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Method::Naive => "MC Classique",
            Method::Antithetic => "Antithétique",
            Method::ControlVariate => "Contrôle",
            Method::Analytical => "Black-Scholes (exact)",
        }
    }
}

/// One line of the comparison table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    pub method: Method,
    pub estimate: f64,
    pub reference: f64,
    pub abs_error: f64,
    pub std_error: f64,
    pub elapsed_secs: f64,
    pub efficiency: f64,
    pub correlation: f64,
    pub b_star: f64,
}

impl ComparisonRow {
    fn from_estimate(
        method: Method,
        result: &EstimatorResult,
        reference: f64,
        elapsed_secs: f64,
        efficiency: f64,
    ) -> Self {
        ComparisonRow {
            method,
            estimate: result.price,
            reference,
            abs_error: (result.price - reference).abs(),
            std_error: result.std_error,
            elapsed_secs,
            efficiency,
            // b* is the control row's diagnostic; its rho stays in the log
            correlation: match method {
                Method::Antithetic => result.correlation(),
                _ => f64::NAN,
            },
            b_star: result.b_star(),
        }
    }

    /// Ground-truth row: zero error, zero time, infinite efficiency
    fn analytical(reference: f64) -> Self {
        ComparisonRow {
            method: Method::Analytical,
            estimate: reference,
            reference,
            abs_error: 0.0,
            std_error: 0.0,
            elapsed_secs: 0.0,
            efficiency: f64::INFINITY,
            correlation: f64::NAN,
            b_star: f64::NAN,
        }
    }

    /// Numeric cells in column order
    pub fn cells(&self) -> [f64; 8] {
        [
            self.estimate,
            self.reference,
            self.abs_error,
            self.std_error,
            self.elapsed_secs,
            self.efficiency,
            self.correlation,
            self.b_star,
        ]
    }

    /// Copy with every numeric cell rounded to 6 decimals
    pub fn rounded(&self) -> Self {
        ComparisonRow {
            method: self.method,
            estimate: round6(self.estimate),
            reference: round6(self.reference),
            abs_error: round6(self.abs_error),
            std_error: round6(self.std_error),
            elapsed_secs: round6(self.elapsed_secs),
            efficiency: round6(self.efficiency),
            correlation: round6(self.correlation),
            b_star: round6(self.b_star),
        }
    }
}

/// Inputs for one comparison run
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    pub paths: usize,
    pub market: MarketParams,
    pub kind: OptionKind,
    /// Seed for a reproducible run; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl ComparisonConfig {
    pub fn validate(&self) -> McResult<()> {
        validate_paths(self.paths)?;
        self.market.validate()
    }

    pub fn rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        }
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        ComparisonConfig {
            paths: DEFAULT_PATHS,
            market: MarketParams::default(),
            kind: OptionKind::Call,
            seed: None,
        }
    }
}

/// Fixed-schema comparison table
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub paths: usize,
    pub kind: OptionKind,
    pub seed: Option<u64>,
    pub generated_at: DateTime<Utc>,
    pub rows: [ComparisonRow; 4],
}

impl ComparisonReport {
    pub fn row(&self, method: Method) -> &ComparisonRow {
        // rows are stored in Method::ALL order
        let index = match method {
            Method::Naive => 0,
            Method::Antithetic => 1,
            Method::ControlVariate => 2,
            Method::Analytical => 3,
        };
        &self.rows[index]
    }
}

/// `(var₀·t₀) / (var·t)` with `t` floored at [`MIN_ELAPSED_SECS`]
pub fn relative_efficiency(
    baseline_variance: f64,
    baseline_secs: f64,
    variance: f64,
    elapsed_secs: f64,
) -> f64 {
    (baseline_variance * baseline_secs) / (variance * elapsed_secs.max(MIN_ELAPSED_SECS))
}

fn timed<F>(method: Method, run: F) -> (EstimatorResult, f64)
where
    F: FnOnce() -> EstimatorResult,
{
    let timer = Timer::new();
    let result = run();
    let elapsed = timer.elapsed_secs();
    if elapsed < MIN_ELAPSED_SECS {
        warn!(method = method.label(), elapsed, "elapsed time below floor");
    }
    (result, elapsed)
}

/// Run every estimator once and assemble the four-row table
///
/// Estimators run sequentially and each draws its own fresh sample from
/// `rng`, so the three estimates are statistically independent.
pub fn compare(config: &ComparisonConfig, rng: &mut SimRng) -> ComparisonReport {
    let market = &config.market;
    let kind = config.kind;
    let n = config.paths;

    let reference = bs_analytic::bs_price(market, kind);

    let (naive, t_naive) = timed(Method::Naive, || mc_naive(market, kind, n, rng));
    let naive_row = ComparisonRow::from_estimate(Method::Naive, &naive, reference, t_naive, 1.0);

    let (anti, t_anti) = timed(Method::Antithetic, || mc_antithetic(market, kind, n, rng));
    let t_anti = t_anti.max(MIN_ELAPSED_SECS);
    let anti_row = ComparisonRow::from_estimate(
        Method::Antithetic,
        &anti,
        reference,
        t_anti,
        relative_efficiency(naive.variance, t_naive, anti.variance, t_anti),
    );

    let (control, t_control) = timed(Method::ControlVariate, || {
        mc_control_variate(market, kind, n, rng)
    });
    let t_control = t_control.max(MIN_ELAPSED_SECS);
    let control_row = ComparisonRow::from_estimate(
        Method::ControlVariate,
        &control,
        reference,
        t_control,
        relative_efficiency(naive.variance, t_naive, control.variance, t_control),
    );

    let report = ComparisonReport {
        paths: n,
        kind,
        seed: rng.seed(),
        generated_at: Utc::now(),
        rows: [naive_row, anti_row, control_row, ComparisonRow::analytical(reference)],
    };
    info!(
        paths = n,
        kind = kind.label(),
        seed = ?report.seed,
        generated_at = %report.generated_at.to_rfc3339(),
        "comparison report assembled"
    );
    report
}

fn format_cell(value: f64) -> String {
    if value.is_finite() {
        format!("{:.6}", value)
    } else {
        // NaN -> "NaN", inf -> "inf"
        format!("{}", value)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", REPORT_TITLE)?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;

        let label_width = Method::ALL
            .iter()
            .map(|m| m.label().chars().count())
            .max()
            .unwrap_or_default();

        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.rounded().cells().iter().map(|v| format_cell(*v)).collect())
            .collect();

        let widths: Vec<usize> = COLUMNS
            .iter()
            .enumerate()
            .map(|(col, name)| {
                rendered
                    .iter()
                    .map(|cells| cells[col].len())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or_default()
            })
            .collect();

        write!(f, "{:<label_width$}", "")?;
        for (name, width) in COLUMNS.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = *width)?;
        }
        writeln!(f)?;

        for (row, cells) in self.rows.iter().zip(&rendered) {
            write!(f, "{:<label_width$}", row.method.label())?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", cell, width = *width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
