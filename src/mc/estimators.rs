// src/mc/estimators.rs
//! Monte Carlo estimators for European options under Geometric Brownian Motion
//!
//! # Math Framework
//!
//! Terminal prices are sampled exactly:
//! ```text
//! S_T = S_0 * exp((r - σ²/2)T + σ√T * Z),  Z ~ N(0,1)
//! ```
//! and each estimator reduces a sample of discounted payoffs `Y_i` to
//! ```text
//! price = mean(Y),  var = Σ(Y_i - mean)² / (n - 1),  se = √(var / n)
//! CI95  = price ± 1.96 * se
//! ```
//!
//! # Variance Reduction Techniques
//!
//! 1. **Antithetic Variates**: every draw Z is paired with -Z and the two
//!    payoffs are averaged before any statistic is taken. The sample is the
//!    `⌊n/2⌋` pair averages, so `se` divides by the number of pairs.
//!
//! 2. **Control Variates**: the terminal price X = S_T is the control, with
//!    E\[X\] = S_0 e^(rT). Estimator: Y - b*(X - E\[X\]) where
//!    b* = Cov(Y,X)/Var(X) comes from the sample covariance matrix.
//!
//! Every call draws its own fresh normals from the `SimRng` it is given.
//! Degenerate samples (n too small, zero variance) produce NaN or infinite
//! statistics instead of an error.

use crate::market::{MarketParams, OptionKind};
use crate::math_utils::{mean, pearson_correlation, sample_covariance, sample_variance, Z_95};
use crate::mc::payoffs::Payoff;
use crate::models::gbm::Gbm;
use crate::rng::SimRng;
use nalgebra::Matrix2;
use tracing::debug;

/// Method-specific diagnostics attached to an estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostics {
    None,
    /// Pearson correlation between the +Z and -Z payoff sequences
    Antithetic { correlation: f64 },
    /// Optimal control coefficient and correlation between payoff and control
    ControlVariate { b_star: f64, correlation: f64 },
}

/// Price estimate with its sampling uncertainty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorResult {
    pub price: f64,
    pub std_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// Unbiased variance of the per-sample values the price averages
    pub variance: f64,
    /// Number of values the statistics were computed over
    pub samples: usize,
    pub diagnostics: Diagnostics,
}

impl EstimatorResult {
    /// Reduce a sample of discounted (possibly adjusted) payoffs
    pub fn from_samples(values: &[f64], diagnostics: Diagnostics) -> Self {
        let price = mean(values);
        let variance = sample_variance(values);
        let std_error = (variance / values.len() as f64).sqrt();
        let half_width = Z_95 * std_error;
        EstimatorResult {
            price,
            std_error,
            ci_lower: price - half_width,
            ci_upper: price + half_width,
            variance,
            samples: values.len(),
            diagnostics,
        }
    }

    /// Correlation diagnostic, NaN for the naive estimator
    pub fn correlation(&self) -> f64 {
        match self.diagnostics {
            Diagnostics::Antithetic { correlation }
            | Diagnostics::ControlVariate { correlation, .. } => correlation,
            Diagnostics::None => f64::NAN,
        }
    }

    /// Control coefficient b*, NaN unless this is a control-variate estimate
    pub fn b_star(&self) -> f64 {
        match self.diagnostics {
            Diagnostics::ControlVariate { b_star, .. } => b_star,
            _ => f64::NAN,
        }
    }

    pub fn ci_contains(&self, value: f64) -> bool {
        self.ci_lower <= value && value <= self.ci_upper
    }
}

/// Plain Monte Carlo over `paths` independent draws
pub fn mc_naive(
    market: &MarketParams,
    kind: OptionKind,
    paths: usize,
    rng: &mut SimRng,
) -> EstimatorResult {
    let gbm = Gbm::risk_neutral(market);
    let payoff = Payoff::new(kind, market.k);
    let discount = market.discount();

    let discounted: Vec<f64> = rng
        .normals(paths)
        .into_iter()
        .map(|z| discount * payoff.calculate(gbm.terminal_price(z)))
        .collect();

    let result = EstimatorResult::from_samples(&discounted, Diagnostics::None);
    debug!(
        method = "naive",
        samples = result.samples,
        price = result.price,
        std_error = result.std_error,
        "estimator finished"
    );
    result
}

/// Antithetic variates over `⌊paths/2⌋` mirrored pairs
pub fn mc_antithetic(
    market: &MarketParams,
    kind: OptionKind,
    paths: usize,
    rng: &mut SimRng,
) -> EstimatorResult {
    let gbm = Gbm::risk_neutral(market);
    let payoff = Payoff::new(kind, market.k);
    let discount = market.discount();
    let pairs = paths / 2;

    let draws = rng.normals(pairs);
    let payoffs_plus: Vec<f64> = draws
        .iter()
        .map(|&z| payoff.calculate(gbm.terminal_price(z)))
        .collect();
    let payoffs_minus: Vec<f64> = draws
        .iter()
        .map(|&z| payoff.calculate(gbm.terminal_price(-z)))
        .collect();

    // Average each pair before taking statistics; this is where the
    // negative correlation between +Z and -Z reduces the variance.
    let discounted: Vec<f64> = payoffs_plus
        .iter()
        .zip(&payoffs_minus)
        .map(|(plus, minus)| discount * 0.5 * (plus + minus))
        .collect();

    let correlation = pearson_correlation(&payoffs_plus, &payoffs_minus);
    let result = EstimatorResult::from_samples(&discounted, Diagnostics::Antithetic { correlation });
    debug!(
        method = "antithetic",
        samples = result.samples,
        price = result.price,
        std_error = result.std_error,
        correlation,
        "estimator finished"
    );
    result
}

/// Control variate on the terminal price, E[S_T] = S_0 e^(rT)
pub fn mc_control_variate(
    market: &MarketParams,
    kind: OptionKind,
    paths: usize,
    rng: &mut SimRng,
) -> EstimatorResult {
    let gbm = Gbm::risk_neutral(market);
    let payoff = Payoff::new(kind, market.k);
    let discount = market.discount();
    let control_mean = market.forward();

    let terminal: Vec<f64> = rng
        .normals(paths)
        .into_iter()
        .map(|z| gbm.terminal_price(z))
        .collect();
    let discounted: Vec<f64> = terminal
        .iter()
        .map(|&st| discount * payoff.calculate(st))
        .collect();

    let cov = covariance_matrix(&discounted, &terminal);
    let b_star = cov[(0, 1)] / cov[(1, 1)];
    let correlation = cov[(0, 1)] / (cov[(0, 0)] * cov[(1, 1)]).sqrt();

    let adjusted: Vec<f64> = discounted
        .iter()
        .zip(&terminal)
        .map(|(y, x)| y - b_star * (x - control_mean))
        .collect();

    let result = EstimatorResult::from_samples(
        &adjusted,
        Diagnostics::ControlVariate { b_star, correlation },
    );
    debug!(
        method = "control_variate",
        samples = result.samples,
        price = result.price,
        std_error = result.std_error,
        b_star,
        correlation,
        "estimator finished"
    );
    result
}

/// Unbiased 2x2 sample covariance matrix of `(y, x)`
fn covariance_matrix(y: &[f64], x: &[f64]) -> Matrix2<f64> {
    let cov_yx = sample_covariance(y, x);
    Matrix2::new(sample_variance(y), cov_yx, cov_yx, sample_variance(x))
}
