// src/market.rs
//! Market parameters and option kind shared by every pricer.
//!
//! `MarketParams` is an immutable value handed to each estimator call;
//! nothing in the crate reads market data from ambient state.

use crate::error::{validation::*, McResult};

/// Vanilla European option kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OptionKind {
    #[default]
    Call,
    Put,
}

impl OptionKind {
    pub fn label(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

/// Black-Scholes market for a single underlying
///
/// Invariant: `s0`, `k`, `sigma`, `t` are strictly positive and `r` is finite.
/// [`MarketParams::new`] enforces it; struct literals are trusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketParams {
    /// Initial spot price
    pub s0: f64,
    /// Strike
    pub k: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Volatility
    pub sigma: f64,
    /// Maturity in years
    pub t: f64,
}

impl MarketParams {
    pub fn new(s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> McResult<Self> {
        let params = Self { s0, k, r, sigma, t };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> McResult<()> {
        validate_positive("s0", self.s0)?;
        validate_positive("k", self.k)?;
        validate_finite("r", self.r)?;
        validate_positive("sigma", self.sigma)?;
        validate_positive("t", self.t)?;
        Ok(())
    }

    /// Discount factor e^(-rT)
    pub fn discount(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    /// Risk-neutral expectation of the terminal price, S0·e^(rT)
    pub fn forward(&self) -> f64 {
        self.s0 * (self.r * self.t).exp()
    }
}

impl Default for MarketParams {
    fn default() -> Self {
        MarketParams {
            s0: 100.0,
            k: 105.0,
            r: 0.05,
            sigma: 0.2,
            t: 0.25,
        }
    }
}
