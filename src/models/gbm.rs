// src/models/gbm.rs
use crate::market::MarketParams;

/// Risk-neutral geometric Brownian motion sampled exactly at maturity
///
/// ```text
/// S_T = S_0 * exp((r - σ²/2)T + σ√T * Z),  Z ~ N(0,1)
/// ```
///
/// One step to maturity, so there is no discretisation error.
#[derive(Debug, Clone, Copy)]
pub struct Gbm {
    s0: f64,
    drift: f64,
    vol_sqrt_t: f64,
}

impl Gbm {
    pub fn new(s0: f64, mu: f64, sigma: f64, t: f64) -> Self {
        Gbm {
            s0,
            drift: (mu - 0.5 * sigma * sigma) * t,
            vol_sqrt_t: sigma * t.sqrt(),
        }
    }

    /// Risk-neutral dynamics (drift = r) for the given market
    pub fn risk_neutral(market: &MarketParams) -> Self {
        Self::new(market.s0, market.r, market.sigma, market.t)
    }

    pub fn terminal_price(&self, normal_draw: f64) -> f64 {
        self.s0 * (self.drift + self.vol_sqrt_t * normal_draw).exp()
    }
}
