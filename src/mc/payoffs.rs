//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//!
//! Both are European, so only the terminal price matters.

use crate::market::OptionKind;

/// Vanilla European payoff on the terminal price
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// European call option: max(S_T - K, 0)
    EuropeanCall { k: f64 },

    /// European put option: max(K - S_T, 0)
    EuropeanPut { k: f64 },
}

impl Payoff {
    pub fn new(kind: OptionKind, k: f64) -> Self {
        match kind {
            OptionKind::Call => Payoff::EuropeanCall { k },
            OptionKind::Put => Payoff::EuropeanPut { k },
        }
    }

    /// Undiscounted exercise value at maturity
    pub fn calculate(&self, st: f64) -> f64 {
        match self {
            Payoff::EuropeanCall { k } => (st - k).max(0.0),
            Payoff::EuropeanPut { k } => (k - st).max(0.0),
        }
    }
}
