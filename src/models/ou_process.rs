// src/models/ou_process.rs
//! Ornstein-Uhlenbeck Process
//!
//! ```text
//! dX_t = θ (μ - X_t) dt + σ dW_t
//! ```
//!
//! Conditional on `X_0 = x0` the process is Gaussian at every horizon with
//! ```text
//! E[X_t]   = μ + (x0 - μ) e^(-θt)
//! Var[X_t] = σ² / (2θ) · (1 - e^(-2θt))
//! ```

use super::model::SdeModel;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    /// Mean at time `t`; also the noise-free ODE solution
    pub fn mean_at(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }

    /// Variance at time `t`
    ///
    /// Unguarded as θ → 0, where the expression degenerates to 0/0.
    pub fn variance_at(&self, t: f64) -> f64 {
        (self.sigma * self.sigma) / (2.0 * self.theta) * (1.0 - (-2.0 * self.theta * t).exp())
    }

    /// Variance as t → ∞
    pub fn stationary_variance(&self) -> f64 {
        self.sigma * self.sigma / (2.0 * self.theta)
    }
}

impl SdeModel for OuProcess {
    fn drift(&self, x: f64, _t: f64) -> f64 {
        self.theta * (self.mu - x)
    }

    fn diffusion(&self, _x: f64, _t: f64) -> f64 {
        self.sigma
    }
}
