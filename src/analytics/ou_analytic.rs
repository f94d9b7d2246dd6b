// src/analytics/ou_analytic.rs
//! Closed-form marginal of the OU process
//!
//! Started from `X_0 = x0`, the process at horizon `T` is normal with
//! ```text
//! mean = μ + (x0 - μ) e^(-θT)
//! var  = σ² / (2θ) · (1 - e^(-2θT))
//! ```
//! For the RC circuit μ = Vf and θ = 1 / (R·C).

use crate::math_utils::gaussian_pdf;
use crate::models::ou_process::OuProcess;
use ndarray::Array1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnalyticMarginal {
    pub mean: f64,
    pub variance: f64,
}

impl AnalyticMarginal {
    pub fn at_horizon(process: &OuProcess, x0: f64, t: f64) -> Self {
        AnalyticMarginal {
            mean: process.mean_at(x0, t),
            variance: process.variance_at(t),
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    pub fn density(&self, x: f64) -> f64 {
        gaussian_pdf(x, self.mean, self.std_dev())
    }

    pub fn evaluate(&self, xs: &Array1<f64>) -> Array1<f64> {
        xs.mapv(|x| self.density(x))
    }
}
