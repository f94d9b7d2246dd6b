// src/analytics/kde.rs
//! Gaussian kernel density estimation
//!
//! # Estimator
//!
//! ```text
//! f̂(x) = 1 / (n h) · Σᵢ φ((x - xᵢ) / h)
//! ```
//! with the standard normal kernel φ.
//!
//! # Bandwidth
//!
//! Scott's rule for one dimension: `h = σ̂ · n^(-1/5)`, where σ̂ is the
//! sample standard deviation (n - 1 denominator).

use crate::math_utils::gaussian_pdf;
use log::{debug, warn};
use ndarray::{Array1, Zip};
use statrs::statistics::Statistics;

/// Offset of the point added to a sample with fewer than two distinct values
pub const DEGENERATE_SAMPLE_OFFSET: f64 = 1e-6;

#[derive(Clone, Debug)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// Fit with Scott's rule bandwidth
    ///
    /// A sample with fewer than two distinct values gets one extra point at
    /// `first + 1e-6` so the bandwidth stays nonzero.
    pub fn fit(samples: Vec<f64>) -> Self {
        let samples = ensure_spread(samples);
        let bandwidth = scott_bandwidth(&samples);
        debug!(
            "KDE fitted on {} samples, bandwidth = {:.6e}",
            samples.len(),
            bandwidth
        );
        GaussianKde { samples, bandwidth }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn density(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let sum: f64 = self.samples.iter().map(|&xi| gaussian_pdf(x, xi, h)).sum();
        sum / self.samples.len() as f64
    }

    /// Density at every point of `xs`, evaluated in parallel
    pub fn evaluate(&self, xs: &Array1<f64>) -> Array1<f64> {
        Zip::from(xs).par_map_collect(|&x| self.density(x))
    }
}

/// Scott's rule `σ̂ · n^(-1/5)`
pub fn scott_bandwidth(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    samples.std_dev() * n.powf(-0.2)
}

fn ensure_spread(mut samples: Vec<f64>) -> Vec<f64> {
    let first = samples.first().copied().unwrap_or(0.0);
    let distinct = samples.iter().any(|&x| x != first);
    if !distinct {
        warn!(
            "density sample has fewer than two distinct values; adding a point at {} + {:e}",
            first,
            DEGENERATE_SAMPLE_OFFSET
        );
        if samples.is_empty() {
            samples.push(first);
        }
        samples.push(first + DEGENERATE_SAMPLE_OFFSET);
    }
    samples
}
