// src/analytics/comparison.rs
//! Empirical vs. analytical density comparison
//!
//! # Procedure
//!
//! 1. Collect the sample: every value of every trajectory
//!    ([`SampleRegion::Pooled`]) or only the final column
//!    ([`SampleRegion::Terminal`])
//! 2. Fit a Gaussian KDE (Scott's rule)
//! 3. Evaluate it on 300 evenly spaced points over `[min - 0.1, max + 0.1]`
//! 4. Evaluate the closed-form OU marginal at the horizon on the same grid
//! 5. With grid spacing `dx`:
//! ```text
//! L2      = √(Σ (f_sim - f_an)² dx)
//! overlap = Σ min(f_sim, f_an) dx
//! ```
//!
//! Note that the pooled sample mixes every time marginal of the path while
//! the analytical target is the marginal at `T` only.

use super::kde::GaussianKde;
use super::ou_analytic::AnalyticMarginal;
use crate::error::RcError;
use crate::math_utils::linspace;
use crate::mc::ensemble::TrajectoryEnsemble;
use crate::models::ou_process::OuProcess;
use log::debug;
use ndarray::{Array1, Zip};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of points in the evaluation grid
pub const EVAL_POINTS: usize = 300;

/// Padding added on both sides of the sample range
pub const GRID_PADDING: f64 = 0.1;

/// Which ensemble values feed the empirical density
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleRegion {
    /// All time points of all trajectories
    #[default]
    Pooled,
    /// Final time point of each trajectory
    Terminal,
}

impl FromStr for SampleRegion {
    type Err = RcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pooled" => Ok(SampleRegion::Pooled),
            "terminal" => Ok(SampleRegion::Terminal),
            other => Err(RcError::InvalidConfiguration {
                field: "sample_region".to_string(),
                reason: format!("expected 'pooled' or 'terminal', got '{}'", other),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DensityComparison {
    pub x_vals: Array1<f64>,
    pub pdf_sim: Array1<f64>,
    pub pdf_an: Array1<f64>,
    pub n_traj: usize,
    pub l2_error: f64,
    /// `raw_overlap` clamped to `[0, 1]`
    pub overlap: f64,
    /// Unclamped Riemann sum `Σ min(f_sim, f_an) dx`
    pub raw_overlap: f64,
    pub analytic: AnalyticMarginal,
    pub bandwidth: f64,
    pub sample_region: SampleRegion,
}

impl DensityComparison {
    /// Overlap as a percentage string, e.g. `"97.412%"`
    pub fn overlap_percent(&self) -> String {
        format!("{:.3}%", self.overlap * 100.0)
    }

    /// Grid spacing used by both metrics
    pub fn dx(&self) -> f64 {
        self.x_vals[1] - self.x_vals[0]
    }
}

/// Compare the ensemble's empirical density with the OU marginal at `horizon`
pub fn compare_densities(
    ensemble: &TrajectoryEnsemble,
    process: &OuProcess,
    x0: f64,
    horizon: f64,
    region: SampleRegion,
) -> DensityComparison {
    let sample = match region {
        SampleRegion::Pooled => ensemble.flattened(),
        SampleRegion::Terminal => ensemble.terminal_values().to_vec(),
    };

    let kde = GaussianKde::fit(sample);
    let (lo, hi) = kde
        .samples()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    let x_vals = linspace(lo - GRID_PADDING, hi + GRID_PADDING, EVAL_POINTS);
    let pdf_sim = kde.evaluate(&x_vals);

    let analytic = AnalyticMarginal::at_horizon(process, x0, horizon);
    let pdf_an = analytic.evaluate(&x_vals);

    let dx = x_vals[1] - x_vals[0];
    let (sq_diff, shared) = Zip::from(&pdf_sim).and(&pdf_an).fold(
        (0.0, 0.0),
        |(sq_diff, shared), &sim, &an| {
            let diff = sim - an;
            (sq_diff + diff * diff, shared + sim.min(an))
        },
    );
    let l2_error = (sq_diff * dx).sqrt();
    let raw_overlap = shared * dx;
    // Riemann sum of a narrow kernel can overshoot a unit mass
    let overlap = raw_overlap.clamp(0.0, 1.0);

    debug!(
        "density comparison ({:?}): mean_an = {:.6}, var_an = {:.6}, L2 = {:.6e}, overlap = {:.6}",
        region, analytic.mean, analytic.variance, l2_error, raw_overlap
    );

    DensityComparison {
        x_vals,
        pdf_sim,
        pdf_an,
        n_traj: ensemble.n_traj(),
        l2_error,
        overlap,
        raw_overlap,
        analytic,
        bandwidth: kde.bandwidth(),
        sample_region: region,
    }
}
