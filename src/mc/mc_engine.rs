// src/mc/mc_engine.rs
use super::ensemble::{simulate_ensemble, TrajectoryEnsemble};
use super::time_grid::TimeGrid;
use crate::analytics::comparison::{compare_densities, DensityComparison};
use crate::config::SimulationParameters;
use crate::error::RcResult;
use crate::rng;
use crate::workload;
use log::{debug, warn};
use ndarray::Array1;
use rand::Rng;

/// Everything one simulation run produces
#[derive(Clone, Debug)]
pub struct SimulationOutput {
    pub time_grid: TimeGrid,
    pub mean_trajectory: Array1<f64>,
    pub ensemble: TrajectoryEnsemble,
    pub comparison: DensityComparison,
}

impl SimulationOutput {
    /// Legend text for the mean trajectory series
    pub fn mean_label(&self) -> String {
        format!("Mean of {} trajectories (OU)", self.ensemble.n_traj())
    }
}

/// Simulate the noisy RC circuit and compare densities
///
/// # Pipeline
///
/// 1. `θ = 1 / (R·C)` (1.0 if the product is zero)
/// 2. Time grid of `max(2, ceil(T / dt))` points over `[0, T]`
/// 3. Euler-Maruyama ensemble of `n_traj` paths from `V0`, stepping by `dt`
///    ```text
///    V[t] = V[t-1] + θ (Vf - V[t-1]) dt + σ √dt Z[t-1]
///    ```
/// 4. Column-wise mean trajectory
/// 5. KDE of the sample selected by `params.sample_region` against the
///    analytical OU marginal at `T`
///
/// Randomness comes from `params.seed` when set, otherwise from fresh
/// system entropy. Parameters are assumed valid; see
/// [`simulate_and_compare_checked`] for the validating entry point.
pub fn simulate_and_compare(params: &SimulationParameters) -> SimulationOutput {
    match params.seed {
        Some(seed) => simulate_and_compare_with_rng(params, &mut rng::seed_rng_from_u64(seed)),
        None => simulate_and_compare_with_rng(params, &mut rng::entropy_rng()),
    }
}

/// [`simulate_and_compare`] with a caller-supplied generator; `params.seed` is ignored
pub fn simulate_and_compare_with_rng<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> SimulationOutput {
    let circuit = params.circuit();
    let process = circuit.ou_process();
    debug!(
        "RC circuit: R = {}, C = {}, theta = {}, V0 = {}, Vf = {}, sigma = {}",
        circuit.r, circuit.c, process.theta, circuit.v0, circuit.vf, circuit.sigma
    );

    let time_grid = TimeGrid::new(params.t, params.dt);
    let ensemble = simulate_ensemble(&process, params.v0, &time_grid, params.dt, params.n_traj, rng);
    let mean_trajectory = ensemble.mean_trajectory();
    let comparison = compare_densities(&ensemble, &process, params.v0, params.t, params.sample_region);

    SimulationOutput {
        time_grid,
        mean_trajectory,
        ensemble,
        comparison,
    }
}

/// Validate, warn about heavy workloads, then run [`simulate_and_compare`]
pub fn simulate_and_compare_checked(params: &SimulationParameters) -> RcResult<SimulationOutput> {
    params.validate()?;

    let estimate = workload::estimate(params);
    if estimate.tier.is_heavy() {
        warn!("{}", estimate.message());
    }

    Ok(simulate_and_compare(params))
}
