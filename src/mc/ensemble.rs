// src/mc/ensemble.rs
//! Trajectory ensemble simulation
//!
//! # Algorithm
//!
//! 1. Allocate an `(n_traj, N)` matrix and set column 0 to `x0`
//! 2. Draw the full `(n_traj, N - 1)` increment matrix up front
//! 3. For `t = 1 .. N`: batched Euler-Maruyama update of column `t` from
//!    column `t - 1` using increment column `t - 1`
//!
//! Increments are independent across trajectories; there is no common noise.

use super::time_grid::TimeGrid;
use crate::models::model::SdeModel;
use crate::rng;
use crate::solvers::euler_maruyama::EulerMaruyama;
use log::debug;
use ndarray::{s, Array1, Array2, ArrayView1, Axis};
use rand::Rng;

/// Sample paths on a shared time grid, one row per trajectory
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectoryEnsemble {
    values: Array2<f64>,
}

impl TrajectoryEnsemble {
    pub fn from_values(values: Array2<f64>) -> Self {
        TrajectoryEnsemble { values }
    }

    pub fn n_traj(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_points(&self) -> usize {
        self.values.ncols()
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn trajectory(&self, i: usize) -> ArrayView1<f64> {
        self.values.row(i)
    }

    /// Values at the final grid point, one per trajectory
    pub fn terminal_values(&self) -> ArrayView1<f64> {
        self.values.column(self.values.ncols() - 1)
    }

    /// Every value of every trajectory, row by row
    pub fn flattened(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }

    /// Column-wise arithmetic mean
    pub fn mean_trajectory(&self) -> Array1<f64> {
        self.values.sum_axis(Axis(0)) / self.values.nrows() as f64
    }
}

/// Integrate `n_traj` independent paths of `model` from `x0` over `grid`
///
/// The integrator steps by `dt`, independent of the grid spacing. Noise is
/// drawn from `rng` in trajectory-major order before any stepping happens.
pub fn simulate_ensemble<M: SdeModel, R: Rng + ?Sized>(
    model: &M,
    x0: f64,
    grid: &TimeGrid,
    dt: f64,
    n_traj: usize,
    rng: &mut R,
) -> TrajectoryEnsemble {
    let n = grid.len();
    debug!(
        "simulating {} trajectories over {} grid points (dt = {})",
        n_traj, n, dt
    );

    let normals = rng::normal_matrix(rng, n_traj, n - 1);
    let mut values = Array2::zeros((n_traj, n));
    values.column_mut(0).fill(x0);

    let times = grid.points();
    for t in 1..n {
        let (prev, next) = values.multi_slice_mut((s![.., t - 1], s![.., t]));
        EulerMaruyama::step_batch(model, prev.view(), next, times[t - 1], dt, normals.column(t - 1));
    }

    TrajectoryEnsemble::from_values(values)
}
