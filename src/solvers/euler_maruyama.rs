// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a scalar SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) √Δt Z_n,   Z_n ~ N(0,1)
//! ```
//!
//! Explicit and Itô; no Milstein correction. For the OU process the diffusion
//! is constant so the Milstein term would vanish anyway.
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//!
//! # Batched Stepping
//!
//! [`EulerMaruyama::step_batch`] advances a whole ensemble column at once.
//! Time steps remain strictly sequential since step `n + 1` reads step `n`.

use crate::models::model::SdeModel;
use crate::rng;
use ndarray::{ArrayView1, ArrayViewMut1, Zip};
use rand::Rng;

/// Euler-Maruyama numerical scheme for SDE integration
pub struct EulerMaruyama;

impl EulerMaruyama {
    /// Single step drawing its own normal increment from `rng`
    pub fn step<M: SdeModel, R: Rng + ?Sized>(
        model: &M,
        x: &mut f64,
        t: f64,
        dt: f64,
        rng: &mut R,
    ) {
        let normal_draw = rng::get_normal_draw(rng);
        let drift_term = model.drift(*x, t) * dt;
        let diffusion_term = model.diffusion(*x, t) * dt.sqrt() * normal_draw;
        *x += drift_term + diffusion_term;
    }

    /// Advance every trajectory by one step using pre-drawn increments
    ///
    /// `next[i] = prev[i] + a(prev[i], t) Δt + b(prev[i], t) √Δt z[i]`
    ///
    /// # Parameters
    /// - `prev`: ensemble values at `t`
    /// - `next`: ensemble values at `t + Δt` (overwritten)
    /// - `z`: one standard normal draw per trajectory
    pub fn step_batch<M: SdeModel>(
        model: &M,
        prev: ArrayView1<f64>,
        next: ArrayViewMut1<f64>,
        t: f64,
        dt: f64,
        z: ArrayView1<f64>,
    ) {
        let sqrt_dt = dt.sqrt();
        Zip::from(next)
            .and(prev)
            .and(z)
            .for_each(|next, &prev, &z| {
                *next = prev + model.drift(prev, t) * dt + model.diffusion(prev, t) * sqrt_dt * z;
            });
    }
}
