//! # rc-ou-sim: Noisy RC Circuit as an Ornstein-Uhlenbeck Process
//!
//! Simulates the capacitor voltage of an RC circuit driven by white noise,
//! ```text
//! dV = θ (Vf - V) dt + σ dW,   θ = 1 / (R·C)
//! ```
//! and compares the simulated distribution with the closed-form OU marginal.
//!
//! ## Pipeline
//!
//! - **Trajectory simulation**: Euler-Maruyama ensemble on a shared time grid,
//!   sequential in time and batched across trajectories
//! - **Density comparison**: Gaussian KDE of the ensemble against the analytical
//!   Gaussian at the horizon, with L2 distance and overlap metrics
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_ou_sim::config::SimulationParameters;
//! use rc_ou_sim::mc::mc_engine::simulate_and_compare;
//!
//! let params = SimulationParameters {
//!     t: 2.0,
//!     n_traj: 10,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let out = simulate_and_compare(&params);
//! println!("{}: overlap {}", out.mean_label(), out.comparison.overlap_percent());
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod rng;
pub mod session;
pub mod solvers;
pub mod workload;

pub use config::{ParseMode, SimulationParameters};
pub use error::{RcError, RcResult};
pub use mc::mc_engine::{simulate_and_compare, SimulationOutput};
