// src/workload.rs
//! Up-front cost estimate for a simulation request
//!
//! The integrator performs roughly `n_traj · T / dt` updates. Nothing in the
//! core refuses large requests; callers use the tier to warn before running.

use crate::config::SimulationParameters;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CostTier {
    /// < 1e6 updates
    Light,
    /// ≥ 1e6 updates; noticeable delay
    Heavy,
    /// ≥ 1e9 updates; may take very long
    VeryHeavy,
    /// ≥ 1e18 updates; will not finish in practice
    Extreme,
}

impl CostTier {
    pub fn from_operations(ops: f64) -> Self {
        if ops >= 1e18 {
            CostTier::Extreme
        } else if ops >= 1e9 {
            CostTier::VeryHeavy
        } else if ops >= 1e6 {
            CostTier::Heavy
        } else {
            CostTier::Light
        }
    }

    pub fn is_heavy(&self) -> bool {
        *self >= CostTier::Heavy
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CostTier::Light => "light",
            CostTier::Heavy => "heavy",
            CostTier::VeryHeavy => "very heavy",
            CostTier::Extreme => "extreme",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkloadEstimate {
    pub operations: f64,
    pub tier: CostTier,
}

impl WorkloadEstimate {
    pub fn message(&self) -> String {
        let detail = match self.tier {
            CostTier::Light => "",
            CostTier::Heavy => " This may take a while.",
            CostTier::VeryHeavy => " This may take a very long time or stall the caller.",
            CostTier::Extreme => " This will not finish in any reasonable time.",
        };
        format!("{:.2e} updates will be computed.{}", self.operations, detail)
    }
}

pub fn estimate(params: &SimulationParameters) -> WorkloadEstimate {
    let operations = params.n_traj as f64 * params.t / params.dt;
    WorkloadEstimate {
        operations,
        tier: CostTier::from_operations(operations),
    }
}
