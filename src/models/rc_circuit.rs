// src/models/rc_circuit.rs
//! Noisy RC circuit as an Ornstein-Uhlenbeck process
//!
//! The capacitor voltage charging towards the source voltage `Vf` through
//! resistance `R` obeys
//! ```text
//! dV = (1 / RC) (Vf - V) dt + σ dW
//! ```
//! so the mean-reversion rate is `θ = 1 / (R·C)` and the long-run level is `Vf`.

use super::ou_process::OuProcess;

/// θ used when `R·C` evaluates to exactly zero
pub const DEGENERATE_THETA: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RcCircuit {
    pub r: f64,  // Resistance (Ω)
    pub c: f64,  // Capacitance (F)
    pub v0: f64, // Initial capacitor voltage (V)
    pub vf: f64, // Source voltage (V)
    pub sigma: f64,
}

impl RcCircuit {
    /// Mean-reversion rate `1 / (R·C)`, or [`DEGENERATE_THETA`] when the
    /// product is zero (including underflow of two tiny positive values)
    pub fn theta(&self) -> f64 {
        let rc = self.r * self.c;
        if rc == 0.0 {
            DEGENERATE_THETA
        } else {
            1.0 / rc
        }
    }

    pub fn ou_process(&self) -> OuProcess {
        OuProcess::new(self.theta(), self.vf, self.sigma)
    }
}
