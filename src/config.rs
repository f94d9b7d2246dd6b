// src/config.rs
//! Simulation parameters, defaults and parsing
//!
//! Parameters reach the numerical core in three ways:
//! - constructed directly (`SimulationParameters { .. }` with `..Default::default()`)
//! - from a JSON document, where absent fields take their defaults and a
//!   present but malformed field is a hard error
//! - from raw text fields as typed into a form, in either [`ParseMode::Lenient`]
//!   (any parse failure resets every field to its default) or
//!   [`ParseMode::Strict`] (the failing field is reported)

use crate::analytics::comparison::SampleRegion;
use crate::error::{validation::*, RcError, RcResult};
use crate::models::rc_circuit::RcCircuit;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Farads per microfarad
pub const MICROFARAD: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fall back to the full default set on any unparsable field
    #[default]
    Lenient,
    /// Report the first unparsable field, then validate
    Strict,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParameters {
    pub r: f64,         // Resistance (Ω)
    pub c: f64,         // Capacitance (F)
    pub v0: f64,        // Initial voltage (V)
    pub vf: f64,        // Source voltage (V)
    pub sigma: f64,     // Noise intensity
    pub dt: f64,        // Time step (s)
    pub t: f64,         // Horizon (s)
    pub n_traj: usize,  // Ensemble size
    pub seed: Option<u64>,
    pub sample_region: SampleRegion,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            r: 2000.0,
            c: 1e-3,
            v0: 0.0,
            vf: 10.0,
            sigma: 1.0,
            dt: 0.01,
            t: 10.0,
            n_traj: 20,
            seed: None,
            sample_region: SampleRegion::Pooled,
        }
    }
}

impl SimulationParameters {
    pub fn circuit(&self) -> RcCircuit {
        RcCircuit {
            r: self.r,
            c: self.c,
            v0: self.v0,
            vf: self.vf,
            sigma: self.sigma,
        }
    }

    /// Mean-reversion rate `1 / (R·C)`, 1.0 when the product is zero
    pub fn theta(&self) -> f64 {
        self.circuit().theta()
    }

    pub fn validate(&self) -> RcResult<()> {
        validate_positive("r", self.r)?;
        validate_positive("c", self.c)?;
        validate_finite("v0", self.v0)?;
        validate_positive("vf", self.vf)?;
        validate_positive("sigma", self.sigma)?;
        validate_positive("dt", self.dt)?;
        validate_positive("t", self.t)?;
        validate_trajectories(self.n_traj)?;
        validate_step_count(self.t, self.dt)?;
        Ok(())
    }

    /// Decode and validate a JSON parameter document
    pub fn from_json(doc: &str) -> RcResult<Self> {
        let params: Self = serde_json::from_str(doc)?;
        params.validate()?;
        Ok(params)
    }

    /// Resolved parameters as a JSON document accepted by [`Self::from_json`]
    pub fn to_json(&self) -> RcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build parameters from raw text fields
    ///
    /// Recognised keys: `r`, `c_uf` (microfarads), `v0`, `vf`, `sigma`, `dt`,
    /// `t`, `n_traj`, `seed`, `sample_region`. Unknown keys are ignored and
    /// absent keys take their defaults.
    pub fn from_fields(fields: &HashMap<String, String>, mode: ParseMode) -> RcResult<Self> {
        match Self::parse_fields(fields, mode) {
            Ok(params) => {
                if mode == ParseMode::Strict {
                    params.validate()?;
                }
                Ok(params)
            }
            Err(err) if mode == ParseMode::Lenient => {
                warn!("{}; falling back to default parameters", err);
                Ok(Self::default())
            }
            Err(err) => Err(err),
        }
    }

    fn parse_fields(fields: &HashMap<String, String>, mode: ParseMode) -> RcResult<Self> {
        let defaults = Self::default();

        let n_traj: i64 = parse_field(fields, "n_traj", defaults.n_traj as i64)?;
        let n_traj = match mode {
            ParseMode::Lenient => n_traj.max(1) as usize,
            ParseMode::Strict => usize::try_from(n_traj).map_err(|_| RcError::MalformedField {
                field: "n_traj".to_string(),
                raw: n_traj.to_string(),
                reason: "must be a non-negative integer".to_string(),
            })?,
        };

        let seed = match fields.get("seed") {
            Some(raw) => Some(parse_raw::<u64>("seed", raw)?),
            None => defaults.seed,
        };

        let sample_region = match fields.get("sample_region") {
            Some(raw) => parse_raw::<SampleRegion>("sample_region", raw)?,
            None => defaults.sample_region,
        };

        Ok(SimulationParameters {
            r: parse_field(fields, "r", defaults.r)?,
            c: match fields.get("c_uf") {
                Some(raw) => parse_raw::<f64>("c_uf", raw)? * MICROFARAD,
                None => defaults.c,
            },
            v0: parse_field(fields, "v0", defaults.v0)?,
            vf: parse_field(fields, "vf", defaults.vf)?,
            sigma: parse_field(fields, "sigma", defaults.sigma)?,
            dt: parse_field(fields, "dt", defaults.dt)?,
            t: parse_field(fields, "t", defaults.t)?,
            n_traj,
            seed,
            sample_region,
        })
    }
}

fn parse_field<T>(fields: &HashMap<String, String>, key: &str, default: T) -> RcResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match fields.get(key) {
        Some(raw) => parse_raw(key, raw),
        None => Ok(default),
    }
}

fn parse_raw<T>(key: &str, raw: &str) -> RcResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| RcError::MalformedField {
        field: key.to_string(),
        raw: raw.to_string(),
        reason: e.to_string(),
    })
}
