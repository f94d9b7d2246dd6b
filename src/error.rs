// src/error.rs
use thiserror::Error;

/// Error types for the rc-ou-sim library
#[derive(Debug, Error)]
pub enum RcError {
    /// Parameter value outside its allowed domain
    #[error("Invalid parameter '{parameter}' = {value}: {constraint}")]
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// A field was present but could not be parsed
    #[error("Malformed field '{field}' = {raw:?}: {reason}")]
    MalformedField {
        field: String,
        raw: String,
        reason: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration for '{field}': {reason}")]
    InvalidConfiguration { field: String, reason: String },

    /// JSON parameter document could not be decoded
    #[error("Parameter document error: {0}")]
    Json(#[from] serde_json::Error),

    /// Another run already holds the session
    #[error("A simulation is already running in this session")]
    SessionBusy,
}

/// Result type alias for rc-ou-sim operations
pub type RcResult<T> = Result<T, RcError>;

/// Validation utilities
pub mod validation {
    use super::{RcError, RcResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> RcResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(RcError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> RcResult<()> {
        if !value.is_finite() {
            Err(RcError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate ensemble size
    pub fn validate_trajectories(n_traj: usize) -> RcResult<()> {
        if n_traj == 0 {
            Err(RcError::InvalidConfiguration {
                field: "n_traj".to_string(),
                reason: "must be at least 1".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that `T / dt` yields a representable step count
    pub fn validate_step_count(t: f64, dt: f64) -> RcResult<()> {
        let steps = (t / dt).ceil();
        if !steps.is_finite() || steps > usize::MAX as f64 {
            Err(RcError::InvalidConfiguration {
                field: "dt".to_string(),
                reason: format!("T / dt = {} is not a representable step count", t / dt),
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("sigma", 1.0).is_ok());
        assert!(validate_positive("sigma", 0.0).is_err());
        assert!(validate_positive("sigma", -0.1).is_err());
        assert!(validate_positive("sigma", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("v0", -3.0).is_ok());
        assert!(validate_finite("v0", f64::NAN).is_err());
        assert!(validate_finite("v0", f64::INFINITY).is_err());
        assert!(validate_finite("v0", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_trajectories() {
        assert!(validate_trajectories(1).is_ok());
        assert!(validate_trajectories(0).is_err());
    }

    #[test]
    fn test_validate_step_count() {
        assert!(validate_step_count(10.0, 0.01).is_ok());
        assert!(validate_step_count(1.0, 1e-320).is_err());
    }

    #[test]
    fn test_error_display() {
        let error = RcError::InvalidParameters {
            parameter: "sigma".to_string(),
            value: -0.1,
            constraint: "must be positive".to_string(),
        };

        let display = format!("{}", error);
        assert!(display.contains("sigma"));
        assert!(display.contains("-0.1"));
        assert!(display.contains("positive"));
    }

    #[test]
    fn test_malformed_field_display() {
        let error = RcError::MalformedField {
            field: "dt".to_string(),
            raw: "abc".to_string(),
            reason: "invalid float literal".to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("dt"));
        assert!(display.contains("\"abc\""));
    }
}
