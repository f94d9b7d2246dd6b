// src/mc/time_grid.rs
use crate::math_utils::linspace;
use ndarray::Array1;

/// Evenly spaced time points from 0 to T inclusive, shared by every trajectory
///
/// The grid has `max(2, ceil(T / dt))` points. Its spacing is `T / (N - 1)`,
/// which is generally not `dt`; the integrator always steps by `dt`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    points: Array1<f64>,
}

impl TimeGrid {
    pub fn new(t: f64, dt: f64) -> Self {
        let n = Self::point_count(t, dt);
        TimeGrid {
            points: linspace(0.0, t, n),
        }
    }

    /// `max(2, ceil(T / dt))`; NaN and negative ratios collapse to 2
    pub fn point_count(t: f64, dt: f64) -> usize {
        ((t / dt).ceil() as usize).max(2)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &Array1<f64> {
        &self.points
    }

    pub fn horizon(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}
