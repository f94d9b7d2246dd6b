// src/math_utils.rs
use ndarray::Array1;
use std::f64::consts::PI;

/// Gaussian density with the given mean and standard deviation
///
/// No guard on `std_dev`: a zero or non-finite spread propagates into the
/// result unchanged.
pub fn gaussian_pdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

/// `n` evenly spaced points over `[start, end]`, both ends included
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    let mut points = Array1::linspace(start, end, n);
    // pin the endpoint; start + (n - 1) * step can drift by an ulp
    if let Some(last) = points.last_mut() {
        if n > 1 {
            *last = end;
        }
    }
    points
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
