// src/models/model.rs

/// Scalar SDE `dX = a(X, t) dt + b(X, t) dW`
pub trait SdeModel {
    fn drift(&self, x: f64, t: f64) -> f64;
    fn diffusion(&self, x: f64, t: f64) -> f64;

    /// Euler-Maruyama update with a caller-supplied Brownian increment `dw ~ N(0, dt)`
    fn step_with_dw(&self, x: &mut f64, t: f64, dt: f64, dw: f64) {
        *x += self.drift(*x, t) * dt + self.diffusion(*x, t) * dw;
    }
}
