pub mod comparison;
pub mod kde;
pub mod ou_analytic;
