pub mod ensemble;
pub mod mc_engine;
pub mod time_grid;
