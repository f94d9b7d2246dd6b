pub mod model;
pub mod ou_process;
pub mod rc_circuit;
