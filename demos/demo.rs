// demos/demo.rs
//
// Usage: cargo run --example demo -- [key=value ...]
// Keys: r, c_uf, v0, vf, sigma, dt, t, n_traj, seed, sample_region
use rc_ou_sim::config::{ParseMode, SimulationParameters};
use rc_ou_sim::math_utils::Timer;
use rc_ou_sim::session::SimulationSession;
use rc_ou_sim::workload;
use std::collections::HashMap;

fn main() {
    env_logger::init();

    let fields: HashMap<String, String> = std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect();

    let params = match SimulationParameters::from_fields(&fields, ParseMode::Strict) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Noisy RC circuit (Ornstein-Uhlenbeck)");
    println!("=====================================\n");
    println!("R = {} Ω, C = {} F, θ = 1/RC = {:.6}", params.r, params.c, params.theta());
    println!("V0 = {} V, Vf = {} V, σ = {}", params.v0, params.vf, params.sigma);
    println!("dt = {} s, T = {} s, trajectories = {}", params.dt, params.t, params.n_traj);
    println!("Workload: {}", workload::estimate(&params).message());
    match params.to_json() {
        Ok(doc) => println!("Parameters: {}\n", doc),
        Err(e) => eprintln!("Could not encode parameters: {}", e),
    }

    let session = SimulationSession::new();
    let mut timer = Timer::new();
    timer.start();
    let run = match session.try_run(&params) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = timer.elapsed_ms();

    let out = run.value;
    let cmp = &out.comparison;
    let last = out.mean_trajectory.len() - 1;

    println!("{}", out.mean_label());
    println!("  grid points:       {}", out.time_grid.len());
    println!("  mean at T:         {:.6} V", out.mean_trajectory[last]);
    println!("  analytic mean:     {:.6} V", cmp.analytic.mean);
    println!("  analytic variance: {:.6}", cmp.analytic.variance);
    println!("  KDE bandwidth:     {:.6}", cmp.bandwidth);
    println!("  sample region:     {:?}", cmp.sample_region);
    println!("  L2 error:          {:.6}", cmp.l2_error);
    println!("  Overlap:           {}", cmp.overlap_percent());
    println!("\nCompleted in {:.2} ms", elapsed);
}
