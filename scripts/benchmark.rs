use rc_ou_sim::analytics::comparison::{compare_densities, SampleRegion};
use rc_ou_sim::config::SimulationParameters;
use rc_ou_sim::math_utils::Timer;
use rc_ou_sim::mc::ensemble::simulate_ensemble;
use rc_ou_sim::mc::time_grid::TimeGrid;
use rc_ou_sim::rng;
use rc_ou_sim::workload;
use std::env;
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rust_version: Self::get_rust_version(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("sysctl")
                .args(["-n", "machdep.cpu.brand_string"])
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown CPU".to_string())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            "Unknown CPU".to_string()
        }
    }

    fn get_rust_version() -> String {
        Command::new("rustc")
            .arg("--version")
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "Unknown Rust version".to_string())
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    n_traj: usize,
    updates: f64,
    simulate_ms: f64,
    compare_ms: f64,
    overlap: f64,
    l2_error: f64,
}

fn run_ensemble_benchmarks() -> Vec<BenchmarkResult> {
    let mut results = Vec::new();

    for &n_traj in &[20, 200, 2_000] {
        for region in [SampleRegion::Pooled, SampleRegion::Terminal] {
            println!("Running {:?} benchmark with {} trajectories...", region, n_traj);

            let params = SimulationParameters {
                n_traj,
                sample_region: region,
                ..Default::default()
            };
            let process = params.circuit().ou_process();
            let grid = TimeGrid::new(params.t, params.dt);
            let mut rng = rng::seed_rng_from_u64(42);

            let mut timer = Timer::new();
            timer.start();
            let ensemble =
                simulate_ensemble(&process, params.v0, &grid, params.dt, n_traj, &mut rng);
            let simulate_ms = timer.elapsed_ms();

            timer.start();
            let comparison = compare_densities(&ensemble, &process, params.v0, params.t, region);
            let compare_ms = timer.elapsed_ms();

            results.push(BenchmarkResult {
                name: format!("OU ensemble ({:?})", region),
                n_traj,
                updates: workload::estimate(&params).operations,
                simulate_ms,
                compare_ms,
                overlap: comparison.overlap,
                l2_error: comparison.l2_error,
            });
        }
    }

    results
}

fn main() {
    env_logger::init();

    println!("rc-ou-sim Benchmark Suite");
    println!("=========================\n");

    let system_info = SystemInfo::gather();
    println!("System Information:");
    println!("  OS: {}", system_info.os);
    println!("  CPU: {}", system_info.cpu_model);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}", system_info.rustc_flags);
    println!("  Rayon Threads: {}", system_info.rayon_threads);
    println!(
        "  Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    let results = run_ensemble_benchmarks();

    println!("\n{:=<96}", "");
    println!("BENCHMARK RESULTS");
    println!("{:=<96}", "");
    println!(
        "{:<28} {:>8} {:>12} {:>14} {:>14} {:>9} {:>9}",
        "Benchmark", "Traj", "Updates", "Simulate (ms)", "Compare (ms)", "Overlap", "L2"
    );
    println!("{:-<96}", "");

    for result in &results {
        println!(
            "{:<28} {:>8} {:>12.2e} {:>14.2} {:>14.2} {:>8.2}% {:>9.4}",
            result.name,
            result.n_traj,
            result.updates,
            result.simulate_ms,
            result.compare_ms,
            result.overlap * 100.0,
            result.l2_error
        );
    }

    println!("{:=<96}", "");
    println!("\nTo reproduce these results:");
    println!("1. Use Rust version: {}", system_info.rust_version);
    println!("2. Set RUSTFLAGS: {}", system_info.rustc_flags);
    println!("3. Run: cargo run --bin benchmark --release");
}
