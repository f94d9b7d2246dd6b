// tests/integration_test.rs
use rc_ou_sim::analytics::comparison::SampleRegion;
use rc_ou_sim::analytics::ou_analytic::AnalyticMarginal;
use rc_ou_sim::config::{ParseMode, SimulationParameters};
use rc_ou_sim::mc::mc_engine::{simulate_and_compare, simulate_and_compare_checked};
use rc_ou_sim::models::ou_process::OuProcess;
use rc_ou_sim::RcError;
use std::collections::HashMap;

fn seeded(seed: u64) -> SimulationParameters {
    SimulationParameters {
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_default_run_matches_analytic_marginal() {
    let out = simulate_and_compare(&seeded(42));
    let cmp = &out.comparison;

    println!("\nOverlap: {}", cmp.overlap_percent());
    println!("L2 error: {}", cmp.l2_error);
    println!("Bandwidth: {}", cmp.bandwidth);

    assert_eq!(out.time_grid.len(), 1000);
    assert_eq!(out.ensemble.n_traj(), 20);
    assert_eq!(cmp.x_vals.len(), 300);
    assert!((cmp.analytic.mean - 9.9326).abs() < 1e-4);
    assert!((cmp.analytic.variance - 0.9999546).abs() < 1e-7);
    // pooled sample includes the charging transient, so overlap is partial
    assert!(cmp.overlap > 0.0 && cmp.overlap <= 1.0);
    assert!(cmp.l2_error.is_finite());
    assert!(cmp.pdf_sim.iter().all(|p| p.is_finite() && *p >= 0.0));
    assert!(cmp.pdf_an.iter().all(|p| p.is_finite() && *p >= 0.0));
}

#[test]
fn test_terminal_region_beats_pooled_when_transient_dominates() {
    let pooled = SimulationParameters {
        n_traj: 400,
        t: 4.0,
        seed: Some(3),
        ..Default::default()
    };
    let terminal = SimulationParameters {
        sample_region: SampleRegion::Terminal,
        ..pooled.clone()
    };

    let pooled_out = simulate_and_compare(&pooled);
    let terminal_out = simulate_and_compare(&terminal);

    println!(
        "\nPooled overlap: {}, terminal overlap: {}",
        pooled_out.comparison.overlap_percent(),
        terminal_out.comparison.overlap_percent()
    );

    assert_eq!(pooled_out.ensemble, terminal_out.ensemble);
    assert!(terminal_out.comparison.overlap > pooled_out.comparison.overlap);
    assert!(
        terminal_out.comparison.overlap > 0.8,
        "terminal overlap too low: {}",
        terminal_out.comparison.overlap
    );
}

#[test]
fn test_initial_condition_in_every_row() {
    let params = SimulationParameters {
        v0: -3.5,
        n_traj: 12,
        t: 1.0,
        seed: Some(8),
        ..Default::default()
    };
    let out = simulate_and_compare(&params);
    for i in 0..out.ensemble.n_traj() {
        assert_eq!(out.ensemble.trajectory(i)[0], -3.5);
    }
    assert_eq!(out.mean_trajectory[0], -3.5);
}

#[test]
fn test_reference_analytic_statistics() {
    let params = SimulationParameters::default();
    assert!((params.theta() - 0.5).abs() < 1e-15);

    let marginal =
        AnalyticMarginal::at_horizon(&params.circuit().ou_process(), params.v0, params.t);
    assert!((marginal.mean - (10.0 + (0.0 - 10.0) * (-5.0_f64).exp())).abs() < 1e-12);
    assert!((marginal.variance - (1.0 - (-10.0_f64).exp())).abs() < 1e-12);
}

#[test]
fn test_degenerate_single_short_trajectory() {
    let params = SimulationParameters {
        n_traj: 1,
        t: 0.01,
        dt: 0.01,
        seed: Some(1),
        ..Default::default()
    };
    let out = simulate_and_compare(&params);
    let cmp = &out.comparison;

    assert_eq!(out.time_grid.len(), 2);
    assert_eq!(out.ensemble.n_points(), 2);
    assert!(cmp.pdf_sim.iter().all(|p| !p.is_nan()));
    assert!(cmp.pdf_an.iter().all(|p| !p.is_nan()));
    assert!(!cmp.overlap.is_nan());
    assert!(!cmp.l2_error.is_nan());
    assert!((0.0..=1.0).contains(&cmp.overlap));
}

#[test]
fn test_noise_free_limit_uses_point_synthesis() {
    // sigma so small every path equals V0 to double precision at T = dt
    let params = SimulationParameters {
        v0: 10.0,
        sigma: 1e-300,
        n_traj: 3,
        t: 0.01,
        dt: 0.01,
        seed: Some(2),
        ..Default::default()
    };
    let out = simulate_and_compare(&params);
    assert!(out.ensemble.values().iter().all(|&v| v == 10.0));
    assert!(out.comparison.pdf_sim.iter().all(|p| p.is_finite()));
    assert!(out.comparison.bandwidth > 0.0);
}

#[test]
fn test_zero_rc_falls_back_to_unit_theta() {
    let params = SimulationParameters {
        r: 1e-200,
        c: 1e-200,
        t: 1.0,
        n_traj: 4,
        seed: Some(5),
        ..Default::default()
    };
    assert_eq!(params.r * params.c, 0.0);
    assert_eq!(params.theta(), 1.0);

    let out = simulate_and_compare(&params);
    let expected = OuProcess::new(1.0, 10.0, 1.0).mean_at(0.0, 1.0);
    assert!((out.comparison.analytic.mean - expected).abs() < 1e-12);
    assert!(!out.comparison.overlap.is_nan());
}

#[test]
fn test_checked_entry_point_validates() {
    let err = simulate_and_compare_checked(&SimulationParameters {
        n_traj: 0,
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, RcError::InvalidConfiguration { .. }));
}

#[test]
fn test_form_fields_to_comparison() {
    let fields: HashMap<String, String> = [
        ("r", "1000"),
        ("c_uf", "500"),
        ("v0", "2"),
        ("vf", "5"),
        ("sigma", "0.5"),
        ("dt", "0.005"),
        ("t", "3"),
        ("n_traj", "50"),
        ("seed", "77"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let params = SimulationParameters::from_fields(&fields, ParseMode::Strict)
        .expect("valid form fields");
    assert!((params.theta() - 2.0).abs() < 1e-12);

    let out = simulate_and_compare_checked(&params).expect("valid parameters");
    assert_eq!(out.time_grid.len(), 600);
    assert_eq!(out.comparison.n_traj, 50);
    assert!((0.0..=1.0).contains(&out.comparison.overlap));
}
