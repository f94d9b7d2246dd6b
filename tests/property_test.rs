// tests/property_test.rs
use proptest::prelude::*;
use rc_ou_sim::config::SimulationParameters;
use rc_ou_sim::mc::mc_engine::simulate_and_compare;
use rc_ou_sim::mc::time_grid::TimeGrid;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn grid_size_start_and_end(t in 1e-6f64..50.0, dt in 1e-3f64..5.0) {
        let grid = TimeGrid::new(t, dt);
        let expected = ((t / dt).ceil() as usize).max(2);
        prop_assert_eq!(grid.len(), expected);
        prop_assert_eq!(grid.points()[0], 0.0);
        prop_assert_eq!(grid.horizon(), t);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn initial_column_and_overlap_bound(
        // R·C ≥ 0.02 keeps θ·dt below 1, inside Euler's stability region
        r in 200.0f64..5000.0,
        c in 1e-4f64..1e-2,
        v0 in -20.0f64..20.0,
        vf in 0.1f64..20.0,
        sigma in 0.01f64..5.0,
        steps in 1usize..150,
        n_traj in 1usize..8,
        seed in any::<u64>(),
    ) {
        let dt = 0.01;
        let params = SimulationParameters {
            r,
            c,
            v0,
            vf,
            sigma,
            dt,
            t: steps as f64 * dt,
            n_traj,
            seed: Some(seed),
            ..Default::default()
        };
        let out = simulate_and_compare(&params);

        prop_assert!(out.ensemble.values().column(0).iter().all(|&v| v == v0));
        let cmp = &out.comparison;
        let dx = cmp.dx();
        let sim_mass = cmp.pdf_sim.sum() * dx;
        let an_mass = cmp.pdf_an.sum() * dx;
        // shared mass can exceed neither density's own mass
        prop_assert!(cmp.raw_overlap >= 0.0);
        prop_assert!(cmp.raw_overlap <= sim_mass.min(an_mass) * (1.0 + 1e-12));
        prop_assert_eq!(cmp.overlap, cmp.raw_overlap.clamp(0.0, 1.0));
        prop_assert!(cmp.pdf_sim.iter().all(|p| p.is_finite()));
    }
}
