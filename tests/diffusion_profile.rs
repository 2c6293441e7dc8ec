use std::time::Duration;

use fieldscope::model::diffusion::{
    amplitude_1d, cycle_time, grid_2d, profile_1d, PROFILE_SAMPLES,
};

#[test]
fn dirichlet_boundaries_stay_pinned() {
    let (x, u) = profile_1d(1.0, 1.0, 0.1, 3.0);
    assert_eq!(x.len(), PROFILE_SAMPLES);
    assert!(u[0].abs() < 1e-12, "u(0) = {}", u[0]);
    assert!(u[u.len() - 1].abs() < 1e-9, "u(L) = {}", u[u.len() - 1]);
}

#[test]
fn profile_peaks_at_the_midpoint() {
    let (x, u) = profile_1d(2.0, 1.5, 0.1, 1.0);
    let (i_max, _) = u
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });
    assert!((x[i_max] - 1.0).abs() < 0.02, "peak at x = {}", x[i_max]);
}

#[test]
fn animation_is_ten_second_periodic() {
    let a = cycle_time(Duration::from_millis(2_500));
    let b = cycle_time(Duration::from_millis(12_500));
    assert!((a - b).abs() < 1e-9);
    assert_eq!(cycle_time(Duration::from_secs(10)), 0.0);

    let (_, u0) = profile_1d(1.0, 1.0, 0.1, cycle_time(Duration::ZERO));
    let (_, u10) = profile_1d(1.0, 1.0, 0.1, cycle_time(Duration::from_secs(10)));
    for (a, b) in u0.iter().zip(&u10) {
        assert_eq!(a, b, "t = 10 s must restart the cycle exactly");
    }
}

#[test]
fn stronger_diffusion_decays_faster() {
    let slow = amplitude_1d(0.5, 4.0, 1.0, 1.0, 0.05);
    let fast = amplitude_1d(0.5, 4.0, 1.0, 1.0, 0.5);
    assert!(fast < slow);
    assert!(fast > 0.0);
}

#[test]
fn grid_edges_are_zero() {
    let (grid, n) = grid_2d(1.0, 1.0, 0.1, 2.0);
    for i in 0..n {
        assert!(grid[i].abs() < 1e-9, "top edge");
        assert!(grid[(n - 1) * n + i].abs() < 1e-9, "bottom edge");
        assert!(grid[i * n].abs() < 1e-12, "left edge");
        assert!(grid[i * n + n - 1].abs() < 1e-9, "right edge");
    }
    // Interior maximum at the center.
    let center = grid[(n / 2) * n + n / 2];
    assert!(grid.iter().all(|&v| v <= center + 1e-9));
}
