//! Closed-form heat-equation solutions with Dirichlet boundaries on [0, L]
//! (and [0, L] x [0, L] for the 2-D product form). No numerical solver: the
//! display animates the analytic fundamental mode over a fixed period.

use std::f64::consts::PI;
use std::time::Duration;

use crate::model::EPS;

/// The animation loops every 10 seconds; cycle_time folds wall-clock elapsed
/// time back into [0, PERIOD_SECS), so t = 10 lands exactly on t = 0.
pub const PERIOD_SECS: f64 = 10.0;

/// Samples across the 1-D profile.
pub const PROFILE_SAMPLES: usize = 240;
/// Grid edge length for the 2-D field.
pub const GRID_SAMPLES: usize = 60;

pub fn cycle_time(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() % PERIOD_SECS
}

/// u(x, t) = (2M/L) sin(pi x / L) exp(-pi^2 D t / L^2).
pub fn amplitude_1d(x: f64, t: f64, length: f64, magnitude: f64, diffusion: f64) -> f64 {
    let l = length.abs().max(EPS);
    (2.0 * magnitude / l) * (PI * x / l).sin() * (-(PI * PI) * diffusion * t / (l * l)).exp()
}

/// Product form: u(x, y, t) = (2M/L) sin(pi x / L) sin(pi y / L) exp(-pi^2 D t / L^2).
pub fn amplitude_2d(x: f64, y: f64, t: f64, length: f64, magnitude: f64, diffusion: f64) -> f64 {
    let l = length.abs().max(EPS);
    (2.0 * magnitude / l)
        * (PI * x / l).sin()
        * (PI * y / l).sin()
        * (-(PI * PI) * diffusion * t / (l * l)).exp()
}

/// Sampled 1-D profile over [0, L].
pub fn profile_1d(length: f64, magnitude: f64, diffusion: f64, t: f64) -> (Vec<f64>, Vec<f64>) {
    let n = PROFILE_SAMPLES;
    let l = length.abs().max(EPS);
    let x: Vec<f64> = (0..n).map(|i| l * i as f64 / (n - 1) as f64).collect();
    let u: Vec<f64> = x
        .iter()
        .map(|&xi| amplitude_1d(xi, t, length, magnitude, diffusion))
        .collect();
    (x, u)
}

/// Row-major n x n grid over [0, L] x [0, L].
pub fn grid_2d(length: f64, magnitude: f64, diffusion: f64, t: f64) -> (Vec<f64>, usize) {
    let n = GRID_SAMPLES;
    let l = length.abs().max(EPS);
    let mut grid = Vec::with_capacity(n * n);
    for j in 0..n {
        let y = l * j as f64 / (n - 1) as f64;
        for i in 0..n {
            let x = l * i as f64 / (n - 1) as f64;
            grid.push(amplitude_2d(x, y, t, length, magnitude, diffusion));
        }
    }
    (grid, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_profile_is_the_sine_mode() {
        let (x, u) = profile_1d(1.0, 1.0, 0.1, 0.0);
        for (xi, ui) in x.iter().zip(&u) {
            let expected = 2.0 * (PI * xi).sin();
            assert!((ui - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn period_boundary_matches_t_zero() {
        assert_eq!(cycle_time(Duration::from_secs(10)), 0.0);
        assert_eq!(cycle_time(Duration::ZERO), 0.0);
        let t = cycle_time(Duration::from_secs(25));
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn amplitude_decays_within_one_period() {
        let mut prev = f64::INFINITY;
        for step in 0..10 {
            let t = f64::from(step);
            let u = amplitude_1d(0.3, t, 1.0, 1.0, 0.1);
            assert!(u < prev, "u({t}) = {u} did not decay");
            assert!(u > 0.0);
            prev = u;
        }
    }

    #[test]
    fn midpoint_value_at_t_five() {
        // sin(pi/2) = 1, so u(0.5, 5) = 2 exp(-pi^2 / 2) for L = M = 1, D = 0.1.
        let u = amplitude_1d(0.5, 5.0, 1.0, 1.0, 0.1);
        let expected = 2.0 * (-(PI * PI) * 0.5).exp();
        assert!((u - expected).abs() < 1e-12);
    }

    #[test]
    fn grid_is_symmetric_and_finite() {
        let (grid, n) = grid_2d(1.0, 1.0, 0.1, 2.5);
        assert_eq!(grid.len(), n * n);
        assert!(grid.iter().all(|v| v.is_finite()));
        // Product form is symmetric under x/y swap.
        for j in 0..n {
            for i in 0..n {
                let a = grid[j * n + i];
                let b = grid[i * n + j];
                assert!((a - b).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn zero_length_stays_finite() {
        let (_, u) = profile_1d(0.0, 1.0, 0.1, 1.0);
        assert!(u.iter().all(|v| v.is_finite()));
        let (grid, _) = grid_2d(0.0, 1.0, 0.1, 1.0);
        assert!(grid.iter().all(|v| v.is_finite()));
    }
}
