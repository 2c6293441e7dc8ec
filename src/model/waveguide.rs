//! Circular waveguide TM01 mode: closed-form derived quantities plus the
//! simplified azimuthal and radial field profiles the display renders.

use std::f64::consts::PI;

use crate::model::{bessel, EPS};

/// Speed of light in vacuum, m/s.
pub const C_LIGHT: f64 = 3.0e8;

/// Angular samples over one full turn.
pub const ANGULAR_SAMPLES: usize = 240;
/// Samples along the radius for the |E(rho)| profile.
pub const RADIAL_SAMPLES: usize = 200;

/// Quantities derived from one parameter snapshot. All fields are finite for
/// any finite input; degeneracies (zero radius, zero frequency) are absorbed
/// by epsilon guards rather than surfaced as errors.
#[derive(Debug, Clone, Copy)]
pub struct WaveguideDerived {
    /// Free-space wavelength, m.
    pub wavelength: f64,
    /// Free-space wavenumber, 1/m.
    pub k: f64,
    /// TM01 cutoff wavenumber p01/r, 1/m.
    pub kc: f64,
    /// Cutoff frequency, Hz.
    pub fc: f64,
    /// Propagation constant, clamped to zero below cutoff (never imaginary).
    pub beta: f64,
    pub above_cutoff: bool,
    /// Guide radius, m.
    pub radius: f64,
}

impl WaveguideDerived {
    /// Inputs in control-surface units: radius in mm, frequency in GHz.
    pub fn from_params(radius_mm: f64, frequency_ghz: f64, epsilon_r: f64, mu_r: f64) -> Self {
        let radius = radius_mm / 1000.0;
        let frequency = frequency_ghz * 1e9;

        let k = 2.0 * PI * frequency / C_LIGHT;
        let wavelength = C_LIGHT / (frequency + EPS);

        // p01 is computed, not hard-coded, so higher-order modes can reuse
        // the same zero finder later.
        let p01 = bessel::j0_zeros(1)[0];
        let kc = p01 / (radius + EPS);
        let fc = kc * C_LIGHT / (2.0 * PI * (epsilon_r * mu_r).max(EPS).sqrt());

        let beta = (k * k - kc * kc).max(0.0).sqrt();
        let above_cutoff = frequency >= fc;

        Self {
            wavelength,
            k,
            kc,
            fc,
            beta,
            above_cutoff,
            radius,
        }
    }

    /// Simplified TM01 azimuthal patterns sampled over a full turn:
    /// E(theta) and H(theta) share the cos(theta) envelope and differ in the
    /// cos/sin of beta*r. The 1e-10 offsets are numerical-stability guards,
    /// not physics.
    pub fn field_distribution(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let n = ANGULAR_SAMPLES;
        let theta: Vec<f64> = (0..n)
            .map(|i| 2.0 * PI * i as f64 / (n - 1) as f64)
            .collect();
        let radial_e = (self.beta * self.radius + EPS).cos() / (self.k + EPS);
        let radial_h = (self.beta * self.radius + EPS).sin() / (self.k + EPS);
        let e_r: Vec<f64> = theta.iter().map(|t| radial_e * t.cos()).collect();
        let h_r: Vec<f64> = theta.iter().map(|t| radial_h * t.cos()).collect();
        (theta, e_r, h_r)
    }

    /// |E| sampled from just off the axis out to the wall.
    pub fn radial_profile(&self) -> (Vec<f64>, Vec<f64>) {
        let n = RADIAL_SAMPLES;
        let r0 = 0.001;
        let rho: Vec<f64> = (0..n)
            .map(|i| r0 + (self.radius - r0) * i as f64 / (n - 1) as f64)
            .collect();
        let e: Vec<f64> = rho
            .iter()
            .map(|r| (self.beta * r + EPS).cos() / (self.k + EPS))
            .collect();
        (rho, e)
    }
}
