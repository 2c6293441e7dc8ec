//! Pure field models: parameter snapshot (+ elapsed time) in, numeric frame
//! out. Nothing in here touches shared state or can fail; degeneracies are
//! absorbed by epsilon guards so the renderer always receives finite data.

pub mod bessel;
pub mod diffusion;
pub mod waveguide;

use std::time::Duration;

use crate::params::{FieldView, SimulationParameters};
use bessel::BesselDiagnostics;
use waveguide::WaveguideDerived;

/// Shared numerical-stability offset. Added inside trig/division terms to
/// dodge exact-zero degeneracies; not a physical term.
pub(crate) const EPS: f64 = 1e-10;

/// One frame of model output, produced and consumed within a single display
/// loop iteration.
#[derive(Debug, Clone)]
pub enum FieldFrame {
    Waveguide {
        view: FieldView,
        derived: WaveguideDerived,
        theta: Vec<f64>,
        e_r: Vec<f64>,
        h_r: Vec<f64>,
        rho: Vec<f64>,
        e_rho: Vec<f64>,
    },
    Bessel(BesselDiagnostics),
    Diffusion1d {
        x: Vec<f64>,
        u: Vec<f64>,
        t: f64,
    },
    Diffusion2d {
        grid: Vec<f64>,
        n: usize,
        length: f64,
        t: f64,
    },
}

/// Evaluate the model selected by the snapshot. `elapsed` is wall-clock time
/// since loop start and only drives the diffusion animation.
pub fn compute(params: &SimulationParameters, elapsed: Duration) -> FieldFrame {
    match params {
        SimulationParameters::Waveguide {
            field_view,
            radius,
            frequency,
            epsilon_r,
            mu_r,
        } => {
            if *field_view == FieldView::Bessel {
                return FieldFrame::Bessel(BesselDiagnostics::compute(12.0, 300));
            }
            let derived = WaveguideDerived::from_params(*radius, *frequency, *epsilon_r, *mu_r);
            let (theta, e_r, h_r) = derived.field_distribution();
            let (rho, e_rho) = derived.radial_profile();
            FieldFrame::Waveguide {
                view: *field_view,
                derived,
                theta,
                e_r,
                h_r,
                rho,
                e_rho,
            }
        }
        SimulationParameters::Diffusion1d {
            length,
            amplitude,
            diffusion,
        } => {
            let t = diffusion::cycle_time(elapsed);
            let (x, u) = diffusion::profile_1d(*length, *amplitude, *diffusion, t);
            FieldFrame::Diffusion1d { x, u, t }
        }
        SimulationParameters::Diffusion2d {
            length,
            amplitude,
            diffusion,
        } => {
            let t = diffusion::cycle_time(elapsed);
            let (grid, n) = diffusion::grid_2d(*length, *amplitude, *diffusion, t);
            FieldFrame::Diffusion2d {
                grid,
                n,
                length: *length,
                t,
            }
        }
    }
}
