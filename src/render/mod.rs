//! Chart renderers: pure functions from a model frame to a 240x240 pixel
//! buffer. Every chart normalizes against the frame's own peak magnitude
//! (with an epsilon floor) so the trace always fills the same visual
//! envelope regardless of absolute field strength.

pub mod axis;
pub mod bessel_chart;
pub mod canvas;
pub mod cutoff;
pub mod heatmap;
pub mod polar;
pub mod profile;
pub mod splash;
pub mod text;

use embedded_graphics::pixelcolor::Rgb888;

use crate::model::FieldFrame;
use crate::params::FieldView;
use canvas::Canvas;
use text::FontBook;

// Palette shared across all charts.
pub const BG: Rgb888 = Rgb888::new(15, 23, 42);
pub const AXIS: Rgb888 = Rgb888::new(148, 163, 184);
pub const CYAN: Rgb888 = Rgb888::new(34, 211, 238);
pub const RED: Rgb888 = Rgb888::new(239, 68, 68);
pub const GREEN: Rgb888 = Rgb888::new(34, 197, 94);
pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);

/// |values| scaled so the frame's own peak maps to 1.0. An all-zero field
/// falls back to a unit denominator instead of dividing by zero.
pub fn normalize_abs(values: &[f64]) -> Vec<f64> {
    let peak = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    let peak = if peak > 1e-10 { peak } else { 1.0 };
    values.iter().map(|v| v.abs() / peak).collect()
}

/// Mix `color` toward the background, for de-emphasized grid lines.
pub fn dim(color: Rgb888, factor: f32) -> Rgb888 {
    use embedded_graphics::prelude::RgbColor;
    let mix = |c: u8, b: u8| -> u8 {
        (f32::from(b) + (f32::from(c) - f32::from(b)) * factor) as u8
    };
    Rgb888::new(mix(color.r(), BG.r()), mix(color.g(), BG.g()), mix(color.b(), BG.b()))
}

/// Dispatch a model frame to its chart.
pub fn render(frame: &FieldFrame, fonts: &FontBook) -> Canvas {
    match frame {
        FieldFrame::Waveguide {
            view,
            derived,
            theta,
            e_r,
            h_r,
            rho,
            e_rho,
        } => match view {
            FieldView::EOnly | FieldView::HOnly => {
                polar::render(*view, derived, theta, e_r, h_r, fonts)
            }
            FieldView::Radial => profile::render_radial(derived, rho, e_rho, fonts),
            FieldView::Cutoff => cutoff::render(derived, fonts),
            // The model short-circuits this view to FieldFrame::Bessel.
            FieldView::Bessel => bessel_chart::render(
                &crate::model::bessel::BesselDiagnostics::compute(12.0, 300),
                fonts,
            ),
        },
        FieldFrame::Bessel(diag) => bessel_chart::render(diag, fonts),
        FieldFrame::Diffusion1d { x, u, t } => profile::render_diffusion(x, u, *t, fonts),
        FieldFrame::Diffusion2d { grid, n, length, t } => {
            heatmap::render(grid, *n, *length, *t, fonts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_peaks_at_one() {
        let out = normalize_abs(&[0.5, -2.0, 1.0]);
        assert_eq!(out[1], 1.0);
        assert_eq!(out[0], 0.25);
    }

    #[test]
    fn all_zero_field_normalizes_without_dividing_by_zero() {
        let out = normalize_abs(&[0.0, 0.0, 0.0]);
        assert!(out.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn near_zero_field_uses_the_floor() {
        let out = normalize_abs(&[1e-12, -1e-13]);
        assert!(out.iter().all(|v| *v < 1e-10));
    }
}
