//! Filled line charts: the waveguide radial |E| profile and the 1-D
//! diffusion profile. Both draw the curve over its own normalized envelope
//! with the area underneath blended at low alpha.

use embedded_graphics::prelude::*;

use crate::model::waveguide::WaveguideDerived;
use crate::render::axis::{draw_axes, format_tick, x_ticks, y_tick_marks, y_ticks, PlotRect};
use crate::render::canvas::{Canvas, HEIGHT, WIDTH};
use crate::render::text::{Anchor, FontBook};
use crate::render::{normalize_abs, AXIS, BG, CYAN, RED, WHITE};

/// Curve points in plot coordinates for a normalized series.
fn curve_points(rect: &PlotRect, norm: &[f64]) -> Vec<(f32, f32)> {
    let n = norm.len().max(2);
    norm.iter()
        .enumerate()
        .map(|(i, v)| {
            (
                rect.left as f32 + i as f32 * rect.width as f32 / (n - 1) as f32,
                rect.bottom() as f32 - (*v as f32) * rect.height as f32,
            )
        })
        .collect()
}

/// Fill under the curve down to the baseline, then stroke the curve.
fn fill_and_stroke(canvas: &mut Canvas, rect: &PlotRect, points: &[(f32, f32)]) {
    if points.len() < 2 {
        return;
    }
    let mut area = Vec::with_capacity(points.len() + 2);
    area.push((rect.left as f32, rect.bottom() as f32));
    area.extend_from_slice(points);
    area.push((rect.right() as f32, rect.bottom() as f32));
    canvas.fill_polygon(&area, CYAN, 50);
    let outline: Vec<Point> = points
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    canvas.polyline(&outline, CYAN, 2);
}

/// Radial |E(rho)| profile from the guide axis out to the wall.
pub fn render_radial(
    derived: &WaveguideDerived,
    _rho: &[f64],
    e_rho: &[f64],
    fonts: &FontBook,
) -> Canvas {
    let mut canvas = Canvas::filled(BG);
    fonts.draw(&mut canvas, "Radial Profile", 120, 5, 16.0, true, WHITE, Anchor::TopCenter);

    let rect = PlotRect {
        left: 35,
        top: 35,
        width: WIDTH as i32 - 35 - 15,
        height: HEIGHT as i32 - 35 - 30,
    };

    let norm = normalize_abs(e_rho);
    fill_and_stroke(&mut canvas, &rect, &curve_points(&rect, &norm));

    draw_axes(&mut canvas, &rect);
    let radius_mm = derived.radius * 1000.0;
    x_ticks(&mut canvas, fonts, &rect, radius_mm, 4, 9.0);
    y_tick_marks(&mut canvas, &rect, 4);

    fonts.draw(&mut canvas, "\u{3c1} (mm)", 120, HEIGHT as i32 - 5, 12.0, false, AXIS, Anchor::BottomCenter);
    fonts.draw(&mut canvas, "|E|", 10, 120, 12.0, false, AXIS, Anchor::Center);

    // Guide wall marker.
    let wall_x = rect.right();
    canvas.stroke_line(
        Point::new(wall_x, rect.top),
        Point::new(wall_x, rect.bottom()),
        RED,
        2,
    );
    fonts.draw(&mut canvas, "a", wall_x - 3, rect.top - 5, 12.0, false, RED, Anchor::BottomRight);

    canvas
}

/// Animated 1-D diffusion profile.
pub fn render_diffusion(x: &[f64], u: &[f64], t: f64, fonts: &FontBook) -> Canvas {
    let mut canvas = Canvas::filled(BG);

    let rect = PlotRect {
        left: 38,
        top: 28,
        width: WIDTH as i32 - 38 - 15,
        height: HEIGHT as i32 - 28 - 32,
    };

    let norm = normalize_abs(u);
    fill_and_stroke(&mut canvas, &rect, &curve_points(&rect, &norm));

    draw_axes(&mut canvas, &rect);
    let length = x.last().copied().unwrap_or(1.0);
    let u_max = u.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    x_ticks(&mut canvas, fonts, &rect, length, 5, 12.0);
    y_ticks(&mut canvas, fonts, &rect, u_max, 4, 12.0);

    fonts.draw(&mut canvas, "x", 120, HEIGHT as i32 - 5, 12.0, false, AXIS, Anchor::BottomCenter);
    fonts.draw(&mut canvas, "U", 8, 120, 12.0, false, AXIS, Anchor::Center);
    fonts.draw(&mut canvas, "1D Diffusion", 120, 8, 14.0, true, WHITE, Anchor::TopCenter);
    fonts.draw(
        &mut canvas,
        &format!("t = {} s", format_tick(t)),
        WIDTH as i32 - 8,
        24,
        9.0,
        false,
        AXIS,
        Anchor::MidRight,
    );

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::diffusion;

    #[test]
    fn diffusion_peak_touches_the_top_of_the_plot() {
        let (x, u) = diffusion::profile_1d(1.0, 1.0, 0.1, 0.0);
        let canvas = render_diffusion(&x, &u, 0.0, &FontBook::fallback());
        // Normalized peak maps to the top edge of the plot region; the
        // curve is stroked in cyan.
        let found = (120..=145)
            .flat_map(|x| (26..=32).map(move |y| (x, y)))
            .any(|(x, y)| canvas.get(x, y) == Some(CYAN));
        assert!(found, "peak must map to the outer bound of the plot area");
    }

    #[test]
    fn all_zero_profile_renders_flat() {
        let (x, u) = diffusion::profile_1d(1.0, 0.0, 0.1, 0.0);
        let canvas = render_diffusion(&x, &u, 0.0, &FontBook::fallback());
        // Flat curve sits on the baseline; nothing above mid-plot is cyan.
        let above = (0..240)
            .flat_map(|x| (0..100).map(move |y| (x, y)))
            .any(|(x, y)| canvas.get(x, y) == Some(CYAN));
        assert!(!above, "zero field must not produce a trace above baseline");
    }

    #[test]
    fn radial_profile_marks_the_wall() {
        let derived = WaveguideDerived::from_params(20.0, 10.0, 1.0, 1.0);
        let (rho, e_rho) = derived.radial_profile();
        let canvas = render_radial(&derived, &rho, &e_rho, &FontBook::fallback());
        let wall_x = 35 + (WIDTH as i32 - 35 - 15);
        let red_found = (35..=205).any(|y| canvas.get(wall_x, y) == Some(RED));
        assert!(red_found, "wall marker must be drawn in red");
    }
}
