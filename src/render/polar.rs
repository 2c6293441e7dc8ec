//! Polar chart of the TM01 azimuthal field pattern, one trace per view
//! (|E| in cyan, |H| in red), with grid circles, Cartesian axes and
//! normalized tick labels.

use embedded_graphics::prelude::*;

use crate::model::waveguide::WaveguideDerived;
use crate::params::FieldView;
use crate::render::axis::format_tick;
use crate::render::canvas::Canvas;
use crate::render::text::{Anchor, FontBook};
use crate::render::{dim, normalize_abs, AXIS, BG, CYAN, RED};

const CENTER_X: i32 = 120;
const CENTER_Y: i32 = 120;
const MAX_RADIUS: i32 = 85;

pub fn render(
    view: FieldView,
    derived: &WaveguideDerived,
    theta: &[f64],
    e_r: &[f64],
    h_r: &[f64],
    fonts: &FontBook,
) -> Canvas {
    let mut canvas = Canvas::filled(BG);

    let status = if derived.above_cutoff { "\u{2713}" } else { "\u{2717}" };
    let status_color = if derived.above_cutoff { CYAN } else { RED };
    let (field_name, field_color, field) = match view {
        FieldView::HOnly => ("|H|", RED, h_r),
        _ => ("|E|", CYAN, e_r),
    };
    fonts.draw(
        &mut canvas,
        &format!("{status} {field_name}"),
        CENTER_X,
        5,
        16.0,
        true,
        status_color,
        Anchor::TopCenter,
    );

    // Grid circles at half and full scale, dimmed under the trace.
    let grid_color = dim(AXIS, 0.35);
    for frac in [0.5, 1.0] {
        let r = (f64::from(MAX_RADIUS) * frac) as i32;
        canvas.stroke_circle(Point::new(CENTER_X, CENTER_Y), r, grid_color, 1);
    }

    // Cartesian axes with a small overhang past the outer circle.
    canvas.stroke_line(
        Point::new(CENTER_X - MAX_RADIUS - 10, CENTER_Y),
        Point::new(CENTER_X + MAX_RADIUS + 10, CENTER_Y),
        AXIS,
        2,
    );
    canvas.stroke_line(
        Point::new(CENTER_X, CENTER_Y - MAX_RADIUS - 10),
        Point::new(CENTER_X, CENTER_Y + MAX_RADIUS + 10),
        AXIS,
        2,
    );
    fonts.draw(
        &mut canvas,
        "x",
        CENTER_X + MAX_RADIUS + 15,
        CENTER_Y,
        13.0,
        false,
        AXIS,
        Anchor::MidLeft,
    );
    fonts.draw(
        &mut canvas,
        "y",
        CENTER_X,
        CENTER_Y - MAX_RADIUS - 15,
        13.0,
        false,
        AXIS,
        Anchor::BottomCenter,
    );

    // Normalized-scale ticks on all four half-axes.
    for frac in [0.5, 1.0] {
        let offset = (f64::from(MAX_RADIUS) * frac) as i32;
        let label = format_tick(frac);
        let neg_label = format_tick(-frac);
        // Right / left.
        for (x, text) in [(CENTER_X + offset, &label), (CENTER_X - offset, &neg_label)] {
            canvas.stroke_line(Point::new(x, CENTER_Y - 3), Point::new(x, CENTER_Y + 3), AXIS, 1);
            fonts.draw(&mut canvas, text, x, CENTER_Y + 8, 9.0, false, AXIS, Anchor::TopCenter);
        }
        // Top / bottom.
        for (y, text) in [(CENTER_Y - offset, &label), (CENTER_Y + offset, &neg_label)] {
            canvas.stroke_line(Point::new(CENTER_X - 3, y), Point::new(CENTER_X + 3, y), AXIS, 1);
            fonts.draw(&mut canvas, text, CENTER_X - 8, y, 9.0, false, AXIS, Anchor::MidRight);
        }
    }

    // The trace itself: radius proportional to normalized magnitude.
    let norm = normalize_abs(field);
    let points: Vec<(f32, f32)> = theta
        .iter()
        .zip(&norm)
        .map(|(t, r)| {
            let radius = r * f64::from(MAX_RADIUS);
            (
                (f64::from(CENTER_X) + radius * t.cos()) as f32,
                (f64::from(CENTER_Y) - radius * t.sin()) as f32,
            )
        })
        .collect();
    canvas.fill_polygon(&points, field_color, 50);
    let outline: Vec<Point> = points
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    canvas.polyline(&outline, field_color, 2);

    canvas
}
