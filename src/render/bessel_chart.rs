//! Diagnostic chart of J0/J1 with the first J0 zero marked. Fixed vertical
//! range so the curves keep their familiar shape regardless of sampling.

use embedded_graphics::prelude::*;

use crate::model::bessel::BesselDiagnostics;
use crate::render::canvas::{Canvas, WIDTH};
use crate::render::text::{Anchor, FontBook};
use crate::render::{AXIS, BG, CYAN, GREEN, RED, WHITE};

const MARGIN: i32 = 30;
const Y_TOP: i32 = 35;
const Y_MAX: f64 = 1.2;
const Y_MIN: f64 = -0.6;
const X_MAX: f64 = 12.0;

pub fn render(diag: &BesselDiagnostics, fonts: &FontBook) -> Canvas {
    let mut canvas = Canvas::filled(BG);
    fonts.draw(&mut canvas, "Bessel Functions", 120, 5, 16.0, true, WHITE, Anchor::TopCenter);

    let plot_width = WIDTH as i32 - 2 * MARGIN;
    let plot_height = (240 - 60) / 2;
    let span = Y_MAX - Y_MIN;
    // Pixel row of y = 0.
    let axis_y = Y_TOP + (f64::from(plot_height) * Y_MAX / span) as i32;

    let x_px = |x: f64| MARGIN + (x / X_MAX * f64::from(plot_width)) as i32;
    let y_px = |y: f64| axis_y - (y / span * f64::from(plot_height)) as i32;

    // Axes.
    canvas.stroke_line(
        Point::new(MARGIN, axis_y),
        Point::new(WIDTH as i32 - MARGIN, axis_y),
        AXIS,
        1,
    );
    canvas.stroke_line(
        Point::new(MARGIN, Y_TOP),
        Point::new(MARGIN, Y_TOP + plot_height),
        AXIS,
        1,
    );

    // X ticks at whole-number marks.
    for x_val in [0.0, 3.0, 6.0, 9.0, 12.0] {
        let x = x_px(x_val);
        canvas.stroke_line(Point::new(x, axis_y), Point::new(x, axis_y + 3), AXIS, 1);
        fonts.draw(
            &mut canvas,
            &format!("{x_val:.0}"),
            x,
            axis_y + 5,
            9.0,
            false,
            AXIS,
            Anchor::TopCenter,
        );
    }
    // Y ticks within the visible band.
    for y_val in [-0.5, 0.0, 0.5, 1.0] {
        let y = y_px(y_val);
        if (Y_TOP..=Y_TOP + plot_height).contains(&y) {
            canvas.stroke_line(Point::new(MARGIN - 3, y), Point::new(MARGIN, y), AXIS, 1);
            fonts.draw(
                &mut canvas,
                &format!("{y_val:.1}"),
                MARGIN - 5,
                y,
                9.0,
                false,
                AXIS,
                Anchor::MidRight,
            );
        }
    }

    // J0 and J1 traces.
    for (series, color) in [(&diag.j0, CYAN), (&diag.j1, GREEN)] {
        let points: Vec<Point> = diag
            .x
            .iter()
            .zip(series.iter())
            .map(|(&x, &y)| Point::new(x_px(x), y_px(y)))
            .collect();
        canvas.polyline(&points, color, 2);
    }

    // Dashed marker at the first J0 zero: the TM01 cutoff root.
    if let Some(&p01) = diag.zeros.first() {
        canvas.dashed_vline(x_px(p01), Y_TOP, Y_TOP + plot_height, 5, RED);
        fonts.draw(
            &mut canvas,
            &format!("TM01 cutoff: p01 = {p01:.3}"),
            120,
            Y_TOP + plot_height + 30,
            11.0,
            false,
            AXIS,
            Anchor::TopCenter,
        );
    }

    // Trace legend.
    fonts.draw(&mut canvas, "J0", 40, axis_y - 10, 11.0, false, CYAN, Anchor::Center);
    fonts.draw(&mut canvas, "J1", 40, axis_y + 10, 11.0, false, GREEN, Anchor::Center);

    canvas
}
