//! Cutoff analysis panel: status banner, derived-quantity readouts and a
//! one-line dispersion bar relating k to the cutoff wavenumber kc.

use embedded_graphics::prelude::*;

use crate::model::waveguide::WaveguideDerived;
use crate::render::canvas::{Canvas, WIDTH};
use crate::render::text::{Anchor, FontBook};
use crate::render::{AXIS, BG, CYAN, RED, WHITE};

pub fn render(derived: &WaveguideDerived, fonts: &FontBook) -> Canvas {
    let mut canvas = Canvas::filled(BG);
    fonts.draw(&mut canvas, "Cutoff Analysis", 120, 5, 16.0, true, WHITE, Anchor::TopCenter);

    let status_color = if derived.above_cutoff { CYAN } else { RED };
    let status_text = if derived.above_cutoff {
        "ABOVE CUTOFF"
    } else {
        "BELOW CUTOFF"
    };
    let mut y = 35;
    fonts.draw(&mut canvas, status_text, 120, y, 16.0, true, status_color, Anchor::TopCenter);

    y += 30;
    let readouts = [
        format!("fc = {:.2} GHz", derived.fc / 1e9),
        format!("k = {:.2e} 1/m", derived.k),
        format!("kc = {:.2e} 1/m", derived.kc),
        format!("\u{3b2} = {:.2e} 1/m", derived.beta),
    ];
    for line in &readouts {
        fonts.draw(&mut canvas, line, 120, y, 12.0, false, AXIS, Anchor::TopCenter);
        y += 18;
    }

    y += 20;
    fonts.draw(&mut canvas, "Dispersion Relation:", 120, y, 12.0, false, WHITE, Anchor::TopCenter);

    // Bar mapping [0, 2 kc] across the plot width; kc sits at the 0.3 mark
    // and k is clamped to the right edge when far above cutoff.
    let margin = 40;
    let plot_width = WIDTH as i32 - 2 * margin;
    let plot_height = 60;
    let y_plot = y + 20;

    canvas.stroke_line(
        Point::new(margin, y_plot + plot_height),
        Point::new(WIDTH as i32 - margin, y_plot + plot_height),
        AXIS,
        1,
    );
    canvas.stroke_line(
        Point::new(margin, y_plot),
        Point::new(margin, y_plot + plot_height),
        AXIS,
        1,
    );

    let kc_x = margin + (f64::from(plot_width) * 0.3) as i32;
    canvas.stroke_line(Point::new(kc_x, y_plot), Point::new(kc_x, y_plot + plot_height), RED, 2);
    fonts.draw(&mut canvas, "kc", kc_x, y_plot + plot_height + 5, 10.0, false, RED, Anchor::TopCenter);

    let k_ratio = (derived.k / (derived.kc * 2.0)).min(1.0);
    let k_x = margin + (f64::from(plot_width) * k_ratio) as i32;
    canvas.stroke_line(
        Point::new(k_x, y_plot),
        Point::new(k_x, y_plot + plot_height),
        status_color,
        2,
    );
    fonts.draw(&mut canvas, "k", k_x, y_plot + plot_height + 5, 10.0, false, status_color, Anchor::TopCenter);

    canvas
}
