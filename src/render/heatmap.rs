//! 2-D diffusion heat raster: the sampled grid is normalized against its own
//! peak and resampled bilinearly into the plot sub-region, colored by linear
//! interpolation from the dark background to the cyan accent.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::render::axis::{draw_axes, format_tick, x_ticks, y_ticks, PlotRect};
use crate::render::canvas::{Canvas, HEIGHT, WIDTH};
use crate::render::text::{Anchor, FontBook};
use crate::render::{normalize_abs, AXIS, BG, CYAN, WHITE};

fn heat_color(v: f64) -> Rgb888 {
    let t = v.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
    };
    Rgb888::new(mix(BG.r(), CYAN.r()), mix(BG.g(), CYAN.g()), mix(BG.b(), CYAN.b()))
}

/// Bilinear sample of a row-major n x n grid at fractional coordinates.
fn sample(grid: &[f64], n: usize, fx: f64, fy: f64) -> f64 {
    let gx = fx * (n - 1) as f64;
    let gy = fy * (n - 1) as f64;
    let x0 = gx.floor() as usize;
    let y0 = gy.floor() as usize;
    let x1 = (x0 + 1).min(n - 1);
    let y1 = (y0 + 1).min(n - 1);
    let tx = gx - x0 as f64;
    let ty = gy - y0 as f64;
    let top = grid[y0 * n + x0] * (1.0 - tx) + grid[y0 * n + x1] * tx;
    let bottom = grid[y1 * n + x0] * (1.0 - tx) + grid[y1 * n + x1] * tx;
    top * (1.0 - ty) + bottom * ty
}

pub fn render(grid: &[f64], n: usize, length: f64, t: f64, fonts: &FontBook) -> Canvas {
    let mut canvas = Canvas::filled(BG);

    let rect = PlotRect {
        left: 34,
        top: 28,
        width: WIDTH as i32 - 34 - 15,
        height: HEIGHT as i32 - 28 - 32,
    };

    if n >= 2 && grid.len() == n * n {
        let norm = normalize_abs(grid);
        for py in 0..rect.height {
            // Flip vertically so y grows upward like the axes.
            let fy = 1.0 - f64::from(py) / f64::from(rect.height - 1);
            for px in 0..rect.width {
                let fx = f64::from(px) / f64::from(rect.width - 1);
                let v = sample(&norm, n, fx, fy);
                canvas.set(rect.left + px, rect.top + py, heat_color(v));
            }
        }
    }

    draw_axes(&mut canvas, &rect);
    x_ticks(&mut canvas, fonts, &rect, length, 4, 9.0);
    y_ticks(&mut canvas, fonts, &rect, length, 4, 9.0);

    fonts.draw(&mut canvas, "x", 130, HEIGHT as i32 - 5, 12.0, false, AXIS, Anchor::BottomCenter);
    fonts.draw(&mut canvas, "y", 8, 120, 12.0, false, AXIS, Anchor::Center);
    fonts.draw(&mut canvas, "2D Diffusion", 120, 8, 14.0, true, WHITE, Anchor::TopCenter);
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
