//! Shared axis geometry and tick-label formatting used by every chart.

use embedded_graphics::prelude::*;

use crate::render::canvas::Canvas;
use crate::render::text::{Anchor, FontBook};
use crate::render::AXIS;

/// Magnitude-dependent label precision: integers from 10 up, one decimal in
/// [1, 10), two below 1, and exact zero prints as "0".
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 10.0 {
        format!("{value:.0}")
    } else if value.abs() >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Rectangular plot sub-region in canvas coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PlotRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl PlotRect {
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// X pixel for a fraction of the horizontal range.
    pub fn x_at(&self, frac: f64) -> i32 {
        self.left + (frac * f64::from(self.width)).round() as i32
    }

    /// Y pixel for a fraction of the vertical range, zero at the bottom.
    pub fn y_at(&self, frac: f64) -> i32 {
        self.bottom() - (frac * f64::from(self.height)).round() as i32
    }
}

/// L-shaped axes along the left and bottom edges.
pub fn draw_axes(canvas: &mut Canvas, rect: &PlotRect) {
    canvas.stroke_line(
        Point::new(rect.left, rect.bottom()),
        Point::new(rect.right(), rect.bottom()),
        AXIS,
        1,
    );
    canvas.stroke_line(
        Point::new(rect.left, rect.top),
        Point::new(rect.left, rect.bottom()),
        AXIS,
        1,
    );
}

/// Evenly spaced ticks with labels along the bottom edge, 0..=max_value.
pub fn x_ticks(
    canvas: &mut Canvas,
    fonts: &FontBook,
    rect: &PlotRect,
    max_value: f64,
    steps: usize,
    label_px: f32,
) {
    for i in 0..=steps {
        let frac = i as f64 / steps as f64;
        let x = rect.x_at(frac);
        canvas.stroke_line(
            Point::new(x, rect.bottom()),
            Point::new(x, rect.bottom() + 3),
            AXIS,
            1,
        );
        fonts.draw(
            canvas,
            &format_tick(max_value * frac),
            x,
            rect.bottom() + 5,
            label_px,
            false,
            AXIS,
            Anchor::TopCenter,
        );
    }
}

/// Evenly spaced ticks with labels along the left edge, 0..=max_value.
pub fn y_ticks(
    canvas: &mut Canvas,
    fonts: &FontBook,
    rect: &PlotRect,
    max_value: f64,
    steps: usize,
    label_px: f32,
) {
    for i in 0..=steps {
        let frac = i as f64 / steps as f64;
        let y = rect.y_at(frac);
        canvas.stroke_line(Point::new(rect.left - 3, y), Point::new(rect.left, y), AXIS, 1);
        fonts.draw(
            canvas,
            &format_tick(max_value * frac),
            rect.left - 5,
            y,
            label_px,
            false,
            AXIS,
            Anchor::MidRight,
        );
    }
}

/// Tick marks only (no labels) along the left edge.
pub fn y_tick_marks(canvas: &mut Canvas, rect: &PlotRect, steps: usize) {
    for i in 0..=steps {
        let y = rect.y_at(i as f64 / steps as f64);
        canvas.stroke_line(Point::new(rect.left - 3, y), Point::new(rect.left, y), AXIS, 1);
    }
}
