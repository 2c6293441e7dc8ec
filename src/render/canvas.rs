//! Fixed-size RGB framebuffer the renderers draw into. Implements
//! `embedded_graphics::DrawTarget` so primitives and mono-font text work
//! directly, with a few extra helpers (alpha blend, scanline polygon fill)
//! the chart renderers need and embedded-graphics does not provide.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::Pixel;

pub const WIDTH: usize = 240;
pub const HEIGHT: usize = 240;

#[derive(Clone)]
pub struct Canvas {
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn filled(color: Rgb888) -> Self {
        let mut pixels = Vec::with_capacity(WIDTH * HEIGHT * 3);
        for _ in 0..WIDTH * HEIGHT {
            pixels.extend_from_slice(&[color.r(), color.g(), color.b()]);
        }
        Self { pixels }
    }

    /// Raw RGB888 bytes, row-major. This is what the display sink consumes.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb888> {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return None;
        }
        let i = (y as usize * WIDTH + x as usize) * 3;
        Some(Rgb888::new(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
        ))
    }

    /// Set a pixel; out-of-bounds writes are clipped silently.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb888) {
        if !(0..WIDTH as i32).contains(&x) || !(0..HEIGHT as i32).contains(&y) {
            return;
        }
        let i = (y as usize * WIDTH + x as usize) * 3;
        self.pixels[i] = color.r();
        self.pixels[i + 1] = color.g();
        self.pixels[i + 2] = color.b();
    }

    /// Blend `color` over the existing pixel with alpha in 0..=255.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb888, alpha: u8) {
        let Some(dst) = self.get(x, y) else { return };
        let a = u16::from(alpha);
        let mix = |d: u8, s: u8| -> u8 {
            ((u16::from(d) * (255 - a) + u16::from(s) * a) / 255) as u8
        };
        self.set(
            x,
            y,
            Rgb888::new(
                mix(dst.r(), color.r()),
                mix(dst.g(), color.g()),
                mix(dst.b(), color.b()),
            ),
        );
    }

    pub fn stroke_line(&mut self, a: Point, b: Point, color: Rgb888, width: u32) {
        let _ = Line::new(a, b)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(self);
    }

    pub fn polyline(&mut self, points: &[Point], color: Rgb888, width: u32) {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], color, width);
        }
    }

    pub fn stroke_circle(&mut self, center: Point, radius: i32, color: Rgb888, width: u32) {
        let _ = Circle::with_center(center, (radius * 2) as u32)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(self);
    }

    /// Vertical dashed line, used for marker overlays.
    pub fn dashed_vline(&mut self, x: i32, y0: i32, y1: i32, dash: i32, color: Rgb888) {
        let mut y = y0;
        while y < y1 {
            let end = (y + dash).min(y1);
            self.stroke_line(Point::new(x, y), Point::new(x, end), color, 1);
            y += dash * 2;
        }
    }

    /// Even-odd scanline fill of a closed polygon, blended with `alpha` so
    /// grid lines stay visible under the field trace.
    pub fn fill_polygon(&mut self, points: &[(f32, f32)], color: Rgb888, alpha: u8) {
        if points.len() < 3 {
            return;
        }
        let y_min = points
            .iter()
            .map(|p| p.1)
            .fold(f32::INFINITY, f32::min)
            .floor()
            .max(0.0) as i32;
        let y_max = points
            .iter()
            .map(|p| p.1)
            .fold(f32::NEG_INFINITY, f32::max)
            .ceil()
            .min(HEIGHT as f32) as i32;

        let mut crossings: Vec<f32> = Vec::with_capacity(8);
        for y in y_min..y_max {
            let scan = y as f32 + 0.5;
            crossings.clear();
            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= scan && y1 > scan) || (y1 <= scan && y0 > scan) {
                    let t = (scan - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let x0 = span[0].round().max(0.0) as i32;
                let x1 = span[1].round().min(WIDTH as f32) as i32;
                for x in x0..x1 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point.x, point.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb888 = Rgb888::new(15, 23, 42);

    #[test]
    fn out_of_bounds_writes_are_clipped() {
        let mut canvas = Canvas::filled(BG);
        canvas.set(-1, 0, Rgb888::WHITE);
        canvas.set(0, HEIGHT as i32, Rgb888::WHITE);
        canvas.stroke_line(
            Point::new(-50, -50),
            Point::new(500, 500),
            Rgb888::WHITE,
            2,
        );
        assert_eq!(canvas.data().len(), WIDTH * HEIGHT * 3);
    }

    #[test]
    fn polygon_fill_covers_interior_only() {
        let mut canvas = Canvas::filled(BG);
        let square = [(50.0, 50.0), (100.0, 50.0), (100.0, 100.0), (50.0, 100.0)];
        canvas.fill_polygon(&square, Rgb888::new(34, 211, 238), 255);
        assert_eq!(canvas.get(75, 75), Some(Rgb888::new(34, 211, 238)));
        assert_eq!(canvas.get(40, 75), Some(BG));
        assert_eq!(canvas.get(110, 75), Some(BG));
    }

    #[test]
    fn blend_interpolates_toward_source() {
        let mut canvas = Canvas::filled(Rgb888::BLACK);
        canvas.blend(0, 0, Rgb888::new(200, 100, 50), 128);
        let px = canvas.get(0, 0).expect("in bounds");
        assert!(px.r() > 90 && px.r() < 110);
        assert!(px.g() > 40 && px.g() < 60);
    }

    #[test]
    fn degenerate_polygons_are_ignored() {
        let mut canvas = Canvas::filled(BG);
        canvas.fill_polygon(&[(10.0, 10.0), (20.0, 20.0)], Rgb888::WHITE, 255);
        assert_eq!(canvas.get(15, 15), Some(BG));
    }
}
