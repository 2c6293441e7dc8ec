//! Text drawing with a preferred scalable font and a guaranteed fallback.
//!
//! The book is probed once at startup: DejaVu from the usual system paths via
//! rusttype. If that fails for any reason the built-in embedded-graphics mono
//! fonts take over, so rendering can never fail on a missing font.

use std::fs;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8, FONT_6X12, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use rusttype::{point, Font, Scale};
use tracing::warn;

use crate::render::canvas::Canvas;

const REGULAR_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];
const BOLD_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

/// Placement anchor, matching the handful of modes the charts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopCenter,
    Center,
    MidLeft,
    MidRight,
    BottomCenter,
    BottomRight,
}

pub struct FontBook {
    regular: Option<Font<'static>>,
    bold: Option<Font<'static>>,
}

impl FontBook {
    /// Probe the preferred fonts once. Failures degrade to the built-in
    /// fallback and are logged, never fatal.
    pub fn load() -> Self {
        let regular = load_first(REGULAR_PATHS);
        let bold = load_first(BOLD_PATHS);
        if regular.is_none() {
            warn!("no scalable font found; using built-in mono fallback");
        }
        Self { regular, bold }
    }

    /// A book with no scalable fonts, always available.
    pub fn fallback() -> Self {
        Self {
            regular: None,
            bold: None,
        }
    }

    pub fn has_scalable(&self) -> bool {
        self.regular.is_some()
    }

    pub fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        x: i32,
        y: i32,
        px: f32,
        bold: bool,
        color: Rgb888,
        anchor: Anchor,
    ) {
        let font = if bold {
            self.bold.as_ref().or(self.regular.as_ref())
        } else {
            self.regular.as_ref()
        };
        match font {
            Some(font) => draw_scalable(canvas, font, text, x, y, px, color, anchor),
            None => draw_mono(canvas, text, x, y, px, color, anchor),
        }
    }
}

fn load_first(paths: &[&str]) -> Option<Font<'static>> {
    for path in paths {
        if let Ok(bytes) = fs::read(path) {
            if let Some(font) = Font::try_from_vec(bytes) {
                return Some(font);
            }
            warn!(path, "font file exists but failed to parse");
        }
    }
    None
}

fn draw_scalable(
    canvas: &mut Canvas,
    font: &Font<'_>,
    text: &str,
    x: i32,
    y: i32,
    px: f32,
    color: Rgb888,
    anchor: Anchor,
) {
    let scale = Scale::uniform(px);
    let v = font.v_metrics(scale);
    let width: f32 = font
        .layout(text, scale, point(0.0, 0.0))
        .map(|g| g.unpositioned().h_metrics().advance_width)
        .sum();
    let height = v.ascent - v.descent;

    let left = match anchor {
        Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => x as f32 - width / 2.0,
        Anchor::MidLeft => x as f32,
        Anchor::MidRight | Anchor::BottomRight => x as f32 - width,
    };
    let baseline = match anchor {
        Anchor::TopCenter => y as f32 + v.ascent,
        Anchor::Center | Anchor::MidLeft | Anchor::MidRight => {
            y as f32 - height / 2.0 + v.ascent
        }
        Anchor::BottomCenter | Anchor::BottomRight => y as f32 - height + v.ascent,
    };

    for glyph in font.layout(text, scale, point(left, baseline)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let alpha = (coverage * 255.0) as u8;
                if alpha > 0 {
                    canvas.blend(bb.min.x + gx as i32, bb.min.y + gy as i32, color, alpha);
                }
            });
        }
    }
}

/// Nearest built-in mono size for a requested pixel height.
fn mono_for(px: f32) -> &'static MonoFont<'static> {
    if px >= 24.0 {
        &FONT_10X20
    } else if px >= 14.0 {
        &FONT_9X15
    } else if px >= 11.0 {
        &FONT_6X12
    } else {
        &FONT_5X8
    }
}

fn draw_mono(
    canvas: &mut Canvas,
    text: &str,
    x: i32,
    y: i32,
    px: f32,
    color: Rgb888,
    anchor: Anchor,
) {
    let alignment = match anchor {
        Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => Alignment::Center,
        Anchor::MidLeft => Alignment::Left,
        Anchor::MidRight | Anchor::BottomRight => Alignment::Right,
    };
    let baseline = match anchor {
        Anchor::TopCenter => Baseline::Top,
        Anchor::Center | Anchor::MidLeft | Anchor::MidRight => Baseline::Middle,
        Anchor::BottomCenter | Anchor::BottomRight => Baseline::Bottom,
    };
    let style = MonoTextStyle::new(mono_for(px), color);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(baseline)
        .build();
    let _ = Text::with_text_style(text, Point::new(x, y), style, text_style).draw(canvas);
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb888 = Rgb888::new(15, 23, 42);

    fn lit_pixels(canvas: &Canvas) -> usize {
        (0..240)
            .flat_map(|y| (0..240).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get(x, y) != Some(BG))
            .count()
    }

    #[test]
    fn fallback_book_always_draws() {
        let book = FontBook::fallback();
        assert!(!book.has_scalable());
        let mut canvas = Canvas::filled(BG);
        book.draw(
            &mut canvas,
            "10.0 GHz",
            120,
            120,
            16.0,
            false,
            Rgb888::WHITE,
            Anchor::Center,
        );
        assert!(lit_pixels(&canvas) > 20);
    }

    #[test]
    fn anchored_text_lands_on_the_expected_side() {
        let book = FontBook::fallback();
        let mut left = Canvas::filled(BG);
        let mut right = Canvas::filled(BG);
        book.draw(&mut left, "x", 120, 120, 12.0, false, Rgb888::WHITE, Anchor::MidLeft);
        book.draw(&mut right, "x", 120, 120, 12.0, false, Rgb888::WHITE, Anchor::MidRight);
        let left_lit = (0..240).any(|y| (121..240).any(|x| left.get(x, y) != Some(BG)));
        let right_lit = (0..240).any(|y| (0..120).any(|x| right.get(x, y) != Some(BG)));
        assert!(left_lit, "MidLeft text must extend right of the anchor");
        assert!(right_lit, "MidRight text must extend left of the anchor");
    }
}
