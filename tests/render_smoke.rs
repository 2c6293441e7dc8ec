//! Every chart renders every reachable frame without panicking and puts
//! something other than the background on screen.

use std::time::Duration;

use fieldscope::model::{self, FieldFrame};
use fieldscope::params::{FieldView, SimulationParameters};
use fieldscope::render::canvas::Canvas;
use fieldscope::render::text::FontBook;
use fieldscope::render::{self, BG};

fn non_background_pixels(canvas: &Canvas) -> usize {
    (0..240)
        .flat_map(|y| (0..240).map(move |x| (x, y)))
        .filter(|&(x, y)| canvas.get(x, y) != Some(BG))
        .count()
}

fn waveguide(view: FieldView) -> SimulationParameters {
    SimulationParameters::Waveguide {
        field_view: view,
        radius: 20.0,
        frequency: 10.0,
        epsilon_r: 1.0,
        mu_r: 1.0,
    }
}

#[test]
fn every_view_produces_a_drawn_frame() {
    let fonts = FontBook::load();
    let snapshots = [
        waveguide(FieldView::EOnly),
        waveguide(FieldView::HOnly),
        waveguide(FieldView::Radial),
        waveguide(FieldView::Cutoff),
        waveguide(FieldView::Bessel),
        SimulationParameters::default_diffusion1d(),
        SimulationParameters::default_diffusion2d(),
    ];
    for params in snapshots {
        let frame = model::compute(&params, Duration::from_secs(2));
        let canvas = render::render(&frame, &fonts);
        let drawn = non_background_pixels(&canvas);
        assert!(drawn > 500, "{} only drew {drawn} pixels", params.model_tag());
    }
}

#[test]
fn rendering_survives_degenerate_parameters() {
    let fonts = FontBook::fallback();
    let snapshots = [
        SimulationParameters::Waveguide {
            field_view: FieldView::EOnly,
            radius: 0.0,
            frequency: 0.0,
            epsilon_r: 0.0,
            mu_r: 0.0,
        },
        SimulationParameters::Diffusion1d {
            length: 0.0,
            amplitude: 0.0,
            diffusion: 0.0,
        },
        SimulationParameters::Diffusion2d {
            length: 0.0,
            amplitude: 0.0,
            diffusion: 0.0,
        },
    ];
    for params in snapshots {
        let frame = model::compute(&params, Duration::ZERO);
        // Must not panic; content is allowed to be sparse.
        let _ = render::render(&frame, &fonts);
    }
}

#[test]
fn below_cutoff_frame_still_renders() {
    let params = SimulationParameters::Waveguide {
        field_view: FieldView::Cutoff,
        radius: 20.0,
        frequency: 1.0,
        epsilon_r: 1.0,
        mu_r: 1.0,
    };
    let frame = model::compute(&params, Duration::ZERO);
    let canvas = render::render(&frame, &FontBook::fallback());
    assert!(non_background_pixels(&canvas) > 200);
}

#[test]
fn splash_renders_with_and_without_an_address() {
    use std::net::{IpAddr, Ipv4Addr};
    let fonts = FontBook::fallback();
    let with_ip = fieldscope::render::splash::render(
        Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7))),
        5000,
        &fonts,
    );
    assert!(non_background_pixels(&with_ip) > 100);
    let without = fieldscope::render::splash::render(None, 5000, &fonts);
    assert!(non_background_pixels(&without) > 50);
}

#[test]
fn diffusion_animation_changes_over_time() {
    let params = SimulationParameters::default_diffusion1d();
    let fonts = FontBook::fallback();
    let early = model::compute(&params, Duration::from_millis(100));
    let late = model::compute(&params, Duration::from_secs(6));
    let (a, b) = match (&early, &late) {
        (FieldFrame::Diffusion1d { u: a, .. }, FieldFrame::Diffusion1d { u: b, .. }) => (a, b),
        other => panic!("unexpected frames: {other:?}"),
    };
    assert!(a.iter().zip(b.iter()).any(|(x, y)| (x - y).abs() > 1e-6));
    // Both stills render.
    let _ = render::render(&early, &fonts);
    let _ = render::render(&late, &fonts);
}
