//! The display loop: snapshot, compute, render, blit, sleep. Runs on its own
//! thread at a soft 20 fps and owns the only long-lived references to the
//! renderer and sink.

use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::DisplayConfig;
use crate::display::DisplaySink;
use crate::model;
use crate::params::ParameterStore;
use crate::render::{self, text::FontBook};

/// Splash first, then live; the transition is forward-only and derived from
/// elapsed time, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Splash,
    Live,
}

pub fn phase_at(start: Instant, now: Instant, splash: Duration) -> Phase {
    if now.duration_since(start) < splash {
        Phase::Splash
    } else {
        Phase::Live
    }
}

pub fn run(
    store: Arc<ParameterStore>,
    mut sink: Option<Box<dyn DisplaySink>>,
    ip: Option<IpAddr>,
    port: u16,
    cfg: DisplayConfig,
    stop: Arc<AtomicBool>,
) {
    // Fonts are probed once, not per frame.
    let fonts = FontBook::load();
    let start = Instant::now();
    let frame_interval = Duration::from_millis(cfg.frame_ms);
    // Negative or non-finite values fold to zero (skip the splash) rather
    // than killing the thread.
    let splash = Duration::try_from_secs_f32(cfg.splash_secs).unwrap_or(Duration::ZERO);

    while !stop.load(Ordering::SeqCst) {
        let now = Instant::now();
        let frame = match phase_at(start, now, splash) {
            Phase::Splash => render::splash::render(ip, port, &fonts),
            Phase::Live => {
                // Snapshot-then-compute: the lock is released before any
                // model or render work happens.
                let params = store.snapshot();
                let field = model::compute(&params, now.duration_since(start));
                render::render(&field, &fonts)
            }
        };

        if let Some(active) = sink.as_mut() {
            if let Err(err) = active.blit(&frame) {
                warn!(%err, "display blit failed; continuing headless");
                sink = None;
            }
        }

        thread::sleep(frame_interval);
    }
    info!("display worker stopped");
}
