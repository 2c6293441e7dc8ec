//! Display sink abstraction and the frame loop worker. Hardware is probed
//! once at startup; a missing or failing panel demotes the loop to headless
//! operation rather than stopping it.

pub mod worker;

#[cfg(feature = "st7789")]
mod st7789;

use tracing::info;
#[cfg(feature = "st7789")]
use tracing::warn;

use crate::config::DisplayConfig;
use crate::render::canvas::Canvas;

/// A physical consumer of rendered frames. `blit` is synchronous and bounded
/// by the hardware interface speed.
pub trait DisplaySink: Send {
    fn blit(&mut self, frame: &Canvas) -> anyhow::Result<()>;
}

/// Probe for display hardware once. Returns `None` (headless) on any
/// failure; the decision is not revisited per frame.
#[cfg(feature = "st7789")]
pub fn probe(cfg: &DisplayConfig) -> Option<Box<dyn DisplaySink>> {
    match st7789::St7789Sink::open(cfg) {
        Ok(sink) => {
            info!("st7789 display initialized");
            Some(Box::new(sink))
        }
        Err(err) => {
            warn!(%err, "display init failed; running headless");
            None
        }
    }
}

#[cfg(not(feature = "st7789"))]
pub fn probe(_cfg: &DisplayConfig) -> Option<Box<dyn DisplaySink>> {
    info!("built without st7789 support; running headless");
    None
}
