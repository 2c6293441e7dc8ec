//! Fieldscope: renders a circular-waveguide TM01 mode or a 1-D/2-D diffusion
//! field to a 240x240 SPI display while an HTTP endpoint tunes the
//! parameters live. The display loop pulls an immutable snapshot of the
//! shared parameters each frame, so the writer is never blocked for longer
//! than a field copy.

pub mod cli;
pub mod config;
pub mod display;
pub mod model;
pub mod net;
pub mod params;
pub mod render;
pub mod server;
