use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_bind")]
    pub bind: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl ServerConfig {
    fn default_bind() -> String {
        "0.0.0.0".to_string()
    }
    fn default_port() -> u16 {
        5000
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: Self::default_bind(),
            port: Self::default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How long the IP splash stays up before live rendering starts.
    #[serde(default = "DisplayConfig::default_splash_secs")]
    pub splash_secs: f32,
    /// Sleep between frames; 50 ms is roughly 20 fps.
    #[serde(default = "DisplayConfig::default_frame_ms")]
    pub frame_ms: u64,
    #[serde(default = "DisplayConfig::default_spi_hz")]
    pub spi_hz: u32,
    #[serde(default = "DisplayConfig::default_dc_pin")]
    pub dc_pin: u8,
    #[serde(default = "DisplayConfig::default_backlight_pin")]
    pub backlight_pin: u8,
}

impl DisplayConfig {
    fn default_splash_secs() -> f32 {
        10.0
    }
    fn default_frame_ms() -> u64 {
        50
    }
    fn default_spi_hz() -> u32 {
        40_000_000
    }
    fn default_dc_pin() -> u8 {
        24
    }
    fn default_backlight_pin() -> u8 {
        18
    }
}

impl DisplayConfig {
    /// Clamp values a hand-edited file can put out of range. The display
    /// loop tolerates them too; this keeps the logged config honest.
    fn sanitize(&mut self) {
        if !self.splash_secs.is_finite() || self.splash_secs < 0.0 {
            warn!(
                splash_secs = self.splash_secs,
                "splash_secs out of range; using 0"
            );
            self.splash_secs = 0.0;
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            splash_secs: Self::default_splash_secs(),
            frame_ms: Self::default_frame_ms(),
            spi_hz: Self::default_spi_hz(),
            dc_pin: Self::default_dc_pin(),
            backlight_pin: Self::default_backlight_pin(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Read the config file if it exists; any read or parse failure logs and
    /// falls back to defaults. Configuration problems are never fatal.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(mut cfg) => {
                    cfg.display.sanitize();
                    cfg
                }
                Err(err) => {
                    warn!(path, %err, "failed to parse config; using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                warn!(path, %err, "failed to read config; using defaults");
                Self::default()
            }
        }
    }
}
