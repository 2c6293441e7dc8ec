use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Which chart the waveguide model drives on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldView {
    EOnly,
    HOnly,
    Radial,
    Cutoff,
    Bessel,
}

/// Live-tunable simulation parameters. Internally tagged so the wire format
/// stays a flat key/value document: `{"model":"waveguide","radius":20.0,...}`.
///
/// Units follow the control surface, not SI: radius in mm, frequency in GHz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SimulationParameters {
    Waveguide {
        field_view: FieldView,
        radius: f64,
        frequency: f64,
        epsilon_r: f64,
        mu_r: f64,
    },
    Diffusion1d {
        length: f64,
        amplitude: f64,
        diffusion: f64,
    },
    Diffusion2d {
        length: f64,
        amplitude: f64,
        diffusion: f64,
    },
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::default_waveguide()
    }
}

impl SimulationParameters {
    pub fn default_waveguide() -> Self {
        Self::Waveguide {
            field_view: FieldView::EOnly,
            radius: 20.0,
            frequency: 10.0,
            epsilon_r: 1.0,
            mu_r: 1.0,
        }
    }

    pub fn default_diffusion1d() -> Self {
        Self::Diffusion1d {
            length: 1.0,
            amplitude: 1.0,
            diffusion: 0.1,
        }
    }

    pub fn default_diffusion2d() -> Self {
        Self::Diffusion2d {
            length: 1.0,
            amplitude: 1.0,
            diffusion: 0.1,
        }
    }

    pub fn model_tag(&self) -> &'static str {
        match self {
            Self::Waveguide { .. } => "waveguide",
            Self::Diffusion1d { .. } => "diffusion1d",
            Self::Diffusion2d { .. } => "diffusion2d",
        }
    }

    pub fn default_for(tag: &str) -> Option<Self> {
        match tag {
            "waveguide" => Some(Self::default_waveguide()),
            "diffusion1d" => Some(Self::default_diffusion1d()),
            "diffusion2d" => Some(Self::default_diffusion2d()),
            _ => None,
        }
    }

    /// Apply a single recognized key to the current variant. Returns false
    /// when the key is unknown for this variant or the value does not coerce
    /// to a finite number; the caller drops such keys without failing the
    /// rest of the patch.
    pub fn apply_key(&mut self, key: &str, value: &Value) -> bool {
        match self {
            Self::Waveguide {
                field_view,
                radius,
                frequency,
                epsilon_r,
                mu_r,
            } => match key {
                "field_view" => match serde_json::from_value(value.clone()) {
                    Ok(view) => {
                        *field_view = view;
                        true
                    }
                    Err(_) => false,
                },
                "radius" => assign(radius, value),
                "frequency" => assign(frequency, value),
                "epsilon_r" => assign(epsilon_r, value),
                "mu_r" => assign(mu_r, value),
                _ => false,
            },
            Self::Diffusion1d {
                length,
                amplitude,
                diffusion,
            }
            | Self::Diffusion2d {
                length,
                amplitude,
                diffusion,
            } => match key {
                "length" => assign(length, value),
                "amplitude" => assign(amplitude, value),
                "diffusion" => assign(diffusion, value),
                _ => false,
            },
        }
    }
}

/// Coerce a JSON value to a finite f64. Accepts numbers and numeric strings;
/// anything else (including NaN/Inf) is rejected.
fn as_finite_f64(value: &Value) -> Option<f64> {
    let x = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    x.is_finite().then_some(x)
}

fn assign(slot: &mut f64, value: &Value) -> bool {
    match as_finite_f64(value) {
        Some(x) => {
            *slot = x;
            true
        }
        None => false,
    }
}

/// Sole owner of the mutable simulation parameters. The lock is held only
/// for copy-in/copy-out, never across model evaluation or rendering, so hold
/// time is bounded by the field count.
#[derive(Debug, Default)]
pub struct ParameterStore {
    inner: Mutex<SimulationParameters>,
}

impl ParameterStore {
    pub fn new(initial: SimulationParameters) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }

    /// Deep copy of the current parameters, safe to use lock-free afterward.
    pub fn snapshot(&self) -> SimulationParameters {
        self.lock().clone()
    }

    /// Tolerant merge: recognized keys are applied one by one, bad keys are
    /// skipped silently, and `model` switches the variant to that kind's
    /// defaults. The whole patch is applied under one lock hold so a
    /// concurrent snapshot never observes half of it. Last writer wins.
    pub fn update(&self, patch: &Map<String, Value>) -> SimulationParameters {
        let mut params = self.lock();
        if let Some(tag) = patch.get("model").and_then(Value::as_str) {
            if tag != params.model_tag() {
                if let Some(fresh) = SimulationParameters::default_for(tag) {
                    *params = fresh;
                }
            }
        }
        for (key, value) in patch {
            if key == "model" {
                continue;
            }
            if !params.apply_key(key, value) {
                debug!(key, "dropped unrecognized or non-coercible parameter");
            }
        }
        params.clone()
    }

    fn lock(&self) -> MutexGuard<'_, SimulationParameters> {
        // A poisoned lock only means a writer panicked mid-copy; the record
        // itself is still a valid value, so keep serving it.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
