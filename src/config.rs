//! Simulation and driver settings, loadable from JSON.

use crate::core::material::{Material, MATERIALS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound on `ball_count`; pair checks are O(N^2) per tick.
pub const MAX_BALL_COUNT: usize = 10_000;

/// Settings for placement and the tick driver. Missing JSON fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ball_count: usize,
    pub width: f64,
    pub height: f64,
    /// Smallest radius drawn.
    pub radius_min: f64,
    /// Radius is `radius_min + floor(U * radius_span)`.
    pub radius_span: f64,
    /// Velocity components are `floor(U * max_speed)`.
    pub max_speed: f64,
    pub materials: Vec<Material>,
    pub seed: Option<u64>,
    pub tick_rate_hz: f64,
    /// Stop after this many ticks; run forever when unset.
    pub max_ticks: Option<u64>,
    /// Also write a trace-level log here.
    pub log_file: Option<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ball_count: 15,
            width: 960.0,
            height: 540.0,
            radius_min: 5.0,
            radius_span: 50.0,
            max_speed: 4.0,
            materials: MATERIALS.to_vec(),
            seed: None,
            tick_rate_hz: 60.0,
            max_ticks: None,
            log_file: None,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ball_count > MAX_BALL_COUNT {
            return Err(Error::Config(format!(
                "ball_count must be <= {MAX_BALL_COUNT}"
            )));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::Config("width must be finite and > 0".into()));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::Config("height must be finite and > 0".into()));
        }
        if !(self.radius_min.is_finite() && self.radius_min > 0.0) {
            return Err(Error::Config("radius_min must be finite and > 0".into()));
        }
        if !(self.radius_span.is_finite() && self.radius_span >= 0.0) {
            return Err(Error::Config("radius_span must be finite and >= 0".into()));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(Error::Config("max_speed must be finite and >= 0".into()));
        }
        if self.materials.is_empty() {
            return Err(Error::Config("materials must not be empty".into()));
        }
        if !(self.tick_rate_hz.is_finite() && self.tick_rate_hz > 0.0) {
            return Err(Error::Config("tick_rate_hz must be finite and > 0".into()));
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: SimConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
