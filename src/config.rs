//! Simulation settings
//!
//! Persisted as JSON: in LocalStorage on the web, or read from a file by the
//! native binary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Ranges that new bodies sample their velocity and radius from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRanges {
    /// Each velocity component is drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    /// Radius is drawn from [min_radius, max_radius)
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPAWN_SPEED,
            min_radius: MIN_SPAWN_RADIUS,
            max_radius: MAX_SPAWN_RADIUS,
        }
    }
}

/// Simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Canvas extent (pixels); the canvas element's own size wins on the web
    pub width: f64,
    pub height: f64,
    pub spawn: SpawnRanges,
    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
    /// CSS fill style for bodies
    pub fill_color: String,
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            spawn: SpawnRanges::default(),
            seed: None,
            fill_color: FILL_COLOR.to_string(),
            show_fps: true,
        }
    }
}

impl SimConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_box_config";

    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "height must be positive, got {}",
                self.height
            )));
        }

        let spawn = &self.spawn;
        if !(spawn.max_speed.is_finite() && spawn.max_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spawn.max_speed must be positive, got {}",
                spawn.max_speed
            )));
        }
        if !(spawn.min_radius.is_finite() && spawn.min_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "spawn.min_radius must be positive, got {}",
                spawn.min_radius
            )));
        }
        if !(spawn.max_radius.is_finite() && spawn.max_radius > spawn.min_radius) {
            return Err(ConfigError::Invalid(format!(
                "spawn.max_radius ({}) must exceed spawn.min_radius ({})",
                spawn.max_radius, spawn.min_radius
            )));
        }

        // Wall bounces assume a body fits inside the canvas; not enforced
        let half_extent = self.width.min(self.height) / 2.0;
        if spawn.max_radius > half_extent {
            log::warn!(
                "spawn.max_radius {} exceeds half the canvas extent {}; large bodies will jitter against the walls",
                spawn.max_radius,
                half_extent
            );
        }

        Ok(())
    }

    /// Load the stored config, or store and return the defaults when none is
    /// stored or the stored one is invalid
    pub fn load() -> Self {
        if let Some(config) = Self::load_stored() {
            return config;
        }
        log::info!("Using default config");
        let config = Self::default();
        config.save();
        config
    }

    /// Read config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_stored() -> Option<Self> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;

        let json = storage.get_item(Self::STORAGE_KEY).ok().flatten()?;
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from LocalStorage");
                Some(config)
            }
            Err(e) => {
                log::warn!("Ignoring stored config: {}", e);
                None
            }
        }
    }

    /// Save config to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        else {
            log::warn!("LocalStorage unavailable; config not saved");
            return;
        };

        match self.to_json() {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Config saved"),
                Err(e) => log::warn!("Could not save config: {:?}", e),
            },
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_stored() -> Option<Self> {
        None
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
