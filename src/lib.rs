//! Bounce Box - click-to-spawn bouncing bodies on a canvas
//!
//! Core modules:
//! - `sim`: Physics core (vectors, bodies, world stepping)
//! - `driver`: Frame driver and input adapter that call into the world
//! - `fps`: Frame rate sampling for the HUD
//! - `config`: Data-driven simulation settings
//! - `render`: Canvas 2D renderer (wasm32 only)

pub mod config;
pub mod driver;
pub mod fps;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;

pub use config::{ConfigError, SimConfig, SpawnRanges};
pub use driver::{FrameDriver, FrameReport, Render, canvas_position};
pub use fps::FpsCounter;

/// Simulation configuration constants
pub mod consts {
    /// Default canvas dimensions (pixels)
    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;

    /// Spawned velocity components are drawn from [-MAX_SPAWN_SPEED, MAX_SPAWN_SPEED)
    pub const MAX_SPAWN_SPEED: f64 = 5.0;
    /// Spawned radius is drawn from [MIN_SPAWN_RADIUS, MAX_SPAWN_RADIUS)
    pub const MIN_SPAWN_RADIUS: f64 = 10.0;
    pub const MAX_SPAWN_RADIUS: f64 = 50.0;

    /// Body fill style
    pub const FILL_COLOR: &str = "#613f70";

    /// Number of frames in the smoothed FPS window
    pub const FPS_WINDOW: usize = 60;
}
