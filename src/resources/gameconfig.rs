//! Runtime configuration resource.
//!
//! Manages viewport, camera and debug settings loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! width = 800
//! height = 600
//!
//! [camera]
//! min_zoom = 0.5
//! max_zoom = 3.0
//! smoothing = 0.1
//! ; per_tick | time_normalized
//! smoothing_mode = per_tick
//! smoothing_rate = 6.0
//! zoom_step = 0.1
//!
//! [debug]
//! enabled = false
//! inspect_radius = 100
//!
//! [window]
//! target_fps = 60
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::camera2d::{CameraSettings, SmoothingMode};

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
const DEFAULT_MIN_ZOOM: f32 = 0.5;
const DEFAULT_MAX_ZOOM: f32 = 3.0;
const DEFAULT_SMOOTHING: f32 = 0.1;
const DEFAULT_SMOOTHING_RATE: f32 = 6.0;
const DEFAULT_ZOOM_STEP: f32 = 0.1;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_INSPECT_RADIUS: f32 = 100.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
/// Largest viewport side accepted from the INI file.
const MAX_VIEWPORT_SIDE: u32 = 16384;

fn clamp_viewport_side(v: u64) -> u32 {
    u32::try_from(v)
        .unwrap_or(MAX_VIEWPORT_SIDE)
        .clamp(1, MAX_VIEWPORT_SIDE)
}

/// Runtime configuration resource.
///
/// Changing it at runtime is picked up by
/// [`apply_gameconfig_changes`](crate::systems::gameconfig::apply_gameconfig_changes),
/// which pushes the new values into the camera and screen size.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// Fraction of the remaining distance closed per tick.
    pub smoothing: f32,
    /// Use `1 - exp(-smoothing_rate * dt)` instead of the per-tick factor.
    pub time_normalized_smoothing: bool,
    pub smoothing_rate: f32,
    /// Zoom change per mouse wheel notch.
    pub zoom_step: f32,
    /// Start with the debug overlay enabled.
    pub debug: bool,
    /// World-space radius of the pointer inspector.
    pub inspect_radius: f32,
    /// Target frames per second for the windowed loop.
    pub target_fps: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            smoothing: DEFAULT_SMOOTHING,
            time_normalized_smoothing: false,
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            zoom_step: DEFAULT_ZOOM_STEP,
            debug: DEFAULT_DEBUG,
            inspect_radius: DEFAULT_INSPECT_RADIUS,
            target_fps: DEFAULT_TARGET_FPS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [viewport] section
        if let Some(width) = config.getuint("viewport", "width").ok().flatten() {
            self.viewport_width = clamp_viewport_side(width);
        }
        if let Some(height) = config.getuint("viewport", "height").ok().flatten() {
            self.viewport_height = clamp_viewport_side(height);
        }

        // [camera] section
        if let Some(v) = config.getfloat("camera", "min_zoom").ok().flatten() {
            self.min_zoom = v as f32;
        }
        if let Some(v) = config.getfloat("camera", "max_zoom").ok().flatten() {
            self.max_zoom = v as f32;
        }
        if let Some(v) = config.getfloat("camera", "smoothing").ok().flatten() {
            self.smoothing = v as f32;
        }
        if let Some(mode) = config.get("camera", "smoothing_mode") {
            match mode.trim() {
                "per_tick" => self.time_normalized_smoothing = false,
                "time_normalized" => self.time_normalized_smoothing = true,
                other => warn!("Unknown smoothing_mode '{}', keeping current", other),
            }
        }
        if let Some(v) = config.getfloat("camera", "smoothing_rate").ok().flatten() {
            self.smoothing_rate = v as f32;
        }
        if let Some(v) = config.getfloat("camera", "zoom_step").ok().flatten() {
            self.zoom_step = v as f32;
        }

        // [debug] section
        if let Some(enabled) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = enabled;
        }
        if let Some(v) = config.getfloat("debug", "inspect_radius").ok().flatten() {
            self.inspect_radius = v as f32;
        }

        // [window] section
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        info!(
            "Loaded config: {}x{} viewport, zoom {}..{}, smoothing={} ({}), debug={}",
            self.viewport_width,
            self.viewport_height,
            self.min_zoom,
            self.max_zoom,
            self.smoothing,
            if self.time_normalized_smoothing {
                "time_normalized"
            } else {
                "per_tick"
            },
            self.debug
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        config.set("camera", "min_zoom", Some(self.min_zoom.to_string()));
        config.set("camera", "max_zoom", Some(self.max_zoom.to_string()));
        config.set("camera", "smoothing", Some(self.smoothing.to_string()));
        let mode = if self.time_normalized_smoothing {
            "time_normalized"
        } else {
            "per_tick"
        };
        config.set("camera", "smoothing_mode", Some(mode.to_string()));
        config.set("camera", "smoothing_rate", Some(self.smoothing_rate.to_string()));
        config.set("camera", "zoom_step", Some(self.zoom_step.to_string()));

        config.set("debug", "enabled", Some(self.debug.to_string()));
        config.set("debug", "inspect_radius", Some(self.inspect_radius.to_string()));

        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Viewport size as a [`ScreenSize`](crate::resources::screensize::ScreenSize)
    /// pair, saturating at `i32::MAX`.
    pub fn screen_size(&self) -> (i32, i32) {
        let side = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        (side(self.viewport_width), side(self.viewport_height))
    }

    /// Camera tunables derived from this configuration.
    pub fn camera_settings(&self) -> CameraSettings {
        let smoothing_mode = if self.time_normalized_smoothing {
            SmoothingMode::TimeNormalized {
                rate: self.smoothing_rate,
            }
        } else {
            SmoothingMode::PerTick
        };
        CameraSettings {
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            smoothing: self.smoothing,
            smoothing_mode,
            viewport: Vec2::new(self.viewport_width as f32, self.viewport_height as f32),
        }
    }
}
