//! Demo settings
//!
//! Read from LocalStorage on start-up when present; defaults otherwise.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas size in CSS pixels
    pub surface_width: f32,
    pub surface_height: f32,

    // === Add-ball form ===
    /// Color the add form opens with
    pub default_color: String,
    /// Size the add form opens with (also the fallback for bad input)
    pub default_size: f32,

    /// Spawn the three start-up balls
    pub seed_balls: bool,
    /// Fixed placement seed (time-based when unset)
    pub rng_seed: Option<u64>,
    /// One of "error", "warn", "info", "debug", "trace", "off"
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,

            default_color: DEFAULT_BALL_COLOR.to_string(),
            default_size: DEFAULT_BALL_SIZE,

            seed_balls: true,
            rng_seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take defaults, bad JSON gives `None`
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    /// Parsed log level, `Info` if unrecognized
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Configured surface size, or the default size when either side is not
    /// a positive number (a zero-area canvas would skip every frame)
    pub fn surface_size(&self) -> (f32, f32) {
        let (w, h) = (self.surface_width, self.surface_height);
        if w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() {
            (w, h)
        } else {
            log::warn!(
                "Invalid surface size {}x{}, using {}x{}",
                w,
                h,
                DEFAULT_SURFACE_WIDTH,
                DEFAULT_SURFACE_HEIGHT
            );
            (DEFAULT_SURFACE_WIDTH, DEFAULT_SURFACE_HEIGHT)
        }
    }

    /// Placement seed, or `fallback` when none is configured
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.rng_seed.unwrap_or(fallback)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ball_canvas_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
