//! Game settings and preferences
//!
//! Persisted as JSON in LocalStorage on the web. Missing fields fall back to
//! their defaults so older saves keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::{PADDLE_MAX_SPEED, SERVE_SPEED_X, SERVE_SPEED_Y, WIN_SCORE};
use crate::sim::Control;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rules ===
    /// Points needed to win a match
    pub win_score: u32,
    /// Who plays the right paddle
    pub right_control: Control,

    // === Tuning ===
    /// Paddle speed (pixels/s)
    pub paddle_speed: f32,
    /// Horizontal serve speed range (pixels/s)
    pub serve_speed_x: (f32, f32),
    /// Vertical serve speed range (pixels/s)
    pub serve_speed_y: (f32, f32),

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            win_score: WIN_SCORE,
            right_control: Control::Ai,

            paddle_speed: PADDLE_MAX_SPEED,
            serve_speed_x: SERVE_SPEED_X,
            serve_speed_y: SERVE_SPEED_Y,

            show_fps: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Repair values that would make the game unplayable
    fn sanitized(mut self) -> Self {
        if self.win_score == 0 {
            log::warn!("win_score of 0 is not playable, using {}", WIN_SCORE);
            self.win_score = WIN_SCORE;
        }
        if self.paddle_speed.is_nan() || self.paddle_speed <= 0.0 {
            log::warn!(
                "paddle_speed {} is not playable, using {}",
                self.paddle_speed,
                PADDLE_MAX_SPEED
            );
            self.paddle_speed = PADDLE_MAX_SPEED;
        }
        // Direction comes from the receiving side, so only magnitudes count
        let (lo, hi) = (self.serve_speed_x.0.abs(), self.serve_speed_x.1.abs());
        self.serve_speed_x = (lo.min(hi), lo.max(hi));
        if self.serve_speed_x.0.is_nan() || self.serve_speed_x.0 <= 0.0 {
            log::warn!(
                "serve_speed_x {:?} never reaches a goal, using {:?}",
                self.serve_speed_x,
                SERVE_SPEED_X
            );
            self.serve_speed_x = SERVE_SPEED_X;
        }
        if self.serve_speed_y.0 > self.serve_speed_y.1 {
            self.serve_speed_y = (self.serve_speed_y.1, self.serve_speed_y.0);
        }
        self
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "retro_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Could not save settings: {:?}", e),
                },
                Err(e) => log::warn!("Could not serialize settings: {}", e),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
