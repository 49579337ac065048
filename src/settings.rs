//! Game settings and preferences
//!
//! Read from LocalStorage on the web; natively the defaults apply.

use serde::{Deserialize, Serialize};

/// How display frames map to simulation ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// One tick per display frame. Game speed follows the refresh rate.
    #[default]
    PerFrame,
    /// Ticks at a fixed 60 Hz regardless of refresh rate
    Fixed,
}

impl Pacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::PerFrame => "per_frame",
            Pacing::Fixed => "fixed",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame-to-tick mapping
    pub pacing: Pacing,
    /// RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Log level name (`error` .. `trace`)
    pub log_level: String,
    /// Freeze cosmetic animation (clouds, beard)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pacing: Pacing::PerFrame,
            seed: None,
            log_level: "info".to_string(),
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bottle_dodge_settings";

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

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
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
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
