//! Game settings and preferences
//!
//! Persisted as JSON. Unknown or missing fields fall back to defaults so
//! old files keep working after upgrades.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::World;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub world_width: f32,
    /// Playfield height in pixels
    pub world_height: f32,
    /// Start runs with the autopilot on
    pub autopilot: bool,
    /// Fixed RNG seed; None draws a fresh one per run
    pub seed: Option<u64>,
    /// The headless driver stops after this many ticks if the run is
    /// somehow still going
    pub max_demo_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            autopilot: true,
            seed: None,
            max_demo_ticks: 100_000,
        }
    }
}

impl Settings {
    /// Default file name, resolved relative to the working directory
    pub const FILE_NAME: &'static str = "runner_settings.json";

    /// Playfield as the sim sees it
    pub fn world(&self) -> World {
        World::new(self.world_width, self.world_height)
    }

    /// Load from disk, falling back to defaults on any problem
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Corrupt settings file, using defaults: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save to disk. Failures are logged, not fatal.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save settings: {}", e);
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}
