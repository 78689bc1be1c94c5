//! Demo settings
//!
//! Persisted as JSON: LocalStorage in the browser, an optional file on native.

use serde::{Deserialize, Serialize};

use crate::camera::FlightSettings;
use crate::consts::LOGO_SPEED;
use crate::logo::LogoShape;
use crate::error::{ConfigError, ConfigResult};
use crate::sim::{PhysicsParams, PoolSettings};
use crate::terrain::TerrainSettings;

/// Which terrain index buffers the host should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RenderMode {
    /// Shaded triangles only
    #[default]
    Polygon,
    /// Shaded triangles with the edge list drawn on top
    WirePoly,
    /// Edge list only
    Wireframe,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Polygon => "Polygon",
            RenderMode::WirePoly => "WirePoly",
            RenderMode::Wireframe => "Wireframe",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "polygon" | "poly" => Some(RenderMode::Polygon),
            "wirepoly" | "both" => Some(RenderMode::WirePoly),
            "wireframe" | "wire" => Some(RenderMode::Wireframe),
            _ => None,
        }
    }

    /// Draw the triangle list
    pub fn draws_faces(&self) -> bool {
        matches!(self, RenderMode::Polygon | RenderMode::WirePoly)
    }

    /// Draw the edge list
    pub fn draws_edges(&self) -> bool {
        matches!(self, RenderMode::WirePoly | RenderMode::Wireframe)
    }
}

/// Demo settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Terrain ===
    pub terrain: TerrainSettings,
    /// Seed for the fault planes
    pub terrain_seed: u64,

    // === Physics ===
    pub physics: PhysicsParams,
    pub pool: PoolSettings,
    /// Seed for sphere spawning
    pub physics_seed: u64,

    // === Camera ===
    pub flight: FlightSettings,

    // === Logo ===
    pub logo_shape: LogoShape,
    /// Degrees per second
    pub logo_speed: f32,

    // === Rendering hints for the host ===
    pub render_mode: RenderMode,
    /// Enable distance fog in the terrain shader
    pub fog: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            terrain: TerrainSettings::default(),
            terrain_seed: 1,

            physics: PhysicsParams::default(),
            pool: PoolSettings::default(),
            physics_seed: 1,

            flight: FlightSettings::default(),

            logo_shape: LogoShape::I,
            logo_speed: LOGO_SPEED,

            render_mode: RenderMode::Polygon,
            fog: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(any(target_arch = "wasm32", test))]
    const STORAGE_KEY: &'static str = "terrain_arena_settings";

    /// Check every section, failing on the first bad value
    pub fn validate(&self) -> ConfigResult<()> {
        self.terrain.validate()?;
        self.physics.validate()?;

        let f = &self.flight;
        if !f.start.is_finite() {
            return Err(ConfigError::InvalidSetting {
                name: "flight.start",
                value: f.start.length(),
            });
        }
        if !f.view_dir.is_finite() || f.view_dir.length_squared() == 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "flight.view_dir",
                value: f.view_dir.length(),
            });
        }
        for (name, value) in [
            ("flight.speed", f.speed),
            ("flight.speed_step", f.speed_step),
            ("flight.turn_degrees", f.turn_degrees),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSetting { name, value });
            }
        }
        if !self.logo_speed.is_finite() {
            return Err(ConfigError::InvalidSetting {
                name: "logo_speed",
                value: self.logo_speed,
            });
        }
        Ok(())
    }

    /// Parse and validate settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
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
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> ConfigResult<()> {
        let window = web_sys::window().ok_or_else(|| ConfigError::Storage("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| ConfigError::Storage("LocalStorage disabled".into()))?;

        self.store_with(|key, json| storage.set_item(key, json).map_err(|e| format!("{:?}", e)))
    }

    /// Serialize and hand the JSON to a key/value store, surfacing its failure
    #[cfg(any(target_arch = "wasm32", test))]
    fn store_with<F>(&self, set_item: F) -> ConfigResult<()>
    where
        F: FnOnce(&str, &str) -> Result<(), String>,
    {
        let json = serde_json::to_string(self)?;
        set_item(Self::STORAGE_KEY, &json).map_err(ConfigError::Storage)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Load settings from a JSON file, or defaults when no path is given
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> ConfigResult<Self> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> ConfigResult<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
