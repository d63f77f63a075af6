//! Viewer configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration. The defaults describe a car-on-track scene: a 45
//! degree perspective camera high above the origin, a soft ambient fill plus
//! a sun-like directional light, and damped orbit controls.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Perspective camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
    /// Initial camera position in world space.
    pub position: [f32; 3],
    /// Point the camera looks at (and the orbit pivot).
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            near: 0.1,
            far: 500.0,
            position: [0.0, 30.0, 30.0],
            target: [0.0, 0.0, 0.0],
        }
    }
}

/// Ambient and directional light parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub sun_color: [f32; 3],
    pub sun_intensity: f32,
    /// Position the sun shines from, toward the origin.
    pub sun_position: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_color: [1.0, 1.0, 1.0],
            ambient_intensity: 0.6,
            sun_color: [1.0, 1.0, 1.0],
            sun_intensity: 1.5,
            sun_position: [10.0, 50.0, 20.0],
        }
    }
}

/// Orbit control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Damping factor per update, in (0, 1]. Higher snaps faster.
    pub damping: f32,
    /// Closest the camera may dolly toward the target.
    pub min_distance: f32,
    /// Farthest the camera may dolly from the target.
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            damping: 0.05,
            min_distance: 5.0,
            max_distance: 100.0,
        }
    }
}

/// One model asset to load into the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Name used in logs.
    pub name: String,
    /// Path relative to `models_dir`.
    pub path: PathBuf,
    /// World position applied once loaded.
    #[serde(default)]
    pub position: [f32; 3],
    /// Rotation around the Y axis in degrees, applied once loaded.
    #[serde(default)]
    pub rotation_y_degrees: f32,
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Scene background color (linear RGB).
    pub background: [f32; 3],
    /// Directory model paths are resolved against.
    pub models_dir: PathBuf,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub orbit: OrbitConfig,
    pub models: Vec<ModelEntry>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "glTF Viewer".to_string(),
            width: 1280,
            height: 720,
            background: [0.94, 0.94, 0.94],
            models_dir: PathBuf::from("assets/models"),
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            orbit: OrbitConfig::default(),
            models: vec![
                ModelEntry {
                    name: "track".to_string(),
                    path: PathBuf::from("track.glb"),
                    // Sits just below the origin to avoid z-fighting with the car.
                    position: [0.0, -0.01, 0.0],
                    rotation_y_degrees: 0.0,
                },
                ModelEntry {
                    name: "car".to_string(),
                    path: PathBuf::from("car.glb"),
                    position: [0.0, 0.0, 0.0],
                    rotation_y_degrees: 180.0,
                },
            ],
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let buffer = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("unable to read '{}': {}", path.display(), e))
        })?;
        Self::from_str(&buffer)
    }

    /// Resolve a model entry's path against `models_dir`.
    pub fn model_path(&self, entry: &ModelEntry) -> PathBuf {
        self.models_dir.join(&entry.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scene_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.camera.fov_y_degrees, 45.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.camera.far, 500.0);
        assert_eq!(config.orbit.damping, 0.05);
        assert_eq!(config.models.len(), 2);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = ViewerConfig::from_str("").unwrap();
        assert_eq!(config.width, 1280);
        assert_eq!(config.models_dir, PathBuf::from("assets/models"));
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let src = r#"
            models_dir = "static/models"

            [camera]
            fov_y_degrees = 60.0

            [[models]]
            name = "car"
            path = "car.glb"
            rotation_y_degrees = 90.0
        "#;
        let config = ViewerConfig::from_str(src).unwrap();
        assert_eq!(config.camera.fov_y_degrees, 60.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.models.len(), 1);
        assert_eq!(
            config.model_path(&config.models[0]),
            PathBuf::from("static/models/car.glb")
        );
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ViewerConfig::from_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
