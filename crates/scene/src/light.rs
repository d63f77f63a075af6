//! Light definitions for the scene.

use glam::Vec3;

use viewer_core::LightingConfig;

/// A uniform fill light with no direction.
#[derive(Clone, Copy, Debug)]
pub struct AmbientLight {
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 0.5,
        }
    }
}

/// A directional light (sun-like).
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Light direction (normalized)
    pub direction: Vec3,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(0.0, -1.0, 0.0),
            color: Vec3::ONE,
            intensity: 1.0,
        }
    }
}

impl DirectionalLight {
    /// Build a directional light shining from `position` toward the origin.
    pub fn from_position(position: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            direction: (-position).normalize_or(Vec3::NEG_Y),
            color,
            intensity,
        }
    }
}

/// Build the scene's light pair from configuration.
pub fn lights_from_config(config: &LightingConfig) -> (AmbientLight, DirectionalLight) {
    let ambient = AmbientLight {
        color: Vec3::from_array(config.ambient_color),
        intensity: config.ambient_intensity,
    };
    let sun = DirectionalLight::from_position(
        Vec3::from_array(config.sun_position),
        Vec3::from_array(config.sun_color),
        config.sun_intensity,
    );
    (ambient, sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_direction_points_from_position_to_origin() {
        let sun = DirectionalLight::from_position(Vec3::new(0.0, 50.0, 0.0), Vec3::ONE, 1.5);
        assert!((sun.direction - Vec3::NEG_Y).length() < 1e-6);
        assert_eq!(sun.intensity, 1.5);
    }
}
