//! The scene container.

use glam::{Quat, Vec3};

use viewer_core::{ModelEntry, ViewerConfig};
use viewer_resources::Model;

use crate::light::{AmbientLight, DirectionalLight, lights_from_config};
use crate::transform::Transform;

/// A loaded model placed in the world.
#[derive(Debug)]
pub struct ModelInstance {
    /// Name from the model's config entry.
    pub name: String,
    /// World transform applied to the whole model.
    pub transform: Transform,
    /// Parsed mesh data, owned by the scene once loaded.
    pub model: Model,
}

/// The mutable set of everything to be rendered.
///
/// Created once at startup; models are appended as their loads complete and
/// are never removed.
#[derive(Debug)]
pub struct Scene {
    /// Background clear color (linear RGB).
    pub background: Vec3,
    pub ambient: AmbientLight,
    pub sun: DirectionalLight,
    instances: Vec<ModelInstance>,
}

impl Scene {
    /// Deterministically construct the scene from configuration:
    /// background color and lights. Models arrive later via [`Scene::add_model`].
    pub fn from_config(config: &ViewerConfig) -> Self {
        let (ambient, sun) = lights_from_config(&config.lighting);
        Self {
            background: Vec3::from_array(config.background),
            ambient,
            sun,
            instances: Vec::new(),
        }
    }

    /// Build the world transform for a configured model entry.
    pub fn entry_transform(entry: &ModelEntry) -> Transform {
        Transform::new()
            .with_position(Vec3::from_array(entry.position))
            .with_rotation(Quat::from_rotation_y(entry.rotation_y_degrees.to_radians()))
    }

    /// Append a loaded model to the scene.
    pub fn add_model(&mut self, name: impl Into<String>, model: Model, transform: Transform) {
        let name = name.into();
        tracing::info!(
            "Model '{}' added to scene ({} meshes)",
            name,
            model.meshes.len()
        );
        self.instances.push(ModelInstance {
            name,
            transform,
            model,
        });
    }

    /// Models currently in the scene, in insertion order.
    pub fn instances(&self) -> &[ModelInstance] {
        &self.instances
    }

    /// Number of models in the scene.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether any model has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_builds_lights_and_background() {
        let config = ViewerConfig::default();
        let scene = Scene::from_config(&config);
        assert!(scene.is_empty());
        assert_eq!(scene.background, Vec3::from_array(config.background));
        assert_eq!(scene.ambient.intensity, config.lighting.ambient_intensity);
        assert_eq!(scene.sun.intensity, config.lighting.sun_intensity);
    }

    #[test]
    fn add_model_appends_exactly_one_instance() {
        let config = ViewerConfig::default();
        let mut scene = Scene::from_config(&config);
        let entry = &config.models[1]; // the car, rotated 180 degrees
        let transform = Scene::entry_transform(entry);

        scene.add_model(entry.name.clone(), Model::default(), transform);

        assert_eq!(scene.len(), 1);
        let instance = &scene.instances()[0];
        assert_eq!(instance.name, "car");
        assert_eq!(instance.transform, transform);
        // The configured 180 degree yaw survives into the world matrix.
        let forward = instance
            .transform
            .matrix()
            .transform_vector3(Vec3::new(0.0, 0.0, 1.0));
        assert!((forward - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }
}
