//! Camera with perspective projection.

use glam::{Mat4, Quat, Vec3};

use viewer_core::CameraConfig;

/// A camera for rendering the scene.
///
/// Projection is always perspective; only the aspect ratio changes at
/// runtime (on window resizes).
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Camera rotation
    pub rotation: Quat,
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height of the viewport
    pub aspect: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            rotation: Quat::IDENTITY,
            fov_y: 45.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

impl Camera {
    /// Build a camera from configuration, positioned and oriented to look
    /// at the configured target.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self {
            position: Vec3::from_array(config.position),
            rotation: Quat::IDENTITY,
            fov_y: config.fov_y_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
        };
        camera.look_at(Vec3::from_array(config.target));
        camera
    }

    /// Update the aspect ratio (call on window resizes).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Orient the camera to look at a target position.
    pub fn look_at(&mut self, target: Vec3) {
        let forward = target - self.position;
        if forward.length_squared() > 0.0 {
            self.rotation = Quat::from_rotation_arc(Vec3::NEG_Z, forward.normalize());
        }
    }

    /// Get the forward direction vector.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        let target = self.position + self.forward();
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }

    /// Get the projection matrix (0..1 depth range, as wgpu expects).
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Get the view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_aspect_is_exact_for_any_size() {
        let mut camera = Camera::default();
        for (w, h) in [(1280u32, 720u32), (1, 1), (1920, 1200), (333, 777)] {
            camera.set_aspect(w as f32 / h as f32);
            assert_eq!(camera.aspect, w as f32 / h as f32);
        }
    }

    #[test]
    fn from_config_looks_at_target() {
        let config = CameraConfig::default();
        let camera = Camera::from_config(&config, 16.0 / 9.0);
        let to_target = (Vec3::from_array(config.target) - camera.position).normalize();
        assert!(camera.forward().dot(to_target) > 0.999);
    }

    #[test]
    fn projection_uses_configured_planes() {
        let camera = Camera::from_config(&CameraConfig::default(), 2.0);
        let proj = camera.projection_matrix();
        // A point on the near plane maps to depth 0.
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -camera.near));
        assert!(near.z.abs() < 1e-5);
    }
}
