//! Damped orbit camera controls.
//!
//! The controller keeps the camera on a sphere around a target point. Mouse
//! drags steer a goal yaw/pitch, scroll steers a goal distance, and each
//! frame the current values ease toward the goals so motion stays smooth.

use glam::Vec3;

use viewer_core::OrbitConfig;

use crate::camera::Camera;

/// Pitch limit just short of the poles, where the view matrix degenerates.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Radians of orbit per pixel of drag.
const ROTATE_SPEED: f32 = 0.005;

/// Distance scale per scroll line.
const ZOOM_SPEED: f32 = 0.1;

/// Movement below this threshold counts as settled.
const SETTLE_EPSILON: f32 = 1e-4;

/// Orbit controller with exponential damping.
#[derive(Clone, Debug)]
pub struct OrbitController {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    goal_yaw: f32,
    goal_pitch: f32,
    goal_distance: f32,
    damping: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitController {
    /// Create a controller orbiting `target`, starting at the camera's
    /// current position.
    pub fn new(camera: &Camera, target: Vec3, config: &OrbitConfig) -> Self {
        let offset = camera.position - target;
        let distance = offset.length().max(config.min_distance);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        Self {
            target,
            yaw,
            pitch,
            distance,
            goal_yaw: yaw,
            goal_pitch: pitch,
            goal_distance: distance,
            damping: config.damping.clamp(0.001, 1.0),
            min_distance: config.min_distance,
            max_distance: config.max_distance,
        }
    }

    /// The point the camera pivots around.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current camera distance from the target.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Apply a mouse drag of (dx, dy) pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.goal_yaw -= dx * ROTATE_SPEED;
        self.goal_pitch = (self.goal_pitch + dy * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Apply a scroll of `delta` lines (positive zooms in).
    pub fn zoom(&mut self, delta: f32) {
        self.goal_distance = (self.goal_distance * (1.0 - delta * ZOOM_SPEED))
            .clamp(self.min_distance, self.max_distance);
    }

    /// Advance the damping state by `dt` seconds and write the resulting
    /// position/orientation into the camera. Returns whether the camera
    /// moved this frame.
    pub fn update(&mut self, dt: f32, camera: &mut Camera) -> bool {
        // Frame-rate independent easing: `damping` is the per-60Hz-frame
        // fraction of remaining error removed.
        let t = 1.0 - (1.0 - self.damping).powf(dt.max(0.0) * 60.0);

        let moved = (self.goal_yaw - self.yaw).abs()
            + (self.goal_pitch - self.pitch).abs()
            + (self.goal_distance - self.distance).abs()
            > SETTLE_EPSILON;

        self.yaw += (self.goal_yaw - self.yaw) * t;
        self.pitch += (self.goal_pitch - self.pitch) * t;
        self.distance += (self.goal_distance - self.distance) * t;

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let offset = Vec3::new(
            self.distance * cos_pitch * sin_yaw,
            self.distance * sin_pitch,
            self.distance * cos_pitch * cos_yaw,
        );

        camera.position = self.target + offset;
        camera.look_at(self.target);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewer_core::CameraConfig;

    fn setup() -> (Camera, OrbitController) {
        let camera = Camera::from_config(&CameraConfig::default(), 16.0 / 9.0);
        let controller = OrbitController::new(&camera, Vec3::ZERO, &OrbitConfig::default());
        (camera, controller)
    }

    #[test]
    fn starts_at_the_camera_position() {
        let (mut camera, mut controller) = setup();
        let before = camera.position;
        controller.update(1.0 / 60.0, &mut camera);
        assert!((camera.position - before).length() < 1e-3);
    }

    #[test]
    fn damping_converges_to_the_goal() {
        let (mut camera, mut controller) = setup();
        controller.rotate(200.0, 0.0);
        for _ in 0..600 {
            controller.update(1.0 / 60.0, &mut camera);
        }
        assert!(!controller.update(1.0 / 60.0, &mut camera), "should settle");
        // Distance to target is preserved by pure rotation.
        assert!((camera.position.length() - controller.distance()).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped_to_configured_range() {
        let (mut camera, mut controller) = setup();
        for _ in 0..100 {
            controller.zoom(5.0);
        }
        for _ in 0..600 {
            controller.update(1.0 / 60.0, &mut camera);
        }
        let config = OrbitConfig::default();
        assert!(controller.distance() >= config.min_distance - 1e-3);

        for _ in 0..100 {
            controller.zoom(-5.0);
        }
        for _ in 0..600 {
            controller.update(1.0 / 60.0, &mut camera);
        }
        assert!(controller.distance() <= config.max_distance + 1e-3);
    }

    #[test]
    fn camera_keeps_facing_the_target_while_orbiting() {
        let (mut camera, mut controller) = setup();
        controller.rotate(80.0, -40.0);
        for _ in 0..10 {
            controller.update(1.0 / 60.0, &mut camera);
            let to_target = (controller.target() - camera.position).normalize();
            assert!(camera.forward().dot(to_target) > 0.999);
        }
    }
}
