//! Transform component for scene objects.

use glam::{Mat4, Quat, Vec3};

/// A transform representing position, rotation, and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Rotation as a quaternion
    pub rotation: Quat,
    /// Scale factor
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transform with the given position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Create a transform with the given rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Create a transform with the given scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Get the transformation matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix_by_default() {
        assert_eq!(Transform::new().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn matrix_applies_rotation_then_translation() {
        let transform = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::PI));
        let p = transform.matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!((p - Vec3::new(0.0, 2.0, 3.0)).length() < 1e-5);
    }
}
