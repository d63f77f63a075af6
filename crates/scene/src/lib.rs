//! Scene state for the viewer.
//!
//! This crate provides scene management:
//! - The scene container (background, lights, loaded models)
//! - Camera with perspective projection
//! - Light definitions
//! - Transforms
//! - Damped orbit camera controls

pub mod camera;
pub mod light;
pub mod orbit;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use light::{AmbientLight, DirectionalLight, lights_from_config};
pub use orbit::OrbitController;
pub use scene::{ModelInstance, Scene};
pub use transform::Transform;
