//! Core utilities for the glTF scene viewer.
//!
//! This crate provides foundational types used across the viewer:
//! - Error types and result aliases
//! - Logging initialization
//! - Timer utilities
//! - Configuration loading

mod config;
mod error;
mod logging;
mod timer;

pub use config::{CameraConfig, LightingConfig, ModelEntry, OrbitConfig, ViewerConfig};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use timer::Timer;
