//! Resource loading for the viewer.
//!
//! This crate handles loading of external assets:
//! - glTF model parsing into mesh data
//! - Asynchronous load requests with per-request success/failure results

mod error;
mod loader;
mod model;

pub use error::{ResourceError, ResourceResult};
pub use loader::{AssetLoader, LoadOutcome};
pub use model::{Mesh, Model};
