//! Error types for the viewer.

use thiserror::Error;

/// Main error type for the viewer.
#[derive(Error, Debug)]
pub enum Error {
    /// Window creation or management errors
    #[error("Window error: {0}")]
    Window(String),

    /// GPU device or surface errors
    #[error("GPU error: {0}")]
    Gpu(String),

    /// Resource loading errors
    #[error("Resource error: {0}")]
    Resource(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the viewer's Error type.
pub type Result<T> = std::result::Result<T, Error>;
