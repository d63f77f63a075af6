//! Platform abstraction layer for the viewer.
//!
//! This crate provides platform-specific functionality:
//! - Window management via winit
//! - Mouse input tracking for the orbit controls

mod input;
mod window;

pub use input::{InputState, MouseButton};
pub use window::Window;

// Re-export winit types that users might need
pub use winit::event::WindowEvent;
pub use winit::event_loop::EventLoop;
