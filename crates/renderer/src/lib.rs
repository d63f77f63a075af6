//! wgpu-based renderer for the viewer.
//!
//! All GPU work is delegated to wgpu; this crate owns the surface, the depth
//! buffer, one forward pipeline, and the GPU copies of loaded models.

mod context;
mod depth;
mod mesh;
mod renderer;

pub use context::GpuContext;
pub use renderer::Renderer;
