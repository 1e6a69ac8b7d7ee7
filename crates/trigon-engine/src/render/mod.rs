//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipeline, buffers) and record draw
//! commands into the frame encoder via wgpu.
//!
//! Convention:
//! - vertex positions are already in clip space; the vertex shader passes
//!   them through unchanged.

mod ctx;
pub mod shader;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use triangle::{CLEAR_COLOR, TRIANGLE_VERTICES, TriangleRenderer, Vertex};
