//! GPU device + surface management.
//!
//! This module is responsible for:
//! - probing for a usable adapter and creating the wgpu Instance/Device/Queue
//! - creating & configuring the Surface (swapchain) exactly once
//! - owning the depth/stencil texture matched to the surface size
//! - acquiring frames and providing encoders/views for rendering

mod depth;
mod gpu;

pub use depth::{DEPTH_CLEAR_VALUE, DEPTH_FORMAT, DepthTexture, STENCIL_CLEAR_VALUE};
pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
