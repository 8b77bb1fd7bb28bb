//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - allocating the off-screen back buffer frames are composed into
//! - acquiring swapchain frames for presentation

mod back_buffer;
mod frame;
mod gpu;
mod init;
mod surface;

pub use back_buffer::{back_buffer_extent, BackBuffer};
pub use frame::{GpuFrame, SurfaceErrorAction};
pub use gpu::Gpu;
pub use init::GpuInit;
