//! Sweep engine crate.
//!
//! Owns the platform + GPU runtime pieces: the `winit` event loop with a
//! fixed-interval redraw timer, the `wgpu` device and swapchain, the off-screen
//! back buffer frames are composed into, and the renderers that fill it.

pub mod core;
pub mod device;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
