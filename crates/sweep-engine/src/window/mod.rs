//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, drives redraws from a fixed-interval
//! timer, and wires both to the GPU layer.

mod display;
mod runtime;
mod timer;
mod visibility;

pub use display::{resolve_display_size, DisplayInfo};
pub use runtime::{Runtime, RuntimeConfig};
pub use timer::TickTimer;
pub use visibility::{Visibility, VisibilityChange};
