//! Renderers for draw-list commands and for the final copy to the swapchain.

mod common;

pub mod blit;
pub mod rect;
pub mod text;
