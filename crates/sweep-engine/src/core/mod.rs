//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! application layer, plus the context handed to every callback.

mod app;
mod ctx;

pub use app::{App, AppControl, ResizeEvent};
pub use ctx::{FrameCtx, WindowCtx};
