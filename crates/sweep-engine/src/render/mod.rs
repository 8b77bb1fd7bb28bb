//! GPU rendering subsystem.
//!
//! Renderers replay `scene` draw lists into a back buffer; the compositor
//! then copies the finished back buffer to the swapchain.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod compositor;
mod ctx;
pub mod shapes;

pub use compositor::{Compositor, PresentOutcome};
pub use ctx::{RenderCtx, RenderTarget};
