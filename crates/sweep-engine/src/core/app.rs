use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// New client area after a resize or a visibility change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResizeEvent {
    pub size: PhysicalSize<u32>,
    pub viewport: Viewport,
    /// Minimized, or reported fully occluded by the platform.
    pub minimized: bool,
}

/// Application contract implemented by higher layers.
///
/// Callbacks run on the event-loop thread. The redraw timer is running
/// whenever the window is not minimized, and `on_frame` is only called then.
pub trait App {
    /// Called once after the window and GPU are ready, before the first tick.
    fn on_load(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called after the surface has been resized, minimized or restored.
    fn on_resize(&mut self, ctx: &mut FrameCtx<'_, '_>, event: ResizeEvent) -> AppControl {
        let _ = (ctx, event);
        AppControl::Continue
    }

    /// Called for window events before the runtime handles them.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per timer tick while the window is visible.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
