use winit::dpi::PhysicalSize;

use sweep_anim::{AnimationConfig, AnimationLoop, Bounds, SystemTime};
use sweep_engine::coords::Viewport;
use sweep_engine::core::{App, AppControl, FrameCtx, ResizeEvent};
use sweep_engine::device::BackBuffer;
use sweep_engine::render::Compositor;
use sweep_engine::text::FontId;
use sweep_engine::window::RuntimeConfig;

use crate::gpu_canvas::GpuCanvas;

/// Window settings derived from the animation config.
pub fn runtime_config(config: &AnimationConfig) -> RuntimeConfig {
    let (w, h) = config.fallback_buffer_size;
    RuntimeConfig::default()
        .title(config.title.clone())
        .maximized(config.start_maximized)
        .tick_interval(config.tick_interval)
        .fallback_display_size(w, h)
}

fn bounds_of(viewport: Viewport) -> Bounds {
    Bounds::from_size(viewport.width as f64, viewport.height as f64)
}

/// Hosts the sweep animation inside the engine runtime.
pub struct SweepApp {
    anim: AnimationLoop<SystemTime, BackBuffer>,
    compositor: Compositor,
    font: Option<FontId>,
    viewport: Viewport,
    max_buffer_size: PhysicalSize<u32>,
}

impl SweepApp {
    pub fn new(config: AnimationConfig) -> Self {
        let mut compositor = Compositor::new();
        let font = match compositor.fonts_mut().load_system_font() {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("FPS label disabled: {e}");
                None
            }
        };

        let (w, h) = config.fallback_buffer_size;
        Self {
            anim: AnimationLoop::new(config, SystemTime),
            compositor,
            font,
            viewport: Viewport::default(),
            max_buffer_size: PhysicalSize::new(w, h),
        }
    }
}

impl App for SweepApp {
    fn on_load(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.max_buffer_size = ctx.display.size;
        self.viewport = ctx.window.viewport();
        self.anim.load(bounds_of(self.viewport));
        AppControl::Continue
    }

    fn on_resize(&mut self, _ctx: &mut FrameCtx<'_, '_>, event: ResizeEvent) -> AppControl {
        if !event.minimized {
            self.viewport = event.viewport;
            self.compositor.release_buffer();
        }
        self.anim.resize(bounds_of(event.viewport), event.minimized);
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let mut canvas = GpuCanvas {
            gpu: &mut *ctx.gpu,
            window: ctx.window.window,
            compositor: &mut self.compositor,
            font: self.font,
            viewport: self.viewport,
            max_buffer_size: self.max_buffer_size,
        };

        match self.anim.frame(&mut canvas) {
            Ok(_) => AppControl::Continue,
            Err(e) => {
                log::error!("{e:#}");
                AppControl::Exit
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn runtime_config_follows_animation_config() {
        let anim = AnimationConfig::default().tick_interval(Duration::from_millis(20));
        let rt = runtime_config(&anim);
        assert_eq!(rt.title, "Animation - Sweep");
        assert!(rt.maximized);
        assert_eq!(rt.tick_interval, Duration::from_millis(20));
        assert_eq!(rt.fallback_display_size, PhysicalSize::new(1280, 720));
    }

    #[test]
    fn bounds_cover_the_viewport_from_the_origin() {
        let b = bounds_of(Viewport::new(800.0, 600.0));
        assert_eq!(b, Bounds::from_size(800.0, 600.0));
        assert_eq!(b.bottom(), 600.0);
    }
}
