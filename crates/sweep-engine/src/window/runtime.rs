use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::core::{App as CoreApp, AppControl, FrameCtx, ResizeEvent, WindowCtx};
use crate::device::{Gpu, GpuInit};

use super::display::{resolve_display_size, DisplayInfo};
use super::timer::TickTimer;
use super::visibility::Visibility;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub maximized: bool,
    /// Period of the redraw timer.
    pub tick_interval: Duration,
    /// Assumed display size when the primary monitor cannot be queried.
    pub fallback_display_size: PhysicalSize<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "sweep".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            maximized: false,
            tick_interval: Duration::from_millis(10),
            fallback_display_size: PhysicalSize::new(1280, 720),
        }
    }
}

impl RuntimeConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn initial_size(mut self, width: f64, height: f64) -> Self {
        self.initial_size = LogicalSize::new(width, height);
        self
    }

    pub fn maximized(mut self, maximized: bool) -> Self {
        self.maximized = maximized;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    pub fn fallback_display_size(mut self, width: u32, height: u32) -> Self {
        self.fallback_display_size = PhysicalSize::new(width, height);
        self
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs the event loop until the window closes or
    /// the app asks to exit. Startup failures are returned.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    display: DisplayInfo,
    timer: TickTimer,
    visibility: Visibility,

    exit_requested: bool,
    startup_error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let display = DisplayInfo {
            size: config.fallback_display_size,
            queried: false,
        };
        let timer = TickTimer::new(config.tick_interval);
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            display,
            timer,
            visibility: Visibility::default(),
            exit_requested: false,
            startup_error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.timer.stop();
        event_loop.exit();
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let monitor = event_loop.primary_monitor().map(|m| m.size());
        self.display = resolve_display_size(monitor, self.config.fallback_display_size);

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_maximized(self.config.maximized);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")?;

        let minimized = entry.with_window(|w| window_is_minimized(w, w.inner_size()));
        self.visibility = Visibility::new(minimized);
        self.entry = Some(entry);
        Ok(())
    }

    /// Builds a [`FrameCtx`] for the window and hands it to `f`.
    fn dispatch<F>(&mut self, f: F) -> AppControl
    where
        F: FnOnce(&mut A, &mut FrameCtx<'_, '_>) -> AppControl,
    {
        let (app, display) = (&mut self.app, self.display);
        let Some(entry) = self.entry.as_mut() else {
            return AppControl::Continue;
        };

        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
                display,
            };
            f(app, &mut ctx)
        })
    }

    fn handle_resize(&mut self, event_loop: &ActiveEventLoop, size: PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else { return };

        entry.with_gpu_mut(|gpu| gpu.resize(size));
        let minimized = entry.with_window(|w| window_is_minimized(w, size));

        self.visibility
            .set_minimized(minimized, &mut self.timer, Instant::now());
        self.notify_resize(event_loop, size);
    }

    /// X11, Wayland and macOS report minimizing only as occlusion.
    fn handle_occluded(&mut self, event_loop: &ActiveEventLoop, occluded: bool) {
        let changed = self
            .visibility
            .set_occluded(occluded, &mut self.timer, Instant::now());
        if changed.is_none() {
            return;
        }

        let size = self.entry.as_ref().map(|e| e.with_window(|w| w.inner_size()));
        if let Some(size) = size {
            self.notify_resize(event_loop, size);
        }
    }

    fn notify_resize(&mut self, event_loop: &ActiveEventLoop, size: PhysicalSize<u32>) {
        let Some(scale) = self.entry.as_ref().map(|e| e.with_window(|w| w.scale_factor())) else {
            return;
        };

        let event = ResizeEvent {
            size,
            viewport: Viewport::from_physical(size, scale),
            minimized: self.visibility.is_hidden(),
        };
        if self.dispatch(|app, ctx| app.on_resize(ctx, event)) == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }
}

fn window_is_minimized(window: &Window, size: PhysicalSize<u32>) -> bool {
    size.width == 0 || size.height == 0 || window.is_minimized() == Some(true)
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.startup_error = Some(e);
            self.request_exit(event_loop);
            return;
        }

        if self.dispatch(|app, ctx| app.on_load(ctx)) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        if !self.visibility.is_hidden() {
            self.timer.start(Instant::now());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.timer.poll(Instant::now()) {
            if let Some(entry) = self.entry.as_ref() {
                entry.with_window(|w| w.request_redraw());
            }
        }

        match self.timer.deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(size) => self.handle_resize(event_loop, size),

            WindowEvent::Occluded(occluded) => self.handle_occluded(event_loop, occluded),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.entry.as_ref().map(|e| e.with_window(|w| w.inner_size()));
                if let Some(size) = size {
                    self.handle_resize(event_loop, size);
                }
            }

            WindowEvent::RedrawRequested => {
                if self.visibility.is_hidden() {
                    return;
                }
                if self.dispatch(|app, ctx| app.on_frame(ctx)) == AppControl::Exit {
                    self.request_exit(event_loop);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_ticks_every_ten_ms() {
        let c = RuntimeConfig::default();
        assert_eq!(c.tick_interval, Duration::from_millis(10));
        assert_eq!(c.fallback_display_size, PhysicalSize::new(1280, 720));
        assert!(!c.maximized);
    }

    #[test]
    fn builder_overrides_fields() {
        let c = RuntimeConfig::default()
            .title("demo")
            .maximized(true)
            .tick_interval(Duration::from_millis(16))
            .fallback_display_size(800, 600);
        assert_eq!(c.title, "demo");
        assert!(c.maximized);
        assert_eq!(c.tick_interval, Duration::from_millis(16));
        assert_eq!(c.fallback_display_size, PhysicalSize::new(800, 600));
    }
}
