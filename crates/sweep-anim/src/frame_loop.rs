use anyhow::{Context, Result};

use crate::config::{AnimationConfig, Rgb8};
use crate::frame_counter::{FpsDisplay, FrameCounter};
use crate::mover::{Bounds, PixelRect, Sprite};
use crate::time::{Clock, TimeSource};

/// Drawing backend for the frame loop.
///
/// `Buffer` is the off-screen surface frames are composed into. The loop owns
/// at most one buffer at a time; dropping it releases the backing resources.
/// Nothing drawn into a buffer is visible until [`Canvas::present`].
pub trait Canvas {
    type Buffer;

    /// Creates a buffer sized to the current viewport.
    fn allocate(&mut self) -> Result<Self::Buffer>;

    fn clear(&mut self, buffer: &mut Self::Buffer, color: Rgb8);

    fn fill_rect(&mut self, buffer: &mut Self::Buffer, rect: PixelRect, color: Rgb8);

    /// Draws `text` with its top-left corner at `(x, y)`.
    fn draw_text(
        &mut self,
        buffer: &mut Self::Buffer,
        text: &str,
        x: i32,
        y: i32,
        size: f32,
        color: Rgb8,
    );

    /// Shows the composed buffer on screen in one step.
    fn present(&mut self, buffer: &mut Self::Buffer) -> Result<()>;
}

/// Back-buffer lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferState {
    NoBuffer,
    BufferAllocated,
}

/// Result of a [`AnimationLoop::frame`] call.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// The window is minimized; nothing was updated or drawn.
    Suspended,
}

/// The sweep animation: motion, FPS counting and double-buffered drawing.
///
/// Event mapping:
/// - window created → [`load`](Self::load)
/// - window resized / minimized / restored → [`resize`](Self::resize)
/// - redraw after a timer tick → [`frame`](Self::frame)
pub struct AnimationLoop<T: TimeSource, B> {
    config: AnimationConfig,
    clock: Clock<T>,
    counter: FrameCounter<T>,
    sprite: Sprite,
    fps: FpsDisplay,
    bounds: Bounds,
    minimized: bool,
    buffer: Option<B>,
}

impl<T: TimeSource, B> AnimationLoop<T, B> {
    pub fn new(config: AnimationConfig, source: T) -> Self {
        let sprite = config.sprite();
        Self {
            clock: Clock::new(source.clone()),
            counter: FrameCounter::new(source),
            sprite,
            fps: FpsDisplay::new(),
            bounds: Bounds::default(),
            minimized: false,
            buffer: None,
            config,
        }
    }

    /// Lays out the scene for the initial viewport and restarts timing.
    pub fn load(&mut self, bounds: Bounds) {
        self.layout(bounds);
        self.clock.reset();
        log::info!(
            "running: {}x{} viewport, {} px/s, tick {:?}",
            bounds.width,
            bounds.height,
            self.config.velocity,
            self.config.tick_interval
        );
    }

    /// Handles a viewport change.
    ///
    /// Minimizing only suspends the loop: the layout and the buffer are left
    /// alone. Any other resize re-lays out the scene and drops the buffer so
    /// the next frame allocates one of the new size.
    pub fn resize(&mut self, bounds: Bounds, minimized: bool) {
        let was_minimized = self.minimized;
        self.minimized = minimized;

        if minimized {
            if !was_minimized {
                log::debug!("minimized; frame loop suspended");
            }
            return;
        }

        if was_minimized {
            // Skip the time spent minimized instead of jumping ahead.
            self.clock.reset();
            log::debug!("restored; frame loop resumed");
        }

        self.layout(bounds);
        self.dispose_buffer();
    }

    /// Runs one tick: update motion, compose the frame off-screen, present it,
    /// then count it.
    pub fn frame<C>(&mut self, canvas: &mut C) -> Result<FrameOutcome>
    where
        C: Canvas<Buffer = B>,
    {
        if self.minimized {
            return Ok(FrameOutcome::Suspended);
        }

        self.update();

        let mut buffer = match self.buffer.take() {
            Some(buffer) => buffer,
            None => {
                let buffer = canvas
                    .allocate()
                    .context("failed to allocate back buffer")?;
                log::debug!("back buffer allocated");
                buffer
            }
        };

        let presented = self.compose(canvas, &mut buffer);
        self.buffer = Some(buffer);
        presented.context("failed to present back buffer")?;

        if let Some(label) = self.counter.update() {
            self.fps.set_text(label);
        }

        Ok(FrameOutcome::Presented)
    }

    /// Releases the back buffer; the next frame allocates a fresh one.
    pub fn dispose_buffer(&mut self) {
        if self.buffer.take().is_some() {
            log::debug!("back buffer disposed");
        }
    }

    /// `true` while minimized; the tick timer should be paused.
    #[inline]
    pub fn is_suspended(&self) -> bool {
        self.minimized
    }

    #[inline]
    pub fn buffer_state(&self) -> BufferState {
        if self.buffer.is_some() {
            BufferState::BufferAllocated
        } else {
            BufferState::NoBuffer
        }
    }

    #[inline]
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    #[inline]
    pub fn fps_display(&self) -> &FpsDisplay {
        &self.fps
    }

    #[inline]
    pub fn frame_counter(&self) -> &FrameCounter<T> {
        &self.counter
    }

    #[inline]
    pub fn clock(&self) -> &Clock<T> {
        &self.clock
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    fn update(&mut self) {
        self.clock.update();
        self.sprite.advance(self.clock.elapsed_secs());
        self.sprite.wraparound(self.bounds.right(), self.bounds.left);
    }

    fn compose<C>(&self, canvas: &mut C, buffer: &mut B) -> Result<()>
    where
        C: Canvas<Buffer = B>,
    {
        canvas.clear(buffer, self.config.background);
        canvas.fill_rect(buffer, self.sprite.nearest(), self.config.rect_color);
        canvas.draw_text(
            buffer,
            &self.fps.text,
            self.fps.x,
            self.fps.y,
            self.config.fps_font_size,
            self.config.fps_color,
        );
        canvas.present(buffer)
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.fps.anchor_bottom(bounds.bottom(), self.config.fps_bottom_margin);
        self.sprite.center_vertically(bounds.height);
    }
}
