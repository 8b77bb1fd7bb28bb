use anyhow::{bail, Result};
use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{BackBuffer, Gpu, SurfaceErrorAction};
use crate::text::FontSystem;

use super::shapes::blit::BlitRenderer;
use super::shapes::rect::RectRenderer;
use super::shapes::text::TextRenderer;
use super::{RenderCtx, RenderTarget};

/// Result of handing a back buffer to the swapchain.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PresentOutcome {
    Presented,
    /// The surface was unavailable this tick; the buffer is kept as is.
    Skipped,
}

/// Turns a recorded back buffer into pixels on screen.
///
/// [`compose`](Self::compose) rasterizes the buffer's draw list into its
/// texture; [`present`](Self::present) copies the finished texture to the
/// swapchain. Nothing reaches the surface until the whole frame is composed.
#[derive(Default)]
pub struct Compositor {
    rects: RectRenderer,
    texts: TextRenderer,
    blit: BlitRenderer,
    fonts: FontSystem,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fonts(&self) -> &FontSystem {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontSystem {
        &mut self.fonts
    }

    /// Replays `buffer.draw_list` into the buffer texture.
    ///
    /// `viewport` is the logical size the commands were laid out in; it is
    /// stretched over the whole texture.
    pub fn compose(&mut self, gpu: &Gpu<'_>, buffer: &BackBuffer, viewport: Viewport) {
        let size = buffer.size();
        let viewport = if viewport.is_valid() {
            viewport
        } else {
            Viewport::new(size.width as f32, size.height as f32)
        };
        let scale = size.width as f32 / viewport.width;

        let mut encoder = gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sweep compose encoder"),
            });

        {
            let ctx = RenderCtx::new(gpu.device(), gpu.queue(), buffer.format(), viewport, scale);
            let mut target = RenderTarget::new(&mut encoder, buffer.view());

            // Clear first; every later pass loads.
            drop(target.clear_pass("sweep clear pass", buffer.clear.to_wgpu()));

            self.rects.render(&ctx, &mut target, &buffer.draw_list);
            self.texts.render(&ctx, &mut target, &buffer.draw_list, &self.fonts);
        }

        gpu.queue().submit(std::iter::once(encoder.finish()));
    }

    /// Copies `buffer` onto the next swapchain image and presents it.
    ///
    /// Lost or outdated surfaces are reconfigured and the frame is skipped;
    /// running out of memory is fatal.
    pub fn present(&mut self, gpu: &mut Gpu<'_>, window: &Window, buffer: &BackBuffer) -> Result<PresentOutcome> {
        let mut frame = match gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                log::debug!("surface unavailable: {err:?}");
                return match gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        Ok(PresentOutcome::Skipped)
                    }
                    SurfaceErrorAction::Fatal => bail!("surface is out of memory"),
                };
            }
        };

        {
            let size = gpu.size();
            let ctx = RenderCtx::new(
                gpu.device(),
                gpu.queue(),
                gpu.surface_format(),
                Viewport::new(size.width as f32, size.height as f32),
                1.0,
            );
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.blit.render(&ctx, &mut target, buffer);
        }

        gpu.submit(window, frame);
        Ok(PresentOutcome::Presented)
    }

    /// Drops GPU bindings that reference a back buffer about to be released.
    pub fn release_buffer(&mut self) {
        self.blit.release();
    }
}
