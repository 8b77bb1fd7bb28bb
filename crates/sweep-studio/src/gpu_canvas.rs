use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use sweep_anim::{Canvas, PixelRect, Rgb8};
use sweep_engine::coords::{Rect, Vec2, Viewport};
use sweep_engine::device::{BackBuffer, Gpu};
use sweep_engine::paint::Color;
use sweep_engine::render::{Compositor, PresentOutcome};
use sweep_engine::text::FontId;

/// Opaque linear color for an sRGB triple.
pub fn to_color(c: Rgb8) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, 255)
}

/// [`Canvas`] backed by the GPU back buffer.
///
/// Drawing calls only record into the buffer's draw list; `present` composes
/// the list into the buffer texture and copies it to the swapchain.
pub struct GpuCanvas<'a, 'w> {
    pub gpu: &'a mut Gpu<'w>,
    pub window: &'a Window,
    pub compositor: &'a mut Compositor,
    /// `None` when no system font could be loaded; text is then skipped.
    pub font: Option<FontId>,
    /// Logical size the scene is laid out in.
    pub viewport: Viewport,
    /// Largest back buffer worth allocating (the primary display size).
    pub max_buffer_size: PhysicalSize<u32>,
}

impl Canvas for GpuCanvas<'_, '_> {
    type Buffer = BackBuffer;

    fn allocate(&mut self) -> Result<BackBuffer> {
        self.gpu.allocate_back_buffer(self.max_buffer_size)
    }

    fn clear(&mut self, buffer: &mut BackBuffer, color: Rgb8) {
        buffer.begin(to_color(color));
    }

    fn fill_rect(&mut self, buffer: &mut BackBuffer, rect: PixelRect, color: Rgb8) {
        buffer.draw_list.push_solid_rect(
            Rect::from_pixels(rect.x, rect.y, rect.width, rect.height),
            to_color(color),
        );
    }

    fn draw_text(&mut self, buffer: &mut BackBuffer, text: &str, x: i32, y: i32, size: f32, color: Rgb8) {
        let Some(font) = self.font else { return };
        buffer.draw_list.push_text(
            text,
            font,
            size,
            to_color(color),
            Vec2::from_pixels(x, y),
        );
    }

    fn present(&mut self, buffer: &mut BackBuffer) -> Result<()> {
        self.compositor.compose(self.gpu, buffer, self.viewport);

        let outcome = self
            .compositor
            .present(self.gpu, self.window, buffer)
            .context("failed to present to the window surface")?;

        if outcome == PresentOutcome::Skipped {
            log::trace!("surface not ready; frame skipped");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_maps_to_opaque_black() {
        assert_eq!(to_color(Rgb8::BLACK).to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn chartreuse_is_linearized() {
        let [r, g, b, a] = to_color(Rgb8::CHARTREUSE).to_array();
        // sRGB 127 is roughly 0.212 linear.
        assert!((r - 0.212).abs() < 0.01);
        assert!((g - 1.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
        assert_eq!(a, 1.0);
    }
}
