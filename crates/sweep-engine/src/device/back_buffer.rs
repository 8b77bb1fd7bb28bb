use anyhow::Result;
use winit::dpi::PhysicalSize;

use crate::paint::Color;
use crate::scene::DrawList;

/// Off-screen render target a frame is composed into before presentation.
///
/// Drawing only records into `draw_list`; the commands are rasterized into
/// the texture and the finished texture is copied to the swapchain in one
/// pass, so a partially drawn frame is never visible.
///
/// Dropping the buffer releases the texture.
pub struct BackBuffer {
    id: u64,
    size: PhysicalSize<u32>,
    format: wgpu::TextureFormat,
    #[allow(dead_code)]
    texture: wgpu::Texture,
    view: wgpu::TextureView,

    /// Color the texture is cleared to before replaying `draw_list`.
    pub clear: Color,

    /// Commands recorded for the frame being composed.
    pub draw_list: DrawList,
}

impl BackBuffer {
    pub(crate) fn new(
        device: &wgpu::Device,
        id: u64,
        size: PhysicalSize<u32>,
        format: wgpu::TextureFormat,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("sweep back buffer"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            id,
            size,
            format,
            texture,
            view,
            clear: Color::black(),
            draw_list: DrawList::new(),
        }
    }

    /// Unique per allocation; renderers key cached bindings on it.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Starts a new frame: sets the clear color and drops recorded commands.
    pub fn begin(&mut self, clear: Color) {
        self.clear = clear;
        self.draw_list.clear();
    }
}

/// Size of a back buffer for a surface of `requested` physical pixels.
///
/// Each dimension is clamped to `max_size` and to the device texture limit.
/// A zero-sized request cannot be allocated and is an error.
pub fn back_buffer_extent(
    requested: PhysicalSize<u32>,
    max_size: PhysicalSize<u32>,
    device_limit: u32,
) -> Result<PhysicalSize<u32>> {
    anyhow::ensure!(
        requested.width > 0 && requested.height > 0,
        "cannot allocate a {}x{} back buffer",
        requested.width,
        requested.height
    );
    anyhow::ensure!(device_limit > 0, "device reports no texture support");

    let clamp = |v: u32, max: u32| v.min(max.max(1)).min(device_limit);
    Ok(PhysicalSize::new(
        clamp(requested.width, max_size.width),
        clamp(requested.height, max_size.height),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> PhysicalSize<u32> {
        PhysicalSize::new(w, h)
    }

    #[test]
    fn extent_matches_request_when_it_fits() {
        let e = back_buffer_extent(size(800, 600), size(1920, 1080), 8192).unwrap();
        assert_eq!(e, size(800, 600));
    }

    #[test]
    fn extent_is_clamped_to_max_size() {
        let e = back_buffer_extent(size(2560, 1440), size(1280, 720), 8192).unwrap();
        assert_eq!(e, size(1280, 720));
    }

    #[test]
    fn extent_is_clamped_to_device_limit() {
        let e = back_buffer_extent(size(10_000, 600), size(20_000, 20_000), 8192).unwrap();
        assert_eq!(e, size(8192, 600));
    }

    #[test]
    fn zero_request_is_an_error() {
        let err = back_buffer_extent(size(0, 600), size(1280, 720), 8192).unwrap_err();
        assert!(err.to_string().contains("0x600"));
    }
}
