use winit::dpi::PhysicalSize;

/// Depth buffer format: 24-bit depth paired with an 8-bit stencil.
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24PlusStencil8;

/// Depth value every frame starts from; fragments passing the `Less`
/// comparison overwrite it.
pub const DEPTH_CLEAR_VALUE: f32 = 1.0;

/// Stencil value every frame starts from.
pub const STENCIL_CLEAR_VALUE: u32 = 0;

/// GPU-side depth/stencil image sized to the surface at creation time.
///
/// Created once and never resized; the runtime opens the window non-resizable
/// so the surface dimensions stay fixed for the process lifetime.
pub struct DepthTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl DepthTexture {
    pub fn new(device: &wgpu::Device, size: PhysicalSize<u32>) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("trigon depth texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }

    /// Returns the attachment view for render passes.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Returns the underlying texture.
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_format_carries_stencil() {
        assert_eq!(DEPTH_FORMAT, wgpu::TextureFormat::Depth24PlusStencil8);
        assert!(DEPTH_FORMAT.is_depth_stencil_format());
    }

    #[test]
    fn clear_values_reset_everything() {
        assert_eq!(DEPTH_CLEAR_VALUE, 1.0);
        assert_eq!(STENCIL_CLEAR_VALUE, 0);
    }
}
