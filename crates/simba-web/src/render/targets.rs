use super::helpers;
use wgpu;

pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen targets for one canvas.
///
/// - `hdr_*` holds the lit scene in Rgba16Float.
/// - `bloom_*` are half-resolution ping-pong buffers for bright pass and blur.
/// - `ldr_*` receives the tonemapped composite in the surface format and feeds FXAA.
/// - `depth_*` backs the scene pass.
pub(crate) struct RenderTargets {
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) ldr_view: wgpu::TextureView,
    pub(crate) depth_view: wgpu::TextureView,
    // textures are kept alive alongside their views
    _textures: [wgpu::Texture; 5],
    pub(crate) bloom_size: [f32; 2],
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        ldr_format: wgpu::TextureFormat,
    ) -> Self {
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT, usage);
        let bw = (width.max(1) / 2).max(1);
        let bh = (height.max(1) / 2).max(1);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, usage);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, usage);
        let (ldr, ldr_view) =
            helpers::create_color_texture(device, "ldr_tex", width, height, ldr_format, usage);
        let (depth, depth_view) = helpers::create_depth_texture(device, width, height);
        Self {
            hdr_view,
            bloom_a_view,
            bloom_b_view,
            ldr_view,
            depth_view,
            _textures: [hdr, bloom_a, bloom_b, ldr, depth],
            bloom_size: [bw as f32, bh as f32],
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        ldr_format: wgpu::TextureFormat,
    ) {
        *self = Self::new(device, width, height, ldr_format);
    }
}
