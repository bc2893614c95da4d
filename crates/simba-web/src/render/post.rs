use super::helpers::{make_post_pipeline, sampler_entry, texture_entry, uniform_entry};
use super::targets::{RenderTargets, HDR_FORMAT};
use simba_core::quality::RenderSettings;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    bloom_strength: f32,
    bloom_threshold: f32,
    bloom_radius: f32,
    exposure: f32,
    texel: [f32; 2],
    fxaa: f32,
    _pad: f32,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    // one buffer per blur direction; both are written before the encoder runs
    pub(crate) uniform_h: wgpu::Buffer,
    pub(crate) uniform_v: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
    pub(crate) fxaa_pipeline: wgpu::RenderPipeline,
}

/// Bind groups that reference the current render targets.
pub(crate) struct PostBindGroups {
    pub(crate) hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
    pub(crate) ldr: wgpu::BindGroup,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            texture_entry(0),
            sampler_entry(1),
            uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let uniform = |label| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let uniform_h = uniform("post_uniforms_h");
    let uniform_v = uniform("post_uniforms_v");
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = make_post_pipeline(
        device,
        "bright_pipeline",
        &pl_single,
        post_shader,
        "fs_bright",
        HDR_FORMAT,
    );
    let blur_pipeline = make_post_pipeline(
        device,
        "blur_pipeline",
        &pl_single,
        post_shader,
        "fs_blur",
        HDR_FORMAT,
    );
    let composite_pipeline = make_post_pipeline(
        device,
        "composite_pipeline",
        &pl_composite,
        post_shader,
        "fs_composite",
        swap_format,
    );
    let fxaa_pipeline = make_post_pipeline(
        device,
        "fxaa_pipeline",
        &pl_single,
        post_shader,
        "fs_fxaa",
        swap_format,
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_h,
        uniform_v,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
        fxaa_pipeline,
    }
}

pub(crate) fn rebuild_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    targets: &RenderTargets,
    sampler: &wgpu::Sampler,
) -> PostBindGroups {
    let with_uniform = |label, view: &wgpu::TextureView, buffer: &wgpu::Buffer| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &post.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: buffer.as_entire_binding(),
                },
            ],
        })
    };
    PostBindGroups {
        hdr: with_uniform("bg_hdr", &targets.hdr_view, &post.uniform_h),
        from_bloom_a: with_uniform("bg_from_bloom_a", &targets.bloom_a_view, &post.uniform_h),
        from_bloom_b: with_uniform("bg_from_bloom_b", &targets.bloom_b_view, &post.uniform_v),
        bloom_a_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_a_only"),
            layout: &post.bgl1,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }),
        ldr: with_uniform("bg_ldr", &targets.ldr_view, &post.uniform_h),
    }
}

pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    targets: &RenderTargets,
    settings: &RenderSettings,
    exposure: f32,
    texel: [f32; 2],
) {
    let mut u = PostUniforms {
        resolution: targets.bloom_size,
        blur_dir: [1.0, 0.0],
        bloom_strength: settings.bloom_strength,
        bloom_threshold: settings.bloom_threshold,
        bloom_radius: settings.bloom_radius,
        exposure,
        texel,
        fxaa: if settings.fxaa { 1.0 } else { 0.0 },
        _pad: 0.0,
    };
    queue.write_buffer(&post.uniform_h, 0, bytemuck::bytes_of(&u));
    u.blur_dir = [0.0, 1.0];
    queue.write_buffer(&post.uniform_v, 0, bytemuck::bytes_of(&u));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
    drop(r);
}
