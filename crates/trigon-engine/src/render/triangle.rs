use anyhow::Result;
use bytemuck::{Pod, Zeroable};

use crate::device::DEPTH_FORMAT;

use super::shader;
use super::{RenderCtx, RenderTarget};

/// Clear color applied at the start of every presented frame.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.3,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// Interleaved triangle vertex: clip-space position + straight RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The one static mesh this renderer draws. Uploaded once, never mutated.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex {
        position: [1.0, -1.0, 0.0, 1.0],
        color: [1.0, 0.0, 0.0, 1.0],
    },
    Vertex {
        position: [-1.0, -1.0, 0.0, 1.0],
        color: [0.0, 1.0, 0.0, 1.0],
    },
    Vertex {
        position: [0.0, 1.0, 0.0, 1.0],
        color: [0.0, 0.0, 1.0, 1.0],
    },
];

const TRIANGLE_SHADER: &str = include_str!("shaders/triangle.wgsl");

/// Renderer for the static triangle.
///
/// All resources are built eagerly in [`new`](Self::new): a shader compile
/// error fails construction and no pipeline is ever created. After
/// construction the renderer is immutable; [`render`](Self::render) only
/// records commands.
pub struct TriangleRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
}

impl TriangleRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Result<Self> {
        let module = shader::compile(ctx.device, "trigon triangle shader", TRIANGLE_SHADER)?;
        let vertex_buffer = create_vertex_buffer(ctx.device);
        let pipeline = create_pipeline(ctx.device, &module, ctx.surface_format);

        Ok(Self {
            pipeline,
            vertex_buffer,
        })
    }

    /// Records the triangle draw into `target`.
    ///
    /// The color/depth attachments were cleared by the frame's clear pass, so
    /// both load as-is here.
    pub fn render(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("trigon triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: target.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        rpass.draw(0..3, 0..1);
    }
}

/// Allocates the 96-byte vertex buffer mapped at creation, fills it with the
/// fixed triangle data in one write, and unmaps it. After the unmap the
/// buffer is GPU-exclusive; no update path exists.
fn create_vertex_buffer(device: &wgpu::Device) -> wgpu::Buffer {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("trigon triangle vbo"),
        size: std::mem::size_of_val(&TRIANGLE_VERTICES) as u64,
        usage: wgpu::BufferUsages::VERTEX,
        mapped_at_creation: true,
    });

    buffer
        .slice(..)
        .get_mapped_range_mut()
        .copy_from_slice(bytemuck::cast_slice(&TRIANGLE_VERTICES));
    buffer.unmap();

    buffer
}

/// Depth test configuration: write-enabled, closer fragments pass.
fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    module: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    // The shader binds no textures or uniforms; the resource layout is empty.
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("trigon triangle pipeline layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("trigon triangle pipeline"),
        layout: Some(&layout),

        vertex: wgpu::VertexState {
            module,
            entry_point: Some("vertex_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module,
            entry_point: Some("fragment_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(depth_stencil_state()),
        multisample: wgpu::MultisampleState::default(),

        multiview_mask: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── vertex data ───────────────────────────────────────────────────────

    #[test]
    fn vertex_stride_is_32_bytes() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn triangle_upload_is_the_fixed_24_floats() {
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 96);

        let floats: &[f32] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        let expected: [f32; 24] = [
            1.0, -1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, //
            -1.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0,
        ];
        assert_eq!(floats, &expected[..]);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_matches_shader_bindings() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x4);
        assert_eq!(layout.attributes[1].shader_location, 1);
        assert_eq!(layout.attributes[1].offset, 16);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x4);
    }

    // ── fixed-function state ──────────────────────────────────────────────

    #[test]
    fn clear_color_is_fixed_gray() {
        assert_eq!(CLEAR_COLOR.r, 0.3);
        assert_eq!(CLEAR_COLOR.g, 0.3);
        assert_eq!(CLEAR_COLOR.b, 0.3);
        assert_eq!(CLEAR_COLOR.a, 1.0);
    }

    #[test]
    fn depth_test_passes_closer_fragments() {
        let ds = depth_stencil_state();
        assert_eq!(ds.format, crate::device::DEPTH_FORMAT);
        assert!(ds.depth_write_enabled);
        assert_eq!(ds.depth_compare, wgpu::CompareFunction::Less);
    }

    // ── shader source contract ────────────────────────────────────────────

    #[test]
    fn shader_declares_both_entry_points() {
        assert!(TRIANGLE_SHADER.contains("fn vertex_main"));
        assert!(TRIANGLE_SHADER.contains("fn fragment_main"));
    }
}
