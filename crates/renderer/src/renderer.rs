//! Main renderer orchestration.

use bytemuck::{Pod, Zeroable};
use tracing::{debug, info};
use wgpu::util::DeviceExt;

use viewer_core::Result;
use viewer_platform::Window;
use viewer_scene::{Camera, ModelInstance, Scene};

use crate::context::GpuContext;
use crate::depth::{DEPTH_FORMAT, DepthBuffer};
use crate::mesh::{GpuModel, Vertex};

/// Camera uniform, written once per frame.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

/// Light uniform: rgb = color, a = intensity.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
struct LightsUniform {
    ambient: [f32; 4],
    sun_direction: [f32; 4],
    sun_color: [f32; 4],
}

/// Renders the scene with a single forward pass.
pub struct Renderer {
    context: GpuContext,
    depth: DepthBuffer,
    pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    models: Vec<GpuModel>,
    frame_count: u64,
}

impl Renderer {
    /// Create the renderer for a window.
    pub fn new(window: &Window) -> Result<Self> {
        let context = GpuContext::new(window.inner_arc(), window.width(), window.height())?;
        let device = context.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("forward shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame bind group layout"),
            entries: &[
                uniform_layout_entry(0, wgpu::ShaderStages::VERTEX),
                uniform_layout_entry(1, wgpu::ShaderStages::FRAGMENT),
            ],
        });

        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object bind group layout"),
            entries: &[uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX_FRAGMENT,
            )],
        });

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("camera uniform"),
            contents: bytemuck::bytes_of(&CameraUniform {
                view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let lights_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("lights uniform"),
            contents: bytemuck::bytes_of(&LightsUniform::zeroed()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame bind group"),
            layout: &frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: lights_buffer.as_entire_binding(),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("forward pipeline layout"),
            bind_group_layouts: &[&frame_layout, &object_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("forward pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.surface_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                front_face: wgpu::FrontFace::Ccw,
                // Loaded assets may have either winding; draw both sides.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let (width, height) = context.size();
        let depth = DepthBuffer::new(device, width, height);

        info!("Renderer initialized");

        Ok(Self {
            context,
            depth,
            pipeline,
            camera_buffer,
            lights_buffer,
            frame_bind_group,
            object_layout,
            models: Vec::new(),
            frame_count: 0,
        })
    }

    /// Upload a scene instance's mesh data to the GPU.
    ///
    /// Call once per model added to the scene; draw order follows upload
    /// order.
    pub fn upload_model(&mut self, instance: &ModelInstance) {
        let gpu_model = GpuModel::upload(self.context.device(), &self.object_layout, instance);
        debug!(
            "Uploaded '{}' ({} meshes) to the GPU",
            gpu_model.name,
            gpu_model.meshes.len()
        );
        self.models.push(gpu_model);
    }

    /// Resize the surface and depth buffer. Zero-sized extents are ignored
    /// by the caller; this clamps defensively to one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        let (w, h) = self.context.size();
        self.depth = DepthBuffer::new(self.context.device(), w, h);
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Render one frame of the scene from the camera's viewpoint.
    pub fn render_frame(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        let frame = match self.context.surface().get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(viewer_core::Error::Gpu(e.to_string())),
        };

        let camera_uniform = CameraUniform {
            view_proj: camera.view_projection_matrix().to_cols_array_2d(),
        };
        self.context
            .queue()
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&camera_uniform));

        let lights_uniform = LightsUniform {
            ambient: color_intensity(scene.ambient.color, scene.ambient.intensity),
            sun_direction: scene.sun.direction.extend(0.0).to_array(),
            sun_color: color_intensity(scene.sun.color, scene.sun.intensity),
        };
        self.context
            .queue()
            .write_buffer(&self.lights_buffer, 0, bytemuck::bytes_of(&lights_uniform));

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("frame encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("forward pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: scene.background.x as f64,
                            g: scene.background.y as f64,
                            b: scene.background.z as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.depth.view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.frame_bind_group, &[]);

            for model in &self.models {
                for mesh in &model.meshes {
                    pass.set_bind_group(1, &mesh.bind_group, &[]);
                    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                    pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..mesh.index_count, 0, 0..1);
                }
            }
        }

        self.context.queue().submit(Some(encoder.finish()));
        frame.present();
        self.frame_count += 1;

        Ok(())
    }
}

fn uniform_layout_entry(
    binding: u32,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn color_intensity(color: glam::Vec3, intensity: f32) -> [f32; 4] {
    [color.x, color.y, color.z, intensity]
}
