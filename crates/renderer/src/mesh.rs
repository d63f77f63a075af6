//! GPU copies of loaded models.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use viewer_scene::ModelInstance;

/// Vertex layout for the forward pipeline.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Per-object uniform: world matrix plus the mesh's base color.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub base_color: [f32; 4],
}

/// One mesh uploaded to the GPU.
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    pub bind_group: wgpu::BindGroup,
}

/// A model's GPU resources.
pub struct GpuModel {
    pub name: String,
    pub meshes: Vec<GpuMesh>,
}

impl GpuModel {
    /// Upload an instance's mesh data, baking its world transform into the
    /// per-mesh uniforms.
    pub fn upload(
        device: &wgpu::Device,
        object_layout: &wgpu::BindGroupLayout,
        instance: &ModelInstance,
    ) -> Self {
        let model_matrix = instance.transform.matrix().to_cols_array_2d();
        let mut meshes = Vec::with_capacity(instance.model.meshes.len());

        for mesh in &instance.model.meshes {
            let vertices: Vec<Vertex> = mesh
                .positions
                .iter()
                .zip(&mesh.normals)
                .map(|(p, n)| Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                })
                .collect();

            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh indices"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

            let uniform = ObjectUniform {
                model: model_matrix,
                base_color: mesh.base_color,
            };
            let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("object uniform"),
                contents: bytemuck::bytes_of(&uniform),
                usage: wgpu::BufferUsages::UNIFORM,
            });

            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("object bind group"),
                layout: object_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

            meshes.push(GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: mesh.indices.len() as u32,
                bind_group,
            });
        }

        Self {
            name: instance.name.clone(),
            meshes,
        }
    }
}
