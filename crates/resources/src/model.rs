//! Model and mesh loading from glTF files.

use std::path::Path;

use glam::Vec3;

use crate::error::{ResourceError, ResourceResult};

/// A mesh containing vertex and index data.
#[derive(Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Index data
    pub indices: Vec<u32>,
    /// Base color factor from the glTF material (linear RGBA).
    pub base_color: [f32; 4],
}

impl Mesh {
    /// Number of triangles in this mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A model containing one or more meshes.
#[derive(Debug, Default)]
pub struct Model {
    /// Meshes in this model
    pub meshes: Vec<Mesh>,
    /// Axis-aligned bounding box minimum
    pub aabb_min: Vec3,
    /// Axis-aligned bounding box maximum
    pub aabb_max: Vec3,
}

impl Model {
    /// Load a model from a glTF file.
    ///
    /// # Arguments
    /// * `path` - Path to the .gltf or .glb file
    ///
    /// # Returns
    /// The loaded model or an error
    pub fn load(path: &Path) -> ResourceResult<Self> {
        if !path.exists() {
            return Err(ResourceError::FileNotFound(path.to_path_buf()));
        }

        let (document, buffers, _images) =
            gltf::import(path).map_err(|e| ResourceError::GltfLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut meshes = Vec::new();
        let mut aabb_min = Vec3::splat(f32::INFINITY);
        let mut aabb_max = Vec3::splat(f32::NEG_INFINITY);

        for mesh in document.meshes() {
            for primitive in mesh.primitives() {
                let reader = primitive.reader(|buffer| {
                    buffers.get(buffer.index()).map(|data| data.0.as_slice())
                });

                let positions: Vec<Vec3> = reader
                    .read_positions()
                    .ok_or(ResourceError::NoPositionData)?
                    .map(Vec3::from_array)
                    .collect();

                for p in &positions {
                    aabb_min = aabb_min.min(*p);
                    aabb_max = aabb_max.max(*p);
                }

                let normals: Vec<Vec3> = match reader.read_normals() {
                    Some(iter) => iter.map(Vec3::from_array).collect(),
                    // Flat fallback; fine for untextured preview geometry.
                    None => vec![Vec3::Y; positions.len()],
                };

                let indices: Vec<u32> = match reader.read_indices() {
                    Some(indices) => indices.into_u32().collect(),
                    None => (0..positions.len() as u32).collect(),
                };

                let base_color = primitive
                    .material()
                    .pbr_metallic_roughness()
                    .base_color_factor();

                meshes.push(Mesh {
                    positions,
                    normals,
                    indices,
                    base_color,
                });
            }
        }

        if meshes.is_empty() {
            return Err(ResourceError::NoMeshes(path.to_path_buf()));
        }

        tracing::debug!(
            "Loaded '{}': {} meshes, {} triangles",
            path.display(),
            meshes.len(),
            meshes.iter().map(Mesh::triangle_count).sum::<usize>()
        );

        Ok(Self {
            meshes,
            aabb_min,
            aabb_max,
        })
    }

    /// Total number of vertices across all meshes.
    pub fn total_vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.positions.len()).sum()
    }

    /// Total number of triangles across all meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }
}
