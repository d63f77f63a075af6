//! Integration tests for model loading.

use std::path::Path;

use viewer_resources::{Model, ResourceError};

/// A single triangle with positions and indices in an embedded buffer.
const TRIANGLE_GLTF: &str = r#"{
    "asset": { "version": "2.0" },
    "scene": 0,
    "scenes": [{ "nodes": [0] }],
    "nodes": [{ "mesh": 0 }],
    "meshes": [{
        "primitives": [{
            "attributes": { "POSITION": 0 },
            "indices": 1
        }]
    }],
    "accessors": [
        {
            "bufferView": 0,
            "componentType": 5126,
            "count": 3,
            "type": "VEC3",
            "min": [0.0, 0.0, 0.0],
            "max": [1.0, 1.0, 0.0]
        },
        {
            "bufferView": 1,
            "componentType": 5123,
            "count": 3,
            "type": "SCALAR"
        }
    ],
    "bufferViews": [
        { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
        { "buffer": 0, "byteOffset": 36, "byteLength": 6 }
    ],
    "buffers": [{
        "byteLength": 42,
        "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAIA"
    }]
}"#;

fn write_triangle(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("triangle.gltf");
    std::fs::write(&path, TRIANGLE_GLTF).unwrap();
    path
}

#[test]
fn loads_a_minimal_gltf_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_triangle(dir.path());

    let model = Model::load(&path).expect("failed to load triangle glTF");

    assert_eq!(model.meshes.len(), 1);
    let mesh = &model.meshes[0];
    assert_eq!(mesh.positions.len(), 3);
    assert_eq!(
        mesh.normals.len(),
        mesh.positions.len(),
        "normals fallback should match position count"
    );
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.base_color, [1.0, 1.0, 1.0, 1.0]);

    assert_eq!(model.total_vertex_count(), 3);
    assert_eq!(model.total_triangle_count(), 1);
    assert!(model.aabb_min.x < model.aabb_max.x);
    assert!(model.aabb_min.y < model.aabb_max.y);
}

#[test]
fn missing_file_is_reported_as_such() {
    let err = Model::load(Path::new("no/such/model.glb")).unwrap_err();
    assert!(matches!(err, ResourceError::FileNotFound(_)));
}

#[test]
fn loads_a_real_asset_when_present() {
    // Exercised locally when the default assets are checked out.
    let model_path = Path::new("../../assets/models/car.glb");
    if !model_path.exists() {
        println!("Skipping test: model file not found at {:?}", model_path);
        return;
    }

    let model = Model::load(model_path).expect("failed to load car model");
    assert!(!model.meshes.is_empty(), "model should have at least one mesh");
    for (i, mesh) in model.meshes.iter().enumerate() {
        assert!(!mesh.positions.is_empty(), "mesh {} should have positions", i);
        assert_eq!(
            mesh.normals.len(),
            mesh.positions.len(),
            "mesh {} should have one normal per position",
            i
        );
        assert!(!mesh.indices.is_empty(), "mesh {} should have indices", i);
    }
}
