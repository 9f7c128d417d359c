use std::{
    path::{Path, PathBuf},
    process::{Command, Output},
};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Path of a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scene document written to a scratch directory that lives as long as this value.
pub struct SceneFile {
    _dir: TempDir,
    path: PathBuf,
}

impl SceneFile {
    pub fn new(document: &Value) -> Self {
        Self::with_bytes(&serde_json::to_vec_pretty(document).expect("serialize scene"))
    }

    pub fn with_bytes(bytes: &[u8]) -> Self {
        let dir = TempDir::new().expect("create scratch dir");
        let path = dir.path().join("scene.gltf");
        std::fs::write(&path, bytes).expect("write scene");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_str(&self) -> &str {
        self.path.to_str().expect("utf-8 scratch path")
    }
}

/// One texture and one image per entry of `uris`, so texture `i` resolves to `uris[i]`.
pub fn scene_with_images(uris: &[&str], materials: Vec<Value>) -> Value {
    let textures: Vec<Value> = (0..uris.len()).map(|i| json!({ "source": i })).collect();
    let images: Vec<Value> = uris.iter().map(|uri| json!({ "uri": uri })).collect();
    json!({
        "textures": textures,
        "images": images,
        "materials": materials,
    })
}

/// A material with a normal map and a metallic-roughness block.
pub fn pbr_material(normal: usize, base_color: usize, metallic_roughness: usize) -> Value {
    json!({
        "normalTexture": { "index": normal },
        "pbrMetallicRoughness": {
            "baseColorTexture": { "index": base_color },
            "metallicRoughnessTexture": { "index": metallic_roughness }
        }
    })
}

/// Run the `scene-baker` binary with `args`.
pub fn scene_baker(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scene-baker"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn scene-baker")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
