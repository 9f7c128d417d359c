use std::{borrow::Cow, fs, iter::FusedIterator, path::Path};

use crate::{
    data_structures::{
        document::Document,
        triplet::{MaterialOutcome, TextureTriplet},
    },
    error::SceneError,
};

/**
 * This module contains all logic for reading scene files and resolving their texture references.
 */
pub mod texture;

/// First four bytes of a binary glTF container.
const GLB_MAGIC: &[u8; 4] = b"glTF";

/// Read and parse the scene document at `path`.
///
/// The file is read in full and closed before parsing starts.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, SceneError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| SceneError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(path, &bytes)?;
    log::info!(
        "Loaded {}: {} materials, {} textures, {} images",
        path.display(),
        document.materials.len(),
        document.textures.len(),
        document.images.len()
    );
    Ok(document)
}

/// Parse `bytes` as either a JSON glTF document or a binary glTF container.
///
/// `path` is only used for error reporting.
pub fn parse_document(path: &Path, bytes: &[u8]) -> Result<Document, SceneError> {
    let json: Cow<[u8]> = if bytes.starts_with(GLB_MAGIC) {
        let glb = gltf::Glb::from_slice(bytes).map_err(|source| SceneError::Container {
            path: path.to_path_buf(),
            source,
        })?;
        if glb.bin.is_some() {
            log::debug!("Ignoring binary chunk of {}", path.display());
        }
        glb.json
    } else {
        Cow::Borrowed(bytes)
    };

    let value: serde_json::Value =
        serde_json::from_slice(&json).map_err(|source| SceneError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if let Some(root) = value.as_object() {
        if let Some(key) = Document::COLLECTIONS
            .into_iter()
            .find(|key| !root.contains_key(*key))
        {
            return Err(SceneError::MissingCollection {
                path: path.to_path_buf(),
                key,
            });
        }
    }

    serde_json::from_value(value).map_err(|source| SceneError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the scene at `path` and return its texture triplets as a lazy sequence.
///
/// Loading failures are returned before any triplet is produced. See
/// [`Triplets`] for how broken materials surface.
pub fn resolve_triplets(path: impl AsRef<Path>) -> Result<Triplets, SceneError> {
    Ok(Triplets::new(load_document(path)?))
}

/// Iterator over the texture triplets of a document, in material order.
///
/// Materials that lack a normal map or a metallic-roughness block are passed
/// over. The first material whose references cannot be resolved is yielded
/// as an `Err`, after which the iterator is exhausted.
#[derive(Debug)]
pub struct Triplets {
    document: Document,
    next: usize,
    done: bool,
}

impl Triplets {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            next: 0,
            done: false,
        }
    }
}

impl Iterator for Triplets {
    type Item = Result<TextureTriplet, SceneError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        while let Some(material) = self.document.materials.get(self.next) {
            let index = self.next;
            self.next += 1;
            match texture::resolve_material(&self.document, index, material) {
                MaterialOutcome::Emitted(triplet) => return Some(Ok(triplet)),
                MaterialOutcome::Skipped(_) => continue,
                MaterialOutcome::Failed(error) => {
                    self.done = true;
                    return Some(Err(error));
                }
            }
        }
        self.done = true;
        None
    }
}

impl FusedIterator for Triplets {}
