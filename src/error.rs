//! Error types for loading scene documents and resolving texture references.

use std::{fmt, path::PathBuf};

use thiserror::Error;

use crate::data_structures::triplet::TextureSlot;

/// Coarse classification of a [`SceneError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The file is missing, unreadable or not well-formed.
    Parse,
    /// The file parsed but its root does not have the expected layout.
    Schema,
    /// A material points at a texture or image that cannot be resolved.
    Reference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse error",
            ErrorKind::Schema => "schema error",
            ErrorKind::Reference => "reference error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("could not read scene file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scene file {} is not valid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("scene file {} is not a valid binary glTF container", path.display())]
    Container {
        path: PathBuf,
        #[source]
        source: gltf::Error,
    },

    #[error("scene file {} has no `{key}` array at its root", path.display())]
    MissingCollection { path: PathBuf, key: &'static str },

    #[error("scene file {} does not have the expected layout", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("material {material}: {reason}")]
    Reference {
        material: usize,
        reason: BrokenReference,
    },
}

impl SceneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SceneError::Read { .. } | SceneError::Parse { .. } | SceneError::Container { .. } => {
                ErrorKind::Parse
            }
            SceneError::MissingCollection { .. } | SceneError::Schema { .. } => ErrorKind::Schema,
            SceneError::Reference { .. } => ErrorKind::Reference,
        }
    }
}

/// Why a texture slot of an otherwise qualifying material could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BrokenReference {
    #[error("missing `{key}` while resolving {slot}")]
    MissingKey { slot: TextureSlot, key: &'static str },

    #[error("{slot} points at texture {index}, but the document has {len} textures")]
    TextureOutOfRange {
        slot: TextureSlot,
        index: usize,
        len: usize,
    },

    #[error("{slot} uses texture {texture} whose source is image {index}, but the document has {len} images")]
    ImageOutOfRange {
        slot: TextureSlot,
        texture: usize,
        index: usize,
        len: usize,
    },
}
