//! Scene data structures: the deserialized document and resolved texture sets.
//!
//! - `document` holds the typed records read from a glTF scene file
//! - `triplet` holds the per-material result of resolving its PBR textures

pub mod document;
pub mod triplet;
