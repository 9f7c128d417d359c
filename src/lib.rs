//! scene-baker
//!
//! A small helper for inspecting glTF scene files before baking. Given a
//! scene, it finds every material that carries a normal map together with a
//! metallic-roughness block and resolves the base color, normal and
//! metallic-roughness textures to the image files behind them.
//!
//! High-level modules
//! - `cli`: argument parsing, logging setup and the `--howto`/`--json` actions
//! - `data_structures`: typed scene records and resolved texture triplets
//! - `error`: error taxonomy for parsing, layout and reference failures
//! - `resources`: reading scene files and resolving texture references
//!

pub mod cli;
pub mod data_structures;
pub mod error;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use data_structures::document::Document;
pub use data_structures::triplet::{MaterialOutcome, SkipReason, TextureSlot, TextureTriplet};
pub use error::{BrokenReference, ErrorKind, SceneError};
pub use resources::{Triplets, load_document, resolve_triplets};
