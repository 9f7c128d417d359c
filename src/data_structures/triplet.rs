//! Resolved PBR texture sets and the per-material outcome of resolving them.

use std::{fmt, path::Path};

use crate::error::SceneError;

/// One of the three texture slots a qualifying material must provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    BaseColor,
    Normal,
    MetallicRoughness,
}

impl TextureSlot {
    /// The glTF key under which the slot's texture reference lives.
    pub fn key(self) -> &'static str {
        match self {
            TextureSlot::BaseColor => "baseColorTexture",
            TextureSlot::Normal => "normalTexture",
            TextureSlot::MetallicRoughness => "metallicRoughnessTexture",
        }
    }
}

impl fmt::Display for TextureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The image URIs backing the base color, normal and metallic-roughness
/// textures of one material.
///
/// Displays as `"<base color> <normal> <metallic-roughness>"`, which is the
/// line format printed by the `--json` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureTriplet {
    pub base_color: String,
    pub normal: String,
    pub metallic_roughness: String,
}

impl TextureTriplet {
    pub fn get(&self, slot: TextureSlot) -> &str {
        match slot {
            TextureSlot::BaseColor => &self.base_color,
            TextureSlot::Normal => &self.normal,
            TextureSlot::MetallicRoughness => &self.metallic_roughness,
        }
    }

    /// Join every URI onto `dir`. Absolute paths and `data:` URIs are kept
    /// as they are.
    pub fn rebased(&self, dir: &Path) -> TextureTriplet {
        let join = |uri: &str| {
            if uri.starts_with("data:") {
                uri.to_string()
            } else {
                dir.join(uri).display().to_string()
            }
        };
        TextureTriplet {
            base_color: join(&self.base_color),
            normal: join(&self.normal),
            metallic_roughness: join(&self.metallic_roughness),
        }
    }
}

impl fmt::Display for TextureTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.base_color, self.normal, self.metallic_roughness
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NoNormalTexture,
    NoMetallicRoughness,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoNormalTexture => f.write_str("no normalTexture"),
            SkipReason::NoMetallicRoughness => f.write_str("no pbrMetallicRoughness"),
        }
    }
}

/// What happened to a single material during resolution.
#[derive(Debug)]
pub enum MaterialOutcome {
    Emitted(TextureTriplet),
    Skipped(SkipReason),
    Failed(SceneError),
}
