//! Typed view of the parts of a glTF scene document this crate reads.
//!
//! Only `textures`, `images` and `materials` are deserialized; every other key
//! of the document is ignored. Keys that a material may legitimately omit are
//! modeled as [`Option`] so that resolution can tell "absent" apart from
//! "present but broken". The two keys that decide whether a material is
//! resolved at all are doubly optional: the outer `Option` records whether
//! the key exists, the inner one whether its value is non-null.

use serde::{Deserialize, Deserializer};

/// The three root collections of a scene document, in document order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Document {
    pub textures: Vec<Texture>,
    pub images: Vec<Image>,
    pub materials: Vec<Material>,
}

impl Document {
    /// Root keys every document must carry, in the order they are checked.
    pub const COLLECTIONS: [&'static str; 3] = ["textures", "images", "materials"];
}

/// Indirection from a texture slot to an image.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Texture {
    /// Index into [`Document::images`].
    pub source: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Image {
    /// Path of the pixel file, relative to the scene file or absolute.
    pub uri: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(default, deserialize_with = "present")]
    pub normal_texture: Option<Option<TextureRef>>,
    #[serde(default, deserialize_with = "present")]
    pub pbr_metallic_roughness: Option<Option<PbrMetallicRoughness>>,
}

/// Only called for keys that exist, so a `null` value becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    pub base_color_texture: Option<TextureRef>,
    pub metallic_roughness_texture: Option<TextureRef>,
}

/// `{ "index": n }` object pointing into [`Document::textures`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TextureRef {
    pub index: Option<usize>,
}
