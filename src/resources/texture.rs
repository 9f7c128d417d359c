use crate::{
    data_structures::{
        document::{Document, Material, PbrMetallicRoughness, TextureRef},
        triplet::{MaterialOutcome, SkipReason, TextureSlot, TextureTriplet},
    },
    error::{BrokenReference, SceneError},
};

/// Follow `reference -> textures[index].source -> images[source].uri`.
///
/// `reference` is `None` when the slot's texture object itself is absent,
/// which is reported as a missing key named after the slot.
pub fn resolve_uri<'a>(
    document: &'a Document,
    slot: TextureSlot,
    reference: Option<&TextureRef>,
) -> Result<&'a str, BrokenReference> {
    let missing = |key| BrokenReference::MissingKey { slot, key };

    let reference = reference.ok_or_else(|| missing(slot.key()))?;
    let index = reference.index.ok_or_else(|| missing("index"))?;
    let texture = document
        .textures
        .get(index)
        .ok_or(BrokenReference::TextureOutOfRange {
            slot,
            index,
            len: document.textures.len(),
        })?;
    let source = texture.source.ok_or_else(|| missing("source"))?;
    let image = document
        .images
        .get(source)
        .ok_or(BrokenReference::ImageOutOfRange {
            slot,
            texture: index,
            index: source,
            len: document.images.len(),
        })?;
    image.uri.as_deref().ok_or_else(|| missing("uri"))
}

/// `normal` and `pbr` are `None` when the key exists but holds `null`.
fn resolve_triplet(
    document: &Document,
    normal: Option<&TextureRef>,
    pbr: Option<&PbrMetallicRoughness>,
) -> Result<TextureTriplet, BrokenReference> {
    let base_color = resolve_uri(
        document,
        TextureSlot::BaseColor,
        pbr.and_then(|pbr| pbr.base_color_texture.as_ref()),
    )?;
    let normal = match normal {
        Some(normal) => resolve_uri(document, TextureSlot::Normal, Some(normal))?,
        None => {
            return Err(BrokenReference::MissingKey {
                slot: TextureSlot::Normal,
                key: "index",
            });
        }
    };
    let metallic_roughness = resolve_uri(
        document,
        TextureSlot::MetallicRoughness,
        pbr.and_then(|pbr| pbr.metallic_roughness_texture.as_ref()),
    )?;

    Ok(TextureTriplet {
        base_color: base_color.to_string(),
        normal: normal.to_string(),
        metallic_roughness: metallic_roughness.to_string(),
    })
}

/// Resolve the material at position `index` of `document.materials`.
///
/// Materials without a `normalTexture` key or without a `pbrMetallicRoughness`
/// key are skipped. Any other missing key, `null` value or dangling index
/// fails the material.
pub fn resolve_material(document: &Document, index: usize, material: &Material) -> MaterialOutcome {
    let Some(normal) = material.normal_texture.as_ref() else {
        log::debug!("Skipping material {index}: {}", SkipReason::NoNormalTexture);
        return MaterialOutcome::Skipped(SkipReason::NoNormalTexture);
    };
    let Some(pbr) = material.pbr_metallic_roughness.as_ref() else {
        log::debug!("Skipping material {index}: {}", SkipReason::NoMetallicRoughness);
        return MaterialOutcome::Skipped(SkipReason::NoMetallicRoughness);
    };

    match resolve_triplet(document, normal.as_ref(), pbr.as_ref()) {
        Ok(triplet) => MaterialOutcome::Emitted(triplet),
        Err(reason) => MaterialOutcome::Failed(SceneError::Reference {
            material: index,
            reason,
        }),
    }
}

/// Resolve every material in document order, isolating failures per material.
pub fn material_outcomes(document: &Document) -> impl Iterator<Item = MaterialOutcome> + '_ {
    document
        .materials
        .iter()
        .enumerate()
        .map(|(index, material)| resolve_material(document, index, material))
}
