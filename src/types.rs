//! Core types for Heritage
//!
//! Record shapes mirror the published datasets key for key. Decoding is
//! lenient: a missing key falls back to an empty value, unknown keys are
//! ignored, `null` counts as missing, but a key holding the wrong JSON type
//! is still an error.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// `null` decodes to the field's empty value, the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parallel English and Arabic text for the same field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LocalizedString {
    #[serde(deserialize_with = "null_as_default")]
    pub en: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ar: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Coordinates {
    #[serde(deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub longitude: f64,
}

// ============================================================================
// Exhibits
// ============================================================================

/// A public art site or installation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Exhibit {
    #[serde(rename = "exhibit_id", deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub site_name: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub site_brief_description: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub name_en: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_ar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub brief_description: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub generated_description: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_description: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_name: LocalizedString,
    #[serde(deserialize_with = "null_as_default")]
    pub location_description: LocalizedString,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub relevant_link: String,
    /// Serialized as `null` when the exhibit has no audio guide
    pub audio_guide_link: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub coords: Coordinates,
    #[serde(deserialize_with = "null_as_default")]
    pub ownership: String,
    #[serde(deserialize_with = "null_as_default")]
    pub recreation_level: String,
}

// ============================================================================
// Artefacts
// ============================================================================

/// Museum that holds an artefact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Museum {
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(rename = "labelEN", deserialize_with = "null_as_default")]
    pub label_en: String,
    #[serde(rename = "labelAR", deserialize_with = "null_as_default")]
    pub label_ar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Weekday {
    #[serde(deserialize_with = "null_as_default")]
    pub number: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OpeningTime {
    #[serde(deserialize_with = "null_as_default")]
    pub opening_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub closing_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weekday: Weekday,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FocalPoint {
    #[serde(deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub y: i64,
}

/// One rendition of an artefact photograph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectImage {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub height: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub focal_point: FocalPoint,
    #[serde(rename = "altTextEN", deserialize_with = "null_as_default")]
    pub alt_text_en: String,
    #[serde(rename = "altTextAR", deserialize_with = "null_as_default")]
    pub alt_text_ar: String,
    #[serde(rename = "creditLineEN", deserialize_with = "null_as_default")]
    pub credit_line_en: String,
    #[serde(rename = "creditLineAR", deserialize_with = "null_as_default")]
    pub credit_line_ar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ObjectImages {
    #[serde(deserialize_with = "null_as_default")]
    pub original: Vec<ObjectImage>,
    #[serde(deserialize_with = "null_as_default")]
    pub card: Vec<ObjectImage>,
}

/// A catalogued museum object, keyed by its object number
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Artefact {
    #[serde(deserialize_with = "null_as_default")]
    pub object_number: String,
    #[serde(rename = "titleEN", deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(rename = "titleAR", deserialize_with = "null_as_default")]
    pub title_ar: String,
    #[serde(rename = "objectNameEN", deserialize_with = "null_as_default")]
    pub object_name_en: String,
    #[serde(rename = "objectNameAR", deserialize_with = "null_as_default")]
    pub object_name_ar: String,
    #[serde(rename = "artistEN", deserialize_with = "null_as_default")]
    pub artist_en: String,
    #[serde(rename = "artistAR", deserialize_with = "null_as_default")]
    pub artist_ar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub museum: Museum,
    #[serde(deserialize_with = "null_as_default")]
    pub opening_times: Vec<OpeningTime>,
    #[serde(rename = "summaryEN", deserialize_with = "null_as_default")]
    pub summary_en: String,
    #[serde(rename = "summaryAR", deserialize_with = "null_as_default")]
    pub summary_ar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_images: ObjectImages,
    #[serde(deserialize_with = "null_as_default")]
    #[schema(value_type = Vec<Object>)]
    pub related_webpages: Vec<serde_json::Value>,
    #[serde(rename = "object3dEmbed", deserialize_with = "null_as_default")]
    #[schema(value_type = Vec<Object>)]
    pub object_3d_embed: Vec<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub coords: Coordinates,
}

/// Paginated wrapper around the artefact list as published upstream.
///
/// Only `results` is served; the pagination fields are kept for inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtefactEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    pub next: Option<String>,
    /// Always empty in published data, so its shape is left opaque
    pub previous: serde_json::Value,
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<Artefact>,
}
