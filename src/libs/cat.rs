//! Cat profiles and their client-side validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Breed catalogue offered when adding a cat. Picking "Other" asks for free text.
pub const BREEDS: [&str; 7] = [
    "Just a cute cat",
    "Siamese",
    "British Shorthair",
    "Scottish Fold",
    "Sphynx",
    "Persian",
    OTHER_BREED,
];

pub const OTHER_BREED: &str = "Other";

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const DEFAULT_IMAGE_EXTENSION: &str = "jpg";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatError {
    #[error("Please enter a name for your pet")]
    MissingName,
    #[error("Please enter a breed for your pet")]
    MissingBreed,
    #[error("Please enter a weight for your pet")]
    MissingWeight,
    #[error("Please enter a valid weight for your pet")]
    InvalidWeight,
    #[error("cat record has no id")]
    MissingId,
    #[error("No cat with id {0}")]
    NotFound(String),
    #[error("No cats yet. Add one with `catfeed cats add`")]
    NoCats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cat {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Cat {
    pub fn apply(&mut self, patch: CatPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(breed) = patch.breed {
            self.breed = Some(breed);
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
    }
}

/// A validated cat ready to be created on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCat {
    pub name: String,
    pub breed: String,
    pub weight: f64,
}

impl NewCat {
    pub fn validate(name: &str, breed: &str, weight: &str) -> Result<Self, CatError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatError::MissingName);
        }
        let breed = breed.trim();
        if breed.is_empty() {
            return Err(CatError::MissingBreed);
        }
        Ok(Self {
            name: name.to_string(),
            breed: breed.to_string(),
            weight: parse_weight(weight)?,
        })
    }
}

/// Partial update of a cat profile; unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub weight: Option<f64>,
}

impl CatPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.weight.is_none()
    }
}

/// Parses a weight in kilograms; must be a positive number.
pub fn parse_weight(text: &str) -> Result<f64, CatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CatError::MissingWeight);
    }
    match text.parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => Ok(weight),
        _ => Err(CatError::InvalidWeight),
    }
}

/// Upload file name and MIME type for a cat picture: `cat_<id>.<ext>`.
pub fn image_part_name(cat_id: &str, path: &Path) -> (String, String) {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| DEFAULT_IMAGE_EXTENSION.to_string());

    (format!("cat_{}.{}", cat_id, extension), format!("image/{}", extension))
}

/// Picks the cat a command acts on.
///
/// An explicit `requested` id must exist. Otherwise the session's `current`
/// cat is used while it still exists, falling back to the first cat.
pub fn resolve<'a>(cats: &'a [Cat], requested: Option<&str>, current: Option<&str>) -> Result<&'a Cat, CatError> {
    if let Some(id) = requested {
        return cats.iter().find(|cat| cat.id == id).ok_or_else(|| CatError::NotFound(id.to_string()));
    }

    current
        .and_then(|id| cats.iter().find(|cat| cat.id == id))
        .or_else(|| cats.first())
        .ok_or(CatError::NoCats)
}
