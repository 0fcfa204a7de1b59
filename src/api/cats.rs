use super::{number_from, parse_list, FeederApi, RawId};
use crate::libs::cat::{image_part_name, Cat, CatError, NewCat};
use anyhow::Result;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

const CATS_URL: &str = "cats";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCat {
    id: Option<RawId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    breed: Option<String>,
    #[serde(default)]
    weight: Option<Value>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    photo: Option<String>,
}

impl TryFrom<RawCat> for Cat {
    type Error = CatError;

    fn try_from(raw: RawCat) -> Result<Self, Self::Error> {
        let id = raw.id.and_then(RawId::into_id).ok_or(CatError::MissingId)?;
        Ok(Cat {
            id,
            name: raw.name.map(|name| name.trim().to_string()).unwrap_or_default(),
            breed: raw.breed.filter(|breed| !breed.trim().is_empty()),
            weight: raw.weight.as_ref().and_then(number_from).filter(|w| *w > 0.0),
            image_url: raw.image_url.or(raw.photo).filter(|url| !url.is_empty()),
        })
    }
}

/// Picks the uploaded image location out of an upload response.
pub fn uploaded_image_url(body: &Value) -> Option<String> {
    ["imageUrl", "url", "secure_url"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

impl FeederApi {
    pub async fn cats(&self) -> Result<Vec<Cat>> {
        let res = self.send(self.client.get(self.url(CATS_URL))).await?;
        let items: Vec<Value> = res.json().await?;
        Ok(parse_list::<RawCat, Cat>(items, "cat"))
    }

    pub async fn create_cat(&self, cat: &NewCat) -> Result<Cat> {
        let res = self.send(self.client.post(self.url(CATS_URL)).json(cat)).await?;
        let raw: RawCat = res.json().await?;
        Ok(Cat::try_from(raw)?)
    }

    pub async fn update_cat(&self, cat: &Cat) -> Result<()> {
        let url = self.url(&format!("{}/{}", CATS_URL, cat.id));
        self.send(self.client.put(url).json(cat)).await?;
        Ok(())
    }

    pub async fn delete_cat(&self, cat_id: &str) -> Result<()> {
        let url = self.url(&format!("{}/{}", CATS_URL, cat_id));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }

    /// Uploads a profile picture and returns its URL when the server reports one.
    pub async fn upload_cat_image(&self, cat_id: &str, path: &Path) -> Result<Option<String>> {
        let bytes = tokio::fs::read(path).await?;
        let (file_name, mime) = image_part_name(cat_id, path);
        let part = Part::bytes(bytes).file_name(file_name).mime_str(&mime)?;
        let form = Form::new().part("image", part);

        let url = self.url(&format!("{}/{}/image", CATS_URL, cat_id));
        let res = self.send(self.client.post(url).multipart(form)).await?;
        let body: Value = res.json().await.unwrap_or(Value::Null);
        Ok(uploaded_image_url(&body))
    }
}
