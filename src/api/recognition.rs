use super::{ActionResponse, FeederApi};
use anyhow::Result;
use serde_json::json;

impl FeederApi {
    /// Asks the feeder camera to capture a picture labelled with `cat_id`.
    pub async fn send_image(&self, cat_id: &str) -> Result<()> {
        let url = self.device_url(&format!("cats/{}/sendImage", cat_id));
        let res = self.send(self.client.post(url).json(&json!({}))).await?;
        let action: ActionResponse = res.json().await?;
        Ok(action.into_result("Failed to recognize cat")?)
    }

    /// Retrains the recognition model on the pictures captured so far.
    pub async fn train_model(&self) -> Result<()> {
        let res = self.send(self.client.post(self.device_url("trainModel")).json(&json!({}))).await?;
        let action: ActionResponse = res.json().await?;
        Ok(action.into_result("Failed to train model")?)
    }
}
