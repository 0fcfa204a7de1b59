use super::{number_from, parse_list, ActionResponse, FeederApi, RawId};
use crate::libs::history::{FeedingEvent, HistoryError};
use crate::libs::schedule::{ScheduleDraft, ScheduleEntry, ScheduleError};
use crate::libs::time::MealTime;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleEntry {
    id: Option<RawId>,
    time: Option<String>,
    amount: Option<Value>,
    #[serde(default)]
    device_id: Option<String>,
}

impl TryFrom<RawScheduleEntry> for ScheduleEntry {
    type Error = ScheduleError;

    fn try_from(raw: RawScheduleEntry) -> Result<Self, Self::Error> {
        let id = raw.id.and_then(RawId::into_id).ok_or(ScheduleError::MissingId)?;
        let time: MealTime = raw.time.unwrap_or_default().parse()?;
        let amount = raw
            .amount
            .as_ref()
            .and_then(number_from)
            .filter(|a| *a > 0.0 && a.fract() == 0.0 && *a <= f64::from(u32::MAX))
            .ok_or_else(|| ScheduleError::InvalidAmount(raw.amount.map(|a| a.to_string()).unwrap_or_else(|| "nothing".to_string())))?;

        Ok(ScheduleEntry {
            id,
            time,
            amount: amount as u32,
            device_id: raw.device_id,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RawFeedingEvent {
    timestamp: Option<String>,
    amount: Option<Value>,
}

impl TryFrom<RawFeedingEvent> for FeedingEvent {
    type Error = HistoryError;

    fn try_from(raw: RawFeedingEvent) -> Result<Self, Self::Error> {
        let timestamp = raw.timestamp.filter(|t| !t.trim().is_empty()).ok_or_else(|| HistoryError::MalformedRecord(String::new()))?;
        let amount = raw
            .amount
            .as_ref()
            .and_then(number_from)
            .filter(|a| *a > 0.0)
            .ok_or_else(|| HistoryError::InvalidAmount(raw.amount.map(|a| a.to_string()).unwrap_or_else(|| "nothing".to_string())))?;

        Ok(FeedingEvent { timestamp, amount })
    }
}

#[derive(Debug, Deserialize)]
struct SchedulesResponse {
    #[serde(default)]
    schedules: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    history: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct WeightResponse {
    #[serde(default)]
    weight: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ScheduleRequest {
    time: MealTime,
    amount: u32,
}

#[derive(Debug, Serialize)]
struct FeedRequest {
    amount: u32,
}

/// Validates a schedules payload: `{ "schedules": [...] }`.
pub fn parse_schedules(body: Value) -> Result<Vec<ScheduleEntry>> {
    let response: SchedulesResponse = serde_json::from_value(body)?;
    Ok(parse_list::<RawScheduleEntry, ScheduleEntry>(response.schedules, "schedule entry"))
}

/// Validates a history payload: `{ "history": [...] }`.
pub fn parse_history(body: Value) -> Result<Vec<FeedingEvent>> {
    let response: HistoryResponse = serde_json::from_value(body)?;
    Ok(parse_list::<RawFeedingEvent, FeedingEvent>(response.history, "feeding event"))
}

/// Reads the scale value from `{ "weight": ... }`; `None` when unknown.
pub fn parse_weight(body: Value) -> Result<Option<f64>> {
    let response: WeightResponse = serde_json::from_value(body)?;
    Ok(response.weight.as_ref().and_then(number_from))
}

impl FeederApi {
    pub async fn schedules(&self, cat_id: &str) -> Result<Vec<ScheduleEntry>> {
        let url = self.url(&format!("pet-feeder/cats/{}/schedules", cat_id));
        let res = self.send(self.client.get(url)).await?;
        parse_schedules(res.json().await?)
    }

    pub async fn add_schedule(&self, cat_id: &str, draft: &ScheduleDraft) -> Result<()> {
        let url = self.device_url(&format!("cats/{}/schedule", cat_id));
        let body = ScheduleRequest {
            time: draft.time,
            amount: draft.portion,
        };
        let res = self.send(self.client.post(url).json(&body)).await?;
        let action: ActionResponse = res.json().await?;
        Ok(action.into_result("Failed to save feeding schedule")?)
    }

    pub async fn feed_now(&self, cat_id: &str, amount: u32) -> Result<()> {
        let url = self.device_url(&format!("cats/{}/feed", cat_id));
        let res = self.send(self.client.post(url).json(&FeedRequest { amount })).await?;
        let action: ActionResponse = res.json().await?;
        Ok(action.into_result("Failed to dispense food")?)
    }

    pub async fn container_weight(&self) -> Result<Option<f64>> {
        let res = self.send(self.client.get(self.device_url("weight"))).await?;
        parse_weight(res.json().await?)
    }

    pub async fn feeding_history(&self, cat_id: &str) -> Result<Vec<FeedingEvent>> {
        let url = self.url(&format!("pet-feeder/cats/{}/feeding-history", cat_id));
        let res = self.send(self.client.get(url)).await?;
        parse_history(res.json().await?)
    }
}
