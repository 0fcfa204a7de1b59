use super::{train, Connection};
use crate::{
    libs::{data_storage::DataStorage, messages::Message},
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::time::Duration;
use tokio::time::sleep;

/// Walks through every cat: countdown, capture, wait for processing.
/// Training runs once after the last picture.
pub async fn cmd(storage: &DataStorage) -> Result<()> {
    let conn = Connection::open(storage)?;
    let feeder = conn.config.feeder();

    let cats = conn.api.cats().await?;
    if cats.is_empty() {
        msg_bail_anyhow!(Message::NoCats);
    }

    let total = cats.len();
    for (index, cat) in cats.iter().enumerate() {
        msg_print!(
            Message::RecognitionStep {
                name: cat.name.clone(),
                index: index + 1,
                total,
            },
            true
        );

        let ready = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReadyForCapture(cat.name.clone()).to_string())
            .default(true)
            .interact()?;
        if !ready {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }

        for left in (1..=feeder.capture_countdown).rev() {
            msg_print!(Message::CaptureCountdown(left));
            sleep(Duration::from_secs(1)).await;
        }
        conn.api.send_image(&cat.id).await?;

        msg_info!(Message::ProcessingImage(feeder.processing_wait));
        sleep(Duration::from_secs(feeder.processing_wait)).await;
    }

    msg_success!(Message::RecognitionCompleted);
    train::run(&conn.api).await
}
