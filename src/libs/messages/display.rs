//! Display implementation for catfeed application messages.
//!
//! All user-facing text lives here, so commands only ever refer to
//! [`Message`] variants and the wording stays consistent across the CLI.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleFeeder => "Feeder settings".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::EmptyCredentials => "Please fill in all fields".to_string(),
            Message::Registered(email) => format!("Account created for {}", email),
            Message::LoggedIn(email) => format!("Logged in as {}", email),
            Message::LoggedOut => "Logged out".to_string(),
            Message::NoActiveSession => "No active session".to_string(),
            Message::LoginFailed(error) => format!("Login failed: {}", error),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::SessionExpired => "Your session has expired, please log in again".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),

            // === CAT MESSAGES ===
            Message::CatsHeader => "Your cats".to_string(),
            Message::NoCats => "No cats yet. Add one with `catfeed cats add`".to_string(),
            Message::NoCatSelected => "Please select a cat first".to_string(),
            Message::CatAdded(name) => format!("{} has been added successfully!", name),
            Message::CatUpdated(name) => format!("{} has been updated", name),
            Message::CatDeleted(name) => format!("{} has been deleted", name),
            Message::CatSwitched(name) => format!("Now managing {}", name),
            Message::CatNotFound(id) => format!("No cat with id {}", id),
            Message::CatImageUploaded(name) => format!("Picture saved for {}", name),
            Message::CatImageUploadFailed(error) => format!("Image upload failed: {}", error),
            Message::CatValidationFailed(error) => error.to_string(),
            Message::NothingToUpdate => "Nothing to update, pass at least one field".to_string(),
            Message::ConfirmDeleteCat(name) => format!("Delete {}? This cannot be undone", name),

            // === SCHEDULE MESSAGES ===
            Message::SchedulesHeader(name) => format!("Feeding schedule for {}", name),
            Message::NoSchedules(name) => format!("No schedule for {}", name),
            Message::NextMeal(meal) => format!("Next meal: {}", meal),
            Message::ScheduleSaved(name) => format!("Feeding schedule saved for {}!", name),
            Message::DraftPreview { time, portion } => format!("Feed at {} - {}g", time, portion),
            Message::InvalidScheduleInput(error) => format!("Invalid schedule: {}", error),

            // === FEEDING MESSAGES ===
            Message::FoodDispensed(name) => format!("Food dispensed for {}!", name),
            Message::Dispensing { name, amount } => format!("Dispensing {}g for {}...", amount, name),
            Message::ContainerWeight(weight) => format!("The current weight of the container is: {}", weight),

            // === HISTORY MESSAGES ===
            Message::HistoryHeader(name) => format!("Feeding history for {}", name),
            Message::NoHistory => "No feeding history yet".to_string(),
            Message::NoHistoryMatches(query) => format!("No feedings match '{}'", query),

            // === STATUS MESSAGES ===
            Message::StatusHeader => "Smart Pet Feeder".to_string(),
            Message::WatchingWeight(seconds) => format!("Refreshing container weight every {}s, press Ctrl-C to stop", seconds),
            Message::WatchStopped => "Stopped watching".to_string(),
            Message::WeightFetchFailed(error) => format!("Failed to read container weight: {}", error),

            // === RECOGNITION MESSAGES ===
            Message::RecognitionStep { name, index, total } => format!("Cat {}/{}: {}", index, total, name),
            Message::CaptureCountdown(seconds) => format!("Capturing in {}s...", seconds),
            Message::ProcessingImage(seconds) => format!("Processing image, please wait {}s...", seconds),
            Message::RecognitionCompleted => "All cats captured".to_string(),
            Message::TrainingStarted => "Training the recognition model...".to_string(),
            Message::TrainingCompleted => "The model has been successfully trained!".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptServerApiUrl => "Enter the feeder API URL".to_string(),
            Message::PromptDeviceId => "Enter the feeder device id".to_string(),
            Message::PromptFeedAmount => "Default feed-now portion (g)".to_string(),
            Message::PromptPollInterval => "Container weight refresh interval (s)".to_string(),
            Message::PromptCaptureCountdown => "Countdown before image capture (s)".to_string(),
            Message::PromptProcessingWait => "Wait for image processing (s)".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptPasswordConfirm => "Repeat password".to_string(),
            Message::PromptCatName => "Cat name".to_string(),
            Message::PromptBreed => "Breed".to_string(),
            Message::PromptOtherBreed => "Enter breed".to_string(),
            Message::PromptWeight => "Weight (kg)".to_string(),
            Message::PromptImagePath => "Picture file (leave empty to skip)".to_string(),
            Message::PromptScheduleAction => "Adjust the schedule".to_string(),
            Message::PromptReadyForCapture(name) => format!("Place {} in front of the feeder camera. Ready?", name),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
