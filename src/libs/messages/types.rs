#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleServer,
    ConfigModuleFeeder,

    // === AUTHENTICATION MESSAGES ===
    EmptyCredentials,
    Registered(String), // email
    LoggedIn(String),   // email
    LoggedOut,
    NoActiveSession,
    LoginFailed(String), // error message
    WrongPassword(i32),  // attempt count
    SessionExpired,
    PasswordMismatch,

    // === CAT MESSAGES ===
    CatsHeader,
    NoCats,
    NoCatSelected,
    CatAdded(String),              // name
    CatUpdated(String),            // name
    CatDeleted(String),            // name
    CatSwitched(String),           // name
    CatNotFound(String),           // id
    CatImageUploaded(String),      // name
    CatImageUploadFailed(String),  // error message
    CatValidationFailed(String),   // error message
    NothingToUpdate,
    ConfirmDeleteCat(String), // name

    // === SCHEDULE MESSAGES ===
    SchedulesHeader(String), // cat name
    NoSchedules(String),     // cat name
    NextMeal(String),        // formatted meal
    ScheduleSaved(String),   // cat name
    DraftPreview { time: String, portion: u32 },
    InvalidScheduleInput(String), // error message

    // === FEEDING MESSAGES ===
    FoodDispensed(String), // cat name
    Dispensing { name: String, amount: u32 },
    ContainerWeight(String), // formatted weight

    // === HISTORY MESSAGES ===
    HistoryHeader(String), // cat name
    NoHistory,
    NoHistoryMatches(String), // query

    // === STATUS MESSAGES ===
    StatusHeader,
    WatchingWeight(u64), // seconds
    WatchStopped,
    WeightFetchFailed(String), // error message

    // === RECOGNITION MESSAGES ===
    RecognitionStep { name: String, index: usize, total: usize },
    CaptureCountdown(u64), // seconds left
    ProcessingImage(u64),  // seconds
    RecognitionCompleted,
    TrainingStarted,
    TrainingCompleted,

    // === PROMPTS ===
    PromptSelectModules,
    PromptServerApiUrl,
    PromptDeviceId,
    PromptFeedAmount,
    PromptPollInterval,
    PromptCaptureCountdown,
    PromptProcessingWait,
    PromptEmail,
    PromptPassword,
    PromptPasswordConfirm,
    PromptCatName,
    PromptBreed,
    PromptOtherBreed,
    PromptWeight,
    PromptImagePath,
    PromptScheduleAction,
    PromptReadyForCapture(String), // cat name

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
