use crate::domain::time_of_day::TimeParseError;

// Domain-level errors for the ad workflows.
#[derive(Debug, thiserror::Error)]
pub enum AdError {
    #[error("name is required")]
    InvalidName,
    #[error("discord is required")]
    InvalidDiscord,
    #[error("yearsPlaying must not be negative")]
    InvalidYearsPlaying,
    #[error("weekDays must list at least one day")]
    InvalidWeekDays,
    #[error("invalid hourStart: {0}")]
    InvalidHourStart(TimeParseError),
    #[error("invalid hourEnd: {0}")]
    InvalidHourEnd(TimeParseError),
    #[error("game not found")]
    GameNotFound,
    #[error("ad not found")]
    AdNotFound,
    #[error("storage failure: {0}")]
    StorageFailure(String),
}
