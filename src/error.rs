use chrono::Month;

/// Reasons a calendar image can't be produced
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("not a valid calendar month: {0:?}")]
    InvalidMonth(String),

    #[error(
        "{} is not a valid regular season month, must be between March and September, inclusive",
        .0.name()
    )]
    OffSeasonMonth(Month),

    /// The PNG encoder refused the finished raster
    #[error("failed to encode calendar image: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Failures while loading the season schedule
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("failed to read schedule: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed schedule json: {0}")]
    Json(#[from] serde_json::Error),
}
