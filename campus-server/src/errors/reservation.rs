use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Start and end times are required")]
    MissingTime,

    #[error("Invalid time {0}, expected HH:MM")]
    InvalidTime(String),

    #[error("End time must be after start time")]
    EndBeforeStart,

    #[error("A reason type is required")]
    MissingReason,

    #[error("A custom reason is required for other reasons")]
    MissingCustomReason,
}

impl ReservationError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}
