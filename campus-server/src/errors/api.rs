use super::{ModuleError, ReservationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Module error: {0}")]
    ModuleError(#[from] ModuleError),

    #[error("Reservation error: {0}")]
    ReservationError(#[from] ReservationError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
