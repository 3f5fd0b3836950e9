use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    #[error("Hardware id is required")]
    MissingHardwareId,

    #[error("Module name is required")]
    MissingName,

    #[error("A room must be selected")]
    MissingRoom,

    #[error("Room {0} not found")]
    RoomNotFound(String),

    #[error("Room {0} is already assigned to another module")]
    RoomAlreadyAssigned(String),
}

impl ModuleError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ModuleError::MissingHardwareId => StatusCode::BAD_REQUEST,
            ModuleError::MissingName => StatusCode::BAD_REQUEST,
            ModuleError::MissingRoom => StatusCode::BAD_REQUEST,
            ModuleError::RoomNotFound(_) => StatusCode::NOT_FOUND,
            ModuleError::RoomAlreadyAssigned(_) => StatusCode::CONFLICT,
        }
    }
}
