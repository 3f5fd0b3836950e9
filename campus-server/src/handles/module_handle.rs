use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use campus_api::models::*;
use campus_telemetry::{available_rooms_for, is_candidate, normalize_modules, normalize_rooms};

use crate::errors::{ApiError, ModuleError};

pub fn module_router() -> Router {
    Router::new()
        .route("/api/modules/:id/candidates", post(get_candidate_rooms))
        .route("/api/modules/:id/validate", post(validate_module))
}

#[utoipa::path(
    post,
    path = "/api/modules/{id}/candidates",
    tag = "module",
    request_body = CampusSnapshot,
    params(
        ("id" = String, Path, description = "Module being edited, or a new id when creating one")
    ),
    responses(
        (status = 200, description = "Rooms the module may be assigned to", body = Vec<RoomTelemetry>),
        (status = 422, description = "Malformed room or module payload")
    )
)]
pub async fn get_candidate_rooms(
    Path(module_id): Path<String>,
    Json(body): Json<CampusSnapshot>,
) -> Json<Vec<RoomTelemetry>> {
    let rooms = normalize_rooms(&body.rooms);
    let modules = normalize_modules(&body.modules);

    let candidates = available_rooms_for(&module_id, &rooms, &modules)
        .into_iter()
        .cloned()
        .collect();

    Json(candidates)
}

#[utoipa::path(
    post,
    path = "/api/modules/{id}/validate",
    tag = "module",
    request_body = ValidateModuleRequest,
    params(
        ("id" = String, Path, description = "Hardware id the upsert is keyed by")
    ),
    responses(
        (status = 204, description = "The upsert can be sent to the backend"),
        (status = 400, description = "A required field is blank"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room already assigned to another module"),
        (status = 422, description = "Malformed payload")
    )
)]
pub async fn validate_module(
    Path(hardware_id): Path<String>,
    Json(body): Json<ValidateModuleRequest>,
) -> Result<StatusCode, ApiError> {
    validate_upsert(&hardware_id, &body.upsert, &body.snapshot)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Module id of the record registered under `hardware_id`, or the hardware
/// id itself for a module that does not exist yet.
fn resolve_module_id(hardware_id: &str, modules: &[ModulePayload]) -> String {
    modules
        .iter()
        .find_map(|module| match module {
            ModulePayload::Api(module) if module.hardware_id.as_deref() == Some(hardware_id) => {
                Some(module.id.clone())
            }
            _ => None,
        })
        .unwrap_or_else(|| hardware_id.to_string())
}

pub fn validate_upsert(
    hardware_id: &str,
    upsert: &UpsertModuleRequest,
    snapshot: &CampusSnapshot,
) -> Result<(), ModuleError> {
    if hardware_id.trim().is_empty() {
        return Err(ModuleError::MissingHardwareId);
    }
    if upsert.name.trim().is_empty() {
        return Err(ModuleError::MissingName);
    }

    let room_id = upsert.room_id.trim();
    if room_id.is_empty() {
        return Err(ModuleError::MissingRoom);
    }

    let rooms = normalize_rooms(&snapshot.rooms);
    if !rooms.iter().any(|room| room.room_id == room_id) {
        return Err(ModuleError::RoomNotFound(room_id.to_string()));
    }

    let modules = normalize_modules(&snapshot.modules);
    let module_id = resolve_module_id(hardware_id, &snapshot.modules);
    if !is_candidate(&module_id, room_id, &rooms, &modules) {
        return Err(ModuleError::RoomAlreadyAssigned(room_id.to_string()));
    }

    Ok(())
}
