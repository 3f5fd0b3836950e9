use axum::http::header;
use axum::response::IntoResponse;
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::handles::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        get_room_views,
        get_dashboard,
        get_candidate_rooms,
        validate_module,
        validate_reservation
    ),
    tags(
        (name = "room", description = "Room views and browsing filter"),
        (name = "dashboard", description = "Building statistics and alerts"),
        (name = "module", description = "Module assignment"),
        (name = "reservation", description = "Reservation checks")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Result<impl IntoResponse, ApiError> {
    let document = ApiDoc::openapi().to_json().map_err(anyhow::Error::from)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}
