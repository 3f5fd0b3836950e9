use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use campus_api::models::*;
use time::Time;
use time::macros::format_description;

use crate::errors::{ApiError, ReservationError};

pub fn reservation_router() -> Router {
    Router::new().route("/api/reservations/validate", post(validate_reservation))
}

#[utoipa::path(
    post,
    path = "/api/reservations/validate",
    tag = "reservation",
    request_body = CreateReservationRequest,
    responses(
        (status = 204, description = "The reservation can be sent to the backend"),
        (status = 400, description = "Invalid reservation")
    )
)]
pub async fn validate_reservation(
    Json(body): Json<CreateReservationRequest>,
) -> Result<StatusCode, ApiError> {
    check_reservation(&body)?;

    Ok(StatusCode::NO_CONTENT)
}

fn slot_time(value: &str) -> Result<Time, ReservationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReservationError::MissingTime);
    }

    Time::parse(value, format_description!("[hour]:[minute]"))
        .map_err(|_| ReservationError::InvalidTime(value.to_string()))
}

pub fn check_reservation(request: &CreateReservationRequest) -> Result<(), ReservationError> {
    let start = slot_time(&request.start_time)?;
    let end = slot_time(&request.end_time)?;

    if end <= start {
        return Err(ReservationError::EndBeforeStart);
    }

    match request.reason_type {
        None => Err(ReservationError::MissingReason),
        Some(ReasonType::Other)
            if request
                .custom_reason
                .as_deref()
                .is_none_or(|reason| reason.trim().is_empty()) =>
        {
            Err(ReservationError::MissingCustomReason)
        }
        Some(_) => Ok(()),
    }
}
