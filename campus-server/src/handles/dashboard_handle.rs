use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use campus_api::models::*;
use campus_telemetry::{AlertRules, aggregate, normalize_modules, normalize_rooms};
use time::OffsetDateTime;

#[derive(Clone)]
pub struct DashboardState {
    pub alert_rules: Arc<AlertRules>,
}

pub fn dashboard_router(dashboard_state: DashboardState) -> Router {
    Router::new()
        .route("/api/dashboard", post(get_dashboard))
        .with_state(dashboard_state)
}

#[utoipa::path(
    post,
    path = "/api/dashboard",
    tag = "dashboard",
    request_body = CampusSnapshot,
    responses(
        (status = 200, description = "Building statistics and active alerts", body = DashboardResponse),
        (status = 422, description = "Malformed room or module payload")
    )
)]
pub async fn get_dashboard(
    State(state): State<DashboardState>,
    Json(body): Json<CampusSnapshot>,
) -> Json<DashboardResponse> {
    let rooms = normalize_rooms(&body.rooms);
    let modules = normalize_modules(&body.modules);

    let stats = aggregate(&rooms, &modules);
    let alerts = state.alert_rules.derive(&rooms, OffsetDateTime::now_utc());

    tracing::debug!(
        rooms = rooms.len(),
        modules = modules.len(),
        alerts = alerts.len(),
        "Derived dashboard"
    );

    Json(DashboardResponse { stats, alerts })
}
