use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::docs::openapi_json;
use crate::handles::*;

pub fn create_app(settings: &Arc<Settings>) -> Router {
    let dashboard_state = DashboardState {
        alert_rules: Arc::new(settings.alerts.rules()),
    };

    Router::new()
        .route("/health", get(health))
        .route("/api/openapi.json", get(openapi_json))
        .merge(room_router())
        .merge(dashboard_router(dashboard_state))
        .merge(module_router())
        .merge(reservation_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn health() -> &'static str {
    "ok"
}
