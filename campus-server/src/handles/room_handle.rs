use axum::extract::Query;
use axum::routing::post;
use axum::{Json, Router};
use campus_api::models::*;
use campus_telemetry::{RoomFilter, filter_rooms, normalize_rooms, room_view};

pub fn room_router() -> Router {
    Router::new().route("/api/rooms/views", post(get_room_views))
}

#[utoipa::path(
    post,
    path = "/api/rooms/views",
    tag = "room",
    request_body = RoomSnapshot,
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive part of the room name"),
        ("status" = Option<String>, Query, description = "all, available or occupied"),
        ("floor" = Option<String>, Query, description = "all or a floor number"),
        ("co2" = Option<String>, Query, description = "all, good or warning")
    ),
    responses(
        (status = 200, description = "Rooms matching the filter", body = Vec<RoomView>),
        (status = 400, description = "Invalid filter value"),
        (status = 422, description = "Malformed room payload")
    )
)]
pub async fn get_room_views(
    Query(filter): Query<RoomFilter>,
    Json(body): Json<RoomSnapshot>,
) -> Json<Vec<RoomView>> {
    let rooms = normalize_rooms(&body.rooms);

    let views: Vec<RoomView> = filter_rooms(&rooms, &filter)
        .into_iter()
        .map(room_view)
        .collect();

    tracing::debug!(total = rooms.len(), matched = views.len(), "Filtered rooms");

    Json(views)
}
