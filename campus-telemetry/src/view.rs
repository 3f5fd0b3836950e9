use campus_api::models::{RoomStatus, RoomTelemetry, RoomView};

use crate::comfort::score;

/// CO₂ level above which a room needs airing. 800 ppm itself does not.
pub const AIRING_THRESHOLD_PPM: u32 = 800;

pub fn needs_airing(room: &RoomTelemetry) -> bool {
    room.co2 > AIRING_THRESHOLD_PPM
}

pub fn room_status(room: &RoomTelemetry) -> RoomStatus {
    RoomStatus::from(room.occupied)
}

/// Recomputes every derived state of a room from its current readings.
pub fn room_view(room: &RoomTelemetry) -> RoomView {
    RoomView {
        telemetry: room.clone(),
        status: room_status(room),
        needs_airing: needs_airing(room),
        comfort: score(room),
    }
}
