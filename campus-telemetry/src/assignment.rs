use std::collections::HashSet;

use campus_api::models::{ModuleStatus, RoomTelemetry};

/// Room ids referenced by any module other than `module_id`.
fn rooms_taken_by_others<'a>(module_id: &str, modules: &'a [ModuleStatus]) -> HashSet<&'a str> {
    modules
        .iter()
        .filter(|module| module.module_id != module_id)
        .filter_map(|module| module.room_id.as_deref())
        .collect()
}

/// Rooms `module_id` may be assigned to, in input order.
///
/// A room held by another module is excluded; the room `module_id` already
/// holds stays listed. An id absent from `modules` (a module being created)
/// gets every unreferenced room.
pub fn available_rooms_for<'a>(
    module_id: &str,
    rooms: &'a [RoomTelemetry],
    modules: &[ModuleStatus],
) -> Vec<&'a RoomTelemetry> {
    let taken = rooms_taken_by_others(module_id, modules);

    rooms
        .iter()
        .filter(|room| !room.room_id.is_empty() && !taken.contains(room.room_id.as_str()))
        .collect()
}

/// Whether `room_id` is one of the candidates of `module_id`.
pub fn is_candidate(
    module_id: &str,
    room_id: &str,
    rooms: &[RoomTelemetry],
    modules: &[ModuleStatus],
) -> bool {
    available_rooms_for(module_id, rooms, modules)
        .iter()
        .any(|room| room.room_id == room_id)
}
