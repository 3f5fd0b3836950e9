use campus_api::models::{BatteryLevel, BuildingStats, ModuleStatus, RoomTelemetry};

use crate::view::needs_airing;

pub fn battery_level(percent: u8) -> BatteryLevel {
    match percent {
        51.. => BatteryLevel::Good,
        21..=50 => BatteryLevel::Low,
        _ => BatteryLevel::Critical,
    }
}

/// `None` when the module never reported a battery reading.
pub fn module_battery_level(module: &ModuleStatus) -> Option<BatteryLevel> {
    module.battery_percent.map(battery_level)
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Building-wide aggregates over one snapshot.
pub fn aggregate(rooms: &[RoomTelemetry], modules: &[ModuleStatus]) -> BuildingStats {
    let count = rooms.len();

    let temperature: f64 = rooms.iter().map(|room| room.temperature).sum();
    let co2: f64 = rooms.iter().map(|room| f64::from(room.co2)).sum();
    let occupied = rooms.iter().filter(|room| room.occupied).count();

    let online_modules = modules.iter().filter(|module| module.online).count();
    let low_battery_modules = modules
        .iter()
        .filter(|module| {
            matches!(
                module_battery_level(module),
                Some(BatteryLevel::Low | BatteryLevel::Critical)
            )
        })
        .count();

    BuildingStats {
        avg_temperature: (mean(temperature, count) * 10.0).round() / 10.0,
        avg_co2: mean(co2, count).round() as u32,
        occupancy_rate: (mean(occupied as f64, count) * 100.0).round() as u32,
        online_modules,
        offline_modules: modules.len() - online_modules,
        rooms_needing_airing: rooms.iter().filter(|room| needs_airing(room)).count(),
        low_battery_modules,
    }
}
