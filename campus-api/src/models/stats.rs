use serde::{Deserialize, Serialize};

/// Building-wide aggregates shown on the admin dashboard.
///
/// Every average and rate is `0` for an empty room list.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingStats {
    /// Mean temperature rounded to one decimal
    pub avg_temperature: f64,
    /// Mean CO₂ rounded to the nearest ppm
    pub avg_co2: u32,
    /// Share of occupied rooms as a whole percentage
    pub occupancy_rate: u32,
    pub online_modules: usize,
    pub offline_modules: usize,
    pub rooms_needing_airing: usize,
    /// Modules whose battery is low or critical
    pub low_battery_modules: usize,
}
