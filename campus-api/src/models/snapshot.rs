use serde::{Deserialize, Serialize};

use super::{Alert, BuildingStats, ModulePayload, RoomPayload, UpsertModuleRequest};

/// Rooms as fetched from the backend for one view load.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RoomSnapshot {
    #[serde(default)]
    pub rooms: Vec<RoomPayload>,
}

/// Rooms and modules as fetched from the backend for one view load.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CampusSnapshot {
    #[serde(default)]
    pub rooms: Vec<RoomPayload>,
    #[serde(default)]
    pub modules: Vec<ModulePayload>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub stats: BuildingStats,
    pub alerts: Vec<Alert>,
}

/// Module edit form checked against the current assignments.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ValidateModuleRequest {
    pub upsert: UpsertModuleRequest,
    #[serde(flatten)]
    pub snapshot: CampusSnapshot,
}
