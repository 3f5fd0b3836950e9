use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Online,
    Offline,
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModuleState::Online => write!(f, "online"),
            ModuleState::Offline => write!(f, "offline"),
        }
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryLevel {
    /// 20% or less
    Critical,
    /// Above 20%, up to 50%
    Low,
    /// Above 50%
    Good,
}

/// Canonical state of one monitoring module.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStatus {
    /// Module identifier
    pub module_id: Id,
    /// Module name
    pub name: String,
    /// Room the module monitors; a module covers at most one room
    pub room_id: Option<Id>,
    pub online: bool,
    /// Battery charge percentage, absent when the module never reported it
    pub battery_percent: Option<u8>,
    pub firmware_version: Option<String>,
    /// Last time the module synchronised with the backend
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_sync_at: Option<OffsetDateTime>,
    /// Seconds between two acquisitions
    pub acquisition_interval_sec: u32,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRef {
    #[serde(alias = "_id")]
    pub id: Id,
}

/// Module record as served by the REST backend.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiModule {
    #[serde(alias = "_id", alias = "moduleId")]
    pub id: Id,
    #[serde(default)]
    pub hardware_id: Option<Id>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room: Option<RoomRef>,
    #[serde(default)]
    pub room_id: Option<Id>,
    #[serde(default, alias = "online")]
    pub enabled: bool,
    #[serde(default)]
    pub battery_percent: Option<f64>,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default, alias = "lastSyncAt")]
    pub last_seen_at: Option<String>,
    #[serde(default)]
    pub acquisition_interval_sec: Option<u32>,
}

/// Module record in the shape of the legacy mock dataset.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyModule {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub room_id: Option<Id>,
    pub status: ModuleState,
    #[serde(default)]
    pub last_sync: Option<String>,
    #[serde(default)]
    pub battery_level: Option<f64>,
    #[serde(default)]
    pub acquisition_interval: Option<u32>,
    #[serde(default)]
    pub firmware_version: Option<String>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModulePayload {
    /// Recognised by its `status` field
    Legacy(LegacyModule),
    Api(ApiModule),
}

/// Body of `PATCH /api/modules/{hardwareId}`, an upsert keyed by hardware id.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertModuleRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_id: String,
}
