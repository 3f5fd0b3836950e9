use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Id;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Co2,
    Temperature,
    Noise,
}

/// Notification derived from a telemetry snapshot. Alerts are never stored;
/// a new snapshot yields a new list.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Room the alert is about
    pub subject_id: Id,
    /// Room display label
    pub subject_name: String,
    pub kind: AlertKind,
    /// Human-readable message embedding the observed value
    pub message: String,
    /// Snapshot time supplied by the caller
    #[serde(with = "time::serde::rfc3339")]
    pub observed_at: OffsetDateTime,
}
