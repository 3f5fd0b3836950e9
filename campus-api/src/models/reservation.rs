use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a room is booked. French labels from the booking form are accepted.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonType {
    #[serde(alias = "Cours")]
    Lecture,
    #[serde(alias = "TD")]
    Tutorial,
    #[serde(alias = "TP")]
    Lab,
    #[serde(alias = "Réunion")]
    Meeting,
    #[serde(alias = "Projet")]
    Project,
    #[serde(alias = "Étude en groupe")]
    GroupStudy,
    /// Requires a custom reason
    #[serde(alias = "Autre")]
    Other,
}

impl fmt::Display for ReasonType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReasonType::Lecture => write!(f, "lecture"),
            ReasonType::Tutorial => write!(f, "tutorial"),
            ReasonType::Lab => write!(f, "lab"),
            ReasonType::Meeting => write!(f, "meeting"),
            ReasonType::Project => write!(f, "project"),
            ReasonType::GroupStudy => write!(f, "groupStudy"),
            ReasonType::Other => write!(f, "other"),
        }
    }
}

/// Body of `POST /api/rooms/{roomId}/reservations`.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    /// Start of the slot, `HH:MM`
    #[serde(default)]
    pub start_time: String,
    /// End of the slot, `HH:MM`
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub reason_type: Option<ReasonType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_reason: Option<String>,
}
