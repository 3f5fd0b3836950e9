use campus_api::models::RoomTelemetry;
use serde::{Deserialize, Serialize};

use crate::view::needs_airing;

/// A single clause of the room browsing filter.
pub trait RoomPredicate {
    fn matches(&self, room: &RoomTelemetry) -> bool;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Available,
    Occupied,
}

impl RoomPredicate for StatusFilter {
    fn matches(&self, room: &RoomTelemetry) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => !room.occupied,
            StatusFilter::Occupied => room.occupied,
        }
    }
}

/// Floor selection as it comes from the select box: `"all"` or a floor label.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FloorFilter {
    #[default]
    All,
    Floor(String),
}

impl From<String> for FloorFilter {
    fn from(value: String) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            FloorFilter::All
        } else {
            FloorFilter::Floor(value.to_string())
        }
    }
}

impl From<FloorFilter> for String {
    fn from(filter: FloorFilter) -> Self {
        match filter {
            FloorFilter::All => "all".to_string(),
            FloorFilter::Floor(floor) => floor,
        }
    }
}

impl RoomPredicate for FloorFilter {
    fn matches(&self, room: &RoomTelemetry) -> bool {
        match self {
            FloorFilter::All => true,
            // String comparison: "01" does not select floor 1.
            FloorFilter::Floor(floor) => room.floor.to_string() == *floor,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Co2Band {
    #[default]
    All,
    /// At or below the airing threshold
    Good,
    /// Above the airing threshold
    Warning,
}

impl RoomPredicate for Co2Band {
    fn matches(&self, room: &RoomTelemetry) -> bool {
        match self {
            Co2Band::All => true,
            Co2Band::Good => !needs_airing(room),
            Co2Band::Warning => needs_airing(room),
        }
    }
}

/// Room browsing filter. Every clause must pass; `all` clauses pass everything.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomFilter {
    /// Case-insensitive substring of the room name
    pub search: String,
    pub status: StatusFilter,
    pub floor: FloorFilter,
    #[serde(rename = "co2")]
    pub co2_band: Co2Band,
}

impl RoomFilter {
    fn matches_search(&self, room: &RoomTelemetry) -> bool {
        room.name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

impl RoomPredicate for RoomFilter {
    fn matches(&self, room: &RoomTelemetry) -> bool {
        self.matches_search(room)
            && self.status.matches(room)
            && self.floor.matches(room)
            && self.co2_band.matches(room)
    }
}

/// Rooms passing `filter`, in input order.
pub fn filter_rooms<'a>(rooms: &'a [RoomTelemetry], filter: &RoomFilter) -> Vec<&'a RoomTelemetry> {
    rooms.iter().filter(|room| filter.matches(room)).collect()
}
