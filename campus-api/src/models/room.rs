use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ComfortScore, Id, MeasurementPayload};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Nobody is in the room
    Available,
    /// The room is in use
    Occupied,
}

impl From<bool> for RoomStatus {
    fn from(occupied: bool) -> Self {
        if occupied {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "available"),
            RoomStatus::Occupied => write!(f, "occupied"),
        }
    }
}

/// Canonical snapshot of one room's readings.
///
/// Airing need is not a field: it is derived from `co2` on every read.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTelemetry {
    /// Room identifier
    pub room_id: Id,
    /// Display label
    pub name: String,
    /// Floor number
    pub floor: u32,
    /// Sole source of the available/occupied status
    pub occupied: bool,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// CO₂ concentration in ppm
    pub co2: u32,
    /// Light intensity in lux
    pub brightness: u32,
    /// Sound level in dB
    pub noise: u32,
    /// Monitoring module bound to this room
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<Id>,
}

/// Room record as served by the REST backend.
///
/// Readings may arrive nested under `lastMeasurement` or flat on the record;
/// flat values win when both are present.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoom {
    #[serde(alias = "_id", alias = "roomId")]
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub floor: Option<u32>,
    /// `null` reads as not occupied
    #[serde(default)]
    pub occupied: Option<bool>,
    #[serde(default)]
    pub last_measurement: Option<MeasurementPayload>,
    #[serde(flatten)]
    pub readings: MeasurementPayload,
    #[serde(default)]
    pub module_id: Option<Id>,
}

/// Room record in the shape of the legacy mock dataset. Its stored
/// `needsAiring` flag is not read.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyRoom {
    pub id: Id,
    pub name: String,
    pub status: RoomStatus,
    pub temperature: f64,
    pub humidity: f64,
    pub co2: f64,
    pub brightness: f64,
    pub noise: f64,
    #[serde(default)]
    pub module_id: Option<Id>,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoomPayload {
    /// Recognised by its `status` field
    Legacy(LegacyRoom),
    Api(ApiRoom),
}

/// Telemetry plus every state a room card renders.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    #[serde(flatten)]
    pub telemetry: RoomTelemetry,
    pub status: RoomStatus,
    pub needs_airing: bool,
    pub comfort: ComfortScore,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::ComfortLevel;

    #[test]
    fn test_api_room_with_nested_measurement() {
        let payload: RoomPayload = serde_json::from_value(json!({
            "_id": "r-101",
            "name": "Salle 1.1",
            "floor": 1,
            "occupied": true,
            "lastMeasurement": { "co2": 912, "temperature": 21.5, "humidity": 44 },
            "noise": 38,
            "moduleId": "m-1"
        }))
        .unwrap();

        let RoomPayload::Api(room) = payload else {
            panic!("Expected API room");
        };
        assert_eq!(room.id, "r-101");
        assert_eq!(room.floor, Some(1));
        assert_eq!(room.occupied, Some(true));
        assert_eq!(room.last_measurement.unwrap().co2, Some(912.0));
        assert_eq!(room.readings.noise, Some(38.0));
        assert_eq!(room.readings.co2, None);
        assert_eq!(room.module_id.as_deref(), Some("m-1"));
    }

    #[test]
    fn test_api_room_without_measurement() {
        let payload: RoomPayload = serde_json::from_value(json!({
            "id": "r-102",
            "name": "Salle 1.2",
            "lastMeasurement": null
        }))
        .unwrap();

        let RoomPayload::Api(room) = payload else {
            panic!("Expected API room");
        };
        assert_eq!(room.floor, None);
        assert_eq!(room.occupied, None);
        assert!(room.last_measurement.is_none());
        assert_eq!(room.readings, MeasurementPayload::default());
    }

    #[test]
    fn test_api_room_accepts_null_occupancy() {
        let payload: RoomPayload = serde_json::from_value(json!({
            "_id": "r-103",
            "name": "Salle 1.3",
            "occupied": null
        }))
        .unwrap();

        let RoomPayload::Api(room) = payload else {
            panic!("Expected API room");
        };
        assert_eq!(room.occupied, None);
    }

    #[test]
    fn test_legacy_room_is_recognised_by_status() {
        let payload: RoomPayload = serde_json::from_value(json!({
            "id": "room-3-2",
            "name": "Salle 3.2",
            "status": "available",
            "needsAiring": true,
            "temperature": 24.5,
            "humidity": 60,
            "co2": 1350,
            "brightness": 420,
            "noise": 55,
            "moduleId": "module-3-2"
        }))
        .unwrap();

        let RoomPayload::Legacy(room) = payload else {
            panic!("Expected legacy room");
        };
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.co2, 1350.0);
    }

    #[test]
    fn test_room_view_flattens_telemetry() {
        let view = RoomView {
            telemetry: RoomTelemetry {
                room_id: "r-1".to_string(),
                name: "Salle 1.1".to_string(),
                floor: 1,
                occupied: false,
                temperature: 21.0,
                humidity: 45.0,
                co2: 650,
                brightness: 300,
                noise: 35,
                module_id: None,
            },
            status: RoomStatus::Available,
            needs_airing: false,
            comfort: ComfortScore {
                score: 100,
                level: ComfortLevel::Excellent,
            },
        };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["roomId"], json!("r-1"));
        assert_eq!(value["status"], json!("available"));
        assert_eq!(value["needsAiring"], json!(false));
        assert_eq!(value["comfort"]["level"], json!("excellent"));
        assert!(value.get("moduleId").is_none());
    }
}
