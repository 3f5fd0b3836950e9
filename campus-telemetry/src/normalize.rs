use campus_api::models::{
    ApiModule, ApiRoom, LegacyModule, LegacyRoom, ModulePayload, ModuleState, ModuleStatus,
    RoomPayload, RoomStatus, RoomTelemetry,
};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Acquisition interval assumed for a module that never reported one.
pub const DEFAULT_ACQUISITION_INTERVAL_SEC: u32 = 30;

/// Conversion of a raw backend record into its canonical form.
///
/// Implementations are total: a missing reading becomes `0`, so a room
/// without sensor data cannot be told apart from one reading zero.
pub trait Normalize {
    type Output;

    fn normalize(&self) -> Self::Output;
}

pub fn normalize<N: Normalize>(raw: &N) -> N::Output {
    raw.normalize()
}

pub fn normalize_rooms(payloads: &[RoomPayload]) -> Vec<RoomTelemetry> {
    payloads.iter().map(Normalize::normalize).collect()
}

pub fn normalize_modules(payloads: &[ModulePayload]) -> Vec<ModuleStatus> {
    payloads.iter().map(Normalize::normalize).collect()
}

impl Normalize for RoomPayload {
    type Output = RoomTelemetry;

    fn normalize(&self) -> RoomTelemetry {
        match self {
            RoomPayload::Api(room) => room.normalize(),
            RoomPayload::Legacy(room) => room.normalize(),
        }
    }
}

impl Normalize for ApiRoom {
    type Output = RoomTelemetry;

    fn normalize(&self) -> RoomTelemetry {
        let nested = self.last_measurement.unwrap_or_default();
        let flat = &self.readings;

        if self.last_measurement.is_none() && flat.co2.is_none() && flat.temperature.is_none() {
            tracing::debug!(room_id = %self.id, "room has no measurement, readings default to zero");
        }

        RoomTelemetry {
            room_id: self.id.clone(),
            name: self.name.clone(),
            floor: self.floor.unwrap_or(0),
            occupied: self.occupied.unwrap_or(false),
            temperature: celsius(flat.temperature.or(nested.temperature)),
            humidity: percent(flat.humidity.or(nested.humidity)),
            co2: whole_ceil(flat.co2.or(nested.co2)),
            brightness: whole(flat.brightness.or(nested.brightness)),
            noise: whole_ceil(flat.noise.or(nested.noise)),
            module_id: non_blank(self.module_id.as_deref()),
        }
    }
}

impl Normalize for LegacyRoom {
    type Output = RoomTelemetry;

    fn normalize(&self) -> RoomTelemetry {
        RoomTelemetry {
            room_id: self.id.clone(),
            name: self.name.clone(),
            // Mock rooms carry no floor; the number embedded in their name is not parsed.
            floor: 0,
            occupied: self.status == RoomStatus::Occupied,
            temperature: celsius(Some(self.temperature)),
            humidity: percent(Some(self.humidity)),
            co2: whole_ceil(Some(self.co2)),
            brightness: whole(Some(self.brightness)),
            noise: whole_ceil(Some(self.noise)),
            module_id: non_blank(self.module_id.as_deref()),
        }
    }
}

impl Normalize for RoomTelemetry {
    type Output = RoomTelemetry;

    fn normalize(&self) -> RoomTelemetry {
        self.clone()
    }
}

impl Normalize for ModulePayload {
    type Output = ModuleStatus;

    fn normalize(&self) -> ModuleStatus {
        match self {
            ModulePayload::Api(module) => module.normalize(),
            ModulePayload::Legacy(module) => module.normalize(),
        }
    }
}

impl Normalize for ApiModule {
    type Output = ModuleStatus;

    fn normalize(&self) -> ModuleStatus {
        let room_id = self
            .room
            .as_ref()
            .map(|room| room.id.as_str())
            .or(self.room_id.as_deref());

        ModuleStatus {
            module_id: self.id.clone(),
            name: self.name.clone(),
            room_id: non_blank(room_id),
            online: self.enabled,
            battery_percent: self.battery_percent.and_then(battery),
            firmware_version: self.firmware_version.clone(),
            last_sync_at: self.last_seen_at.as_deref().and_then(parse_timestamp),
            acquisition_interval_sec: self
                .acquisition_interval_sec
                .unwrap_or(DEFAULT_ACQUISITION_INTERVAL_SEC),
        }
    }
}

impl Normalize for LegacyModule {
    type Output = ModuleStatus;

    fn normalize(&self) -> ModuleStatus {
        ModuleStatus {
            module_id: self.id.clone(),
            name: self.name.clone(),
            room_id: non_blank(self.room_id.as_deref()),
            online: self.status == ModuleState::Online,
            battery_percent: self.battery_level.and_then(battery),
            firmware_version: self.firmware_version.clone(),
            last_sync_at: self.last_sync.as_deref().and_then(parse_timestamp),
            acquisition_interval_sec: self
                .acquisition_interval
                .unwrap_or(DEFAULT_ACQUISITION_INTERVAL_SEC),
        }
    }
}

impl Normalize for ModuleStatus {
    type Output = ModuleStatus;

    fn normalize(&self) -> ModuleStatus {
        self.clone()
    }
}

/// Parses an RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM:SS` one taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    if let Ok(at) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(at);
    }

    match PrimitiveDateTime::parse(
        value,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    ) {
        Ok(at) => Some(at.assume_utc()),
        Err(e) => {
            tracing::debug!("ignoring unparseable timestamp {:?}: {}", value, e);
            None
        }
    }
}

fn celsius(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

fn percent(value: Option<f64>) -> f64 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

fn whole(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.round().max(0.0) as u32)
        .unwrap_or(0)
}

/// Rounds up, so `reading > limit` holds for the stored integer exactly when
/// it holds for the raw fractional reading.
fn whole_ceil(value: Option<f64>) -> u32 {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.ceil().max(0.0) as u32)
        .unwrap_or(0)
}

fn battery(value: f64) -> Option<u8> {
    value
        .is_finite()
        .then(|| value.round().clamp(0.0, 100.0) as u8)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
