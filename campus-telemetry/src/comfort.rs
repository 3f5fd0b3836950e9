use campus_api::models::{ComfortLevel, ComfortScore, RoomTelemetry};

/// CO₂ level above which the heavier air-quality penalty applies.
pub const HIGH_CO2_PPM: u32 = 1000;

/// Comfortable temperature range in Celsius, bounds included.
pub const COMFORT_TEMPERATURE_RANGE: (f64, f64) = (19.0, 24.0);

/// Comfortable relative humidity range in percent, bounds included.
pub const COMFORT_HUMIDITY_RANGE: (f64, f64) = (40.0, 60.0);

/// Sound level above which a room is considered noisy.
pub const NOISE_LIMIT_DB: u32 = 50;

const BASE_SCORE: i32 = 100;
const HIGH_CO2_PENALTY: i32 = 30;
const ELEVATED_CO2_PENALTY: i32 = 15;
const TEMPERATURE_PENALTY: i32 = 20;
const HUMIDITY_PENALTY: i32 = 15;
const NOISE_PENALTY: i32 = 10;

/// Scores a room with independent, additive penalties and maps the result
/// to a comfort level. The score is not clamped.
pub fn score(room: &RoomTelemetry) -> ComfortScore {
    let score = BASE_SCORE - penalty(room);

    ComfortScore {
        score,
        level: comfort_level(score),
    }
}

pub fn comfort_level(score: i32) -> ComfortLevel {
    match score {
        s if s >= 80 => ComfortLevel::Excellent,
        s if s >= 60 => ComfortLevel::Good,
        s if s >= 40 => ComfortLevel::Average,
        _ => ComfortLevel::Poor,
    }
}

pub fn temperature_out_of_range(temperature: f64) -> bool {
    let (min, max) = COMFORT_TEMPERATURE_RANGE;
    temperature < min || temperature > max
}

pub fn humidity_out_of_range(humidity: f64) -> bool {
    let (min, max) = COMFORT_HUMIDITY_RANGE;
    humidity < min || humidity > max
}

pub fn too_noisy(noise: u32) -> bool {
    noise > NOISE_LIMIT_DB
}

fn penalty(room: &RoomTelemetry) -> i32 {
    let mut penalty = 0;

    if room.co2 > HIGH_CO2_PPM {
        penalty += HIGH_CO2_PENALTY;
    } else if room.co2 > crate::AIRING_THRESHOLD_PPM {
        penalty += ELEVATED_CO2_PENALTY;
    }
    if temperature_out_of_range(room.temperature) {
        penalty += TEMPERATURE_PENALTY;
    }
    if humidity_out_of_range(room.humidity) {
        penalty += HUMIDITY_PENALTY;
    }
    if too_noisy(room.noise) {
        penalty += NOISE_PENALTY;
    }

    penalty
}
