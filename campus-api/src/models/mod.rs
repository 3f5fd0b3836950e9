mod alert;
mod comfort;
mod module;
mod reservation;
mod room;
mod snapshot;
mod stats;

pub use alert::*;
pub use comfort::*;
pub use module::*;
pub use reservation::*;
pub use room::*;
pub use snapshot::*;
pub use stats::*;

use serde::{Deserialize, Serialize};

/// Backend identifiers are opaque strings (`_id` or `id` on the wire).
pub type Id = String;

/// A bag of raw readings. Every reading is optional on the wire and kept as
/// a float until normalization decides on the canonical unit type.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPayload {
    /// Temperature in Celsius
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Relative humidity percentage
    #[serde(default)]
    pub humidity: Option<f64>,
    /// CO₂ concentration in ppm
    #[serde(default)]
    pub co2: Option<f64>,
    /// Light intensity in lux
    #[serde(default)]
    pub brightness: Option<f64>,
    /// Sound level in dB
    #[serde(default)]
    pub noise: Option<f64>,
}
