use campus_api::models::{Alert, AlertKind, RoomTelemetry};
use time::OffsetDateTime;

use crate::comfort::{temperature_out_of_range, too_noisy};
use crate::view::needs_airing;

/// One independent alert condition over a room snapshot.
pub trait AlertRule: Send + Sync {
    fn kind(&self) -> AlertKind;

    fn triggered(&self, room: &RoomTelemetry) -> bool;

    fn message(&self, room: &RoomTelemetry) -> String;

    fn evaluate(&self, room: &RoomTelemetry, observed_at: OffsetDateTime) -> Option<Alert> {
        self.triggered(room).then(|| Alert {
            subject_id: room.room_id.clone(),
            subject_name: room.name.clone(),
            kind: self.kind(),
            message: self.message(room),
            observed_at,
        })
    }
}

/// Raised when a room needs airing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Co2Rule;

impl AlertRule for Co2Rule {
    fn kind(&self) -> AlertKind {
        AlertKind::Co2
    }

    fn triggered(&self, room: &RoomTelemetry) -> bool {
        needs_airing(room)
    }

    fn message(&self, room: &RoomTelemetry) -> String {
        format!("High CO₂ level ({} ppm)", room.co2)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoiseRule;

impl AlertRule for NoiseRule {
    fn kind(&self) -> AlertKind {
        AlertKind::Noise
    }

    fn triggered(&self, room: &RoomTelemetry) -> bool {
        too_noisy(room.noise)
    }

    fn message(&self, room: &RoomTelemetry) -> String {
        format!("High noise level ({} dB)", room.noise)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TemperatureRule;

impl AlertRule for TemperatureRule {
    fn kind(&self) -> AlertKind {
        AlertKind::Temperature
    }

    fn triggered(&self, room: &RoomTelemetry) -> bool {
        temperature_out_of_range(room.temperature)
    }

    fn message(&self, room: &RoomTelemetry) -> String {
        format!(
            "Temperature out of comfort range ({:.1} °C)",
            room.temperature
        )
    }
}

/// Ordered set of alert rules. The default set holds the CO₂ rule only.
pub struct AlertRules {
    rules: Vec<Box<dyn AlertRule>>,
}

impl Default for AlertRules {
    fn default() -> Self {
        Self::empty().with(Co2Rule)
    }
}

impl AlertRules {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with<R: AlertRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Alerts in room order, then rule order within a room.
    pub fn derive(&self, rooms: &[RoomTelemetry], observed_at: OffsetDateTime) -> Vec<Alert> {
        rooms
            .iter()
            .flat_map(|room| {
                self.rules
                    .iter()
                    .filter_map(move |rule| rule.evaluate(room, observed_at))
            })
            .collect()
    }
}

/// CO₂ alerts for every room that needs airing, in input order.
pub fn derive_alerts(rooms: &[RoomTelemetry], observed_at: OffsetDateTime) -> Vec<Alert> {
    AlertRules::default().derive(rooms, observed_at)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    const OBSERVED_AT: OffsetDateTime = datetime!(2025-12-10 10:42:15 UTC);

    fn telemetry(id: &str, co2: u32, temperature: f64, noise: u32) -> RoomTelemetry {
        RoomTelemetry {
            room_id: id.to_string(),
            name: format!("Salle {id}"),
            floor: 1,
            occupied: false,
            temperature,
            humidity: 50.0,
            co2,
            brightness: 300,
            noise,
            module_id: None,
        }
    }

    #[test]
    fn test_co2_alert_embeds_reading() {
        let alerts = derive_alerts(&[telemetry("1.4", 1200, 21.0, 30)], OBSERVED_AT);

        assert_eq!(
            alerts,
            vec![Alert {
                subject_id: "1.4".to_string(),
                subject_name: "Salle 1.4".to_string(),
                kind: AlertKind::Co2,
                message: "High CO₂ level (1200 ppm)".to_string(),
                observed_at: OBSERVED_AT,
            }]
        );
    }

    #[test]
    fn test_default_rules_keep_input_order() {
        let rooms = [
            telemetry("3.2", 1350, 21.0, 30),
            telemetry("1.1", 650, 21.0, 30),
            telemetry("1.2", 890, 21.0, 30),
            telemetry("2.1", 800, 21.0, 30),
        ];

        let ids: Vec<_> = derive_alerts(&rooms, OBSERVED_AT)
            .into_iter()
            .map(|alert| alert.subject_id)
            .collect();

        assert_eq!(ids, vec!["3.2", "1.2"]);
    }

    #[test]
    fn test_default_rules_ignore_noise_and_temperature() {
        let alerts = derive_alerts(&[telemetry("1.2", 600, 30.0, 80)], OBSERVED_AT);

        assert!(alerts.is_empty());
    }

    #[test]
    fn test_rules_are_independent_predicates() {
        let loud = telemetry("1.2", 600, 21.0, 58);
        let cold = telemetry("1.3", 600, 17.3, 30);

        assert!(NoiseRule.triggered(&loud));
        assert!(!NoiseRule.triggered(&cold));
        assert!(!Co2Rule.triggered(&loud));
        assert!(TemperatureRule.triggered(&cold));
        assert_eq!(NoiseRule.message(&loud), "High noise level (58 dB)");
        assert_eq!(
            TemperatureRule.message(&cold),
            "Temperature out of comfort range (17.3 °C)"
        );
    }

    #[test]
    fn test_extended_rules_order_within_room() {
        let rules = AlertRules::default().with(NoiseRule).with(TemperatureRule);
        let rooms = [
            telemetry("a", 1100, 26.0, 60),
            telemetry("b", 500, 21.0, 70),
        ];

        let kinds: Vec<_> = rules
            .derive(&rooms, OBSERVED_AT)
            .into_iter()
            .map(|alert| (alert.subject_id, alert.kind))
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("a".to_string(), AlertKind::Co2),
                ("a".to_string(), AlertKind::Noise),
                ("a".to_string(), AlertKind::Temperature),
                ("b".to_string(), AlertKind::Noise),
            ]
        );
    }

    #[test]
    fn test_empty_rules_raise_nothing() {
        let rules = AlertRules::empty();

        assert!(rules.is_empty());
        assert!(
            rules
                .derive(&[telemetry("a", 3000, 40.0, 100)], OBSERVED_AT)
                .is_empty()
        );
    }
}
