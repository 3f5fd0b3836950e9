use std::env;

use campus_telemetry::{AlertRules, NoiseRule, TemperatureRule};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

/// Optional alert rules on top of the CO₂ rule, which is always on.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Alerts {
    #[serde(default)]
    pub noise: bool,
    #[serde(default)]
    pub temperature: bool,
}

impl Alerts {
    pub fn rules(&self) -> AlertRules {
        let mut rules = AlertRules::default();
        if self.noise {
            rules = rules.with(NoiseRule);
        }
        if self.temperature {
            rules = rules.with(TemperatureRule);
        }
        rules
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    #[serde(default)]
    pub alerts: Alerts,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("_"))
            .build()?
            .try_deserialize()
    }
}
