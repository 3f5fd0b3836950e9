mod settings;

pub use settings::{Alerts, Logger, Server, Settings};
