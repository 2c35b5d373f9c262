use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variables are read as `WEBHOOK_PORT`, `WEBHOOK_RELAY__CAPACITY`, ...
pub const ENV_PREFIX: &str = "WEBHOOK";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub relay: RelaySettings,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelaySettings {
    pub capacity: usize,
    pub poll_timeout_milliseconds: u64,
    pub max_payload_bytes: usize,
}

impl RelaySettings {
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_milliseconds)
    }
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            capacity: 50,
            poll_timeout_milliseconds: 100,
            max_payload_bytes: 1_048_576,
        }
    }
}

/// Reads settings from an optional `configuration.*` file and the `WEBHOOK_*`
/// environment. There is no default port, so startup fails without `WEBHOOK_PORT`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    build_configuration(Environment::with_prefix(ENV_PREFIX))
}

fn build_configuration(environment: Environment) -> Result<Settings, ConfigError> {
    let defaults = RelaySettings::default();

    Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("relay.capacity", defaults.capacity as u64)?
        .set_default(
            "relay.poll_timeout_milliseconds",
            defaults.poll_timeout_milliseconds,
        )?
        .set_default("relay.max_payload_bytes", defaults.max_payload_bytes as u64)?
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            environment
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(vars))
    }

    #[test]
    fn port_is_required() {
        let result = build_configuration(environment(&[]));

        assert!(result.is_err());
    }

    #[test]
    fn defaults_fill_everything_but_the_port() {
        let settings = build_configuration(environment(&[("WEBHOOK_PORT", "8081")])).unwrap();

        assert_eq!("0.0.0.0:8081", settings.address());
        assert_eq!(50, settings.relay.capacity);
        assert_eq!(Duration::from_millis(100), settings.relay.poll_timeout());
        assert_eq!(1_048_576, settings.relay.max_payload_bytes);
    }

    #[test]
    fn nested_relay_settings_can_be_overridden() {
        let settings = build_configuration(environment(&[
            ("WEBHOOK_PORT", "9000"),
            ("WEBHOOK_HOST", "localhost"),
            ("WEBHOOK_RELAY__CAPACITY", "5"),
            ("WEBHOOK_RELAY__POLL_TIMEOUT_MILLISECONDS", "250"),
        ]))
        .unwrap();

        assert_eq!("localhost:9000", settings.address());
        assert_eq!(5, settings.relay.capacity);
        assert_eq!(Duration::from_millis(250), settings.relay.poll_timeout());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let result = build_configuration(environment(&[("WEBHOOK_PORT", "not-a-port")]));

        assert!(result.is_err());
    }
}
