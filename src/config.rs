//! Configuration management for the DAS1800 SCPI client
//!
//! Separates the connection settings used by [`crate::client::ScpiClient`]
//! from the values only the demo sequence needs.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Name of the optional TOML file looked up in the working directory.
pub const CONFIG_FILE: &str = "das_scpi";

/// Prefix of the environment overrides, e.g. `DAS_SCPI_HOST`.
pub const ENV_PREFIX: &str = "DAS_SCPI";

/// Complete configuration with client/demo separation
///
/// Both halves are read from the same flat key space.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub demo: DemoConfig,
}

/// Connection and pacing settings for a single client
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Instrument address (IPv4, IPv6 or hostname)
    pub host: String,

    /// SCPI port: 5025 for raw sockets, 23 for telnet framing
    pub port: u16,

    /// Bound on connection setup and on waiting for a query reply
    pub timeout_ms: u64,

    /// Pause after every command that expects no reply
    pub settle_delay_ms: u64,

    /// Pause after a query went unanswered, 0 disables it
    pub timeout_cooldown_ms: u64,
}

/// Values used by the DAS1800 demo sequence
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    /// Instrument-side path used by STORE and RECALL
    pub config_path: String,

    /// Time the instrument needs to load a recalled configuration
    pub recall_settle_secs: u64,

    /// Pause between the recording commands
    pub record_pause_ms: u64,

    pub record_file_name: String,
    pub memory_speed: u32,
    pub screen: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "192.168.0.92".to_string(),
            port: 5025,
            timeout_ms: 5_000,
            settle_delay_ms: 200,
            timeout_cooldown_ms: 10_000,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            config_path: "/internalDisk/my_config.acq_cfg".to_string(),
            recall_settle_secs: 30,
            record_pause_ms: 1_000,
            record_file_name: "My_record_file".to_string(),
            memory_speed: 1000,
            screen: "SCOPE".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `das_scpi.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(File::with_name(CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit TOML file with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let client = ClientConfig::default();
        let demo = DemoConfig::default();

        let settings = Config::builder()
            .set_default("host", client.host)?
            .set_default("port", i64::from(client.port))?
            .set_default("timeout_ms", client.timeout_ms as i64)?
            .set_default("settle_delay_ms", client.settle_delay_ms as i64)?
            .set_default("timeout_cooldown_ms", client.timeout_cooldown_ms as i64)?
            .set_default("config_path", demo.config_path)?
            .set_default("recall_settle_secs", demo.recall_settle_secs as i64)?
            .set_default("record_pause_ms", demo.record_pause_ms as i64)?
            .set_default("record_file_name", demo.record_file_name)?
            .set_default("memory_speed", i64::from(demo.memory_speed))?
            .set_default("screen", demo.screen)?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;

        // Numeric fields accept the string values read from the environment.
        let config = AppConfig {
            client: settings.clone().try_deserialize()?,
            demo: settings.try_deserialize()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Split into the client settings and the demo settings
    pub fn split(self) -> (ClientConfig, DemoConfig) {
        (self.client, self.demo)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        self.client.validate()?;

        if self.demo.config_path.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "config_path cannot be empty".into(),
            ));
        }

        Ok(())
    }
}

impl ClientConfig {
    /// Settings for `host:port` with every other value at its default
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Validation for the connection settings
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.host.trim().is_empty() {
            return Err(config::ConfigError::Message("host cannot be empty".into()));
        }

        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.timeout_ms == 0 {
            return Err(config::ConfigError::Message(
                "timeout_ms must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get host and port as a connectable address
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Cooldown after an unanswered query, `None` when disabled
    pub fn timeout_cooldown(&self) -> Option<Duration> {
        (self.timeout_cooldown_ms > 0).then(|| Duration::from_millis(self.timeout_cooldown_ms))
    }
}

impl DemoConfig {
    pub fn recall_settle(&self) -> Duration {
        Duration::from_secs(self.recall_settle_secs)
    }

    pub fn record_pause(&self) -> Duration {
        Duration::from_millis(self.record_pause_ms)
    }
}
