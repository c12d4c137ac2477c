//! Engine configuration loaded from TOML.

use derive_getters::Getters;
use herald_error::{ConfigError, HeraldResult};
use herald_workflow::{FlowMode, SchedulingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use typed_builder::TypedBuilder;

fn default_suggestion_delay_ms() -> u64 {
    2000
}

/// Configuration for the publish workflow engine.
///
/// Every field has a default matching the reference behavior, so an empty
/// file (or no file at all) yields a working engine.
#[derive(Debug, Clone, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct HeraldConfig {
    /// Which selection flow workflows run in.
    #[serde(default)]
    #[builder(default)]
    flow_mode: FlowMode,

    /// Scheduling constants: optimal-time offset and suggested slots.
    #[serde(default)]
    #[builder(default)]
    scheduling: SchedulingConfig,

    /// Artificial latency of the templated suggestion source, in
    /// milliseconds.
    #[serde(default = "default_suggestion_delay_ms")]
    #[builder(default = default_suggestion_delay_ms())]
    suggestion_delay_ms: u64,
}

impl Default for HeraldConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl HeraldConfig {
    /// Load engine configuration from a TOML file.
    #[tracing::instrument(skip(path))]
    pub fn from_file(path: impl AsRef<Path>) -> HeraldResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            herald_error::HeraldError::from(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            herald_error::HeraldError::from(ConfigError::new(format!(
                "Failed to parse config: {}",
                e
            )))
        })
    }

    /// The suggestion delay as a [`Duration`].
    pub fn suggestion_delay(&self) -> Duration {
        Duration::from_millis(self.suggestion_delay_ms)
    }
}
