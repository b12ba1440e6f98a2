//! BridgeConfig: all bridge settings from the host's `[webview]` section.

use serde::{Deserialize, Serialize};

use crate::errors::{BridgeError, BridgeResult};
use crate::event_mapping::MAX_VIEW_TIME_OFFSETS_RETAIN;
use crate::logging::LogConfig;

use super::WebLogConfig;

/// Bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Hosts whose web content may feed the bridge. Echoed to the web SDK.
    pub allowed_hosts: Vec<String>,
    /// Number of web views whose time offset is retained.
    pub offset_cache_capacity: usize,
    /// Web log forwarding.
    pub logs: WebLogConfig,
    /// Diagnostics output, used by `logging::init_logging`.
    pub logging: LogConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: Vec::new(),
            offset_cache_capacity: MAX_VIEW_TIME_OFFSETS_RETAIN,
            logs: WebLogConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl BridgeConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> BridgeResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| BridgeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the bridge cannot run with.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.offset_cache_capacity == 0 {
            return Err(BridgeError::Config(
                "offset_cache_capacity must be > 0".to_string(),
            ));
        }
        if let Some(pos) = self.allowed_hosts.iter().position(|h| h.trim().is_empty()) {
            return Err(BridgeError::Config(format!(
                "allowed_hosts[{}] is empty",
                pos
            )));
        }
        Ok(())
    }
}
