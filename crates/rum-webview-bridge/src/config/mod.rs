//! Bridge configuration.

pub mod bridge_config;
pub mod web_log_config;

pub use bridge_config::BridgeConfig;
pub use web_log_config::WebLogConfig;
