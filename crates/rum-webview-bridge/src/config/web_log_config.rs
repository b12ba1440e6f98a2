//! Web log forwarding settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebLogConfig {
    /// Forward the web SDK's own diagnostics (`internal_log`) unmodified.
    pub forward_internal_logs: bool,
    /// Appended to `ddtags` as `env:<env>`.
    pub env: Option<String>,
    /// Appended to `ddtags` as `version:<version>`.
    pub version: Option<String>,
}
