//! SessionContext: identity of the native RUM session at processing time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of the native RUM session identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Native RUM application id.
    pub application_id: String,
    /// Native RUM session id.
    pub session_id: String,
    /// Native view currently hosting the web view, if one is tracked.
    pub view_id: Option<String>,
    /// Name of the native view, if known.
    pub view_name: Option<String>,
}

impl SessionContext {
    pub fn new(application_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            session_id: session_id.into(),
            view_id: None,
            view_name: None,
        }
    }

    pub fn with_view(mut self, view_id: impl Into<String>, view_name: Option<String>) -> Self {
        self.view_id = Some(view_id.into());
        self.view_name = view_name;
        self
    }

    /// The native SDK reports the nil UUID until the first session starts.
    /// Non-UUID session ids are taken at face value.
    pub fn is_active(&self) -> bool {
        match Uuid::parse_str(&self.session_id) {
            Ok(id) => !id.is_nil(),
            Err(_) => !self.session_id.trim().is_empty(),
        }
    }
}
