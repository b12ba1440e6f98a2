//! Typed RUM events as emitted by the web SDK.
//!
//! Only the fields the reconciler reads or rewrites are modeled. Everything
//! else is captured in the `attributes` maps and serialized back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::RumEventCategory;

/// Unmodeled JSON members, preserved verbatim.
pub type Attributes = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// Identity of the originating web page view. Offsets are keyed on it.
    pub id: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// Fields shared by every RUM event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RumEventHeader {
    /// Milliseconds since epoch, on the web content's clock.
    pub date: i64,
    pub application: Application,
    pub session: Session,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewEvent {
    #[serde(flatten)]
    pub header: RumEventHeader,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDetails {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    #[serde(flatten)]
    pub header: RumEventHeader,
    pub action: ActionDetails,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDetails {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEvent {
    #[serde(flatten)]
    pub header: RumEventHeader,
    pub resource: ResourceDetails,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    pub source: String,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    #[serde(flatten)]
    pub header: RumEventHeader,
    pub error: ErrorDetails,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTaskDetails {
    /// Duration in nanoseconds.
    pub duration: i64,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTaskEvent {
    #[serde(flatten)]
    pub header: RumEventHeader,
    pub long_task: LongTaskDetails,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// A web RUM event that passed schema validation for its category.
///
/// Serializes as the inner event (no variant tag): the category is already
/// carried by the event's own `type` member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedRumEvent {
    View(ViewEvent),
    Action(ActionEvent),
    Resource(ResourceEvent),
    Error(ErrorEvent),
    LongTask(LongTaskEvent),
}

impl ParsedRumEvent {
    pub fn category(&self) -> RumEventCategory {
        match self {
            Self::View(_) => RumEventCategory::View,
            Self::Action(_) => RumEventCategory::Action,
            Self::Resource(_) => RumEventCategory::Resource,
            Self::Error(_) => RumEventCategory::Error,
            Self::LongTask(_) => RumEventCategory::LongTask,
        }
    }

    pub fn header(&self) -> &RumEventHeader {
        match self {
            Self::View(e) => &e.header,
            Self::Action(e) => &e.header,
            Self::Resource(e) => &e.header,
            Self::Error(e) => &e.header,
            Self::LongTask(e) => &e.header,
        }
    }

    pub fn header_mut(&mut self) -> &mut RumEventHeader {
        match self {
            Self::View(e) => &mut e.header,
            Self::Action(e) => &mut e.header,
            Self::Resource(e) => &mut e.header,
            Self::Error(e) => &mut e.header,
            Self::LongTask(e) => &mut e.header,
        }
    }

    pub fn view_id(&self) -> &str {
        &self.header().view.id
    }

    pub fn date(&self) -> i64 {
        self.header().date
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
