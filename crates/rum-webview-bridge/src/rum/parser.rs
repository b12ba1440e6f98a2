//! RumEventParser: validates a web RUM body against its category schema.

use serde::de::DeserializeOwned;

use crate::errors::{BridgeError, BridgeResult};
use crate::types::RumEventCategory;

use super::model::ParsedRumEvent;

/// Parse `body` as an event of the declared `category`.
///
/// Unknown categories fail with `UnknownRumSubCategory` before the body is
/// looked at; anything that does not match the schema fails with
/// `StructuralParseFailure`.
pub fn parse(body: &str, category: &str) -> BridgeResult<ParsedRumEvent> {
    let category = category.parse::<RumEventCategory>()?;
    parse_category(body, category)
}

/// Parse `body` for an already classified category.
pub fn parse_category(body: &str, category: RumEventCategory) -> BridgeResult<ParsedRumEvent> {
    let event = match category {
        RumEventCategory::View => ParsedRumEvent::View(decode(body, category)?),
        RumEventCategory::Action => ParsedRumEvent::Action(decode(body, category)?),
        RumEventCategory::Resource => ParsedRumEvent::Resource(decode(body, category)?),
        RumEventCategory::Error => ParsedRumEvent::Error(decode(body, category)?),
        RumEventCategory::LongTask => ParsedRumEvent::LongTask(decode(body, category)?),
    };
    Ok(event)
}

fn decode<T: DeserializeOwned>(body: &str, category: RumEventCategory) -> BridgeResult<T> {
    serde_json::from_str(body).map_err(|e| BridgeError::parse_failure(category.as_str(), e))
}
