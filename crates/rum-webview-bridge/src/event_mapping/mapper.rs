//! WebRumEventMapper: re-stamps a parsed web event into the native session.

use serde::Serialize;
use serde_json::Value;

use crate::rum::ParsedRumEvent;
use crate::types::SessionContext;

const VIEW_NAME_KEY: &str = "name";

/// A web RUM event carrying native session identity and server-aligned date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RemappedEvent(ParsedRumEvent);

impl RemappedEvent {
    pub fn event(&self) -> &ParsedRumEvent {
        &self.0
    }

    pub fn into_inner(self) -> ParsedRumEvent {
        self.0
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        self.0.to_json()
    }
}

/// Stateless mapper from web events to native-session events.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebRumEventMapper;

impl WebRumEventMapper {
    pub fn new() -> Self {
        Self
    }

    /// Overwrite application, session and view identity from `ctx` and shift
    /// `date` by `offset`. The web view is replaced as a whole (id and name)
    /// only when `ctx` has a native view; otherwise it is left as sent.
    pub fn map(&self, mut event: ParsedRumEvent, ctx: &SessionContext, offset: i64) -> RemappedEvent {
        let header = event.header_mut();
        header.date = header.date.saturating_add(offset);
        header.application.id = ctx.application_id.clone();
        header.session.id = ctx.session_id.clone();
        if let Some(view_id) = &ctx.view_id {
            header.view.id = view_id.clone();
            match &ctx.view_name {
                Some(view_name) => {
                    header
                        .view
                        .attributes
                        .insert(VIEW_NAME_KEY.to_string(), Value::String(view_name.clone()));
                }
                None => {
                    header.view.attributes.remove(VIEW_NAME_KEY);
                }
            }
        }
        RemappedEvent(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rum::parse;
    use serde_json::json;

    fn action_body() -> String {
        json!({
            "type": "action",
            "date": 1000,
            "application": { "id": "web-app" },
            "session": { "id": "web-session", "type": "user" },
            "view": { "id": "web-view", "url": "https://example.com/cart", "name": "cart" },
            "action": { "type": "click", "target": { "name": "Buy" } }
        })
        .to_string()
    }

    #[test]
    fn test_identity_and_date_rewritten() {
        let event = parse(&action_body(), "action").unwrap();
        let ctx = SessionContext::new("native-app", "native-session")
            .with_view("native-view", Some("CheckoutActivity".to_string()));

        let mapped = WebRumEventMapper::new().map(event, &ctx, 50);
        let header = mapped.event().header();
        assert_eq!(header.date, 1050);
        assert_eq!(header.application.id, "native-app");
        assert_eq!(header.session.id, "native-session");
        assert_eq!(header.view.id, "native-view");

        let json = mapped.to_json().unwrap();
        assert_eq!(json["view"]["name"], "CheckoutActivity");
        assert_eq!(json["view"]["url"], "https://example.com/cart");
        assert_eq!(json["session"]["type"], "user");
        assert_eq!(json["action"]["target"]["name"], "Buy");
        assert_eq!(json["type"], "action");
    }

    #[test]
    fn test_view_fields_kept_without_native_view() {
        let event = parse(&action_body(), "action").unwrap();
        let ctx = SessionContext::new("native-app", "native-session");

        let mapped = WebRumEventMapper::new().map(event, &ctx, -200);
        let json = mapped.to_json().unwrap();
        assert_eq!(json["date"], 800);
        assert_eq!(json["view"]["id"], "web-view");
        assert_eq!(json["view"]["name"], "cart");
    }

    #[test]
    fn test_native_view_without_name_drops_web_name() {
        let event = parse(&action_body(), "action").unwrap();
        let ctx = SessionContext::new("native-app", "native-session").with_view("native-view", None);

        let json = WebRumEventMapper::new().map(event, &ctx, 0).to_json().unwrap();
        assert_eq!(json["view"]["id"], "native-view");
        assert!(json["view"].get("name").is_none());
        assert_eq!(json["view"]["url"], "https://example.com/cart");
    }

    #[test]
    fn test_view_name_ignored_without_native_view_id() {
        let event = parse(&action_body(), "action").unwrap();
        let mut ctx = SessionContext::new("native-app", "native-session");
        ctx.view_name = Some("Orphan".to_string());

        let json = WebRumEventMapper::new().map(event, &ctx, 0).to_json().unwrap();
        assert_eq!(json["view"]["id"], "web-view");
        assert_eq!(json["view"]["name"], "cart");
    }

    #[test]
    fn test_date_saturates() {
        let body = action_body().replace("1000", &i64::MAX.to_string());
        let event = parse(&body, "action").unwrap();
        let ctx = SessionContext::new("a", "s");
        let mapped = WebRumEventMapper::new().map(event, &ctx, 10);
        assert_eq!(mapped.event().date(), i64::MAX);
    }
}
