//! Event type tags carried by the bridge envelope.

use std::fmt;
use std::str::FromStr;

use crate::errors::BridgeError;

/// The five RUM event categories the web SDK can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RumEventCategory {
    View,
    Action,
    Resource,
    Error,
    LongTask,
}

impl RumEventCategory {
    pub const ALL: [RumEventCategory; 5] = [
        Self::View,
        Self::Action,
        Self::Resource,
        Self::Error,
        Self::LongTask,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Action => "action",
            Self::Resource => "resource",
            Self::Error => "error",
            Self::LongTask => "long_task",
        }
    }
}

impl FromStr for RumEventCategory {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "action" => Ok(Self::Action),
            "resource" => Ok(Self::Resource),
            "error" => Ok(Self::Error),
            "long_task" => Ok(Self::LongTask),
            other => Err(BridgeError::UnknownRumSubCategory {
                category: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RumEventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log events the web SDK forwards next to RUM events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogEventType {
    /// A log written by the web application.
    User,
    /// A diagnostic emitted by the web SDK itself.
    Internal,
}

impl LogEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "log",
            Self::Internal => "internal_log",
        }
    }
}

/// Top-level classification of a bridged event: the "log vs RUM" split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebEventType {
    Log(LogEventType),
    Rum(RumEventCategory),
}

impl WebEventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Log(t) => t.as_str(),
            Self::Rum(c) => c.as_str(),
        }
    }
}

impl FromStr for WebEventType {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "log" => Ok(Self::Log(LogEventType::User)),
            "internal_log" => Ok(Self::Log(LogEventType::Internal)),
            other => other
                .parse::<RumEventCategory>()
                .map(Self::Rum)
                .map_err(|_| BridgeError::UnknownTopLevelCategory {
                    event_type: other.to_string(),
                }),
        }
    }
}

impl fmt::Display for WebEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rum_categories_parse() {
        for category in RumEventCategory::ALL {
            assert_eq!(category.as_str().parse::<RumEventCategory>().unwrap(), category);
            assert_eq!(
                category.as_str().parse::<WebEventType>().unwrap(),
                WebEventType::Rum(category)
            );
        }
    }

    #[test]
    fn test_log_types() {
        assert_eq!(
            "log".parse::<WebEventType>().unwrap(),
            WebEventType::Log(LogEventType::User)
        );
        assert_eq!(
            "internal_log".parse::<WebEventType>().unwrap(),
            WebEventType::Log(LogEventType::Internal)
        );
    }

    #[test]
    fn test_unknown_tags_map_to_distinct_errors() {
        assert!(matches!(
            "vital".parse::<RumEventCategory>(),
            Err(BridgeError::UnknownRumSubCategory { .. })
        ));
        assert!(matches!(
            "vital".parse::<WebEventType>(),
            Err(BridgeError::UnknownTopLevelCategory { .. })
        ));
        // Tags are case sensitive on the wire.
        assert!("View".parse::<WebEventType>().is_err());
    }
}
