//! Web RUM event model and category-aware parsing.

pub mod model;
pub mod parser;

pub use model::{
    ActionEvent, Application, ErrorEvent, LongTaskEvent, ParsedRumEvent, ResourceEvent,
    RumEventHeader, Session, View, ViewEvent,
};
pub use parser::{parse, parse_category};
