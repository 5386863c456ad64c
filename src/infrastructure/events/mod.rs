//! Export event sinks

mod json;
mod text;

pub use json::{event_to_json, JsonEventSink};
pub use text::TextEventSink;
